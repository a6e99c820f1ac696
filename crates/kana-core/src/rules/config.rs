use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_kana_block;

/// Raw rule dataset as written in TOML.
///
/// Romaji keys are lowercase, kana keys hiragana; the katakana register is
/// derived when the tables are built.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub romaji: BTreeMap<String, String>,
    #[serde(default)]
    pub romaji_hiragana: BTreeMap<String, String>,
    #[serde(default)]
    pub romaji_katakana: BTreeMap<String, String>,
    pub kana: BTreeMap<String, String>,
    #[serde(default)]
    pub kana_literal: BTreeMap<String, String>,
    #[serde(default)]
    pub kana_phonetic: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("romaji key must be lowercase ASCII in [{table}]: {key}")]
    InvalidRomajiKey { table: &'static str, key: String },
    #[error("kana key contains non-kana characters in [{table}]: {key}")]
    InvalidKanaKey { table: &'static str, key: String },
    #[error("empty value for key {key} in [{table}]")]
    EmptyValue { table: &'static str, key: String },
    #[error("duplicate pattern: {0}")]
    DuplicatePattern(String),
    #[error("rule set already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a rule dataset.
pub fn parse_rules_toml(toml_str: &str) -> Result<RuleConfig, RuleConfigError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;

    if config.romaji.is_empty() {
        return Err(RuleConfigError::Empty("romaji"));
    }
    if config.kana.is_empty() {
        return Err(RuleConfigError::Empty("kana"));
    }

    for (table, map) in [
        ("romaji", &config.romaji),
        ("romaji_hiragana", &config.romaji_hiragana),
        ("romaji_katakana", &config.romaji_katakana),
    ] {
        for (key, value) in map {
            if key.is_empty() {
                return Err(RuleConfigError::EmptyKey(table));
            }
            if !key.is_ascii() || key.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(RuleConfigError::InvalidRomajiKey {
                    table,
                    key: key.clone(),
                });
            }
            check_value(table, key, value)?;
        }
    }

    for (table, map) in [
        ("kana", &config.kana),
        ("kana_literal", &config.kana_literal),
        ("kana_phonetic", &config.kana_phonetic),
    ] {
        for (key, value) in map {
            if key.is_empty() {
                return Err(RuleConfigError::EmptyKey(table));
            }
            if !key.chars().all(is_kana_block) {
                return Err(RuleConfigError::InvalidKanaKey {
                    table,
                    key: key.clone(),
                });
            }
            check_value(table, key, value)?;
        }
    }

    Ok(config)
}

fn check_value(table: &'static str, key: &str, value: &str) -> Result<(), RuleConfigError> {
    if value.is_empty() {
        return Err(RuleConfigError::EmptyValue {
            table,
            key: key.to_string(),
        });
    }
    Ok(())
}
