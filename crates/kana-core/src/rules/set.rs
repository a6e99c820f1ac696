use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_rules_toml, RuleConfig, RuleConfigError};
use super::table::DEFAULT_TOML;
use super::trie::RuleTable;
use crate::register::Register;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<RuleSet> = OnceLock::new();

/// Every rule table used by the conversion pipelines.
#[derive(Debug)]
pub struct RuleSet {
    /// Romaji → kana, indexed by [`Register`].
    romaji: [RuleTable; 2],
    kana_literal: RuleTable,
    kana_phonetic: RuleTable,
}

impl RuleSet {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RuleConfigError> {
        // Build eagerly so duplicate patterns surface here, not in global().
        RuleSet::from_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(RuleConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RuleConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global rule set.
    pub fn global() -> &'static RuleSet {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RuleSet::from_toml(toml_str).expect("rule TOML must be valid")
        })
    }

    /// Build an independent rule set from a TOML dataset.
    pub fn from_toml(toml_str: &str) -> Result<Self, RuleConfigError> {
        let config = parse_rules_toml(toml_str)?;
        RuleSet::from_config(&config)
    }

    pub fn from_config(config: &RuleConfig) -> Result<Self, RuleConfigError> {
        let romaji = [
            build_romaji(config, Register::Hiragana, &config.romaji_hiragana)?,
            build_romaji(config, Register::Katakana, &config.romaji_katakana)?,
        ];
        let kana_literal = build_kana(config, &config.kana_literal)?;
        let kana_phonetic = build_kana(config, &config.kana_phonetic)?;
        debug!(
            romaji_hiragana = romaji[0].len(),
            romaji_katakana = romaji[1].len(),
            kana_literal = kana_literal.len(),
            kana_phonetic = kana_phonetic.len(),
            "rule tables built"
        );
        Ok(RuleSet {
            romaji,
            kana_literal,
            kana_phonetic,
        })
    }

    /// Romaji → kana table for one register. Keys are in the register's
    /// letter case, values in its script.
    pub fn romaji_table(&self, register: Register) -> &RuleTable {
        &self.romaji[register.index()]
    }

    /// Kana → romaji table covering both scripts: hiragana keys yield
    /// lowercase romaji, katakana keys uppercase.
    pub fn kana_table(&self, phonetic: bool) -> &RuleTable {
        if phonetic {
            &self.kana_phonetic
        } else {
            &self.kana_literal
        }
    }
}

/// Shared spellings plus the register's overrides, which win over shared
/// entries with the same key.
fn build_romaji(
    config: &RuleConfig,
    register: Register,
    overrides: &BTreeMap<String, String>,
) -> Result<RuleTable, RuleConfigError> {
    let shared = config
        .romaji
        .iter()
        .filter(|(key, _)| !overrides.contains_key(*key));
    RuleTable::build(
        shared
            .chain(overrides)
            .map(|(key, value)| (register.fold_case(key), register.to_script(value))),
    )
}

fn build_kana(
    config: &RuleConfig,
    variant: &BTreeMap<String, String>,
) -> Result<RuleTable, RuleConfigError> {
    let base = config
        .kana
        .iter()
        .filter(|(key, _)| !variant.contains_key(*key));
    let mut entries = Vec::with_capacity((config.kana.len() + variant.len()) * 2);
    for (key, value) in base.chain(variant) {
        for register in Register::ALL {
            entries.push((register.to_script(key), register.fold_case(value)));
        }
    }
    RuleTable::build(entries)
}
