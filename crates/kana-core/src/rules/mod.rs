//! Transliteration rule tables.
//!
//! A [`RuleSet`] holds every longest-match table the conversion pipelines
//! need: romaji → kana for each register, and kana → romaji in both the
//! literal and the phonetic spelling of the ぢ/づ family.

mod config;
mod set;
mod table;
mod trie;

pub use config::{parse_rules_toml, RuleConfig, RuleConfigError};
pub use set::RuleSet;
pub use trie::{RuleMatch, RuleTable, TrieLookupResult};

/// Returns the embedded default rule TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
