//! Kana ⇄ romaji transliteration and Japanese script classification.
//!
//! Conversions are longest-match rewrite pipelines over rule tables loaded
//! from an embedded TOML dataset. See [`rules::RuleSet`] for loading a
//! custom dataset.

pub mod convert;
mod register;
pub mod rules;
pub mod unicode;

pub use convert::{to_hiragana, to_kana, to_katakana, to_romaji, to_romaji_cased};
pub use register::Register;
pub use unicode::{
    contains_hiragana, contains_kanji, contains_katakana, extract_kanji, hiragana_to_katakana,
    is_hiragana, is_kanji, is_katakana, katakana_to_hiragana,
};
