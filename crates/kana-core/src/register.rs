//! Case register shared by every register-sensitive stage.
//!
//! Lowercase romaji belongs to the hiragana register and uppercase romaji to
//! the katakana register. Stages take a `Register` explicitly instead of
//! re-inferring it from letter case.

use crate::unicode::{hiragana_to_katakana_str, is_hiragana_char, katakana_to_hiragana_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Lowercase romaji, hiragana output.
    Hiragana,
    /// Uppercase romaji, katakana output.
    Katakana,
}

impl Register {
    pub const ALL: [Register; 2] = [Register::Hiragana, Register::Katakana];

    pub(crate) fn index(self) -> usize {
        match self {
            Register::Hiragana => 0,
            Register::Katakana => 1,
        }
    }

    /// Register of an ASCII letter, `None` for anything else.
    pub fn of_letter(c: char) -> Option<Register> {
        if c.is_ascii_lowercase() {
            Some(Register::Hiragana)
        } else if c.is_ascii_uppercase() {
            Some(Register::Katakana)
        } else {
            None
        }
    }

    /// Register of a kana scalar by script, `None` outside both blocks.
    pub fn of_kana(c: char) -> Option<Register> {
        if is_hiragana_char(c) {
            Some(Register::Hiragana)
        } else if ('\u{30A0}'..='\u{30FF}').contains(&c) {
            Some(Register::Katakana)
        } else {
            None
        }
    }

    /// Whether `c` is an ASCII letter written in this register's case.
    pub fn is_letter(self, c: char) -> bool {
        Register::of_letter(c) == Some(self)
    }

    pub fn is_vowel(self, c: char) -> bool {
        self.is_letter(c) && matches!(c.to_ascii_lowercase(), 'a' | 'i' | 'u' | 'e' | 'o')
    }

    pub fn is_consonant(self, c: char) -> bool {
        self.is_letter(c) && !self.is_vowel(c)
    }

    /// Write an ASCII letter in this register's case.
    pub fn letter(self, c: char) -> char {
        match self {
            Register::Hiragana => c.to_ascii_lowercase(),
            Register::Katakana => c.to_ascii_uppercase(),
        }
    }

    /// Full Unicode case fold of `s` into this register.
    pub fn fold_case(self, s: &str) -> String {
        match self {
            Register::Hiragana => s.to_lowercase(),
            Register::Katakana => s.to_uppercase(),
        }
    }

    /// Move every swappable kana in `s` into this register's script.
    pub fn to_script(self, s: &str) -> String {
        match self {
            Register::Hiragana => katakana_to_hiragana_str(s),
            Register::Katakana => hiragana_to_katakana_str(s),
        }
    }

    pub fn small_tsu(self) -> char {
        match self {
            Register::Hiragana => 'っ',
            Register::Katakana => 'ッ',
        }
    }

    pub fn moraic_n(self) -> char {
        match self {
            Register::Hiragana => 'ん',
            Register::Katakana => 'ン',
        }
    }
}
