//! Case folding, script swap and punctuation stages.

use super::pipeline::Stage;
use crate::register::Register;
use crate::rules::RuleSet;
use crate::unicode::{hiragana_to_katakana, katakana_to_hiragana};

/// Dash variants written as the long-vowel mark in kana output.
const DASHES: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
];

const LONG_VOWEL: char = 'ー';

/// Fold letter case into the register (lowercase for hiragana).
pub(crate) struct FoldCase(pub Register);

impl Stage for FoldCase {
    fn name(&self) -> &'static str {
        "fold_case"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        match self.0 {
            Register::Hiragana => out.extend(input.chars().flat_map(char::to_lowercase)),
            Register::Katakana => out.extend(input.chars().flat_map(char::to_uppercase)),
        }
    }
}

/// Move leftover kana of the other script into the register's script.
pub(crate) struct ScriptSwap(pub Register);

impl Stage for ScriptSwap {
    fn name(&self) -> &'static str {
        "script_swap"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        let swap = match self.0 {
            Register::Hiragana => katakana_to_hiragana,
            Register::Katakana => hiragana_to_katakana,
        };
        out.extend(input.chars().map(swap));
    }
}

/// Dashes become ー and apostrophes left over from `n'` are dropped.
pub(crate) struct KanaPunctuation;

impl Stage for KanaPunctuation {
    fn name(&self) -> &'static str {
        "kana_punctuation"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        for c in input.chars() {
            if DASHES.contains(&c) {
                out.push(LONG_VOWEL);
            } else if c != '\'' {
                out.push(c);
            }
        }
    }
}

/// ー becomes an ASCII hyphen.
pub(crate) struct RomajiPunctuation;

impl Stage for RomajiPunctuation {
    fn name(&self) -> &'static str {
        "romaji_punctuation"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        out.extend(input.chars().map(|c| if c == LONG_VOWEL { '-' } else { c }));
    }
}
