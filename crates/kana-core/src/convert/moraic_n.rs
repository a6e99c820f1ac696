//! Moraic n (ん) disambiguation.
//!
//! In romaji an `n` that ends a syllable is ambiguous before a vowel or `y`:
//! `kani` is かに, `kan'i` is かんい. Both directions run before the table
//! lookup and need a one-scalar lookahead.

use super::pipeline::Stage;
use crate::register::Register;
use crate::rules::RuleSet;

/// Kana that would fuse with a preceding `n` when read back from romaji.
const NASAL_FOLLOWERS: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', 'や', 'ゆ', 'よ', 'ア', 'イ', 'ウ', 'エ', 'オ', 'ヤ', 'ユ', 'ヨ',
];

/// Romaji side: resolve every `n` that cannot start a mora to ん.
///
/// - `n'` is always ん and the apostrophe is consumed.
/// - `n` before a vowel or `y` of the same register is left for the table.
/// - any other `n` (end of input, consonant, a second `n`) is ん.
pub(crate) struct NasalFromRomaji(pub Register);

impl Stage for NasalFromRomaji {
    fn name(&self) -> &'static str {
        "nasal_from_romaji"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        let register = self.0;
        let n = register.letter('n');
        let y = register.letter('y');
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if c != n {
                out.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('\'') => {
                    chars.next();
                    out.push(register.moraic_n());
                }
                Some(next) if register.is_vowel(next) || next == y => out.push(c),
                _ => out.push(register.moraic_n()),
            }
        }
    }
}

/// Kana side: mark ん before a vowel or y-glide kana with an apostrophe so
/// the romaji reads back unambiguously.
pub(crate) struct NasalApostrophe;

impl Stage for NasalApostrophe {
    fn name(&self) -> &'static str {
        "nasal_apostrophe"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            out.push(c);
            let is_nasal = c == Register::Hiragana.moraic_n() || c == Register::Katakana.moraic_n();
            if is_nasal && chars.peek().is_some_and(|next| NASAL_FOLLOWERS.contains(next)) {
                out.push('\'');
            }
        }
    }
}
