//! Character-level Unicode classification for Japanese text.
//!
//! Script membership follows the Unicode `Script` property rather than whole
//! blocks, so shared marks such as ー (U+30FC), ・ (U+30FB) and the voicing
//! marks ゛゜ belong to no script here.

/// Hiragana script: U+3041..U+3096, U+309D..U+309F and the historic kana in
/// the Kana Supplement / Extended-A blocks.
pub fn is_hiragana_char(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3096}'
        | '\u{309D}'..='\u{309F}'
        | '\u{1B001}'..='\u{1B11F}'
        | '\u{1B132}'
        | '\u{1B150}'..='\u{1B152}'
        | '\u{1F200}')
}

/// Katakana script, including the phonetic extensions, circled and squared
/// katakana, and halfwidth forms. Excludes ー and ・.
pub fn is_katakana_char(c: char) -> bool {
    matches!(c,
        '\u{30A1}'..='\u{30FA}'
        | '\u{30FD}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{32D0}'..='\u{32FE}'
        | '\u{3300}'..='\u{3357}'
        | '\u{FF66}'..='\u{FF6F}'
        | '\u{FF71}'..='\u{FF9D}'
        | '\u{1AFF0}'..='\u{1AFFE}'
        | '\u{1B000}'
        | '\u{1B120}'..='\u{1B122}'
        | '\u{1B155}'
        | '\u{1B164}'..='\u{1B167}')
}

pub fn is_kanji_char(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2E99}'
        | '\u{2E9B}'..='\u{2EF3}'
        | '\u{2F00}'..='\u{2FD5}'
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FA6D}'
        | '\u{FA70}'..='\u{FAD9}'
        | '\u{16FF0}'..='\u{16FF1}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBE0}'
        | '\u{2F800}'..='\u{2FA1D}'
        | '\u{30000}'..='\u{323AF}')
}

/// Any scalar in the Hiragana or Katakana blocks (U+3040..U+30FF).
///
/// Rule-table keys may contain ー or the voicing marks, which the script
/// predicates reject.
pub(crate) fn is_kana_block(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

/// Replace a single hiragana with its katakana counterpart.
/// Anything outside ぁ..ゖ and ゝ..ゞ is returned unchanged.
pub fn hiragana_to_katakana(c: char) -> char {
    match c {
        'ぁ'..='ゖ' | 'ゝ'..='ゞ' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Replace a single katakana with its hiragana counterpart.
/// Anything outside ァ..ヶ and ヽ..ヾ is returned unchanged.
pub fn katakana_to_hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' | 'ヽ'..='ヾ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana_str(s: &str) -> String {
    s.chars().map(hiragana_to_katakana).collect()
}

pub fn katakana_to_hiragana_str(s: &str) -> String {
    s.chars().map(katakana_to_hiragana).collect()
}

/// Separators ignored by [`is_hiragana`] and [`is_katakana`].
const KANA_SEPARATORS: &[char] = &[' ', '\u{3000}', 'ー'];
/// Separators ignored by [`is_kanji`].
const KANJI_SEPARATORS: &[char] = &[' ', '\u{3000}'];

/// True when `s` has at least one non-separator scalar and all of them
/// satisfy `pred`.
fn all_in_script(s: &str, separators: &[char], pred: fn(char) -> bool) -> bool {
    let mut rest = s.chars().filter(|c| !separators.contains(c)).peekable();
    rest.peek().is_some() && rest.all(pred)
}

/// Every scalar is hiragana, ignoring spaces and ー.
pub fn is_hiragana(s: &str) -> bool {
    all_in_script(s, KANA_SEPARATORS, is_hiragana_char)
}

/// Every scalar is katakana, ignoring spaces and ー.
pub fn is_katakana(s: &str) -> bool {
    all_in_script(s, KANA_SEPARATORS, is_katakana_char)
}

/// Every scalar is kanji, ignoring spaces.
pub fn is_kanji(s: &str) -> bool {
    all_in_script(s, KANJI_SEPARATORS, is_kanji_char)
}

pub fn contains_hiragana(s: &str) -> bool {
    s.chars().any(is_hiragana_char)
}

pub fn contains_katakana(s: &str) -> bool {
    s.chars().any(is_katakana_char)
}

pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(is_kanji_char)
}

/// Every kanji in `s`, in order of appearance. Repeats are kept.
pub fn extract_kanji(s: &str) -> Vec<String> {
    s.chars()
        .filter(|&c| is_kanji_char(c))
        .map(String::from)
        .collect()
}
