use kana_core::rules::RuleSet;

/// Conversion selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Romaji { cased: bool, phonetic: bool },
    Hiragana,
    Katakana,
    Kana,
}

pub fn convert_text(rules: &RuleSet, target: Target, text: &str) -> String {
    match target {
        Target::Romaji {
            cased: true,
            phonetic,
        } => rules.to_romaji_cased(text, phonetic),
        Target::Romaji {
            cased: false,
            phonetic,
        } => rules.to_romaji(text, phonetic),
        Target::Hiragana => rules.to_hiragana(text),
        Target::Katakana => rules.to_katakana(text),
        Target::Kana => rules.to_kana(text),
    }
}

pub fn convert_cmd(rules: &RuleSet, target: Target, inputs: &[String]) {
    for text in inputs {
        println!("{}", convert_text(rules, target, text));
    }
}
