use serde::Serialize;

use kana_core::unicode::{
    contains_hiragana, contains_kanji, contains_katakana, extract_kanji, is_hiragana, is_kanji,
    is_katakana,
};

/// Script predicates for one input.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Classification {
    pub text: String,
    pub is_hiragana: bool,
    pub is_katakana: bool,
    pub is_kanji: bool,
    pub contains_hiragana: bool,
    pub contains_katakana: bool,
    pub contains_kanji: bool,
}

impl Classification {
    pub fn of(text: &str) -> Self {
        Classification {
            text: text.to_string(),
            is_hiragana: is_hiragana(text),
            is_katakana: is_katakana(text),
            is_kanji: is_kanji(text),
            contains_hiragana: contains_hiragana(text),
            contains_katakana: contains_katakana(text),
            contains_kanji: contains_kanji(text),
        }
    }

    fn format_text(&self) -> String {
        let flags = [
            ("is_hiragana", self.is_hiragana),
            ("is_katakana", self.is_katakana),
            ("is_kanji", self.is_kanji),
            ("contains_hiragana", self.contains_hiragana),
            ("contains_katakana", self.contains_katakana),
            ("contains_kanji", self.contains_kanji),
        ];
        let set: Vec<&str> = flags
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect();
        if set.is_empty() {
            format!("{}\t-", self.text)
        } else {
            format!("{}\t{}", self.text, set.join(" "))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KanjiReport {
    pub text: String,
    pub kanji: Vec<String>,
}

pub fn classify_cmd(inputs: &[String], json: bool) {
    for text in inputs {
        let c = Classification::of(text);
        if json {
            println!(
                "{}",
                serde_json::to_string(&c).expect("JSON serialization failed")
            );
        } else {
            println!("{}", c.format_text());
        }
    }
}

pub fn kanji_cmd(inputs: &[String], json: bool) {
    for text in inputs {
        let report = KanjiReport {
            text: text.clone(),
            kanji: extract_kanji(text),
        };
        if json {
            println!(
                "{}",
                serde_json::to_string(&report).expect("JSON serialization failed")
            );
        } else {
            println!("{}\t{}", report.text, report.kanji.join(" "));
        }
    }
}
