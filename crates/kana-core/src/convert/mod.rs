//! Kana ⇄ romaji conversion pipelines.
//!
//! Each public conversion is a fixed list of whole-string stages run over
//! the rule tables of a [`RuleSet`]. The free functions use the global rule
//! set; the `RuleSet` methods let callers bring their own.

mod gemination;
mod moraic_n;
mod normalize;
mod pipeline;

#[cfg(test)]
mod tests;

use crate::register::Register::{Hiragana, Katakana};
use crate::rules::RuleSet;

use gemination::{DoubledConsonant, SmallTsu};
use moraic_n::{NasalApostrophe, NasalFromRomaji};
use normalize::{FoldCase, KanaPunctuation, RomajiPunctuation, ScriptSwap};
use pipeline::{KanaTable, Pipeline, RomajiTable};

static ROMAJI_CASED_LITERAL: Pipeline = Pipeline {
    name: "to_romaji_cased",
    stages: &[
        &NasalApostrophe,
        &KanaTable { phonetic: false },
        &SmallTsu,
        &RomajiPunctuation,
    ],
};

static ROMAJI_CASED_PHONETIC: Pipeline = Pipeline {
    name: "to_romaji_cased",
    stages: &[
        &NasalApostrophe,
        &KanaTable { phonetic: true },
        &SmallTsu,
        &RomajiPunctuation,
    ],
};

static ROMAJI_LITERAL: Pipeline = Pipeline {
    name: "to_romaji",
    stages: &[
        &NasalApostrophe,
        &KanaTable { phonetic: false },
        &SmallTsu,
        &RomajiPunctuation,
        &FoldCase(Hiragana),
    ],
};

static ROMAJI_PHONETIC: Pipeline = Pipeline {
    name: "to_romaji",
    stages: &[
        &NasalApostrophe,
        &KanaTable { phonetic: true },
        &SmallTsu,
        &RomajiPunctuation,
        &FoldCase(Hiragana),
    ],
};

static TO_HIRAGANA: Pipeline = Pipeline {
    name: "to_hiragana",
    stages: &[
        &FoldCase(Hiragana),
        &NasalFromRomaji(Hiragana),
        &DoubledConsonant(Hiragana),
        &RomajiTable(Hiragana),
        &ScriptSwap(Hiragana),
        &KanaPunctuation,
    ],
};

static TO_KATAKANA: Pipeline = Pipeline {
    name: "to_katakana",
    stages: &[
        &FoldCase(Katakana),
        &NasalFromRomaji(Katakana),
        &DoubledConsonant(Katakana),
        &RomajiTable(Katakana),
        &ScriptSwap(Katakana),
        &KanaPunctuation,
    ],
};

// Every register-sensitive stage only touches letters of its own case, so
// running both registers in sequence converts each run by its own case.
static TO_KANA: Pipeline = Pipeline {
    name: "to_kana",
    stages: &[
        &NasalFromRomaji(Hiragana),
        &NasalFromRomaji(Katakana),
        &DoubledConsonant(Hiragana),
        &DoubledConsonant(Katakana),
        &RomajiTable(Hiragana),
        &RomajiTable(Katakana),
        &KanaPunctuation,
    ],
};

impl RuleSet {
    /// Kana to lowercase romaji. `phonetic` spells ぢ/づ as `ji`/`zu`
    /// instead of `di`/`du`.
    pub fn to_romaji(&self, s: &str, phonetic: bool) -> String {
        let pipeline = if phonetic {
            &ROMAJI_PHONETIC
        } else {
            &ROMAJI_LITERAL
        };
        pipeline.run(self, s)
    }

    /// Kana to romaji with hiragana in lowercase and katakana in uppercase.
    pub fn to_romaji_cased(&self, s: &str, phonetic: bool) -> String {
        let pipeline = if phonetic {
            &ROMAJI_CASED_PHONETIC
        } else {
            &ROMAJI_CASED_LITERAL
        };
        pipeline.run(self, s)
    }

    /// Romaji to hiragana, ignoring letter case. Katakana in the input is
    /// converted to hiragana.
    pub fn to_hiragana(&self, s: &str) -> String {
        TO_HIRAGANA.run(self, s)
    }

    /// Romaji to katakana, ignoring letter case. Hiragana in the input is
    /// converted to katakana.
    pub fn to_katakana(&self, s: &str) -> String {
        TO_KATAKANA.run(self, s)
    }

    /// Lowercase romaji to hiragana and uppercase romaji to katakana.
    ///
    /// A syllable whose case changes midway is converted only partially:
    /// `OnaJi` becomes `オなJい`.
    pub fn to_kana(&self, s: &str) -> String {
        TO_KANA.run(self, s)
    }
}

/// Kana to lowercase romaji using the global rule set.
pub fn to_romaji(s: &str, phonetic: bool) -> String {
    RuleSet::global().to_romaji(s, phonetic)
}

/// Kana to cased romaji using the global rule set.
pub fn to_romaji_cased(s: &str, phonetic: bool) -> String {
    RuleSet::global().to_romaji_cased(s, phonetic)
}

pub fn to_hiragana(s: &str) -> String {
    RuleSet::global().to_hiragana(s)
}

pub fn to_katakana(s: &str) -> String {
    RuleSet::global().to_katakana(s)
}

pub fn to_kana(s: &str) -> String {
    RuleSet::global().to_kana(s)
}
