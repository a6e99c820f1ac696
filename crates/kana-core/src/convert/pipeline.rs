use std::mem;

use tracing::{debug_span, trace};

use crate::register::Register;
use crate::rules::RuleSet;

/// A whole-string rewrite step. Reads the previous stage's output and
/// appends its own output to `out`, which is empty on entry.
pub(crate) trait Stage {
    fn name(&self) -> &'static str;
    fn apply(&self, rules: &RuleSet, input: &str, out: &mut String);
}

/// Fixed, ordered list of stages behind one public conversion.
pub(crate) struct Pipeline {
    pub name: &'static str,
    pub stages: &'static [&'static (dyn Stage + Sync)],
}

impl Pipeline {
    /// Run every stage in order. Intermediate text lives in two call-local
    /// buffers that trade places after each stage.
    pub(crate) fn run(&self, rules: &RuleSet, input: &str) -> String {
        let _span = debug_span!("pipeline", op = self.name, input_len = input.len()).entered();
        let mut current = input.to_string();
        let mut next = String::with_capacity(input.len() * 2);
        for stage in self.stages {
            next.clear();
            stage.apply(rules, &current, &mut next);
            trace!(stage = stage.name(), output = %next);
            mem::swap(&mut current, &mut next);
        }
        current
    }
}

/// Romaji → kana table lookup for one register.
pub(crate) struct RomajiTable(pub Register);

impl Stage for RomajiTable {
    fn name(&self) -> &'static str {
        match self.0 {
            Register::Hiragana => "romaji_table_hiragana",
            Register::Katakana => "romaji_table_katakana",
        }
    }

    fn apply(&self, rules: &RuleSet, input: &str, out: &mut String) {
        rules.romaji_table(self.0).rewrite_into(input, out);
    }
}

/// Kana → cased romaji table lookup.
pub(crate) struct KanaTable {
    pub phonetic: bool,
}

impl Stage for KanaTable {
    fn name(&self) -> &'static str {
        if self.phonetic {
            "kana_table_phonetic"
        } else {
            "kana_table_literal"
        }
    }

    fn apply(&self, rules: &RuleSet, input: &str, out: &mut String) {
        rules.kana_table(self.phonetic).rewrite_into(input, out);
    }
}
