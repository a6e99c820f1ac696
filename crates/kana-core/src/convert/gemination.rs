//! Gemination: doubled consonant letters in romaji ⇄ small tsu in kana.

use super::pipeline::Stage;
use crate::register::Register;
use crate::rules::RuleSet;

/// Romaji side: the first of two identical consonant letters (other than
/// `n`) becomes small tsu, as does `t` before `ch`. The second letter stays
/// so the table can spell the following mora.
pub(crate) struct DoubledConsonant(pub Register);

impl Stage for DoubledConsonant {
    fn name(&self) -> &'static str {
        "doubled_consonant"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        let register = self.0;
        let n = register.letter('n');
        let t = register.letter('t');
        let mut chars = input.chars();
        while let Some(c) = chars.next() {
            let mut ahead = chars.clone();
            let geminate = register.is_consonant(c)
                && c != n
                && match ahead.next() {
                    Some(next) if next == c => true,
                    Some(next) if c == t && next == register.letter('c') => {
                        ahead.next() == Some(register.letter('h'))
                    }
                    _ => false,
                };
            out.push(if geminate { register.small_tsu() } else { c });
        }
    }
}

/// Kana side, after the table: each run of small tsu takes the first
/// consonant letter of the romaji that follows it (`t` for `ch`). With no
/// consonant after it the run is written `xx`.
pub(crate) struct SmallTsu;

fn small_tsu_register(c: char) -> Option<Register> {
    Register::of_kana(c).filter(|r| r.small_tsu() == c)
}

impl Stage for SmallTsu {
    fn name(&self) -> &'static str {
        "small_tsu"
    }

    fn apply(&self, _rules: &RuleSet, input: &str, out: &mut String) {
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            let Some(register) = small_tsu_register(c) else {
                out.push(c);
                continue;
            };
            while chars.next_if(|&next| small_tsu_register(next).is_some()).is_some() {}

            let consonant = chars.peek().copied().and_then(|next| {
                Register::of_letter(next)
                    .filter(|r| r.is_consonant(next))
                    .map(|r| if r.letter('c') == next { r.letter('t') } else { next })
            });
            match consonant {
                Some(letter) => out.push(letter),
                None => {
                    let x = register.letter('x');
                    out.push(x);
                    out.push(x);
                }
            }
        }
    }
}
