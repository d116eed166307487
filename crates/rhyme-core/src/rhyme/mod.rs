//! Pairwise rhyme decision.
//!
//! [`rhymes`] is symmetric: every pre-check and every rule treats its two
//! arguments alike.

mod profile;
mod rules;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::extract::WordOccurrence;
use crate::text::is_excluded;

use profile::Profile;
use rules::RULES;

/// Outcome of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    /// Ends the chain with "no rhyme".
    Reject,
    /// Defer to the next rule.
    Abstain,
}

/// Why a pair never reached the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "word", rename_all = "kebab-case")]
pub enum SkipReason {
    SameWord,
    Excluded(String),
    NoPhonemes(String),
    NoStressedVowel(String),
}

/// How a pair was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RhymeExplanation {
    Matched { rule: &'static str },
    Vetoed { rule: &'static str },
    NoRule,
    Skipped { skip: SkipReason },
}

impl RhymeExplanation {
    pub fn rhymes(&self) -> bool {
        matches!(self, RhymeExplanation::Matched { .. })
    }
}

impl fmt::Display for RhymeExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhymeExplanation::Matched { rule } => write!(f, "rhyme ({rule})"),
            RhymeExplanation::Vetoed { rule } => write!(f, "no rhyme: vetoed by {rule}"),
            RhymeExplanation::NoRule => write!(f, "no rhyme: no rule matched"),
            RhymeExplanation::Skipped { skip } => match skip {
                SkipReason::SameWord => write!(f, "no rhyme: same word"),
                SkipReason::Excluded(w) => write!(f, "no rhyme: {w:?} is excluded"),
                SkipReason::NoPhonemes(w) => write!(f, "no rhyme: no pronunciation for {w:?}"),
                SkipReason::NoStressedVowel(w) => {
                    write!(f, "no rhyme: no stressed vowel in {w:?}")
                }
            },
        }
    }
}

pub fn rhymes(a: &WordOccurrence, b: &WordOccurrence) -> bool {
    explain(a, b).rhymes()
}

/// Run the pre-checks and the rule chain, reporting what decided the pair.
pub fn explain(a: &WordOccurrence, b: &WordOccurrence) -> RhymeExplanation {
    let skipped = |skip| RhymeExplanation::Skipped { skip };
    if a.normalized == b.normalized {
        return skipped(SkipReason::SameWord);
    }
    for o in [a, b] {
        if is_excluded(&o.normalized) {
            return skipped(SkipReason::Excluded(o.normalized.clone()));
        }
    }
    let (Some(pa), Some(pb)) = (&a.phonemes, &b.phonemes) else {
        let missing = if a.phonemes.is_none() { a } else { b };
        return skipped(SkipReason::NoPhonemes(missing.normalized.clone()));
    };
    let Some(fa) = Profile::new(pa, a.is_phrase()) else {
        return skipped(SkipReason::NoStressedVowel(a.normalized.clone()));
    };
    let Some(fb) = Profile::new(pb, b.is_phrase()) else {
        return skipped(SkipReason::NoStressedVowel(b.normalized.clone()));
    };

    for rule in &RULES {
        match (rule.eval)(&fa, &fb) {
            Verdict::Match => {
                debug!(a = %a.normalized, b = %b.normalized, rule = rule.name, "rhyme");
                return RhymeExplanation::Matched { rule: rule.name };
            }
            Verdict::Reject => return RhymeExplanation::Vetoed { rule: rule.name },
            Verdict::Abstain => {}
        }
    }
    RhymeExplanation::NoRule
}

/// Rule names in evaluation order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|r| r.name)
}
