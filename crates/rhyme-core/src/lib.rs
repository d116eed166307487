//! Phonetic rhyme detection for lyrics and verse.
//!
//! Text flows one way: [`extract`](extract::extract) turns lines into word
//! occurrences with pronunciations from a [`PhonemeResolver`], the
//! [`graph`] links occurrences that [`rhyme`], and [`group`] turns connected
//! components into ordered, coloured [`RhymeGroup`]s.

pub mod analysis;
pub mod dict;
pub mod extract;
pub mod graph;
pub mod group;
pub mod phoneme;
pub mod resolver;
pub mod rhyme;
pub mod settings;
pub mod text;

#[cfg(test)]
pub(crate) mod testutil;

pub use analysis::{detect_rhymes, explain_words, unknown_words};
pub use group::{GroupMember, RhymeGroup};
pub use resolver::PhonemeResolver;
