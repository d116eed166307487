//! Pronouncing dictionaries.
//!
//! `CmuDictionary` stores word → pronunciation mappings parsed from CMU
//! pronouncing-dictionary text or a compiled binary file. `FallbackTable`
//! holds hand-authored pronunciations for slang the dictionary lacks.

mod cmu;
mod cmu_io;
mod composite;
mod fallback;
#[cfg(test)]
mod tests;

pub use cmu::CmuDictionary;
pub use composite::CompositeDictionary;
pub use fallback::FallbackTable;

use std::io;

use crate::phoneme::Pronunciation;

/// Error type for loading and saving dictionaries.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected RHDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Read-only word → pronunciation lookup.
///
/// Keys are lowercase. Implementations do no normalization beyond that;
/// apostrophe and punctuation handling belongs to the resolver.
pub trait Dictionary: Send + Sync {
    fn lookup(&self, word: &str) -> Option<Pronunciation>;

    /// Number of distinct words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
