use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::phoneme::Pronunciation;

/// Pronunciations fetched from the remote G2P service.
///
/// Append-only with insert-if-absent semantics. The same word always
/// resolves to the same value, so racing writers are harmless and a
/// poisoned lock is recovered rather than propagated.
#[derive(Default)]
pub struct RemoteCache {
    entries: RwLock<HashMap<String, Pronunciation>>,
}

impl RemoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<Pronunciation> {
        let map = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        map.get(word).cloned()
    }

    pub fn contains(&self, word: &str) -> bool {
        let map = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        map.contains_key(word)
    }

    /// Insert unless already present. Returns `true` if newly added.
    pub fn insert(&self, word: &str, pron: Pronunciation) -> bool {
        let mut map = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(word) {
            return false;
        }
        map.insert(word.to_string(), pron);
        true
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent() {
        let cache = RemoteCache::new();
        let first = Pronunciation::parse("G L IH1 Z IY0").unwrap();
        let second = Pronunciation::parse("G L AY1 Z").unwrap();
        assert!(cache.insert("glizzy", first.clone()));
        assert!(!cache.insert("glizzy", second));
        assert_eq!(cache.get("glizzy"), Some(first));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss() {
        let cache = RemoteCache::new();
        assert!(cache.get("nope").is_none());
        assert!(!cache.contains("nope"));
        assert!(cache.is_empty());
    }
}
