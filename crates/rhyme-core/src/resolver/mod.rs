//! Word → pronunciation resolution with fallback chain.
//!
//! Synchronous lookup order:
//! 1. pronouncing dictionary (word as given, then with apostrophes stripped)
//! 2. curated fallback table
//! 3. pronunciations previously fetched from the remote service
//!
//! The remote service itself is only reached through `preload` and
//! `resolve_or_fetch`, never from `resolve`, so analysis never blocks on
//! network I/O. A word the remote has not answered yet is simply a miss.

mod cache;
mod preload;
mod remote;

pub use cache::RemoteCache;
pub use preload::PreloadReport;
pub use remote::{G2pClient, HttpG2pClient, RemoteError};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::dict::{Dictionary, FallbackTable};
use crate::phoneme::Pronunciation;
use crate::text::normalize_word;

/// Which layer answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Dictionary,
    Fallback,
    RemoteCache,
    Remote,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Dictionary => "dictionary",
            Source::Fallback => "fallback",
            Source::RemoteCache => "remote-cache",
            Source::Remote => "remote",
        }
    }
}

pub struct PhonemeResolver {
    dict: Arc<dyn Dictionary>,
    fallback: &'static FallbackTable,
    cache: Arc<RemoteCache>,
    client: Option<Arc<dyn G2pClient>>,
}

impl PhonemeResolver {
    /// Resolver over `dict` and the built-in fallback table, with no remote
    /// service.
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self {
            dict,
            fallback: FallbackTable::builtin(),
            cache: Arc::new(RemoteCache::new()),
            client: None,
        }
    }

    pub fn with_client(mut self, client: Arc<dyn G2pClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Share a cache with other resolvers (e.g. a process-wide one).
    pub fn with_cache(mut self, cache: Arc<RemoteCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<RemoteCache> {
        &self.cache
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Synchronous lookup. Never performs network I/O.
    pub fn resolve(&self, word: &str) -> Option<Pronunciation> {
        self.resolve_with_source(word).map(|(p, _)| p)
    }

    pub fn resolve_with_source(&self, word: &str) -> Option<(Pronunciation, Source)> {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }
        if let Some(p) = self.dict.lookup(&lower) {
            return Some((p, Source::Dictionary));
        }
        if lower.contains('\'') {
            if let Some(p) = self.dict.lookup(&lower.replace('\'', "")) {
                return Some((p, Source::Dictionary));
            }
        }

        let key = normalize_word(&lower);
        if key.is_empty() {
            return None;
        }
        if let Some(p) = self.fallback.lookup(&key) {
            debug!(word = %key, "fallback pronunciation");
            return Some((p, Source::Fallback));
        }
        if let Some(p) = self.cache.get(&key) {
            return Some((p, Source::RemoteCache));
        }
        None
    }

    /// Synchronous lookup, then a blocking remote fetch on a miss.
    ///
    /// Remote failures are logged and reported as a miss.
    pub fn resolve_or_fetch(&self, word: &str) -> Option<Pronunciation> {
        self.resolve_or_fetch_with_source(word).map(|(p, _)| p)
    }

    /// Like [`resolve_or_fetch`](Self::resolve_or_fetch); a pronunciation
    /// fetched by this call is reported as [`Source::Remote`].
    pub fn resolve_or_fetch_with_source(&self, word: &str) -> Option<(Pronunciation, Source)> {
        if let Some(found) = self.resolve_with_source(word) {
            return Some(found);
        }
        let key = normalize_word(word);
        if key.is_empty() {
            return None;
        }
        self.fetch_into_cache(&key).map(|p| (p, Source::Remote))
    }

    /// Fetch one normalized word from the remote service and cache it.
    fn fetch_into_cache(&self, key: &str) -> Option<Pronunciation> {
        let client = self.client.as_ref()?;
        match client.fetch(key) {
            Ok(pron) => {
                debug!(word = %key, phonemes = %pron, "remote pronunciation");
                self.cache.insert(key, pron.clone());
                Some(pron)
            }
            Err(e) => {
                warn!(error = %e, "remote G2P lookup failed");
                None
            }
        }
    }
}
