use std::collections::HashSet;
use std::thread;

use tracing::{debug, debug_span};

use super::PhonemeResolver;
use crate::settings::settings;
use crate::text::normalize_word;

/// Outcome of a preload pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Distinct non-empty words asked for.
    pub requested: usize,
    /// Already resolvable or cached; not fetched.
    pub skipped: usize,
    pub fetched: usize,
    pub failed: usize,
}

impl PhonemeResolver {
    /// Warm the remote cache for `words`, using `remote.batch_size` from
    /// settings.
    pub fn preload<S: AsRef<str>>(&self, words: &[S]) -> PreloadReport {
        self.preload_batched(words, settings().remote.batch_size)
    }

    /// Warm the remote cache for `words`.
    ///
    /// Words already resolvable or cached are skipped and duplicates are
    /// fetched once. Missing words are fetched in batches of `batch_size`,
    /// concurrently within a batch, one batch at a time. Without a client
    /// every missing word counts as failed.
    pub fn preload_batched<S: AsRef<str>>(&self, words: &[S], batch_size: usize) -> PreloadReport {
        let mut report = PreloadReport::default();
        let mut seen = HashSet::new();
        let mut missing: Vec<String> = Vec::new();
        for word in words {
            let key = normalize_word(word.as_ref());
            if key.chars().count() < 2 || !seen.insert(key.clone()) {
                continue;
            }
            report.requested += 1;
            if self.resolve(&key).is_some() || self.cache.contains(&key) {
                report.skipped += 1;
            } else {
                missing.push(key);
            }
        }
        if missing.is_empty() {
            return report;
        }

        let _span = debug_span!("preload", missing = missing.len()).entered();
        if self.client.is_none() {
            report.failed = missing.len();
            return report;
        }

        for batch in missing.chunks(batch_size.max(1)) {
            let found = thread::scope(|scope| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|word| scope.spawn(move || self.fetch_into_cache(word).is_some()))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or(false))
                    .filter(|ok| *ok)
                    .count()
            });
            report.fetched += found;
            report.failed += batch.len() - found;
        }
        debug!(fetched = report.fetched, failed = report.failed);
        report
    }
}
