//! Rhyme engine facade.
//!
//! `RhymeEngine` owns a phoneme resolver and, when a remote G2P service is
//! configured, a background worker that warms the resolver's cache. Analysis
//! itself is synchronous and never waits on the network: callers run
//! `analyze`, submit the text for preloading, and analyze again once
//! `try_recv_preload` reports that new pronunciations arrived.

mod async_worker;
mod trace_init;

use std::sync::Arc;

pub use async_worker::PreloadResult;
pub use rhyme_core::dict::{CmuDictionary, DictError, Dictionary};
pub use rhyme_core::resolver::{G2pClient, HttpG2pClient, PreloadReport};
pub use rhyme_core::rhyme::RhymeExplanation;
pub use rhyme_core::{GroupMember, PhonemeResolver, RhymeGroup};
pub use trace_init::init_tracing;

use async_worker::PreloadWorker;

pub struct RhymeEngine {
    resolver: Arc<PhonemeResolver>,
    worker: Option<PreloadWorker>,
}

impl RhymeEngine {
    /// Engine over `dict`. A `client` enables background preloading.
    pub fn new(dict: Arc<dyn Dictionary>, client: Option<Arc<dyn G2pClient>>) -> Self {
        let mut resolver = PhonemeResolver::new(dict);
        if let Some(client) = client {
            resolver = resolver.with_client(client);
        }
        let resolver = Arc::new(resolver);
        let worker = resolver
            .has_client()
            .then(|| PreloadWorker::new(Arc::clone(&resolver)));
        Self { resolver, worker }
    }

    pub fn resolver(&self) -> &PhonemeResolver {
        &self.resolver
    }

    pub fn has_remote(&self) -> bool {
        self.worker.is_some()
    }

    pub fn analyze(&self, text: &str) -> Vec<RhymeGroup> {
        rhyme_core::detect_rhymes(text, &self.resolver)
    }

    pub fn explain(&self, a: &str, b: &str) -> RhymeExplanation {
        rhyme_core::explain_words(a, b, &self.resolver)
    }

    /// Fetch pronunciations for the unknown words of `text` in the
    /// background. Supersedes any preload still queued. Returns the
    /// generation to match against results, or `None` without a remote.
    pub fn submit_preload(&self, text: String) -> Option<u64> {
        self.worker.as_ref().map(|w| w.submit(text))
    }

    /// Drop the result of any preload in flight.
    pub fn invalidate_preload(&self) {
        if let Some(w) = &self.worker {
            w.invalidate();
        }
    }

    pub fn try_recv_preload(&self) -> Option<PreloadResult> {
        self.worker.as_ref()?.try_recv()
    }

    /// Block until the current preload finishes.
    pub fn wait_preload(&self) -> Option<PreloadResult> {
        self.worker.as_ref()?.recv()
    }
}
