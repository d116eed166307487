use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use rhyme_core::resolver::PreloadReport;
use rhyme_core::{unknown_words, PhonemeResolver};
use tracing::debug;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

pub(crate) struct PreloadWork {
    pub text: String,
    pub generation: u64,
}

/// A finished preload. Analysis run after receiving this sees every
/// pronunciation the remote service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadResult {
    pub generation: u64,
    pub report: PreloadReport,
}

// ---------------------------------------------------------------------------
// PreloadWorker
// ---------------------------------------------------------------------------

pub(crate) struct PreloadWorker {
    tx: mpsc::Sender<PreloadWork>,
    rx: Mutex<mpsc::Receiver<PreloadResult>>,
    gen: Arc<AtomicU64>,
}

impl PreloadWorker {
    pub fn new(resolver: Arc<PhonemeResolver>) -> Self {
        let gen = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<PreloadWork>();
        let (result_tx, result_rx) = mpsc::channel::<PreloadResult>();
        {
            let gen = Arc::clone(&gen);
            thread::Builder::new()
                .name("rhyme-preload".into())
                .spawn(move || preload_worker(work_rx, result_tx, gen, resolver))
                .expect("failed to spawn preload worker");
        }
        Self {
            tx: work_tx,
            rx: Mutex::new(result_rx),
            gen,
        }
    }

    /// Queue `text` for preloading; returns its generation.
    pub fn submit(&self, text: String) -> u64 {
        let gen = self.gen.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.tx.send(PreloadWork {
            text,
            generation: gen,
        });
        gen
    }

    pub fn invalidate(&self) {
        self.gen.fetch_add(1, Ordering::SeqCst);
    }

    pub fn try_recv(&self) -> Option<PreloadResult> {
        let rx = self.rx.lock().ok()?;
        rx.try_recv().ok()
    }

    /// Block until the next result arrives or the worker is gone.
    pub fn recv(&self) -> Option<PreloadResult> {
        let rx = self.rx.lock().ok()?;
        rx.recv().ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn preload_worker(
    rx: mpsc::Receiver<PreloadWork>,
    tx: mpsc::Sender<PreloadResult>,
    gen: Arc<AtomicU64>,
    resolver: Arc<PhonemeResolver>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple texts queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let words = unknown_words(&latest.text, &resolver);
        let report = resolver.preload(&words);
        debug!(generation = latest.generation, ?report, "preload finished");

        // Fetched words stay cached either way; only current text is reported.
        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let _ = tx.send(PreloadResult {
            generation: latest.generation,
            report,
        });
    }
}
