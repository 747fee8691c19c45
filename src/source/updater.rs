//! The shared streaming updater: one background thread pumps every
//! playing, auto-update source's queue instead of the vendor's
//! one-thread-per-playing-stream model (§4.2.4, §9 Design Notes).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::Mutex;

use super::SourceShared;

/// Matches the vendor updater thread's `_seal_sleep(50)` poll cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) struct SharedUpdater {
    watched: Arc<Mutex<Vec<Weak<SourceShared>>>>,
    shutdown: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl SharedUpdater {
    pub(crate) fn spawn() -> Self {
        let watched: Arc<Mutex<Vec<Weak<SourceShared>>>> = Arc::new(Mutex::new(Vec::new()));
        let shutdown = Arc::new(AtomicBool::new(false));
        let last_error = Arc::new(Mutex::new(None));

        let watched_loop = watched.clone();
        let shutdown_loop = shutdown.clone();
        let last_error_loop = last_error.clone();

        let handle = std::thread::Builder::new()
            .name("seal-updater".into())
            .spawn(move || run(watched_loop, shutdown_loop, last_error_loop))
            .expect("spawning the shared updater thread");

        Self {
            watched,
            shutdown,
            last_error,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Registers a source to be watched while it is playing with auto
    /// update on. The watch set holds only weak references: a `Source`
    /// dropped by its owner disappears from the set on the next tick
    /// without any explicit deregistration call, mirroring the original's
    /// `wait4updater` cleanup but without a thread per source.
    pub(crate) fn watch(&self, shared: &Arc<SourceShared>) {
        let mut watched = self.watched.lock();
        if watched.iter().any(|w| Weak::ptr_eq(w, &Arc::downgrade(shared))) {
            return;
        }
        watched.retain(|w| w.strong_count() > 0);
        watched.push(Arc::downgrade(shared));
    }

    /// Last error observed while polling any watched source, if any. A
    /// source that errors is dropped from the watch set (mirroring the
    /// original's updater thread returning and exiting on error) but the
    /// error itself is not silently discarded: this is the additive,
    /// pollable slot SPEC_FULL.md §9 decided on.
    pub(crate) fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub(crate) fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.lock().take() {
            let _ = handle.join();
        }
    }
}

fn run(
    watched: Arc<Mutex<Vec<Weak<SourceShared>>>>,
    shutdown: Arc<AtomicBool>,
    last_error: Arc<Mutex<Option<String>>>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        let mut dead = Vec::new();
        {
            let sources = watched.lock();
            for (i, weak) in sources.iter().enumerate() {
                let Some(shared) = weak.upgrade() else {
                    dead.push(i);
                    continue;
                };
                if !shared.wants_auto_update() {
                    dead.push(i);
                    continue;
                }
                if let Err(err) = shared.poll_streaming() {
                    tracing::warn!(
                        source_id = shared.id(),
                        error = %err,
                        "shared updater stopped watching a source"
                    );
                    *last_error.lock() = Some(err.to_string());
                    dead.push(i);
                }
            }
        }
        if !dead.is_empty() {
            let mut sources = watched.lock();
            for &i in dead.iter().rev() {
                if i < sources.len() {
                    sources.remove(i);
                }
            }
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
