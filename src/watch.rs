//! File system watching for continuous TOC refresh.
//!
//! Watches one markdown file and blocks until a relevant change lands,
//! so `--watch` can re-run the inject pipeline after every save.

use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

/// Manages watching a single file with debounced change notification.
pub struct FileWatcher {
    // Held for its Drop side effect; events arrive through `receiver`.
    _watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    path: PathBuf,
    /// Debounce: ignore events within this duration of the last refresh
    last_refresh: Instant,
    debounce_duration: Duration,
}

impl FileWatcher {
    /// Start watching `path` (non-recursive, it's a single file).
    pub fn new(path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            path: path.to_path_buf(),
            last_refresh: Instant::now(),
            debounce_duration: Duration::from_millis(250),
        })
    }

    /// Block until the watched file changes.
    ///
    /// Returns false when the watch backend goes away and no further
    /// events can arrive.
    pub fn wait_for_change(&mut self) -> bool {
        loop {
            match self.receiver.recv() {
                Ok(Ok(event)) => {
                    if !self.is_relevant_event(&event) {
                        continue;
                    }
                    let now = Instant::now();
                    if now.duration_since(self.last_refresh) >= self.debounce_duration {
                        self.last_refresh = now;
                        return true;
                    }
                }
                Ok(Err(e)) => {
                    log::warn!("watch error: {e}");
                }
                Err(_) => return false,
            }
        }
    }

    /// Mark that a refresh just happened (for debouncing our own writes).
    pub fn mark_refreshed(&mut self) {
        self.last_refresh = Instant::now();
    }

    /// Check if an event is relevant for triggering a refresh.
    fn is_relevant_event(&self, event: &Event) -> bool {
        if !event.paths.iter().any(|p| p == &self.path) {
            return false;
        }

        matches!(
            event.kind,
            EventKind::Modify(ModifyKind::Data(_))
                | EventKind::Modify(ModifyKind::Any)
                | EventKind::Access(AccessKind::Close(AccessMode::Write))
                | EventKind::Create(_)
        )
    }
}
