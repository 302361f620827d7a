//! Re-render on data file changes.
//!
//! Editors save the data file in bursts (write, rename, chmod), so change
//! notifications are debounced before a reload is signalled.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Collapses a burst of change signals into one reload.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    last_change: Option<Instant>,
}

impl Debouncer {
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_change: None,
        }
    }

    pub fn record(&mut self, at: Instant) {
        self.last_change = Some(at);
    }

    /// True once no change has been recorded for the quiet period.
    /// Resets after firing.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_change {
            Some(at) if now.saturating_duration_since(at) >= self.quiet => {
                self.last_change = None;
                true
            }
            _ => false,
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }
}

/// Watches the page data file for modifications.
pub struct DataFileWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    file: PathBuf,
    debouncer: Debouncer,
}

impl DataFileWatcher {
    /// # Errors
    /// Returns an error if the parent directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, quiet: Duration) -> notify::Result<Self> {
        let file = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        // Watch the directory: atomic saves replace the file's inode.
        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(file = %file.display(), dir = %dir.display(), "watching page data");

        Ok(Self {
            _watcher: watcher,
            events,
            file,
            debouncer: Debouncer::new(quiet),
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Drain pending notifications; true when a debounced reload is due.
    pub fn poll(&mut self) -> bool {
        let now = Instant::now();
        while let Ok(event) = self.events.try_recv() {
            match event {
                Ok(event) if self.touches_file(&event) => self.debouncer.record(now),
                Ok(_) => {}
                Err(err) => tracing::warn!(%err, "file watch error"),
            }
        }
        self.debouncer.ready(now)
    }

    fn touches_file(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        let name = self.file.file_name();
        event
            .paths
            .iter()
            .any(|path| path == &self.file || (name.is_some() && path.file_name() == name))
    }
}
