//! Timing scopes and the optional render debug log.
//!
//! Scopes report through `tracing` when `--perf` is on. Events passed to
//! [`log_event`] go to a plain-text file when a debug log path is set, so a
//! render can be inspected without touching the subscriber configuration.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static DEBUG_LOG_OPEN: AtomicBool = AtomicBool::new(false);
static DEBUG_LOG: LazyLock<Mutex<DebugLog>> = LazyLock::new(|| Mutex::new(DebugLog::closed()));

/// Guard that reports its lifetime when dropped.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: "iconmark::perf", scope = self.name, elapsed_ms, "timing");
        log_event(self.name, format!("{elapsed_ms:.3} ms"));
    }
}

#[derive(Debug)]
struct DebugLog {
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl DebugLog {
    fn closed() -> Self {
        Self {
            start: Instant::now(),
            writer: None,
        }
    }

    fn open(path: &Path) -> std::io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "iconmark render debug log start")?;
        writer.flush()?;
        Ok(Self {
            start: Instant::now(),
            writer: Some(writer),
        })
    }
}

fn debug_log() -> MutexGuard<'static, DebugLog> {
    DEBUG_LOG
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing debug events to `path`, or stop when `None`.
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let next = match path {
        Some(path) => DebugLog::open(path)?,
        None => DebugLog::closed(),
    };
    let mut log = debug_log();
    *log = next;
    DEBUG_LOG_OPEN.store(log.writer.is_some(), Ordering::Release);
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    DEBUG_LOG_OPEN.load(Ordering::Acquire)
}

/// Append one line to the debug log, if one is open.
///
/// The log lock is only taken while a log is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    if !is_debug_log_enabled() {
        return;
    }
    let mut log = debug_log();
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = log.writer.as_mut() {
        let _ = writeln!(writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    #[test]
    fn test_debug_log_records_events_until_closed() {
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("render.content", "fragments=2");
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());
        log_event("render.content", "after close");

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("iconmark render debug log start"));
        assert!(content.contains("render.content: fragments=2"));
        assert!(!content.contains("after close"));
    }

    #[test]
    fn test_decode_does_not_wait_on_debug_log() {
        let star = r#"<span data-icon="Star" data-color="" data-size="16">[Star]</span>"#;
        let _held = debug_log();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(crate::icon::decode(star));
        });
        let html = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("decode finished while the debug log lock was held");
        assert!(html.contains("<svg"));
    }
}
