//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: journal writes that did not reach storage
//! - `warn`: unreadable storage recovered as an empty collection
//! - `info`: load/save summaries
//! - `debug`: screen transitions, backend file operations
//!
//! `RUST_LOG` overrides the level chosen with `-v`.
//!
//! Output goes to stderr, to a log file, or nowhere (see [`LogOutput`]).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// Append to this file, creating its directory if needed
    File(PathBuf),
    /// No subscriber is installed
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub output: LogOutput,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::WARN, output: LogOutput::Stderr, with_ansi: true }
    }
}

impl LogConfig {
    /// Map `-v` count to a level: none → warn, `-v` → info, `-vv` → debug, more → trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self { level, ..Default::default() }
    }

    /// Choose the destination; colors are only used on stderr
    #[must_use]
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.with_ansi = output == LogOutput::Stderr;
        self.output = output;
        self
    }
}

/// Install the global subscriber. Call once at startup.
///
/// A subscriber that is already installed (tests, embedding) is left in place.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_env_filter(config.level);

    match &config.output {
        LogOutput::Discard => {}
        LogOutput::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let layer = fmt::layer()
                .with_writer(SharedFileWriter::new(file))
                .with_ansi(false)
                .with_target(false);
            let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        }
        LogOutput::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        }
    }

    Ok(())
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    // Dependencies stay at warn
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,prompt_journal={}", level)))
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self { file: Arc::new(Mutex::new(file)) }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.file.lock().map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self.file.lock().map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard { file: Arc::clone(&self.file) }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(3).level, Level::TRACE);
        assert_eq!(LogConfig::from_verbosity(u8::MAX).level, Level::TRACE);
    }

    #[test]
    fn test_only_stderr_uses_ansi() {
        let config = LogConfig::default().with_output(LogOutput::File(PathBuf::from("/tmp/x.log")));
        assert!(!config.with_ansi);

        let config = config.with_output(LogOutput::Discard);
        assert!(!config.with_ansi);

        let config = config.with_output(LogOutput::Stderr);
        assert!(config.with_ansi);
        assert_eq!(config.output, LogOutput::Stderr);
    }

    #[test]
    fn test_init_logging_creates_log_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("app.log");
        let config = LogConfig::from_verbosity(1).with_output(LogOutput::File(path.clone()));

        init_logging(&config).unwrap();
        // Second call is tolerated
        init_logging(&config).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_shared_writer_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shared.log");
        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();
        let writer = SharedFileWriter::new(file);

        writer.make_writer().write_all(b"one\n").unwrap();
        writer.make_writer().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
