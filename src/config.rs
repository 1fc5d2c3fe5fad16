use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming the data directory (read through clap)
pub const DATA_DIR_ENV: &str = "PROMPT_JOURNAL_DIR";
/// Log file written inside the data directory while the TUI runs
pub const LOG_FILE_NAME: &str = "prompt-journal.log";
/// Directory created under the platform data directory
const APP_DIR_NAME: &str = "prompt-journal";

/// Runtime configuration
///
/// Precedence for the data directory: `--data-dir` flag, then
/// `PROMPT_JOURNAL_DIR`, then `dirs::data_dir()/prompt-journal`. The first two
/// arrive already merged by clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Keep journals in memory only; nothing touches the disk
    pub ephemeral: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn resolve(data_dir: Option<PathBuf>, ephemeral: bool, verbosity: u8) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self { data_dir, ephemeral, verbosity })
    }

    pub fn log_file(&self) -> PathBuf {
        log_file_in(&self.data_dir)
    }
}

fn log_file_in(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Platform data directory for the app (e.g. `~/.local/share/prompt-journal`)
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
