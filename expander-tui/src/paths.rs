//! Where the config file and logs live.
//!
//! Platform directories come from `directories` (XDG on Linux).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "expander";
const APPLICATION: &str = "expander";

const CONFIG_FILE: &str = "config.toml";
const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const KEEP_ARCHIVED_LOGS: usize = 10;

/// Log file used when no platform cache directory is available.
pub const FALLBACK_LOG_FILE: &str = "expander-tui.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// `~/.config/expander/config.toml` on Linux.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// `~/.cache/expander/latest.log` on Linux.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Runs before the logger is installed, so failures are ignored.
pub fn rotate_logs() {
    let Some(dirs) = project_dirs() else { return };
    let _ = rotate(dirs.cache_dir(), Local::now(), KEEP_ARCHIVED_LOGS);
}

/// Rename `latest.log` in `dir` to a timestamped name and keep the newest
/// `keep` archives. Returns the archive path, if there was a log to archive.
fn rotate(dir: &Path, now: DateTime<Local>, keep: usize) -> io::Result<Option<PathBuf>> {
    let latest = dir.join(LATEST_LOG);
    let archived = if latest.exists() {
        let path = dir.join(format!("{}.log", now.format("%Y%m%d_%H%M%S")));
        fs::rename(&latest, &path)?;
        Some(path)
    } else {
        None
    };

    prune(dir, keep)?;
    Ok(archived)
}

/// Archive names are timestamps, so name order is age order.
fn prune(dir: &Path, keep: usize) -> io::Result<()> {
    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in archives.drain(..excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}
