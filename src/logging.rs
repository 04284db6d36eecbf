use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use chrono::Local;

use crate::{DESKTOP_LOG_DIR_ENV, DESKTOP_LOG_FILE};

/// Directory for shell state when no better location is known. The logger
/// runs before the Tauri path resolver exists, so it cannot use it.
pub(crate) fn fallback_state_dir() -> PathBuf {
    home::home_dir()
        .map(|dir| dir.join(".zulip-desktop"))
        .unwrap_or_else(env::temp_dir)
}

pub(crate) fn resolve_desktop_log_path(override_dir: Option<&str>, log_file: &str) -> PathBuf {
    if let Some(dir) = override_dir {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join(log_file);
        }
    }

    fallback_state_dir().join(log_file)
}

pub(crate) fn append_desktop_log(message: &str) {
    let override_dir = env::var(DESKTOP_LOG_DIR_ENV).ok();
    let path = resolve_desktop_log_path(override_dir.as_deref(), DESKTOP_LOG_FILE);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let line = format!(
        "[{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        message
    );
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = file.write_all(line.as_bytes());
    }
}
