//! Durable key-value store for window geometry, plus the typed view the
//! window controller reads at creation time.
//!
//! The store is one JSON object file. Every write is a merge under a single
//! lock: read-modify-write of the in-memory map, then a full rewrite of the
//! file. Last write wins per key, in event delivery order. A missing or
//! unreadable file means "no saved state" and callers fall back to defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tauri::{AppHandle, Manager};

use crate::{
    logging, CONFIG_FILE_ENV, CONFIG_FILE_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

pub(crate) const WIDTH_KEY: &str = "width";
pub(crate) const HEIGHT_KEY: &str = "height";
pub(crate) const X_KEY: &str = "x";
pub(crate) const Y_KEY: &str = "y";
pub(crate) const MAXIMIZE_KEY: &str = "maximize";

/// Geometry and maximize flag of the main window as last observed. Absent
/// position means the OS picks the initial placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WindowState {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) x: Option<i32>,
    pub(crate) y: Option<i32>,
    pub(crate) maximized: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ConfigStore {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
}

impl ConfigStore {
    pub(crate) fn open(path: PathBuf) -> Self {
        let values = read_values(&path);
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<Value> {
        self.values.lock().ok()?.get(key).cloned()
    }

    pub(crate) fn set(&self, key: &str, value: Value) -> Result<(), String> {
        let mut entries = Map::new();
        entries.insert(key.to_string(), value);
        self.set_many(entries)
    }

    /// Bulk merge. The lock covers the whole read-modify-write so a persist
    /// arriving from a nested event handler cannot interleave mid-merge.
    pub(crate) fn set_many(&self, entries: Map<String, Value>) -> Result<(), String> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| "window configuration lock poisoned".to_string())?;
        for (key, value) in entries {
            values.insert(key, value);
        }
        write_values(&self.path, &values)
    }
}

fn read_values(path: &Path) -> Map<String, Value> {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            // Unparseable or non-object state file: start over with defaults.
            _ => Map::new(),
        },
        Err(_) => Map::new(),
    }
}

fn write_values(path: &Path, values: &Map<String, Value>) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create config directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let serialized = serde_json::to_string_pretty(&Value::Object(values.clone()))
        .map_err(|error| format!("Failed to serialize window configuration: {error}"))?;
    fs::write(path, serialized).map_err(|error| {
        format!(
            "Failed to write window configuration {}: {}",
            path.display(),
            error
        )
    })
}

pub(crate) fn default_config_path(app_handle: &AppHandle) -> PathBuf {
    if let Ok(custom) = env::var(CONFIG_FILE_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match app_handle.path().app_config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE_NAME),
        Err(_) => logging::fallback_state_dir().join(CONFIG_FILE_NAME),
    }
}

pub(crate) fn load_window_state(store: &ConfigStore) -> WindowState {
    let defaults = WindowState::default();
    WindowState {
        width: store
            .get(WIDTH_KEY)
            .and_then(|value| value.as_u64())
            .map(|value| value as u32)
            .filter(|value| *value > 0)
            .unwrap_or(defaults.width),
        height: store
            .get(HEIGHT_KEY)
            .and_then(|value| value.as_u64())
            .map(|value| value as u32)
            .filter(|value| *value > 0)
            .unwrap_or(defaults.height),
        x: store
            .get(X_KEY)
            .and_then(|value| value.as_i64())
            .map(|value| value as i32),
        y: store
            .get(Y_KEY)
            .and_then(|value| value.as_i64())
            .map(|value| value as i32),
        maximized: store
            .get(MAXIMIZE_KEY)
            .and_then(|value| value.as_bool())
            .unwrap_or(defaults.maximized),
    }
}

pub(crate) fn persist_window_size(
    store: &ConfigStore,
    width: u32,
    height: u32,
    maximized: bool,
) -> Result<(), String> {
    let mut entries = Map::new();
    entries.insert(WIDTH_KEY.to_string(), json!(width));
    entries.insert(HEIGHT_KEY.to_string(), json!(height));
    entries.insert(MAXIMIZE_KEY.to_string(), json!(maximized));
    store.set_many(entries)
}

pub(crate) fn persist_window_position(
    store: &ConfigStore,
    x: i32,
    y: i32,
    maximized: bool,
) -> Result<(), String> {
    let mut entries = Map::new();
    entries.insert(X_KEY.to_string(), json!(x));
    entries.insert(Y_KEY.to_string(), json!(y));
    entries.insert(MAXIMIZE_KEY.to_string(), json!(maximized));
    store.set_many(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> ConfigStore {
        ConfigStore::open(dir.join(CONFIG_FILE_NAME))
    }

    #[test]
    fn load_window_state_defaults_when_file_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());

        assert_eq!(load_window_state(&store), WindowState::default());
    }

    #[test]
    fn geometry_round_trips_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = store_in(dir.path());
        persist_window_size(&store, 1280, 800, false).expect("persist size");
        persist_window_position(&store, 40, 60, false).expect("persist position");
        drop(store);

        let reopened = store_in(dir.path());
        let state = load_window_state(&reopened);
        assert_eq!(state.width, 1280);
        assert_eq!(state.height, 800);
        assert_eq!(state.x, Some(40));
        assert_eq!(state.y, Some(60));
        assert!(!state.maximized);
    }

    #[test]
    fn maximize_flag_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = store_in(dir.path());
        persist_window_size(&store, 1000, 600, true).expect("persist size");
        drop(store);

        assert!(load_window_state(&store_in(dir.path())).maximized);
    }

    #[test]
    fn set_many_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = store_in(dir.path());
        store
            .set("theme", json!("night"))
            .expect("set unrelated key");
        persist_window_size(&store, 900, 700, false).expect("persist size");
        drop(store);

        let reopened = store_in(dir.path());
        assert_eq!(reopened.get("theme"), Some(json!("night")));
        assert_eq!(reopened.get(WIDTH_KEY), Some(json!(900)));
    }

    #[test]
    fn last_write_wins_per_key() {
        let dir = tempfile::tempdir().expect("tempdir");

        let store = store_in(dir.path());
        persist_window_position(&store, 10, 20, false).expect("first persist");
        persist_window_position(&store, 300, 400, false).expect("second persist");

        let state = load_window_state(&store);
        assert_eq!((state.x, state.y), (Some(300), Some(400)));
    }

    #[test]
    fn corrupt_state_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").expect("write corrupt file");

        let store = ConfigStore::open(path);
        assert_eq!(load_window_state(&store), WindowState::default());
    }

    #[test]
    fn non_object_state_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[1, 2, 3]").expect("write array file");

        let store = ConfigStore::open(path);
        assert_eq!(load_window_state(&store), WindowState::default());
        assert_eq!(store.get(WIDTH_KEY), None);
    }
}
