//! Persistence
//!
//! The tracker persists two whole documents through a key-value store: the
//! habit collection and the preferences. Each is JSON text under a fixed
//! key and is rewritten in full after every change.

use crate::habit::{Habit, HabitData, Preferences};
use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Key of the habit collection document
pub const HABITS_KEY: &str = "habits_v2";

/// Key of the preferences document
pub const PREFERENCES_KEY: &str = "habits_pref_v1";

/// String key-value persistence
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store kept in a single TOML file
///
/// The file is a flat table of string values. It is read on every `get`
/// and rewritten whole on every `set`; a missing file reads as empty.
pub struct FileKeyValueStore {
    file_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let table = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.file_path.display()))?;
        Ok(table)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        let content = toml::to_string_pretty(&table)?;
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Key-value store held in memory
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the tracker's documents
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Storage backed by a TOML file at `file_path`
    pub fn file(file_path: impl AsRef<Path>) -> Self {
        Self::new(FileKeyValueStore::new(file_path))
    }

    /// Storage that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(MemoryKeyValueStore::new())
    }

    /// Load habits and preferences
    ///
    /// Missing documents load as an empty collection and default
    /// preferences. A document that exists but does not decode is an error,
    /// so a later save cannot overwrite data that failed to load.
    pub fn load(&self) -> Result<HabitData> {
        let habits: Vec<Habit> = match self.store.get(HABITS_KEY)? {
            Some(json) => serde_json::from_str(&json)
                .with_context(|| format!("stored '{}' is not a valid habit list", HABITS_KEY))?,
            None => Vec::new(),
        };
        let preferences: Preferences = match self.store.get(PREFERENCES_KEY)? {
            Some(json) => serde_json::from_str(&json).with_context(|| {
                format!("stored '{}' is not a valid preference object", PREFERENCES_KEY)
            })?,
            None => Preferences::default(),
        };
        debug!(count = habits.len(), sort = %preferences.sort, "loaded habits");
        Ok(HabitData::from_parts(habits, preferences))
    }

    /// Write the full habit collection
    pub fn save_habits(&self, data: &HabitData) -> Result<()> {
        let json = serde_json::to_string(data.habits())?;
        self.store.set(HABITS_KEY, &json)
    }

    /// Write the preferences document
    pub fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        let json = serde_json::to_string(preferences)?;
        self.store.set(PREFERENCES_KEY, &json)
    }
}
