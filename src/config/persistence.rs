//! Preferences persistence module
//!
//! A small named key-value store of integer preferences. The file-backed
//! implementation keeps one JSON file per namespace inside the data
//! directory; the in-memory one backs tests and runs without a data dir.

use crate::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store of integer preferences
pub trait Preferences {
    /// Value stored under `key`, or `default` when unset
    fn get_int(&self, key: &str, default: u64) -> Result<u64>;

    /// Store all `entries` in a single write
    fn put_ints(&mut self, entries: &[(&str, u64)]) -> Result<()>;
}

/// Preferences file structure for JSON persistence
#[derive(Debug, Serialize, Deserialize)]
struct PreferencesFile {
    version: u32,
    values: BTreeMap<String, u64>,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// Preferences namespace persisted as `<dir>/<namespace>.json`
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    /// Open the namespace `name` inside `dir`
    pub fn open(dir: &Path, name: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<PreferencesFile> {
        if !self.path.exists() {
            return Ok(PreferencesFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to read preferences file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to parse preferences file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, file: &PreferencesFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::PersistenceError(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(file)?;

        // write next to the target, then swap it in
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to write preferences file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            QuizError::PersistenceError(format!(
                "Failed to replace preferences file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

impl Preferences for JsonPreferences {
    fn get_int(&self, key: &str, default: u64) -> Result<u64> {
        Ok(self.load()?.values.get(key).copied().unwrap_or(default))
    }

    fn put_ints(&mut self, entries: &[(&str, u64)]) -> Result<()> {
        let mut file = self.load()?;
        for (key, value) in entries {
            file.values.insert((*key).to_string(), *value);
        }
        self.save(&file)
    }
}

/// Preferences held in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, u64>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str, default: u64) -> Result<u64> {
        Ok(self.values.get(key).copied().unwrap_or(default))
    }

    fn put_ints(&mut self, entries: &[(&str, u64)]) -> Result<()> {
        for (key, value) in entries {
            self.values.insert((*key).to_string(), *value);
        }
        Ok(())
    }
}
