//! Statistics store
//!
//! Counters are kept under three integer keys of the preferences namespace.
//! `record` holds the store lock across its read-modify-write so that
//! concurrent callers never lose an update.

use crate::config::persistence::{JsonPreferences, MemoryPreferences, Preferences};
use crate::config::QuizConfig;
use crate::models::Statistics;
use crate::{QuizError, Result, PREFERENCES_NAME};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

pub const KEY_CORRECT: &str = "Aciertos";
pub const KEY_INCORRECT: &str = "Fallos";
pub const KEY_TOTAL: &str = "Total";

type SharedPreferences = Box<dyn Preferences + Send>;

/// Persisted answer statistics
pub struct StatisticsStore {
    prefs: Mutex<SharedPreferences>,
}

impl StatisticsStore {
    /// Create a store over the given preferences handle
    pub fn new<P>(prefs: P) -> Self
    where
        P: Preferences + Send + 'static,
    {
        Self {
            prefs: Mutex::new(Box::new(prefs)),
        }
    }

    /// Store backed by memory only; nothing survives the process
    pub fn in_memory() -> Self {
        Self::new(MemoryPreferences::new())
    }

    /// Open the file-backed store in the configured data directory
    pub fn open(config: &QuizConfig) -> Result<Self> {
        let dir = config.resolved_data_dir()?;
        let prefs = JsonPreferences::open(&dir, PREFERENCES_NAME);
        debug!(path = %prefs.path().display(), "opened statistics store");
        Ok(Self::new(prefs))
    }

    /// Open the file-backed store, falling back to memory when that fails
    pub fn open_or_in_memory(config: &QuizConfig) -> Self {
        match Self::open(config) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "statistics will not be persisted");
                Self::in_memory()
            }
        }
    }

    /// Record one outcome and return the updated counters
    pub fn record(&self, is_correct: bool) -> Result<Statistics> {
        let mut prefs = self.lock()?;
        let updated = Self::read_from(&**prefs)?.with_outcome(is_correct);

        if let Err(err) = prefs.put_ints(&[
            (KEY_CORRECT, updated.correct),
            (KEY_INCORRECT, updated.incorrect),
            (KEY_TOTAL, updated.total),
        ]) {
            warn!(error = %err, is_correct, "failed to persist outcome");
            return Err(err);
        }

        debug!(
            is_correct,
            correct = updated.correct,
            incorrect = updated.incorrect,
            total = updated.total,
            "recorded outcome"
        );
        Ok(updated)
    }

    /// Current counters; unset keys read as 0
    pub fn read(&self) -> Result<Statistics> {
        let prefs = self.lock()?;
        Self::read_from(&**prefs)
    }

    fn read_from(prefs: &(dyn Preferences + Send)) -> Result<Statistics> {
        Ok(Statistics {
            correct: prefs.get_int(KEY_CORRECT, 0)?,
            incorrect: prefs.get_int(KEY_INCORRECT, 0)?,
            total: prefs.get_int(KEY_TOTAL, 0)?,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, SharedPreferences>> {
        self.prefs.lock().map_err(|_| {
            QuizError::PersistenceError("statistics store lock poisoned".to_string())
        })
    }
}

impl std::fmt::Debug for StatisticsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticsStore").finish_non_exhaustive()
    }
}
