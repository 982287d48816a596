//! Thread-safe, language-scoped overrides store
//!
//! All operations are serialized by one lock over the whole store. Overrides
//! are edited rarely (from settings screens), never on a hot path, so a
//! single coarse lock is enough.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::language::LanguageTag;
use crate::overrides::{JsonFileRepository, MemoryRepository, Overrides, OverridesRepository};

/// Cached overrides records backed by a repository
///
/// Persistence is best-effort: repository failures are logged and the
/// in-memory record stays authoritative for the rest of the session.
pub struct OverridesStore {
    records: Mutex<HashMap<String, Overrides>>,
    repository: Box<dyn OverridesRepository>,
}

impl std::fmt::Debug for OverridesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverridesStore")
            .field("languages", &self.languages())
            .finish_non_exhaustive()
    }
}

impl OverridesStore {
    pub fn new(repository: impl OverridesRepository + 'static) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            repository: Box::new(repository),
        }
    }

    /// Store whose records live only as long as the process
    pub fn in_memory() -> Self {
        Self::new(MemoryRepository::new())
    }

    /// Store persisting one JSON document per language under `directory`
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileRepository::new(directory))
    }

    /// Current record for a language, or a fresh empty one
    pub fn get(&self, language: &str) -> Overrides {
        let language = LanguageTag::normalize(language);
        let mut records = self.lock();
        self.record(&mut records, &language).clone()
    }

    /// Replace the record for a language and persist it
    pub fn set(&self, language: &str, overrides: Overrides) {
        let language = LanguageTag::normalize(language);
        let mut records = self.lock();
        self.persist(&language, &overrides);
        records.insert(language, overrides);
    }

    /// Read-modify-write the record for a language
    pub fn update<F>(&self, language: &str, mutator: F)
    where
        F: FnOnce(&mut Overrides),
    {
        let language = LanguageTag::normalize(language);
        let mut records = self.lock();
        let record = self.record(&mut records, &language);
        mutator(record);
        let snapshot = record.clone();
        self.persist(&language, &snapshot);
    }

    /// Drop the record for a language, both cached and persisted
    pub fn reset(&self, language: &str) {
        let language = LanguageTag::normalize(language);
        let mut records = self.lock();
        records.insert(language.clone(), Overrides::new());
        if let Err(e) = self.repository.remove(&language) {
            log::warn!("Failed to remove overrides for '{language}': {e}");
        }
    }

    /// Languages with a cached record, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.lock().keys().cloned().collect();
        languages.sort();
        languages
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Overrides>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record<'a>(
        &self,
        records: &'a mut HashMap<String, Overrides>,
        language: &str,
    ) -> &'a mut Overrides {
        records
            .entry(language.to_string())
            .or_insert_with(|| self.load(language))
    }

    fn load(&self, language: &str) -> Overrides {
        match self.repository.load(language) {
            Ok(Some(overrides)) => {
                log::debug!("Loaded persisted overrides for '{language}'");
                overrides
            }
            Ok(None) => Overrides::new(),
            Err(e) => {
                log::warn!("Failed to load overrides for '{language}', starting empty: {e}");
                Overrides::new()
            }
        }
    }

    fn persist(&self, language: &str, overrides: &Overrides) {
        if let Err(e) = self.repository.save(language, overrides) {
            log::warn!("Failed to persist overrides for '{language}': {e}");
        }
    }
}

impl Default for OverridesStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
