//! Durable storage for overrides records
//!
//! A repository persists one serialized [`Overrides`] document per language.

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;

use crate::error::OverridesError;
use crate::overrides::Overrides;

/// Namespace prefix shared by every persisted overrides document
pub const DOCUMENT_PREFIX: &str = "wordshape.overrides";

/// Storage key of the document for a (normalized) language
pub fn document_key(language: &str) -> String {
    format!("{DOCUMENT_PREFIX}.{language}")
}

/// Overrides persistence interface
pub trait OverridesRepository: Send + Sync {
    /// Load the persisted record, `None` when nothing was stored yet
    fn load(&self, language: &str) -> Result<Option<Overrides>, OverridesError>;

    /// Persist a record, replacing any previous document
    fn save(&self, language: &str, overrides: &Overrides) -> Result<(), OverridesError>;

    /// Forget the persisted record; removing a missing record is not an error
    fn remove(&self, language: &str) -> Result<(), OverridesError>;
}

/// Process-local repository holding serialized documents in memory
#[derive(Debug, Default)]
pub struct MemoryRepository {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverridesRepository for MemoryRepository {
    fn load(&self, language: &str) -> Result<Option<Overrides>, OverridesError> {
        let document = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&document_key(language))
            .cloned();
        document
            .map(|json| serde_json::from_str(&json).map(Overrides::normalized))
            .transpose()
            .map_err(OverridesError::from)
    }

    fn save(&self, language: &str, overrides: &Overrides) -> Result<(), OverridesError> {
        let json = serde_json::to_string(overrides)?;
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document_key(language), json);
        Ok(())
    }

    fn remove(&self, language: &str) -> Result<(), OverridesError> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&document_key(language));
        Ok(())
    }
}

/// Repository storing one pretty-printed JSON file per language
///
/// Files are written to a temporary sibling first and then persisted over
/// the target, so a crash never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    directory: PathBuf,
}

impl JsonFileRepository {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the document for a language
    pub fn document_path(&self, language: &str) -> PathBuf {
        self.directory
            .join(format!("{}.json", document_key(language)))
    }
}

impl OverridesRepository for JsonFileRepository {
    fn load(&self, language: &str) -> Result<Option<Overrides>, OverridesError> {
        let path = self.document_path(language);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let overrides: Overrides = serde_json::from_str(&content)?;
        Ok(Some(overrides.normalized()))
    }

    fn save(&self, language: &str, overrides: &Overrides) -> Result<(), OverridesError> {
        fs::create_dir_all(&self.directory)?;

        let mut temp_file = NamedTempFile::new_in(&self.directory)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, overrides)?;
            writer.flush()?;
        }

        temp_file.persist(self.document_path(language))?;
        Ok(())
    }

    fn remove(&self, language: &str) -> Result<(), OverridesError> {
        match fs::remove_file(self.document_path(language)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideKind;
    use tempfile::TempDir;

    fn sample() -> Overrides {
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Plural, "cow", "kine");
        overrides.keep("GitHub");
        overrides
    }

    #[test]
    fn test_document_key_is_namespaced() {
        assert_eq!(document_key("en"), "wordshape.overrides.en");
    }

    #[test]
    fn test_memory_repository_round_trip() {
        let repository = MemoryRepository::new();
        assert!(repository.load("en").unwrap().is_none());

        repository.save("en", &sample()).unwrap();
        assert_eq!(repository.load("en").unwrap(), Some(sample()));
        assert!(repository.load("de").unwrap().is_none());

        repository.remove("en").unwrap();
        assert!(repository.load("en").unwrap().is_none());
    }

    #[test]
    fn test_file_repository_round_trip() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path().join("nested"));

        assert!(repository.load("en").unwrap().is_none());
        repository.save("en", &sample()).unwrap();

        let path = repository.document_path("en");
        assert!(path.ends_with("wordshape.overrides.en.json"));
        assert!(path.exists());
        assert_eq!(repository.load("en").unwrap(), Some(sample()));
    }

    #[test]
    fn test_file_repository_overwrites() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path());

        repository.save("en", &sample()).unwrap();
        repository.save("en", &Overrides::new()).unwrap();
        assert_eq!(repository.load("en").unwrap(), Some(Overrides::new()));
    }

    #[test]
    fn test_file_repository_lowercases_hand_edited_keys() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path());
        fs::write(
            repository.document_path("en"),
            r#"{"plural": {"Octopus": "octopodes"}, "do_not_change": ["NASA"]}"#,
        )
        .unwrap();

        let overrides = repository.load("en").unwrap().unwrap();
        assert_eq!(overrides.lookup(OverrideKind::Plural, "octopus"), Some("octopodes"));
        assert!(overrides.plural.contains_key("octopus"));
        assert!(overrides.is_kept("nasa"));
    }

    #[test]
    fn test_file_repository_remove_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path());
        assert!(repository.remove("fr").is_ok());
    }

    #[test]
    fn test_file_repository_reports_corrupt_document() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path());
        fs::write(repository.document_path("en"), "{not json").unwrap();
        assert!(matches!(
            repository.load("en"),
            Err(OverridesError::Serialization(_))
        ));
    }
}
