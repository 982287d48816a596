//! Error types
//!
//! Word and clause transforms are total and never fail. Errors only come out
//! of lexicon loading, strict language-tag parsing, name parsing
//! and overrides persistence.

use thiserror::Error;

/// Lexicon loading or validation error
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The embedded or supplied TOML document could not be parsed
    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but violates a table invariant
    #[error("Invalid lexicon: {0}")]
    Invalid(String),
}

/// Strict language tag parsing error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageError {
    /// Empty or whitespace-only tag
    #[error("Empty language tag")]
    Empty,

    /// Tag that is not a well-formed BCP 47 identifier
    #[error("Invalid language tag '{tag}': {reason}")]
    Invalid { tag: String, reason: String },
}

/// Overrides persistence error
///
/// The overrides store logs and swallows these; they surface only through
/// [`crate::overrides::OverridesRepository`] implementations.
#[derive(Debug, Error)]
pub enum OverridesError {
    /// Reading or writing an overrides document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The overrides document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The temporary document could not replace the persisted one
    #[error("Failed to persist overrides document: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Name that matches no variant of a named enum (operations, override kinds)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} '{name}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownName {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
