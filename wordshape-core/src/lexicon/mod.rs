//! Static lexicon tables
//!
//! Irregular forms, exception sets and function-word tables live in an
//! embedded TOML document and are compiled into hash tables on first use.

pub mod config;
pub mod loader;
pub mod tables;

pub use config::{LexiconConfig, PRONOUN_SLOTS};
pub use loader::{english, load_lexicon};
pub use tables::{ClassicalPlural, EnglishLexicon};
