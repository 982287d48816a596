//! Per-language override dictionaries
//!
//! Overrides are user- or caller-supplied exceptions that win over both the
//! irregular tables and the regular suffix rules. One [`Overrides`] record
//! exists per normalized language tag; the [`OverridesStore`] caches records
//! and persists them through an [`OverridesRepository`].

mod record;
mod repository;
mod store;

pub use record::{OverrideKind, Overrides};
pub use repository::{
    document_key, JsonFileRepository, MemoryRepository, OverridesRepository, DOCUMENT_PREFIX,
};
pub use store::OverridesStore;
