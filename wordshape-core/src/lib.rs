//! Rule-based morphological transformation engine
//!
//! Given a word (or a sentence as ordered words) and a target grammatical
//! shape, this crate deterministically produces the surface form: verb
//! conjugations, noun plurals and singulars, possessives, comparative and
//! adverbial forms, negated and interrogative clauses, determiners and
//! pronoun case variants. Per-language override dictionaries take
//! precedence over every computed rule and persist across sessions.
//!
//! # Architecture
//!
//! - **casing**: replays the casing of the input onto a computed form
//! - **lexicon**: irregular tables, loaded from embedded TOML once
//! - **overrides**: per-language exception records and their store
//! - **language**: the rules contract, the English rule set and the
//!   override-only rule sets for other languages
//! - **tokenizer**: word/punctuation splitting for text-level operations
//! - **engine**: the façade tying a language, its rules and a store together
//!
//! Transforms are total functions. Unknown or empty input comes back
//! unchanged; only overrides persistence can fail, and the store logs and
//! swallows those failures.
//!
//! # Example
//!
//! ```rust
//! use wordshape_core::{ConjugationRequest, Engine, Tense};
//!
//! let engine = Engine::in_memory("en");
//!
//! assert_eq!(engine.pluralize("Child", false), "Children");
//! assert_eq!(engine.to_past("DRINK"), "DRANK");
//! assert_eq!(engine.yes_no_question_text("He likes pizza."), "Does he like pizza?");
//!
//! let request = ConjugationRequest::new("write").tense(Tense::Past);
//! assert_eq!(engine.conjugate(&request), "wrote");
//! ```

pub mod casing;
pub mod engine;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod overrides;
pub mod tokenizer;
pub mod types;

pub use casing::match_case;
pub use engine::{Engine, WordOperation, WordTarget};
pub use error::{LanguageError, LexiconError, OverridesError, UnknownName};
pub use language::{Language, LanguageRules, LanguageTag, RuleSet};
pub use overrides::{OverrideKind, Overrides, OverridesStore};
pub use types::{
    Aspect, ConjugationRequest, ConjugationRow, DeterminerKind, Number, Person, Tense, Voice,
};
