//! Public contract for language rules
//!
//! Every lexical transform consults the caller's [`Overrides`] first, then
//! the language's irregular tables, then its regular suffix rules. All
//! operations are total: unknown or empty input comes back unchanged.

use crate::overrides::Overrides;
use crate::types::{ConjugationRequest, DeterminerKind};

/// Morphological and clausal operations a language supports
pub trait LanguageRules: Send + Sync {
    /// Primary language subtag served by this rule set
    fn code(&self) -> &str;

    // --- Verbs ---

    /// Present participle ("run" → "running")
    fn to_ing(&self, word: &str, overrides: &Overrides) -> String;

    /// Simple past ("go" → "went")
    fn to_past(&self, word: &str, overrides: &Overrides) -> String;

    /// Past participle ("go" → "gone"); defaults to the simple past
    fn past_participle(&self, word: &str, overrides: &Overrides) -> String {
        self.to_past(word, overrides)
    }

    /// Third person singular present ("go" → "goes")
    fn to_third_person(&self, word: &str, overrides: &Overrides) -> String;

    /// Lemma recovery ("went" → "go")
    fn base_verb(&self, word: &str, overrides: &Overrides) -> String;

    // --- Nouns ---

    fn pluralize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String;

    fn singularize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String;

    fn possessive(&self, word: &str, overrides: &Overrides) -> String;

    // --- Adjectives and adverbs ---

    fn to_comparative(&self, word: &str, overrides: &Overrides) -> String;

    fn to_superlative(&self, word: &str, overrides: &Overrides) -> String;

    fn to_adverb(&self, word: &str, overrides: &Overrides) -> String;

    fn adverb_to_adjective(&self, word: &str, overrides: &Overrides) -> String;

    // --- Clauses ---

    /// Negate a clause given as ordered words without punctuation
    fn negate(&self, words: &[String], contracted: bool, overrides: &Overrides) -> Vec<String>;

    fn yes_no_question(&self, words: &[String], overrides: &Overrides) -> Vec<String>;

    fn wh_question(&self, words: &[String], wh: &str, overrides: &Overrides) -> Vec<String>;

    // --- Determiners and pronouns ---

    /// "a" or "an" for a word or noun phrase
    fn indefinite_article(&self, word: &str, overrides: &Overrides) -> String;

    /// Determiner for a noun phrase, empty when none applies
    fn determiner(&self, phrase: &str, kind: DeterminerKind, overrides: &Overrides) -> String;

    /// Case variants of a pronoun: subject, object, possessive adjective,
    /// possessive pronoun, reflexive
    fn pronoun_variants(&self, word: &str) -> Vec<String>;

    // --- Conjugation ---

    fn conjugate(&self, request: &ConjugationRequest, overrides: &Overrides) -> String;
}
