//! Lexicon document schema and validation
//!
//! This module defines the TOML schema for lexicon tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::types::{Number, Person};

/// Number of slots in a pronoun row
pub const PRONOUN_SLOTS: usize = 5;

/// Root lexicon document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub verbs: VerbTables,
    pub nouns: NounTables,
    pub adjectives: AdjectiveTables,
    pub clauses: ClauseTables,
    pub pronouns: PronounTables,
    pub articles: ArticleTables,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Irregular verb tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbTables {
    /// (base, simple past, past participle)
    pub irregular: Vec<(String, String, String)>,
    #[serde(default)]
    pub third_person: HashMap<String, String>,
    /// Inflected form → lemma, for forms not covered by `irregular`
    #[serde(default)]
    pub lemmas: HashMap<String, String>,
}

/// Noun tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounTables {
    #[serde(default)]
    pub invariant: Vec<String>,
    #[serde(default)]
    pub f_takes_s: Vec<String>,
    #[serde(default)]
    pub fe_nouns: Vec<String>,
    /// -ve nouns whose plural would otherwise recover an -f
    #[serde(default)]
    pub ve_nouns: Vec<String>,
    #[serde(default)]
    pub us_to_i: Vec<String>,
    #[serde(default)]
    pub is_to_es: Vec<String>,
    #[serde(default)]
    pub on_to_a: Vec<String>,
    #[serde(default)]
    pub um_to_a: Vec<String>,
    #[serde(default)]
    pub ix_ex_to_ices: Vec<String>,
    #[serde(default)]
    pub o_takes_s: Vec<String>,
    #[serde(default)]
    pub oe_nouns: Vec<String>,
    #[serde(default)]
    pub ie_nouns: Vec<String>,
    /// -use nouns whose plural would otherwise recover an -us
    #[serde(default)]
    pub use_nouns: Vec<String>,
    /// singular → plural
    #[serde(default)]
    pub irregular: HashMap<String, String>,
}

/// Adjective and adverb tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjectiveTables {
    #[serde(default)]
    pub comparative: HashMap<String, String>,
    #[serde(default)]
    pub superlative: HashMap<String, String>,
    /// adjective → adverb
    #[serde(default)]
    pub adverb: HashMap<String, String>,
    /// adverb → adjective, on top of the inverted `adverb` table
    #[serde(default)]
    pub from_adverb: HashMap<String, String>,
    /// -ly words that are not adverbs built on an adjective ("family", "apply")
    #[serde(default)]
    pub plain_ly: Vec<String>,
}

/// Function words used by clause transforms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseTables {
    pub auxiliaries: Vec<String>,
    #[serde(default)]
    pub determiners: Vec<String>,
    /// auxiliary → negative contraction
    #[serde(default)]
    pub contractions: HashMap<String, String>,
}

/// Pronoun paradigm rows and subject agreement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronounTables {
    /// subject, object, possessive adjective, possessive pronoun, reflexive
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub subjects: HashMap<String, SubjectAgreement>,
}

/// Person and number a subject word agrees with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAgreement {
    pub person: Person,
    pub number: Number,
}

/// Indefinite article tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleTables {
    #[serde(default)]
    pub silent_h: Vec<String>,
    #[serde(default)]
    pub consonant_sound: Vec<String>,
    #[serde(default)]
    pub vowel_sound_letters: String,
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), LexiconError> {
        for (index, (base, past, participle)) in self.verbs.irregular.iter().enumerate() {
            if base.is_empty() || past.is_empty() || participle.is_empty() {
                return Err(LexiconError::Invalid(format!(
                    "irregular verb row {index} has an empty cell"
                )));
            }
        }

        for (index, row) in self.pronouns.rows.iter().enumerate() {
            if row.len() != PRONOUN_SLOTS {
                return Err(LexiconError::Invalid(format!(
                    "pronoun row {index} has {} slots, expected {PRONOUN_SLOTS}",
                    row.len()
                )));
            }
        }

        if self.clauses.auxiliaries.is_empty() {
            return Err(LexiconError::Invalid(
                "no auxiliaries defined".to_string(),
            ));
        }

        Ok(())
    }
}
