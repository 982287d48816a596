//! Language selection and rule sets
//!
//! A [`RuleSet`] is chosen from the normalized language tag. The set of
//! supported languages is closed: English has a full grammar, every other
//! language gets an override-only placeholder.
//!
//! # Usage
//!
//! ```rust
//! use wordshape_core::language::{LanguageRules, RuleSet};
//! use wordshape_core::overrides::Overrides;
//!
//! let rules = RuleSet::for_tag("en-US");
//! assert_eq!(rules.pluralize("child", false, &Overrides::new()), "children");
//! ```

pub mod english;
pub mod interface;
pub mod passthrough;
pub mod tag;

pub use english::EnglishRules;
pub use interface::LanguageRules;
pub use passthrough::{PassThroughRules, SpanishRules};
pub use tag::{LanguageTag, DEFAULT_LANGUAGE};

use crate::overrides::Overrides;
use crate::types::{ConjugationRequest, DeterminerKind};

/// Languages the engine knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    /// Any other tag; served by the pass-through rules
    Other,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
    ];

    /// Language for a tag in any form ("en", "en-US", "EN_gb")
    pub fn from_tag(tag: &str) -> Self {
        match LanguageTag::normalize(tag).as_str() {
            "en" => Language::English,
            "de" => Language::German,
            "fr" => Language::French,
            "es" => Language::Spanish,
            _ => Language::Other,
        }
    }

    /// Primary subtag, `None` for [`Language::Other`]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Language::English => Some("en"),
            Language::German => Some("de"),
            Language::French => Some("fr"),
            Language::Spanish => Some("es"),
            Language::Other => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Other => "Other",
        }
    }

    /// Whether the language has rules beyond overrides
    pub fn has_grammar(&self) -> bool {
        matches!(self, Language::English)
    }
}

/// Rule set for one language
#[derive(Debug, Clone)]
pub enum RuleSet {
    English(EnglishRules),
    Spanish(SpanishRules),
    PassThrough(PassThroughRules),
}

impl RuleSet {
    /// Rules for a tag, pass-through for anything without a grammar
    pub fn for_tag(tag: &str) -> Self {
        let code = LanguageTag::normalize(tag);
        match Language::from_tag(&code) {
            Language::English => RuleSet::English(EnglishRules::new()),
            Language::Spanish => RuleSet::Spanish(SpanishRules::new()),
            Language::German | Language::French | Language::Other => {
                RuleSet::PassThrough(PassThroughRules::new(code))
            }
        }
    }

    pub fn language(&self) -> Language {
        Language::from_tag(self.code())
    }
}

impl LanguageRules for RuleSet {
    fn code(&self) -> &str {
        match self {
            RuleSet::English(rules) => rules.code(),
            RuleSet::Spanish(rules) => rules.code(),
            RuleSet::PassThrough(rules) => rules.code(),
        }
    }

    fn to_ing(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_ing(word, overrides),
            RuleSet::Spanish(rules) => rules.to_ing(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_ing(word, overrides),
        }
    }

    fn to_past(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_past(word, overrides),
            RuleSet::Spanish(rules) => rules.to_past(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_past(word, overrides),
        }
    }

    fn past_participle(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.past_participle(word, overrides),
            RuleSet::Spanish(rules) => rules.past_participle(word, overrides),
            RuleSet::PassThrough(rules) => rules.past_participle(word, overrides),
        }
    }

    fn to_third_person(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_third_person(word, overrides),
            RuleSet::Spanish(rules) => rules.to_third_person(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_third_person(word, overrides),
        }
    }

    fn base_verb(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.base_verb(word, overrides),
            RuleSet::Spanish(rules) => rules.base_verb(word, overrides),
            RuleSet::PassThrough(rules) => rules.base_verb(word, overrides),
        }
    }

    fn pluralize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.pluralize(word, conservative, overrides),
            RuleSet::Spanish(rules) => rules.pluralize(word, conservative, overrides),
            RuleSet::PassThrough(rules) => rules.pluralize(word, conservative, overrides),
        }
    }

    fn singularize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.singularize(word, conservative, overrides),
            RuleSet::Spanish(rules) => rules.singularize(word, conservative, overrides),
            RuleSet::PassThrough(rules) => rules.singularize(word, conservative, overrides),
        }
    }

    fn possessive(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.possessive(word, overrides),
            RuleSet::Spanish(rules) => rules.possessive(word, overrides),
            RuleSet::PassThrough(rules) => rules.possessive(word, overrides),
        }
    }

    fn to_comparative(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_comparative(word, overrides),
            RuleSet::Spanish(rules) => rules.to_comparative(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_comparative(word, overrides),
        }
    }

    fn to_superlative(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_superlative(word, overrides),
            RuleSet::Spanish(rules) => rules.to_superlative(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_superlative(word, overrides),
        }
    }

    fn to_adverb(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.to_adverb(word, overrides),
            RuleSet::Spanish(rules) => rules.to_adverb(word, overrides),
            RuleSet::PassThrough(rules) => rules.to_adverb(word, overrides),
        }
    }

    fn adverb_to_adjective(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.adverb_to_adjective(word, overrides),
            RuleSet::Spanish(rules) => rules.adverb_to_adjective(word, overrides),
            RuleSet::PassThrough(rules) => rules.adverb_to_adjective(word, overrides),
        }
    }

    fn negate(&self, words: &[String], contracted: bool, overrides: &Overrides) -> Vec<String> {
        match self {
            RuleSet::English(rules) => rules.negate(words, contracted, overrides),
            RuleSet::Spanish(rules) => rules.negate(words, contracted, overrides),
            RuleSet::PassThrough(rules) => rules.negate(words, contracted, overrides),
        }
    }

    fn yes_no_question(&self, words: &[String], overrides: &Overrides) -> Vec<String> {
        match self {
            RuleSet::English(rules) => rules.yes_no_question(words, overrides),
            RuleSet::Spanish(rules) => rules.yes_no_question(words, overrides),
            RuleSet::PassThrough(rules) => rules.yes_no_question(words, overrides),
        }
    }

    fn wh_question(&self, words: &[String], wh: &str, overrides: &Overrides) -> Vec<String> {
        match self {
            RuleSet::English(rules) => rules.wh_question(words, wh, overrides),
            RuleSet::Spanish(rules) => rules.wh_question(words, wh, overrides),
            RuleSet::PassThrough(rules) => rules.wh_question(words, wh, overrides),
        }
    }

    fn indefinite_article(&self, word: &str, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.indefinite_article(word, overrides),
            RuleSet::Spanish(rules) => rules.indefinite_article(word, overrides),
            RuleSet::PassThrough(rules) => rules.indefinite_article(word, overrides),
        }
    }

    fn determiner(&self, phrase: &str, kind: DeterminerKind, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.determiner(phrase, kind, overrides),
            RuleSet::Spanish(rules) => rules.determiner(phrase, kind, overrides),
            RuleSet::PassThrough(rules) => rules.determiner(phrase, kind, overrides),
        }
    }

    fn pronoun_variants(&self, word: &str) -> Vec<String> {
        match self {
            RuleSet::English(rules) => rules.pronoun_variants(word),
            RuleSet::Spanish(rules) => rules.pronoun_variants(word),
            RuleSet::PassThrough(rules) => rules.pronoun_variants(word),
        }
    }

    fn conjugate(&self, request: &ConjugationRequest, overrides: &Overrides) -> String {
        match self {
            RuleSet::English(rules) => rules.conjugate(request, overrides),
            RuleSet::Spanish(rules) => rules.conjugate(request, overrides),
            RuleSet::PassThrough(rules) => rules.conjugate(request, overrides),
        }
    }
}
