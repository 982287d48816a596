//! English rule set
//!
//! Each submodule holds the suffix cascades for one word class as pure
//! functions over lowercase input. This module wires them into
//! [`LanguageRules`], applying overrides, the do-not-change set and case
//! preservation around every computed form.

mod adjectives;
mod clauses;
mod conjugation;
mod determiners;
mod letters;
mod nouns;
mod pronouns;
mod verbs;

use crate::casing::match_case;
use crate::language::interface::LanguageRules;
use crate::lexicon::{english, EnglishLexicon};
use crate::overrides::{OverrideKind, Overrides};
use crate::types::{ConjugationRequest, DeterminerKind};

/// Full English morphology backed by the embedded lexicon
#[derive(Debug, Clone, Copy)]
pub struct EnglishRules {
    lexicon: &'static EnglishLexicon,
}

impl EnglishRules {
    pub fn new() -> Self {
        Self::with_lexicon(english())
    }

    /// Rules over a caller-supplied lexicon
    pub fn with_lexicon(lexicon: &'static EnglishLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'static EnglishLexicon {
        self.lexicon
    }

    /// Override, then do-not-change, then `rule` over the lowercase word
    fn shape<F>(&self, word: &str, overrides: &Overrides, kind: OverrideKind, rule: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return word.to_string();
        }

        let lower = trimmed.to_lowercase();
        if let Some(value) = overrides.lookup(kind, &lower) {
            log::debug!("{} override hit for '{lower}'", kind.as_str());
            return match_case(trimmed, value);
        }
        if overrides.is_kept(&lower) {
            return trimmed.to_string();
        }

        match_case(trimmed, &rule(&lower))
    }
}

impl Default for EnglishRules {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRules for EnglishRules {
    fn code(&self) -> &str {
        "en"
    }

    fn to_ing(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Progressive, |w| self.ing_form(w))
    }

    fn to_past(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Past, |w| self.past_form(w))
    }

    fn past_participle(&self, word: &str, overrides: &Overrides) -> String {
        let trimmed = word.trim();
        let lower = trimmed.to_lowercase();
        let overridden =
            overrides.lookup(OverrideKind::Past, &lower).is_some() || overrides.is_kept(&lower);
        match self.lexicon.irregular_participle(&lower) {
            Some(participle) if !overridden => match_case(trimmed, participle),
            _ => self.to_past(word, overrides),
        }
    }

    fn to_third_person(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::ThirdPerson, |w| {
            self.third_person_form(w)
        })
    }

    fn base_verb(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::BaseVerb, |w| self.lemma_form(w))
    }

    fn pluralize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        self.shape_noun(word, conservative, overrides, OverrideKind::Plural, |w| {
            self.plural_form(w)
        })
    }

    fn singularize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        self.shape_noun(word, conservative, overrides, OverrideKind::Singular, |w| {
            self.singular_form(w)
        })
    }

    fn possessive(&self, word: &str, overrides: &Overrides) -> String {
        let trimmed = word.trim();
        if !trimmed.is_empty() && overrides.is_kept(trimmed) {
            return trimmed.to_string();
        }
        self.possessive_form(word)
    }

    fn to_comparative(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Comparative, |w| {
            self.comparative_form(w)
        })
    }

    fn to_superlative(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Superlative, |w| {
            self.superlative_form(w)
        })
    }

    fn to_adverb(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Adverb, |w| self.adverb_form(w))
    }

    fn adverb_to_adjective(&self, word: &str, overrides: &Overrides) -> String {
        self.shape(word, overrides, OverrideKind::Adjective, |w| {
            self.adjective_form(w)
        })
    }

    fn negate(&self, words: &[String], contracted: bool, overrides: &Overrides) -> Vec<String> {
        self.negate_clause(words, contracted, overrides)
    }

    fn yes_no_question(&self, words: &[String], overrides: &Overrides) -> Vec<String> {
        self.question_clause(words, overrides)
    }

    fn wh_question(&self, words: &[String], wh: &str, overrides: &Overrides) -> Vec<String> {
        self.wh_clause(words, wh, overrides)
    }

    fn indefinite_article(&self, word: &str, overrides: &Overrides) -> String {
        self.article_for(word, overrides)
    }

    fn determiner(&self, phrase: &str, kind: DeterminerKind, overrides: &Overrides) -> String {
        self.determiner_for(phrase, kind, overrides)
    }

    fn pronoun_variants(&self, word: &str) -> Vec<String> {
        self.pronoun_forms(word)
    }

    fn conjugate(&self, request: &ConjugationRequest, overrides: &Overrides) -> String {
        self.conjugate_request(request, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_irregular() {
        let rules = EnglishRules::new();
        let mut overrides = Overrides::new();
        assert_eq!(rules.to_past("go", &overrides), "went");

        overrides.set(OverrideKind::Past, "go", "goed");
        assert_eq!(rules.to_past("go", &overrides), "goed");
        assert_eq!(rules.to_past("Go", &overrides), "Goed");
    }

    #[test]
    fn test_kept_word_is_untouched() {
        let rules = EnglishRules::new();
        let mut overrides = Overrides::new();
        overrides.keep("GitHub");
        assert_eq!(rules.to_past("GitHub", &overrides), "GitHub");
        assert_eq!(rules.to_adverb("github", &overrides), "github");
    }

    #[test]
    fn test_override_wins_over_do_not_change_for_verbs() {
        let rules = EnglishRules::new();
        let mut overrides = Overrides::new();
        overrides.keep("ping");
        overrides.set(OverrideKind::Past, "ping", "pinged");
        assert_eq!(rules.to_past("ping", &overrides), "pinged");
    }

    #[test]
    fn test_kept_word_has_no_possessive() {
        let rules = EnglishRules::new();
        let mut overrides = Overrides::new();
        assert_eq!(rules.possessive("James", &overrides), "James'");

        overrides.keep("James");
        assert_eq!(rules.possessive("James", &overrides), "James");
        assert_eq!(rules.possessive(" james ", &overrides), "james");
        assert_eq!(rules.possessive("cat", &overrides), "cat's");
    }

    #[test]
    fn test_empty_input_is_returned() {
        let rules = EnglishRules::new();
        let overrides = Overrides::new();
        assert_eq!(rules.to_ing("", &overrides), "");
        assert_eq!(rules.pluralize("  ", false, &overrides), "  ");
    }

    #[test]
    fn test_past_participle_prefers_table() {
        let rules = EnglishRules::new();
        let overrides = Overrides::new();
        assert_eq!(rules.past_participle("go", &overrides), "gone");
        assert_eq!(rules.past_participle("Write", &overrides), "Written");
        assert_eq!(rules.past_participle("walk", &overrides), "walked");
    }

    #[test]
    fn test_code() {
        assert_eq!(EnglishRules::new().code(), "en");
    }
}
