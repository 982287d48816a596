//! Placeholder rule sets for languages without a grammar yet
//!
//! These apply the caller's overrides and otherwise hand every input back
//! unchanged. They let users customize forms for a language before real
//! rules exist; they are not grammars.

use crate::casing::match_case;
use crate::language::interface::LanguageRules;
use crate::overrides::{OverrideKind, Overrides};
use crate::types::{ConjugationRequest, DeterminerKind};

/// Override-only rules for one language code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassThroughRules {
    code: String,
}

impl PassThroughRules {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    fn lookup(&self, word: &str, overrides: &Overrides, kind: OverrideKind) -> String {
        let trimmed = word.trim();
        match overrides.lookup(kind, trimmed) {
            Some(value) => {
                log::debug!("{} override hit for '{trimmed}' ({})", kind.as_str(), self.code);
                match_case(trimmed, value)
            }
            None => word.to_string(),
        }
    }
}

impl LanguageRules for PassThroughRules {
    fn code(&self) -> &str {
        &self.code
    }

    fn to_ing(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Progressive)
    }

    fn to_past(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Past)
    }

    fn to_third_person(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::ThirdPerson)
    }

    fn base_verb(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::BaseVerb)
    }

    fn pluralize(&self, word: &str, _conservative: bool, overrides: &Overrides) -> String {
        if overrides.is_kept(word.trim()) {
            return word.to_string();
        }
        self.lookup(word, overrides, OverrideKind::Plural)
    }

    fn singularize(&self, word: &str, _conservative: bool, overrides: &Overrides) -> String {
        if overrides.is_kept(word.trim()) {
            return word.to_string();
        }
        self.lookup(word, overrides, OverrideKind::Singular)
    }

    fn possessive(&self, word: &str, _overrides: &Overrides) -> String {
        word.to_string()
    }

    fn to_comparative(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Comparative)
    }

    fn to_superlative(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Superlative)
    }

    fn to_adverb(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Adverb)
    }

    fn adverb_to_adjective(&self, word: &str, overrides: &Overrides) -> String {
        self.lookup(word, overrides, OverrideKind::Adjective)
    }

    fn negate(&self, words: &[String], _contracted: bool, _overrides: &Overrides) -> Vec<String> {
        words.to_vec()
    }

    fn yes_no_question(&self, words: &[String], _overrides: &Overrides) -> Vec<String> {
        words.to_vec()
    }

    fn wh_question(&self, words: &[String], _wh: &str, _overrides: &Overrides) -> Vec<String> {
        words.to_vec()
    }

    fn indefinite_article(&self, word: &str, overrides: &Overrides) -> String {
        overrides
            .lookup(OverrideKind::Determiner, word.trim())
            .unwrap_or_default()
            .to_string()
    }

    fn determiner(&self, phrase: &str, kind: DeterminerKind, overrides: &Overrides) -> String {
        match kind {
            DeterminerKind::None => String::new(),
            _ => self.indefinite_article(phrase, overrides),
        }
    }

    fn pronoun_variants(&self, word: &str) -> Vec<String> {
        vec![word.to_string()]
    }

    fn conjugate(&self, request: &ConjugationRequest, _overrides: &Overrides) -> String {
        request.lemma.clone()
    }
}

/// Spanish placeholder: pass-through plus "no" negation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanishRules {
    inner: PassThroughRules,
}

impl SpanishRules {
    pub fn new() -> Self {
        Self {
            inner: PassThroughRules::new("es"),
        }
    }
}

impl Default for SpanishRules {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRules for SpanishRules {
    fn code(&self) -> &str {
        self.inner.code()
    }

    fn to_ing(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_ing(word, overrides)
    }

    fn to_past(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_past(word, overrides)
    }

    fn to_third_person(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_third_person(word, overrides)
    }

    fn base_verb(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.base_verb(word, overrides)
    }

    fn pluralize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        self.inner.pluralize(word, conservative, overrides)
    }

    fn singularize(&self, word: &str, conservative: bool, overrides: &Overrides) -> String {
        self.inner.singularize(word, conservative, overrides)
    }

    fn possessive(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.possessive(word, overrides)
    }

    fn to_comparative(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_comparative(word, overrides)
    }

    fn to_superlative(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_superlative(word, overrides)
    }

    fn to_adverb(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.to_adverb(word, overrides)
    }

    fn adverb_to_adjective(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.adverb_to_adjective(word, overrides)
    }

    /// Inserts "no" before the final word ("Yo como" → "Yo no como")
    fn negate(&self, words: &[String], _contracted: bool, _overrides: &Overrides) -> Vec<String> {
        let mut negated = words.to_vec();
        if !negated.is_empty() {
            negated.insert(negated.len() - 1, "no".to_string());
        }
        negated
    }

    fn yes_no_question(&self, words: &[String], overrides: &Overrides) -> Vec<String> {
        self.inner.yes_no_question(words, overrides)
    }

    fn wh_question(&self, words: &[String], wh: &str, overrides: &Overrides) -> Vec<String> {
        self.inner.wh_question(words, wh, overrides)
    }

    fn indefinite_article(&self, word: &str, overrides: &Overrides) -> String {
        self.inner.indefinite_article(word, overrides)
    }

    fn determiner(&self, phrase: &str, kind: DeterminerKind, overrides: &Overrides) -> String {
        self.inner.determiner(phrase, kind, overrides)
    }

    fn pronoun_variants(&self, word: &str) -> Vec<String> {
        self.inner.pronoun_variants(word)
    }

    fn conjugate(&self, request: &ConjugationRequest, overrides: &Overrides) -> String {
        self.inner.conjugate(request, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_pass_through_returns_input() {
        let rules = PassThroughRules::new("de");
        let overrides = Overrides::new();
        assert_eq!(rules.pluralize("Haus", false, &overrides), "Haus");
        assert_eq!(rules.to_past("gehen", &overrides), "gehen");
        assert_eq!(rules.pronoun_variants("er"), ["er"]);
        assert_eq!(rules.determiner("Haus", DeterminerKind::Definite, &overrides), "");
        assert_eq!(rules.negate(&words("Ich gehe"), true, &overrides), words("Ich gehe"));
        assert_eq!(rules.conjugate(&ConjugationRequest::new("gehen"), &overrides), "gehen");
    }

    #[test]
    fn test_pass_through_applies_overrides() {
        let rules = PassThroughRules::new("de");
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Plural, "haus", "häuser");
        overrides.set(OverrideKind::Determiner, "haus", "das");
        assert_eq!(rules.pluralize("Haus", false, &overrides), "Häuser");
        assert_eq!(rules.determiner("Haus", DeterminerKind::Definite, &overrides), "das");
        assert_eq!(rules.determiner("Haus", DeterminerKind::None, &overrides), "");
    }

    #[test]
    fn test_kept_word_beats_override() {
        let rules = PassThroughRules::new("fr");
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Plural, "cheval", "chevaux");
        overrides.keep("cheval");
        assert_eq!(rules.pluralize("cheval", false, &overrides), "cheval");
    }

    #[test]
    fn test_spanish_negation() {
        let rules = SpanishRules::new();
        let overrides = Overrides::new();
        assert_eq!(rules.negate(&words("Yo como"), false, &overrides), words("Yo no como"));
        assert_eq!(rules.negate(&words("Vamos"), false, &overrides), words("no Vamos"));
        assert!(rules.negate(&[], false, &overrides).is_empty());
        assert_eq!(rules.code(), "es");
    }
}
