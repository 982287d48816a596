//! Article and determiner selection

use crate::casing::{is_all_caps, is_capitalized};
use crate::overrides::{OverrideKind, Overrides};
use crate::types::DeterminerKind;

use super::letters::is_vowel;
use super::EnglishRules;

impl EnglishRules {
    /// "a" or "an" from the sound of the phrase's first word
    pub(super) fn article_for(&self, phrase: &str, overrides: &Overrides) -> String {
        let phrase = phrase.trim();
        if let Some(value) = self.determiner_override(phrase, first_word(phrase), overrides) {
            return value;
        }

        let token = first_word(phrase).trim_start_matches(|c: char| !c.is_alphanumeric());
        let Some(first) = token.chars().next() else {
            return "a".to_string();
        };
        let lower = token.to_lowercase();
        let lexicon = self.lexicon;

        let vowel_sound = if lexicon.starts_with_silent_h(&lower) {
            true
        } else if lexicon.starts_with_consonant_sound(&lower) {
            false
        } else if is_all_caps(token) {
            // acronyms are read letter by letter: "an FBI agent", "a UN vote"
            lexicon.letter_has_vowel_sound(first)
        } else if first.is_ascii_digit() {
            let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
            digits.starts_with('8') || digits == "11" || digits == "18"
        } else {
            lower.chars().next().is_some_and(is_vowel)
        };

        let article = if vowel_sound { "an" } else { "a" };
        article.to_string()
    }

    pub(super) fn determiner_for(
        &self,
        phrase: &str,
        kind: DeterminerKind,
        overrides: &Overrides,
    ) -> String {
        let phrase = phrase.trim();
        let head = phrase.split_whitespace().last().unwrap_or_default();

        if kind != DeterminerKind::None {
            if let Some(value) = self.determiner_override(phrase, head, overrides) {
                return value;
            }
        }

        let single_word = !phrase.contains(char::is_whitespace);
        if single_word && is_capitalized(phrase) && !is_all_caps(phrase) {
            return String::new();
        }

        match kind {
            DeterminerKind::Definite => "the".to_string(),
            DeterminerKind::Indefinite => {
                let lower = head.to_lowercase();
                if self.lexicon.is_invariant(&lower) || self.looks_plural(&lower) {
                    "some".to_string()
                } else {
                    self.article_for(phrase, overrides)
                }
            }
            DeterminerKind::None => String::new(),
        }
    }

    /// Override for the whole phrase, falling back to one of its words
    fn determiner_override(&self, phrase: &str, word: &str, overrides: &Overrides) -> Option<String> {
        overrides
            .lookup(OverrideKind::Determiner, phrase)
            .or_else(|| overrides.lookup(OverrideKind::Determiner, word))
            .map(|value| {
                log::debug!("determiner override hit for '{phrase}'");
                value.to_string()
            })
    }

    fn looks_plural(&self, noun: &str) -> bool {
        if self.lexicon.irregular_singular(noun).is_some() {
            return true;
        }
        noun.len() > 3
            && noun.ends_with('s')
            && !["ss", "us", "is"].iter().any(|end| noun.ends_with(end))
    }
}

fn first_word(phrase: &str) -> &str {
    phrase.split_whitespace().next().unwrap_or_default()
}
