//! Clause transforms: negation, yes/no and wh-questions
//!
//! Clauses arrive as ordered words with punctuation already detached. When
//! the clause has an auxiliary it is negated or inverted in place; otherwise
//! do-support synthesizes "do", "does" or "did" and the main verb falls back
//! to its base form.
//!
//! The main verb is taken to be the first word after the subject phrase. The
//! subject phrase is a single word, or two words when a clause of three or
//! more words opens with a determiner ("The dog barks").

use crate::casing::{capitalize_first, decapitalize_first, is_all_caps, is_capitalized, match_case};
use crate::language::LanguageRules;
use crate::overrides::Overrides;
use crate::types::{Number, Person};

use super::EnglishRules;

impl EnglishRules {
    pub(super) fn negate_clause(
        &self,
        words: &[String],
        contracted: bool,
        overrides: &Overrides,
    ) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }

        if let Some(index) = self.auxiliary_index(words) {
            let mut negated = words.to_vec();
            negated.splice(index..=index, self.negative(&words[index], contracted));
            return negated;
        }

        let verb_index = self.verb_index(words);
        let verb = &words[verb_index];
        let support = self.support_auxiliary(&words[..verb_index], verb);
        let initial = verb_index == 0;

        let mut negated = words[..verb_index].to_vec();
        negated.extend(self.negative(&cased_like(verb, support, initial), contracted));
        negated.push(self.main_verb(verb, initial, overrides));
        negated.extend_from_slice(&words[verb_index + 1..]);
        negated
    }

    pub(super) fn question_clause(&self, words: &[String], overrides: &Overrides) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }

        if let Some(index) = self.auxiliary_index(words) {
            let mut rest = words.to_vec();
            let auxiliary = rest.remove(index);
            if index > 0 {
                rest[0] = self.inner_subject(&rest[0]);
            }
            let front = if is_all_caps(&auxiliary) {
                auxiliary
            } else {
                capitalize_first(&auxiliary.to_lowercase())
            };
            let mut question = Vec::with_capacity(words.len());
            question.push(front);
            question.extend(rest);
            return question;
        }

        let verb_index = self.verb_index(words);
        let verb = &words[verb_index];
        let support = self.support_auxiliary(&words[..verb_index], verb);

        let mut question = Vec::with_capacity(words.len() + 1);
        question.push(if is_all_caps(verb) {
            support.to_uppercase()
        } else {
            capitalize_first(support)
        });
        question.extend(
            words[..verb_index]
                .iter()
                .enumerate()
                .map(|(i, word)| if i == 0 { self.inner_subject(word) } else { word.clone() }),
        );
        question.push(self.main_verb(verb, verb_index == 0, overrides));
        question.extend_from_slice(&words[verb_index + 1..]);
        question
    }

    pub(super) fn wh_clause(&self, words: &[String], wh: &str, overrides: &Overrides) -> Vec<String> {
        let mut question = self.question_clause(words, overrides);
        let wh = wh.trim();
        if wh.is_empty() {
            return question;
        }

        if let Some(first) = question.first_mut() {
            if !is_all_caps(first) {
                *first = decapitalize_first(first);
            }
        }
        question.insert(0, capitalize_first(wh));
        question
    }

    fn auxiliary_index(&self, words: &[String]) -> Option<usize> {
        words
            .iter()
            .position(|word| self.lexicon.is_auxiliary(&word.to_lowercase()))
    }

    fn verb_index(&self, words: &[String]) -> usize {
        let subject = match words.len() {
            0 | 1 => 0,
            2 => 1,
            _ if self.lexicon.is_determiner(&words[0].to_lowercase()) => 2,
            _ => 1,
        };
        subject.min(words.len().saturating_sub(1))
    }

    /// Auxiliary followed by "not", or its contraction when asked for one
    fn negative(&self, auxiliary: &str, contracted: bool) -> Vec<String> {
        match self.lexicon.contraction(&auxiliary.to_lowercase()) {
            Some(contraction) if contracted => vec![match_case(auxiliary, contraction)],
            _ => {
                let not = if is_all_caps(auxiliary) { "NOT" } else { "not" };
                vec![auxiliary.to_string(), not.to_string()]
            }
        }
    }

    /// Base form of the main verb after do-support
    fn main_verb(&self, verb: &str, initial: bool, overrides: &Overrides) -> String {
        let base = self.base_verb(verb, overrides);
        if initial && !is_all_caps(verb) {
            decapitalize_first(&base)
        } else {
            base
        }
    }

    /// Lowercase a sentence-initial pronoun or determiner moved inside the clause
    fn inner_subject(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let function_word = self.lexicon.is_pronoun(&lower) || self.lexicon.is_determiner(&lower);
        if lower != "i" && function_word && !is_all_caps(word) {
            decapitalize_first(word)
        } else {
            word.to_string()
        }
    }

    /// "did" for past verbs, otherwise "does" or "do" by subject agreement
    fn support_auxiliary(&self, subject: &[String], verb: &str) -> &'static str {
        let verb = verb.to_lowercase();
        if self.looks_past(&verb) {
            return "did";
        }
        match self.infer_subject(subject, &verb) {
            (Person::Third, Number::Singular) => "does",
            _ => "do",
        }
    }

    fn looks_past(&self, verb: &str) -> bool {
        if self.lexicon.is_irregular_past(verb) {
            return true;
        }
        let n = verb.len();
        verb.ends_with("ed") && n > 3 && (!verb.ends_with("eed") || n > 5)
    }

    /// Person and number of a subject phrase
    ///
    /// Subject-word table, then irregular plural heads, then the proper-name
    /// heuristic, then `-s` agreement on the verb, then third person plural.
    fn infer_subject(&self, subject: &[String], verb: &str) -> (Person, Number) {
        let lexicon = self.lexicon;

        if let Some(agreement) = subject
            .iter()
            .find_map(|word| lexicon.subject_agreement(&word.to_lowercase()))
        {
            return agreement;
        }

        if let Some(head) = subject.last() {
            let lower = head.to_lowercase();
            if lexicon.irregular_singular(&lower).is_some() {
                return (Person::Third, Number::Plural);
            }

            let function_word = lexicon.is_pronoun(&lower)
                || lexicon.is_determiner(&lower)
                || lexicon.is_auxiliary(&lower);
            if subject.len() == 1
                && is_capitalized(head)
                && !is_all_caps(head)
                && !function_word
                && !lexicon.is_invariant(&lower)
                && !lower.ends_with('s')
            {
                log::trace!("'{head}' taken as a singular proper name");
                return (Person::Third, Number::Singular);
            }
        }

        if verb.ends_with('s') && !verb.ends_with("ss") {
            return (Person::Third, Number::Singular);
        }

        (Person::Third, Number::Plural)
    }
}

/// `word` cased for its position: all caps follows the model, and a
/// sentence-initial capital carries over
fn cased_like(model: &str, word: &str, initial: bool) -> String {
    if is_all_caps(model) {
        word.to_uppercase()
    } else if initial && is_capitalized(model) {
        capitalize_first(word)
    } else {
        word.to_string()
    }
}
