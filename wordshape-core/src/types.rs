//! Grammatical value types shared by every rule set

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// Kebab-case name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "first",
            Person::Second => "second",
            Person::Third => "third",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb tense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tense {
    Present,
    Past,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Past, Tense::Future];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Future => "future",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aspect {
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
}

impl Aspect {
    pub const ALL: [Aspect; 4] = [
        Aspect::Simple,
        Aspect::Progressive,
        Aspect::Perfect,
        Aspect::PerfectProgressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Simple => "simple",
            Aspect::Progressive => "progressive",
            Aspect::Perfect => "perfect",
            Aspect::PerfectProgressive => "perfect-progressive",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verb voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which determiner a noun phrase should receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeterminerKind {
    /// "the"
    Definite,
    /// "a", "an" or "some"
    Indefinite,
    /// No determiner at all
    None,
}

/// A single conjugation request
///
/// Defaults to third person singular, present simple, active voice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationRequest {
    pub lemma: String,
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
    pub aspect: Aspect,
    pub voice: Voice,
}

impl ConjugationRequest {
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            person: Person::Third,
            number: Number::Singular,
            tense: Tense::Present,
            aspect: Aspect::Simple,
            voice: Voice::Active,
        }
    }

    pub fn person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    pub fn number(mut self, number: Number) -> Self {
        self.number = number;
        self
    }

    pub fn tense(mut self, tense: Tense) -> Self {
        self.tense = tense;
        self
    }

    pub fn aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    /// True for the third person singular cell of the paradigm
    pub fn is_third_singular(&self) -> bool {
        self.person == Person::Third && self.number == Number::Singular
    }
}

/// One row of a conjugation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationRow {
    pub tense: Tense,
    pub aspect: Aspect,
    pub voice: Voice,
    pub form: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serialized_form() {
        for aspect in Aspect::ALL {
            let json = serde_json::to_string(&aspect).unwrap();
            assert_eq!(json, format!("\"{aspect}\""));
        }
        assert_eq!(Tense::Future.to_string(), "future");
        assert_eq!(Voice::Passive.as_str(), "passive");
    }

    #[test]
    fn test_request_defaults() {
        let request = ConjugationRequest::new("walk");
        assert_eq!(request.person, Person::Third);
        assert_eq!(request.number, Number::Singular);
        assert_eq!(request.tense, Tense::Present);
        assert_eq!(request.aspect, Aspect::Simple);
        assert_eq!(request.voice, Voice::Active);
        assert!(request.is_third_singular());
    }

    #[test]
    fn test_request_builder_chain() {
        let request = ConjugationRequest::new("eat")
            .person(Person::First)
            .number(Number::Plural)
            .tense(Tense::Future)
            .aspect(Aspect::PerfectProgressive)
            .voice(Voice::Passive);
        assert_eq!(request.lemma, "eat");
        assert!(!request.is_third_singular());
        assert_eq!(request.aspect, Aspect::PerfectProgressive);
    }

    #[test]
    fn test_kebab_case_serialization() {
        let json = serde_json::to_string(&Aspect::PerfectProgressive).unwrap();
        assert_eq!(json, "\"perfect-progressive\"");
        let person: Person = serde_json::from_str("\"third\"").unwrap();
        assert_eq!(person, Person::Third);
    }

    #[test]
    fn test_matrix_dimensions() {
        assert_eq!(Tense::ALL.len() * Aspect::ALL.len() * Voice::ALL.len(), 24);
        assert_eq!(Person::ALL.len() * Number::ALL.len(), 6);
    }
}
