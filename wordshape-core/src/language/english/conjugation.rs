//! Full conjugation over person, number, tense, aspect and voice
//!
//! Active voice:
//!
//! | aspect              | form                                     |
//! |---------------------|------------------------------------------|
//! | simple              | third person or base, past, will + base  |
//! | progressive         | be + -ing                                |
//! | perfect             | have + participle                        |
//! | perfect progressive | have + been + -ing                       |
//!
//! Passive voice keeps the same auxiliary chain and puts the past
//! participle last: be + pp, be + being + pp, have + been + pp,
//! have + been + being + pp.

use crate::casing::match_case;
use crate::language::LanguageRules;
use crate::overrides::Overrides;
use crate::types::{Aspect, ConjugationRequest, Number, Person, Tense, Voice};

use super::EnglishRules;

impl EnglishRules {
    pub(super) fn conjugate_request(
        &self,
        request: &ConjugationRequest,
        overrides: &Overrides,
    ) -> String {
        let original = request.lemma.trim();
        if original.is_empty() {
            return String::new();
        }

        let lemma = original.to_lowercase();
        let (person, number, tense) = (request.person, request.number, request.tense);
        let be = be_form(person, number, tense);
        let have = have_form(person, number, tense);

        let form = match (request.voice, request.aspect) {
            (Voice::Active, Aspect::Simple) => self.simple_form(request, &lemma, overrides),
            (Voice::Active, Aspect::Progressive) => {
                format!("{be} {}", self.to_ing(&lemma, overrides))
            }
            (Voice::Active, Aspect::Perfect) => {
                format!("{have} {}", self.past_participle(&lemma, overrides))
            }
            (Voice::Active, Aspect::PerfectProgressive) => {
                format!("{have} been {}", self.to_ing(&lemma, overrides))
            }
            (Voice::Passive, aspect) => {
                let participle = self.past_participle(&lemma, overrides);
                match aspect {
                    Aspect::Simple => format!("{be} {participle}"),
                    Aspect::Progressive => format!("{be} being {participle}"),
                    Aspect::Perfect => format!("{have} been {participle}"),
                    Aspect::PerfectProgressive => format!("{have} been being {participle}"),
                }
            }
        };

        match_case(original, &form)
    }

    fn simple_form(&self, request: &ConjugationRequest, lemma: &str, overrides: &Overrides) -> String {
        if lemma == "be" {
            return be_form(request.person, request.number, request.tense).to_string();
        }

        match request.tense {
            Tense::Present if request.is_third_singular() => {
                self.to_third_person(lemma, overrides)
            }
            Tense::Present => lemma.to_string(),
            Tense::Past => self.to_past(lemma, overrides),
            Tense::Future => format!("will {lemma}"),
        }
    }
}

fn be_form(person: Person, number: Number, tense: Tense) -> &'static str {
    match (tense, person, number) {
        (Tense::Present, Person::First, Number::Singular) => "am",
        (Tense::Present, Person::Third, Number::Singular) => "is",
        (Tense::Present, _, _) => "are",
        (Tense::Past, Person::First | Person::Third, Number::Singular) => "was",
        (Tense::Past, _, _) => "were",
        (Tense::Future, _, _) => "will be",
    }
}

fn have_form(person: Person, number: Number, tense: Tense) -> &'static str {
    match (tense, person, number) {
        (Tense::Present, Person::Third, Number::Singular) => "has",
        (Tense::Present, _, _) => "have",
        (Tense::Past, _, _) => "had",
        (Tense::Future, _, _) => "will have",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjugate(request: ConjugationRequest) -> String {
        EnglishRules::new().conjugate(&request, &Overrides::new())
    }

    #[test]
    fn test_active_simple() {
        let eat = ConjugationRequest::new("eat");
        assert_eq!(conjugate(eat.clone()), "eats");
        assert_eq!(conjugate(eat.clone().person(Person::First)), "eat");
        assert_eq!(conjugate(eat.clone().tense(Tense::Past)), "ate");
        assert_eq!(conjugate(eat.tense(Tense::Future)), "will eat");
    }

    #[test]
    fn test_active_compound_aspects() {
        let eat = ConjugationRequest::new("eat");
        assert_eq!(conjugate(eat.clone().aspect(Aspect::Progressive)), "is eating");
        assert_eq!(
            conjugate(eat.clone().aspect(Aspect::Progressive).person(Person::First)),
            "am eating"
        );
        assert_eq!(
            conjugate(eat.clone().aspect(Aspect::Progressive).number(Number::Plural)),
            "are eating"
        );
        assert_eq!(conjugate(eat.clone().aspect(Aspect::Perfect)), "has eaten");
        assert_eq!(
            conjugate(eat.clone().aspect(Aspect::Perfect).tense(Tense::Past)),
            "had eaten"
        );
        assert_eq!(
            conjugate(eat.aspect(Aspect::PerfectProgressive).tense(Tense::Future)),
            "will have been eating"
        );
    }

    #[test]
    fn test_passive() {
        let write = ConjugationRequest::new("write").voice(Voice::Passive);
        assert_eq!(conjugate(write.clone()), "is written");
        assert_eq!(
            conjugate(write.clone().tense(Tense::Past).number(Number::Plural)),
            "were written"
        );
        assert_eq!(
            conjugate(write.clone().aspect(Aspect::Progressive)),
            "is being written"
        );
        assert_eq!(
            conjugate(write.clone().aspect(Aspect::Perfect).tense(Tense::Future)),
            "will have been written"
        );
        assert_eq!(
            conjugate(write.aspect(Aspect::PerfectProgressive).person(Person::Second)),
            "have been being written"
        );
    }

    #[test]
    fn test_regular_verb_passive_uses_past() {
        let request = ConjugationRequest::new("paint")
            .voice(Voice::Passive)
            .tense(Tense::Past);
        assert_eq!(conjugate(request), "was painted");
    }

    #[test]
    fn test_be_agrees_in_simple_aspect() {
        let be = ConjugationRequest::new("be");
        assert_eq!(conjugate(be.clone().person(Person::First)), "am");
        assert_eq!(conjugate(be.clone().tense(Tense::Past).number(Number::Plural)), "were");
        assert_eq!(conjugate(be.tense(Tense::Future)), "will be");
    }

    #[test]
    fn test_lemma_casing_is_kept() {
        assert_eq!(conjugate(ConjugationRequest::new("Go").tense(Tense::Past)), "Went");
        assert_eq!(
            conjugate(ConjugationRequest::new("RUN").aspect(Aspect::Progressive)),
            "IS RUNNING"
        );
    }

    #[test]
    fn test_every_cell_is_defined() {
        let rules = EnglishRules::new();
        let overrides = Overrides::new();
        for tense in Tense::ALL {
            for aspect in Aspect::ALL {
                for voice in Voice::ALL {
                    for person in Person::ALL {
                        for number in Number::ALL {
                            let request = ConjugationRequest::new("take")
                                .tense(tense)
                                .aspect(aspect)
                                .voice(voice)
                                .person(person)
                                .number(number);
                            let form = rules.conjugate(&request, &overrides);
                            assert!(!form.is_empty(), "{request:?}");
                            assert_eq!(form, rules.conjugate(&request, &overrides));
                        }
                    }
                }
            }
        }
    }
}
