//! Every cell of the conjugation matrix is defined and reproducible

use wordshape_core::{Aspect, ConjugationRequest, Engine, Number, Person, Tense, Voice};

#[test]
fn test_every_cell_is_defined_for_regular_and_irregular_verbs() {
    let engine = Engine::in_memory("en");
    for lemma in ["walk", "go", "be", "have", "write", "stop", "try"] {
        for tense in Tense::ALL {
            for aspect in Aspect::ALL {
                for voice in Voice::ALL {
                    for person in Person::ALL {
                        for number in Number::ALL {
                            let request = ConjugationRequest::new(lemma)
                                .tense(tense)
                                .aspect(aspect)
                                .voice(voice)
                                .person(person)
                                .number(number);
                            let first = engine.conjugate(&request);
                            assert!(!first.is_empty(), "{request:?}");
                            assert_eq!(first, engine.conjugate(&request), "{request:?}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_table_rows_for_first_person_plural() {
    let engine = Engine::in_memory("en");
    let rows = engine.conjugation_table("go", Person::First, Number::Plural);
    assert_eq!(rows.len(), 24);

    let form = |tense, aspect, voice| {
        rows.iter()
            .find(|row| row.tense == tense && row.aspect == aspect && row.voice == voice)
            .map(|row| row.form.as_str())
    };

    assert_eq!(form(Tense::Present, Aspect::Simple, Voice::Active), Some("go"));
    assert_eq!(form(Tense::Past, Aspect::Simple, Voice::Active), Some("went"));
    assert_eq!(
        form(Tense::Present, Aspect::Progressive, Voice::Active),
        Some("are going")
    );
    assert_eq!(form(Tense::Past, Aspect::Perfect, Voice::Active), Some("had gone"));
    assert_eq!(form(Tense::Past, Aspect::Simple, Voice::Passive), Some("were gone"));
    assert_eq!(
        form(Tense::Future, Aspect::PerfectProgressive, Voice::Active),
        Some("will have been going")
    );
}

#[test]
fn test_regular_verb_spelling_in_compound_forms() {
    let engine = Engine::in_memory("en");
    let request = ConjugationRequest::new("stop")
        .person(Person::First)
        .aspect(Aspect::Progressive);
    assert_eq!(engine.conjugate(&request), "am stopping");

    let request = ConjugationRequest::new("try").aspect(Aspect::Perfect);
    assert_eq!(engine.conjugate(&request), "has tried");
}
