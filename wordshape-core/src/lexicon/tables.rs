//! Runtime English lexicon
//!
//! Compiles a [`LexiconConfig`] into hash tables. Every lookup takes an
//! already-lowercased key and never allocates.

use std::collections::{HashMap, HashSet};

use crate::error::LexiconError;
use crate::lexicon::config::{LexiconConfig, PRONOUN_SLOTS};
use crate::types::{Number, Person};

/// Classical (Latin/Greek) plural families, gated by explicit membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicalPlural {
    /// cactus → cacti
    UsToI,
    /// crisis → crises
    IsToEs,
    /// criterion → criteria
    OnToA,
    /// datum → data
    UmToA,
    /// matrix → matrices, vertex → vertices
    IxExToIces,
}

/// Compiled English lexicon tables
#[derive(Debug, Clone, Default)]
pub struct EnglishLexicon {
    past: HashMap<String, String>,
    participle: HashMap<String, String>,
    third_person: HashMap<String, String>,
    lemmas: HashMap<String, String>,
    past_forms: HashSet<String>,

    plurals: HashMap<String, String>,
    singulars: HashMap<String, String>,
    invariant: HashSet<String>,
    f_takes_s: HashSet<String>,
    fe_nouns: HashSet<String>,
    ve_nouns: HashSet<String>,
    us_to_i: HashSet<String>,
    is_to_es: HashSet<String>,
    on_to_a: HashSet<String>,
    um_to_a: HashSet<String>,
    ix_ex_to_ices: HashSet<String>,
    o_takes_s: HashSet<String>,
    oe_nouns: HashSet<String>,
    ie_nouns: HashSet<String>,
    use_nouns: HashSet<String>,

    comparatives: HashMap<String, String>,
    superlatives: HashMap<String, String>,
    adverbs: HashMap<String, String>,
    adjectives: HashMap<String, String>,
    plain_ly: HashSet<String>,

    auxiliaries: HashSet<String>,
    determiners: HashSet<String>,
    contractions: HashMap<String, String>,

    pronoun_rows: Vec<[String; PRONOUN_SLOTS]>,
    pronoun_index: HashMap<String, usize>,
    subjects: HashMap<String, (Person, Number)>,

    silent_h: Vec<String>,
    consonant_sound: Vec<String>,
    vowel_sound_letters: HashSet<char>,
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn lowercase_map(map: &HashMap<String, String>) -> HashMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
        .collect()
}

impl EnglishLexicon {
    /// Build runtime tables from a validated configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        config.validate()?;

        let mut past = HashMap::new();
        let mut participle = HashMap::new();
        let mut lemmas = HashMap::new();
        let mut past_forms = HashSet::new();

        // Inverted forms first so that a base spelling ("lay") wins over
        // a homograph past form of another verb ("lie" → "lay").
        for (base, past_form, participle_form) in &config.verbs.irregular {
            let (base, past_form, participle_form) = (
                base.to_lowercase(),
                past_form.to_lowercase(),
                participle_form.to_lowercase(),
            );
            lemmas.insert(past_form.clone(), base.clone());
            lemmas.insert(participle_form.clone(), base.clone());
            past_forms.insert(past_form.clone());
            past.insert(base.clone(), past_form);
            participle.insert(base, participle_form);
        }
        for base in past.keys() {
            lemmas.insert(base.clone(), base.clone());
        }

        let third_person = lowercase_map(&config.verbs.third_person);
        for (base, form) in &third_person {
            lemmas.insert(form.clone(), base.clone());
        }
        lemmas.extend(lowercase_map(&config.verbs.lemmas));

        let plurals = lowercase_map(&config.nouns.irregular);
        let singulars = plurals
            .iter()
            .map(|(singular, plural)| (plural.clone(), singular.clone()))
            .collect();

        let adverbs = lowercase_map(&config.adjectives.adverb);
        let mut adjectives: HashMap<String, String> = adverbs
            .iter()
            .map(|(adjective, adverb)| (adverb.clone(), adjective.clone()))
            .collect();
        adjectives.extend(lowercase_map(&config.adjectives.from_adverb));

        let mut pronoun_rows = Vec::with_capacity(config.pronouns.rows.len());
        let mut pronoun_index = HashMap::new();
        for row in &config.pronouns.rows {
            let slots: [String; PRONOUN_SLOTS] = row.clone().try_into().map_err(|_| {
                LexiconError::Invalid(format!("pronoun row {row:?} has the wrong slot count"))
            })?;
            let index = pronoun_rows.len();
            for form in &slots {
                // First row claiming an ambiguous form ("her", "his") keeps it
                pronoun_index.entry(form.to_lowercase()).or_insert(index);
            }
            pronoun_rows.push(slots);
        }

        let subjects = config
            .pronouns
            .subjects
            .iter()
            .map(|(word, agreement)| (word.to_lowercase(), (agreement.person, agreement.number)))
            .collect();

        Ok(Self {
            past,
            participle,
            third_person,
            lemmas,
            past_forms,
            plurals,
            singulars,
            invariant: lowercase_set(&config.nouns.invariant),
            f_takes_s: lowercase_set(&config.nouns.f_takes_s),
            fe_nouns: lowercase_set(&config.nouns.fe_nouns),
            ve_nouns: lowercase_set(&config.nouns.ve_nouns),
            us_to_i: lowercase_set(&config.nouns.us_to_i),
            is_to_es: lowercase_set(&config.nouns.is_to_es),
            on_to_a: lowercase_set(&config.nouns.on_to_a),
            um_to_a: lowercase_set(&config.nouns.um_to_a),
            ix_ex_to_ices: lowercase_set(&config.nouns.ix_ex_to_ices),
            o_takes_s: lowercase_set(&config.nouns.o_takes_s),
            oe_nouns: lowercase_set(&config.nouns.oe_nouns),
            ie_nouns: lowercase_set(&config.nouns.ie_nouns),
            use_nouns: lowercase_set(&config.nouns.use_nouns),
            comparatives: lowercase_map(&config.adjectives.comparative),
            superlatives: lowercase_map(&config.adjectives.superlative),
            adverbs,
            adjectives,
            plain_ly: lowercase_set(&config.adjectives.plain_ly),
            auxiliaries: lowercase_set(&config.clauses.auxiliaries),
            determiners: lowercase_set(&config.clauses.determiners),
            contractions: lowercase_map(&config.clauses.contractions),
            pronoun_rows,
            pronoun_index,
            subjects,
            silent_h: config.articles.silent_h.iter().map(|w| w.to_lowercase()).collect(),
            consonant_sound: config
                .articles
                .consonant_sound
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            vowel_sound_letters: config
                .articles
                .vowel_sound_letters
                .to_lowercase()
                .chars()
                .collect(),
        })
    }

    // --- Verbs ---

    pub fn irregular_past(&self, base: &str) -> Option<&str> {
        self.past.get(base).map(String::as_str)
    }

    pub fn irregular_participle(&self, base: &str) -> Option<&str> {
        self.participle.get(base).map(String::as_str)
    }

    pub fn irregular_third_person(&self, base: &str) -> Option<&str> {
        self.third_person.get(base).map(String::as_str)
    }

    /// Lemma of an irregular or auxiliary form (including the base itself)
    pub fn lemma(&self, form: &str) -> Option<&str> {
        self.lemmas.get(form).map(String::as_str)
    }

    /// True for the simple-past column of the irregular table
    pub fn is_irregular_past(&self, form: &str) -> bool {
        self.past_forms.contains(form)
    }

    // --- Nouns ---

    pub fn irregular_plural(&self, singular: &str) -> Option<&str> {
        self.plurals.get(singular).map(String::as_str)
    }

    pub fn irregular_singular(&self, plural: &str) -> Option<&str> {
        self.singulars.get(plural).map(String::as_str)
    }

    pub fn is_invariant(&self, noun: &str) -> bool {
        self.invariant.contains(noun)
    }

    pub fn f_takes_s(&self, noun: &str) -> bool {
        self.f_takes_s.contains(noun)
    }

    pub fn is_fe_noun(&self, noun: &str) -> bool {
        self.fe_nouns.contains(noun)
    }

    pub fn is_ve_noun(&self, noun: &str) -> bool {
        self.ve_nouns.contains(noun)
    }

    pub fn o_takes_s(&self, noun: &str) -> bool {
        self.o_takes_s.contains(noun)
    }

    pub fn is_oe_noun(&self, noun: &str) -> bool {
        self.oe_nouns.contains(noun)
    }

    pub fn is_ie_noun(&self, noun: &str) -> bool {
        self.ie_nouns.contains(noun)
    }

    pub fn is_use_noun(&self, noun: &str) -> bool {
        self.use_nouns.contains(noun)
    }

    /// Whether `noun` (singular) belongs to the given classical family
    pub fn is_classical(&self, family: ClassicalPlural, noun: &str) -> bool {
        match family {
            ClassicalPlural::UsToI => self.us_to_i.contains(noun),
            ClassicalPlural::IsToEs => self.is_to_es.contains(noun),
            ClassicalPlural::OnToA => self.on_to_a.contains(noun),
            ClassicalPlural::UmToA => self.um_to_a.contains(noun),
            ClassicalPlural::IxExToIces => self.ix_ex_to_ices.contains(noun),
        }
    }

    /// Nouns the lexicon has an explicit opinion about
    pub fn is_known_noun(&self, noun: &str) -> bool {
        self.plurals.contains_key(noun)
            || self.singulars.contains_key(noun)
            || self.invariant.contains(noun)
            || self.us_to_i.contains(noun)
            || self.is_to_es.contains(noun)
            || self.on_to_a.contains(noun)
            || self.um_to_a.contains(noun)
            || self.ix_ex_to_ices.contains(noun)
    }

    // --- Adjectives and adverbs ---

    pub fn irregular_comparative(&self, adjective: &str) -> Option<&str> {
        self.comparatives.get(adjective).map(String::as_str)
    }

    pub fn irregular_superlative(&self, adjective: &str) -> Option<&str> {
        self.superlatives.get(adjective).map(String::as_str)
    }

    pub fn irregular_adverb(&self, adjective: &str) -> Option<&str> {
        self.adverbs.get(adjective).map(String::as_str)
    }

    pub fn irregular_adjective(&self, adverb: &str) -> Option<&str> {
        self.adjectives.get(adverb).map(String::as_str)
    }

    pub fn is_plain_ly(&self, word: &str) -> bool {
        self.plain_ly.contains(word)
    }

    // --- Function words ---

    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(word)
    }

    pub fn contraction(&self, auxiliary: &str) -> Option<&str> {
        self.contractions.get(auxiliary).map(String::as_str)
    }

    pub fn is_determiner(&self, word: &str) -> bool {
        self.determiners.contains(word)
    }

    /// Pronoun paradigm row containing `form` in any slot
    pub fn pronoun_row(&self, form: &str) -> Option<&[String; PRONOUN_SLOTS]> {
        self.pronoun_index
            .get(form)
            .and_then(|&index| self.pronoun_rows.get(index))
    }

    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronoun_index.contains_key(word)
    }

    /// Person and number of a subject word ("he", "those", "everyone")
    pub fn subject_agreement(&self, word: &str) -> Option<(Person, Number)> {
        self.subjects.get(word).copied()
    }

    // --- Articles ---

    pub fn starts_with_silent_h(&self, word: &str) -> bool {
        self.silent_h.iter().any(|prefix| word.starts_with(prefix.as_str()))
    }

    pub fn starts_with_consonant_sound(&self, word: &str) -> bool {
        self.consonant_sound
            .iter()
            .any(|prefix| word.starts_with(prefix.as_str()))
    }

    /// Whether the spoken name of `letter` starts with a vowel sound
    pub fn letter_has_vowel_sound(&self, letter: char) -> bool {
        letter
            .to_lowercase()
            .next()
            .is_some_and(|c| self.vowel_sound_letters.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::english;

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = english();
        assert_eq!(lexicon.irregular_past("go"), Some("went"));
        assert_eq!(lexicon.irregular_participle("go"), Some("gone"));
        assert_eq!(lexicon.irregular_plural("child"), Some("children"));
        assert_eq!(lexicon.irregular_singular("children"), Some("child"));
    }

    #[test]
    fn test_lemma_inversion_prefers_bases() {
        let lexicon = english();
        assert_eq!(lexicon.lemma("went"), Some("go"));
        assert_eq!(lexicon.lemma("gone"), Some("go"));
        assert_eq!(lexicon.lemma("lay"), Some("lay"));
        assert_eq!(lexicon.lemma("lain"), Some("lie"));
        assert_eq!(lexicon.lemma("is"), Some("be"));
        assert_eq!(lexicon.lemma("has"), Some("have"));
        assert_eq!(lexicon.lemma("did"), Some("do"));
        assert_eq!(lexicon.lemma("sing"), Some("sing"));
    }

    #[test]
    fn test_past_forms_exclude_participles() {
        let lexicon = english();
        assert!(lexicon.is_irregular_past("drank"));
        assert!(!lexicon.is_irregular_past("drunk"));
    }

    #[test]
    fn test_classical_membership() {
        let lexicon = english();
        assert!(lexicon.is_classical(ClassicalPlural::UsToI, "cactus"));
        assert!(!lexicon.is_classical(ClassicalPlural::UsToI, "virus"));
        assert!(lexicon.is_classical(ClassicalPlural::IxExToIces, "vertex"));
        assert!(lexicon.is_known_noun("datum"));
        assert!(!lexicon.is_known_noun("table"));
    }

    #[test]
    fn test_pronoun_rows_share_index() {
        let lexicon = english();
        assert_eq!(lexicon.pronoun_row("him"), lexicon.pronoun_row("he"));
        assert_eq!(lexicon.pronoun_row("i").map(|row| row[0].as_str()), Some("I"));
        assert_eq!(lexicon.pronoun_row("her").map(|row| row[0].as_str()), Some("she"));
        assert!(lexicon.pronoun_row("table").is_none());
    }

    #[test]
    fn test_subject_agreement() {
        let lexicon = english();
        assert_eq!(
            lexicon.subject_agreement("they"),
            Some((Person::Third, Number::Plural))
        );
        assert_eq!(
            lexicon.subject_agreement("i"),
            Some((Person::First, Number::Singular))
        );
        assert_eq!(lexicon.subject_agreement("dog"), None);
    }

    #[test]
    fn test_function_words() {
        let lexicon = english();
        assert!(lexicon.is_auxiliary("could"));
        assert!(!lexicon.is_auxiliary("go"));
        assert_eq!(lexicon.contraction("will"), Some("won't"));
        assert_eq!(lexicon.contraction("may"), None);
        assert!(lexicon.is_determiner("the"));
    }

    #[test]
    fn test_article_tables() {
        let lexicon = english();
        assert!(lexicon.starts_with_silent_h("hourly"));
        assert!(lexicon.starts_with_consonant_sound("university"));
        assert!(lexicon.letter_has_vowel_sound('F'));
        assert!(!lexicon.letter_has_vowel_sound('b'));
    }
}
