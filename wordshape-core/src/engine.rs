//! Engine façade
//!
//! An [`Engine`] pairs one normalized language tag with its [`RuleSet`] and
//! reads overrides for that tag from a shared [`OverridesStore`]. Overrides
//! are fetched on every call, never cached, so edits made through any engine
//! sharing the store apply to the next call everywhere.
//!
//! Every word operation exists at two levels: on a single word, and on free
//! text where the tokenizer isolates the target word from its punctuation
//! and the result is rejoined with single spaces.
//!
//! # Usage
//!
//! ```rust
//! use wordshape_core::{Engine, WordOperation, WordTarget};
//!
//! let engine = Engine::in_memory("en-US");
//! assert_eq!(engine.to_past("go"), "went");
//! assert_eq!(
//!     engine.apply_text(WordOperation::Plural, "I saw the child.", WordTarget::Last),
//!     "I saw the children."
//! );
//! assert_eq!(engine.negate_text("He goes home.", true), "He doesn't go home.");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::UnknownName;
use crate::language::{Language, LanguageRules, LanguageTag, RuleSet};
use crate::overrides::{Overrides, OverridesStore};
use crate::tokenizer;
use crate::types::{
    Aspect, ConjugationRequest, ConjugationRow, DeterminerKind, Number, Person, Tense, Voice,
};

/// Single-word operation, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordOperation {
    Plural,
    Singular,
    Possessive,
    Past,
    Participle,
    ThirdPerson,
    Ing,
    Base,
    Comparative,
    Superlative,
    Adverb,
    Adjective,
    /// Indefinite article; in text it is inserted before the word
    Article,
    /// Case variants joined with ", "; in text the word is left alone
    Pronouns,
}

impl WordOperation {
    pub const ALL: [WordOperation; 14] = [
        WordOperation::Plural,
        WordOperation::Singular,
        WordOperation::Possessive,
        WordOperation::Past,
        WordOperation::Participle,
        WordOperation::ThirdPerson,
        WordOperation::Ing,
        WordOperation::Base,
        WordOperation::Comparative,
        WordOperation::Superlative,
        WordOperation::Adverb,
        WordOperation::Adjective,
        WordOperation::Article,
        WordOperation::Pronouns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordOperation::Plural => "plural",
            WordOperation::Singular => "singular",
            WordOperation::Possessive => "possessive",
            WordOperation::Past => "past",
            WordOperation::Participle => "participle",
            WordOperation::ThirdPerson => "third-person",
            WordOperation::Ing => "ing",
            WordOperation::Base => "base",
            WordOperation::Comparative => "comparative",
            WordOperation::Superlative => "superlative",
            WordOperation::Adverb => "adverb",
            WordOperation::Adjective => "adjective",
            WordOperation::Article => "article",
            WordOperation::Pronouns => "pronouns",
        }
    }
}

impl fmt::Display for WordOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordOperation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        WordOperation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == name)
            .ok_or_else(|| UnknownName::new("operation", s))
    }
}

/// Which tokens of a text a word operation rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordTarget {
    /// The last token that has a word core
    #[default]
    Last,
    /// The token at this zero-based index; out of range leaves the text alone
    At(usize),
    /// Every token that has a word core
    Every,
}

/// Morphological engine for one language
#[derive(Debug, Clone)]
pub struct Engine {
    tag: String,
    rules: RuleSet,
    store: Arc<OverridesStore>,
    conservative: bool,
}

impl Engine {
    /// Engine for `tag` reading overrides from `store`
    pub fn new(tag: &str, store: Arc<OverridesStore>) -> Self {
        let tag = LanguageTag::normalize(tag);
        Self {
            rules: RuleSet::for_tag(&tag),
            tag,
            store,
            conservative: false,
        }
    }

    /// Engine with a private, non-persistent overrides store
    pub fn in_memory(tag: &str) -> Self {
        Self::new(tag, Arc::new(OverridesStore::in_memory()))
    }

    /// Process-wide default engine, created on first use
    ///
    /// Opt-in convenience for call sites that do not own an engine. It is
    /// English with an in-memory store until someone switches it.
    pub fn shared() -> &'static RwLock<Engine> {
        static SHARED: OnceLock<RwLock<Engine>> = OnceLock::new();
        SHARED.get_or_init(|| RwLock::new(Engine::default()))
    }

    /// Guard proper names in [`Engine::apply`] and the text operations
    pub fn with_conservative(mut self, conservative: bool) -> Self {
        self.conservative = conservative;
        self
    }

    pub fn set_conservative(&mut self, conservative: bool) {
        self.conservative = conservative;
    }

    /// Switch tag and rule set together
    pub fn set_language(&mut self, tag: &str) {
        let tag = LanguageTag::normalize(tag);
        log::debug!("Switching engine language from '{}' to '{tag}'", self.tag);
        self.rules = RuleSet::for_tag(&tag);
        self.tag = tag;
    }

    /// Normalized primary subtag
    pub fn code(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> Language {
        self.rules.language()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn store(&self) -> &Arc<OverridesStore> {
        &self.store
    }

    // --- Overrides ---

    /// Current overrides for this engine's language
    pub fn overrides(&self) -> Overrides {
        self.store.get(&self.tag)
    }

    pub fn set_overrides(&self, overrides: Overrides) {
        self.store.set(&self.tag, overrides);
    }

    pub fn update_overrides<F>(&self, mutator: F)
    where
        F: FnOnce(&mut Overrides),
    {
        self.store.update(&self.tag, mutator);
    }

    pub fn reset_overrides(&self) {
        self.store.reset(&self.tag);
    }

    // --- Verbs ---

    pub fn to_ing(&self, word: &str) -> String {
        self.rules.to_ing(word, &self.overrides())
    }

    pub fn to_past(&self, word: &str) -> String {
        self.rules.to_past(word, &self.overrides())
    }

    pub fn past_participle(&self, word: &str) -> String {
        self.rules.past_participle(word, &self.overrides())
    }

    pub fn to_third_person(&self, word: &str) -> String {
        self.rules.to_third_person(word, &self.overrides())
    }

    pub fn base_verb(&self, word: &str) -> String {
        self.rules.base_verb(word, &self.overrides())
    }

    // --- Nouns ---

    pub fn pluralize(&self, word: &str, conservative: bool) -> String {
        self.rules.pluralize(word, conservative, &self.overrides())
    }

    pub fn singularize(&self, word: &str, conservative: bool) -> String {
        self.rules.singularize(word, conservative, &self.overrides())
    }

    pub fn possessive(&self, word: &str) -> String {
        self.rules.possessive(word, &self.overrides())
    }

    // --- Adjectives and adverbs ---

    pub fn to_comparative(&self, word: &str) -> String {
        self.rules.to_comparative(word, &self.overrides())
    }

    pub fn to_superlative(&self, word: &str) -> String {
        self.rules.to_superlative(word, &self.overrides())
    }

    pub fn to_adverb(&self, word: &str) -> String {
        self.rules.to_adverb(word, &self.overrides())
    }

    pub fn adverb_to_adjective(&self, word: &str) -> String {
        self.rules.adverb_to_adjective(word, &self.overrides())
    }

    // --- Determiners and pronouns ---

    pub fn indefinite_article(&self, word: &str) -> String {
        self.rules.indefinite_article(word, &self.overrides())
    }

    pub fn determiner(&self, phrase: &str, kind: DeterminerKind) -> String {
        self.rules.determiner(phrase, kind, &self.overrides())
    }

    pub fn pronoun_variants(&self, word: &str) -> Vec<String> {
        self.rules.pronoun_variants(word)
    }

    // --- Conjugation ---

    pub fn conjugate(&self, request: &ConjugationRequest) -> String {
        self.rules.conjugate(request, &self.overrides())
    }

    /// Every tense, aspect and voice for one person and number
    ///
    /// Rows come in tense, then aspect, then voice order.
    pub fn conjugation_table(&self, lemma: &str, person: Person, number: Number) -> Vec<ConjugationRow> {
        let overrides = self.overrides();
        let mut rows = Vec::with_capacity(Tense::ALL.len() * Aspect::ALL.len() * Voice::ALL.len());
        for tense in Tense::ALL {
            for aspect in Aspect::ALL {
                for voice in Voice::ALL {
                    let request = ConjugationRequest::new(lemma)
                        .person(person)
                        .number(number)
                        .tense(tense)
                        .aspect(aspect)
                        .voice(voice);
                    rows.push(ConjugationRow {
                        tense,
                        aspect,
                        voice,
                        form: self.rules.conjugate(&request, &overrides),
                    });
                }
            }
        }
        rows
    }

    // --- Clauses ---

    pub fn negate(&self, words: &[String], contracted: bool) -> Vec<String> {
        self.rules.negate(words, contracted, &self.overrides())
    }

    pub fn yes_no_question(&self, words: &[String]) -> Vec<String> {
        self.rules.yes_no_question(words, &self.overrides())
    }

    pub fn wh_question(&self, words: &[String], wh: &str) -> Vec<String> {
        self.rules.wh_question(words, wh, &self.overrides())
    }

    /// Negate a sentence, keeping its final punctuation
    pub fn negate_text(&self, text: &str, contracted: bool) -> String {
        let (words, terminal) = tokenizer::split_sentence(text);
        let negated = self.negate(&words, contracted);
        negated.join(" ") + &terminal
    }

    /// Turn a statement into a yes/no question ending in "?"
    pub fn yes_no_question_text(&self, text: &str) -> String {
        let (words, terminal) = tokenizer::split_sentence(text);
        let question = self.yes_no_question(&words);
        question.join(" ") + &question_mark(&terminal)
    }

    /// Turn a statement into a wh-question ending in "?"
    pub fn wh_question_text(&self, text: &str, wh: &str) -> String {
        let (words, terminal) = tokenizer::split_sentence(text);
        let question = self.wh_question(&words, wh);
        question.join(" ") + &question_mark(&terminal)
    }

    // --- Named operations ---

    /// Apply a word operation using the engine's conservative setting
    pub fn apply(&self, operation: WordOperation, word: &str) -> String {
        self.shape(operation, word, &self.overrides())
    }

    /// Apply a word operation to the targeted tokens of free text
    pub fn apply_text(&self, operation: WordOperation, text: &str, target: WordTarget) -> String {
        let overrides = self.overrides();
        let mut tokens = tokenizer::tokenize(text);

        let indices: Vec<usize> = match target {
            WordTarget::Last => tokens
                .iter()
                .rposition(|token| !token.is_punctuation())
                .into_iter()
                .collect(),
            WordTarget::At(index) => tokens
                .get(index)
                .filter(|token| !token.is_punctuation())
                .map(|_| index)
                .into_iter()
                .collect(),
            WordTarget::Every => (0..tokens.len())
                .filter(|&index| !tokens[index].is_punctuation())
                .collect(),
        };

        for index in indices {
            let core = &tokens[index].core;
            let shaped = match operation {
                WordOperation::Pronouns => core.clone(),
                WordOperation::Article => {
                    let article = self.rules.indefinite_article(core, &overrides);
                    if article.is_empty() {
                        core.clone()
                    } else {
                        format!("{article} {core}")
                    }
                }
                _ => self.shape(operation, core, &overrides),
            };
            let replaced = tokens[index].with_core(shaped);
            tokens[index] = replaced;
        }

        tokenizer::join(&tokens)
    }

    pub fn pluralize_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Plural, text, target)
    }

    pub fn singularize_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Singular, text, target)
    }

    pub fn possessive_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Possessive, text, target)
    }

    pub fn past_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Past, text, target)
    }

    pub fn third_person_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::ThirdPerson, text, target)
    }

    pub fn ing_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Ing, text, target)
    }

    pub fn base_verb_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Base, text, target)
    }

    pub fn comparative_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Comparative, text, target)
    }

    pub fn superlative_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Superlative, text, target)
    }

    pub fn adverb_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Adverb, text, target)
    }

    pub fn adjective_text(&self, text: &str, target: WordTarget) -> String {
        self.apply_text(WordOperation::Adjective, text, target)
    }

    fn shape(&self, operation: WordOperation, word: &str, overrides: &Overrides) -> String {
        let rules = &self.rules;
        match operation {
            WordOperation::Plural => rules.pluralize(word, self.conservative, overrides),
            WordOperation::Singular => rules.singularize(word, self.conservative, overrides),
            WordOperation::Possessive => rules.possessive(word, overrides),
            WordOperation::Past => rules.to_past(word, overrides),
            WordOperation::Participle => rules.past_participle(word, overrides),
            WordOperation::ThirdPerson => rules.to_third_person(word, overrides),
            WordOperation::Ing => rules.to_ing(word, overrides),
            WordOperation::Base => rules.base_verb(word, overrides),
            WordOperation::Comparative => rules.to_comparative(word, overrides),
            WordOperation::Superlative => rules.to_superlative(word, overrides),
            WordOperation::Adverb => rules.to_adverb(word, overrides),
            WordOperation::Adjective => rules.adverb_to_adjective(word, overrides),
            WordOperation::Article => rules.indefinite_article(word, overrides),
            WordOperation::Pronouns => rules.pronoun_variants(word).join(", "),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::in_memory(crate::language::DEFAULT_LANGUAGE)
    }
}

/// Sentence-final punctuation for a question
fn question_mark(terminal: &str) -> String {
    let stem = terminal.trim_end_matches(['.', '!', '…']);
    if stem.ends_with('?') {
        stem.to_string()
    } else {
        format!("{stem}?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideKind;

    fn words(sentence: &str) -> Vec<String> {
        sentence.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_language_is_normalized() {
        let engine = Engine::in_memory("en-US");
        assert_eq!(engine.code(), "en");
        assert_eq!(engine.language(), Language::English);
    }

    #[test]
    fn test_set_language_swaps_rules() {
        let mut engine = Engine::in_memory("en");
        assert_eq!(engine.pluralize("child", false), "children");

        engine.set_language("de-DE");
        assert_eq!(engine.code(), "de");
        assert_eq!(engine.language(), Language::German);
        assert_eq!(engine.pluralize("Kind", false), "Kind");
    }

    #[test]
    fn test_overrides_apply_immediately() {
        let engine = Engine::in_memory("en");
        assert_eq!(engine.to_past("go"), "went");

        engine.update_overrides(|overrides| overrides.set(OverrideKind::Past, "go", "goed"));
        assert_eq!(engine.to_past("go"), "goed");
        assert_eq!(engine.to_past("Go"), "Goed");

        engine.reset_overrides();
        assert_eq!(engine.to_past("go"), "went");
    }

    #[test]
    fn test_engines_sharing_a_store_see_each_others_edits() {
        let store = Arc::new(OverridesStore::in_memory());
        let first = Engine::new("en", Arc::clone(&store));
        let second = Engine::new("en-GB", Arc::clone(&store));

        first.update_overrides(|overrides| overrides.keep("data"));
        assert_eq!(second.singularize("data", false), "data");
    }

    #[test]
    fn test_set_overrides_replaces_record() {
        let engine = Engine::in_memory("en");
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Plural, "octopus", "octopodes");
        engine.set_overrides(overrides.clone());
        assert_eq!(engine.overrides(), overrides);
        assert_eq!(engine.pluralize("octopus", false), "octopodes");
    }

    #[test]
    fn test_word_operation_names() {
        for operation in WordOperation::ALL {
            assert_eq!(operation.as_str().parse(), Ok(operation));
        }
        assert_eq!("THIRD_PERSON".parse(), Ok(WordOperation::ThirdPerson));
        assert!("shout".parse::<WordOperation>().is_err());
    }

    #[test]
    fn test_apply() {
        let engine = Engine::in_memory("en");
        assert_eq!(engine.apply(WordOperation::Plural, "box"), "boxes");
        assert_eq!(engine.apply(WordOperation::Participle, "write"), "written");
        assert_eq!(engine.apply(WordOperation::Article, "hour"), "an");
        assert_eq!(
            engine.apply(WordOperation::Pronouns, "she"),
            "she, her, her, hers, herself"
        );
    }

    #[test]
    fn test_apply_respects_conservative_setting() {
        let engine = Engine::in_memory("en").with_conservative(true);
        assert_eq!(engine.apply(WordOperation::Plural, "Smith"), "Smith");
        assert_eq!(engine.apply(WordOperation::Plural, "dog"), "dogs");
    }

    #[test]
    fn test_apply_text_targets() {
        let engine = Engine::in_memory("en");
        assert_eq!(
            engine.pluralize_text("I like the cat, really!", WordTarget::At(3)),
            "I like the cats, really!"
        );
        assert_eq!(engine.pluralize_text("one box.", WordTarget::Last), "one boxes.");
        assert_eq!(engine.past_text("jump,  walk   (talk)", WordTarget::Every), "jumped, walked (talked)");
        assert_eq!(engine.pluralize_text("one box", WordTarget::At(9)), "one box");
    }

    #[test]
    fn test_apply_text_skips_punctuation_tokens() {
        let engine = Engine::in_memory("en");
        assert_eq!(engine.pluralize_text("the cat ...", WordTarget::Last), "the cats ...");
        assert_eq!(engine.pluralize_text("the cat -", WordTarget::At(2)), "the cat -");
    }

    #[test]
    fn test_article_text_inserts_article() {
        let engine = Engine::in_memory("en");
        assert_eq!(
            engine.apply_text(WordOperation::Article, "I want apple.", WordTarget::Last),
            "I want an apple."
        );
    }

    #[test]
    fn test_clause_text() {
        let engine = Engine::in_memory("en");
        assert_eq!(engine.negate_text("She is here.", true), "She isn't here.");
        assert_eq!(engine.yes_no_question_text("He likes pizza."), "Does he like pizza?");
        assert_eq!(engine.yes_no_question_text("He likes pizza"), "Does he like pizza?");
        assert_eq!(
            engine.wh_question_text("You are going!", "where"),
            "Where are you going?"
        );
    }

    #[test]
    fn test_question_mark() {
        assert_eq!(question_mark(""), "?");
        assert_eq!(question_mark("."), "?");
        assert_eq!(question_mark("!"), "?");
        assert_eq!(question_mark("?"), "?");
        assert_eq!(question_mark("?!"), "?");
    }

    #[test]
    fn test_word_level_clauses() {
        let engine = Engine::in_memory("en");
        assert_eq!(
            engine.negate(&words("He goes"), true),
            words("He doesn't go")
        );
        assert_eq!(
            engine.yes_no_question(&words("She is here")),
            words("Is she here")
        );
    }

    #[test]
    fn test_conjugation_table_has_every_cell() {
        let engine = Engine::in_memory("en");
        let rows = engine.conjugation_table("take", Person::Third, Number::Singular);
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].form, "takes");
        assert_eq!(rows[0].tense, Tense::Present);
        assert!(rows
            .iter()
            .any(|row| row.form == "will have been being taken"));
        assert!(rows.iter().all(|row| !row.form.is_empty()));
    }

    #[test]
    fn test_determiner_and_article() {
        let engine = Engine::in_memory("en");
        assert_eq!(engine.determiner("apple", DeterminerKind::Indefinite), "an");
        assert_eq!(engine.determiner("apple", DeterminerKind::Definite), "the");
        assert_eq!(engine.determiner("apple", DeterminerKind::None), "");
        assert_eq!(engine.indefinite_article("university"), "a");
    }

    #[test]
    fn test_shared_engine_is_a_single_instance() {
        let first = Engine::shared() as *const RwLock<Engine>;
        let second = Engine::shared() as *const RwLock<Engine>;
        assert_eq!(first, second);
        let engine = Engine::shared().read().unwrap();
        assert!(!engine.code().is_empty());
    }
}
