//! Comparison and adverb derivation

use super::letters::{double_final, ends_with_consonant_y, ends_with_cvc, is_consonant, syllables};
use super::EnglishRules;

/// Suffixed comparison is used up to this length for one-syllable words
const SHORT_ADJECTIVE_MAX: usize = 5;

#[derive(Clone, Copy)]
enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    fn suffix(self) -> &'static str {
        match self {
            Degree::Comparative => "er",
            Degree::Superlative => "est",
        }
    }

    fn periphrasis(self) -> &'static str {
        match self {
            Degree::Comparative => "more",
            Degree::Superlative => "most",
        }
    }
}

impl EnglishRules {
    pub(super) fn comparative_form(&self, word: &str) -> String {
        match self.lexicon.irregular_comparative(word) {
            Some(form) => form.to_string(),
            None => compare(word, Degree::Comparative),
        }
    }

    pub(super) fn superlative_form(&self, word: &str) -> String {
        match self.lexicon.irregular_superlative(word) {
            Some(form) => form.to_string(),
            None => compare(word, Degree::Superlative),
        }
    }

    pub(super) fn adverb_form(&self, word: &str) -> String {
        if let Some(adverb) = self.lexicon.irregular_adverb(word) {
            return adverb.to_string();
        }

        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();

        if ends_with_consonant_y(word) {
            format!("{}ily", &word[..word.len() - 1])
        } else if word.ends_with("ic") {
            format!("{word}ally")
        } else if n >= 3 && word.ends_with("le") && is_consonant(chars[n - 3]) {
            format!("{}y", &word[..word.len() - 1])
        } else if word.ends_with("ll") {
            format!("{word}y")
        } else {
            format!("{word}ly")
        }
    }

    pub(super) fn adjective_form(&self, word: &str) -> String {
        if let Some(adjective) = self.lexicon.irregular_adjective(word) {
            return adjective.to_string();
        }
        if self.lexicon.is_plain_ly(word) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ically") {
            return format!("{stem}ic");
        }
        if let Some(stem) = word.strip_suffix("ily") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = word.strip_suffix("bly").or_else(|| word.strip_suffix("ply")) {
            return format!("{}le", &word[..stem.len() + 1]);
        }
        if let Some(stem) = word.strip_suffix("ly") {
            if stem.len() >= 3 {
                return stem.to_string();
            }
        }

        word.to_string()
    }
}

fn compare(word: &str, degree: Degree) -> String {
    let suffix = degree.suffix();

    if ends_with_consonant_y(word) {
        return format!("{}i{suffix}", &word[..word.len() - 1]);
    }

    if syllables(word) == 1 && word.chars().count() <= SHORT_ADJECTIVE_MAX {
        return if word.ends_with('e') {
            format!("{word}{}", &suffix[1..])
        } else if ends_with_cvc(word) {
            format!("{}{suffix}", double_final(word))
        } else {
            format!("{word}{suffix}")
        };
    }

    format!("{} {word}", degree.periphrasis())
}
