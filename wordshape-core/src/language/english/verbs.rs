//! Verb inflection and lemma recovery

use super::letters::{
    double_final, ends_with_consonant_y, ends_with_cvc, ends_with_sibilant, has_vowel,
    lost_silent_e, sibilant_stem, syllables, undouble,
};
use super::EnglishRules;

impl EnglishRules {
    pub(super) fn past_form(&self, word: &str) -> String {
        if let Some(past) = self.lexicon.irregular_past(word) {
            return past.to_string();
        }

        if word.ends_with('e') {
            format!("{word}d")
        } else if ends_with_consonant_y(word) {
            format!("{}ied", &word[..word.len() - 1])
        } else if ends_with_cvc(word) && syllables(word) == 1 {
            format!("{}ed", double_final(word))
        } else {
            format!("{word}ed")
        }
    }

    pub(super) fn third_person_form(&self, word: &str) -> String {
        if let Some(form) = self.lexicon.irregular_third_person(word) {
            return form.to_string();
        }

        if ends_with_consonant_y(word) {
            format!("{}ies", &word[..word.len() - 1])
        } else if ends_with_sibilant(word) {
            format!("{}es", sibilant_stem(word))
        } else if word.ends_with('o') {
            format!("{word}es")
        } else {
            format!("{word}s")
        }
    }

    pub(super) fn ing_form(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("ie") {
            format!("{stem}ying")
        } else if word.ends_with("ee") || word.ends_with("ye") || word.ends_with("oe") {
            format!("{word}ing")
        } else if word.len() > 2 && word.ends_with('e') {
            format!("{}ing", &word[..word.len() - 1])
        } else if ends_with_cvc(word) && syllables(word) == 1 {
            format!("{}ing", double_final(word))
        } else {
            format!("{word}ing")
        }
    }

    /// Recover the base form of an inflected verb
    ///
    /// Longer suffixes are tried before the shorter ones they contain.
    pub(super) fn lemma_form(&self, word: &str) -> String {
        if let Some(lemma) = self.lexicon.lemma(word) {
            return lemma.to_string();
        }

        let n = word.len();

        if let Some(stem) = word.strip_suffix("ing") {
            if n == 5 && stem.ends_with('y') {
                // dying, lying, tying
                return format!("{}ie", &stem[..stem.len() - 1]);
            }
            if stem.len() >= 2 && has_vowel(stem) {
                return restore_stem(stem);
            }
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ied") {
            return if n <= 4 {
                // died, lied, tied
                word[..n - 1].to_string()
            } else {
                format!("{stem}y")
            };
        }

        if word.ends_with("eed") {
            // agreed, decreed; need and seed are already bases
            return if n > 5 {
                word[..n - 1].to_string()
            } else {
                word.to_string()
            };
        }

        if let Some(stem) = word.strip_suffix("ed") {
            if !has_vowel(stem) {
                return word.to_string();
            }
            let with_e = format!("{stem}e");
            if with_e.ends_with("ue")
                || ["ce", "ge", "ve", "ze"].iter().any(|end| with_e.ends_with(end))
            {
                return with_e;
            }
            return restore_stem(stem);
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return if n <= 4 {
                word[..n - 1].to_string()
            } else {
                format!("{stem}y")
            };
        }

        if let Some(stem) = word.strip_suffix("es") {
            let strip_two = stem.ends_with("ss")
                || stem.ends_with("zz")
                || stem.ends_with("tz")
                || stem.ends_with('x')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
                || stem.ends_with('o');
            return if strip_two {
                stem.to_string()
            } else {
                word[..n - 1].to_string()
            };
        }

        if n > 2
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..n - 1].to_string();
        }

        word.to_string()
    }
}

/// Stem left after stripping -ing or -ed, undoubled or given back its e
fn restore_stem(stem: &str) -> String {
    let undoubled = undouble(stem);
    if undoubled != stem {
        undoubled
    } else if lost_silent_e(stem) {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}
