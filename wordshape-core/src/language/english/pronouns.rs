//! Pronoun case variants

use crate::casing::{capitalize_first, is_all_caps, is_capitalized};

use super::EnglishRules;

impl EnglishRules {
    /// Subject, object, possessive adjective, possessive pronoun and reflexive
    /// forms of the pronoun `word` belongs to
    pub(super) fn pronoun_forms(&self, word: &str) -> Vec<String> {
        let trimmed = word.trim();
        let Some(row) = self.lexicon.pronoun_row(&trimmed.to_lowercase()) else {
            return vec![word.to_string()];
        };

        if trimmed.chars().count() > 1 && is_all_caps(trimmed) {
            row.iter().map(|form| form.to_uppercase()).collect()
        } else if is_capitalized(trimmed) && !trimmed.contains(char::is_whitespace) {
            row.iter()
                .enumerate()
                .map(|(slot, form)| match slot {
                    0 => capitalize_first(form),
                    _ => form.to_lowercase(),
                })
                .collect()
        } else {
            row.to_vec()
        }
    }
}
