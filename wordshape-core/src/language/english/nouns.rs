//! Noun number and possessives

use crate::casing::{is_all_caps, is_capitalized, match_case};
use crate::lexicon::ClassicalPlural;
use crate::overrides::{OverrideKind, Overrides};

use super::letters::{
    ends_with_consonant_y, ends_with_sibilant, is_consonant, is_vowel, sibilant_stem,
};
use super::EnglishRules;

impl EnglishRules {
    /// Do-not-change, override, proper-name guard, then `rule`
    pub(super) fn shape_noun<F>(
        &self,
        word: &str,
        conservative: bool,
        overrides: &Overrides,
        kind: OverrideKind,
        rule: F,
    ) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return word.to_string();
        }

        let lower = trimmed.to_lowercase();
        if overrides.is_kept(&lower) {
            return trimmed.to_string();
        }
        if let Some(value) = overrides.lookup(kind, &lower) {
            log::debug!("{} override hit for '{lower}'", kind.as_str());
            return match_case(trimmed, value);
        }
        if conservative && self.looks_like_proper_name(trimmed, &lower) {
            log::trace!("'{trimmed}' treated as a proper name");
            return trimmed.to_string();
        }

        match_case(trimmed, &rule(&lower))
    }

    /// Capitalized, not all caps, and not a noun the lexicon knows
    fn looks_like_proper_name(&self, word: &str, lower: &str) -> bool {
        is_capitalized(word) && !is_all_caps(word) && !self.lexicon.is_known_noun(lower)
    }

    pub(super) fn plural_form(&self, word: &str) -> String {
        let lexicon = self.lexicon;
        if lexicon.is_invariant(word) {
            return word.to_string();
        }
        if let Some(plural) = lexicon.irregular_plural(word) {
            return plural.to_string();
        }
        if lexicon.irregular_singular(word).is_some() {
            // already an irregular plural
            return word.to_string();
        }

        if ends_with_consonant_y(word) {
            return format!("{}ies", &word[..word.len() - 1]);
        }

        if word.ends_with('f') || word.ends_with("fe") {
            if lexicon.f_takes_s(word) || word.ends_with("ff") {
                return format!("{word}s");
            }
            let stem = word.strip_suffix("fe").or_else(|| word.strip_suffix('f'));
            if let Some(stem) = stem {
                return format!("{stem}ves");
            }
        }

        if let Some(plural) = self.classical_plural(word) {
            return plural;
        }

        if word.ends_with('o') {
            let vowel_before = word
                .chars()
                .rev()
                .nth(1)
                .is_some_and(is_vowel);
            return if lexicon.o_takes_s(word) || vowel_before {
                format!("{word}s")
            } else {
                format!("{word}es")
            };
        }

        if ends_with_sibilant(word) {
            return format!("{}es", sibilant_stem(word));
        }

        format!("{word}s")
    }

    fn classical_plural(&self, word: &str) -> Option<String> {
        let lexicon = self.lexicon;
        let families = [
            (ClassicalPlural::UsToI, "us", "i"),
            (ClassicalPlural::IsToEs, "is", "es"),
            (ClassicalPlural::OnToA, "on", "a"),
            (ClassicalPlural::UmToA, "um", "a"),
            (ClassicalPlural::IxExToIces, "ix", "ices"),
            (ClassicalPlural::IxExToIces, "ex", "ices"),
        ];

        families
            .iter()
            .find(|(family, suffix, _)| word.ends_with(suffix) && lexicon.is_classical(*family, word))
            .map(|(_, suffix, plural)| format!("{}{plural}", &word[..word.len() - suffix.len()]))
    }

    pub(super) fn singular_form(&self, word: &str) -> String {
        let lexicon = self.lexicon;
        if lexicon.is_invariant(word) {
            return word.to_string();
        }
        if let Some(singular) = lexicon.irregular_singular(word) {
            return singular.to_string();
        }
        if lexicon.irregular_plural(word).is_some() {
            // already an irregular singular
            return word.to_string();
        }

        if let Some(singular) = self.classical_singular(word) {
            return singular;
        }

        if let Some(stem) = word.strip_suffix("ves") {
            let fe = format!("{stem}fe");
            if lexicon.is_fe_noun(&fe) {
                return fe;
            }
            let ve = format!("{stem}ve");
            if lexicon.is_ve_noun(&ve) {
                return ve;
            }
            if ["l", "ea", "ie", "oa", "ar"].iter().any(|end| stem.ends_with(end)) {
                return format!("{stem}f");
            }
            return word[..word.len() - 1].to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            let ie = format!("{stem}ie");
            if lexicon.is_ie_noun(&ie) || word.len() <= 4 {
                return ie;
            }
            return format!("{stem}y");
        }

        if let Some(stem) = word.strip_suffix("oes") {
            let oe = format!("{stem}oe");
            return if lexicon.is_oe_noun(&oe) {
                oe
            } else {
                format!("{stem}o")
            };
        }

        if let Some(stem) = word.strip_suffix("es") {
            if ["ss", "sh", "ch", "x", "zz", "tz"].iter().any(|end| stem.ends_with(end)) {
                return stem.to_string();
            }
            if let Some(singular) = self.us_singular(stem) {
                return singular;
            }
        }

        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }

    /// "viruses" → "virus", but "houses" → "house" and "fuses" → "fuse"
    ///
    /// "-ause" and "-ouse" always keep their e; after a consonant only the
    /// listed -use nouns do.
    fn us_singular(&self, stem: &str) -> Option<String> {
        let before = stem.strip_suffix("us")?.chars().last()?;
        let with_e = format!("{stem}e");
        let keeps_e = matches!(before, 'a' | 'o')
            || (is_consonant(before) && self.lexicon.is_use_noun(&with_e));
        Some(if keeps_e { with_e } else { stem.to_string() })
    }

    /// Inverse classical rules, gated by the same membership sets
    fn classical_singular(&self, word: &str) -> Option<String> {
        let lexicon = self.lexicon;
        let candidates = [
            (ClassicalPlural::IxExToIces, "ices", "ix"),
            (ClassicalPlural::IxExToIces, "ices", "ex"),
            (ClassicalPlural::IsToEs, "es", "is"),
            (ClassicalPlural::UsToI, "i", "us"),
            (ClassicalPlural::OnToA, "a", "on"),
            (ClassicalPlural::UmToA, "a", "um"),
        ];

        candidates.iter().find_map(|(family, plural, singular)| {
            let stem = word.strip_suffix(plural)?;
            let candidate = format!("{stem}{singular}");
            lexicon.is_classical(*family, &candidate).then_some(candidate)
        })
    }

    /// "children's", "dogs'", "cat's"; the suffix follows all-caps input
    pub(super) fn possessive_form(&self, word: &str) -> String {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return word.to_string();
        }

        let lower = trimmed.to_lowercase();
        let suffix = if self.lexicon.irregular_singular(&lower).is_some() && !lower.ends_with('s') {
            "'s"
        } else if lower.ends_with('s') {
            "'"
        } else {
            "'s"
        };

        if is_all_caps(trimmed) {
            format!("{trimmed}{}", suffix.to_uppercase())
        } else {
            format!("{trimmed}{suffix}")
        }
    }
}
