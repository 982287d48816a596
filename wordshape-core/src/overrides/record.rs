//! The per-language overrides record

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// Names every override map in an [`Overrides`] record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideKind {
    /// singular → plural
    Plural,
    /// plural → singular
    Singular,
    /// base → simple past
    Past,
    /// base → third person singular present
    ThirdPerson,
    /// base → -ing form
    Progressive,
    /// inflected form → base
    BaseVerb,
    /// adjective → comparative
    Comparative,
    /// adjective → superlative
    Superlative,
    /// adjective → adverb
    Adverb,
    /// adverb → adjective
    Adjective,
    /// word or phrase → determiner
    Determiner,
}

impl OverrideKind {
    pub const ALL: [OverrideKind; 11] = [
        OverrideKind::Plural,
        OverrideKind::Singular,
        OverrideKind::Past,
        OverrideKind::ThirdPerson,
        OverrideKind::Progressive,
        OverrideKind::BaseVerb,
        OverrideKind::Comparative,
        OverrideKind::Superlative,
        OverrideKind::Adverb,
        OverrideKind::Adjective,
        OverrideKind::Determiner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideKind::Plural => "plural",
            OverrideKind::Singular => "singular",
            OverrideKind::Past => "past",
            OverrideKind::ThirdPerson => "third-person",
            OverrideKind::Progressive => "progressive",
            OverrideKind::BaseVerb => "base-verb",
            OverrideKind::Comparative => "comparative",
            OverrideKind::Superlative => "superlative",
            OverrideKind::Adverb => "adverb",
            OverrideKind::Adjective => "adjective",
            OverrideKind::Determiner => "determiner",
        }
    }
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverrideKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        OverrideKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownName::new("override kind", s))
    }
}

/// User- or caller-supplied exceptions for one language
///
/// Every map key is lowercase. Callers writing the public fields directly
/// are expected to lowercase keys themselves; [`Overrides::set`] does it for
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Words exempt from every transformation
    pub do_not_change: BTreeSet<String>,
    pub plural: BTreeMap<String, String>,
    pub singular: BTreeMap<String, String>,
    pub past: BTreeMap<String, String>,
    pub third_person: BTreeMap<String, String>,
    pub progressive: BTreeMap<String, String>,
    pub base_verb: BTreeMap<String, String>,
    pub comparative: BTreeMap<String, String>,
    pub superlative: BTreeMap<String, String>,
    pub adverb: BTreeMap<String, String>,
    pub adjective: BTreeMap<String, String>,
    /// Keyed by word or whole noun phrase
    pub determiners: BTreeMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no override of any kind is recorded
    pub fn is_empty(&self) -> bool {
        self.do_not_change.is_empty()
            && OverrideKind::ALL.iter().all(|&kind| self.map(kind).is_empty())
    }

    pub fn map(&self, kind: OverrideKind) -> &BTreeMap<String, String> {
        match kind {
            OverrideKind::Plural => &self.plural,
            OverrideKind::Singular => &self.singular,
            OverrideKind::Past => &self.past,
            OverrideKind::ThirdPerson => &self.third_person,
            OverrideKind::Progressive => &self.progressive,
            OverrideKind::BaseVerb => &self.base_verb,
            OverrideKind::Comparative => &self.comparative,
            OverrideKind::Superlative => &self.superlative,
            OverrideKind::Adverb => &self.adverb,
            OverrideKind::Adjective => &self.adjective,
            OverrideKind::Determiner => &self.determiners,
        }
    }

    pub fn map_mut(&mut self, kind: OverrideKind) -> &mut BTreeMap<String, String> {
        match kind {
            OverrideKind::Plural => &mut self.plural,
            OverrideKind::Singular => &mut self.singular,
            OverrideKind::Past => &mut self.past,
            OverrideKind::ThirdPerson => &mut self.third_person,
            OverrideKind::Progressive => &mut self.progressive,
            OverrideKind::BaseVerb => &mut self.base_verb,
            OverrideKind::Comparative => &mut self.comparative,
            OverrideKind::Superlative => &mut self.superlative,
            OverrideKind::Adverb => &mut self.adverb,
            OverrideKind::Adjective => &mut self.adjective,
            OverrideKind::Determiner => &mut self.determiners,
        }
    }

    /// Record an override, lowercasing the key
    pub fn set(&mut self, kind: OverrideKind, key: &str, value: impl Into<String>) {
        self.map_mut(kind).insert(key.trim().to_lowercase(), value.into());
    }

    pub fn remove(&mut self, kind: OverrideKind, key: &str) -> Option<String> {
        self.map_mut(kind).remove(&key.trim().to_lowercase())
    }

    /// Case-insensitive lookup of the raw override value
    pub fn lookup(&self, kind: OverrideKind, word: &str) -> Option<&str> {
        self.map(kind)
            .get(&word.to_lowercase())
            .map(String::as_str)
    }

    /// Exempt a word from every transformation
    pub fn keep(&mut self, word: &str) {
        self.do_not_change.insert(word.trim().to_lowercase());
    }

    pub fn is_kept(&self, word: &str) -> bool {
        self.do_not_change.contains(&word.to_lowercase())
    }

    /// Trim and lowercase every key, as [`Overrides::set`] would have
    ///
    /// Applied to records read back from storage, where documents may have
    /// been edited by hand. On a key collision the last entry in map order
    /// wins.
    pub fn normalized(self) -> Self {
        let mut normalized = Overrides {
            do_not_change: self
                .do_not_change
                .iter()
                .map(|word| word.trim().to_lowercase())
                .collect(),
            ..Overrides::default()
        };
        for kind in OverrideKind::ALL {
            for (key, value) in self.map(kind) {
                normalized.set(kind, key, value.clone());
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("plural".parse(), Ok(OverrideKind::Plural));
        assert_eq!("Third_Person".parse(), Ok(OverrideKind::ThirdPerson));
        assert_eq!("base-verb".parse(), Ok(OverrideKind::BaseVerb));
        assert!("colour".parse::<OverrideKind>().is_err());
        for kind in OverrideKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        assert!(Overrides::new().is_empty());
    }

    #[test]
    fn test_set_lowercases_keys() {
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Plural, "Octopus", "octopodes");
        assert_eq!(overrides.plural.get("octopus").map(String::as_str), Some("octopodes"));
        assert_eq!(overrides.lookup(OverrideKind::Plural, "OCTOPUS"), Some("octopodes"));
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_remove_override() {
        let mut overrides = Overrides::new();
        overrides.set(OverrideKind::Past, "dive", "dove");
        assert_eq!(overrides.remove(OverrideKind::Past, "DIVE"), Some("dove".to_string()));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_keep_is_case_insensitive() {
        let mut overrides = Overrides::new();
        overrides.keep("Kubernetes");
        assert!(overrides.is_kept("kubernetes"));
        assert!(overrides.is_kept("KUBERNETES"));
    }

    #[test]
    fn test_every_kind_maps_to_its_own_table() {
        let mut overrides = Overrides::new();
        for kind in OverrideKind::ALL {
            overrides.set(kind, kind.as_str(), "value");
        }
        for kind in OverrideKind::ALL {
            assert_eq!(overrides.map(kind).len(), 1, "{}", kind.as_str());
        }
    }

    #[test]
    fn test_json_round_trip_preserves_all_fields() {
        let mut overrides = Overrides::new();
        overrides.keep("iPhone");
        for kind in OverrideKind::ALL {
            overrides.set(kind, "key", kind.as_str());
        }
        let json = serde_json::to_string(&overrides).unwrap();
        let restored: Overrides = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, overrides);
    }

    #[test]
    fn test_missing_fields_default() {
        let restored: Overrides = serde_json::from_str(r#"{"plural":{"cow":"kine"}}"#).unwrap();
        assert_eq!(restored.lookup(OverrideKind::Plural, "cow"), Some("kine"));
        assert!(restored.do_not_change.is_empty());
    }

    #[test]
    fn test_normalized_lowercases_keys() {
        let mut overrides = Overrides::new();
        overrides.plural.insert("Octopus".to_string(), "Octopodes".to_string());
        overrides.do_not_change.insert(" GitHub ".to_string());
        assert_eq!(overrides.lookup(OverrideKind::Plural, "octopus"), None);

        let overrides = overrides.normalized();
        assert_eq!(overrides.lookup(OverrideKind::Plural, "octopus"), Some("Octopodes"));
        assert_eq!(overrides.lookup(OverrideKind::Plural, "OCTOPUS"), Some("Octopodes"));
        assert!(overrides.is_kept("github"));
    }
}
