//! Lexicon loader
//!
//! Parses the embedded lexicon once and caches the compiled tables.

use std::sync::OnceLock;

use crate::error::LexiconError;
use crate::lexicon::config::LexiconConfig;
use crate::lexicon::tables::EnglishLexicon;

/// Embedded English lexicon
static ENGLISH: OnceLock<EnglishLexicon> = OnceLock::new();

/// Compiled English lexicon, parsed on first access
///
/// A lexicon that fails to load degrades to empty tables so every transform
/// keeps falling back to its suffix rules.
pub fn english() -> &'static EnglishLexicon {
    ENGLISH.get_or_init(|| {
        match load_lexicon(include_str!("../../configs/lexicon/english.toml")) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                log::warn!("Failed to load English lexicon: {e}");
                EnglishLexicon::default()
            }
        }
    })
}

/// Parse and compile a lexicon document
pub fn load_lexicon(toml_str: &str) -> Result<EnglishLexicon, LexiconError> {
    let config: LexiconConfig = toml::from_str(toml_str)?;
    EnglishLexicon::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "en"
name = "Minimal"

[verbs]
irregular = [["go", "went", "gone"]]

[nouns]

[adjectives]

[clauses]
auxiliaries = ["is"]

[pronouns]
rows = [["I", "me", "my", "mine", "myself"]]

[articles]
"#;

    #[test]
    fn test_load_minimal_document() {
        let lexicon = load_lexicon(MINIMAL).unwrap();
        assert_eq!(lexicon.irregular_past("go"), Some("went"));
        assert!(lexicon.is_auxiliary("is"));
        assert!(!lexicon.is_invariant("sheep"));
    }

    #[test]
    fn test_rejects_short_pronoun_row() {
        let document = MINIMAL.replace(
            r#"["I", "me", "my", "mine", "myself"]"#,
            r#"["I", "me", "my"]"#,
        );
        let error = load_lexicon(&document).unwrap_err();
        assert!(matches!(error, LexiconError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_verb_cell() {
        let document = MINIMAL.replace(r#"["go", "went", "gone"]"#, r#"["go", "", "gone"]"#);
        assert!(matches!(
            load_lexicon(&document),
            Err(LexiconError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            load_lexicon("[metadata\ncode = "),
            Err(LexiconError::Parse(_))
        ));
    }

    #[test]
    fn test_english_is_cached() {
        let first = english() as *const EnglishLexicon;
        let second = english() as *const EnglishLexicon;
        assert_eq!(first, second);
    }
}
