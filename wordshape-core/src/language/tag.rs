//! Language tag normalization
//!
//! Rule sets and overrides records are selected by the primary language
//! subtag alone, so "en", "en-US" and "EN_gb" all address the same data.

use icu_locale::Locale;

use crate::error::LanguageError;

/// Tag used when the caller supplies nothing
pub const DEFAULT_LANGUAGE: &str = "en";

/// Namespace for language tag helpers
pub struct LanguageTag;

impl LanguageTag {
    /// Lowercase primary subtag of `tag`
    ///
    /// Never fails: malformed tags fall back to everything before the first
    /// `-` or `_`, and an empty tag yields [`DEFAULT_LANGUAGE`].
    pub fn normalize(tag: &str) -> String {
        match Self::parse(tag) {
            Ok(language) => language,
            Err(LanguageError::Empty) => DEFAULT_LANGUAGE.to_string(),
            Err(e) => {
                let fallback = tag
                    .trim()
                    .split(['-', '_'])
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                log::trace!("{e}; using '{fallback}'");
                if fallback.is_empty() {
                    DEFAULT_LANGUAGE.to_string()
                } else {
                    fallback
                }
            }
        }
    }

    /// Strict variant of [`LanguageTag::normalize`]
    pub fn parse(tag: &str) -> Result<String, LanguageError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LanguageError::Empty);
        }

        let locale: Locale =
            trimmed
                .replace('_', "-")
                .parse()
                .map_err(|e| LanguageError::Invalid {
                    tag: trimmed.to_string(),
                    reason: format!("{e:?}"),
                })?;

        Ok(locale.id.language.as_str().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_region() {
        assert_eq!(LanguageTag::normalize("en-US"), "en");
        assert_eq!(LanguageTag::normalize("pt-BR"), "pt");
        assert_eq!(LanguageTag::normalize("zh-Hant-TW"), "zh");
    }

    #[test]
    fn test_normalize_accepts_underscores_and_case() {
        assert_eq!(LanguageTag::normalize("EN_gb"), "en");
        assert_eq!(LanguageTag::normalize("  De  "), "de");
    }

    #[test]
    fn test_normalize_empty_defaults_to_english() {
        assert_eq!(LanguageTag::normalize(""), DEFAULT_LANGUAGE);
        assert_eq!(LanguageTag::normalize("   "), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_normalize_malformed_falls_back_to_prefix() {
        assert_eq!(LanguageTag::normalize("klingon-x!"), "klingon");
        assert_eq!(LanguageTag::normalize("-"), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_parse_is_strict() {
        assert_eq!(LanguageTag::parse("fr-CA"), Ok("fr".to_string()));
        assert_eq!(LanguageTag::parse(""), Err(LanguageError::Empty));
        assert!(matches!(
            LanguageTag::parse("not a tag"),
            Err(LanguageError::Invalid { .. })
        ));
    }
}
