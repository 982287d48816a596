//! Case preservation for computed word forms
//!
//! Every rule computes its replacement in lowercase (or in the canonical
//! spelling stored in the lexicon) and then routes it through [`match_case`]
//! so the result follows the casing pattern of the token the caller passed in.

/// Rewrite `replacement` to follow the casing pattern of `original`
///
/// - all-caps original (two or more letters) → replacement uppercased
/// - capitalized original → only the first character of the replacement is
///   uppercased, so multi-word forms such as "more happy" stay "More happy"
/// - anything else → replacement returned unchanged
pub fn match_case(original: &str, replacement: &str) -> String {
    if replacement.is_empty() {
        return String::new();
    }

    if is_all_caps(original) {
        replacement.to_uppercase()
    } else if is_capitalized(original) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// True when the word has at least two letters and none of them is lowercase
pub fn is_all_caps(word: &str) -> bool {
    let mut letters = 0usize;
    for ch in word.chars().filter(|c| c.is_alphabetic()) {
        if ch.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters > 1
}

/// True when the first character is uppercase
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched
pub fn decapitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
