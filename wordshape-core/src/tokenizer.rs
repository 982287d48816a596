//! Free-text tokenizer
//!
//! Splits text on whitespace and separates each token into leading
//! punctuation, a word core and trailing punctuation, so a transform can
//! rewrite "dog," into "dogs," without touching the comma. Apostrophes stay
//! in the core ("children's", "dogs'").
//!
//! A core that holds several words with nothing between them, as in scripts
//! written without spaces ("私は猫"), is further split at the Unicode word
//! boundaries found by the ICU4X segmenter. Those tokens are marked as
//! joined and are rejoined without a space.
//!
//! Rejoining otherwise uses single spaces; the original spacing is not
//! preserved.

use std::sync::OnceLock;

use icu_segmenter::WordSegmenter;
use regex::Regex;

/// Leading non-word characters, the core, then trailing punctuation
const TOKEN_PATTERN: &str = r"^([^\p{L}\p{N}]*)(.*?)([^\p{L}\p{N}'’]*)$";

/// Sentence-final marks detached by the clause text operations
const SENTENCE_MARKS: &[char] = &['.', '!', '?', '…'];

/// One whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    pub leading: String,
    pub core: String,
    pub trailing: String,
    /// Follows the previous token with no whitespace in between
    pub joined: bool,
}

impl Token {
    /// Split a single whitespace-free token
    pub fn parse(raw: &str) -> Self {
        match token_pattern().and_then(|pattern| pattern.captures(raw)) {
            Some(caps) => {
                let part = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
                Self {
                    leading: part(1),
                    core: part(2),
                    trailing: part(3),
                    joined: false,
                }
            }
            None => Self {
                core: raw.to_string(),
                ..Self::default()
            },
        }
    }

    /// Token made of punctuation only
    pub fn is_punctuation(&self) -> bool {
        self.core.is_empty()
    }

    /// Same punctuation around a new core
    pub fn with_core(&self, core: impl Into<String>) -> Self {
        Self {
            leading: self.leading.clone(),
            core: core.into(),
            trailing: self.trailing.clone(),
            joined: self.joined,
        }
    }

    pub fn text(&self) -> String {
        format!("{}{}{}", self.leading, self.core, self.trailing)
    }
}

fn token_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(TOKEN_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("Invalid token pattern, punctuation stays attached: {e}");
                None
            }
        })
        .as_ref()
}

/// Tokens of `text` in order
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .flat_map(|raw| split_words(Token::parse(raw)))
        .collect()
}

/// Split a token whose core runs several words together
///
/// The leading punctuation goes to the first word and the trailing
/// punctuation to the last.
fn split_words(token: Token) -> Vec<Token> {
    let pieces = word_pieces(&token.core);
    if pieces.len() < 2 {
        return vec![token];
    }

    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| Token {
            leading: if i == 0 { token.leading.clone() } else { String::new() },
            core: piece.to_string(),
            trailing: if i == last { token.trailing.clone() } else { String::new() },
            joined: if i == 0 { token.joined } else { true },
        })
        .collect()
}

/// Cut `core` between adjacent word-like segments
///
/// Segments separated by something that is not a word ("e-mail", "don't")
/// stay together.
fn word_pieces(core: &str) -> Vec<&str> {
    if core.is_ascii() {
        return vec![core];
    }

    let segmenter = WordSegmenter::new_auto(Default::default());
    let mut breaks = segmenter.segment_str(core);
    let mut pieces = Vec::new();
    let (mut start, mut previous_end) = (0, 0);
    let mut previous_word_like = false;

    while let Some(end) = breaks.next() {
        if end == 0 {
            continue;
        }
        let word_like = breaks.is_word_like();
        if word_like && previous_word_like {
            pieces.push(&core[start..previous_end]);
            start = previous_end;
        }
        previous_word_like = word_like;
        previous_end = end;
    }
    pieces.push(&core[start..]);

    pieces
}

/// Rejoin tokens with single spaces, or none before a joined token
pub fn join(tokens: &[Token]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && !token.joined {
            text.push(' ');
        }
        text.push_str(&token.text());
    }
    text
}

/// Words of a sentence and its final punctuation
///
/// Punctuation inside the sentence stays attached to its word ("Yes,").
/// Only the sentence-final marks of the last token are detached.
pub fn split_sentence(text: &str) -> (Vec<String>, String) {
    let mut tokens: Vec<Token> = text.split_whitespace().map(Token::parse).collect();

    let mut terminal = String::new();
    if let Some(last) = tokens.last_mut() {
        if last.is_punctuation() {
            last.trailing = std::mem::take(&mut last.leading) + &last.trailing;
        }
        let kept = last.trailing.trim_end_matches(SENTENCE_MARKS).len();
        terminal = last.trailing.split_off(kept);
    }
    if tokens.last().is_some_and(|last| last.text().is_empty()) {
        tokens.pop();
    }

    (tokens.iter().map(Token::text).collect(), terminal)
}
