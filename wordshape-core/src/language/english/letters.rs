//! Letter-shape predicates shared by the English suffix rules
//!
//! All helpers expect lowercase input.

pub(crate) fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub(crate) fn is_consonant(ch: char) -> bool {
    ch.is_alphabetic() && !is_vowel(ch)
}

/// Word contains a vowel letter, counting `y`
pub(crate) fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| is_vowel(c) || c == 'y')
}

/// "try", "city": consonant followed by a final `y`
pub(crate) fn ends_with_consonant_y(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    match chars.as_slice() {
        [.., prev, 'y'] => is_consonant(*prev),
        _ => false,
    }
}

/// s, x, z, ch, sh endings, which take `-es`
pub(crate) fn ends_with_sibilant(word: &str) -> bool {
    word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
}

/// Stem that takes `-es` after a sibilant: "quiz" doubles its z, "box" stays
pub(crate) fn sibilant_stem(word: &str) -> String {
    if word.ends_with('z') && ends_with_cvc(word) && syllables(word) == 1 {
        double_final(word)
    } else {
        word.to_string()
    }
}

/// Consonant-vowel-consonant ending whose final consonant may be doubled
///
/// The final consonant is never w, x or y. A `u` after `q` counts as a
/// consonant ("quit" → "quitting").
pub(crate) fn ends_with_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }

    let (first, vowel, last) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    let first_is_consonant = is_consonant(first) || (first == 'u' && n >= 4 && chars[n - 4] == 'q');

    first_is_consonant
        && is_vowel(vowel)
        && is_consonant(last)
        && !matches!(last, 'w' | 'x' | 'y')
}

/// Double the final letter ("stop" → "stopp")
pub(crate) fn double_final(word: &str) -> String {
    match word.chars().last() {
        Some(last) => {
            let mut doubled = word.to_string();
            doubled.push(last);
            doubled
        }
        None => String::new(),
    }
}

/// Undo consonant doubling left behind by suffix stripping ("runn" → "run")
///
/// Stems ending in a doubled l, s, z or f keep both letters ("call", "kiss").
pub(crate) fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n > 3
        && chars[n - 1] == chars[n - 2]
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'l' | 's' | 'z' | 'f')
    {
        return chars[..n - 1].iter().collect();
    }
    stem.to_string()
}

/// One-syllable stem shaped like the front of a silent-e word ("lik", "us")
///
/// A single vowel followed by a consonant other than w, x or y, preceded by
/// a consonant or nothing at all.
pub(crate) fn lost_silent_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 || syllables(stem) != 1 {
        return false;
    }

    let (vowel, last) = (chars[n - 2], chars[n - 1]);
    let before_ok = n == 2 || is_consonant(chars[n - 3]);

    before_ok && is_vowel(vowel) && is_consonant(last) && !matches!(last, 'w' | 'x' | 'y')
}

/// Heuristic syllable count: vowel groups, minus a silent trailing `e`
///
/// A final consonant + "le" ("little", "simple") is a syllable of its own.
/// Never returns less than one.
pub(crate) fn syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut count = 0usize;
    let mut previous_vowel = false;

    for &ch in &chars {
        let vowel = is_vowel(ch) || ch == 'y';
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = chars.len();
    let consonant_le = n >= 3 && chars[n - 2] == 'l' && is_consonant(chars[n - 3]);
    let silent_e = n >= 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) && !consonant_le;
    if silent_e && count > 1 {
        count -= 1;
    }

    count.max(1)
}
