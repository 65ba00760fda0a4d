/*!
 * Text normalization for line comparison.
 *
 * Splits a raw line into word-granularity units while keeping the exact
 * original substrings alongside their normalized comparison tokens, so that
 * mistakes can be highlighted in the user's own text rather than in a
 * normalized rendition of it.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// ASCII punctuation stripped from comparison tokens.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Whitespace characters treated as unit separators.
const WHITESPACE: &str = " \t\n\r\u{0B}\u{0C}";

static SEPARATORS: Lazy<HashSet<char>> =
    Lazy::new(|| PUNCTUATION.chars().chain(WHITESPACE.chars()).collect());

/// A line split into original substrings and their comparison tokens.
///
/// Both sequences are index-aligned: `processed[i]` is the comparison form
/// of `original[i]`. Concatenating `original` in order reconstructs the
/// source string exactly. The pairing lives in one container so the
/// equal-length invariant cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Original substrings, in source order
    pub original: Vec<String>,

    /// Normalized comparison tokens, index-aligned with `original`
    pub processed: Vec<String>,
}

impl NormalizedText {
    /// Number of units in the line
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Check whether the line produced no units at all
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Join a half-open range of original substrings back into text
    pub fn original_slice(&self, begin: usize, end: usize) -> String {
        self.original[begin..end].concat()
    }

    /// Reconstruct the full source string
    pub fn original_text(&self) -> String {
        self.original.concat()
    }
}

/// Split `text` into word units and derive a comparison token for each.
///
/// A unit is a maximal run of word characters plus any separators attached
/// to it up to the next word character; separators before the first word
/// fold into the first unit. The comparison token keeps only the word
/// characters, lowercased and with diacritics folded, so "Héllo," and
/// "hello" compare equal. Total function: any input, including the empty
/// string, has a well-defined result.
pub fn normalize(text: &str) -> NormalizedText {
    let mut original = Vec::new();
    let mut processed = Vec::new();

    let mut current_original = String::new();
    let mut current_processed = String::new();

    let chars: Vec<char> = text.chars().collect();
    for (idx, &current) in chars.iter().enumerate() {
        current_original.push(current);

        if !is_separator(current) {
            for lower in current.to_lowercase() {
                current_processed.push(fold_diacritic(lower));
            }
        }

        // A unit ends when the attached separator run meets the next word,
        // or at the end of input.
        let boundary = match chars.get(idx + 1) {
            None => true,
            Some(&next) => {
                is_separator(current) && !is_separator(next) && !current_processed.is_empty()
            }
        };

        if boundary {
            original.push(std::mem::take(&mut current_original));
            processed.push(std::mem::take(&mut current_processed));
        }
    }

    NormalizedText {
        original,
        processed,
    }
}

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Fold an accented Latin letter to its base letter.
///
/// Covers the Latin-1 supplement plus the accented letters common in
/// European stage scripts. Anything else passes through unchanged.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
