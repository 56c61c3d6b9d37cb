//! Token-level information scoring.
//!
//! Filler words score low and go first; numbers and code-shaped tokens score
//! high and survive aggressive rates. Repeated occurrences of the same word
//! decay so that redundant phrasing is dropped before unique content.

use std::sync::LazyLock;

use regex::Regex;

/// Words dropped first under token pressure.
const FILLER_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "each",
    "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "just", "let", "me", "more", "most", "my", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your",
];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static SYMBOLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_:=(){}\[\]<>/\\^*+]|[A-Za-z]\d|\d[A-Za-z]").unwrap());

/// Split text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercased token with surrounding punctuation stripped. Used both as the
/// repeat-tracking key and for filler lookup.
pub fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Score one token. `repeats` is how many times its normalized form has
/// already appeared earlier in the text.
pub fn score_token(token: &str, repeats: usize) -> f64 {
    let core = normalize(token);
    let base = if core.is_empty() {
        // Pure punctuation carries structure but little content.
        0.5
    } else if FILLER_WORDS.contains(&core.as_str()) {
        0.2
    } else if NUMERIC_RE.is_match(&core) {
        // Numeric values are usually load-bearing in reasoning chains.
        3.0
    } else if SYMBOLIC_RE.is_match(token) {
        // Equations, identifiers, inline code.
        2.5
    } else {
        1.0 + 0.1 * (core.chars().count().min(12) as f64)
    };
    base / (1.0 + repeats as f64 * 0.5)
}
