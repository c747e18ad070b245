use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NOISE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9/]+").unwrap());

static LABEL_NOISE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

/// Keep ASCII letters, digits and `/`; drop everything else, whitespace included.
///
/// Case is preserved.
pub fn normalize_text(text: &str) -> String {
    NOISE_REGEX.replace_all(text, "").into_owned()
}

/// Leading characters shared by `a` and `b`, compared one char at a time.
pub fn longest_common_start(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

/// First `n` chars of `s` (all of it when shorter).
pub(crate) fn head(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Lowercased word set of a category label, punctuation removed.
pub fn label_tokens(label: &str) -> BTreeSet<String> {
    let lowered = label.to_lowercase();
    LABEL_NOISE_REGEX
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
