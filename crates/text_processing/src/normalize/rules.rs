//! Abbreviation and currency substitution tables
//!
//! Ordered (pattern, replacement) pairs compiled once and applied globally,
//! one pattern at a time, in declaration order. Patterns and replacement
//! spacing are carried verbatim from the deployed tables; the spacing is
//! part of the authored phrase, padded for the rupee and dollar phrases
//! and absent for the pound phrase.

use once_cell::sync::Lazy;
use regex::Regex;

/// Time-period abbreviations. The perawaru pattern textually embeds the
/// paswaru pattern, so it must run first.
static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"ෙප\.ව\.").unwrap(), "perawaru"),
        (Regex::new(r"ප\.ව\.").unwrap(), "paswaru"),
    ]
});

/// Currency symbols and markers, rupee variants first.
static CURRENCY: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(රු\.|RS\.|Rs\.)").unwrap(), " rupiyal "),
        (Regex::new(r"\$").unwrap(), " dollar "),
        (Regex::new("£").unwrap(), "pawum"),
    ]
});

pub(crate) fn expand_abbreviations(text: &str) -> String {
    apply(&ABBREVIATIONS, text)
}

pub(crate) fn expand_currency(text: &str) -> String {
    apply(&CURRENCY, text)
}

/// Apply every rule in order, each substituting all of its occurrences
/// before the next rule runs.
fn apply(rules: &[(Regex, &'static str)], text: &str) -> String {
    let mut output = text.to_string();
    for (pattern, replacement) in rules {
        output = pattern.replace_all(&output, *replacement).into_owned();
    }
    output
}
