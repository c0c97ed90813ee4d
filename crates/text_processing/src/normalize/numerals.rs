//! Numeral-to-words conversion
//!
//! Turns an ASCII digit string into its spoken Sinhala word sequence:
//! mod-1000 scale grouping, irregular 0-20 forms, tens/units and hundreds
//! composition, and per-group scale words. Pure functions over an
//! explicitly passed [`NumeralLexicon`]; no hidden state.

use thiserror::Error;

use super::lexicon::NumeralLexicon;

/// A digit run with more significant digits than the lexicon's scale-word
/// table can voice.
///
/// The rewrite stages respond by leaving the matched run verbatim, so
/// normalization stays total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("digit run of {digits} significant digits exceeds the supported numeral scale")]
pub struct UnsupportedMagnitude {
    /// Number of significant digits in the rejected run.
    pub digits: usize,
}

/// Convert a non-negative integer, given as an ASCII digit string, to its
/// spelled-out word sequence.
///
/// Leading zeros are ignored; the value alone decides the result. An empty
/// or all-zero string yields the canonical zero word. The output carries no
/// leading or trailing whitespace; surrounding spacing is the pipeline's
/// concern.
///
/// # Example
///
/// ```
/// use singlish_voice_text_processing::normalize::{number_to_words, SINHALA};
///
/// assert_eq!(number_to_words("25", &SINHALA).unwrap(), "wisi paha");
/// assert_eq!(number_to_words("1000", &SINHALA).unwrap(), "eka dahas");
/// ```
pub fn number_to_words(
    digits: &str,
    lexicon: &NumeralLexicon,
) -> Result<String, UnsupportedMagnitude> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(lexicon.zero().to_string());
    }
    let digit_count = significant.chars().count();

    // Each scale group covers 3 digits, so the table bounds the run length.
    let max_digits = (lexicon.max_scale_index() + 1) * 3;
    if digit_count > max_digits {
        return Err(UnsupportedMagnitude {
            digits: digit_count,
        });
    }

    // The rewrite stages hand over `\d+` matches, which include non-ASCII
    // Unicode digits; those fail the parse and are treated like an
    // oversized run.
    let mut value: u64 = significant
        .parse()
        .map_err(|_| UnsupportedMagnitude { digits: digit_count })?;

    let mut parts: Vec<String> = Vec::new();
    let mut scale_index = 0;
    while value > 0 {
        let group = value % 1000;
        if group > 0 {
            let mut text = group_to_words(group, lexicon);
            if scale_index > 0 {
                text.push(' ');
                text.push_str(lexicon.scale(scale_index));
            }
            parts.push(text);
        }
        value /= 1000;
        scale_index += 1;
    }

    parts.reverse();
    Ok(parts.join(" "))
}

/// Words for one nonzero scale group (1..=999), without its scale word.
fn group_to_words(group: u64, lexicon: &NumeralLexicon) -> String {
    let hundreds = group / 100;
    let remainder = group % 100;

    let mut text = String::new();
    if hundreds > 0 {
        text.push_str(lexicon.unit(hundreds));
        text.push(' ');
        text.push_str(lexicon.hundred);
    }
    if remainder > 0 {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&words_0_to_99(remainder, lexicon));
    }
    text
}

/// Words for a value 0..=99: the exact table for 0..=20 (irregular teens),
/// tens + units composition above that.
fn words_0_to_99(value: u64, lexicon: &NumeralLexicon) -> String {
    if value <= 20 {
        return lexicon.exact(value).to_string();
    }

    let tens = value / 10;
    let unit = value % 10;
    if unit == 0 {
        lexicon.tens(tens).to_string()
    } else {
        format!("{} {}", lexicon.tens(tens), lexicon.unit(unit))
    }
}
