//! Text normalization engine
//!
//! Rewrites raw input text into a fully spelled-out phonetic word sequence
//! before any model sees it, in a fixed stage order:
//!
//! 1. Abbreviation expansion (time-period tokens)
//! 2. Currency symbol expansion
//! 3. Decimal composition (`<digits>.<digits>` -> "... dashama ...")
//! 4. Integer numeral expansion (remaining digit runs)
//!
//! The order is load-bearing: substitution phrases contain no digits, so
//! running them first keeps them inert under numeral expansion, and decimals
//! must be composed before bare digit runs are consumed. Stages 3 and 4 run
//! as one scan so that a decimal left verbatim is never re-matched piecemeal.
//!
//! Every stage is a pure string transform over immutable tables; `normalize`
//! is total and never fails.

mod lexicon;
mod numerals;
mod rules;

pub use lexicon::{NumeralLexicon, SINHALA};
pub use numerals::{number_to_words, UnsupportedMagnitude};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Spoken decimal separator inserted between the whole and fraction words.
const DECIMAL_SEPARATOR_WORD: &str = "dashama";

// Decimal arm first: a "whole.fraction" match must win over its bare runs.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\.(\d+)|\d+").unwrap());
static WHITESPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalization options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Collapse whitespace runs to single spaces and trim the ends of the
    /// final output. Off by default: some downstream consumers rely on the
    /// raw spacing the substitution phrases introduce.
    #[serde(default)]
    pub collapse_whitespace: bool,
}

/// The normalization engine.
///
/// Holds only configuration and a reference to an immutable lexicon, so a
/// single instance is safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    lexicon: &'static NumeralLexicon,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Engine over the Sinhala lexicon with the given options.
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            lexicon: &SINHALA,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Rewrite `text` into its spoken form. Total: any input string yields
    /// an output string, and digit runs beyond the supported numeral scale
    /// fall through verbatim.
    pub fn normalize(&self, text: &str) -> String {
        let text = rules::expand_abbreviations(text);
        let text = rules::expand_currency(&text);
        let text = self.expand_numbers(&text);
        if self.config.collapse_whitespace {
            collapse_whitespace(&text)
        } else {
            text
        }
    }

    /// Stages 3 and 4 in one scan: `<digits>.<digits>` becomes whole-words,
    /// the separator word, then fraction-words (the fraction converts as a
    /// literal integer, so "05" speaks as 5, preserving the deployed
    /// behavior); every other maximal digit run becomes its word form. A
    /// match with any part beyond the supported scale stays as written,
    /// whole; the single scan keeps its digit runs from matching on their
    /// own afterwards.
    fn expand_numbers(&self, text: &str) -> String {
        NUMBER_PATTERN
            .replace_all(text, |caps: &Captures| {
                let expanded = match (caps.get(1), caps.get(2)) {
                    (Some(whole), Some(fraction)) => {
                        number_to_words(whole.as_str(), self.lexicon).and_then(|whole| {
                            number_to_words(fraction.as_str(), self.lexicon).map(|fraction| {
                                format!("{whole} {DECIMAL_SEPARATOR_WORD} {fraction}")
                            })
                        })
                    }
                    _ => number_to_words(&caps[0], self.lexicon),
                };
                match expanded {
                    Ok(words) => words,
                    // out-of-scale runs stay as written
                    Err(UnsupportedMagnitude { .. }) => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Squeeze whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_PATTERN
        .replace_all(text, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::default()
    }

    fn collapsing_normalizer() -> Normalizer {
        Normalizer::new(NormalizerConfig {
            collapse_whitespace: true,
        })
    }

    #[test]
    fn test_empty_input_passes_through_every_stage() {
        assert_eq!(normalizer().normalize(""), "");
        assert_eq!(collapsing_normalizer().normalize(""), "");
    }

    #[test]
    fn test_digit_free_input_is_an_identity_transform() {
        let text = "mama gedara yanawa";
        assert_eq!(normalizer().normalize(text), text);
    }

    #[test]
    fn test_zero_expands_to_the_canonical_word() {
        assert_eq!(normalizer().normalize("0"), "shunya");
    }

    #[test]
    fn test_integers_expand_in_place() {
        assert_eq!(normalizer().normalize("mata 25 thibuna"), "mata wisi paha thibuna");
        assert_eq!(normalizer().normalize("100"), "eka siya");
    }

    #[test]
    fn test_decimal_composition_uses_the_separator_word() {
        assert_eq!(normalizer().normalize("3.5"), "thuna dashama paha");
        // fraction digits convert as a literal integer, so "05" speaks as 5
        assert_eq!(normalizer().normalize("0.05"), "shunya dashama paha");
        assert_eq!(normalizer().normalize("12.45"), "dolaha dashama hathalis paha");
    }

    #[test]
    fn test_decimals_are_composed_before_bare_digit_runs() {
        // a leftover fragment after the first decimal match is not
        // re-interpreted as a second decimal
        assert_eq!(
            normalizer().normalize("1.2.3"),
            "eka dashama deka.thuna"
        );
    }

    #[test]
    fn test_currency_expansion_leaves_the_digit_run_intact() {
        assert_eq!(normalizer().normalize("Rs.100"), " rupiyal eka siya");
        assert_eq!(normalizer().normalize("$5"), " dollar paha");
        assert_eq!(normalizer().normalize("රු.250"), " rupiyal deka siya panas");
    }

    #[test]
    fn test_currency_dot_is_consumed_before_decimal_composition() {
        // the rupee marker's dot must not pair with the following digits
        assert_eq!(normalizer().normalize("Rs.3.5"), " rupiyal thuna dashama paha");
    }

    #[test]
    fn test_abbreviation_and_number_expand_independently() {
        assert_eq!(normalizer().normalize("ප.ව. 3"), "paswaru thuna");
        assert_eq!(normalizer().normalize("ෙප.ව. 10"), "perawaru daha");
    }

    #[test]
    fn test_oversized_digit_runs_survive_verbatim() {
        let over = "1234567890123456";
        assert_eq!(normalizer().normalize(over), over);
        // and embedded in text
        assert_eq!(
            normalizer().normalize("anka 1234567890123456 lokui"),
            "anka 1234567890123456 lokui"
        );
    }

    #[test]
    fn test_oversized_decimal_parts_keep_the_whole_match() {
        // neither part may be voiced while the other is kept
        let oversized_whole = "1234567890123456.5";
        assert_eq!(normalizer().normalize(oversized_whole), oversized_whole);

        let oversized_fraction = "5.1234567890123456";
        assert_eq!(normalizer().normalize(oversized_fraction), oversized_fraction);

        assert_eq!(
            normalizer().normalize("ganana 1234567890123456.5 withara"),
            "ganana 1234567890123456.5 withara"
        );
    }

    #[test]
    fn test_non_ascii_digit_runs_survive_verbatim() {
        // \d matches Unicode digits, but the converter only voices ASCII runs
        assert_eq!(normalizer().normalize("٢٥"), "٢٥");
        assert_eq!(normalizer().normalize("ganana ٢٥ withara"), "ganana ٢٥ withara");
    }

    #[test]
    fn test_collapse_whitespace_is_opt_in() {
        assert_eq!(normalizer().normalize("Rs.100"), " rupiyal eka siya");
        assert_eq!(collapsing_normalizer().normalize("Rs.100"), "rupiyal eka siya");
        assert_eq!(
            collapsing_normalizer().normalize("  mata   25  "),
            "mata wisi paha"
        );
    }

    #[test]
    fn test_normalize_is_idempotent_on_its_own_output() {
        let samples = [
            "",
            "mama gedara yanawa",
            "Rs.100 saha $5",
            "3.5 ta ප.ව. 7",
            "1234567890123456",
            "1234567890123456.5",
            "  uneven   spacing  ",
        ];
        for config in [false, true] {
            let engine = Normalizer::new(NormalizerConfig {
                collapse_whitespace: config,
            });
            for sample in samples {
                let once = engine.normalize(sample);
                assert_eq!(
                    engine.normalize(&once),
                    once,
                    "normalize is not idempotent on {sample:?} (collapse={config})"
                );
            }
        }
    }

    #[test]
    fn test_config_deserializes_with_collapse_defaulted_off() {
        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.collapse_whitespace);
    }
}
