//! Sinhala numeral lexicon
//!
//! Static read-only word tables the numeral converter composes from. The
//! word forms are product data, romanization quirks included (`units[9]`
//! is "nawaya" while the exact table spells 9 "navaya"), and are not to
//! be respelled without a product decision.

/// Immutable numeral word tables for one numeral grammar.
///
/// Total over its declared domain: `units` for 0..=9, `tens_prefix` for
/// tens digits 2..=9, `exact_0_to_20` for 0..=20, `scale_words` for scale
/// indices 0..=4. Out-of-domain lookups are programming errors, checked by
/// debug assertions in the accessors.
#[derive(Debug)]
pub struct NumeralLexicon {
    /// Word for a single digit in tens context; index 0 is empty so a bare
    /// tens word needs no special casing by callers.
    pub units: [&'static str; 10],
    /// Words for 20, 30, ..., 90, indexed by tens digit minus 2.
    pub tens_prefix: [&'static str; 8],
    /// Canonical words for 0..=20; the teens are irregular and never
    /// composed from tens + units.
    pub exact_0_to_20: [&'static str; 21],
    /// The hundred-scale word.
    pub hundred: &'static str,
    /// Scale-group words for 10^0 (none), 10^3, 10^6, 10^9, 10^12.
    pub scale_words: [&'static str; 5],
}

/// The Sinhala numeral grammar. The only lexicon this system ships;
/// arbitrary locales are out of scope.
pub static SINHALA: NumeralLexicon = NumeralLexicon {
    units: [
        "", "eka", "deka", "thuna", "hathara", "paha", "haya", "hatha", "ata", "nawaya",
    ],
    tens_prefix: [
        "wisi", "this", "hathalis", "panas", "hata", "hatha", "asu", "anu",
    ],
    exact_0_to_20: [
        "shunya",
        "eka",
        "deka",
        "thuna",
        "hathara",
        "paha",
        "haya",
        "hatha",
        "ata",
        "navaya",
        "daha",
        "ekaloha",
        "dolaha",
        "dahathuna",
        "dahahathara",
        "pahalosa",
        "dahasaya",
        "dahahatha",
        "dahaata",
        "dahanavaya",
        "wisi",
    ],
    hundred: "siya",
    scale_words: ["", "dahas", "miliyana", "biliyana", "triliyana"],
};

impl NumeralLexicon {
    /// Word for a single digit 0..=9.
    pub fn unit(&self, digit: u64) -> &'static str {
        debug_assert!(digit <= 9);
        self.units[digit as usize]
    }

    /// Word for a tens digit 2..=9.
    pub fn tens(&self, digit: u64) -> &'static str {
        debug_assert!((2..=9).contains(&digit));
        self.tens_prefix[digit as usize - 2]
    }

    /// Canonical word for a value 0..=20.
    pub fn exact(&self, value: u64) -> &'static str {
        debug_assert!(value <= 20);
        self.exact_0_to_20[value as usize]
    }

    /// Word for a scale group index 1..=4 (index 0 carries no word).
    pub fn scale(&self, index: usize) -> &'static str {
        debug_assert!((1..=4).contains(&index));
        self.scale_words[index]
    }

    /// The canonical zero word.
    pub fn zero(&self) -> &'static str {
        self.exact_0_to_20[0]
    }

    /// Highest scale-group index `scale_words` covers.
    pub fn max_scale_index(&self) -> usize {
        self.scale_words.len() - 1
    }
}
