//! Sinhala script detection
//!
//! The pipeline's gate: text that already contains Sinhala script skips
//! normalization and transliteration entirely.

/// Sinhala Unicode block bounds, inclusive.
const SINHALA_BLOCK_START: char = '\u{0D80}';
const SINHALA_BLOCK_END: char = '\u{0DFF}';

/// Detects whether text is already in Sinhala script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// True if any code point falls in the Sinhala block U+0D80..=U+0DFF.
    /// A single in-range character is enough; mixed-script text counts as
    /// already Sinhala.
    pub fn is_sinhala(&self, text: &str) -> bool {
        text.chars()
            .any(|c| (SINHALA_BLOCK_START..=SINHALA_BLOCK_END).contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinhala_text_is_detected() {
        let detector = ScriptDetector::new();
        assert!(detector.is_sinhala("මම ගෙදර යනවා"));
    }

    #[test]
    fn test_latin_text_is_not_detected() {
        let detector = ScriptDetector::new();
        assert!(!detector.is_sinhala("mama gedara yanawa"));
        assert!(!detector.is_sinhala(""));
        assert!(!detector.is_sinhala("123 $ £"));
    }

    #[test]
    fn test_one_sinhala_character_is_enough() {
        let detector = ScriptDetector::new();
        assert!(detector.is_sinhala("price is රු.100"));
    }

    #[test]
    fn test_block_boundaries_are_inclusive() {
        let detector = ScriptDetector::new();
        assert!(detector.is_sinhala("\u{0D80}"));
        assert!(detector.is_sinhala("\u{0DFF}"));
        // neighbours just outside the block
        assert!(!detector.is_sinhala("\u{0D7F}"));
        assert!(!detector.is_sinhala("\u{0E00}"));
    }
}
