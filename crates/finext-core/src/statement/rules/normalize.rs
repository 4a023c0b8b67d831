//! Text normalization for label comparison and OCR cleanup.

use super::patterns::NON_ASCII;

/// Reduce a line to its comparison key: lower-cased with everything but
/// `a-z` removed. Insensitive to punctuation, whitespace, digits and
/// OCR-induced case noise.
pub fn normalize_label(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Scrub raw OCR output: each run of non-ASCII bytes becomes a single
/// space, and surrounding whitespace is trimmed.
pub fn clean_ocr_text(text: &str) -> String {
    NON_ASCII.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_case_and_punctuation_insensitive() {
        assert_eq!(
            normalize_label("Revenue from operations"),
            normalize_label("REVENUE FROM OPERATIONS!!")
        );
        assert_eq!(
            normalize_label("Profit/loss before tax"),
            "profitlossbeforetax"
        );
    }

    #[test]
    fn test_normalize_drops_digits_and_currency() {
        assert_eq!(
            normalize_label("Total income 1,234.50 $"),
            "totalincome"
        );
    }

    #[test]
    fn test_normalize_may_be_empty() {
        assert_eq!(normalize_label("1,234.50 99"), "");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn test_clean_ocr_text() {
        assert_eq!(clean_ocr_text("  Revenue\u{20b9}from ops  "), "Revenue from ops");
        assert_eq!(clean_ocr_text("plain ascii"), "plain ascii");
    }
}
