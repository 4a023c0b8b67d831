//! Numeric token extraction for statement rows.

use super::patterns::NUMBER_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// Numeric token extractor.
pub struct NumberExtractor;

impl NumberExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the numeric values of one line, in left-to-right order.
    ///
    /// Tokens the pattern matched but `f64` parsing rejects are reported in
    /// `skipped` rather than aborting the line.
    pub fn line_values(&self, line: &str) -> LineValues {
        let mut values = Vec::new();
        let mut skipped = Vec::new();

        for m in NUMBER_PATTERN.find_iter(line) {
            match parse_amount(m.as_str()) {
                Some(value) => values.push(value),
                None => skipped.push(m.as_str().to_string()),
            }
        }

        LineValues { values, skipped }
    }
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NumberExtractor {
    type Output = ExtractionMatch<f64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NUMBER_PATTERN
            .find_iter(text)
            .filter_map(|m| {
                parse_amount(m.as_str()).map(|value| {
                    ExtractionMatch::new(value, m.as_str())
                        .with_position(m.start(), m.end())
                })
            })
            .collect()
    }
}

/// Numeric values of one line.
#[derive(Debug, Clone, Default)]
pub struct LineValues {
    /// Parsed values in source order.
    pub values: Vec<f64>,
    /// Tokens that matched the numeric pattern but failed to parse.
    pub skipped: Vec<String>,
}

impl LineValues {
    /// True when the line carried no numeric token at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.skipped.is_empty()
    }
}

/// Parse a numeric token, stripping thousands separators.
pub fn parse_amount(token: &str) -> Option<f64> {
    token.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strips_thousands_separators() {
        assert_eq!(parse_amount("12,345.67"), Some(12345.67));
        assert_eq!(parse_amount("1,234.50"), Some(1234.50));
        assert_eq!(parse_amount("903"), Some(903.0));
        assert_eq!(parse_amount("-1,050.25"), Some(-1050.25));
    }

    #[test]
    fn test_parse_amount_tolerates_stray_commas() {
        // OCR sometimes drops a digit group; the comma is noise, not structure.
        assert_eq!(parse_amount("1,23,456"), Some(123456.0));
    }

    #[test]
    fn test_line_values_in_order() {
        let extractor = NumberExtractor::new();
        let result = extractor.line_values("Revenue from operations 1,234.50 1,200.00");

        assert_eq!(result.values, vec![1234.50, 1200.00]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_line_without_numbers_is_empty() {
        let extractor = NumberExtractor::new();
        let result = extractor.line_values("Particulars (Rs. in lakhs)");

        assert!(result.values.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_extract_all_records_positions() {
        let extractor = NumberExtractor::new();
        let matches = extractor.extract_all("900.5 then 1,000");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].value, 900.5);
        assert_eq!(matches[0].position, Some((0, 5)));
        assert_eq!(matches[1].source, "1,000");
    }
}
