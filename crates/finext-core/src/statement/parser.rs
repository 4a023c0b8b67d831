//! Statement page parser: periods, fuzzy row matching, column alignment.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::statement::FinancialData;

use super::align::{ColumnAligner, PositionalAligner};
use super::diag::{DiagnosticSink, TracingSink};
use super::rules::{LabelMatcher, NumberExtractor, PeriodExtractor};

/// Result of extracting one statement page.
#[derive(Debug, Clone)]
pub struct PageExtraction {
    /// Extracted financial data.
    pub data: FinancialData,
    /// Period sequence the values were aligned to.
    pub periods: Vec<String>,
    /// Data lines that matched no row label.
    pub unmatched_lines: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for page parsing.
pub trait PageParser {
    /// Parse one page of OCR text. Total: degraded input degrades the
    /// result, never the call.
    fn parse_page(&self, text: &str) -> PageExtraction;
}

/// Rule-based statement page parser.
///
/// Holds no per-page state; one instance can serve concurrent pages, each
/// call building its own mapping.
pub struct StatementParser {
    matcher: LabelMatcher,
    periods: PeriodExtractor,
    numbers: NumberExtractor,
    aligner: Box<dyn ColumnAligner>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl StatementParser {
    /// Create a parser with the canonical taxonomy and defaults.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            matcher: LabelMatcher::new(config.row_labels.clone())
                .with_cutoff(config.label_cutoff),
            periods: PeriodExtractor::new()
                .with_min_count(config.min_periods)
                .with_fallback(config.fallback_periods.clone()),
            numbers: NumberExtractor::new(),
            aligner: Box::new(PositionalAligner),
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replace the column alignment strategy.
    pub fn with_aligner(mut self, aligner: Box<dyn ColumnAligner>) -> Self {
        self.aligner = aligner;
        self
    }

    /// Replace the diagnostics sink.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Extract rows from page text against a known period sequence.
    ///
    /// Walks each line: blank lines and lines without numeric tokens are
    /// skipped outright; lines that match no row label are reported and
    /// skipped; matched lines have their values aligned to period columns,
    /// later occurrences overwriting earlier ones. Returns the mapping and
    /// the unmatched data lines.
    pub fn extract_rows(
        &self,
        text: &str,
        periods: &[String],
    ) -> (FinancialData, Vec<String>) {
        let mut data = FinancialData::new();
        let mut unmatched = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let extracted = self.numbers.line_values(line);
            for token in &extracted.skipped {
                self.diagnostics.malformed_token(token, line);
            }
            if extracted.is_empty() {
                // Header, footer or prose line.
                continue;
            }

            match self.matcher.match_line(line) {
                Some(label) => {
                    for (idx, value) in self.aligner.align(&extracted.values, periods) {
                        if let Some(period) = periods.get(idx) {
                            data.insert(period, label, value);
                        }
                    }
                }
                None => {
                    let line = line.trim();
                    self.diagnostics.unmatched_row(line);
                    unmatched.push(line.to_string());
                }
            }
        }

        (data, unmatched)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PageParser for StatementParser {
    fn parse_page(&self, text: &str) -> PageExtraction {
        let start = Instant::now();

        info!("parsing page from {} characters of text", text.len());

        let periods = self.periods.sequence(text);
        let (data, unmatched_lines) = self.extract_rows(text, &periods);

        debug!(
            "extracted {} values across {} periods, {} unmatched lines",
            data.value_count(),
            data.len(),
            unmatched_lines.len()
        );

        PageExtraction {
            data,
            periods,
            unmatched_lines,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::statement::diag::{CollectingSink, Diagnostic};

    fn periods(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_values_align_to_two_periods() {
        let parser = StatementParser::new();
        let (data, unmatched) = parser.extract_rows(
            "Revenue from operations 1,234.50 1,200.00",
            &periods(&["P1", "P2"]),
        );

        assert_eq!(data.get("P1", "Revenue from operations"), Some(1234.50));
        assert_eq!(data.get("P2", "Revenue from operations"), Some(1200.00));
        assert_eq!(data.value_count(), 2);
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_unmatched_data_line_is_reported_and_dropped() {
        let sink = Arc::new(CollectingSink::new());
        let parser = StatementParser::new().with_diagnostics(sink.clone());

        let page = parser.parse_page("Randome unmatched line 123 456");

        assert!(page.data.is_empty());
        assert_eq!(page.unmatched_lines.len(), 1);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            Diagnostic::UnmatchedRow("Randome unmatched line 123 456".to_string())
        );
    }

    #[test]
    fn test_values_beyond_period_bound_are_dropped() {
        let parser = StatementParser::new();
        let page = parser.parse_page("Revenue from operations 1 2 3 4 5 6 7 8");

        // No date markers on the page, so the six fallback periods apply:
        // eight values, six columns, two dropped.
        assert_eq!(page.periods.len(), 6);
        assert_eq!(page.data.value_count(), 6);
        assert_eq!(
            page.data.get(&page.periods[5], "Revenue from operations"),
            Some(6.0)
        );
        assert_eq!(page.data.get(&page.periods[0], "Revenue from operations"), Some(1.0));
    }

    #[test]
    fn test_lines_without_numbers_leave_mapping_untouched() {
        let parser = StatementParser::new();
        let (data, unmatched) = parser.extract_rows(
            "Statement of financial results\n\
             \n\
             Particulars (Rs. in lakhs)\n\
             Revenue from operations 900.5",
            &periods(&["P1"]),
        );

        assert_eq!(data.value_count(), 1);
        assert_eq!(data.get("P1", "Revenue from operations"), Some(900.5));
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_empty_page_yields_empty_mapping() {
        let parser = StatementParser::new();
        let page = parser.parse_page("   \n\n  \n");

        assert!(page.data.is_empty());
        assert!(page.unmatched_lines.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let parser = StatementParser::new();
        let text = "Revenue from operations 1,234.50 1,200.00\n\
                    Other income 5.0 6.0\n\
                    some footer noise 99";
        let cols = periods(&["P1", "P2"]);

        let (first, _) = parser.extract_rows(text, &cols);
        let (second, _) = parser.extract_rows(text, &cols);

        assert_eq!(first, second);
    }

    #[test]
    fn test_later_occurrence_overwrites() {
        let parser = StatementParser::new();
        let (data, _) = parser.extract_rows(
            "Revenue from operations 100.0\n\
             Revenue from operations 200.0",
            &periods(&["P1"]),
        );

        assert_eq!(data.get("P1", "Revenue from operations"), Some(200.0));
        assert_eq!(data.value_count(), 1);
    }

    #[test]
    fn test_detected_periods_key_the_output() {
        let parser = StatementParser::new();
        let text = "Results for 31 December 2024, 30 September 2024, 31 December 2023,\n\
                    31 December 2024, 31 December 2023 and 31 March 2024\n\
                    Other income 10.5 11.5";

        let page = parser.parse_page(text);

        assert_eq!(page.periods.len(), 6);
        assert_eq!(page.data.get("31 December 2024", "Other income"), Some(10.5));
        assert_eq!(page.data.get("30 September 2024", "Other income"), Some(11.5));
    }
}
