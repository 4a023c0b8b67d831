//! Result models: page-level financial data and the document-level report.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::statement::PageExtraction;

/// Placeholder emitted for the balance sheet section, which this extractor
/// does not handle.
pub const BALANCE_SHEET_NOTE: &str = "balance sheet not present";

/// Placeholder emitted for the cash flow section, which this extractor does
/// not handle.
pub const CASH_FLOW_NOTE: &str = "cash flow statements not present";

const RESULTS_NOTE: &str = "financial results not present";

/// Extracted financial data for one page: period -> row label -> value.
///
/// Outer keys iterate and serialize in period-detection order, which is the
/// positional key used for column alignment. A (period, label) pair holds at
/// most one value; later writes overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialData {
    order: Vec<String>,
    rows: HashMap<String, BTreeMap<String, f64>>,
}

impl FinancialData {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value for a (period, label) pair, overwriting any earlier one.
    pub fn insert(&mut self, period: &str, label: &str, value: f64) {
        if !self.rows.contains_key(period) {
            self.order.push(period.to_string());
        }
        self.rows
            .entry(period.to_string())
            .or_default()
            .insert(label.to_string(), value);
    }

    /// Look up the value for a (period, label) pair.
    pub fn get(&self, period: &str, label: &str) -> Option<f64> {
        self.rows.get(period)?.get(label).copied()
    }

    /// All rows recorded under a period.
    pub fn period_rows(&self, period: &str) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(period)
    }

    /// Periods with at least one value, in insertion order.
    pub fn periods(&self) -> &[String] {
        &self.order
    }

    /// Number of periods with at least one value.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no value has been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of (period, label) values recorded.
    pub fn value_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Iterate periods in insertion order with their rows.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.order.iter().map(|p| (p.as_str(), &self.rows[p]))
    }

    /// Merge another mapping into this one, overwriting on collision.
    pub fn merge(&mut self, other: &FinancialData) {
        for (period, rows) in other.iter() {
            for (label, value) in rows {
                self.insert(period, label, *value);
            }
        }
    }
}

impl Serialize for FinancialData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (period, rows) in self.iter() {
            map.serialize_entry(period, rows)?;
        }
        map.end()
    }
}

/// Which set of results a statement page reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Standalone financial results.
    Standalone,
    /// Consolidated financial results.
    Consolidated,
}

/// One section of the document-level report: either extracted data or a
/// fixed note explaining its absence.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Section {
    /// Data extracted from a page of this kind.
    Extracted(FinancialData),
    /// The section was not extracted.
    Missing(String),
}

impl Section {
    /// True when the section carries extracted data.
    pub fn is_extracted(&self) -> bool {
        matches!(self, Section::Extracted(_))
    }

    /// The extracted data, if present.
    pub fn data(&self) -> Option<&FinancialData> {
        match self {
            Section::Extracted(data) => Some(data),
            Section::Missing(_) => None,
        }
    }
}

/// Metadata about a report extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,

    /// Number of pages folded into the report.
    pub pages: u32,

    /// Total processing time across pages, in milliseconds.
    pub processing_time_ms: u64,

    /// Data lines that matched no row label, across all pages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched_lines: Vec<String>,
}

/// Document-level report: per-statement-kind results plus placeholders for
/// the statement sections this extractor does not handle.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    /// Standalone results section.
    pub standalone_financial_results: Section,

    /// Consolidated results section.
    pub consolidated_financial_results: Section,

    /// Balance sheet placeholder.
    pub balance_sheet: Section,

    /// Cash flow placeholder.
    pub cash_flow_statements: Section,

    /// Extraction metadata.
    pub metadata: ReportMetadata,
}

impl FinancialReport {
    /// Create an empty report with all sections marked absent.
    pub fn new() -> Self {
        Self {
            standalone_financial_results: Section::Missing(RESULTS_NOTE.to_string()),
            consolidated_financial_results: Section::Missing(RESULTS_NOTE.to_string()),
            balance_sheet: Section::Missing(BALANCE_SHEET_NOTE.to_string()),
            cash_flow_statements: Section::Missing(CASH_FLOW_NOTE.to_string()),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                pages: 0,
                processing_time_ms: 0,
                unmatched_lines: Vec::new(),
            },
        }
    }

    /// Fold one page extraction into the report. Adding a second page of the
    /// same kind merges its values, overwriting on collision.
    pub fn add_page(&mut self, kind: StatementKind, page: &PageExtraction) {
        let section = match kind {
            StatementKind::Standalone => &mut self.standalone_financial_results,
            StatementKind::Consolidated => &mut self.consolidated_financial_results,
        };

        match section {
            Section::Extracted(existing) => existing.merge(&page.data),
            Section::Missing(_) => *section = Section::Extracted(page.data.clone()),
        }

        self.metadata.pages += 1;
        self.metadata.processing_time_ms += page.processing_time_ms;
        self.metadata
            .unmatched_lines
            .extend(page.unmatched_lines.iter().cloned());
    }

    /// The section for a statement kind.
    pub fn section(&self, kind: StatementKind) -> &Section {
        match kind {
            StatementKind::Standalone => &self.standalone_financial_results,
            StatementKind::Consolidated => &self.consolidated_financial_results,
        }
    }
}

impl Default for FinancialReport {
    fn default() -> Self {
        Self::new()
    }
}
