//! Fuzzy row-label matching against the canonical taxonomy.
//!
//! OCR frequently mangles label text (missing or merged characters), so
//! rows are matched by normalized string similarity against a short fixed
//! vocabulary instead of per-label regexes.

use super::normalize::normalize_label;

/// Default similarity cutoff for accepting a label match.
pub const DEFAULT_LABEL_CUTOFF: f64 = 0.7;

/// The canonical row label taxonomy, in matching priority order.
pub fn canonical_row_labels() -> Vec<String> {
    [
        "Revenue from operations",
        "Other income",
        "Total income",
        "Cost of construction and development",
        "Changes in inventories of work-in-progress and finished properties",
        "Employee benefit expense",
        "Finance costs",
        "Depreciation and amortisation expenses",
        "Other expenses",
        "Total expenses",
        "Profit/loss before tax",
        "Current tax",
        "Deferred tax",
        "Profit/loss for the period/year",
        "Other comprehensive income/loss",
        "Total comprehensive income/loss for the period/year, net of tax",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Fuzzy matcher over a fixed label taxonomy.
pub struct LabelMatcher {
    labels: Vec<String>,
    keys: Vec<String>,
    cutoff: f64,
}

impl LabelMatcher {
    /// Create a matcher over a taxonomy, with the default cutoff.
    /// Normalized comparison keys are precomputed once.
    pub fn new(labels: Vec<String>) -> Self {
        let keys = labels.iter().map(|l| normalize_label(l)).collect();
        Self {
            labels,
            keys,
            cutoff: DEFAULT_LABEL_CUTOFF,
        }
    }

    /// Set the similarity cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// The taxonomy this matcher was built over.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Match a raw line against the taxonomy.
    ///
    /// Returns the first label in taxonomy order whose normalized form is
    /// at least `cutoff`-similar to the normalized line. Taxonomy order is
    /// the tie-break: an earlier label that clears the cutoff wins even if
    /// a later one scores higher.
    pub fn match_line(&self, line: &str) -> Option<&str> {
        let key = normalize_label(line);
        self.labels
            .iter()
            .zip(&self.keys)
            .find(|(_, label_key)| similarity_ratio(&key, label_key) >= self.cutoff)
            .map(|(label, _)| label.as_str())
    }
}

/// Normalized similarity of two strings: `2 * LCS / (len_a + len_b)`.
///
/// 1.0 for identical strings, 0.0 for strings with no characters in common.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    2.0 * lcs_length(&a, &b) as f64 / (a.len() + b.len()) as f64
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }

    prev[b.len()]
}
