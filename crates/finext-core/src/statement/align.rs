//! Value-to-period column alignment.
//!
//! Alignment is a strategy behind a trait so the order-based default can be
//! replaced by a geometry-aware one without touching matching logic.

/// Strategy pairing a matched row's values with period columns.
pub trait ColumnAligner: Send + Sync {
    /// Pair each value with the index of the period column it belongs to.
    /// Values that cannot be placed are omitted from the result.
    fn align(&self, values: &[f64], periods: &[String]) -> Vec<(usize, f64)>;
}

/// Order-based alignment: value `i` belongs to period column `i`.
///
/// Assumes numeric tokens appear in the same left-to-right order as the
/// period columns; values beyond the period count are dropped.
pub struct PositionalAligner;

impl ColumnAligner for PositionalAligner {
    fn align(&self, values: &[f64], periods: &[String]) -> Vec<(usize, f64)> {
        values
            .iter()
            .copied()
            .enumerate()
            .take(periods.len())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_positional_pairing() {
        let aligner = PositionalAligner;
        let pairs = aligner.align(&[1.0, 2.0], &periods(6));
        assert_eq!(pairs, vec![(0, 1.0), (1, 2.0)]);
    }

    #[test]
    fn test_excess_values_dropped() {
        let aligner = PositionalAligner;
        let values: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let pairs = aligner.align(&values, &periods(6));

        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[5], (5, 5.0));
    }

    #[test]
    fn test_no_periods_yields_nothing() {
        let aligner = PositionalAligner;
        assert!(aligner.align(&[1.0], &[]).is_empty());
    }
}
