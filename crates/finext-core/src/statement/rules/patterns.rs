//! Common regex patterns for statement page extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Reporting period markers, e.g. "31 December 2023" or "30 Sep 2024"
    pub static ref PERIOD_PATTERN: Regex = Regex::new(
        r"\d{1,2} [A-Za-z]{3,9} \d{4}"
    ).unwrap();

    // Numeric tokens, tolerating OCR comma noise in large numbers
    pub static ref NUMBER_PATTERN: Regex = Regex::new(
        r"-?\d[\d,]*\.?\d*"
    ).unwrap();

    // Runs of non-ASCII bytes left behind by the OCR engine
    pub static ref NON_ASCII: Regex = Regex::new(
        r"[^\x00-\x7F]+"
    ).unwrap();
}
