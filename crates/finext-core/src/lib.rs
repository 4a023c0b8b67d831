//! Core library for financial statement OCR extraction.
//!
//! This crate provides:
//! - Reporting-period detection with a canonical fallback sequence
//! - Fuzzy row-label matching against a fixed taxonomy
//! - Positional alignment of numeric values to period columns
//! - Data models for page-level and document-level results
//!
//! The input is already-OCR'd page text; rasterization and OCR engines are
//! external collaborators and out of scope here.

pub mod error;
pub mod models;
pub mod statement;

pub use error::{FinextError, Result};
pub use models::config::{ExtractionConfig, FinextConfig, OutputConfig};
pub use models::statement::{FinancialData, FinancialReport, ReportMetadata, Section, StatementKind};
pub use statement::align::{ColumnAligner, PositionalAligner};
pub use statement::diag::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use statement::{PageExtraction, PageParser, StatementParser};
