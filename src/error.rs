//! Error types for the catalog conversion pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV ingestion errors
//! - [`TransformError`] - Row transformation errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Ingestion Errors
// =============================================================================

/// Errors during CSV ingestion.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Source file does not exist. Reported distinctly so the CLI can
    /// name the missing path instead of a generic io message.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV structure or a row that does not match the expected
    /// columns (sku, product_type, product_name, description, price).
    #[error("Invalid CSV: {0}")]
    Parse(#[from] csv::Error),
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while shaping a source row into a catalog record.
///
/// Every variant carries the offending text so the console message is
/// enough to locate the bad row in the source file.
#[derive(Debug, Error)]
pub enum TransformError {
    /// SKU has fewer `-`-separated segments than its product type needs.
    #[error("SKU '{sku}' has too few segments (expected at least {expected})")]
    SkuShape { sku: String, expected: usize },

    /// Description does not contain a parseable `(<number>mm` measurement.
    #[error("Cannot extract a size in mm from description '{description}': {reason}")]
    Measurement { description: String, reason: String },

    /// Price column is not a valid number.
    #[error("Invalid price '{value}' for SKU '{sku}'")]
    Price { sku: String, value: String },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::convert_file`]. It wraps all lower-level
/// errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV ingestion error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Row transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output document failed schema validation.
    #[error("Output validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the output file.
    #[error("Failed to write output file '{}': {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::SourceNotFound(PathBuf::from("missing.csv"));
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("missing.csv"));

        // TransformError -> PipelineError
        let transform_err = TransformError::SkuShape {
            sku: "PIP".into(),
            expected: 2,
        };
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().contains("PIP"));
    }

    #[test]
    fn test_measurement_error_format() {
        let err = TransformError::Measurement {
            description: "Rigid pipe 20 OD".into(),
            reason: "no 'mm' token".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Rigid pipe 20 OD"));
        assert!(msg.contains("no 'mm' token"));
    }

    #[test]
    fn test_source_not_found_names_path() {
        let err = CsvError::SourceNotFound(PathBuf::from("/data/master_sku_list.csv"));
        assert!(err.to_string().contains("master_sku_list.csv"));
    }
}
