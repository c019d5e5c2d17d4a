//! # Pipefit - master SKU catalog conversion
//!
//! Pipefit converts the master SKU list CSV into the nested JSON catalog
//! consumed by the 3D racking configurator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SKU list CSV │────▶│   Parser    │────▶│   Builder   │────▶│  data.json  │
//! │   (UTF-8)    │     │ (csv+serde) │     │ (classify/  │     │ (validated, │
//! │              │     │             │     │   group)    │     │  4-space)   │
//! └──────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pipefit::{convert_file, BuildOptions, ConvertConfig};
//!
//! let config = ConvertConfig::new("master_sku_list.csv", "data.json");
//! let summary = convert_file(&config, &BuildOptions::default())?;
//! println!("{} pipes, {} fittings", summary.report.pipe_count, summary.report.fitting_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain records (SourceRow, PipeRecord, FittingRecord, Catalog)
//! - [`parser`] - CSV ingestion
//! - [`transform`] - SKU/measurement parsing, catalog building, pipeline
//! - [`validation`] - Output schema validation

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError, CsvResult, PipelineError, PipelineResult, TransformError, TransformResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Catalog, FittingRecord, FittingSize, PipeRecord, ProductType, SourceRow,
    DEFAULT_WALL_THICKNESS_MM,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{read_rows, read_rows_from_path};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    build_catalog, convert_file, extract_nominal_mm, render_catalog, BuildOptions, BuildReport,
    ConvertConfig, ConvertSummary, FittingSku, NominalSize, PipeSku,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid_catalog, validate, validate_catalog};
