//! Transformation module.
//!
//! This module turns source rows into the catalog document:
//! - Sku: SKU segment decomposition
//! - Measure: diameter extraction from free text
//! - Builder: row classification and record shaping
//! - Pipeline: the full file-to-file conversion

pub mod builder;
pub mod measure;
pub mod pipeline;
pub mod sku;

pub use builder::{build_catalog, BuildOptions, BuildReport};
pub use measure::{extract_nominal_mm, NominalSize};
pub use pipeline::{convert_file, render_catalog, ConvertConfig, ConvertSummary};
pub use sku::{FittingSku, PipeSku};
