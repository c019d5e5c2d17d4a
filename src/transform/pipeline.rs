//! End-to-end file conversion.
//!
//! Combines ingestion, catalog construction, output validation and the
//! final write into one call:
//!
//! ```rust,ignore
//! use pipefit::{convert_file, BuildOptions, ConvertConfig};
//!
//! let config = ConvertConfig::new("master_sku_list.csv", "data.json");
//! let summary = convert_file(&config, &BuildOptions::default())?;
//! println!("{} pipes, {} fittings", summary.report.pipe_count, summary.report.fitting_count);
//! ```
//!
//! The catalog is accumulated fully in memory and written once at the
//! end, so any failure leaves the output path untouched.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::models::Catalog;
use crate::parser::read_rows_from_path;
use crate::transform::builder::{build_catalog, BuildOptions, BuildReport};
use crate::validation::validate_catalog;

/// Explicit input/output locations, injected by the entry point so the
/// pipeline itself is path-agnostic.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Master SKU list CSV.
    pub input: PathBuf,
    /// Catalog JSON consumed by the configurator.
    pub output: PathBuf,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Result of one completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Rows read from the source file.
    pub row_count: usize,
    /// Build diagnostics (record counts, skips, overwrites).
    pub report: BuildReport,
}

/// Convert the master SKU list into the catalog document.
///
/// Steps: read all rows, build the catalog, validate the document
/// against the embedded schema, serialize with 4-space indent, write
/// once. Every failure is terminal; no output file appears unless the
/// whole run succeeded.
pub fn convert_file(
    config: &ConvertConfig,
    options: &BuildOptions,
) -> PipelineResult<ConvertSummary> {
    let rows = read_rows_from_path(&config.input)?;
    let (catalog, report) = build_catalog(&rows, options)?;

    let document = serde_json::to_value(&catalog)?;
    validate_catalog(&document).map_err(|errors| PipelineError::Validation { errors })?;

    let json = render_catalog(&catalog)?;
    write_output(&config.output, &json)?;

    Ok(ConvertSummary {
        row_count: rows.len(),
        report,
    })
}

/// Serialize the catalog with a 4-space indent.
///
/// Key order follows first insertion, so the same input always renders
/// to the same bytes.
pub fn render_catalog(catalog: &Catalog) -> PipelineResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_output(path: &Path, bytes: &[u8]) -> PipelineResult<()> {
    std::fs::write(path, bytes).map_err(|source| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PipeRecord;

    #[test]
    fn test_render_uses_four_space_indent() {
        let mut catalog = Catalog::new();
        catalog.pipes.insert(
            "20".into(),
            PipeRecord {
                sku: "PIP-A-G".into(),
                name: "Pipe A".into(),
                description: "Rigid pipe (20mm OD)".into(),
                size_code: "A".into(),
                nominal_size_mm: 20.0,
                wall_thickness_mm: 2.5,
                price_per_meter: 50.0,
            },
        );

        let json = String::from_utf8(render_catalog(&catalog).unwrap()).unwrap();
        assert!(json.contains("\n    \"pipes\""));
        assert!(json.contains("\n        \"20\""));
        assert!(json.contains("\n            \"sku\": \"PIP-A-G\""));
    }

    #[test]
    fn test_render_empty_catalog() {
        let json = String::from_utf8(render_catalog(&Catalog::new()).unwrap()).unwrap();
        assert!(json.contains("\"pipes\": {}"));
        assert!(json.contains("\"fittings\": {}"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut catalog = Catalog::new();
        for key in ["32", "20"] {
            catalog.pipes.insert(
                key.into(),
                PipeRecord {
                    sku: format!("PIP-{key}"),
                    name: "Pipe".into(),
                    description: format!("Pipe ({key}mm OD)"),
                    size_code: "A".into(),
                    nominal_size_mm: key.parse().unwrap(),
                    wall_thickness_mm: 2.5,
                    price_per_meter: 50.0,
                },
            );
        }
        assert_eq!(
            render_catalog(&catalog).unwrap(),
            render_catalog(&catalog).unwrap()
        );
        // "32" was inserted first and must render first.
        let json = String::from_utf8(render_catalog(&catalog).unwrap()).unwrap();
        assert!(json.find("\"32\"").unwrap() < json.find("\"20\"").unwrap());
    }
}
