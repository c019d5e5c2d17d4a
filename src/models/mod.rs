//! Domain models for the catalog conversion pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`SourceRow`] - One raw CSV row from the master SKU list
//! - [`ProductType`] - Recognized product categories
//! - [`PipeRecord`] - A pipe entry keyed by nominal diameter
//! - [`FittingRecord`] - A fitting family with its size variants
//! - [`Catalog`] - The complete output document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Wall thickness applied to every pipe record when the source data does
/// not carry one. The master SKU list has no wall-thickness column yet,
/// so this default stands in until real data exists.
pub const DEFAULT_WALL_THICKNESS_MM: f64 = 2.5;

// =============================================================================
// Source Row
// =============================================================================

/// One row of the master SKU list CSV.
///
/// `price` stays textual at ingestion; numeric conversion happens during
/// transformation so a bad value surfaces as a transform error carrying
/// the SKU, not as a generic CSV failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRow {
    pub sku: String,
    pub product_type: String,
    pub product_name: String,
    pub description: String,
    pub price: String,
}

// =============================================================================
// Product Type
// =============================================================================

/// Recognized product categories.
///
/// Matching is exact and case-sensitive; any other value means the row is
/// skipped without error (permissive-ignore policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Pipe,
    Fitting,
}

impl ProductType {
    /// Parse the `product_type` column. Returns `None` for unrecognized
    /// values so the caller can skip the row.
    pub fn from_field(value: &str) -> Option<Self> {
        match value {
            "Pipe" => Some(Self::Pipe),
            "Fitting" => Some(Self::Fitting),
            _ => None,
        }
    }
}

// =============================================================================
// Output Records
// =============================================================================

/// A pipe entry in the output document, keyed by nominal diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeRecord {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub size_code: String,
    pub nominal_size_mm: f64,
    pub wall_thickness_mm: f64,
    pub price_per_meter: f64,
}

/// One size variant of a fitting family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingSize {
    pub sku: String,
    pub price: f64,
}

/// A fitting family in the output document, keyed by fitting id.
///
/// `name`, `description` and `pdf_drawing` come from the first row seen
/// for the fitting id; later rows only add size variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingRecord {
    pub name: String,
    pub description: String,
    pub pdf_drawing: String,
    pub sizes: IndexMap<String, FittingSize>,
}

impl FittingRecord {
    /// Build the drawing-asset path for a fitting id, e.g. id `116`
    /// maps to `/assets/drawings/T116.pdf`.
    pub fn drawing_path(fitting_id: &str) -> String {
        format!("/assets/drawings/T{fitting_id}.pdf")
    }
}

// =============================================================================
// Catalog Document
// =============================================================================

/// The complete output document: two insertion-ordered mappings.
///
/// `IndexMap` keeps first-insertion order so the serialized JSON is
/// byte-identical across runs given the same row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub pipes: IndexMap<String, PipeRecord>,
    pub fittings: IndexMap<String, FittingRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across both mappings.
    pub fn len(&self) -> usize {
        self.pipes.len() + self.fittings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty() && self.fittings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_exact_match() {
        assert_eq!(ProductType::from_field("Pipe"), Some(ProductType::Pipe));
        assert_eq!(
            ProductType::from_field("Fitting"),
            Some(ProductType::Fitting)
        );
    }

    #[test]
    fn test_product_type_case_sensitive() {
        assert_eq!(ProductType::from_field("pipe"), None);
        assert_eq!(ProductType::from_field("FITTING"), None);
        assert_eq!(ProductType::from_field("Accessory"), None);
        assert_eq!(ProductType::from_field(""), None);
    }

    #[test]
    fn test_drawing_path_template() {
        assert_eq!(
            FittingRecord::drawing_path("116"),
            "/assets/drawings/T116.pdf"
        );
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let mut catalog = Catalog::new();
        for key in ["32", "20", "25"] {
            catalog.pipes.insert(
                key.to_string(),
                PipeRecord {
                    sku: format!("PIP-X-{key}"),
                    name: "Pipe".into(),
                    description: String::new(),
                    size_code: "X".into(),
                    nominal_size_mm: key.parse().unwrap(),
                    wall_thickness_mm: DEFAULT_WALL_THICKNESS_MM,
                    price_per_meter: 1.0,
                },
            );
        }
        let keys: Vec<&String> = catalog.pipes.keys().collect();
        assert_eq!(keys, ["32", "20", "25"]);
    }
}
