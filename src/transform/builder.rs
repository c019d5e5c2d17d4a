//! One-pass catalog construction from source rows.
//!
//! Each row is classified by `product_type` and shaped into a pipe or
//! fitting record; unrecognized types are skipped without error. Duplicate
//! keys are resolved deterministically and counted in the [`BuildReport`]:
//!
//! - pipes: last write wins (a later row with the same diameter replaces
//!   the earlier one),
//! - fittings: first write wins for name/description/drawing, while size
//!   variants accumulate and a repeated size code replaces its entry.

use crate::error::{TransformError, TransformResult};
use crate::models::{
    Catalog, FittingRecord, FittingSize, PipeRecord, ProductType, SourceRow,
    DEFAULT_WALL_THICKNESS_MM,
};
use crate::transform::measure::extract_nominal_mm;
use crate::transform::sku::{FittingSku, PipeSku};

/// Source prices for pipes are per millimetre; the output is per metre.
const MM_PER_METER: f64 = 1000.0;

/// Knobs for catalog construction.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Wall thickness applied to every pipe record. The source data has
    /// no wall-thickness column, so `None` means
    /// [`DEFAULT_WALL_THICKNESS_MM`].
    pub wall_thickness_mm: Option<f64>,
}

/// Diagnostics from one catalog build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Distinct pipe diameters in the output.
    pub pipe_count: usize,
    /// Distinct fitting families in the output.
    pub fitting_count: usize,
    /// Rows with an unrecognized product type.
    pub skipped_rows: usize,
    /// Pipe rows that replaced an earlier row with the same diameter.
    pub pipe_overwrites: usize,
    /// Fitting rows that replaced an earlier size entry of the same family.
    pub fitting_size_overwrites: usize,
}

impl BuildReport {
    /// True when any duplicate key was resolved by overwriting.
    pub fn has_overwrites(&self) -> bool {
        self.pipe_overwrites > 0 || self.fitting_size_overwrites > 0
    }
}

/// Build the catalog document from source rows.
///
/// Processing stops at the first malformed row; there is no per-row
/// isolation, so a partial catalog never escapes this function.
pub fn build_catalog(
    rows: &[SourceRow],
    options: &BuildOptions,
) -> TransformResult<(Catalog, BuildReport)> {
    let wall_thickness_mm = options
        .wall_thickness_mm
        .unwrap_or(DEFAULT_WALL_THICKNESS_MM);

    let mut catalog = Catalog::new();
    let mut report = BuildReport::default();

    for row in rows {
        match ProductType::from_field(&row.product_type) {
            Some(ProductType::Pipe) => {
                let sku = PipeSku::parse(&row.sku)?;
                let size = extract_nominal_mm(&row.description)?;
                let price = parse_price(row)?;

                let record = PipeRecord {
                    sku: row.sku.clone(),
                    name: row.product_name.clone(),
                    description: row.description.clone(),
                    size_code: sku.size_code,
                    nominal_size_mm: size.value_mm,
                    wall_thickness_mm,
                    price_per_meter: price * MM_PER_METER,
                };
                if catalog.pipes.insert(size.text, record).is_some() {
                    report.pipe_overwrites += 1;
                }
            }
            Some(ProductType::Fitting) => {
                let sku = FittingSku::parse(&row.sku)?;
                let price = parse_price(row)?;

                let family = catalog
                    .fittings
                    .entry(sku.fitting_id.clone())
                    .or_insert_with(|| FittingRecord {
                        name: row.product_name.clone(),
                        description: row.description.clone(),
                        pdf_drawing: FittingRecord::drawing_path(&sku.fitting_id),
                        sizes: Default::default(),
                    });
                let entry = FittingSize {
                    sku: row.sku.clone(),
                    price,
                };
                if family.sizes.insert(sku.size_code, entry).is_some() {
                    report.fitting_size_overwrites += 1;
                }
            }
            None => report.skipped_rows += 1,
        }
    }

    report.pipe_count = catalog.pipes.len();
    report.fitting_count = catalog.fittings.len();
    Ok((catalog, report))
}

fn parse_price(row: &SourceRow) -> TransformResult<f64> {
    row.price.trim().parse().map_err(|_| TransformError::Price {
        sku: row.sku.clone(),
        value: row.price.clone(),
    })
}
