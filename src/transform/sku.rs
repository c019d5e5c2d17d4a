//! SKU decomposition.
//!
//! SKUs encode category, size and variant as `-`-separated segments:
//!
//! - Pipe: `PIP-A-G` — segment 1 is the size code.
//! - Fitting: `FIT-A-116` — segment 1 is the size code, segment 2 the
//!   fitting id shared by all size variants of one physical design.
//!
//! A SKU with too few segments for its product type aborts the run with
//! a [`TransformError::SkuShape`] naming the offending SKU.

use crate::error::{TransformError, TransformResult};

/// Decomposed pipe SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeSku {
    pub size_code: String,
}

impl PipeSku {
    /// Split a pipe SKU; needs at least 2 segments.
    pub fn parse(sku: &str) -> TransformResult<Self> {
        let segments: Vec<&str> = sku.split('-').collect();
        match segments.get(1) {
            Some(size_code) => Ok(Self {
                size_code: (*size_code).to_string(),
            }),
            None => Err(TransformError::SkuShape {
                sku: sku.to_string(),
                expected: 2,
            }),
        }
    }
}

/// Decomposed fitting SKU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittingSku {
    pub size_code: String,
    pub fitting_id: String,
}

impl FittingSku {
    /// Split a fitting SKU; needs at least 3 segments.
    pub fn parse(sku: &str) -> TransformResult<Self> {
        let segments: Vec<&str> = sku.split('-').collect();
        match (segments.get(1), segments.get(2)) {
            (Some(size_code), Some(fitting_id)) => Ok(Self {
                size_code: (*size_code).to_string(),
                fitting_id: (*fitting_id).to_string(),
            }),
            _ => Err(TransformError::SkuShape {
                sku: sku.to_string(),
                expected: 3,
            }),
        }
    }
}
