//! JSON Schema validation for the output document.
//!
//! The catalog is checked against an embedded Draft 7 schema right before
//! the output file is written, so a shape regression in the transformer
//! fails the run instead of reaching the configurator.
//!
//! The schema is embedded at compile time from `schemas/catalog.schema.json`.

use serde_json::Value;

/// Validate a JSON object against a JSON schema.
///
/// Returns `Ok(())` when valid, or every violation message when not.
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a catalog document against the embedded schema.
pub fn validate_catalog(data: &Value) -> Result<(), Vec<String>> {
    let schema: Value = serde_json::from_str(include_str!("../../schemas/catalog.schema.json"))
        .expect("Invalid embedded schema");
    validate(&schema, data)
}

/// Quick check against the catalog schema.
pub fn is_valid_catalog(data: &Value) -> bool {
    validate_catalog(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_catalog() {
        let catalog = json!({
            "pipes": {
                "20": {
                    "sku": "PIP-A-G",
                    "name": "Pipe A",
                    "description": "Rigid pipe (20mm OD)",
                    "size_code": "A",
                    "nominal_size_mm": 20.0,
                    "wall_thickness_mm": 2.5,
                    "price_per_meter": 50.0
                }
            },
            "fittings": {
                "116": {
                    "name": "Tee",
                    "description": "3-way tee",
                    "pdf_drawing": "/assets/drawings/T116.pdf",
                    "sizes": {
                        "A": { "sku": "FIT-A-116", "price": 1.20 }
                    }
                }
            }
        });
        assert!(is_valid_catalog(&catalog));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(is_valid_catalog(&json!({ "pipes": {}, "fittings": {} })));
    }

    #[test]
    fn test_missing_top_level_mapping() {
        assert!(!is_valid_catalog(&json!({ "pipes": {} })));
    }

    #[test]
    fn test_non_positive_diameter_rejected() {
        let catalog = json!({
            "pipes": {
                "0": {
                    "sku": "PIP-A-G",
                    "name": "Pipe A",
                    "description": "Rigid pipe (0mm OD)",
                    "size_code": "A",
                    "nominal_size_mm": 0.0,
                    "wall_thickness_mm": 2.5,
                    "price_per_meter": 50.0
                }
            },
            "fittings": {}
        });
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_drawing_path_pattern() {
        let catalog = json!({
            "pipes": {},
            "fittings": {
                "116": {
                    "name": "Tee",
                    "description": "3-way tee",
                    "pdf_drawing": "drawings/116.svg",
                    "sizes": {}
                }
            }
        });
        assert!(!is_valid_catalog(&catalog));
    }
}
