//! Measurement extraction from free-text descriptions.
//!
//! Pipe descriptions carry the nominal diameter inline, following the
//! fixed pattern `... (<number>mm ...`, e.g. `Rigid pipe (20mm OD)`.
//! Extraction takes the text before the first `mm` token, then the part
//! after the last `(` in that prefix, trims it, and requires it to be a
//! plain decimal number (`^[0-9]+(\.[0-9]+)?$`). Anything else is a
//! [`TransformError::Measurement`] with a reason naming the missing piece.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TransformError, TransformResult};

/// Accepted form of the extracted diameter text.
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("invalid number pattern"));

/// A nominal size extracted from a description.
///
/// `text` is the diameter exactly as written in the source (used as the
/// mapping key in the output document), `value_mm` its numeric form.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalSize {
    pub text: String,
    pub value_mm: f64,
}

/// Extract the nominal diameter in millimetres from a description.
pub fn extract_nominal_mm(description: &str) -> TransformResult<NominalSize> {
    let fail = |reason: &str| TransformError::Measurement {
        description: description.to_string(),
        reason: reason.to_string(),
    };

    let mm_at = description.find("mm").ok_or_else(|| fail("no 'mm' token"))?;
    let prefix = &description[..mm_at];

    let paren_at = prefix
        .rfind('(')
        .ok_or_else(|| fail("no '(' before the 'mm' token"))?;
    let text = prefix[paren_at + 1..].trim();

    if !NUMBER_RE.is_match(text) {
        return Err(fail(&format!("'{text}' is not a plain decimal number")));
    }

    let value_mm: f64 = text
        .parse()
        .map_err(|_| fail(&format!("cannot parse '{text}' as a number")))?;
    if value_mm <= 0.0 {
        return Err(fail("nominal size must be positive"));
    }

    Ok(NominalSize {
        text: text.to_string(),
        value_mm,
    })
}
