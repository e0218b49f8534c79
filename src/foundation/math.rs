use crate::foundation::error::{SlideFitError, SlideFitResult};

/// Tolerance used when comparing lengths in inches.
pub const LENGTH_EPSILON: f64 = 1e-9;

pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub(crate) fn ensure_positive_finite(value: f64, what: &str) -> SlideFitResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SlideFitError::invalid_geometry(format!(
            "{what} must be finite and > 0 (got {value})"
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_finite(value: f64, what: &str) -> SlideFitResult<f64> {
    if !value.is_finite() {
        return Err(SlideFitError::invalid_geometry(format!(
            "{what} must be finite (got {value})"
        )));
    }
    Ok(value)
}
