// crate modules
use crate::error::{Error, Result};

// thornado-tools modules
use thornado_utils::ValueExt;

// external crates
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Floor applied to relative differences so they stay finite on a log scale
pub const RELATIVE_DIFFERENCE_FLOOR: f64 = 1.0e-17;

/// Relative difference between two values
///
/// `|a - b| / (|a + b| / 2)`, floored at [RELATIVE_DIFFERENCE_FLOOR]. The
/// floor only applies to a comparable number, so a NaN from `a + b = 0` is
/// passed through unchanged.
///
/// ```rust
/// # use thornado_average::relative_difference_scalar;
/// assert_eq!(relative_difference_scalar(3.0, 1.0), 1.0);
/// assert_eq!(relative_difference_scalar(2.0, 2.0), 1.0e-17);
/// assert!(relative_difference_scalar(0.0, 0.0).is_nan());
/// ```
pub fn relative_difference_scalar(a: f64, b: f64) -> f64 {
    ((a - b).abs() / (0.5 * (a + b).abs())).at_least(RELATIVE_DIFFERENCE_FLOOR)
}

/// Elementwise relative difference between two arrays of equal shape
///
/// Typically used to compare the cell averages of two runs of the same
/// problem, i.e. native and AMReX output.
pub fn relative_difference<D: Dimension>(
    a: ArrayView<f64, D>,
    b: ArrayView<f64, D>,
) -> Result<Array<f64, D>> {
    if a.shape() != b.shape() {
        return Err(Error::LengthMismatch {
            name: "compared array".to_string(),
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(Zip::from(&a)
        .and(&b)
        .map_collect(|&a, &b| relative_difference_scalar(a, b)))
}
