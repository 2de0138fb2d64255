//! Fixed-precision rounding shared by every derived quantity that downstream
//! lookup tables are built from.

/// Number of decimal digits kept by [`round6`]
pub const PRECISION: usize = 6;

/// Round `x` to `digits` decimal places.
///
/// The rounding is done on the exact decimal expansion of `x` (ties to even),
/// by formatting and re-parsing, rather than by scaling with `10^digits`:
/// `(x * 1e6).round() / 1e6` picks up the representation error of the product
/// and can land on a different neighbour than a decimal printout of `x` does.
///
/// Every `f64`, including `inf`, `-inf` and `NaN`, formats to text that
/// `f64::from_str` accepts, so the fallback to `x` is never taken.
pub fn round_to(x: f64, digits: usize) -> f64 {
    format!("{x:.digits$}").parse().unwrap_or(x)
}

/// Round to [`PRECISION`] decimal places.
pub fn round6(x: f64) -> f64 { round_to(x, PRECISION) }
