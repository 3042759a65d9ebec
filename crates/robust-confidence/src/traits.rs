//! Core trait for aggregation functions
//!
//! An aggregator reduces the observations produced at one x coordinate to a
//! central estimate and a low/high error envelope. Aggregators are passed as
//! parameters to the point generators rather than stored in the data, so one
//! aggregator can be reused across any number of series.

use crate::types::Aggregate;

/// Reduce a set of observations to `(center, low, high)`
///
/// Implementations must be pure: the generators call them repeatedly,
/// possibly many times for the same input, and never cache results.
/// Non-finite output is not an error here; it is rejected by the caller's
/// float validation.
///
/// Any closure `Fn(&[f64]) -> (f64, f64, f64)` is an aggregator:
///
/// ```rust
/// use robust_confidence::Aggregator;
///
/// let min_max = |values: &[f64]| {
///     let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
///     let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
///     ((lo + hi) / 2.0, (hi - lo) / 2.0, (hi - lo) / 2.0)
/// };
/// let agg = min_max.aggregate(&[1.0, 3.0]);
/// assert_eq!(agg.center, 2.0);
/// ```
pub trait Aggregator {
    /// Aggregate the observations at a single x coordinate
    fn aggregate(&self, values: &[f64]) -> Aggregate;

    /// Aggregator name for logging
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Aggregator for F
where
    F: Fn(&[f64]) -> (f64, f64, f64),
{
    fn aggregate(&self, values: &[f64]) -> Aggregate {
        self(values).into()
    }
}
