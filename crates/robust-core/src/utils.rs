//! Utility functions for working with data slices
//!
//! Besides a few small descriptive statistics this module holds the float
//! validator used after every synthesized coordinate: [`check_float`] and
//! [`check_finite`] reject NaN and infinite values with a
//! [`Error::NonFinite`](crate::Error::NonFinite).

use crate::{Error, Result};

/// Reject a single NaN or infinite value
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::check_float;
///
/// assert!(check_float(1.5, "x").is_ok());
/// assert!(check_float(f64::NAN, "x").is_err());
/// ```
pub fn check_float(value: f64, context: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::non_finite(context, value))
    }
}

/// Reject a slice containing any NaN or infinite value
///
/// The error carries the first offending value.
pub fn check_finite(values: &[f64], context: &str) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(&bad) => Err(Error::non_finite(context, bad)),
        None => Ok(()),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => a.total_cmp(b),
        }
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Calculate the population standard deviation (divides by n)
///
/// Returns 0.0 for empty slices.
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 =
        data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Median of already sorted data
///
/// Returns NaN for an empty slice. Even-length input averages the two
/// middle values.
pub fn median_sorted(sorted_data: &[f64]) -> f64 {
    let n = sorted_data.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 1 => sorted_data[n / 2],
        _ => (sorted_data[n / 2 - 1] + sorted_data[n / 2]) / 2.0,
    }
}
