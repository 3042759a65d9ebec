//! Placeholder error-bar containers

use crate::types::ErrorPoints;

/// Number of markers in each padded container
pub const DEFAULT_PADDED_ERROR_BARS: usize = 4;

/// One zero-filled [`ErrorPoints`] of [`DEFAULT_PADDED_ERROR_BARS`] markers per
/// input series
///
/// Only the number of series matters; their contents are not inspected.
/// Useful when a caller needs correctly shaped containers before real data
/// exists.
pub fn padded_error_points<S>(lines: &[S]) -> Vec<ErrorPoints> {
    lines
        .iter()
        .map(|_| ErrorPoints::zeroed(DEFAULT_PADDED_ERROR_BARS))
        .collect()
}
