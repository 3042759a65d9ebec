//! Error points summarising several aligned series

use crate::types::{ErrorBound, ErrorPoints, Point};
use robust_confidence::Aggregator;
use robust_core::utils::check_float;
use robust_core::{Error, Result};
use tracing::debug;

/// Aggregate K series of equal length L into L error-bar markers
///
/// Marker `i` aggregates the x values and the y values found at index `i`
/// of every series, giving both horizontal and vertical error bars. All
/// series must have the same length; any non-finite aggregate fails the
/// call.
///
/// ```rust
/// use robust_confidence::MedianAndMinMax;
/// use robust_plotpoints::{error_points_from_series, Point};
///
/// let runs = vec![
///     vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)],
///     vec![Point::new(0.0, 3.0), Point::new(1.0, 6.0)],
/// ];
/// let errs = error_points_from_series(&MedianAndMinMax, &runs).unwrap();
/// assert_eq!(errs.points()[1], Point::new(1.0, 4.0));
/// assert_eq!(errs.y_errors()[1].high, 2.0);
/// ```
pub fn error_points_from_series<A, S>(aggregator: &A, series: &[S]) -> Result<ErrorPoints>
where
    A: Aggregator,
    S: AsRef<[Point]>,
{
    let len = match series.first() {
        Some(first) => first.as_ref().len(),
        None => return Ok(ErrorPoints::default()),
    };
    if let Some(bad) = series.iter().find(|s| s.as_ref().len() != len) {
        return Err(Error::size_mismatch(len, bad.as_ref().len(), "aggregated series"));
    }

    let mut errs = ErrorPoints::with_capacity(len);
    let mut xs = Vec::with_capacity(series.len());
    let mut ys = Vec::with_capacity(series.len());
    for i in 0..len {
        xs.clear();
        ys.clear();
        for s in series {
            let p = s.as_ref()[i];
            xs.push(p.x);
            ys.push(p.y);
        }

        let x = aggregator.aggregate(&xs);
        let y = aggregator.aggregate(&ys);
        for value in [x.center, x.low, x.high, y.center, y.low, y.high] {
            check_float(value, "aggregated series")?;
        }

        errs.push(
            Point::new(x.center, y.center),
            ErrorBound::new(x.low, x.high),
            ErrorBound::new(y.low, y.high),
        );
    }

    debug!(
        series = series.len(),
        points = len,
        aggregator = aggregator.name(),
        "Aggregated series into error points"
    );
    Ok(errs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use robust_confidence::{MeanAndConf95, MedianAndMinMax};

    #[test]
    fn test_x_and_y_errors() {
        let runs = vec![
            vec![Point::new(0.0, 0.0), Point::new(2.0, 4.0)],
            vec![Point::new(1.0, 2.0), Point::new(2.0, 8.0)],
            vec![Point::new(2.0, 4.0), Point::new(2.0, 6.0)],
        ];
        let errs = error_points_from_series(&MedianAndMinMax, &runs).unwrap();

        assert_eq!(errs.len(), 2);
        assert_eq!(errs.points()[0], Point::new(1.0, 2.0));
        assert_eq!(errs.x_errors()[0], ErrorBound::new(1.0, 1.0));
        assert_eq!(errs.y_errors()[0], ErrorBound::new(2.0, 2.0));
        assert_eq!(errs.points()[1], Point::new(2.0, 6.0));
        assert_eq!(errs.x_errors()[1], ErrorBound::new(0.0, 0.0));
        assert_eq!(errs.y_errors()[1], ErrorBound::new(2.0, 2.0));
    }

    #[test]
    fn test_mismatched_lengths() {
        let runs = vec![vec![Point::default(); 3], vec![Point::default(); 2]];
        let err = error_points_from_series(&MeanAndConf95, &runs).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_no_series() {
        let runs: Vec<Vec<Point>> = Vec::new();
        assert!(error_points_from_series(&MeanAndConf95, &runs)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_non_finite_input() {
        let runs = vec![vec![Point::new(0.0, f64::INFINITY)], vec![Point::new(0.0, 1.0)]];
        let err = error_points_from_series(&MeanAndConf95, &runs).unwrap_err();
        assert!(err.is_validation());
    }
}
