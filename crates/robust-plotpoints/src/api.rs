//! One-call wrappers around [`SpacedErrorPoints`]
//!
//! These mirror the builder for callers that only need a single batch and
//! prefer passing the counts directly.

use crate::generator::{Generator, PointGenerator};
use crate::spaced::SpacedErrorPoints;
use crate::types::{ErrorPoints, FloatRange, Point, SeriesPoints};
use robust_confidence::Aggregator;
use robust_core::Result;

/// Spaced line and staggered error bars for a single series
///
/// # Arguments
/// * `aggregator` - Reduces the observations at each x to `(center, low, high)`
/// * `series_index` - This series' position among `total_series`
/// * `points` - Number of evenly spaced line points (at least 2)
/// * `error_bars` - Maximum number of error bars
/// * `data_range` - Shared x range that sets the spacing
/// * `generator` - Observations at a given x
/// * `valid_range` - Where this generator is defined; other x are skipped
///
/// # Example
/// ```rust
/// use robust_confidence::MeanAndConf95;
/// use robust_plotpoints::{error_points_spaced, FloatRange};
///
/// let range = FloatRange::new(0.0, 1.0).unwrap();
/// let (line, errs) = error_points_spaced(
///     MeanAndConf95,
///     0,
///     2,
///     21,
///     4,
///     range,
///     &|x: f64| vec![x * x, x * x + 0.1],
///     range,
/// )
/// .unwrap();
///
/// assert_eq!(line.len(), 21);
/// assert_eq!(errs.points()[0].x, 0.0625);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn error_points_spaced<A, G>(
    aggregator: A,
    series_index: usize,
    total_series: usize,
    points: usize,
    error_bars: usize,
    data_range: FloatRange,
    generator: &G,
    valid_range: FloatRange,
) -> Result<(Vec<Point>, ErrorPoints)>
where
    A: Aggregator,
    G: Generator + ?Sized,
{
    let series = SpacedErrorPoints::new(aggregator)
        .with_points(points)
        .with_error_bars(error_bars)
        .generate_series(series_index, total_series, data_range, generator, valid_range)?;
    Ok((series.line, series.error_points))
}

/// Spaced lines and staggered error bars for several series at once
///
/// Series `i` of `generators.len()` gets the `i`-th error-bar offset and is
/// clipped to its own descriptor's range.
pub fn error_points_x_spaced<A, G>(
    aggregator: A,
    points: usize,
    error_bars: usize,
    data_range: FloatRange,
    generators: &[PointGenerator<G>],
) -> Result<Vec<SeriesPoints>>
where
    A: Aggregator,
    G: Generator,
{
    SpacedErrorPoints::new(aggregator)
        .with_points(points)
        .with_error_bars(error_bars)
        .generate(data_range, generators)
}
