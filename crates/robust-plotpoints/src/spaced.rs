//! Evenly spaced lines and staggered error bars
//!
//! For one generator over a shared x range this produces:
//!
//! 1. a line of `points` evenly spaced central estimates, and
//! 2. up to `error_bars` error-bar markers, one per spacing interval, shifted
//!    right by a per-series offset so markers of overlaid series do not sit
//!    on top of each other.
//!
//! Both are clipped to the generator's validity range. Candidate positions
//! are computed as `min + i * spacing` over a fixed number of slots (one
//! slot of slack past the end of the range), with the slot that lands on
//! the end of the range snapped to it exactly so accumulated rounding never
//! drops the last point.
//!
//! Every position, observation and aggregate is validated; the first
//! non-finite value aborts generation and no partial series is returned.

use crate::generator::{Generator, PointGenerator};
use crate::types::{ErrorBound, ErrorPoints, FloatRange, Point, SeriesPoints};
use robust_confidence::Aggregator;
use robust_core::utils::{check_finite, check_float};
use robust_core::{Error, Result};
use tracing::{debug, instrument, trace};

/// Default number of evenly spaced line points
pub const DEFAULT_POINTS: usize = 100;

/// Default number of error bars per series
pub const DEFAULT_ERROR_BARS: usize = 10;

/// Upper bound on both the point count and the error-bar count
pub const MAX_POINTS: usize = 1 << 24;

/// Position of a series among the series drawn together
///
/// Only obtainable through [`SeriesSlot::new`], so `index < total` always holds:
///
/// ```compile_fail
/// use robust_plotpoints::SeriesSlot;
///
/// let slot = SeriesSlot { index: 3, total: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSlot {
    index: usize,
    total: usize,
}

impl SeriesSlot {
    pub fn new(index: usize, total: usize) -> Result<Self> {
        if index >= total {
            return Err(Error::InvalidParameter(format!(
                "Series index {index} out of range for {total} series"
            )));
        }
        Ok(Self { index, total })
    }

    /// Zero-based series index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of series sharing the plot
    pub fn total(&self) -> usize {
        self.total
    }

    /// Horizontal shift of this series' error bars for a given spacing
    ///
    /// Series 0 sits a quarter spacing in; each later series moves right by
    /// `spacing / 2 / total`.
    pub fn offset(&self, spacing: f64) -> f64 {
        spacing / 4.0 + self.index as f64 * (spacing / 2.0) / self.total as f64
    }
}

/// Candidate x positions: `intervals + 2` slots starting at `range.min()`
fn candidates(range: FloatRange, spacing: f64, intervals: usize) -> impl Iterator<Item = f64> {
    let (min, max) = (range.min(), range.max());
    (0..=intervals + 1).map(move |i| {
        if i == intervals {
            max
        } else {
            min + i as f64 * spacing
        }
    })
}

/// Spaced line and error-bar generator
///
/// Configured builder-style; the aggregator is owned and reused for every
/// series generated.
///
/// ```rust
/// use robust_confidence::MeanAndStdErr;
/// use robust_plotpoints::{FloatRange, SpacedErrorPoints};
///
/// let range = FloatRange::new(0.0, 10.0).unwrap();
/// let series = SpacedErrorPoints::new(MeanAndStdErr)
///     .with_points(11)
///     .with_error_bars(5)
///     .generate_series(0, 1, range, &|x: f64| vec![x, x + 1.0], range)
///     .unwrap();
///
/// assert_eq!(series.line.len(), 11);
/// assert_eq!(series.error_points.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SpacedErrorPoints<A> {
    aggregator: A,
    points: usize,
    error_bars: usize,
}

impl<A: Aggregator> SpacedErrorPoints<A> {
    /// Create a generator with the default point and error-bar counts
    pub fn new(aggregator: A) -> Self {
        Self {
            aggregator,
            points: DEFAULT_POINTS,
            error_bars: DEFAULT_ERROR_BARS,
        }
    }

    /// Set the number of line points (must be at least 2 when generating)
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Set the maximum number of error bars per series
    pub fn with_error_bars(mut self, error_bars: usize) -> Self {
        self.error_bars = error_bars;
        self
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn error_bars(&self) -> usize {
        self.error_bars
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    fn validate(&self, data_range: FloatRange) -> Result<()> {
        if self.points < 2 {
            return Err(Error::InvalidParameter(format!(
                "Only 2 or more points can be used, got {}",
                self.points
            )));
        }
        if self.points > MAX_POINTS || self.error_bars > MAX_POINTS {
            return Err(Error::InvalidParameter(format!(
                "At most {MAX_POINTS} points and error bars per series, got {} and {}",
                self.points, self.error_bars
            )));
        }
        if !data_range.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Data range {data_range} must be finite"
            )));
        }
        // finite ends can still be further apart than f64::MAX
        check_float(data_range.width(), "data range width")?;
        Ok(())
    }

    /// Generate the line and error bars for one series
    ///
    /// `series_index` out of `total_series` selects the error-bar offset.
    /// Positions outside `valid_range` are skipped, so the line may hold
    /// fewer than `points` entries.
    #[instrument(level = "debug", skip_all, fields(series = series_index, total = total_series))]
    pub fn generate_series<G: Generator + ?Sized>(
        &self,
        series_index: usize,
        total_series: usize,
        data_range: FloatRange,
        generator: &G,
        valid_range: FloatRange,
    ) -> Result<SeriesPoints> {
        self.validate(data_range)?;
        let slot = SeriesSlot::new(series_index, total_series)?;
        self.series(slot, data_range, generator, valid_range)
    }

    /// Generate one series per descriptor over a shared range
    ///
    /// Each descriptor's own range clips its series; its position in
    /// `generators` sets its error-bar offset. Results are in input order and
    /// the first failing series aborts the batch.
    #[instrument(level = "debug", skip_all, fields(series = generators.len()))]
    pub fn generate<G: Generator>(
        &self,
        data_range: FloatRange,
        generators: &[PointGenerator<G>],
    ) -> Result<Vec<SeriesPoints>> {
        self.validate(data_range)?;
        let total = generators.len();
        generators
            .iter()
            .enumerate()
            .map(|(index, pg)| {
                self.series(
                    SeriesSlot { index, total },
                    data_range,
                    pg.generator(),
                    pg.range(),
                )
            })
            .collect()
    }

    /// Parallel version of [`generate`](Self::generate)
    ///
    /// Series are independent, so the output is identical to the sequential
    /// version.
    #[cfg(feature = "parallel")]
    #[instrument(level = "debug", skip_all, fields(series = generators.len()))]
    pub fn generate_par<G>(
        &self,
        data_range: FloatRange,
        generators: &[PointGenerator<G>],
    ) -> Result<Vec<SeriesPoints>>
    where
        A: Sync,
        G: Generator + Sync,
    {
        use rayon::prelude::*;

        self.validate(data_range)?;
        let total = generators.len();
        generators
            .par_iter()
            .enumerate()
            .map(|(index, pg)| {
                self.series(
                    SeriesSlot { index, total },
                    data_range,
                    pg.generator(),
                    pg.range(),
                )
            })
            .collect()
    }

    fn series<G: Generator + ?Sized>(
        &self,
        slot: SeriesSlot,
        data_range: FloatRange,
        generator: &G,
        valid_range: FloatRange,
    ) -> Result<SeriesPoints> {
        let line = self.line(data_range, generator, valid_range)?;
        let error_points = self.error_points(slot, data_range, generator, valid_range)?;

        debug!(
            series = slot.index,
            aggregator = self.aggregator.name(),
            line = line.len(),
            error_bars = error_points.len(),
            "Generated spaced series"
        );
        Ok(SeriesPoints { line, error_points })
    }

    fn line<G: Generator + ?Sized>(
        &self,
        data_range: FloatRange,
        generator: &G,
        valid_range: FloatRange,
    ) -> Result<Vec<Point>> {
        let intervals = self.points - 1;
        let spacing = data_range.width() / intervals as f64;
        let mut line = Vec::with_capacity(self.points);

        for x in candidates(data_range, spacing, intervals) {
            if line.len() == self.points {
                break;
            }
            if !valid_range.contains(x) {
                trace!(x, "point outside generator range");
                continue;
            }
            check_float(x, "point position")?;

            let ys = generator.generate(x)?;
            check_finite(&ys, "generator output")?;

            let y = self.aggregator.aggregate(&ys).center;
            check_float(y, "aggregated estimate")?;

            line.push(Point::new(x, y));
        }
        Ok(line)
    }

    fn error_points<G: Generator + ?Sized>(
        &self,
        slot: SeriesSlot,
        data_range: FloatRange,
        generator: &G,
        valid_range: FloatRange,
    ) -> Result<ErrorPoints> {
        let mut errs = ErrorPoints::with_capacity(self.error_bars);
        if self.error_bars == 0 {
            return Ok(errs);
        }

        let spacing = data_range.width() / self.error_bars as f64;
        let offset = slot.offset(spacing);

        for base in candidates(data_range, spacing, self.error_bars) {
            if errs.len() == self.error_bars {
                break;
            }
            let x = base + offset;
            if !valid_range.contains(base) || !valid_range.contains(x) {
                trace!(base, x, "error bar outside generator range");
                continue;
            }
            check_float(x, "error bar position")?;

            let ys = generator.generate(x)?;
            check_finite(&ys, "generator output")?;

            let agg = self.aggregator.aggregate(&ys);
            check_float(agg.center, "aggregated estimate")?;
            check_float(agg.low, "low error")?;
            check_float(agg.high, "high error")?;

            errs.push(
                Point::new(x, agg.center),
                ErrorBound::default(),
                ErrorBound::new(agg.low, agg.high),
            );
        }
        Ok(errs)
    }
}
