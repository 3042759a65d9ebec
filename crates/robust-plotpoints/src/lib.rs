//! Sample points and error bars for plotting aggregate statistics
//!
//! This crate turns a generator (observations as a function of x) and an
//! aggregator (observations to estimate plus error envelope) into plain
//! coordinate data a renderer can draw:
//!
//! - **Spaced lines**: evenly spaced central estimates over a shared x range
//! - **Staggered error bars**: a sparser set of markers, offset per series
//!   so overlaid series do not collide
//! - **Interpolated generators**: [`StepFunction`] and
//!   [`LinearInterpolation`] synthesize observations between known samples
//! - **Cross-series error points**: aggregate several aligned runs into one
//!   set of markers
//!
//! Nothing here draws; outputs are [`Point`]s and [`ErrorPoints`].
//!
//! # Examples
//!
//! ## Several series over one range
//!
//! ```rust
//! use robust_confidence::MeanAndConf95;
//! use robust_plotpoints::{BoxedGenerator, FloatRange, PointGenerator, SpacedErrorPoints};
//!
//! let data_range = FloatRange::new(0.0, 10.0).unwrap();
//! let generators: Vec<PointGenerator<BoxedGenerator>> = vec![
//!     PointGenerator::unbounded(Box::new(|x: f64| vec![x, x + 0.5, x - 0.5])),
//!     PointGenerator::new(
//!         Box::new(|x: f64| vec![2.0 * x, 2.0 * x + 1.0]),
//!         FloatRange::new(0.0, 5.0).unwrap(),
//!     ),
//! ];
//!
//! let series = SpacedErrorPoints::new(MeanAndConf95)
//!     .with_points(50)
//!     .with_error_bars(5)
//!     .generate(data_range, &generators)
//!     .unwrap();
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].line.len(), 50);
//! // the second generator stops at x = 5
//! assert!(series[1].line.iter().all(|p| p.x <= 5.0));
//! ```
//!
//! ## Generating from sparse samples
//!
//! ```rust
//! use robust_confidence::MedianAndMinMax;
//! use robust_plotpoints::{error_points_spaced, FloatRange, StepFunction};
//!
//! let step = StepFunction::new([
//!     (0.0, vec![1.0, 2.0, 3.0]),
//!     (5.0, vec![2.0, 4.0, 6.0]),
//!     (10.0, vec![3.0, 6.0, 9.0]),
//! ])
//! .unwrap();
//!
//! let range = FloatRange::new(0.0, 10.0).unwrap();
//! let (line, errs) = error_points_spaced(MedianAndMinMax, 0, 1, 11, 3, range, &step, range).unwrap();
//! assert_eq!(line[1].y, 4.0);
//! assert_eq!(errs.len(), 3);
//! ```

pub mod aggregate;
pub mod api;
pub mod generator;
pub mod interpolation;
pub mod padded;
pub mod spaced;
pub mod types;

// Re-export main types and functions
pub use aggregate::error_points_from_series;
pub use api::{error_points_spaced, error_points_x_spaced};
pub use generator::{BoxedGenerator, Generator, PointGenerator};
pub use interpolation::{LinearInterpolation, StepFunction};
pub use padded::{padded_error_points, DEFAULT_PADDED_ERROR_BARS};
pub use spaced::{
    SeriesSlot, SpacedErrorPoints, DEFAULT_ERROR_BARS, DEFAULT_POINTS, MAX_POINTS,
};
pub use types::{ErrorBound, ErrorPoints, FloatRange, Point, SeriesPoints};

pub use robust_core::{Error, Result};
