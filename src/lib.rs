//! Sample points and error bars for plotting aggregate statistics
//!
//! Facade over the workspace crates:
//!
//! - [`robust_core`]: error types and float validation
//! - [`robust_confidence`]: aggregation functions (mean/median with error
//!   envelopes)
//! - [`robust_plotpoints`]: spaced lines, staggered error bars and
//!   interpolated generators
//!
//! # Example
//!
//! ```rust
//! use robust_plot::prelude::*;
//!
//! let range = FloatRange::new(0.0, 1.0).unwrap();
//! let series = SpacedErrorPoints::new(MeanAndConf95)
//!     .with_points(20)
//!     .with_error_bars(4)
//!     .generate(range, &[PointGenerator::unbounded(|x: f64| vec![x, 1.0 - x])])
//!     .unwrap();
//!
//! assert_eq!(series[0].line.len(), 20);
//! assert_eq!(series[0].error_points.len(), 4);
//! ```

pub use robust_confidence;
pub use robust_core;
pub use robust_plotpoints;

pub use robust_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use robust_confidence::{
        Aggregate, Aggregator, MeanAndConf95, MeanAndStdErr, MedianAndMinMax, StudentTInterval,
    };
    pub use robust_core::{Error, Result};
    pub use robust_plotpoints::{
        error_points_from_series, error_points_spaced, error_points_x_spaced,
        padded_error_points, ErrorBound, ErrorPoints, FloatRange, Generator,
        LinearInterpolation, Point, PointGenerator, SeriesPoints, SpacedErrorPoints,
        StepFunction,
    };
}
