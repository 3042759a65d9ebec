//! Aggregation functions for error-bar estimation
//!
//! An aggregation function reduces the observations generated at one x
//! coordinate (bootstrap samples, repeated trials, ...) to a central estimate
//! plus a low/high error envelope. This crate provides the [`Aggregator`]
//! trait and a few stock implementations:
//!
//! - **[`MeanAndConf95`]**: mean with a normal-approximation 95% interval
//! - **[`MeanAndStdErr`]**: mean plus/minus one standard error
//! - **[`StudentTInterval`]**: mean with a Student's t interval at any level
//! - **[`MedianAndMinMax`]**: median with bars spanning the sample range
//!
//! Any closure `Fn(&[f64]) -> (f64, f64, f64)` also works as an aggregator.
//!
//! # Examples
//!
//! ```rust
//! use robust_confidence::{Aggregator, MedianAndMinMax, StudentTInterval};
//!
//! let trials = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let range = MedianAndMinMax.aggregate(&trials);
//! assert_eq!((range.center, range.low, range.high), (3.0, 2.0, 2.0));
//!
//! let ci = StudentTInterval::new(0.95).unwrap().aggregate(&trials);
//! println!("95% CI for mean: [{:.2}, {:.2}]", ci.lower_bound(), ci.upper_bound());
//! ```

mod asymptotic;
mod order;
mod traits;
mod types;

// Re-exports
pub use asymptotic::{MeanAndConf95, MeanAndStdErr, StudentTInterval};
pub use order::MedianAndMinMax;
pub use traits::Aggregator;
pub use types::Aggregate;
