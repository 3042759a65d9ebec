//! Plain coordinate shapes handed to a renderer

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[min, max]` on the x axis
///
/// Either end may be infinite, which is useful for validity ranges that do
/// not restrict anything. NaN ends and `min > max` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct FloatRange {
    min: f64,
    max: f64,
}

impl FloatRange {
    /// Create a new range, failing if `min > max` or either end is NaN
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidParameter(format!(
                "Invalid range [{min}, {max}]: min must not exceed max"
            )));
        }
        Ok(Self { min, max })
    }

    /// The whole real line
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Distance between the two ends
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies in the range (both ends inclusive)
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// True when both ends are finite
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl TryFrom<(f64, f64)> for FloatRange {
    type Error = Error;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<FloatRange> for (f64, f64) {
    fn from(range: FloatRange) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A single (x, y) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Deviation below and above a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBound {
    pub low: f64,
    pub high: f64,
}

impl ErrorBound {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl From<(f64, f64)> for ErrorBound {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Error-bar markers: positions with x and y deviations
///
/// The three sequences always have the same length; entry `i` of each
/// describes the same marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorPoints {
    points: Vec<Point>,
    x_errors: Vec<ErrorBound>,
    y_errors: Vec<ErrorBound>,
}

impl ErrorPoints {
    /// Create an empty set with room for `capacity` markers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            x_errors: Vec::with_capacity(capacity),
            y_errors: Vec::with_capacity(capacity),
        }
    }

    /// Create `len` markers with every coordinate and deviation at zero
    pub fn zeroed(len: usize) -> Self {
        Self {
            points: vec![Point::default(); len],
            x_errors: vec![ErrorBound::default(); len],
            y_errors: vec![ErrorBound::default(); len],
        }
    }

    pub(crate) fn push(&mut self, point: Point, x_error: ErrorBound, y_error: ErrorBound) {
        self.points.push(point);
        self.x_errors.push(x_error);
        self.y_errors.push(y_error);
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Marker positions
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Horizontal deviations
    pub fn x_errors(&self) -> &[ErrorBound] {
        &self.x_errors
    }

    /// Vertical deviations
    pub fn y_errors(&self) -> &[ErrorBound] {
        &self.y_errors
    }

    /// Iterate markers as `(position, x_error, y_error)`
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &ErrorBound, &ErrorBound)> + '_ {
        self.points
            .iter()
            .zip(&self.x_errors)
            .zip(&self.y_errors)
            .map(|((p, xe), ye)| (p, xe, ye))
    }
}

/// The line and error bars generated for one series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPoints {
    /// Evenly spaced central estimates
    pub line: Vec<Point>,
    /// Staggered error-bar markers
    pub error_points: ErrorPoints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_range() {
        let range = FloatRange::new(1.0, 3.0).unwrap();
        assert_eq!(range.width(), 2.0);
        assert!(range.contains(1.0));
        assert!(range.contains(3.0));
        assert!(!range.contains(3.0001));
        assert!(range.is_finite());

        assert!(FloatRange::new(2.0, 2.0).is_ok());
        assert!(FloatRange::new(3.0, 1.0).unwrap_err().is_configuration());
        assert!(FloatRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_unbounded_range() {
        let range = FloatRange::unbounded();
        assert!(range.contains(-1e300));
        assert!(range.contains(f64::INFINITY));
        assert!(!range.contains(f64::NAN));
        assert!(!range.is_finite());
    }

    #[test]
    fn test_zeroed_error_points() {
        let errs = ErrorPoints::zeroed(4);
        assert_eq!(errs.len(), 4);
        assert_eq!(errs.x_errors().len(), 4);
        assert_eq!(errs.y_errors().len(), 4);
        assert!(errs
            .iter()
            .all(|(p, xe, ye)| *p == Point::default()
                && *xe == ErrorBound::default()
                && *ye == ErrorBound::default()));
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut errs = ErrorPoints::with_capacity(2);
        assert!(errs.is_empty());

        errs.push(Point::new(1.0, 2.0), ErrorBound::default(), (0.5, 0.25).into());
        errs.push(Point::new(2.0, 3.0), ErrorBound::default(), (1.0, 1.0).into());

        let collected: Vec<_> = errs.iter().map(|(p, _, ye)| (p.x, ye.low)).collect();
        assert_eq!(collected, vec![(1.0, 0.5), (2.0, 1.0)]);
    }

    #[test]
    fn test_serialized_shape() {
        let series = SeriesPoints {
            line: vec![Point::new(0.0, 1.0)],
            error_points: ErrorPoints::zeroed(1),
        };
        let json = serde_json::to_value(&series).unwrap();

        assert_eq!(json["line"][0]["x"], 0.0);
        assert_eq!(json["error_points"]["y_errors"][0]["high"], 0.0);

        let range: FloatRange = serde_json::from_str("[0.0, 2.5]").unwrap();
        assert_eq!(range.max(), 2.5);
        assert!(serde_json::from_str::<FloatRange>("[3.0, 1.0]").is_err());
    }
}
