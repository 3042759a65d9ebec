//! Common types for aggregated estimates

use std::fmt;

/// A central estimate with asymmetric error deviations
///
/// `low` and `high` are distances below and above `center`, not absolute
/// bounds. This matches how error bars are drawn: a bar spans
/// `center - low ..= center + high`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregate {
    /// The point estimate
    pub center: f64,
    /// Deviation below the estimate
    pub low: f64,
    /// Deviation above the estimate
    pub high: f64,
}

impl Aggregate {
    /// Create a new aggregate
    pub fn new(center: f64, low: f64, high: f64) -> Self {
        Self { center, low, high }
    }

    /// Aggregate with the same deviation on both sides
    pub fn symmetric(center: f64, deviation: f64) -> Self {
        Self::new(center, deviation, deviation)
    }

    /// Result for input an aggregator cannot summarise (e.g. no observations)
    ///
    /// All three fields are NaN so the float validator rejects it downstream.
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    /// Absolute lower end of the error bar
    pub fn lower_bound(&self) -> f64 {
        self.center - self.low
    }

    /// Absolute upper end of the error bar
    pub fn upper_bound(&self) -> f64 {
        self.center + self.high
    }

    /// Total length of the error bar
    pub fn width(&self) -> f64 {
        self.low + self.high
    }

    /// Check if a value lies on the error bar
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound() && value <= self.upper_bound()
    }

    /// True when the estimate and both deviations are finite
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.low.is_finite() && self.high.is_finite()
    }
}

impl From<(f64, f64, f64)> for Aggregate {
    fn from((center, low, high): (f64, f64, f64)) -> Self {
        Self::new(center, low, high)
    }
}

impl From<Aggregate> for (f64, f64, f64) {
    fn from(agg: Aggregate) -> Self {
        (agg.center, agg.low, agg.high)
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (-{}, +{})", self.center, self.low, self.high)
    }
}
