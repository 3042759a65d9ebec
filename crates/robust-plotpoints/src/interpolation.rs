//! Generators synthesized from sparse keyed samples
//!
//! Both builders take a mapping from distinct x keys to observation vectors
//! and sort the keys once at construction. Queries only read the sorted
//! index, so a built function can be shared freely.
//!
//! - [`StepFunction`]: returns the vector stored at the first key strictly
//!   greater than x, clamped to the last key.
//! - [`LinearInterpolation`]: returns the element-wise midpoint of the two
//!   keys bracketing x.

use crate::generator::Generator;
use ordered_float::OrderedFloat;
use robust_core::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Keys sorted ascending with their vectors in the same order
#[derive(Debug, Clone)]
struct SortedSamples {
    keys: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl SortedSamples {
    fn build<I>(data: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Vec<f64>)>,
    {
        let mut index = BTreeMap::new();
        for (key, values) in data {
            if !key.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "Interpolation key {key} must be finite"
                )));
            }
            if index.insert(OrderedFloat(key), values).is_some() {
                return Err(Error::InvalidInput(format!(
                    "Duplicate interpolation key {key}"
                )));
            }
        }
        if index.is_empty() {
            return Err(Error::empty_input("interpolation"));
        }

        let (keys, values) = index.into_iter().map(|(k, v)| (k.0, v)).unzip();
        Ok(Self { keys, values })
    }

    fn first(&self) -> f64 {
        self.keys[0]
    }

    fn last(&self) -> f64 {
        self.keys[self.keys.len() - 1]
    }

    /// Index of the first key strictly greater than `x` (may be `len`)
    fn upper_index(&self, x: f64) -> usize {
        self.keys.partition_point(|&k| k <= x)
    }

    fn out_of_domain(&self, x: f64) -> Error {
        debug!(
            x,
            min = self.first(),
            max = self.last(),
            "interpolation queried outside its keys"
        );
        Error::out_of_domain(x, self.first(), self.last())
    }
}

/// Step-hold function over keyed samples
///
/// `evaluate(x)` picks the first key strictly greater than `x`, or the last
/// key when `x` is at or beyond it, and returns that key's vector unchanged.
/// Querying below the first key is an out-of-domain error.
///
/// ```rust
/// use robust_plotpoints::StepFunction;
///
/// let step = StepFunction::new([(1.0, vec![10.0]), (3.0, vec![30.0]), (5.0, vec![50.0])]).unwrap();
/// assert_eq!(step.evaluate(2.0).unwrap(), &[30.0]);
/// assert_eq!(step.evaluate(9.0).unwrap(), &[50.0]);
/// assert!(step.evaluate(0.5).unwrap_err().is_out_of_domain());
/// ```
#[derive(Debug, Clone)]
pub struct StepFunction {
    samples: SortedSamples,
}

impl StepFunction {
    /// Build from `(key, observations)` pairs
    ///
    /// Fails on an empty input, a non-finite key, or a repeated key.
    pub fn new<I>(data: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Vec<f64>)>,
    {
        Ok(Self {
            samples: SortedSamples::build(data)?,
        })
    }

    pub fn evaluate(&self, x: f64) -> Result<&[f64]> {
        let samples = &self.samples;
        if x.is_nan() || x < samples.first() {
            return Err(samples.out_of_domain(x));
        }
        let idx = samples.upper_index(x).min(samples.keys.len() - 1);
        Ok(&samples.values[idx])
    }

    /// Sorted keys
    pub fn keys(&self) -> &[f64] {
        &self.samples.keys
    }
}

impl Generator for StepFunction {
    fn generate(&self, x: f64) -> Result<Vec<f64>> {
        self.evaluate(x).map(<[f64]>::to_vec)
    }
}

/// Pairwise midpoint over keyed samples
///
/// `evaluate(x)` finds the first key strictly greater than `x` and the key
/// just before it, and returns the element-wise average of their vectors.
/// The blend is always 50/50; how close `x` sits to either key does not
/// matter. `x` must satisfy `first <= x < last`.
///
/// ```rust
/// use robust_plotpoints::LinearInterpolation;
///
/// let lerp = LinearInterpolation::new([(1.0, vec![0.0, 0.0]), (3.0, vec![10.0, 20.0])]).unwrap();
/// assert_eq!(lerp.evaluate(2.0).unwrap(), vec![5.0, 10.0]);
/// assert!(lerp.evaluate(3.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    samples: SortedSamples,
}

impl LinearInterpolation {
    /// Build from `(key, observations)` pairs
    ///
    /// Every vector must have the same length. Also fails on an empty input,
    /// a non-finite key, or a repeated key.
    pub fn new<I>(data: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Vec<f64>)>,
    {
        let samples = SortedSamples::build(data)?;
        let expected = samples.values[0].len();
        if let Some(bad) = samples.values.iter().find(|v| v.len() != expected) {
            return Err(Error::size_mismatch(
                expected,
                bad.len(),
                "linear interpolation observation vectors",
            ));
        }
        Ok(Self { samples })
    }

    /// Blend the vectors bracketing `x`
    ///
    /// The domain is half-open: the first key is defined and returns the
    /// average of the first two vectors, while the last key is out of domain.
    /// This is looser than treating the domain as strictly inside the key
    /// range, where the first key would be rejected too. Callers that need
    /// that open interval must keep queries above `keys()[0]`.
    pub fn evaluate(&self, x: f64) -> Result<Vec<f64>> {
        let samples = &self.samples;
        let upper = samples.upper_index(x);
        if x.is_nan() || upper == 0 || upper >= samples.keys.len() {
            return Err(samples.out_of_domain(x));
        }
        let lower = upper - 1;

        Ok(samples.values[lower]
            .iter()
            .zip(&samples.values[upper])
            .map(|(a, b)| (a + b) / 2.0)
            .collect())
    }

    /// Sorted keys
    pub fn keys(&self) -> &[f64] {
        &self.samples.keys
    }
}

impl Generator for LinearInterpolation {
    fn generate(&self, x: f64) -> Result<Vec<f64>> {
        self.evaluate(x)
    }
}
