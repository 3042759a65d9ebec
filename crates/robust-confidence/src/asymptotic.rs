//! Mean-based aggregators with asymptotic error bars

use crate::{Aggregate, Aggregator};
use robust_core::{utils, Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Normal critical value for a two-sided 95% interval
const Z_95: f64 = 1.96;

/// Mean with a 95% normal-approximation confidence interval
///
/// The deviation on both sides is `1.96 * sigma / sqrt(n)` where `sigma` is
/// the population standard deviation (divides by `n`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAndConf95;

impl Aggregator for MeanAndConf95 {
    fn aggregate(&self, values: &[f64]) -> Aggregate {
        if values.is_empty() {
            return Aggregate::undefined();
        }
        let n = values.len() as f64;
        let conf = Z_95 * utils::population_std_dev(values) / n.sqrt();
        Aggregate::symmetric(utils::mean(values), conf)
    }

    fn name(&self) -> &'static str {
        "mean-conf95"
    }
}

/// Mean with one standard error on each side
///
/// Uses the sample standard deviation, so a single observation has a zero
/// standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAndStdErr;

impl Aggregator for MeanAndStdErr {
    fn aggregate(&self, values: &[f64]) -> Aggregate {
        if values.is_empty() {
            return Aggregate::undefined();
        }
        let se = utils::std_dev(values) / (values.len() as f64).sqrt();
        Aggregate::symmetric(utils::mean(values), se)
    }

    fn name(&self) -> &'static str {
        "mean-stderr"
    }
}

/// Mean with a Student's t confidence interval
///
/// The deviation is `t(1 - alpha/2, n - 1) * s / sqrt(n)`. Fewer than two
/// observations leave the interval undefined, which shows up as NaN
/// deviations.
#[derive(Debug, Clone, Copy)]
pub struct StudentTInterval {
    confidence_level: f64,
}

impl StudentTInterval {
    /// Create an interval aggregator for the given confidence level in (0, 1)
    pub fn new(confidence_level: f64) -> Result<Self> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {confidence_level} must be in (0, 1)"
            )));
        }
        Ok(Self { confidence_level })
    }

    /// Get the confidence level
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    fn critical_value(&self, n: usize) -> Option<f64> {
        if n < 2 {
            return None;
        }
        let alpha = 1.0 - self.confidence_level;
        let t_dist = StudentsT::new(0.0, 1.0, (n - 1) as f64).ok()?;
        Some(t_dist.inverse_cdf(1.0 - alpha / 2.0))
    }
}

impl Aggregator for StudentTInterval {
    fn aggregate(&self, values: &[f64]) -> Aggregate {
        let mean = if values.is_empty() {
            f64::NAN
        } else {
            utils::mean(values)
        };
        match self.critical_value(values.len()) {
            Some(t) => {
                let se = utils::std_dev(values) / (values.len() as f64).sqrt();
                Aggregate::symmetric(mean, t * se)
            }
            None => Aggregate::new(mean, f64::NAN, f64::NAN),
        }
    }

    fn name(&self) -> &'static str {
        "mean-student-t"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_conf95() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let agg = MeanAndConf95.aggregate(&values);

        // population sigma is exactly 2
        assert_relative_eq!(agg.center, 5.0);
        assert_relative_eq!(agg.low, 1.96 * 2.0 / 8f64.sqrt(), epsilon = 1e-12);
        assert_eq!(agg.low, agg.high);
    }

    #[test]
    fn test_mean_and_conf95_single_value() {
        let agg = MeanAndConf95.aggregate(&[3.0]);
        assert_eq!(agg, Aggregate::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_input_is_undefined() {
        assert!(!MeanAndConf95.aggregate(&[]).is_finite());
        assert!(!MeanAndStdErr.aggregate(&[]).is_finite());
        let t = StudentTInterval::new(0.95).unwrap();
        assert!(!t.aggregate(&[]).is_finite());
    }

    #[test]
    fn test_mean_and_std_err() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let agg = MeanAndStdErr.aggregate(&values);

        assert_relative_eq!(agg.center, 3.0);
        assert_relative_eq!(agg.high, (2.5f64 / 5.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_student_t_wider_than_normal_for_small_samples() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let t = StudentTInterval::new(0.95).unwrap().aggregate(&values);
        let se = MeanAndStdErr.aggregate(&values);

        assert_relative_eq!(t.center, 3.0);
        // t(0.975, 4) ~= 2.776
        assert_relative_eq!(t.low / se.low, 2.776445, epsilon = 1e-4);
        assert!(t.width() > 2.0 * 1.96 * se.low);
    }

    #[test]
    fn test_student_t_needs_two_values() {
        let agg = StudentTInterval::new(0.9).unwrap().aggregate(&[4.0]);
        assert_eq!(agg.center, 4.0);
        assert!(agg.low.is_nan());
        assert!(agg.high.is_nan());
    }

    #[test]
    fn test_student_t_confidence_levels() {
        let values: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let ci_90 = StudentTInterval::new(0.90).unwrap().aggregate(&values);
        let ci_99 = StudentTInterval::new(0.99).unwrap().aggregate(&values);

        assert!(ci_90.width() < ci_99.width());
    }

    #[test]
    fn test_invalid_confidence_level() {
        assert!(StudentTInterval::new(1.5).unwrap_err().is_configuration());
        assert!(StudentTInterval::new(0.0).is_err());
        assert!(StudentTInterval::new(f64::NAN).is_err());
    }
}
