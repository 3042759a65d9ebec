//! Order-statistic aggregators

use crate::{Aggregate, Aggregator};
use robust_core::utils;

/// Median with error bars reaching the sample minimum and maximum
///
/// Deviations are `median - min` and `max - median`. NaN observations sort
/// last and poison the upper deviation, which the float validator rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianAndMinMax;

impl Aggregator for MedianAndMinMax {
    fn aggregate(&self, values: &[f64]) -> Aggregate {
        match values {
            [] => Aggregate::undefined(),
            [only] => Aggregate::new(*only, 0.0, 0.0),
            _ => {
                let sorted = utils::sorted(values);
                let med = utils::median_sorted(&sorted);
                let min = sorted[0];
                let max = sorted[sorted.len() - 1];
                Aggregate::new(med, med - min, max - med)
            }
        }
    }

    fn name(&self) -> &'static str {
        "median-min-max"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length() {
        let agg = MedianAndMinMax.aggregate(&[9.0, 1.0, 4.0]);
        assert_eq!(agg, Aggregate::new(4.0, 3.0, 5.0));
        assert_eq!(agg.lower_bound(), 1.0);
        assert_eq!(agg.upper_bound(), 9.0);
    }

    #[test]
    fn test_even_length() {
        let agg = MedianAndMinMax.aggregate(&[4.0, 1.0, 2.0, 10.0]);
        assert_eq!(agg, Aggregate::new(3.0, 2.0, 7.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(
            MedianAndMinMax.aggregate(&[7.0]),
            Aggregate::new(7.0, 0.0, 0.0)
        );
        assert!(!MedianAndMinMax.aggregate(&[]).is_finite());
        assert!(!MedianAndMinMax.aggregate(&[1.0, f64::NAN]).is_finite());
    }
}
