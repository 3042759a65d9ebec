//! Observation generators and their validity ranges

use crate::types::FloatRange;
use robust_core::Result;

/// Produce the observations at an x coordinate
///
/// Plain closures `Fn(f64) -> Vec<f64>` are generators and never fail. The
/// interpolation functions in [`crate::interpolation`] are generators too;
/// they fail with [`Error::OutOfDomain`](robust_core::Error::OutOfDomain)
/// when queried outside their keys.
///
/// Generators are called repeatedly, possibly for the same x, and are
/// expected to be free of side effects.
pub trait Generator {
    fn generate(&self, x: f64) -> Result<Vec<f64>>;
}

impl<F> Generator for F
where
    F: Fn(f64) -> Vec<f64>,
{
    fn generate(&self, x: f64) -> Result<Vec<f64>> {
        Ok(self(x))
    }
}

/// A generator paired with the x range it is defined on
///
/// Series with different domains share one plot by giving each descriptor
/// its own range; points outside it are skipped rather than evaluated.
#[derive(Debug, Clone)]
pub struct PointGenerator<G> {
    generator: G,
    range: FloatRange,
}

impl<G: Generator> PointGenerator<G> {
    pub fn new(generator: G, range: FloatRange) -> Self {
        Self { generator, range }
    }

    /// Generator valid everywhere
    pub fn unbounded(generator: G) -> Self {
        Self::new(generator, FloatRange::unbounded())
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn range(&self) -> FloatRange {
        self.range
    }
}

/// Type-erased generator for series with different generator types
pub type BoxedGenerator = Box<dyn Fn(f64) -> Vec<f64> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_generator() {
        let g = |x: f64| vec![x, 2.0 * x];
        assert_eq!(g.generate(3.0).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_boxed_generators_share_a_type() {
        let generators: Vec<PointGenerator<BoxedGenerator>> = vec![
            PointGenerator::unbounded(Box::new(|x: f64| vec![x])),
            PointGenerator::new(
                Box::new(|x: f64| vec![-x]),
                FloatRange::new(0.0, 1.0).unwrap(),
            ),
        ];

        assert_eq!(generators[0].generator().generate(2.0).unwrap(), vec![2.0]);
        assert_eq!(generators[1].generator().generate(2.0).unwrap(), vec![-2.0]);
        assert_eq!(generators[1].range().max(), 1.0);
    }
}
