//! Probability distributions used to map test statistics to p-values
//!
//! The chi-square numerics (regularized incomplete gamma) delegate to
//! `statrs`; this module fixes the parameter contract and exposes the
//! survival-function seam the test calculators depend on.

use crate::error::{Error, Result};
use statrs::distribution::ContinuousCDF;

/// Trait for continuous probability distributions
pub trait Distribution {
    /// Cumulative distribution function (CDF)
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x), clamped to [0, 1]
    fn survival(&self, x: f64) -> f64 {
        (1.0 - self.cdf(x)).clamp(0.0, 1.0)
    }
}

/// Chi-squared distribution
#[derive(Debug, Clone)]
pub struct ChiSquared {
    pub degrees_of_freedom: f64,
    inner: statrs::distribution::ChiSquared,
}

impl ChiSquared {
    pub fn new(degrees_of_freedom: f64) -> Result<Self> {
        if degrees_of_freedom <= 0.0 {
            return Err(Error::InvalidValue(
                "Degrees of freedom must be positive".into(),
            ));
        }

        let inner = statrs::distribution::ChiSquared::new(degrees_of_freedom)
            .map_err(|e| Error::InvalidValue(e.to_string()))?;

        Ok(ChiSquared {
            degrees_of_freedom,
            inner,
        })
    }
}

impl Distribution for ChiSquared {
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.inner.cdf(x)
    }

    fn survival(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        self.inner.sf(x).clamp(0.0, 1.0)
    }
}
