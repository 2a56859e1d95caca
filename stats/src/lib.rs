//! Numerical core for Student's t-tests: special functions, the
//! t-distribution, and descriptive statistics over raw samples.

mod special;
mod student_t;

pub use special::{beta, ln_beta, ln_gamma, regularized_beta};
pub use student_t::{t_cdf, t_pdf, t_quantile};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("probability must be strictly between 0 and 1, got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("degrees of freedom must be positive, got {0}")]
    InvalidDegreesOfFreedom(f64),
}

fn require_len(data: &[f64], required: usize) -> Result<(), StatsError> {
    if data.len() < required {
        return Err(StatsError::InsufficientData {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    require_len(data, 1)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance with Bessel's correction.
pub fn variance(data: &[f64]) -> Result<f64, StatsError> {
    require_len(data, 2)?;
    let m = mean(data)?;
    Ok(data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64)
}

/// Sample standard deviation (divisor `n - 1`).
pub fn std_dev(data: &[f64]) -> Result<f64, StatsError> {
    variance(data).map(f64::sqrt)
}
