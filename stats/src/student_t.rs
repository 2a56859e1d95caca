//! Central Student's t-distribution.

use crate::StatsError;
use crate::special::{beta, regularized_beta};

/// Iteration cap for the quantile search (bracketing plus bisection).
const QUANTILE_MAX_ITER: usize = 1000;
/// Relative bracket width at which the quantile search stops.
const QUANTILE_EPS: f64 = 1e-12;

/// Probability density of the t-distribution with `df` degrees of freedom.
pub fn t_pdf(x: f64, df: f64) -> f64 {
    let numerator = (1.0 + x * x / df).powf(-(df + 1.0) / 2.0);
    let denominator = df.sqrt() * beta(df / 2.0, 0.5);
    numerator / denominator
}

/// CDF of Student's t-distribution: P(T <= t).
///
/// Uses `I_x(df/2, 1/2)` with `x = df / (df + t^2)`, which is twice the
/// tail mass beyond `|t|`.
pub fn t_cdf(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    let tail = regularized_beta(x, df / 2.0, 0.5) / 2.0;
    if t > 0.0 { 1.0 - tail } else { tail }
}

/// Inverse CDF: the `t` with `t_cdf(t, df) == p`.
///
/// Brackets the root by doubling outward from `[-1, 1]`, then bisects. The
/// CDF is monotone, so the bracket always holds a sign change. If the
/// iteration cap is reached the midpoint of the current bracket is returned.
pub fn t_quantile(p: f64, df: f64) -> Result<f64, StatsError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(StatsError::ProbabilityOutOfRange(p));
    }
    if !(df > 0.0) {
        return Err(StatsError::InvalidDegreesOfFreedom(df));
    }

    let mut lo = -1.0_f64;
    let mut hi = 1.0_f64;
    let mut iter = 0;

    while t_cdf(lo, df) > p && iter < QUANTILE_MAX_ITER {
        lo *= 2.0;
        iter += 1;
    }
    while t_cdf(hi, df) < p && iter < QUANTILE_MAX_ITER {
        hi *= 2.0;
        iter += 1;
    }

    while iter < QUANTILE_MAX_ITER {
        let mid = 0.5 * (lo + hi);
        let diff = t_cdf(mid, df) - p;
        if diff == 0.0 || hi - lo <= QUANTILE_EPS * mid.abs().max(1.0) {
            return Ok(mid);
        }
        if diff < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        iter += 1;
    }

    Ok(0.5 * (lo + hi))
}
