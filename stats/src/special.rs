//! Gamma and beta functions backing the t-distribution.

/// Lanczos approximation for ln(Gamma(x)), six-term series with g = 5.
///
/// Accurate to roughly 1e-10 relative error for x > 0. Callers in this crate
/// only evaluate it at half-integer and larger shape parameters, never near
/// the pole at zero.
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        76.18009172947146,
        -86.50532032941677,
        24.01409824083091,
        -1.231739572450155,
        0.1208650973866179e-2,
        -0.5395239384953e-5,
    ];
    const SQRT_2PI: f64 = 2.5066282746310005;

    let mut tmp = x + 5.5;
    tmp -= (x + 0.5) * tmp.ln();

    let mut ser = 1.000000000190015;
    let mut y = x;
    for &c in &COEFFS {
        y += 1.0;
        ser += c / y;
    }

    -tmp + (SQRT_2PI * ser / x).ln()
}

/// ln(B(a, b)).
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Complete beta function B(a, b).
pub fn beta(a: f64, b: f64) -> f64 {
    ln_beta(a, b).exp()
}

/// Regularized incomplete beta function I_x(a, b).
///
/// Returns 0 for `x <= 0` and 1 for `x >= 1`. NaN input propagates.
pub fn regularized_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_prefix = a * x.ln() + b * (-x).ln_1p() - ln_beta(a, b);
    let prefix = ln_prefix.exp();

    // The continued fraction converges fast only below the mean of the
    // distribution; above it, evaluate I_{1-x}(b, a) and reflect.
    if x < (a + 1.0) / (a + b + 2.0) {
        prefix / a * beta_cf(x, a, b)
    } else {
        1.0 - prefix / b * beta_cf(1.0 - x, b, a)
    }
}

/// Continued fraction for the incomplete beta function (modified Lentz).
///
/// Stops after `MAX_ITER` rounds and returns the last iterate if the
/// relative change never drops below `EPS`.
fn beta_cf(x: f64, a: f64, b: f64) -> f64 {
    const MAX_ITER: usize = 200;
    const EPS: f64 = 1e-10;
    const TINY: f64 = 1e-30;

    let clamp = |v: f64| if v.abs() < TINY { TINY } else { v };

    let mut c = 1.0_f64;
    let mut d = 1.0 / clamp(1.0 - (a + b) * x / (a + 1.0));
    let mut f = d;

    for m in 1..=MAX_ITER {
        let m = m as f64;

        // Even step: d_{2m}
        let num_even = m * (b - m) * x / ((a + 2.0 * m - 1.0) * (a + 2.0 * m));
        d = 1.0 / clamp(1.0 + num_even * d);
        c = clamp(1.0 + num_even / c);
        f *= c * d;

        // Odd step: d_{2m+1}
        let num_odd = -(a + m) * (a + b + m) * x / ((a + 2.0 * m) * (a + 2.0 * m + 1.0));
        d = 1.0 / clamp(1.0 + num_odd * d);
        c = clamp(1.0 + num_odd / c);
        let delta = c * d;
        f *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }

    f
}
