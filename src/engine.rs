//! t-test decision procedure: statistic, degrees of freedom, p-value,
//! critical values and the reject / fail-to-reject decision.
//!
//! Raw samples and summary statistics both reduce to [`Summary`] values and
//! share one downstream computation. Nothing here logs or keeps state.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use stats::{t_cdf, t_quantile};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    /// Compare one sample mean to a hypothesized value
    OneSample,
    /// Compare the means of two independent groups (pooled variance)
    TwoSample,
    /// Compare the means of paired or matched observations
    Paired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Tail {
    #[default]
    #[serde(rename = "two-tailed", alias = "two")]
    #[value(name = "two-tailed", alias = "two")]
    TwoTailed,
    #[serde(rename = "left-tailed", alias = "left")]
    #[value(name = "left-tailed", alias = "left")]
    LeftTailed,
    #[serde(rename = "right-tailed", alias = "right")]
    #[value(name = "right-tailed", alias = "right")]
    RightTailed,
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestType::OneSample => write!(f, "one-sample"),
            TestType::TwoSample => write!(f, "two-sample"),
            TestType::Paired => write!(f, "paired"),
        }
    }
}

impl std::fmt::Display for Tail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tail::TwoTailed => write!(f, "two-tailed"),
            Tail::LeftTailed => write!(f, "left-tailed"),
            Tail::RightTailed => write!(f, "right-tailed"),
        }
    }
}

fn default_alpha() -> f64 {
    0.05
}

/// Parameters of a single test invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    #[serde(rename = "type")]
    pub test_type: TestType,
    #[serde(default)]
    pub tail: Tail,
    /// Significance level, strictly between 0 and 1.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// μ₀ for the one-sample test. Ignored by the other test types.
    #[serde(default)]
    pub hypothesized_mean: f64,
}

impl TestConfig {
    pub fn new(test_type: TestType, tail: Tail, alpha: f64) -> Self {
        Self {
            test_type,
            tail,
            alpha,
            hypothesized_mean: 0.0,
        }
    }

    pub fn with_hypothesized_mean(mut self, mu0: f64) -> Self {
        self.hypothesized_mean = mu0;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::validation(format!(
                "alpha must be between 0 and 1, got {}",
                self.alpha
            )));
        }
        if !self.hypothesized_mean.is_finite() {
            return Err(Error::validation(format!(
                "hypothesized mean must be a finite number, got {}",
                self.hypothesized_mean
            )));
        }
        Ok(())
    }
}

/// Mean, standard deviation and size of a sample: the lossy stand-in for
/// raw values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub sd: f64,
    pub size: usize,
}

impl Summary {
    pub fn new(mean: f64, sd: f64, size: usize) -> Self {
        Self { mean, sd, size }
    }

    /// Describe raw values. Needs at least 2 of them.
    pub fn from_sample(data: &[f64]) -> std::result::Result<Self, stats::StatsError> {
        Ok(Self {
            mean: stats::mean(data)?,
            sd: stats::std_dev(data)?,
            size: data.len(),
        })
    }

    fn validate(&self, label: &str) -> Result<()> {
        if self.size < 2 {
            return Err(Error::validation(format!(
                "{label} must have at least 2 values, got {}",
                self.size
            )));
        }
        if !self.mean.is_finite() {
            return Err(Error::validation(format!(
                "{label} mean must be a finite number, got {}",
                self.mean
            )));
        }
        if !self.sd.is_finite() || self.sd < 0.0 {
            return Err(Error::validation(format!(
                "{label} standard deviation must be a non-negative number, got {}",
                self.sd
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypotheses {
    pub null: String,
    pub alternative: String,
}

/// Outcome of one t-test. Non-finite statistics (zero variance) are passed
/// through as IEEE infinities or NaN; check before formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    /// `[-c, c]` for two-tailed tests, a single value otherwise.
    pub critical_values: Vec<f64>,
    /// Sample mean, mean difference (paired), or `mean1 - mean2` (two-sample).
    pub sample_mean: f64,
    /// Sample SD, SD of differences (paired), or pooled SD (two-sample).
    pub sample_sd: f64,
    /// n, number of pairs (paired), or `n1 + n2` (two-sample).
    pub sample_size: usize,
    pub hypotheses: Hypotheses,
    pub reject: bool,
    pub conclusion: String,
    pub interpretation: String,
}

/// Statistic and the descriptive figures reported alongside it.
struct Statistic {
    t: f64,
    df: f64,
    mean: f64,
    sd: f64,
    size: usize,
}

/// Run a t-test on raw samples.
///
/// `sample2` is required for two-sample and paired tests and ignored for the
/// one-sample test. Paired samples must have equal length.
pub fn run_t_test(
    sample1: &[f64],
    sample2: Option<&[f64]>,
    config: &TestConfig,
) -> Result<TTestResult> {
    config.validate()?;

    let stat = match config.test_type {
        TestType::OneSample => {
            let s = describe(sample1, "sample 1")?;
            one_sample(&s, config.hypothesized_mean)
        }
        TestType::Paired => {
            let after = match sample2 {
                Some(s) if s.len() == sample1.len() => s,
                Some(s) => {
                    return Err(Error::validation(format!(
                        "paired samples must have equal length, got {} and {}",
                        sample1.len(),
                        s.len()
                    )));
                }
                None => return Err(Error::validation("paired test requires a second sample")),
            };
            let differences: Vec<f64> = sample1.iter().zip(after).map(|(x, y)| x - y).collect();
            let d = describe(&differences, "paired differences")?;
            one_sample(&d, 0.0)
        }
        TestType::TwoSample => {
            let sample2 = sample2
                .ok_or_else(|| Error::validation("two-sample test requires a second sample"))?;
            let a = describe(sample1, "sample 1")?;
            let b = describe(sample2, "sample 2")?;
            two_sample(&a, &b)
        }
    };

    decide(stat, config)
}

/// Run a t-test from summary statistics.
///
/// Two-sample and paired tests require `summary2`. For the paired test
/// `summary1` describes the differences `x_i - y_i`; `summary2` is validated
/// but does not enter the statistic, since two marginal summaries cannot
/// determine a paired test.
pub fn run_t_test_from_summary(
    summary1: &Summary,
    config: &TestConfig,
    summary2: Option<&Summary>,
) -> Result<TTestResult> {
    config.validate()?;
    summary1.validate("sample 1")?;

    let stat = match config.test_type {
        TestType::OneSample => one_sample(summary1, config.hypothesized_mean),
        TestType::Paired => {
            let summary2 = summary2.ok_or_else(|| {
                Error::validation("paired test requires second sample statistics")
            })?;
            summary2.validate("sample 2")?;
            one_sample(summary1, 0.0)
        }
        TestType::TwoSample => {
            let summary2 = summary2.ok_or_else(|| {
                Error::validation("two-sample test requires second sample statistics")
            })?;
            summary2.validate("sample 2")?;
            two_sample(summary1, summary2)
        }
    };

    decide(stat, config)
}

fn describe(data: &[f64], label: &str) -> Result<Summary> {
    Summary::from_sample(data).map_err(|e| Error::validation(format!("{label}: {e}")))
}

fn one_sample(s: &Summary, mu0: f64) -> Statistic {
    let n = s.size as f64;
    let se = s.sd / n.sqrt();
    Statistic {
        t: (s.mean - mu0) / se,
        df: n - 1.0,
        mean: s.mean,
        sd: s.sd,
        size: s.size,
    }
}

/// Student's two-sample test with pooled variance (not Welch).
fn two_sample(a: &Summary, b: &Summary) -> Statistic {
    let n1 = a.size as f64;
    let n2 = b.size as f64;
    let df = n1 + n2 - 2.0;

    let pooled_sd = (((n1 - 1.0) * a.sd * a.sd + (n2 - 1.0) * b.sd * b.sd) / df).sqrt();
    let se = pooled_sd * (1.0 / n1 + 1.0 / n2).sqrt();

    Statistic {
        t: (a.mean - b.mean) / se,
        df,
        mean: a.mean - b.mean,
        sd: pooled_sd,
        size: a.size + b.size,
    }
}

fn decide(stat: Statistic, config: &TestConfig) -> Result<TTestResult> {
    let alpha = config.alpha;
    let Statistic { t, df, .. } = stat;

    // Upper tails are taken through symmetry so tiny p and alpha keep precision.
    let (p_value, critical_values) = match config.tail {
        Tail::TwoTailed => {
            let q = -t_quantile(alpha / 2.0, df)?;
            (2.0 * t_cdf(-t.abs(), df), vec![-q, q])
        }
        Tail::RightTailed => (t_cdf(-t, df), vec![-t_quantile(alpha, df)?]),
        Tail::LeftTailed => (t_cdf(t, df), vec![t_quantile(alpha, df)?]),
    };

    let reject = p_value < alpha;

    Ok(TTestResult {
        t_statistic: t,
        degrees_of_freedom: df,
        p_value,
        critical_values,
        sample_mean: stat.mean,
        sample_sd: stat.sd,
        sample_size: stat.size,
        hypotheses: hypotheses(config),
        reject,
        conclusion: conclusion(reject, alpha),
        interpretation: interpretation(config, reject, stat.mean),
    })
}

fn hypotheses(config: &TestConfig) -> Hypotheses {
    let (param, value) = match config.test_type {
        TestType::OneSample => ("μ", config.hypothesized_mean.to_string()),
        TestType::Paired => ("μd", "0".to_string()),
        TestType::TwoSample => ("μ₁", "μ₂".to_string()),
    };
    let op = match config.tail {
        Tail::TwoTailed => "≠",
        Tail::RightTailed => ">",
        Tail::LeftTailed => "<",
    };
    Hypotheses {
        null: format!("{param} = {value}"),
        alternative: format!("{param} {op} {value}"),
    }
}

fn conclusion(reject: bool, alpha: f64) -> String {
    let evidence = if reject { "sufficient" } else { "insufficient" };
    // Half-percents round up: 2.5% reads as 3%.
    let percent = (alpha * 100.0).round();
    format!(
        "There is {evidence} evidence at the {percent}% significance level to reject the null hypothesis."
    )
}

fn interpretation(config: &TestConfig, reject: bool, mean: f64) -> String {
    match config.test_type {
        TestType::OneSample => {
            let verdict = if reject { "is" } else { "is not" };
            format!(
                "The sample mean ({mean:.2}) {verdict} significantly different from the hypothesized mean ({}).",
                config.hypothesized_mean
            )
        }
        TestType::Paired => {
            let verdict = if reject { "is a" } else { "is no" };
            format!(
                "There {verdict} significant difference between the paired observations (mean difference = {mean:.2})."
            )
        }
        TestType::TwoSample => {
            let verdict = if reject { "is a" } else { "is no" };
            format!(
                "There {verdict} significant difference between the two groups (mean difference = {mean:.2})."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    const ONE: [f64; 5] = [23.0, 25.0, 27.0, 29.0, 31.0];
    const GROUP_A: [f64; 5] = [20.0, 22.0, 19.0, 24.0, 25.0];
    const GROUP_B: [f64; 5] = [28.0, 27.0, 30.0, 26.0, 29.0];
    const BEFORE: [f64; 4] = [10.0, 12.0, 9.0, 11.0];
    const AFTER: [f64; 4] = [12.0, 13.0, 10.0, 14.0];

    fn config(test_type: TestType, tail: Tail) -> TestConfig {
        TestConfig::new(test_type, tail, 0.05)
    }

    #[test]
    fn one_sample_two_tailed_reference() {
        let cfg = config(TestType::OneSample, Tail::TwoTailed).with_hypothesized_mean(25.0);
        let r = run_t_test(&ONE, None, &cfg).unwrap();

        assert_eq!(r.sample_mean, 27.0);
        assert!(close(r.sample_sd, 3.1623, 1e-4), "sd {}", r.sample_sd);
        assert_eq!(r.sample_size, 5);
        assert_eq!(r.degrees_of_freedom, 4.0);
        assert!(close(r.t_statistic, 1.4142, 1e-4), "t {}", r.t_statistic);
        assert!(close(r.p_value, 0.2302, 1e-3), "p {}", r.p_value);
        assert_eq!(r.critical_values.len(), 2);
        assert!(close(r.critical_values[1], 2.7764, 1e-3));
        assert_eq!(r.critical_values[0], -r.critical_values[1]);
        assert!(!r.reject);
        assert_eq!(r.hypotheses.null, "μ = 25");
        assert_eq!(r.hypotheses.alternative, "μ ≠ 25");
        assert_eq!(
            r.conclusion,
            "There is insufficient evidence at the 5% significance level to reject the null hypothesis."
        );
        assert_eq!(
            r.interpretation,
            "The sample mean (27.00) is not significantly different from the hypothesized mean (25)."
        );
    }

    #[test]
    fn one_sample_one_tailed_criticals() {
        let cfg = config(TestType::OneSample, Tail::RightTailed).with_hypothesized_mean(25.0);
        let right = run_t_test(&ONE, None, &cfg).unwrap();
        assert_eq!(right.critical_values.len(), 1);
        // t(0.95, 4) = 2.1318
        assert!(close(right.critical_values[0], 2.1318, 1e-3));
        assert!(close(right.p_value, 0.2302 / 2.0, 1e-3));
        assert_eq!(right.hypotheses.alternative, "μ > 25");

        let cfg = config(TestType::OneSample, Tail::LeftTailed).with_hypothesized_mean(25.0);
        let left = run_t_test(&ONE, None, &cfg).unwrap();
        assert_eq!(left.critical_values.len(), 1);
        assert!(close(left.critical_values[0], -2.1318, 1e-3));
        assert!(close(left.p_value, 1.0 - 0.2302 / 2.0, 1e-3));
        assert_eq!(left.hypotheses.alternative, "μ < 25");
    }

    #[test]
    fn two_sample_pooled_rejects_separated_groups() {
        let cfg = config(TestType::TwoSample, Tail::TwoTailed);
        let r = run_t_test(&GROUP_A, Some(&GROUP_B[..]), &cfg).unwrap();

        assert_eq!(r.degrees_of_freedom, 8.0);
        assert!(r.t_statistic < 0.0, "mean1 < mean2 should give t < 0");
        assert!(close(r.t_statistic, -4.4721, 1e-4), "t {}", r.t_statistic);
        assert!(close(r.sample_sd, 4.5_f64.sqrt(), 1e-10));
        assert_eq!(r.sample_mean, -6.0);
        assert_eq!(r.sample_size, 10);
        assert!(close(r.p_value, 0.00208, 1e-4), "p {}", r.p_value);
        assert!(r.reject);
        assert_eq!(r.hypotheses.null, "μ₁ = μ₂");
        assert_eq!(
            r.interpretation,
            "There is a significant difference between the two groups (mean difference = -6.00)."
        );
    }

    #[test]
    fn paired_uses_differences() {
        let cfg = config(TestType::Paired, Tail::TwoTailed);
        let r = run_t_test(&BEFORE, Some(&AFTER[..]), &cfg).unwrap();

        assert_eq!(r.sample_mean, -1.75);
        assert_eq!(r.degrees_of_freedom, 3.0);
        assert_eq!(r.sample_size, 4);
        assert!(close(r.t_statistic, -3.6556, 1e-4), "t {}", r.t_statistic);
        assert!(close(r.p_value, 0.0354, 1e-3), "p {}", r.p_value);
        assert_eq!(r.reject, r.p_value < cfg.alpha);
        assert_eq!(r.hypotheses.null, "μd = 0");
        assert_eq!(r.hypotheses.alternative, "μd ≠ 0");

        // Same data at alpha = 0.01 must not reject.
        let strict = TestConfig::new(TestType::Paired, Tail::TwoTailed, 0.01);
        let r = run_t_test(&BEFORE, Some(&AFTER[..]), &strict).unwrap();
        assert!(!r.reject);
    }

    #[test]
    fn paired_length_mismatch_is_validation_error() {
        let cfg = config(TestType::Paired, Tail::TwoTailed);
        let err = run_t_test(&ONE, Some(&BEFORE[..]), &cfg).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "paired samples must have equal length, got 5 and 4");

        let err = run_t_test(&ONE, None, &cfg).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn two_sample_requires_second_sample() {
        let cfg = config(TestType::TwoSample, Tail::TwoTailed);
        assert!(run_t_test(&ONE, None, &cfg).unwrap_err().is_validation());
        let err = run_t_test_from_summary(&Summary::new(1.0, 1.0, 5), &cfg, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "two-sample test requires second sample statistics");
    }

    #[test]
    fn short_samples_are_rejected() {
        let cfg = config(TestType::OneSample, Tail::TwoTailed);
        let err = run_t_test(&[1.0], None, &cfg).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "sample 1: need at least 2 values, got 1");

        let cfg = config(TestType::TwoSample, Tail::TwoTailed);
        assert!(run_t_test(&ONE, Some(&[3.0][..]), &cfg).unwrap_err().is_validation());
    }

    #[test]
    fn alpha_outside_unit_interval_is_rejected() {
        for alpha in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let cfg = TestConfig::new(TestType::OneSample, Tail::TwoTailed, alpha);
            let err = run_t_test(&ONE, None, &cfg).unwrap_err();
            assert!(err.is_validation(), "alpha {alpha} should be rejected");
        }
    }

    #[test]
    fn summary_mode_matches_raw_mode() {
        for tail in [Tail::TwoTailed, Tail::LeftTailed, Tail::RightTailed] {
            let cfg = config(TestType::OneSample, tail).with_hypothesized_mean(25.0);
            let raw = run_t_test(&ONE, None, &cfg).unwrap();
            let summary = Summary::from_sample(&ONE).unwrap();
            let from_summary = run_t_test_from_summary(&summary, &cfg, None).unwrap();
            assert_eq!(raw, from_summary);

            let cfg = config(TestType::TwoSample, tail);
            let raw = run_t_test(&GROUP_A, Some(&GROUP_B[..]), &cfg).unwrap();
            let a = Summary::from_sample(&GROUP_A).unwrap();
            let b = Summary::from_sample(&GROUP_B).unwrap();
            assert_eq!(raw, run_t_test_from_summary(&a, &cfg, Some(&b)).unwrap());
        }
    }

    #[test]
    fn paired_summary_describes_differences() {
        let cfg = config(TestType::Paired, Tail::LeftTailed);
        let raw = run_t_test(&BEFORE, Some(&AFTER[..]), &cfg).unwrap();
        let diffs: Vec<f64> = BEFORE.iter().zip(&AFTER).map(|(x, y)| x - y).collect();
        let d = Summary::from_sample(&diffs).unwrap();
        let after = Summary::from_sample(&AFTER).unwrap();
        let from_summary = run_t_test_from_summary(&d, &cfg, Some(&after)).unwrap();
        assert_eq!(raw, from_summary);
        assert!(from_summary.reject);
    }

    #[test]
    fn paired_summary_requires_second_sample() {
        let cfg = config(TestType::Paired, Tail::TwoTailed);
        let d = Summary::new(-1.75, 0.957, 4);
        let err = run_t_test_from_summary(&d, &cfg, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "paired test requires second sample statistics");

        let short = Summary::new(12.25, 1.7, 1);
        assert!(run_t_test_from_summary(&d, &cfg, Some(&short)).unwrap_err().is_validation());
    }

    #[test]
    fn mirrored_far_tail_p_values_agree() {
        let up = Summary::new(20.0, 1.0, 31);
        let down = Summary::new(-20.0, 1.0, 31);
        let p = |s: &Summary, tail| {
            run_t_test_from_summary(s, &config(TestType::OneSample, tail), None)
                .unwrap()
                .p_value
        };

        let right = p(&up, Tail::RightTailed);
        let left = p(&down, Tail::LeftTailed);
        assert!(right > 0.0 && right < 1e-30, "right {right}");
        assert!(close(right / left, 1.0, 1e-9), "right {right} left {left}");

        let two = p(&up, Tail::TwoTailed);
        assert!(close(two / (2.0 * left), 1.0, 1e-9), "two {two}");
        assert_eq!(two, p(&down, Tail::TwoTailed));
    }

    #[test]
    fn tiny_alpha_gives_critical_values_in_every_tail() {
        for tail in [Tail::TwoTailed, Tail::LeftTailed, Tail::RightTailed] {
            let cfg = TestConfig::new(TestType::OneSample, tail, 1e-17);
            let r = run_t_test(&ONE, None, &cfg).unwrap();
            assert!(r.critical_values.iter().all(|c| c.is_finite() && c.abs() > 100.0));
            assert!(!r.reject);
        }
        let right = run_t_test(&ONE, None, &TestConfig::new(TestType::OneSample, Tail::RightTailed, 1e-17));
        let left = run_t_test(&ONE, None, &TestConfig::new(TestType::OneSample, Tail::LeftTailed, 1e-17));
        assert_eq!(right.unwrap().critical_values[0], -left.unwrap().critical_values[0]);
    }

    #[test]
    fn conclusion_rounds_half_percent_up() {
        assert!(conclusion(true, 0.025).contains("at the 3% significance level"));
        assert!(conclusion(false, 0.05).contains("at the 5% significance level"));
        assert!(conclusion(false, 0.1).contains("at the 10% significance level"));
    }

    #[test]
    fn invalid_summaries_are_rejected() {
        let cfg = config(TestType::OneSample, Tail::TwoTailed);
        for s in [
            Summary::new(1.0, 1.0, 1),
            Summary::new(1.0, -1.0, 10),
            Summary::new(1.0, f64::NAN, 10),
            Summary::new(f64::INFINITY, 1.0, 10),
        ] {
            let err = run_t_test_from_summary(&s, &cfg, None).unwrap_err();
            assert!(err.is_validation(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn zero_variance_propagates_infinite_statistic() {
        let cfg = config(TestType::OneSample, Tail::TwoTailed).with_hypothesized_mean(4.0);
        let r = run_t_test(&[5.0, 5.0, 5.0], None, &cfg).unwrap();
        assert!(r.t_statistic.is_infinite());
        assert_eq!(r.p_value, 0.0);
        assert!(r.reject);

        let cfg = config(TestType::OneSample, Tail::TwoTailed).with_hypothesized_mean(5.0);
        let r = run_t_test(&[5.0, 5.0, 5.0], None, &cfg).unwrap();
        assert!(r.t_statistic.is_nan());
        assert!(!r.reject);
    }

    #[test]
    fn reject_is_strict_inequality() {
        // p-value for the reference one-sample case, used as alpha.
        let base = config(TestType::OneSample, Tail::TwoTailed).with_hypothesized_mean(25.0);
        let p = run_t_test(&ONE, None, &base).unwrap().p_value;

        let at_p = TestConfig { alpha: p, ..base };
        assert!(!run_t_test(&ONE, None, &at_p).unwrap().reject);

        let above_p = TestConfig { alpha: p + 1e-9, ..base };
        assert!(run_t_test(&ONE, None, &above_p).unwrap().reject);
    }

    #[test]
    fn invariants_hold_across_tails_and_types() {
        let tails = [Tail::TwoTailed, Tail::LeftTailed, Tail::RightTailed];
        for tail in tails {
            for alpha in [0.01, 0.05, 0.1, 0.5] {
                let results = [
                    run_t_test(&ONE, None, &TestConfig::new(TestType::OneSample, tail, alpha)),
                    run_t_test(&GROUP_A, Some(&GROUP_B[..]), &TestConfig::new(TestType::TwoSample, tail, alpha)),
                    run_t_test(&BEFORE, Some(&AFTER[..]), &TestConfig::new(TestType::Paired, tail, alpha)),
                ];
                for r in results {
                    let r = r.unwrap();
                    let expected_len = if tail == Tail::TwoTailed { 2 } else { 1 };
                    assert_eq!(r.critical_values.len(), expected_len);
                    assert_eq!(r.reject, r.p_value < alpha);
                    assert!((0.0..=1.0).contains(&r.p_value));
                    if tail == Tail::TwoTailed {
                        assert!(r.critical_values[1] > 0.0);
                        assert_eq!(r.critical_values[0], -r.critical_values[1]);
                    }
                }
            }
        }
    }

    #[test]
    fn config_deserializes_with_defaults_and_aliases() {
        let cfg: TestConfig = toml::from_str(r#"type = "paired""#).unwrap();
        assert_eq!(cfg, TestConfig::new(TestType::Paired, Tail::TwoTailed, 0.05));

        let cfg: TestConfig =
            toml::from_str("type = \"one-sample\"\ntail = \"right\"\nhypothesized_mean = 3.5").unwrap();
        assert_eq!(cfg.tail, Tail::RightTailed);
        assert_eq!(cfg.hypothesized_mean, 3.5);

        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"right-tailed\""), "{json}");
        assert!(json.contains("\"one-sample\""), "{json}");
    }
}
