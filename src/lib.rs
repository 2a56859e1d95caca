//! Student's t-tests on raw samples or summary statistics.
//!
//! The numerical work (log-gamma, incomplete beta, t-distribution) lives in
//! the `stats` crate; this crate turns it into test decisions:
//!
//! - [`engine`]: one-sample, pooled two-sample and paired tests, each
//!   two-, left- or right-tailed
//! - [`curve`]: density grid with the rejection region, for plotting
//! - [`batch`]: many tests from one TOML file, evaluated in parallel
//! - [`report`]: text and JSON rendering of results
//!
//! ```
//! use tstat::{Tail, TestConfig, TestType, run_t_test};
//!
//! let config = TestConfig::new(TestType::OneSample, Tail::TwoTailed, 0.05)
//!     .with_hypothesized_mean(25.0);
//! let result = run_t_test(&[23.0, 25.0, 27.0, 29.0, 31.0], None, &config).unwrap();
//! assert_eq!(result.degrees_of_freedom, 4.0);
//! assert!(!result.reject);
//! ```

pub mod batch;
pub mod curve;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;

pub use curve::{DensityCurve, density_curve};
pub use engine::{
    Hypotheses, Summary, TTestResult, Tail, TestConfig, TestType, run_t_test,
    run_t_test_from_summary,
};
pub use error::{Error, Result};
pub use stats::{t_cdf, t_pdf, t_quantile};
