//! Batch files: many tests described in one TOML document.
//!
//! ```toml
//! [[test]]
//! name = "fill weight"
//! type = "one-sample"
//! tail = "two-tailed"
//! alpha = 0.05
//! hypothesized_mean = 25
//! sample1 = [23, 25, 27, 29, 31]
//!
//! [[test]]
//! name = "line A vs line B"
//! type = "two-sample"
//! summary1 = { mean = 22.0, sd = 2.55, size = 5 }
//! summary2 = { mean = 28.0, sd = 1.58, size = 5 }
//! ```

use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;

use crate::engine::{Summary, TTestResult, TestConfig, run_t_test, run_t_test_from_summary};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    #[serde(rename = "test", default)]
    pub tests: Vec<BatchTest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchTest {
    pub name: String,
    #[serde(flatten)]
    pub config: TestConfig,
    pub sample1: Option<Vec<f64>>,
    pub sample2: Option<Vec<f64>>,
    pub summary1: Option<Summary>,
    pub summary2: Option<Summary>,
}

impl BatchTest {
    /// Run from raw samples or summaries, whichever the entry provides.
    pub fn run(&self) -> Result<TTestResult> {
        match (&self.sample1, &self.summary1) {
            (Some(sample1), None) => run_t_test(sample1, self.sample2.as_deref(), &self.config),
            (None, Some(summary1)) => {
                run_t_test_from_summary(summary1, &self.config, self.summary2.as_ref())
            }
            (Some(_), Some(_)) => Err(Error::validation(
                "give either sample1 or summary1, not both",
            )),
            (None, None) => Err(Error::validation("missing sample1 or summary1")),
        }
    }
}

pub struct BatchOutcome<'a> {
    pub test: &'a BatchTest,
    pub result: Result<TTestResult>,
}

impl BatchOutcome<'_> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn load_batch(path: &Path) -> Result<BatchFile> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&text, path)
}

/// Parse batch TOML. `path` is only used in error messages.
pub fn parse_batch(text: &str, path: &Path) -> Result<BatchFile> {
    let batch: BatchFile = toml::from_str(text).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    if batch.tests.is_empty() {
        return Err(Error::Config {
            path: path.to_path_buf(),
            message: "no [[test]] entries".to_string(),
        });
    }
    tracing::debug!(path = %path.display(), tests = batch.tests.len(), "loaded batch file");
    Ok(batch)
}

/// Evaluate every test in parallel. Outcomes keep file order, and one failing
/// test does not stop the others.
pub fn run_batch(batch: &BatchFile) -> Vec<BatchOutcome<'_>> {
    batch
        .tests
        .par_iter()
        .map(|test| BatchOutcome {
            test,
            result: test.run(),
        })
        .collect()
}
