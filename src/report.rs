use std::fmt::Write;

use serde::Serialize;

use crate::batch::BatchOutcome;
use crate::curve::DensityCurve;
use crate::engine::{TTestResult, TestConfig, TestType};

/// Format a statistic, spelling out the IEEE special values.
fn format_value(v: f64, decimals: usize) -> String {
    if v.is_nan() {
        "undefined".to_string()
    } else if v == f64::INFINITY {
        "∞".to_string()
    } else if v == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{v:.decimals$}")
    }
}

fn format_list(values: &[f64], decimals: usize) -> String {
    values
        .iter()
        .map(|&v| format_value(v, decimals))
        .collect::<Vec<_>>()
        .join(", ")
}

fn title(test_type: TestType) -> &'static str {
    match test_type {
        TestType::OneSample => "One-sample t-test",
        TestType::TwoSample => "Two-sample t-test (pooled variance)",
        TestType::Paired => "Paired t-test",
    }
}

pub fn render_result(result: &TTestResult, config: &TestConfig) -> String {
    let mut out = String::new();
    let (mean_label, sd_label, size_label) = match config.test_type {
        TestType::OneSample => ("Sample mean", "Sample SD", "Sample size"),
        TestType::Paired => ("Mean difference", "SD of differences", "Pairs"),
        TestType::TwoSample => ("Mean difference", "Pooled SD", "Total size"),
    };

    let _ = writeln!(out, "{} ({}, α = {})", title(config.test_type), config.tail, config.alpha);
    let _ = writeln!(out, "  H₀: {}", result.hypotheses.null);
    let _ = writeln!(out, "  H₁: {}", result.hypotheses.alternative);
    let _ = writeln!(out);

    let rows = [
        ("t-statistic", format_value(result.t_statistic, 4)),
        ("Degrees of freedom", format_value(result.degrees_of_freedom, 0)),
        ("p-value", format_value(result.p_value, 4)),
        ("Critical value(s)", format_list(&result.critical_values, 4)),
        (mean_label, format_value(result.sample_mean, 4)),
        (sd_label, format_value(result.sample_sd, 4)),
        (size_label, result.sample_size.to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<20} {value}");
    }
    let _ = writeln!(out);

    let decision = if result.reject { "Reject H₀" } else { "Fail to Reject H₀" };
    let comparison = if result.p_value < config.alpha { "<" } else { "≥" };
    let _ = writeln!(out, "Decision: {decision}");
    let _ = writeln!(
        out,
        "  p-value ({}) {comparison} α ({})",
        format_value(result.p_value, 4),
        config.alpha
    );
    let _ = writeln!(out, "{}", result.conclusion);
    let _ = writeln!(out, "{}", result.interpretation);
    out
}

pub fn print_result(result: &TTestResult, config: &TestConfig) {
    print!("{}", render_result(result, config));
}

#[derive(Serialize)]
struct JsonResult<'a> {
    config: &'a TestConfig,
    #[serde(flatten)]
    result: &'a TTestResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    curve: Option<&'a DensityCurve>,
}

/// One JSON document per run; the density curve, when requested, is nested
/// under `curve`.
pub fn print_result_json(result: &TTestResult, config: &TestConfig, curve: Option<&DensityCurve>) {
    let json = JsonResult { config, result, curve };
    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
}

pub fn render_batch(outcomes: &[BatchOutcome<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<30} {:<11} {:<13} {:>10} {:>10}  {}",
        "Test", "Type", "Tail", "t", "p-value", "Decision"
    );
    let _ = writeln!(out, "{}", "-".repeat(95));
    for outcome in outcomes {
        let config = &outcome.test.config;
        match &outcome.result {
            Ok(r) => {
                let decision = if r.reject { "reject H₀" } else { "fail to reject" };
                let _ = writeln!(
                    out,
                    "{:<30} {:<11} {:<13} {:>10} {:>10}  {decision}",
                    outcome.test.name,
                    config.test_type.to_string(),
                    config.tail.to_string(),
                    format_value(r.t_statistic, 4),
                    format_value(r.p_value, 4),
                );
            }
            Err(e) => {
                let _ = writeln!(
                    out,
                    "{:<30} {:<11} {:<13} ERROR: {e}",
                    outcome.test.name,
                    config.test_type.to_string(),
                    config.tail.to_string(),
                );
            }
        }
    }
    out
}

pub fn print_batch(outcomes: &[BatchOutcome<'_>]) {
    print!("{}", render_batch(outcomes));
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    name: &'a str,
    config: &'a TestConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a TTestResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn print_batch_json(outcomes: &[BatchOutcome<'_>]) {
    let entries: Vec<JsonOutcome<'_>> = outcomes
        .iter()
        .map(|o| JsonOutcome {
            name: &o.test.name,
            config: &o.test.config,
            result: o.result.as_ref().ok(),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries).unwrap_or_default());
}

pub fn render_curve(curve: &DensityCurve) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# t-distribution, df = {}", format_value(curve.df, 2));
    if let Some(t) = curve.t_statistic {
        let _ = writeln!(out, "# t-statistic = {}", format_value(t, 4));
    }
    if !curve.critical_values.is_empty() {
        let _ = writeln!(
            out,
            "# critical value(s) = {} ({})",
            format_list(&curve.critical_values, 4),
            curve.tail
        );
    }
    let _ = writeln!(out, "{:>10} {:>10}  rejection", "x", "density");
    for p in &curve.points {
        let marker = if p.rejection { "*" } else { "" };
        let _ = writeln!(out, "{:>10.4} {:>10.6}  {marker}", p.x, p.density);
    }
    out
}

pub fn print_curve(curve: &DensityCurve) {
    print!("{}", render_curve(curve));
}

pub fn print_curve_json(curve: &DensityCurve) {
    println!("{}", serde_json::to_string_pretty(curve).unwrap_or_default());
}
