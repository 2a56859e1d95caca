//! Density curve samples for plotting a t-distribution with its rejection
//! region and statistic marker.

use serde::Serialize;
use stats::t_pdf;

use crate::engine::{TTestResult, Tail};

/// Number of grid points, both ends included.
pub const CURVE_POINTS: usize = 201;

/// The plot always spans at least [-4, 4].
const MIN_HALF_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub density: f64,
    /// Whether `x` falls inside the rejection region.
    pub rejection: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub df: f64,
    pub tail: Tail,
    pub t_statistic: Option<f64>,
    pub critical_values: Vec<f64>,
    pub points: Vec<CurvePoint>,
}

impl DensityCurve {
    /// Curve for a finished test, marking its statistic and critical values.
    pub fn for_result(result: &TTestResult, tail: Tail) -> Self {
        density_curve(
            result.degrees_of_freedom,
            Some(result.t_statistic),
            &result.critical_values,
            tail,
        )
    }
}

/// Sample the t density over `[-r, r]`, where `r` is wide enough to show the
/// statistic and every critical value with a margin of 1.
///
/// Non-finite markers do not widen the range.
pub fn density_curve(
    df: f64,
    t_statistic: Option<f64>,
    critical_values: &[f64],
    tail: Tail,
) -> DensityCurve {
    let half_width = t_statistic
        .into_iter()
        .chain(critical_values.iter().copied())
        .filter(|v| v.is_finite())
        .map(|v| v.abs() + 1.0)
        .fold(MIN_HALF_WIDTH, f64::max);

    let step = 2.0 * half_width / (CURVE_POINTS - 1) as f64;
    let points = (0..CURVE_POINTS)
        .map(|i| {
            let x = -half_width + i as f64 * step;
            CurvePoint {
                x,
                density: t_pdf(x, df),
                rejection: in_rejection_region(x, critical_values, tail),
            }
        })
        .collect();

    DensityCurve {
        df,
        tail,
        t_statistic,
        critical_values: critical_values.to_vec(),
        points,
    }
}

/// Whether `x` lies beyond the critical value(s) for the given tail.
pub fn in_rejection_region(x: f64, critical_values: &[f64], tail: Tail) -> bool {
    let (Some(&first), Some(&last)) = (critical_values.first(), critical_values.last()) else {
        return false;
    };
    match tail {
        Tail::TwoTailed => x <= first || x >= last,
        Tail::LeftTailed => x <= first,
        Tail::RightTailed => x >= first,
    }
}
