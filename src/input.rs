use crate::error::{Error, Result};

/// Parse comma-separated numbers. Tokens that are empty or not numbers are
/// skipped, matching how the data entry form treats stray separators.
pub fn parse_values(text: &str) -> Vec<f64> {
    text.split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .collect()
}

/// Parse a sample and require at least two values.
pub fn parse_sample(text: &str, label: &str) -> Result<Vec<f64>> {
    let values = parse_values(text);
    if values.len() < 2 {
        return Err(Error::validation(format!("{label} must have at least 2 values")));
    }
    Ok(values)
}
