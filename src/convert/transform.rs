//! Value transformation
//!
//! Applies a resolved conversion factor to free-form numeric input.

/// Compute the converted value for raw input text and a conversion factor.
///
/// The input is trimmed and parsed as a float; on success the parsed value is
/// multiplied by `factor`. Any parse failure, including empty input, yields
/// 0.0 rather than an error. No bounds checking or rounding is applied.
pub fn compute_result(input: &str, factor: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) => value * factor,
        Err(_) => 0.0,
    }
}
