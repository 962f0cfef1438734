//! Guarded percentage arithmetic. Every rate that reaches a chart goes
//! through [`percentage`] so that no caller re-implements the zero guard.

use amr_core::models::indicator::RawCounts;

/// `numerator / denominator * 100`, or 0 when the denominator is not
/// positive, either operand is not finite, or the division overflows.
///
/// The result is not clamped: a numerator larger than its denominator is a
/// data-quality problem and shows up as a rate above 100.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    finite_or_zero(numerator / denominator * 100.0)
}

pub fn percentage_of(counts: &RawCounts) -> f64 {
    percentage(counts.numerator, counts.denominator)
}

/// NaN and infinities become 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
