//! Display rounding
//!
//! Output values are rounded when a frame is emitted, never before, so the
//! integrated stock keeps full precision across steps.
//!
//! Rounding works on the exact binary value: `972.805` is stored as
//! `972.80499999...` and therefore rounds down. Exact ties (binary fractions
//! such as `0.125`) round up.

/// Number of decimal places kept in emitted frames
pub const DISPLAY_DECIMALS: usize = 2;

/// Round `value` to `decimals` places.
///
/// # Example
/// ```
/// use project_simulator_core_rs::core::rounding::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let rounded = if is_exact_tie(value, decimals) {
        // value * factor is exact here, so round() sees the true half
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    } else {
        format!("{:.*}", decimals, value).parse().unwrap_or(value)
    };

    // No -0.0 in output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to [`DISPLAY_DECIMALS`] places.
pub fn round_display(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}

/// True when `value` lies exactly halfway between two `decimals`-place numbers
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    // A tie needs at most decimals + 1 binary fraction digits
    let binary_scale = 2f64.powi(decimals as i32 + 1);
    if !value.is_finite() || (value * binary_scale).fract() != 0.0 {
        return false;
    }
    format!("{:.*}", decimals + 1, value).ends_with('5')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulated_tenths_round_cleanly() {
        let mut t = 0.0;
        for _ in 0..100 {
            t += 0.1;
        }
        assert_ne!(t, 10.0);
        assert_eq!(round_display(t), 10.0);
    }

    #[test]
    fn test_rounds_stored_value_not_literal() {
        assert_eq!(round_display(972.805), 972.8);
        assert_eq!(round_display(1.005), 1.0);
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(round_display(0.375), 0.38);
        assert_eq!(round_display(12.625), 12.63);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let r = round_display(-0.001);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_whole_numbers_unchanged() {
        assert_eq!(round_display(1000.0), 1000.0);
        assert_eq!(round_display(0.0), 0.0);
        assert_eq!(round_display(1.0e12), 1.0e12);
    }
}
