//! Display-ready number formatting.
//!
//! Both simulated percentage fields of the news annotation go through
//! [`signed_pct`] so their rounding and sign conventions cannot diverge.

/// Rounds a value to the given number of decimal places.
///
/// Ties round away from zero, matching the display math used by the
/// NexusFin dashboard.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats a value as a signed percentage string.
///
/// Non-negative values carry an explicit leading `+`, including zero:
///
/// ```
/// use nexusfin_core::format::signed_pct;
///
/// assert_eq!(signed_pct(5.62, 1), "+5.6%");
/// assert_eq!(signed_pct(-3.14, 1), "-3.1%");
/// assert_eq!(signed_pct(0.0, 2), "+0.00%");
/// ```
#[must_use]
pub fn signed_pct(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    // Negative zero would otherwise print as "-0.00%".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:+.*}%", decimals as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(1.24, 1), 1.2);
        assert_eq!(round_to(-2.2399999, 1), -2.2);
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(2.0, 1), 2.0);
    }

    #[test]
    fn test_signed_pct_positive() {
        assert_eq!(signed_pct(5.6, 1), "+5.6%");
        assert_eq!(signed_pct(1.234, 2), "+1.23%");
    }

    #[test]
    fn test_signed_pct_negative() {
        assert_eq!(signed_pct(-2.24, 1), "-2.2%");
        assert_eq!(signed_pct(-4.8, 2), "-4.80%");
    }

    #[test]
    fn test_signed_pct_zero() {
        assert_eq!(signed_pct(0.0, 2), "+0.00%");
        assert_eq!(signed_pct(-0.0, 2), "+0.00%");
        // Values that round to zero also normalize.
        assert_eq!(signed_pct(-0.0001, 2), "+0.00%");
    }
}
