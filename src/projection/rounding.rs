//! Rounding rules for projection output
//!
//! Customer counts are rounded to the nearest whole customer and money to cents.
//! Both use `f64::round`, so halves go away from zero.

/// Round a fractional customer count to the nearest whole customer
pub fn round_count(value: f64) -> i64 {
    value.round() as i64
}

/// Round a monetary amount to 2 decimal places
pub fn round_money(value: f64) -> f64 {
    let cents = (value * 100.0).round();
    // Avoid emitting -0.0 for tiny negative amounts
    if cents == 0.0 {
        0.0
    } else {
        cents / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_count() {
        assert_eq!(round_count(0.0), 0);
        assert_eq!(round_count(1.49), 1);
        assert_eq!(round_count(1.5), 2);
        assert_eq!(round_count(2.98), 3);
        assert_eq!(round_count(-1.5), -2);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(1450.0), 1450.0);
        assert_eq!(round_money(290.004), 290.0);
        assert_eq!(round_money(2841.999), 2842.0);
        assert_eq!(round_money(12.345678), 12.35);
        assert_eq!(round_money(-3.456), -3.46);
    }

    #[test]
    fn test_round_money_no_negative_zero() {
        let rounded = round_money(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }
}
