//! Tax rate reporting.
//!
//! Payslips report PAYE both as a share of gross salary (effective rate)
//! and as a share of chargeable income (average rate). A zero denominator
//! yields `None` rather than a NaN or infinite percentage.

use rust_decimal::{Decimal, RoundingStrategy};

/// Computes a tax rate as a percentage rounded to two decimal places.
///
/// Returns `None` when the denominator is zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tax_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = tax_rate(
///     Decimal::from_str("1831706.67").unwrap(),
///     Decimal::from(20_000_000_i64),
/// );
/// assert_eq!(rate, Some(Decimal::from_str("9.16").unwrap()));
///
/// assert_eq!(tax_rate(Decimal::ZERO, Decimal::ZERO), None);
/// ```
pub fn tax_rate(tax: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }

    Some(
        (tax / denominator * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_is_percentage_of_denominator() {
        assert_eq!(tax_rate(dec("1000"), dec("10000")), Some(dec("10.00")));
    }

    #[test]
    fn test_rate_rounds_to_two_decimals() {
        // 1/3 of the denominator -> 33.333...% -> 33.33%
        assert_eq!(tax_rate(dec("1"), dec("3")), Some(dec("33.33")));
    }

    #[test]
    fn test_rate_rounds_half_away_from_zero() {
        // 1.2345/10 -> 12.345% -> 12.35%
        assert_eq!(tax_rate(dec("1.2345"), dec("10")), Some(dec("12.35")));
    }

    #[test]
    fn test_zero_denominator_is_none() {
        assert_eq!(tax_rate(dec("1000"), Decimal::ZERO), None);
    }

    #[test]
    fn test_zero_tax_over_nonzero_denominator_is_zero_percent() {
        assert_eq!(tax_rate(Decimal::ZERO, dec("10000")), Some(dec("0.00")));
    }
}
