//! Rounding helpers shared by the aggregators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero to `dp` decimal places.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(6665, 2), 1), Decimal::new(667, 1));
/// assert_eq!(round_half_up(Decimal::new(125, 2), 1), Decimal::new(13, 1));
/// ```
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `part / whole * 100`, rounded to `dp` places; zero when `whole` is zero.
///
/// # Example
///
/// ```
/// use hrms_reports::calculation::percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage(2, 3, 1), Decimal::new(667, 1));
/// assert_eq!(percentage(5, 0, 1), Decimal::ZERO);
/// ```
pub fn percentage(part: u32, whole: u32, dp: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    round_half_up(
        Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole),
        dp,
    )
}

/// `sum / count`, rounded to `dp` places; zero when `count` is zero.
pub fn mean(sum: Decimal, count: u32, dp: u32) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_half_up(sum / Decimal::from(count), dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_at_midpoint() {
        assert_eq!(round_half_up(Decimal::new(25, 2), 1), Decimal::new(3, 1));
        assert_eq!(round_half_up(Decimal::new(35, 2), 1), Decimal::new(4, 1));
    }

    #[test]
    fn test_percentage_full_attendance() {
        assert_eq!(percentage(20, 20, 1), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_percentage_one_third() {
        assert_eq!(percentage(1, 3, 1), Decimal::new(333, 1));
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(0, 0, 1), Decimal::ZERO);
    }

    #[test]
    fn test_mean_of_hours() {
        assert_eq!(mean(Decimal::new(245, 1), 3, 2), Decimal::new(817, 2));
        assert_eq!(mean(Decimal::new(10, 0), 0, 2), Decimal::ZERO);
    }
}
