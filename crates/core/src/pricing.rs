//! Promo pricing engine.
//!
//! Pure discount computation against a small fixed table of recognized
//! codes. No state, no I/O: the same inputs always produce the same quote.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Percentage taken off the base price by `SAVE10`.
const SAVE10_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Flat discount applied by `FLAT100`, in currency units.
const FLAT100_AMOUNT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Result of a successful promo code application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoQuote {
    /// The upper-cased code that matched.
    pub code: String,
    /// Discount as advertised, rounded to 2 decimal places. A flat discount
    /// may exceed the base price; the final price clamps at 0 instead.
    pub discount_amount: Decimal,
    /// Price after discount, rounded to 2 decimal places, never negative.
    pub final_price: Decimal,
}

/// Compute the discount for a promo code against a base price.
///
/// The code is upper-cased before matching, so `save10` and `SAVE10` are the
/// same code. Recognized codes:
///
/// | Code      | Effect                                      |
/// |-----------|---------------------------------------------|
/// | `SAVE10`  | 10% off the base price                      |
/// | `FLAT100` | 100 units off, final price floored at 0     |
///
/// # Errors
///
/// - [`CoreError::Validation`] if `base_price` is not positive or `code` is
///   blank.
/// - [`CoreError::NotFound`] for an unrecognized code.
pub fn compute_discount(code: &str, base_price: Decimal) -> Result<PromoQuote, CoreError> {
    if code.trim().is_empty() {
        return Err(CoreError::Validation("Promo code must not be empty".into()));
    }
    if base_price <= Decimal::ZERO {
        return Err(CoreError::Validation(
            "Base price must be a positive amount".into(),
        ));
    }

    let normalized = code.trim().to_uppercase();

    let (discount_amount, final_price) = match normalized.as_str() {
        "SAVE10" => {
            let discount = base_price * SAVE10_RATE;
            (discount, base_price - discount)
        }
        "FLAT100" => {
            // The advertised discount is the full flat amount even when the
            // discounted price clamps at the zero floor.
            let discounted = (base_price - FLAT100_AMOUNT).max(Decimal::ZERO);
            (FLAT100_AMOUNT, discounted)
        }
        _ => return Err(CoreError::NotFound { entity: "Promo code" }),
    };

    Ok(PromoQuote {
        code: normalized,
        discount_amount: round_money(discount_amount),
        final_price: round_money(final_price),
    })
}

/// Round a monetary amount to 2 decimal places, half away from zero.
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn save10_takes_ten_percent() {
        let quote = compute_discount("SAVE10", dec("100.00")).unwrap();
        assert_eq!(quote.code, "SAVE10");
        assert_eq!(quote.discount_amount, dec("10.00"));
        assert_eq!(quote.final_price, dec("90.00"));
    }

    #[test]
    fn flat100_reports_full_discount_and_clamps_price_at_zero() {
        let quote = compute_discount("FLAT100", dec("50.00")).unwrap();
        assert_eq!(quote.discount_amount, dec("100.00"));
        assert_eq!(quote.final_price, dec("0.00"));
    }

    #[test]
    fn flat100_on_larger_price_subtracts_plainly() {
        let quote = compute_discount("FLAT100", dec("150.00")).unwrap();
        assert_eq!(quote.discount_amount, dec("100.00"));
        assert_eq!(quote.final_price, dec("50.00"));
    }

    #[test]
    fn unknown_code_is_not_found() {
        let err = compute_discount("BOGUS", dec("100.00")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: "Promo code" }));
    }

    #[test]
    fn code_matching_is_case_insensitive() {
        let quote = compute_discount("save10", dec("80.00")).unwrap();
        assert_eq!(quote.code, "SAVE10");
        assert_eq!(quote.final_price, dec("72.00"));
    }

    #[test]
    fn blank_code_fails_validation() {
        let err = compute_discount("   ", dec("100.00")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn non_positive_price_fails_validation() {
        assert!(matches!(
            compute_discount("SAVE10", Decimal::ZERO).unwrap_err(),
            CoreError::Validation(_)
        ));
        assert!(matches!(
            compute_discount("SAVE10", dec("-5.00")).unwrap_err(),
            CoreError::Validation(_)
        ));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 10% of 100.05 is 10.005, which must round up to 10.01.
        let quote = compute_discount("SAVE10", dec("100.05")).unwrap();
        assert_eq!(quote.discount_amount, dec("10.01"));
        assert_eq!(quote.final_price, dec("90.05")); // 90.045 rounds up
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let a = compute_discount("SAVE10", dec("33.33")).unwrap();
        let b = compute_discount("SAVE10", dec("33.33")).unwrap();
        assert_eq!(a, b);
    }
}
