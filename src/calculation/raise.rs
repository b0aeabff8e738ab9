//! Pay raise calculation.
//!
//! A raise multiplies the current pay by a rate and truncates the product
//! toward zero. Exact decimal arithmetic keeps `50000 x 1.04` at `52000`
//! rather than `51999.99...`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{RosterError, RosterResult};

/// The outcome of a single raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaiseResult {
    /// Pay before the raise.
    pub previous_pay: i64,
    /// Pay after the raise.
    pub new_pay: i64,
    /// The rate that was applied.
    pub rate: Decimal,
    /// A human-readable account of the calculation.
    pub reasoning: String,
}

/// Computes the pay after one raise at `rate`.
///
/// No bounds are enforced on either input: zero stays zero and negative
/// pay is scaled like any other value.
///
/// # Errors
///
/// Returns `CalculationError` when the raised pay does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use employee_roster::calculation::apply_raise;
/// use rust_decimal::Decimal;
///
/// let result = apply_raise(50_000, Decimal::new(104, 2)).unwrap();
/// assert_eq!(result.new_pay, 52_000);
/// assert_eq!(result.reasoning, "$50000 x 1.04 = $52000");
/// ```
pub fn apply_raise(pay: i64, rate: Decimal) -> RosterResult<RaiseResult> {
    let overflow = || RosterError::CalculationError {
        message: format!("raise of {} by {} overflows pay amount", pay, rate),
    };

    let new_pay = Decimal::from(pay)
        .checked_mul(rate)
        .map(|raised| raised.trunc())
        .and_then(|raised| raised.to_i64())
        .ok_or_else(overflow)?;

    Ok(RaiseResult {
        previous_pay: pay,
        new_pay,
        rate,
        reasoning: format!("${} x {} = ${}", pay, rate.normalize(), new_pay),
    })
}
