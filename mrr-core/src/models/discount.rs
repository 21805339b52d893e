//! Customer-level discount contract.

use crate::error::MrrError;
use rust_decimal::Decimal;

/// A customer-level discount layered on top of subscription-level discounting.
pub trait Discount {
    /// Whether this discount should reduce MRR at all.
    fn applies_to_mrr(&self) -> bool;

    /// Amount to deduct from `amount`. Not clamped by the aggregator.
    fn deduction_for(&self, amount: Decimal) -> Result<Decimal, MrrError>;
}

/// Wrapper for a customer record that carries no discount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl Discount for NoDiscount {
    fn applies_to_mrr(&self) -> bool {
        false
    }

    fn deduction_for(&self, _amount: Decimal) -> Result<Decimal, MrrError> {
        Ok(Decimal::ZERO)
    }
}
