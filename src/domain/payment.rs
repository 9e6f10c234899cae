use crate::error::{CapabilityError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// Represents a positive monetary amount for payments.
///
/// Ensures that payment amounts are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CapabilityError::Validation(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CapabilityError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Proof that a payment method accepted an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// Reference assigned by the payment method, unique per method instance.
    pub reference: String,
    /// Human readable description of the method that processed the payment.
    pub method: String,
    pub amount: Amount,
}
