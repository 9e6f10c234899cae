use crate::domain::payment::{Amount, PaymentReceipt};
use crate::domain::ports::PaymentMethod;
use crate::error::{CapabilityError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

pub const CREDIT_CARD: &str = "credit-card";
pub const CRYPTO: &str = "crypto";

/// Issues `<prefix>-0001`, `<prefix>-0002`, ... for a single payment method instance.
#[derive(Debug)]
struct ReferenceSequence {
    prefix: &'static str,
    next: AtomicU64,
}

impl ReferenceSequence {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }

    fn issue(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n:04}", self.prefix)
    }
}

/// Card payments. The card number is checked with the Luhn checksum on construction.
#[derive(Debug)]
pub struct CreditCardPayment {
    last_four: String,
    references: ReferenceSequence,
}

impl CreditCardPayment {
    pub fn new(card_number: &str) -> Result<Self> {
        let digits: String = card_number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if !(13..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CapabilityError::Validation(
                "Card number must have 13 to 19 digits".to_string(),
            ));
        }
        if !luhn_valid(&digits) {
            return Err(CapabilityError::Validation(
                "Card number fails the Luhn check".to_string(),
            ));
        }

        Ok(Self {
            last_four: digits[digits.len() - 4..].to_string(),
            references: ReferenceSequence::new("card"),
        })
    }

    pub fn last_four(&self) -> &str {
        &self.last_four
    }
}

fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[async_trait]
impl PaymentMethod for CreditCardPayment {
    fn name(&self) -> &str {
        CREDIT_CARD
    }

    async fn process(&self, amount: Amount) -> Result<PaymentReceipt> {
        Ok(PaymentReceipt {
            reference: self.references.issue(),
            method: format!("{CREDIT_CARD} ****{}", self.last_four),
            amount,
        })
    }
}

/// Payments to an EVM-style wallet (`0x` followed by 40 hex digits).
#[derive(Debug)]
pub struct CryptoPayment {
    wallet: String,
    references: ReferenceSequence,
}

impl CryptoPayment {
    pub fn new(wallet: &str) -> Result<Self> {
        let wallet = wallet.trim();
        let valid = wallet
            .strip_prefix("0x")
            .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid {
            return Err(CapabilityError::Validation(format!(
                "Invalid wallet address '{wallet}'"
            )));
        }

        Ok(Self {
            wallet: wallet.to_lowercase(),
            references: ReferenceSequence::new("crypto"),
        })
    }

    pub fn wallet(&self) -> &str {
        &self.wallet
    }
}

#[async_trait]
impl PaymentMethod for CryptoPayment {
    fn name(&self) -> &str {
        CRYPTO
    }

    async fn process(&self, amount: Amount) -> Result<PaymentReceipt> {
        Ok(PaymentReceipt {
            reference: self.references.issue(),
            method: format!("{CRYPTO} {}", self.wallet),
            amount,
        })
    }
}
