use crate::domain::payment::{Amount, PaymentReceipt};
use crate::domain::ports::PaymentMethod;
use crate::error::Result;
use tracing::info;

/// Processes payments through any [`PaymentMethod`].
///
/// New methods are added by implementing the trait; this type never changes for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }

    pub async fn process(&self, method: &dyn PaymentMethod, amount: Amount) -> Result<PaymentReceipt> {
        let receipt = method.process(amount).await?;
        info!(
            method = method.name(),
            reference = %receipt.reference,
            amount = %receipt.amount,
            "payment processed"
        );
        Ok(receipt)
    }
}
