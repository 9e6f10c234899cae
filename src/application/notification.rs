use crate::domain::investor::Investor;
use crate::domain::ports::EmailServiceBox;
use crate::error::{CapabilityError, Result};
use tracing::info;

/// Notifies investors by email.
///
/// Depends on the `EmailService` abstraction; the provider is picked by whoever
/// constructs the notifier.
pub struct InvestorNotifier {
    email_service: EmailServiceBox,
}

impl InvestorNotifier {
    pub fn new(email_service: EmailServiceBox) -> Self {
        Self { email_service }
    }

    pub async fn notify(&self, investor: &Investor, message: &str) -> Result<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(CapabilityError::Validation(
                "Notification message must not be empty".to_string(),
            ));
        }

        self.email_service.send(&investor.email, message).await?;
        info!(investor = %investor.name, email = %investor.email, "investor notified");
        Ok(())
    }
}
