//! Registries of the built-in implementations, for composition roots that pick
//! an implementation by name.

use crate::domain::ports::{EmailService, PaymentMethod};
use crate::error::Result;
use crate::infrastructure::email::{ConsoleEmailService, OutboxEmailService};
use crate::infrastructure::payment::{CREDIT_CARD, CRYPTO, CreditCardPayment, CryptoPayment};
use crate::registry::CapabilityRegistry;

pub const CONSOLE_MAILER: &str = "console";
pub const OUTBOX_MAILER: &str = "outbox";

pub type EmailRegistry = CapabilityRegistry<dyn EmailService>;
/// Payment methods are built from a credential: a card number or a wallet address.
pub type PaymentRegistry = CapabilityRegistry<dyn PaymentMethod, String>;

/// `console` prints emails to stdout; `outbox` keeps them in memory.
pub fn email_services() -> Result<EmailRegistry> {
    CapabilityRegistry::builder("email service")
        .register(CONSOLE_MAILER, |_: &()| {
            Ok(Box::new(ConsoleEmailService::new(std::io::stdout())) as Box<dyn EmailService>)
        })
        .register(OUTBOX_MAILER, |_: &()| {
            Ok(Box::new(OutboxEmailService::new()) as Box<dyn EmailService>)
        })
        .build()
}

pub fn payment_methods() -> Result<PaymentRegistry> {
    CapabilityRegistry::builder("payment method")
        .register(CREDIT_CARD, |card_number: &String| {
            Ok(Box::new(CreditCardPayment::new(card_number)?) as Box<dyn PaymentMethod>)
        })
        .register(CRYPTO, |wallet: &String| {
            Ok(Box::new(CryptoPayment::new(wallet)?) as Box<dyn PaymentMethod>)
        })
        .build()
}
