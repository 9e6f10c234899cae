//! Capability contracts that consumers depend on.
//!
//! Consumers in [`crate::application`] only ever hold these traits behind a
//! `Box`, an `Arc` or a generic parameter. Concrete implementations live in
//! [`crate::infrastructure`] or in downstream crates.

use super::email::Email;
use super::payment::{Amount, PaymentReceipt};
use super::user::User;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: User) -> Result<()>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>>;
    async fn all(&self) -> Result<Vec<User>>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, to: &Email, message: &str) -> Result<()>;
}

#[async_trait]
pub trait PaymentMethod: Send + Sync {
    /// Short label used in receipts and logs.
    fn name(&self) -> &str;

    /// Charges `amount`. A successfully constructed method must accept any valid amount.
    async fn process(&self, amount: Amount) -> Result<PaymentReceipt>;
}

/// Estimates the market value of a property from its address and area in m².
pub trait AutomatedValuationModel: Send + Sync {
    fn estimate(&self, address: &str, area: Decimal) -> Decimal;
}

pub type UserRepositoryBox = Box<dyn UserRepository>;
pub type EmailServiceBox = Box<dyn EmailService>;
pub type PaymentMethodBox = Box<dyn PaymentMethod>;
pub type SharedAvm = Arc<dyn AutomatedValuationModel>;

pub type UserRepositoryFactory = Box<dyn Fn() -> UserRepositoryBox + Send + Sync>;
pub type EmailServiceFactory = Box<dyn Fn() -> EmailServiceBox + Send + Sync>;
