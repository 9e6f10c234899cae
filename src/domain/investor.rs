use super::email::Email;
use crate::error::{CapabilityError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Investor {
    pub name: String,
    pub email: Email,
}

impl Investor {
    pub fn new(name: impl AsRef<str>, email: &str) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CapabilityError::Validation(
                "Investor name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            email: Email::parse(email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name_and_normalizes_email() {
        let investor = Investor::new("  Grace Hopper ", "Grace@Fund.io").unwrap();
        assert_eq!(investor.name, "Grace Hopper");
        assert_eq!(investor.email.as_str(), "grace@fund.io");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(matches!(
            Investor::new("   ", "grace@fund.io"),
            Err(CapabilityError::Validation(msg)) if msg.contains("name")
        ));
    }
}
