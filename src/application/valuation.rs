use crate::domain::property::{Property, PropertyStatus, ValuableProperty};
use crate::error::{CapabilityError, Result};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValuation {
    pub address: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub properties: Vec<PropertyValuation>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub address: String,
    pub status: PropertyStatus,
}

pub struct PortfolioAppraiser;

impl PortfolioAppraiser {
    /// Values every property and sums the estimates.
    ///
    /// Only properties that can be valued are accepted, so this never has to
    /// skip or reject an element at runtime. The only failure is a total that
    /// does not fit in a `Decimal`.
    pub fn appraise(properties: &[&dyn ValuableProperty]) -> Result<Valuation> {
        let properties: Vec<PropertyValuation> = properties
            .iter()
            .map(|property| PropertyValuation {
                address: property.address().to_string(),
                value: property.valuate(),
            })
            .collect();
        let total = properties
            .iter()
            .try_fold(Decimal::ZERO, |total, p| total.checked_add(p.value))
            .ok_or_else(|| {
                CapabilityError::Validation("Portfolio total exceeds the representable range".to_string())
            })?;

        Ok(Valuation { properties, total })
    }

    pub fn status_report(properties: &[&dyn Property]) -> Vec<StatusLine> {
        properties
            .iter()
            .map(|property| StatusLine {
                address: property.address().to_string(),
                status: property.status(),
            })
            .collect()
    }
}
