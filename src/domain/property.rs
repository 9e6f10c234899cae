//! Property roles.
//!
//! Each role is its own trait and each variant implements only the roles it can
//! honor. A sold property has a status but no market valuation, so it is a
//! [`Property`] and never a [`ValuableProperty`]:
//!
//! ```compile_fail
//! use solid_capabilities::application::valuation::PortfolioAppraiser;
//! use solid_capabilities::domain::property::SoldProperty;
//! use rust_decimal_macros::dec;
//!
//! let sold = SoldProperty::new("Carrer dels Tallers, 11", dec!(250000));
//! PortfolioAppraiser::appraise(&[&sold]);
//! ```
//!
//! A catalog listing has an address and an area but cannot be reformed:
//!
//! ```compile_fail
//! use solid_capabilities::application::reform::ReformPlanner;
//! use solid_capabilities::domain::property::CatalogProperty;
//! use rust_decimal_macros::dec;
//!
//! let mut listing = CatalogProperty::new("Carrer dels Tallers, 11", dec!(100));
//! ReformPlanner::complete(&mut [&mut listing]);
//! ```

use super::ports::SharedAvm;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyStatus {
    Available,
    Sold,
    Catalog,
    Investment,
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Catalog => "catalog",
            Self::Investment => "investment",
        };
        f.write_str(label)
    }
}

/// Anything that can be listed with an address and a status.
pub trait Property {
    fn address(&self) -> &str;
    fn status(&self) -> PropertyStatus;
}

/// A property with a market value.
pub trait ValuableProperty: Property {
    /// Current market estimate. Never negative.
    fn valuate(&self) -> Decimal;
}

pub trait BasicProperty {
    fn address(&self) -> &str;
    /// Floor area in m².
    fn area(&self) -> Decimal;
}

pub trait Reformable {
    fn mark_as_reformed(&mut self);
    fn is_reformed(&self) -> bool;
}

/// A property on the market, valued through an AVM.
#[derive(Clone)]
pub struct AvailableProperty {
    address: String,
    area: Decimal,
    avm: SharedAvm,
}

impl AvailableProperty {
    pub fn new(address: impl Into<String>, area: Decimal, avm: SharedAvm) -> Self {
        Self {
            address: address.into(),
            area: area.max(Decimal::ZERO),
            avm,
        }
    }

    pub fn area(&self) -> Decimal {
        self.area
    }
}

impl fmt::Debug for AvailableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailableProperty")
            .field("address", &self.address)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl Property for AvailableProperty {
    fn address(&self) -> &str {
        &self.address
    }

    fn status(&self) -> PropertyStatus {
        PropertyStatus::Available
    }
}

impl ValuableProperty for AvailableProperty {
    fn valuate(&self) -> Decimal {
        self.avm
            .estimate(&self.address, self.area)
            .max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoldProperty {
    address: String,
    sold_price: Decimal,
}

impl SoldProperty {
    pub fn new(address: impl Into<String>, sold_price: Decimal) -> Self {
        Self {
            address: address.into(),
            sold_price,
        }
    }

    pub fn sold_price(&self) -> Decimal {
        self.sold_price
    }
}

impl Property for SoldProperty {
    fn address(&self) -> &str {
        &self.address
    }

    fn status(&self) -> PropertyStatus {
        PropertyStatus::Sold
    }
}

/// A listing shown in the public catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProperty {
    address: String,
    area: Decimal,
}

impl CatalogProperty {
    pub fn new(address: impl Into<String>, area: Decimal) -> Self {
        Self {
            address: address.into(),
            area,
        }
    }
}

impl BasicProperty for CatalogProperty {
    fn address(&self) -> &str {
        &self.address
    }

    fn area(&self) -> Decimal {
        self.area
    }
}

/// A property bought to be reformed and resold.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentProperty {
    address: String,
    area: Decimal,
    reformed: bool,
}

impl InvestmentProperty {
    pub fn new(address: impl Into<String>, area: Decimal) -> Self {
        Self {
            address: address.into(),
            area,
            reformed: false,
        }
    }
}

impl BasicProperty for InvestmentProperty {
    fn address(&self) -> &str {
        &self.address
    }

    fn area(&self) -> Decimal {
        self.area
    }
}

impl Reformable for InvestmentProperty {
    fn mark_as_reformed(&mut self) {
        self.reformed = true;
    }

    fn is_reformed(&self) -> bool {
        self.reformed
    }
}
