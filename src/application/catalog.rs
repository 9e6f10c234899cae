use crate::domain::property::BasicProperty;
use rust_decimal::Decimal;

/// Public listing of properties. Needs addresses and areas, nothing more.
pub struct Catalog {
    properties: Vec<Box<dyn BasicProperty + Send + Sync>>,
}

impl Catalog {
    pub fn new(properties: Vec<Box<dyn BasicProperty + Send + Sync>>) -> Self {
        Self { properties }
    }

    pub fn addresses(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.address()).collect()
    }

    pub fn total_area(&self) -> Decimal {
        self.properties.iter().map(|p| p.area()).sum()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
