use super::valuation::PortfolioAppraiser;
use crate::domain::property::{
    AvailableProperty, BasicProperty, CatalogProperty, InvestmentProperty, Property,
    PropertyStatus, Reformable, SoldProperty, ValuableProperty,
};
use crate::error::Result;
use rust_decimal::Decimal;

/// A mixed set of properties, kept in one collection per role set.
///
/// Each collection is handed to the consumer that needs exactly its roles, so
/// no code below has to ask a property what it is.
#[derive(Debug, Default)]
pub struct Portfolio {
    available: Vec<AvailableProperty>,
    sold: Vec<SoldProperty>,
    catalog: Vec<CatalogProperty>,
    investment: Vec<InvestmentProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub address: String,
    pub status: PropertyStatus,
    pub valuation: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioReport {
    pub rows: Vec<ReportRow>,
    pub total: Decimal,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_available(&mut self, property: AvailableProperty) {
        self.available.push(property);
    }

    pub fn add_sold(&mut self, property: SoldProperty) {
        self.sold.push(property);
    }

    pub fn add_catalog(&mut self, property: CatalogProperty) {
        self.catalog.push(property);
    }

    pub fn add_investment(&mut self, property: InvestmentProperty) {
        self.investment.push(property);
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.sold.len() + self.catalog.len() + self.investment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn investments_mut(&mut self) -> impl Iterator<Item = &mut dyn Reformable> {
        self.investment
            .iter_mut()
            .map(|property| property as &mut dyn Reformable)
    }

    /// Report rows grouped as available, sold, catalog, investment; input order within each group.
    pub fn report(&self) -> Result<PortfolioReport> {
        let valuable: Vec<&dyn ValuableProperty> = self
            .available
            .iter()
            .map(|property| property as &dyn ValuableProperty)
            .collect();
        let valuation = PortfolioAppraiser::appraise(&valuable)?;

        let mut rows: Vec<ReportRow> = valuation
            .properties
            .into_iter()
            .map(|estimate| ReportRow {
                address: estimate.address,
                status: PropertyStatus::Available,
                valuation: Some(estimate.value),
            })
            .collect();

        let sold: Vec<&dyn Property> = self.sold.iter().map(|p| p as &dyn Property).collect();
        rows.extend(
            PortfolioAppraiser::status_report(&sold)
                .into_iter()
                .map(|line| ReportRow {
                    address: line.address,
                    status: line.status,
                    valuation: None,
                }),
        );

        rows.extend(basic_rows(&self.catalog, PropertyStatus::Catalog));
        rows.extend(basic_rows(&self.investment, PropertyStatus::Investment));

        Ok(PortfolioReport {
            rows,
            total: valuation.total,
        })
    }
}

fn basic_rows<P: BasicProperty>(properties: &[P], status: PropertyStatus) -> Vec<ReportRow> {
    properties
        .iter()
        .map(|property| ReportRow {
            address: property.address().to_string(),
            status,
            valuation: None,
        })
        .collect()
}
