use crate::application::portfolio::Portfolio;
use crate::domain::ports::SharedAvm;
use crate::domain::property::{AvailableProperty, CatalogProperty, InvestmentProperty, SoldProperty};
use crate::error::{CapabilityError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// Largest area, in m², a portfolio row may declare.
pub const MAX_AREA: Decimal = dec!(1000000);

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Available,
    Sold,
    Catalog,
    Investment,
}

/// One row of a portfolio file: `kind,address,area,sold_price`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PropertyRecord {
    pub kind: PropertyKind,
    pub address: String,
    pub area: Option<Decimal>,
    pub sold_price: Option<Decimal>,
}

impl PropertyRecord {
    /// Builds the property this row describes and files it in `portfolio`.
    pub fn add_to(self, portfolio: &mut Portfolio, avm: &SharedAvm) -> Result<()> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(CapabilityError::Validation(
                "Property address must not be empty".to_string(),
            ));
        }

        match self.kind {
            PropertyKind::Available => {
                let area = required_area(self.area, address)?;
                portfolio.add_available(AvailableProperty::new(address, area, avm.clone()));
            }
            PropertyKind::Sold => {
                let price = self.sold_price.ok_or_else(|| {
                    CapabilityError::Validation(format!("Sold property '{address}' needs a sold_price"))
                })?;
                portfolio.add_sold(SoldProperty::new(address, price));
            }
            PropertyKind::Catalog => {
                let area = required_area(self.area, address)?;
                portfolio.add_catalog(CatalogProperty::new(address, area));
            }
            PropertyKind::Investment => {
                let area = required_area(self.area, address)?;
                portfolio.add_investment(InvestmentProperty::new(address, area));
            }
        }
        Ok(())
    }
}

fn required_area(area: Option<Decimal>, address: &str) -> Result<Decimal> {
    match area {
        Some(area) if area > MAX_AREA => Err(CapabilityError::Validation(format!(
            "Property '{address}' area exceeds {MAX_AREA} m²"
        ))),
        Some(area) if area > Decimal::ZERO => Ok(area),
        Some(_) => Err(CapabilityError::Validation(format!(
            "Property '{address}' must have a positive area"
        ))),
        None => Err(CapabilityError::Validation(format!(
            "Property '{address}' needs an area"
        ))),
    }
}

/// Reads portfolio rows from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths, so
/// trailing optional columns may be omitted.
pub struct PropertyReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PropertyReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows; a malformed row yields an error and reading continues.
    pub fn records(self) -> impl Iterator<Item = Result<PropertyRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CapabilityError::from))
    }

    /// Builds a portfolio from every valid row.
    ///
    /// Rows that fail to parse or validate are skipped and returned alongside it.
    pub fn load(self, avm: &SharedAvm) -> (Portfolio, Vec<CapabilityError>) {
        let mut portfolio = Portfolio::new();
        let mut skipped = Vec::new();

        for record in self.records() {
            if let Err(e) = record.and_then(|record| record.add_to(&mut portfolio, avm)) {
                warn!(error = %e, "skipping property row");
                skipped.push(e);
            }
        }

        (portfolio, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::avm::TableAvm;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_reader_valid_stream() {
        let data = "kind, address, area, sold_price\n\
                    available, Tallers 11, 100,\n\
                    sold, Gran Via 1, , 320000.50";
        let records: Vec<Result<PropertyRecord>> = PropertyReader::new(data.as_bytes()).records().collect();

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.kind, PropertyKind::Available);
        assert_eq!(first.address, "Tallers 11");
        assert_eq!(first.area, Some(dec!(100)));
        assert_eq!(first.sold_price, None);

        let second = records[1].as_ref().unwrap();
        assert_eq!(second.kind, PropertyKind::Sold);
        assert_eq!(second.sold_price, Some(dec!(320000.50)));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "kind, address, area, sold_price\nmansion, Tallers 11, 100,\ncatalog, Balmes 5, 75";
        let records: Vec<Result<PropertyRecord>> = PropertyReader::new(data.as_bytes()).records().collect();

        assert!(records[0].is_err());
        assert_eq!(records[1].as_ref().unwrap().kind, PropertyKind::Catalog);
    }

    #[test]
    fn test_add_to_validates_required_columns() {
        let avm: SharedAvm = Arc::new(TableAvm::new(dec!(1000)));
        let mut portfolio = Portfolio::new();

        let missing_area = PropertyRecord {
            kind: PropertyKind::Available,
            address: "Tallers 11".to_string(),
            area: None,
            sold_price: None,
        };
        assert!(matches!(
            missing_area.add_to(&mut portfolio, &avm),
            Err(CapabilityError::Validation(_))
        ));

        let missing_price = PropertyRecord {
            kind: PropertyKind::Sold,
            address: "Gran Via 1".to_string(),
            area: Some(dec!(80)),
            sold_price: None,
        };
        assert!(matches!(
            missing_price.add_to(&mut portfolio, &avm),
            Err(CapabilityError::Validation(_))
        ));

        let blank_address = PropertyRecord {
            kind: PropertyKind::Catalog,
            address: "  ".to_string(),
            area: Some(dec!(80)),
            sold_price: None,
        };
        assert!(blank_address.add_to(&mut portfolio, &avm).is_err());

        let valid = PropertyRecord {
            kind: PropertyKind::Investment,
            address: "Pelai 2".to_string(),
            area: Some(dec!(60)),
            sold_price: None,
        };
        valid.add_to(&mut portfolio, &avm).unwrap();
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_add_to_rejects_area_above_maximum() {
        let avm: SharedAvm = Arc::new(TableAvm::new(dec!(1000)));
        let mut portfolio = Portfolio::new();

        let oversized = PropertyRecord {
            kind: PropertyKind::Available,
            address: "Raval 3".to_string(),
            area: Some(dec!(79228162514264337593543950.0)),
            sold_price: None,
        };
        let err = oversized.add_to(&mut portfolio, &avm).unwrap_err();
        assert!(matches!(&err, CapabilityError::Validation(msg) if msg.contains("exceeds")));
        assert!(portfolio.is_empty());

        let at_limit = PropertyRecord {
            kind: PropertyKind::Catalog,
            address: "Balmes 5".to_string(),
            area: Some(MAX_AREA),
            sold_price: None,
        };
        at_limit.add_to(&mut portfolio, &avm).unwrap();
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_load_keeps_valid_rows_and_returns_skipped() {
        let avm: SharedAvm = Arc::new(TableAvm::new(dec!(1000)));
        let data = "kind,address,area,sold_price\n\
                    available,Raval 3,40,\n\
                    available,Raval 5,10000000000000000000000000.0,\n\
                    mansion,Somewhere 1,500,\n\
                    sold,Gran Via 1,,320000";
        let (portfolio, skipped) = PropertyReader::new(data.as_bytes()).load(&avm);

        assert_eq!(portfolio.len(), 2);
        assert_eq!(skipped.len(), 2);
        assert!(matches!(skipped[0], CapabilityError::Validation(_)));
        assert!(matches!(skipped[1], CapabilityError::Csv(_)));
        assert_eq!(portfolio.report().unwrap().total, dec!(40000));
    }
}
