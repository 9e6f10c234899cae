use crate::domain::ports::AutomatedValuationModel;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone)]
struct RateRule {
    keyword: String,
    rate: Decimal,
}

/// Rate-table valuation model.
///
/// The price per m² comes from the first rule whose keyword appears in the
/// address (case-insensitive), or from the default rate. Estimates are rounded
/// to cents, never negative, and saturate at `Decimal::MAX`.
#[derive(Debug, Clone)]
pub struct TableAvm {
    default_rate: Decimal,
    rules: Vec<RateRule>,
}

impl TableAvm {
    pub fn new(default_rate: Decimal) -> Self {
        Self {
            default_rate,
            rules: Vec::new(),
        }
    }

    pub fn with_rate(mut self, keyword: &str, rate: Decimal) -> Self {
        self.rules.push(RateRule {
            keyword: keyword.to_lowercase(),
            rate,
        });
        self
    }

    /// Rates used by the command line tool.
    pub fn barcelona() -> Self {
        Self::new(dec!(3500))
            .with_rate("eixample", dec!(5600))
            .with_rate("gràcia", dec!(5200))
            .with_rate("gracia", dec!(5200))
            .with_rate("tallers", dec!(5000))
            .with_rate("raval", dec!(4100))
            .with_rate("sants", dec!(3900))
            .with_rate("nou barris", dec!(2700))
    }

    pub fn rate_for(&self, address: &str) -> Decimal {
        let address = address.to_lowercase();
        self.rules
            .iter()
            .find(|rule| address.contains(&rule.keyword))
            .map_or(self.default_rate, |rule| rule.rate)
    }
}

impl AutomatedValuationModel for TableAvm {
    fn estimate(&self, address: &str, area: Decimal) -> Decimal {
        self.rate_for(address)
            .saturating_mul(area)
            .round_dp(2)
            .max(Decimal::ZERO)
    }
}
