//! Fund catalog domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::profiling::RiskProfile;

/// A single fund's internal composition, in percent. Components default to
/// zero when the fund house does not publish them; the total must not
/// exceed 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    #[serde(default)]
    pub equity: Decimal,
    #[serde(default)]
    pub debt: Decimal,
    #[serde(default)]
    pub cash: Decimal,
}

impl AssetAllocation {
    pub fn new(equity: Decimal, debt: Decimal, cash: Decimal) -> Self {
        Self { equity, debt, cash }
    }

    pub fn total(&self) -> Decimal {
        self.equity + self.debt + self.cash
    }
}

/// One investable instrument. Immutable reference data: never mutated by
/// callers, only read and copied into curated selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub id: String,
    pub name: String,
    /// Free-text classification, e.g. "Large Cap Equity".
    pub category: String,
    /// The risk profile this fund is suited for.
    pub risk_level: RiskProfile,
    pub returns_1y: Option<f64>,
    /// 3-year annualized return in percent. The only mandatory window.
    pub returns_3y: f64,
    pub returns_5y: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub beta: Option<f64>,
    pub alpha: Option<f64>,
    /// Annual fee in percent.
    pub expense_ratio: Option<f64>,
    pub fund_manager: Option<String>,
    /// AMC name.
    pub fund_house: Option<String>,
    /// Fund assets under management, in INR.
    pub aum: Option<Decimal>,
    /// Star rating, 0-5.
    pub rating: Option<u8>,
    pub min_investment: Option<Decimal>,
    pub exit_load: Option<String>,
    #[serde(default)]
    pub asset_allocation: AssetAllocation,
}

/// In-memory filter over the catalog, mirroring the curation screen's
/// controls. Every field is optional; an empty query matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundQuery {
    /// Case-insensitive substring over name, fund house and category.
    pub search: Option<String>,
    pub category: Option<String>,
    pub risk_level: Option<RiskProfile>,
    pub fund_house: Option<String>,
    pub min_returns_3y: Option<f64>,
    pub max_expense_ratio: Option<f64>,
}

impl FundQuery {
    pub fn matches(&self, fund: &Fund) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let house = fund.fund_house.as_deref().unwrap_or("");
            let haystack = format!(
                "{} {} {}",
                fund.name.to_lowercase(),
                house.to_lowercase(),
                fund.category.to_lowercase()
            );
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !fund.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(risk_level) = self.risk_level {
            if fund.risk_level != risk_level {
                return false;
            }
        }
        if let Some(fund_house) = &self.fund_house {
            match &fund.fund_house {
                Some(house) if house.eq_ignore_ascii_case(fund_house) => {}
                _ => return false,
            }
        }
        if let Some(min_returns) = self.min_returns_3y {
            if fund.returns_3y < min_returns {
                return false;
            }
        }
        if let Some(max_expense) = self.max_expense_ratio {
            if fund.expense_ratio.unwrap_or(0.0) > max_expense {
                return false;
            }
        }
        true
    }
}
