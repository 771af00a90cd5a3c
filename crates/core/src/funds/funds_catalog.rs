//! Built-in seed catalog.
//!
//! The platform prototype ships without an AMFI feed; this snapshot stands
//! in for it in demos and tests. Figures are illustrative, not live data.

use rust_decimal::Decimal;

use super::funds_model::{AssetAllocation, Fund};
use crate::profiling::RiskProfile;

#[allow(clippy::too_many_arguments)]
fn fund(
    id: &str,
    name: &str,
    category: &str,
    risk_level: RiskProfile,
    fund_house: &str,
    returns: (f64, f64, f64),
    stats: (f64, f64, f64),
    expense_ratio: f64,
    fund_manager: &str,
    aum: i64,
    rating: u8,
    min_investment: i64,
    exit_load: &str,
    allocation: (i64, i64, i64),
) -> Fund {
    Fund {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        risk_level,
        returns_1y: Some(returns.0),
        returns_3y: returns.1,
        returns_5y: Some(returns.2),
        sharpe_ratio: Some(stats.0),
        beta: Some(stats.1),
        alpha: Some(stats.2),
        expense_ratio: Some(expense_ratio),
        fund_manager: Some(fund_manager.to_string()),
        fund_house: Some(fund_house.to_string()),
        aum: Some(Decimal::from(aum)),
        rating: Some(rating),
        min_investment: Some(Decimal::from(min_investment)),
        exit_load: Some(exit_load.to_string()),
        asset_allocation: AssetAllocation::new(
            Decimal::from(allocation.0),
            Decimal::from(allocation.1),
            Decimal::from(allocation.2),
        ),
    }
}

/// The full seed catalog, in catalog order.
pub fn seed_catalog() -> Vec<Fund> {
    use RiskProfile::{Balanced, Conservative, Growth};

    vec![
        fund(
            "fund_001",
            "HDFC Top 100 Fund",
            "Large Cap Equity",
            Growth,
            "HDFC",
            (22.5, 18.5, 16.2),
            (1.42, 0.95, 2.3),
            1.2,
            "Chirag Setalvad",
            12_500_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (95, 3, 2),
        ),
        fund(
            "fund_002",
            "SBI Bluechip Fund",
            "Large Cap Equity",
            Growth,
            "SBI",
            (20.8, 16.8, 15.5),
            (1.38, 0.92, 1.8),
            1.15,
            "R. Srinivasan",
            28_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (96, 2, 2),
        ),
        fund(
            "fund_003",
            "ICICI Prudential Bluechip Fund",
            "Large Cap Equity",
            Growth,
            "ICICI Prudential",
            (21.2, 17.5, 16.0),
            (1.40, 0.94, 2.0),
            1.18,
            "Sankaran Naren",
            35_000_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (97, 2, 1),
        ),
        fund(
            "fund_004",
            "Axis Midcap Fund",
            "Mid Cap Equity",
            Growth,
            "Axis",
            (28.5, 22.3, 19.8),
            (1.55, 1.12, 3.5),
            1.35,
            "Shreyash Devalkar",
            15_000_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (98, 1, 1),
        ),
        fund(
            "fund_005",
            "Kotak Emerging Equity Fund",
            "Mid Cap Equity",
            Growth,
            "Kotak",
            (26.8, 20.5, 18.2),
            (1.48, 1.08, 3.0),
            1.28,
            "Pankaj Tibrewal",
            22_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (97, 2, 1),
        ),
        fund(
            "fund_006",
            "Axis Long Term Equity Fund",
            "ELSS",
            Growth,
            "Axis",
            (24.3, 19.3, 17.8),
            (1.52, 0.98, 2.8),
            1.25,
            "Jinesh Gopani",
            32_000_000_000,
            5,
            500,
            "Lock-in period: 3 years",
            (95, 3, 2),
        ),
        fund(
            "fund_007",
            "Mirae Asset Tax Saver Fund",
            "ELSS",
            Growth,
            "Mirae Asset",
            (23.5, 18.8, 17.2),
            (1.48, 1.02, 2.5),
            1.22,
            "Neelesh Surana",
            18_000_000_000,
            4,
            500,
            "Lock-in period: 3 years",
            (96, 2, 2),
        ),
        fund(
            "fund_008",
            "ICICI Prudential Balanced Advantage",
            "Balanced Hybrid",
            Balanced,
            "ICICI Prudential",
            (16.2, 14.2, 12.8),
            (1.35, 0.75, 1.8),
            1.05,
            "Manish Banthia",
            45_000_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (65, 32, 3),
        ),
        fund(
            "fund_009",
            "HDFC Balanced Advantage Fund",
            "Balanced Hybrid",
            Balanced,
            "HDFC",
            (15.8, 13.8, 12.5),
            (1.32, 0.72, 1.5),
            1.0,
            "Gopal Agrawal",
            18_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (60, 37, 3),
        ),
        fund(
            "fund_010",
            "SBI Equity Hybrid Fund",
            "Aggressive Hybrid",
            Balanced,
            "SBI",
            (18.5, 15.2, 13.8),
            (1.38, 0.82, 2.0),
            1.12,
            "Sohini Andani",
            25_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (75, 22, 3),
        ),
        fund(
            "fund_011",
            "ICICI Prudential Corporate Bond Fund",
            "Corporate Bond",
            Conservative,
            "ICICI Prudential",
            (7.8, 7.2, 7.5),
            (1.12, 0.25, 0.8),
            0.65,
            "Manish Banthia",
            32_000_000_000,
            4,
            5000,
            "Nil",
            (0, 97, 3),
        ),
        fund(
            "fund_012",
            "SBI Magnum Gilt Fund",
            "Gilt",
            Conservative,
            "SBI",
            (9.5, 8.5, 8.2),
            (1.05, 0.15, 0.5),
            0.75,
            "Rajeev Radhakrishnan",
            8_500_000_000,
            3,
            5000,
            "Nil",
            (0, 98, 2),
        ),
        fund(
            "fund_013",
            "HDFC Short Term Debt Fund",
            "Short Duration",
            Conservative,
            "HDFC",
            (7.2, 6.8, 7.0),
            (1.18, 0.18, 0.6),
            0.55,
            "Anil Bamboli",
            15_000_000_000,
            4,
            5000,
            "Nil",
            (0, 96, 4),
        ),
        fund(
            "fund_014",
            "UTI Banking & Financial Services",
            "Sectoral - Banking",
            Growth,
            "UTI",
            (25.2, 19.2, 16.5),
            (1.48, 1.15, 3.2),
            1.4,
            "Ankit Agarwal",
            12_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (97, 2, 1),
        ),
        fund(
            "fund_015",
            "ICICI Prudential Technology Fund",
            "Sectoral - Technology",
            Growth,
            "ICICI Prudential",
            (32.5, 24.8, 21.2),
            (1.62, 1.22, 4.0),
            1.45,
            "Rajat Chandak",
            9_500_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (98, 1, 1),
        ),
        fund(
            "fund_016",
            "SBI Healthcare Opportunities Fund",
            "Sectoral - Healthcare",
            Growth,
            "SBI",
            (28.8, 22.5, 19.8),
            (1.58, 1.18, 3.8),
            1.42,
            "R. Srinivasan",
            7_500_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (97, 2, 1),
        ),
        fund(
            "fund_017",
            "HDFC Index Fund - Nifty 50",
            "Index - Nifty 50",
            Growth,
            "HDFC",
            (20.2, 16.5, 14.8),
            (1.35, 1.0, 0.0),
            0.25,
            "Anil Bamboli",
            42_000_000_000,
            4,
            5000,
            "Nil",
            (99, 0, 1),
        ),
        fund(
            "fund_018",
            "UTI Nifty Index Fund",
            "Index - Nifty 50",
            Growth,
            "UTI",
            (20.0, 16.3, 14.5),
            (1.33, 1.0, 0.0),
            0.22,
            "Sharwan Kumar Goyal",
            35_000_000_000,
            4,
            5000,
            "Nil",
            (99, 0, 1),
        ),
        fund(
            "fund_019",
            "Axis Small Cap Fund",
            "Small Cap Equity",
            Growth,
            "Axis",
            (35.2, 26.8, 23.5),
            (1.65, 1.28, 4.5),
            1.48,
            "Anupam Tiwari",
            8_500_000_000,
            5,
            5000,
            "1% if redeemed within 1 year",
            (98, 1, 1),
        ),
        fund(
            "fund_020",
            "SBI Small Cap Fund",
            "Small Cap Equity",
            Growth,
            "SBI",
            (32.8, 24.5, 21.2),
            (1.58, 1.25, 4.2),
            1.45,
            "R. Srinivasan",
            12_000_000_000,
            4,
            5000,
            "1% if redeemed within 1 year",
            (97, 2, 1),
        ),
    ]
}
