//! The flattened, self-contained render input.
//!
//! `ProposalData` is produced immediately before rendering and is not
//! persisted; everything the printed document needs travels inside it as
//! display-ready values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundcraft_core::proposals::{Advisor, Client, ClientProposal, CuratedFund};

/// The preparing advisor, as printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorInfo {
    pub name: String,
    pub arn: String,
    pub experience: i32,
    pub email: String,
    pub phone: String,
    pub aum: Decimal,
}

/// The receiving client, as printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub risk_profile: String,
    pub investment_goal: String,
}

/// One selected fund reduced to the table columns the proposal prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundLine {
    pub name: String,
    pub category: String,
    pub returns_3y: f64,
    pub risk_level: String,
    pub expense_ratio: Option<f64>,
    pub min_investment: Option<Decimal>,
}

impl FundLine {
    fn from_curated(curated: &CuratedFund) -> Self {
        Self {
            name: curated.fund.name.clone(),
            category: curated.fund.category.clone(),
            returns_3y: curated.fund.returns_3y,
            risk_level: curated.fund.risk_level.to_string(),
            expense_ratio: curated.fund.expense_ratio,
            min_investment: curated.fund.min_investment,
        }
    }
}

/// Complete render input for one proposal document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalData {
    pub advisor: AdvisorInfo,
    pub client: ClientInfo,
    pub selected_funds: Vec<FundLine>,
    pub advisor_note: Option<String>,
    pub proposal_date: NaiveDate,
}

impl ProposalData {
    /// Flattens core entities into the render input. Only the proposal's
    /// selected funds are carried over, in curation order.
    pub fn assemble(
        advisor: &Advisor,
        client: &Client,
        proposal: &ClientProposal,
        advisor_note: Option<String>,
        proposal_date: NaiveDate,
    ) -> Self {
        Self {
            advisor: AdvisorInfo {
                name: advisor.name.clone(),
                arn: advisor.arn.clone(),
                experience: advisor.experience,
                email: advisor.email.clone(),
                phone: advisor.phone.clone(),
                aum: advisor.aum,
            },
            client: ClientInfo {
                name: client.name.clone(),
                email: client.email.clone(),
                phone: client.phone.clone(),
                risk_profile: client
                    .risk_profile
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "Not assessed".to_string()),
                investment_goal: client
                    .investment_goal
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "Not specified".to_string()),
            },
            selected_funds: proposal.selected_funds().map(FundLine::from_curated).collect(),
            advisor_note,
            proposal_date,
        }
    }
}
