//! Advisor, client, and proposal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::WeightedFund;
use crate::constants::FULL_ALLOCATION;
use crate::funds::Fund;
use crate::profiling::{InvestmentGoal, RiskProfile};

/// A registered financial advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub id: String,
    pub name: String,
    /// AMFI Registration Number, e.g. "ARN-123456". Opaque to this crate.
    pub arn: String,
    /// Years of experience.
    pub experience: i32,
    /// Assets under management, in INR.
    pub aum: Decimal,
    pub email: String,
    pub phone: String,
    /// Unique onboarding link shared with prospective clients.
    pub client_onboarding_link: String,
    pub created_at: DateTime<Utc>,
}

/// Where a client currently is in the onboarding-to-investment journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JourneyStage {
    KycPending,
    ProfileCompleted,
    ProposalViewed,
    PaymentStarted,
    Invested,
}

/// A client of one advisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub advisor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub risk_profile: Option<RiskProfile>,
    /// Recorded from the questionnaire for display; not used in scoring
    /// beyond the profile already computed.
    pub investment_goal: Option<InvestmentGoal>,
    pub journey_stage: JourneyStage,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A fund with the advisor's overlay for one client: a personal note, the
/// selection flag, and the share of the client's investable amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedFund {
    #[serde(flatten)]
    pub fund: Fund,
    /// Client-visible note from the advisor.
    pub advisor_note: Option<String>,
    pub is_selected: bool,
    /// Percentage of the client's total investable amount.
    pub allocation: Decimal,
}

impl CuratedFund {
    pub fn new(fund: Fund, allocation: Decimal) -> Self {
        Self {
            fund,
            advisor_note: None,
            is_selected: true,
            allocation,
        }
    }
}

/// One curation session's output: the ordered fund selection shared with a
/// client. Append/replace-only; funds are never edited in place beyond
/// their allocation weight and note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProposal {
    pub id: String,
    pub client_id: String,
    pub advisor_id: String,
    pub curated_funds: Vec<CuratedFund>,
    pub created_at: DateTime<Utc>,
    pub viewed_at: Option<DateTime<Utc>>,
}

impl ClientProposal {
    pub fn new(client_id: &str, advisor_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            advisor_id: advisor_id.to_string(),
            curated_funds: Vec::new(),
            created_at: Utc::now(),
            viewed_at: None,
        }
    }

    /// Appends a fund to the curation. The first selection takes the whole
    /// portfolio; later ones start at zero for the advisor to rebalance.
    pub fn add_fund(&mut self, fund: Fund) {
        let allocation = if self.selected_funds().next().is_none() {
            FULL_ALLOCATION
        } else {
            Decimal::ZERO
        };
        self.curated_funds.push(CuratedFund::new(fund, allocation));
    }

    /// Replaces the curated list wholesale.
    pub fn replace_curated_funds(&mut self, curated_funds: Vec<CuratedFund>) {
        self.curated_funds = curated_funds;
    }

    /// Records the first time the client opened the proposal. Later calls
    /// keep the original timestamp.
    pub fn mark_viewed(&mut self) {
        if self.viewed_at.is_none() {
            self.viewed_at = Some(Utc::now());
        }
    }

    pub fn selected_funds(&self) -> impl Iterator<Item = &CuratedFund> {
        self.curated_funds.iter().filter(|f| f.is_selected)
    }

    /// The selected funds as allocator input.
    pub fn weighted_selections(&self) -> Vec<WeightedFund<'_>> {
        self.selected_funds()
            .map(|f| WeightedFund::new(&f.fund, f.allocation))
            .collect()
    }
}
