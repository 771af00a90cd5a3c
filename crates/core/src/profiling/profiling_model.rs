//! Questionnaire and risk profile domain models.
//!
//! Every question is a closed enum with the wire tokens the onboarding UI
//! submits, so an unrecognized answer cannot slip through as a silent zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier client risk classification, ordered by increasing risk
/// appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Growth,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskProfile::Conservative => write!(f, "Conservative"),
            RiskProfile::Balanced => write!(f, "Balanced"),
            RiskProfile::Growth => write!(f, "Growth"),
        }
    }
}

/// Primary investment goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentGoal {
    #[serde(rename = "wealth-creation")]
    WealthCreation,
    #[serde(rename = "retirement")]
    Retirement,
    #[serde(rename = "savings")]
    Savings,
}

impl InvestmentGoal {
    pub(crate) fn score(self) -> u32 {
        match self {
            InvestmentGoal::WealthCreation => 3,
            InvestmentGoal::Retirement => 2,
            InvestmentGoal::Savings => 1,
        }
    }
}

impl fmt::Display for InvestmentGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestmentGoal::WealthCreation => write!(f, "Long-term wealth creation"),
            InvestmentGoal::Retirement => write!(f, "Retirement planning"),
            InvestmentGoal::Savings => write!(f, "Regular savings"),
        }
    }
}

/// How long the client can stay invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeHorizon {
    #[serde(rename = "5plus")]
    OverFiveYears,
    #[serde(rename = "3-5")]
    ThreeToFiveYears,
    #[serde(rename = "1-3")]
    OneToThreeYears,
}

impl TimeHorizon {
    pub(crate) fn score(self) -> u32 {
        match self {
            TimeHorizon::OverFiveYears => 3,
            TimeHorizon::ThreeToFiveYears => 2,
            TimeHorizon::OneToThreeYears => 1,
        }
    }
}

/// Comfort with market fluctuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskComfort {
    High,
    Medium,
    Low,
}

impl RiskComfort {
    pub(crate) fn score(self) -> u32 {
        match self {
            RiskComfort::High => 3,
            RiskComfort::Medium => 2,
            RiskComfort::Low => 1,
        }
    }
}

/// Prior mutual-fund experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Experienced,
    Some,
    None,
}

impl ExperienceLevel {
    pub(crate) fn score(self) -> u32 {
        match self {
            ExperienceLevel::Experienced => 2,
            ExperienceLevel::Some => 1,
            ExperienceLevel::None => 0,
        }
    }
}

/// Planned initial investment bracket. Collected for the client record and
/// display only; it does not contribute to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentAmount {
    High,
    Medium,
    Low,
}

/// Identifies one question of the onboarding questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Question {
    InvestmentGoal,
    TimeHorizon,
    RiskComfort,
    Experience,
    InvestmentAmount,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::InvestmentGoal => write!(f, "investment goal"),
            Question::TimeHorizon => write!(f, "time horizon"),
            Question::RiskComfort => write!(f, "risk comfort"),
            Question::Experience => write!(f, "experience"),
            Question::InvestmentAmount => write!(f, "investment amount"),
        }
    }
}

/// One selected option per question; `None` until the client answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    pub investment_goal: Option<InvestmentGoal>,
    pub time_horizon: Option<TimeHorizon>,
    pub risk_comfort: Option<RiskComfort>,
    pub experience: Option<ExperienceLevel>,
    pub investment_amount: Option<InvestmentAmount>,
}

impl QuestionnaireAnswers {
    /// Questions still awaiting an answer, in questionnaire order.
    pub fn missing_questions(&self) -> Vec<Question> {
        let mut missing = Vec::new();
        if self.investment_goal.is_none() {
            missing.push(Question::InvestmentGoal);
        }
        if self.time_horizon.is_none() {
            missing.push(Question::TimeHorizon);
        }
        if self.risk_comfort.is_none() {
            missing.push(Question::RiskComfort);
        }
        if self.experience.is_none() {
            missing.push(Question::Experience);
        }
        if self.investment_amount.is_none() {
            missing.push(Question::InvestmentAmount);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_questions().is_empty()
    }
}

/// Outcome of scoring a questionnaire.
///
/// An incomplete answer set never yields a profile; the caller is expected
/// to keep prompting for the missing questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum RiskAssessment {
    Profile { profile: RiskProfile },
    Incomplete { missing: Vec<Question> },
}

impl RiskAssessment {
    /// The computed profile, if scoring completed.
    pub fn profile(&self) -> Option<RiskProfile> {
        match self {
            RiskAssessment::Profile { profile } => Some(*profile),
            RiskAssessment::Incomplete { .. } => None,
        }
    }
}
