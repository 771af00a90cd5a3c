//! Questionnaire scorer.
//!
//! Canonical strategy: the five-factor weighted score. Goal, horizon and
//! risk comfort contribute 1-3 points each, experience 0-2, and the
//! investment amount is recorded but not scored. Boundary totals resolve to
//! the higher risk tier.

use log::debug;

use super::profiling_model::{QuestionnaireAnswers, RiskAssessment, RiskProfile};

/// Total score at or above which the client is classified `Growth`.
pub const GROWTH_SCORE_THRESHOLD: u32 = 8;

/// Total score at or above which the client is classified `Balanced`.
pub const BALANCED_SCORE_THRESHOLD: u32 = 5;

/// Maps a completed questionnaire to a risk profile.
///
/// Deterministic and idempotent: identical answers always produce the same
/// assessment. A partial answer set yields `RiskAssessment::Incomplete`
/// listing the unanswered questions; it is never scored with implicit
/// zeroes.
pub fn score_risk_profile(answers: &QuestionnaireAnswers) -> RiskAssessment {
    let missing = answers.missing_questions();
    if !missing.is_empty() {
        return RiskAssessment::Incomplete { missing };
    }

    // All five answers are present past the guard above.
    let score = answers.investment_goal.map(|a| a.score()).unwrap_or(0)
        + answers.time_horizon.map(|a| a.score()).unwrap_or(0)
        + answers.risk_comfort.map(|a| a.score()).unwrap_or(0)
        + answers.experience.map(|a| a.score()).unwrap_or(0);

    let profile = if score >= GROWTH_SCORE_THRESHOLD {
        RiskProfile::Growth
    } else if score >= BALANCED_SCORE_THRESHOLD {
        RiskProfile::Balanced
    } else {
        RiskProfile::Conservative
    };

    debug!("Scored questionnaire: total {}, profile {}", score, profile);

    RiskAssessment::Profile { profile }
}
