//! Risk profiling module - questionnaire model and scorer.

mod profiling_model;
mod profiling_service;


// Re-export the public interface
pub use profiling_model::{
    ExperienceLevel, InvestmentAmount, InvestmentGoal, Question, QuestionnaireAnswers,
    RiskAssessment, RiskComfort, RiskProfile, TimeHorizon,
};
pub use profiling_service::{score_risk_profile, BALANCED_SCORE_THRESHOLD, GROWTH_SCORE_THRESHOLD};
