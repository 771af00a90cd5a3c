//! Proposals module - advisor/client models, curation, and sharing.

mod proposals_model;
mod proposals_service;
mod sharing;


// Re-export the public interface
pub use proposals_model::{Advisor, Client, ClientProposal, CuratedFund, JourneyStage};
pub use proposals_service::{ProposalReview, ProposalService, ProposalServiceTrait};
pub use sharing::{
    call_link, email_compose_link, follow_up_email, sms_reminder_link, whatsapp_reminder_link,
    EmailMessage,
};
