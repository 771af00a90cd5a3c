//! Sharing content for proposals.
//!
//! The core produces message text and deep-links only; opening them is the
//! host's concern.

use serde::{Deserialize, Serialize};

use super::proposals_model::{Advisor, Client};

/// Prefilled follow-up email content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// WhatsApp deep-link with a prefilled proposal reminder.
pub fn whatsapp_reminder_link(client: &Client) -> String {
    let message = format!(
        "Hi {}, this is a reminder about your investment proposal. \
         Please review and let me know if you have any questions.",
        client.name
    );
    format!(
        "https://wa.me/{}?text={}",
        digits_only(&client.phone),
        urlencoding::encode(&message)
    )
}

/// SMS deep-link with a shorter reminder.
pub fn sms_reminder_link(client: &Client) -> String {
    let message = format!(
        "Hi {}, gentle reminder about your investment proposal. \
         Please review when convenient.",
        client.name
    );
    format!(
        "sms:{}?body={}",
        digits_only(&client.phone),
        urlencoding::encode(&message)
    )
}

/// Dialer deep-link. Keeps a leading `+` for international numbers.
pub fn call_link(client: &Client) -> String {
    let phone: String = client
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", phone)
}

/// Follow-up email signed with the advisor's name and ARN.
pub fn follow_up_email(client: &Client, advisor: &Advisor) -> EmailMessage {
    EmailMessage {
        subject: "Follow-up: Investment Proposal".to_string(),
        body: format!(
            "Dear {},\n\nI wanted to follow up on the investment proposal I shared with you.\n\n\
             Please let me know if you have any questions or would like to discuss further.\n\n\
             Best regards,\n{}\nARN: {}",
            client.name, advisor.name, advisor.arn
        ),
    }
}

/// `mailto:` deep-link for the follow-up email.
pub fn email_compose_link(client: &Client, advisor: &Advisor) -> String {
    let message = follow_up_email(client, advisor);
    format!(
        "mailto:{}?subject={}&body={}",
        client.email,
        urlencoding::encode(&message.subject),
        urlencoding::encode(&message.body)
    )
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
