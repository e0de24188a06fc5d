//! Contact/support message types.

use chrono::{DateTime, Utc};
use saffron_core::{Email, MessageId, MessageStatus};
use serde::{Deserialize, Serialize};

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Sender's name.
    pub user: String,
    /// Sender's email.
    pub email: Email,
    pub subject: String,
    /// Message body.
    pub content: String,
    #[serde(deserialize_with = "super::utc_timestamp")]
    pub date: DateTime<Utc>,
    pub status: MessageStatus,
}

impl Message {
    /// Case-insensitive substring match over sender, subject and body.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.user.to_lowercase().contains(needle)
            || self.subject.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub user: String,
    pub email: String,
    pub subject: String,
    pub content: String,
}
