//! Demo customer account.

use saffron_core::{CustomerId, Email};
use serde::{Deserialize, Serialize};

/// A signed-in shopper. There is no password; any valid email signs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// Display name, derived from the email's local part.
    pub name: String,
    pub email: Email,
}

impl Customer {
    /// Fallback display name when none can be derived.
    pub const DEFAULT_NAME: &'static str = "Demo User";

    /// Build the demo customer for `email`.
    #[must_use]
    pub fn for_email(email: Email) -> Self {
        let name = match email.local_part() {
            "" => Self::DEFAULT_NAME.to_owned(),
            local => local.to_owned(),
        };
        Self {
            id: CustomerId::from_static("1"),
            name,
            email,
        }
    }
}
