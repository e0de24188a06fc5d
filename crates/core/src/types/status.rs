//! Status enums for orders and support messages.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a status label is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} status: {value}")]
pub struct StatusError {
    /// Which status family was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Order fulfilment status.
///
/// The natural progression is `Processing -> Shipped -> Delivered`, but the
/// ledger accepts any overwrite; see [`OrderStatus::is_regression_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// All statuses in fulfilment order.
    pub const ALL: [Self; 3] = [Self::Processing, Self::Shipped, Self::Delivered];

    const fn stage(self) -> u8 {
        match self {
            Self::Processing => 0,
            Self::Shipped => 1,
            Self::Delivered => 2,
        }
    }

    /// Whether moving from `self` to `next` goes backwards in fulfilment.
    #[must_use]
    pub const fn is_regression_to(self, next: Self) -> bool {
        next.stage() < self.stage()
    }

    /// The status label as stored in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusError {
                kind: "order",
                value: s.to_owned(),
            })
    }
}

/// Support message status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl MessageStatus {
    /// All message statuses.
    pub const ALL: [Self; 3] = [Self::New, Self::Read, Self::Replied];

    /// The status label as stored in snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Read => "Read",
            Self::Replied => "Replied",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusError {
                kind: "message",
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default_is_processing() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_order_status_regression() {
        assert!(OrderStatus::Shipped.is_regression_to(OrderStatus::Processing));
        assert!(OrderStatus::Delivered.is_regression_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Processing.is_regression_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.is_regression_to(OrderStatus::Shipped));
    }

    #[test]
    fn test_order_status_parse_is_case_insensitive() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        let err = "lost".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.kind, "order");
    }

    #[test]
    fn test_status_serde_labels() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"Delivered\""
        );
        let parsed: MessageStatus = serde_json::from_str("\"Replied\"").unwrap();
        assert_eq!(parsed, MessageStatus::Replied);
    }

    #[test]
    fn test_message_status_parse() {
        assert_eq!("READ".parse::<MessageStatus>().unwrap(), MessageStatus::Read);
        assert!("archived".parse::<MessageStatus>().is_err());
    }
}
