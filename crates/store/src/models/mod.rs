//! Domain models held by the store tables.
//!
//! Field names serialize in camelCase to match the snapshot documents.
//! Timestamps serialize as RFC 3339; on load, an ISO-8601 timestamp without
//! an offset is read as UTC.

mod cart;
mod customer;
mod message;
mod order;
mod product;

pub use cart::CartLine;
pub use customer::Customer;
pub use message::{ContactForm, Message};
pub use order::{Order, ShippingAddress};
pub use product::{Product, ProductPatch};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Accept RFC 3339 or an offset-less `YYYY-MM-DDTHH:MM:SS[.fff]` as UTC.
fn utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).map_err(serde::de::Error::custom)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2023, 11, 15, 10, 30, 0).unwrap();
        for input in [
            "2023-11-15T10:30:00Z",
            "2023-11-15T10:30:00.000Z",
            "2023-11-15T12:30:00+02:00",
            "2023-11-15T10:30:00",
            "2023-11-15T10:30:00.000",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("2023-11-15").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
