//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! Identifiers are opaque strings. Seeded records carry readable slugs such as
//! `premium-saffron-threads`; records created at runtime get a UUID v4.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when parsing an identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is empty or only whitespace.
    #[error("identifier cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("identifier must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Maximum length of any identifier.
pub const MAX_ID_LENGTH: usize = 128;

/// Validate raw identifier text, returning the trimmed value.
///
/// # Errors
///
/// Returns `IdError::Empty` for blank input and `IdError::TooLong` when the
/// trimmed value exceeds [`MAX_ID_LENGTH`].
pub fn validate_id(raw: &str) -> Result<&str, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty);
    }
    if trimmed.len() > MAX_ID_LENGTH {
        return Err(IdError::TooLong { max: MAX_ID_LENGTH });
    }
    Ok(trimmed)
}

#[doc(hidden)]
#[must_use]
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` as a plain JSON string, validated on the way in
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `parse()` rejecting blank identifiers, `generate()` for fresh UUID-based ids
/// - `Display`, `FromStr`, `AsRef<str>` and `TryFrom<String>`
///
/// # Example
///
/// ```rust
/// # use saffron_core::define_id;
/// define_id!(ShelfId);
/// define_id!(BinId);
///
/// let shelf = ShelfId::parse("shelf-1").unwrap();
/// let bin = BinId::parse("shelf-1").unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = bin;
/// assert_eq!(shelf.as_str(), bin.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns an error if the input is blank or too long.
            pub fn parse(id: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                $crate::types::id::validate_id(id).map(|id| Self(id.to_owned()))
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::random_id())
            }

            /// Wrap an identifier known at compile time (seed data).
            #[must_use]
            pub fn from_static(id: &'static str) -> Self {
                debug_assert!(!id.trim().is_empty(), "static identifiers must not be blank");
                Self(id.to_owned())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::core::convert::TryFrom<String> for $name {
            type Error = $crate::types::id::IdError;

            fn try_from(id: String) -> ::core::result::Result<Self, Self::Error> {
                Self::parse(&id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);
define_id!(MessageId);
define_id!(CustomerId);

impl OrderId {
    /// Length of a generated order reference.
    pub const REFERENCE_LENGTH: usize = 12;

    /// Generate a short, uppercase alphanumeric order reference (e.g. `3FA85F6457B2`).
    ///
    /// References are random and short enough to read over the phone; the
    /// order ledger checks them for collisions before use.
    #[must_use]
    pub fn generate_reference() -> Self {
        let mut reference = Uuid::new_v4().simple().to_string().to_uppercase();
        reference.truncate(Self::REFERENCE_LENGTH);
        Self(reference)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id = ProductId::parse("  saffron-powder ").unwrap();
        assert_eq!(id.as_str(), "saffron-powder");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(ProductId::parse(""), Err(IdError::Empty));
        assert_eq!(ProductId::parse("   "), Err(IdError::Empty));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "x".repeat(MAX_ID_LENGTH + 1);
        assert!(matches!(
            OrderId::parse(&long),
            Err(IdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(MessageId::generate(), MessageId::generate());
    }

    #[test]
    fn test_order_reference_shape() {
        let reference = OrderId::generate_reference();
        assert_eq!(reference.as_str().len(), OrderId::REFERENCE_LENGTH);
        assert!(
            reference
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProductId::from_static("royal-saffron-collection");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"royal-saffron-collection\"");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
        let parsed: OrderId = serde_json::from_str("\"K3J9X2\"").unwrap();
        assert_eq!(parsed.to_string(), "K3J9X2");
    }
}
