//! Identifier newtypes shared across portal entities.
//!
//! Every persisted record carries a string identifier. The newtypes keep the
//! id spaces from mixing (a ticket id never slots into a user lookup) while
//! staying plain strings on the wire. Seed collections use short readable
//! ids; freshly created records get a prefixed UUID.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Validation errors returned when constructing an entity id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// Id is empty after trimming whitespace.
    #[error("identifier must not be empty")]
    Empty,
    /// Id carries leading or trailing whitespace.
    #[error("identifier must not contain surrounding whitespace")]
    ContainsWhitespace,
}

macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        pub struct $name:ident(prefix = $prefix:literal);
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        #[serde(try_from = "String", into = "String")]
        #[schema(value_type = String)]
        pub struct $name(String);

        impl $name {
            /// Validate and construct an id from caller-supplied input.
            pub fn new(value: impl Into<String>) -> Result<Self, IdValidationError> {
                let raw = value.into();
                if raw.trim().is_empty() {
                    return Err(IdValidationError::Empty);
                }
                if raw.trim() != raw {
                    return Err(IdValidationError::ContainsWhitespace);
                }
                Ok(Self(raw))
            }

            /// Generate a fresh unique id.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4().simple()))
            }

            /// Borrow the id as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_entity_id! {
    /// Stable user identifier.
    pub struct UserId(prefix = "user");
}

define_entity_id! {
    /// Support ticket identifier.
    pub struct TicketId(prefix = "ticket");
}

define_entity_id! {
    /// Ticket message identifier.
    pub struct MessageId(prefix = "msg");
}

define_entity_id! {
    /// Document identifier, unique per upload and per broadcast recipient.
    pub struct DocumentId(prefix = "doc");
}

define_entity_id! {
    /// Tutorial identifier.
    pub struct TutorialId(prefix = "tut");
}

define_entity_id! {
    /// Expression-of-interest identifier.
    pub struct EnquiryId(prefix = "eoi");
}

define_entity_id! {
    /// Notification identifier.
    pub struct NotificationId(prefix = "noti");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_ids_are_rejected(#[case] value: &str) {
        let err = TicketId::new(value).expect_err("blank id rejected");
        assert_eq!(err, IdValidationError::Empty);
    }

    #[rstest]
    #[case(" ticket-1")]
    #[case("ticket-1 ")]
    fn padded_ids_are_rejected(#[case] value: &str) {
        let err = TicketId::new(value).expect_err("padded id rejected");
        assert_eq!(err, IdValidationError::ContainsWhitespace);
    }

    #[rstest]
    fn generated_ids_carry_the_prefix_and_are_unique() {
        let first = NotificationId::generate();
        let second = NotificationId::generate();
        assert!(first.as_str().starts_with("noti-"));
        assert_ne!(first, second);
    }

    #[rstest]
    fn serde_round_trips_as_a_plain_string() {
        let id = UserId::new("customer1").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise");
        assert_eq!(json, "\"customer1\"");
        let back: UserId = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
    }
}
