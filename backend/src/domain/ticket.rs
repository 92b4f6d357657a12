//! Support ticket aggregate and its lifecycle types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use thiserror::Error;

use super::ids::{MessageId, TicketId, UserId};

/// Ticket lifecycle status.
///
/// Serialised with the display labels the portal has always stored, so
/// existing collections keep parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a ticket status label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ticket status: {value}")]
pub struct TicketStatusParseError {
    pub value: String,
}

impl FromStr for TicketStatus {
    type Err = TicketStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            "Closed" => Ok(Self::Closed),
            other => Err(TicketStatusParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Author of a ticket message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Customer,
    Admin,
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => f.write_str("customer"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// A single entry in a ticket conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: MessageId,
    pub sender: MessageSender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Customer support conversation thread.
///
/// ## Invariants
/// - `messages` is append-only; existing entries are never reordered or
///   rewritten.
/// - `customer_name` is denormalised from the owning user at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub customer_id: UserId,
    pub customer_name: String,
    pub subject: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<TicketMessage>,
    pub complaint_type: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

/// Request payload for opening a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub subject: String,
    pub message: String,
    pub customer_id: UserId,
    pub complaint_type: String,
    pub photo_urls: Vec<String>,
}

/// Request payload for appending a message to an existing ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub text: String,
    pub sender: MessageSender,
}
