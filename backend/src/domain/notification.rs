//! Per-user notification records fanned out from portal events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{NotificationId, UserId};

/// Category tag attached to each notification, used by clients to pick an
/// icon and a deep-link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Ticket,
    Eoi,
    Document,
    General,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ticket => f.write_str("ticket"),
            Self::Eoi => f.write_str("eoi"),
            Self::Document => f.write_str("document"),
            Self::General => f.write_str("general"),
        }
    }
}

/// A single notification addressed to one user.
///
/// `related_id` carries the identifier of the entity the notification is
/// about (ticket or enquiry id) when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
