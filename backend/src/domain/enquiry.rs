//! Expressions of interest: the public lead-capture record preceding a
//! customer account.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::EnquiryId;

/// Resolution state of an enquiry. Pending enquiries can transition to
/// approved or rejected; resolved states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

/// Prospective-customer contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: EnquiryId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub submitted_at: DateTime<Utc>,
    pub status: EnquiryStatus,
}

/// Request payload for a public enquiry submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
}
