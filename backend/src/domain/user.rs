//! User aggregate: profile, installed system, and owned documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{DocumentId, UserId};

/// Portal role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

/// Installed solar system details embedded in a customer profile.
///
/// Admin accounts carry an empty system (zero capacity, no commissioning
/// date); only customers have real installations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    /// Installed capacity in kilowatts.
    pub capacity: f64,
    pub inverter_details: String,
    pub inverter_serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commissioning_date: Option<DateTime<Utc>>,
}

impl SolarSystem {
    /// Empty system used for accounts without an installation.
    pub fn none() -> Self {
        Self {
            capacity: 0.0,
            inverter_details: String::new(),
            inverter_serial_number: String::new(),
            commissioning_date: None,
        }
    }
}

/// Document attached to a user profile, stored as an embeddable data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Application user.
///
/// ## Invariants
/// - `documents` is append-only in normal operation; entries are only
///   removed when an admin edits the whole profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub role: UserRole,
    pub full_name: String,
    pub nic_number: String,
    pub contact_number: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub address: String,
    pub installed_by: String,
    pub file_number: String,
    pub system: SolarSystem,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, UserRole::Customer)
    }
}

/// Request payload for creating a customer account.
///
/// The service assigns the id, fixes the role to customer, and starts the
/// document list empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub full_name: String,
    pub nic_number: String,
    pub contact_number: String,
    pub email: String,
    pub password: Option<String>,
    pub address: String,
    pub installed_by: String,
    pub file_number: String,
    pub system: SolarSystem,
}

/// Request payload for attaching a document; id and timestamp are assigned
/// by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn serialises_camel_case_and_omits_empty_optionals() {
        let user = User {
            id: UserId::new("admin1").expect("valid id"),
            role: UserRole::Admin,
            full_name: "Admin User".to_owned(),
            nic_number: String::new(),
            contact_number: String::new(),
            email: "admin@example.com".to_owned(),
            password: None,
            address: String::new(),
            installed_by: String::new(),
            file_number: String::new(),
            system: SolarSystem::none(),
            documents: Vec::new(),
        };

        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(
            value.get("fullName").and_then(Value::as_str),
            Some("Admin User")
        );
        assert_eq!(value.get("role").and_then(Value::as_str), Some("admin"));
        assert!(value.get("password").is_none());
        assert!(
            value
                .get("system")
                .and_then(|system| system.get("commissioningDate"))
                .is_none()
        );
    }

    #[rstest]
    fn deserialises_documents_missing_as_empty() {
        let raw = r#"{
            "id": "customer9",
            "role": "customer",
            "fullName": "Pat Q",
            "nicNumber": "1V",
            "contactNumber": "+94 77 000 0000",
            "email": "pat@example.com",
            "address": "Galle",
            "installedBy": "Archnix",
            "fileNumber": "FN-009",
            "system": {
                "capacity": 5.0,
                "inverterDetails": "Solis",
                "inverterSerialNumber": "SN-1"
            }
        }"#;

        let user: User = serde_json::from_str(raw).expect("deserialise");
        assert!(user.is_customer());
        assert!(user.documents.is_empty());
        assert!(user.system.commissioning_date.is_none());
    }
}
