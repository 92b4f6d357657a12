//! Static warranty catalogue served read-only to customers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One warranted component and the cover period measured from the system's
/// commissioning date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyItem {
    pub name: String,
    pub total_duration_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The cover terms offered on every installation.
#[must_use]
pub fn warranty_catalogue() -> Vec<WarrantyItem> {
    let item = |name: &str, years: u32, description: Option<&str>| WarrantyItem {
        name: name.to_owned(),
        total_duration_years: years,
        description: description.map(str::to_owned),
    };
    vec![
        item("Inverter", 10, None),
        item("System Warranty", 10, None),
        item("Workmanship & Service", 10, None),
        item("Solar Panels", 12, None),
        item(
            "Power Output",
            30,
            Some("Performance: 12 Years + Balance: 18 Years"),
        ),
    ]
}
