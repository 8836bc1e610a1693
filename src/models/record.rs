//! Wire types for the dashboard data endpoint.
//!
//! The endpoint wraps the domain record in an envelope:
//! `{ "record": { dashboardMetrics, chemicals, reports, regulations } }`.
//! The bundled snapshot uses the same shape.

use serde::{Deserialize, Deserializer, Serialize};

/// Accept ids encoded as either strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Outer wrapper returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub record: DashboardRecord,
}

/// The domain record shown by every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    pub dashboard_metrics: DashboardMetrics,
    pub chemicals: Vec<Chemical>,
    pub reports: Reports,
    pub regulations: Vec<Regulation>,
}

/// Headline figures for the metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_chemicals: u32,
    #[serde(rename = "activeSDSDocuments")]
    pub active_sds_documents: u32,
    pub recent_incidents: u32,
    pub compliance_score: f64,
    /// ISO date string, formatted for display by [`super::format_audit_date`]
    pub last_audit_date: String,
    pub next_audit_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub product_name: String,
    pub cas_number: String,
    pub manufacturer: String,
    pub inventory_data: InventoryData,
    pub hazard_classification: HazardClassification,
    pub sds_info: SdsInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryData {
    pub current_stock: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardClassification {
    pub ghs_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdsInfo {
    pub status: SdsStatus,
}

/// Safety Data Sheet status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdsStatus {
    Active,
    Inactive,
}

impl SdsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SdsStatus::Active => "active",
            SdsStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SdsStatus::Active => "Active",
            SdsStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reports {
    pub monthly_usage: Vec<MonthlyUsage>,
    pub hazard_distribution: Vec<HazardDistribution>,
    pub compliance_tracking: Vec<ComplianceTracking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUsage {
    pub month: String,
    pub total_usage: f64,
    pub incident_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardDistribution {
    pub category: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTracking {
    pub region: String,
    pub compliant: u32,
    pub non_compliant: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    pub region: String,
    pub standards: Vec<String>,
    pub last_updated: String,
}
