//! Domain record for the dashboard and the values derived from it.

mod derived;
mod record;

pub use derived::{format_audit_date, format_quantity, PrimaryHazard};
pub use record::{
    Chemical, ComplianceTracking, DashboardMetrics, DashboardRecord, Envelope, HazardClassification,
    HazardDistribution, InventoryData, MonthlyUsage, Regulation, Reports, SdsInfo, SdsStatus,
};
