//! Values derived from the raw record for display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

use super::record::{Chemical, ComplianceTracking, DashboardRecord, HazardDistribution};

/// Coarse hazard bucket used in tables and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryHazard {
    Flammable,
    Corrosive,
    Toxic,
    Other,
}

impl PrimaryHazard {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryHazard::Flammable => "Flammable",
            PrimaryHazard::Corrosive => "Corrosive",
            PrimaryHazard::Toxic => "Toxic",
            PrimaryHazard::Other => "Other",
        }
    }

    /// Classify a list of GHS class strings. Precedence is
    /// Flammable > Corrosive > Toxic > Other.
    pub fn classify<S: AsRef<str>>(ghs_classes: &[S]) -> Self {
        let any = |needle: &str| ghs_classes.iter().any(|c| c.as_ref().contains(needle));
        if any("Flammable") {
            PrimaryHazard::Flammable
        } else if any("Corrosive") {
            PrimaryHazard::Corrosive
        } else if any("Toxic") {
            PrimaryHazard::Toxic
        } else {
            PrimaryHazard::Other
        }
    }
}

impl fmt::Display for PrimaryHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Chemical {
    pub fn primary_hazard(&self) -> PrimaryHazard {
        PrimaryHazard::classify(&self.hazard_classification.ghs_classes)
    }

    /// Case-insensitive search over name, CAS number, manufacturer, primary
    /// hazard and SDS status. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        [
            self.product_name.as_str(),
            self.cas_number.as_str(),
            self.manufacturer.as_str(),
            self.primary_hazard().as_str(),
            self.sds_info.status.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    /// Stock with its unit, e.g. `"25 L"` or `"2.5 kg"`.
    pub fn stock_label(&self) -> String {
        format!(
            "{} {}",
            format_quantity(self.inventory_data.current_stock),
            self.inventory_data.unit
        )
    }
}

impl ComplianceTracking {
    pub fn total(&self) -> u64 {
        u64::from(self.compliant) + u64::from(self.non_compliant)
    }

    pub fn compliant_percent(&self) -> f64 {
        percent(self.compliant.into(), self.total())
    }

    pub fn non_compliant_percent(&self) -> f64 {
        percent(self.non_compliant.into(), self.total())
    }
}

impl DashboardRecord {
    /// Chemicals matching `query`, in record order.
    pub fn filter_chemicals<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Chemical> + 'a {
        self.chemicals.iter().filter(move |c| c.matches(query))
    }

    pub fn hazard_total(&self) -> u64 {
        self.reports
            .hazard_distribution
            .iter()
            .map(|h| u64::from(h.count))
            .sum()
    }

    /// Share of one hazard category in the distribution, in percent.
    pub fn hazard_share(&self, entry: &HazardDistribution) -> f64 {
        percent(entry.count.into(), self.hazard_total())
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Render a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Format an ISO date (or datetime) as `"Jan 5, 2025"`.
///
/// Unparseable input is returned unchanged; empty input renders as `"N/A"`.
pub fn format_audit_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "N/A".to_string();
    }
    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
