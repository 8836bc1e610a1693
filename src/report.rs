//! Printable compliance report assembled from the dashboard record.
//!
//! The same [`ComplianceReport`] backs the in-app modal and the `--report`
//! command, which prints [`ComplianceReport::to_plain_text`].

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::models::{format_audit_date, format_quantity, DashboardRecord};

pub const REPORT_TITLE: &str = "Chemical Safety Dashboard Report";

pub const SECTION_SUMMARY: &str = "Executive Summary";
pub const SECTION_MONTHLY: &str = "Monthly Chemical Usage & Incidents";
pub const SECTION_HAZARDS: &str = "Hazard Classification Distribution";
pub const SECTION_COMPLIANCE: &str = "Compliance Tracking Across Regions";
pub const SECTION_INVENTORY: &str = "Chemical Inventory Details";
pub const SECTION_REGULATIONS: &str = "Regulatory Compliance";

/// All section headings in print order.
pub const SECTIONS: [&str; 6] = [
    SECTION_SUMMARY,
    SECTION_MONTHLY,
    SECTION_HAZARDS,
    SECTION_COMPLIANCE,
    SECTION_INVENTORY,
    SECTION_REGULATIONS,
];

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryFigure {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub month: String,
    pub total_usage: f64,
    pub incidents: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardRow {
    pub category: String,
    pub count: u32,
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub region: String,
    pub compliant: u32,
    pub non_compliant: u32,
    pub compliant_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub product_name: String,
    pub cas_number: String,
    pub manufacturer: String,
    pub stock: String,
    pub hazard: &'static str,
    pub sds_status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegulationRow {
    pub region: String,
    pub standards: Vec<String>,
    pub last_updated: String,
}

/// Flattened, display-ready report.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceReport {
    pub summary: Vec<SummaryFigure>,
    pub monthly: Vec<MonthlyRow>,
    pub hazards: Vec<HazardRow>,
    pub compliance: Vec<RegionRow>,
    pub inventory: Vec<InventoryRow>,
    pub regulations: Vec<RegulationRow>,
}

impl ComplianceReport {
    pub fn from_record(record: &DashboardRecord) -> Self {
        let metrics = &record.dashboard_metrics;
        let summary = vec![
            SummaryFigure {
                label: "Total Chemicals",
                value: metrics.total_chemicals.to_string(),
            },
            SummaryFigure {
                label: "Active SDS Documents",
                value: metrics.active_sds_documents.to_string(),
            },
            SummaryFigure {
                label: "Compliance Score",
                value: format!("{}%", format_quantity(metrics.compliance_score)),
            },
            SummaryFigure {
                label: "Recent Incidents",
                value: metrics.recent_incidents.to_string(),
            },
        ];

        let monthly = record
            .reports
            .monthly_usage
            .iter()
            .map(|m| MonthlyRow {
                month: m.month.clone(),
                total_usage: m.total_usage,
                incidents: m.incident_count,
            })
            .collect();

        let hazards = record
            .reports
            .hazard_distribution
            .iter()
            .map(|h| HazardRow {
                category: h.category.clone(),
                count: h.count,
                share_percent: record.hazard_share(h),
            })
            .collect();

        let compliance = record
            .reports
            .compliance_tracking
            .iter()
            .map(|c| RegionRow {
                region: c.region.clone(),
                compliant: c.compliant,
                non_compliant: c.non_compliant,
                compliant_percent: c.compliant_percent(),
            })
            .collect();

        let inventory = record
            .chemicals
            .iter()
            .map(|c| InventoryRow {
                product_name: c.product_name.clone(),
                cas_number: c.cas_number.clone(),
                manufacturer: c.manufacturer.clone(),
                stock: c.stock_label(),
                hazard: c.primary_hazard().as_str(),
                sds_status: c.sds_info.status.label(),
            })
            .collect();

        let regulations = record
            .regulations
            .iter()
            .map(|r| RegulationRow {
                region: r.region.clone(),
                standards: r.standards.clone(),
                last_updated: format_audit_date(&r.last_updated),
            })
            .collect();

        Self {
            summary,
            monthly,
            hazards,
            compliance,
            inventory,
            regulations,
        }
    }

    pub fn monthly_table(&self) -> Vec<Vec<String>> {
        self.monthly
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    format_quantity(m.total_usage),
                    m.incidents.to_string(),
                ]
            })
            .collect()
    }

    pub fn hazard_table(&self) -> Vec<Vec<String>> {
        self.hazards
            .iter()
            .map(|h| {
                vec![
                    h.category.clone(),
                    h.count.to_string(),
                    format!("{:.1}%", h.share_percent),
                ]
            })
            .collect()
    }

    pub fn compliance_table(&self) -> Vec<Vec<String>> {
        self.compliance
            .iter()
            .map(|c| {
                vec![
                    c.region.clone(),
                    c.compliant.to_string(),
                    c.non_compliant.to_string(),
                    format!("{:.1}%", c.compliant_percent),
                ]
            })
            .collect()
    }

    pub fn inventory_table(&self) -> Vec<Vec<String>> {
        self.inventory
            .iter()
            .map(|row| {
                vec![
                    row.product_name.clone(),
                    row.cas_number.clone(),
                    row.manufacturer.clone(),
                    row.stock.clone(),
                    row.hazard.to_string(),
                    row.sds_status.to_string(),
                ]
            })
            .collect()
    }

    /// Render the whole report as aligned plain text.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", REPORT_TITLE);
        let _ = writeln!(out, "{}", "=".repeat(REPORT_TITLE.width()));

        section(&mut out, SECTION_SUMMARY);
        for figure in &self.summary {
            let _ = writeln!(out, "  {:<22}{}", format!("{}:", figure.label), figure.value);
        }

        section(&mut out, SECTION_MONTHLY);
        table(&mut out, &["Month", "Usage", "Incidents"], &self.monthly_table());

        section(&mut out, SECTION_HAZARDS);
        table(&mut out, &["Category", "Count", "Share"], &self.hazard_table());

        section(&mut out, SECTION_COMPLIANCE);
        table(
            &mut out,
            &["Region", "Compliant", "Non-compliant", "Compliant %"],
            &self.compliance_table(),
        );

        section(&mut out, SECTION_INVENTORY);
        table(
            &mut out,
            &[
                "Product Name",
                "CAS Number",
                "Manufacturer",
                "Current Stock",
                "Hazard Level",
                "SDS Status",
            ],
            &self.inventory_table(),
        );

        section(&mut out, SECTION_REGULATIONS);
        if self.regulations.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for regulation in &self.regulations {
            let _ = writeln!(
                out,
                "  {}: {} (updated {})",
                regulation.region,
                regulation.standards.join(", "),
                regulation.last_updated
            );
        }

        out
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.width()));
}

fn table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &header_cells, &widths);
    for row in rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::from(" ");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 1));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}
