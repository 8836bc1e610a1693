//! Plain-text compliance report built from the bundled snapshot.

mod common;

use chemdash::models::{DashboardRecord, PrimaryHazard};
use chemdash::report::{ComplianceReport, REPORT_TITLE, SECTIONS};
use common::sample_record;

#[test]
fn test_report_contains_every_section_in_order() {
    let text = ComplianceReport::from_record(&sample_record()).to_plain_text();
    assert!(text.starts_with(REPORT_TITLE));

    let mut cursor = 0;
    for title in SECTIONS {
        let found = text[cursor..]
            .find(title)
            .unwrap_or_else(|| panic!("missing section {title}"));
        cursor += found + title.len();
    }
}

#[test]
fn test_report_percentages() {
    let report = ComplianceReport::from_record(&sample_record());
    let text = report.to_plain_text();

    // 2 of 6 chemicals flammable; North America 48 of 50 compliant.
    assert!(text.contains("33.3%"));
    assert!(text.contains("96.0%"));
    assert_eq!(report.hazards.len(), 4);
    assert_eq!(report.compliance.len(), 3);
}

#[test]
fn test_report_inventory_lists_every_chemical() {
    let record = sample_record();
    let report = ComplianceReport::from_record(&record);
    assert_eq!(report.inventory.len(), record.chemicals.len());

    let text = report.to_plain_text();
    for chemical in &record.chemicals {
        assert!(text.contains(&chemical.product_name));
        assert!(text.contains(&chemical.cas_number));
    }
}

#[test]
fn test_report_uses_primary_hazard() {
    let record = sample_record();
    let report = ComplianceReport::from_record(&record);
    let cyanide = report
        .inventory
        .iter()
        .find(|row| row.product_name == "Sodium Cyanide")
        .unwrap();
    assert_eq!(cyanide.hazard, PrimaryHazard::Toxic.as_str());
}

#[test]
fn test_regulations_section_lists_standards() {
    let text = ComplianceReport::from_record(&sample_record()).to_plain_text();
    assert!(text.contains("REACH, CLP"));
    assert!(text.contains("(updated Sep 12, 2024)"));
}

#[test]
fn test_empty_record_prints_placeholders() {
    let mut record: DashboardRecord = sample_record();
    record.chemicals.clear();
    record.regulations.clear();
    record.reports.monthly_usage.clear();

    let text = ComplianceReport::from_record(&record).to_plain_text();
    for title in SECTIONS {
        assert!(text.contains(title));
    }
    assert!(text.contains("(none)"));
}
