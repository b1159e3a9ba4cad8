//! Report catalog. Generation and download are placeholders that only log.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportKind {
    Inventory,
    Receiving,
    Dispatch,
}

impl ReportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "Inventory",
            ReportKind::Receiving => "Receiving",
            ReportKind::Dispatch => "Dispatch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportFormat {
    #[serde(rename = "PDF")]
    Pdf,
    Excel,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDefinition {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ReportKind,
    pub reports: [ReportDefinition; 4],
}

/// Metadata of a previously generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReport {
    pub id: u32,
    pub name: &'static str,
    pub kind: ReportKind,
    pub date: NaiveDate,
    pub size: &'static str,
    pub format: ReportFormat,
}

const fn report(name: &'static str, description: &'static str) -> ReportDefinition {
    ReportDefinition { name, description }
}

const CATALOG: [ReportCategory; 3] = [
    ReportCategory {
        title: "Inventory Reports",
        description: "Current stock levels and item status",
        kind: ReportKind::Inventory,
        reports: [
            report(
                "Current Inventory Summary",
                "Complete list of all items with current stock levels",
            ),
            report("Low Stock Alert Report", "Items below minimum stock threshold"),
            report("Inventory Value Report", "Total value of inventory by category"),
            report("Item Movement History", "Historical data of item movements"),
        ],
    },
    ReportCategory {
        title: "Receiving Reports",
        description: "Material receiving and verification reports",
        kind: ReportKind::Receiving,
        reports: [
            report(
                "Monthly Receiving Summary",
                "Summary of all materials received this month",
            ),
            report("Supplier Performance", "Delivery performance by supplier"),
            report("Receiving Discrepancies", "Items with quantity or quality issues"),
            report("Verification Status Report", "Status of pending verifications"),
        ],
    },
    ReportCategory {
        title: "Dispatch Reports",
        description: "Outgoing material dispatch reports",
        kind: ReportKind::Dispatch,
        reports: [
            report("Monthly Dispatch Summary", "Summary of all dispatched materials"),
            report("Pending Dispatch Requests", "Outstanding dispatch requests"),
            report("Delivery Performance", "On-time delivery statistics"),
            report(
                "Dispatch Value Report",
                "Value of dispatched materials by destination",
            ),
        ],
    },
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn recent_reports() -> Vec<GeneratedReport> {
    vec![
        GeneratedReport {
            id: 1,
            name: "January 2024 - Inventory Summary",
            kind: ReportKind::Inventory,
            date: date(2024, 1, 31),
            size: "2.3 MB",
            format: ReportFormat::Pdf,
        },
        GeneratedReport {
            id: 2,
            name: "Q4 2023 - Supplier Performance",
            kind: ReportKind::Receiving,
            date: date(2024, 1, 15),
            size: "1.8 MB",
            format: ReportFormat::Excel,
        },
        GeneratedReport {
            id: 3,
            name: "Weekly Dispatch Report - W4",
            kind: ReportKind::Dispatch,
            date: date(2024, 1, 28),
            size: "945 KB",
            format: ReportFormat::Pdf,
        },
        GeneratedReport {
            id: 4,
            name: "Low Stock Alert - January",
            kind: ReportKind::Inventory,
            date: date(2024, 1, 30),
            size: "1.2 MB",
            format: ReportFormat::Pdf,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ReportsScreen {
    recent: Vec<GeneratedReport>,
}

impl Default for ReportsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportsScreen {
    pub fn new() -> Self {
        Self {
            recent: recent_reports(),
        }
    }

    pub fn catalog(&self) -> &'static [ReportCategory] {
        &CATALOG
    }

    pub fn recent_reports(&self) -> &[GeneratedReport] {
        &self.recent
    }

    pub fn find_definition(&self, name: &str) -> Option<&'static ReportDefinition> {
        CATALOG
            .iter()
            .flat_map(|category| category.reports.iter())
            .find(|report| report.name == name)
    }

    /// "Generate" button. Returns whether `name` is in the catalog.
    pub fn generate(&self, name: &str) -> bool {
        match self.find_definition(name) {
            Some(report) => {
                tracing::info!(report = report.name, "generating report");
                true
            }
            None => {
                tracing::warn!(report = name, "unknown report requested");
                false
            }
        }
    }

    /// "Download" button. Returns whether `id` names a recent report.
    pub fn download(&self, id: u32) -> bool {
        match self.recent.iter().find(|report| report.id == id) {
            Some(report) => {
                tracing::info!(
                    id = report.id,
                    report = report.name,
                    format = report.format.label(),
                    "downloading report"
                );
                true
            }
            None => {
                tracing::warn!(id, "unknown report download requested");
                false
            }
        }
    }
}
