//! Dashboard content. Every figure here is fixed placeholder data; nothing is
//! derived from the record stores.

use serde::Serialize;

/// Visual accent of a card or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Accent,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Colour of the change figure.
    pub fn tone(&self) -> Tone {
        match self {
            Trend::Up => Tone::Success,
            Trend::Down => Tone::Warning,
        }
    }
}

/// One of the summary cards across the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Warning,
}

impl ActivityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "completed",
            ActivityStatus::Pending => "pending",
            ActivityStatus::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

/// A bar of the category breakdown. `percentage` is out of 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub percentage: u8,
    pub tone: Tone,
}

const STATS: [SummaryStat; 4] = [
    SummaryStat {
        title: "Total Items",
        value: "2,847",
        change: "+12%",
        trend: Trend::Up,
        tone: Tone::Primary,
    },
    SummaryStat {
        title: "Low Stock Alerts",
        value: "23",
        change: "-5%",
        trend: Trend::Down,
        tone: Tone::Warning,
    },
    SummaryStat {
        title: "Monthly Dispatch",
        value: "1,394",
        change: "+8%",
        trend: Trend::Up,
        tone: Tone::Success,
    },
    SummaryStat {
        title: "Total Value",
        value: "$847K",
        change: "+15%",
        trend: Trend::Up,
        tone: Tone::Accent,
    },
];

const ACTIVITY: [ActivityEntry; 4] = [
    ActivityEntry {
        id: 1,
        kind: "Material Received",
        description: "Office Supplies Batch #OS-2024-001",
        time: "2 hours ago",
        status: ActivityStatus::Completed,
    },
    ActivityEntry {
        id: 2,
        kind: "Dispatch Created",
        description: "Medical Equipment to Kampala",
        time: "4 hours ago",
        status: ActivityStatus::Pending,
    },
    ActivityEntry {
        id: 3,
        kind: "Stock Alert",
        description: "Printer Paper - Low Stock",
        time: "6 hours ago",
        status: ActivityStatus::Warning,
    },
    ActivityEntry {
        id: 4,
        kind: "Material Received",
        description: "Computers Batch #CP-2024-034",
        time: "1 day ago",
        status: ActivityStatus::Completed,
    },
];

const CATEGORIES: [CategoryShare; 5] = [
    CategoryShare { name: "Office Supplies", percentage: 35, tone: Tone::Primary },
    CategoryShare { name: "Medical Equipment", percentage: 25, tone: Tone::Success },
    CategoryShare { name: "IT Equipment", percentage: 20, tone: Tone::Accent },
    CategoryShare { name: "Furniture", percentage: 15, tone: Tone::Warning },
    CategoryShare { name: "Other", percentage: 5, tone: Tone::Muted },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn stats(&self) -> &'static [SummaryStat] {
        &STATS
    }

    pub fn recent_activity(&self) -> &'static [ActivityEntry] {
        &ACTIVITY
    }

    pub fn categories(&self) -> &'static [CategoryShare] {
        &CATEGORIES
    }
}
