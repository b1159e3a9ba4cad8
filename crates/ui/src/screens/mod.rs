//! Per-screen state.

pub mod dashboard;
pub mod dispatch;
pub mod inventory;
pub mod login;
pub mod receiving;
pub mod reports;

pub use dashboard::DashboardScreen;
pub use dispatch::DispatchScreen;
pub use inventory::{InventoryRow, InventoryScreen};
pub use login::LoginScreen;
pub use receiving::ReceivingScreen;
pub use reports::ReportsScreen;

use chrono::{Local, NaiveDate};

/// Calendar date used to stamp newly created records.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
