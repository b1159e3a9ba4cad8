//! `stockroom-ui`: screen state for the inventory management front end.
//!
//! Each screen owns its records (through a [`stockroom_infra::RecordStore`]), the
//! draft bound to its creation dialog and the derived values it displays. Nothing
//! here renders; a view layer binds to these types.

pub mod config;
pub mod screens;
pub mod workspace;

pub use config::{AppConfig, ConfigError};
pub use screens::{
    DashboardScreen, DispatchScreen, InventoryScreen, LoginScreen, ReceivingScreen, ReportsScreen,
};
pub use workspace::{Stores, Workspace, bootstrap};
