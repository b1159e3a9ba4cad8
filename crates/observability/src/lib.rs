//! Tracing/logging setup shared by every entry point.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, ParseLogFormatError};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat, default_filter: &str) {
    crate::tracing::init(format, default_filter);
}
