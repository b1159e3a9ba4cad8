//! Storage adapters for the record collections.
//!
//! Each entity family gets its own [`RecordStore`]; screens only talk to the
//! trait, so a persistent backend can replace the in-memory one later.

pub mod create_mode;
pub mod store;

pub use create_mode::{CreateMode, ParseCreateModeError};
pub use store::{InMemoryRecordStore, RecordStore};
