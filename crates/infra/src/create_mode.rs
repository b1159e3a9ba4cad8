use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the "create" actions of the screens do with a confirmed draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateMode {
    /// Log the record and reset the draft; nothing is stored.
    #[default]
    Stub,
    /// Log, append the record to its store, then reset the draft.
    Persist,
}

impl CreateMode {
    pub fn persists(self) -> bool {
        self == CreateMode::Persist
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CreateMode::Stub => "stub",
            CreateMode::Persist => "persist",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown create mode {0:?} (expected \"stub\" or \"persist\")")]
pub struct ParseCreateModeError(pub String);

impl FromStr for CreateMode {
    type Err = ParseCreateModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(CreateMode::Stub),
            "persist" => Ok(CreateMode::Persist),
            _ => Err(ParseCreateModeError(s.to_string())),
        }
    }
}
