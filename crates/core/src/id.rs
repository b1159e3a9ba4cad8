//! Record identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque identifier of a record (inventory item, receipt, dispatch or line item).
///
/// Identifiers are plain strings: sample data uses short literals such as `"1"`,
/// freshly created records get a timestamp-derived value from [`RecordId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier verbatim.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("RecordId: empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_time_based() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
        let a = Uuid::from_str(a.as_str()).unwrap();
        assert_eq!(a.get_version_num(), 7);
    }

    #[test]
    fn parse_rejects_blank_input() {
        let err = "   ".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId::new("42"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
