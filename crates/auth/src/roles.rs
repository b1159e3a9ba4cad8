use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role shown next to the signed-in user.
///
/// Roles are opaque strings at this layer; nothing maps them to permissions yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn administrator() -> Self {
        Self(Cow::Borrowed("Administrator"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
