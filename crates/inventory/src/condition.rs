use serde::{Deserialize, Serialize};

/// Physical condition of an item or line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    New,
    Good,
    Fair,
    Poor,
}

impl_tag!(Condition, "Condition", {
    New => ("new", "New"),
    Good => ("good", "Good"),
    Fair => ("fair", "Fair"),
    Poor => ("poor", "Poor"),
});
