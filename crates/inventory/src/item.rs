use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, RecordId};

use crate::condition::Condition;
use crate::form::{coerce_amount, coerce_quantity, extended_value, optional_text};

/// Categories offered by the add-item form. Stored categories are free text.
pub const CATEGORIES: [&str; 4] = [
    "IT Equipment",
    "Medical Equipment",
    "Office Supplies",
    "Furniture",
];

/// Lifecycle status of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
    Damaged,
}

impl_tag!(ItemStatus, "ItemStatus", {
    Active => ("active", "Active"),
    Inactive => ("inactive", "Inactive"),
    Damaged => ("damaged", "Damaged"),
});

/// Derived display classification of an item's stock. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    LowStock,
    InStock,
    Inactive,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
            StockStatus::Inactive => "Inactive",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry with its current stock level.
///
/// `total_value` is expected to equal `quantity × unit_price`; whoever creates the
/// record maintains that, nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub quantity: i64,
    pub min_stock_level: i64,
    pub unit_price: Decimal,
    pub total_value: Decimal,
    pub location: String,
    pub supplier: String,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
    pub status: ItemStatus,
    pub condition: Condition,
}

impl InventoryItem {
    /// Low stock wins over everything else, including `status`.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity <= self.min_stock_level {
            StockStatus::LowStock
        } else if self.status == ItemStatus::Active {
            StockStatus::InStock
        } else {
            StockStatus::Inactive
        }
    }

    /// Case-insensitive substring match over name, category and serial number.
    pub fn matches_search(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .serial_number
                .as_deref()
                .is_some_and(|serial| serial.to_lowercase().contains(needle))
    }

    /// `quantity × unit_price`, independent of the stored `total_value`.
    pub fn computed_value(&self) -> DomainResult<Decimal> {
        extended_value(self.quantity, self.unit_price)
    }
}

impl Entity for InventoryItem {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Editable fields of the add-item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryItemField {
    Name,
    Description,
    Category,
    SerialNumber,
    Barcode,
    Quantity,
    MinStockLevel,
    UnitPrice,
    Location,
    Supplier,
    Status,
    Condition,
}

/// In-progress inventory item bound to the add-item dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryItemDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub serial_number: String,
    pub barcode: String,
    pub quantity: i64,
    pub min_stock_level: i64,
    pub unit_price: Decimal,
    pub location: String,
    pub supplier: String,
    pub status: ItemStatus,
    pub condition: Condition,
}

impl InventoryItemDraft {
    /// Apply one form edit. Only the enum-valued fields can fail; on failure the
    /// previous value is kept.
    pub fn set_field(&mut self, field: InventoryItemField, raw: &str) -> DomainResult<()> {
        match field {
            InventoryItemField::Name => self.name = raw.to_string(),
            InventoryItemField::Description => self.description = raw.to_string(),
            InventoryItemField::Category => self.category = raw.to_string(),
            InventoryItemField::SerialNumber => self.serial_number = raw.to_string(),
            InventoryItemField::Barcode => self.barcode = raw.to_string(),
            InventoryItemField::Quantity => self.quantity = coerce_quantity(raw),
            InventoryItemField::MinStockLevel => self.min_stock_level = coerce_quantity(raw),
            InventoryItemField::UnitPrice => self.unit_price = coerce_amount(raw),
            InventoryItemField::Location => self.location = raw.to_string(),
            InventoryItemField::Supplier => self.supplier = raw.to_string(),
            InventoryItemField::Status => self.status = raw.parse()?,
            InventoryItemField::Condition => self.condition = raw.parse()?,
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Materialize a complete item; both timestamps are set to `today`.
    ///
    /// Fails when `quantity × unit_price` is out of range.
    pub fn build(&self, id: RecordId, today: NaiveDate) -> DomainResult<InventoryItem> {
        let total_value = extended_value(self.quantity, self.unit_price)?;
        Ok(InventoryItem {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            serial_number: optional_text(&self.serial_number),
            barcode: optional_text(&self.barcode),
            quantity: self.quantity,
            min_stock_level: self.min_stock_level,
            unit_price: self.unit_price,
            total_value,
            location: self.location.clone(),
            supplier: self.supplier.clone(),
            date_added: today,
            last_updated: today,
            status: self.status,
            condition: self.condition,
        })
    }
}
