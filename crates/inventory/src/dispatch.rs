use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, RecordId};

use crate::condition::Condition;
use crate::form::{coerce_amount, coerce_quantity, date_or, optional_text, split_serials};

/// Dispatch status. Plain label: any value may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    #[default]
    Pending,
    Approved,
    Dispatched,
    Delivered,
}

impl_tag!(DispatchStatus, "DispatchStatus", {
    Pending => ("pending", "Pending"),
    Approved => ("approved", "Approved"),
    Dispatched => ("dispatched", "Dispatched"),
    Delivered => ("delivered", "Delivered"),
});

/// One material line of a dispatch manifest.
///
/// `item_id` names an inventory item but is never checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchItem {
    pub id: RecordId,
    pub item_id: RecordId,
    pub item_name: String,
    pub quantity_requested: i64,
    pub quantity_dispatched: i64,
    pub serial_numbers: Vec<String>,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Header record of an outgoing dispatch manifest. Owns its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDispatch {
    pub id: RecordId,
    pub manifest_number: String,
    pub destination: String,
    pub requested_by: String,
    pub date_requested: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_dispatched: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatched_by: Option<String>,
    pub status: DispatchStatus,
    pub items: Vec<DispatchItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_value: Decimal,
}

impl MaterialDispatch {
    /// Total requested quantity across lines, saturating at the `i64` bounds.
    pub fn quantity_requested(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.quantity_requested))
    }
}

impl Entity for MaterialDispatch {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Editable fields of the dispatch line form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchItemField {
    ItemId,
    ItemName,
    QuantityRequested,
    QuantityDispatched,
    SerialNumbers,
    Condition,
    Notes,
}

/// Line item being composed before it is appended to a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchItemDraft {
    /// Catalog item this line refers to; empty means "reuse the line id".
    pub item_id: String,
    pub item_name: String,
    pub quantity_requested: i64,
    pub quantity_dispatched: i64,
    pub serial_numbers: Vec<String>,
    pub condition: Condition,
    pub notes: String,
}

impl Default for DispatchItemDraft {
    fn default() -> Self {
        Self {
            item_id: String::new(),
            item_name: String::new(),
            quantity_requested: 0,
            quantity_dispatched: 0,
            serial_numbers: Vec::new(),
            condition: Condition::Good,
            notes: String::new(),
        }
    }
}

impl DispatchItemDraft {
    pub fn set_field(&mut self, field: DispatchItemField, raw: &str) -> DomainResult<()> {
        match field {
            DispatchItemField::ItemId => self.item_id = raw.trim().to_string(),
            DispatchItemField::ItemName => self.item_name = raw.to_string(),
            DispatchItemField::QuantityRequested => self.quantity_requested = coerce_quantity(raw),
            DispatchItemField::QuantityDispatched => self.quantity_dispatched = coerce_quantity(raw),
            DispatchItemField::SerialNumbers => self.serial_numbers = split_serials(raw),
            DispatchItemField::Condition => self.condition = raw.parse()?,
            DispatchItemField::Notes => self.notes = raw.to_string(),
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A line needs a name and a non-zero requested quantity.
    pub fn validate(&self) -> DomainResult<()> {
        if self.item_name.is_empty() {
            return Err(DomainError::validation("item name is required"));
        }
        if self.quantity_requested == 0 {
            return Err(DomainError::validation("requested quantity is required"));
        }
        Ok(())
    }

    fn to_item(&self, id: RecordId) -> DispatchItem {
        let item_id = if self.item_id.is_empty() {
            id.clone()
        } else {
            RecordId::new(self.item_id.clone())
        };
        DispatchItem {
            id,
            item_id,
            item_name: self.item_name.clone(),
            quantity_requested: self.quantity_requested,
            quantity_dispatched: self.quantity_dispatched,
            serial_numbers: self.serial_numbers.clone(),
            condition: self.condition,
            notes: optional_text(&self.notes),
        }
    }
}

/// Editable header fields of the new-dispatch dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchField {
    ManifestNumber,
    Destination,
    RequestedBy,
    DateRequested,
    Notes,
    TotalValue,
}

/// Manifest being composed in the new-dispatch dialog.
///
/// Unlike [`crate::ReceiptDraft`], appending lines leaves `total_value` alone; it
/// only changes when set by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchDraft {
    pub manifest_number: String,
    pub destination: String,
    pub requested_by: String,
    pub date_requested: String,
    pub status: DispatchStatus,
    pub items: Vec<DispatchItem>,
    pub notes: String,
    pub total_value: Decimal,
}

impl DispatchDraft {
    pub fn set_field(&mut self, field: DispatchField, raw: &str) {
        match field {
            DispatchField::ManifestNumber => self.manifest_number = raw.to_string(),
            DispatchField::Destination => self.destination = raw.to_string(),
            DispatchField::RequestedBy => self.requested_by = raw.to_string(),
            DispatchField::DateRequested => self.date_requested = raw.to_string(),
            DispatchField::Notes => self.notes = raw.to_string(),
            DispatchField::TotalValue => self.total_value = coerce_amount(raw),
        }
    }

    /// Append the line described by `item` and clear `item` for the next line.
    ///
    /// On rejection neither the manifest nor `item` change.
    pub fn add_item(&mut self, item: &mut DispatchItemDraft, id: RecordId) -> DomainResult<()> {
        item.validate()?;

        self.items.push(item.to_item(id));
        item.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Materialize the header record. A missing or malformed date becomes `today`.
    pub fn build(&self, id: RecordId, today: NaiveDate) -> MaterialDispatch {
        MaterialDispatch {
            id,
            manifest_number: self.manifest_number.clone(),
            destination: self.destination.clone(),
            requested_by: self.requested_by.clone(),
            date_requested: date_or(&self.date_requested, today),
            date_dispatched: None,
            dispatched_by: None,
            status: self.status,
            items: self.items.clone(),
            notes: optional_text(&self.notes),
            total_value: self.total_value,
        }
    }
}
