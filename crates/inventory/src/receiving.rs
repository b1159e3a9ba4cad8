use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, RecordId};

use crate::condition::Condition;
use crate::form::{coerce_amount, coerce_quantity, date_or, extended_value, optional_text};

/// Receipt status. Plain label: any value may be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceivingStatus {
    #[default]
    Pending,
    Received,
    Verified,
}

impl_tag!(ReceivingStatus, "ReceivingStatus", {
    Pending => ("pending", "Pending"),
    Received => ("received", "Received"),
    Verified => ("verified", "Verified"),
});

/// One material line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingItem {
    pub id: RecordId,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub quantity_expected: i64,
    pub quantity_received: i64,
    pub unit_price: Decimal,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReceivingItem {
    /// Expected quantity × unit price.
    pub fn line_value(&self) -> DomainResult<Decimal> {
        extended_value(self.quantity_expected, self.unit_price)
    }
}

/// Header record of an incoming material receipt. Owns its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialReceiving {
    pub id: RecordId,
    pub receipt_number: String,
    pub supplier: String,
    pub date_received: NaiveDate,
    pub received_by: String,
    pub status: ReceivingStatus,
    pub items: Vec<ReceivingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_value: Decimal,
}

impl MaterialReceiving {
    /// Sum of line values, recomputed from the lines.
    pub fn items_value(&self) -> DomainResult<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, line| {
            total
                .checked_add(line.line_value()?)
                .ok_or_else(|| DomainError::validation("receipt value is out of range"))
        })
    }
}

impl Entity for MaterialReceiving {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Editable fields of the receipt line form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceivingItemField {
    ItemName,
    SerialNumber,
    Barcode,
    QuantityExpected,
    QuantityReceived,
    UnitPrice,
    Condition,
    Notes,
}

/// Line item being composed before it is appended to a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReceivingItemDraft {
    pub item_name: String,
    pub serial_number: String,
    pub barcode: String,
    pub quantity_expected: i64,
    pub quantity_received: i64,
    pub unit_price: Decimal,
    pub condition: Condition,
    pub notes: String,
}

impl ReceivingItemDraft {
    pub fn set_field(&mut self, field: ReceivingItemField, raw: &str) -> DomainResult<()> {
        match field {
            ReceivingItemField::ItemName => self.item_name = raw.to_string(),
            ReceivingItemField::SerialNumber => self.serial_number = raw.to_string(),
            ReceivingItemField::Barcode => self.barcode = raw.to_string(),
            ReceivingItemField::QuantityExpected => self.quantity_expected = coerce_quantity(raw),
            ReceivingItemField::QuantityReceived => self.quantity_received = coerce_quantity(raw),
            ReceivingItemField::UnitPrice => self.unit_price = coerce_amount(raw),
            ReceivingItemField::Condition => self.condition = raw.parse()?,
            ReceivingItemField::Notes => self.notes = raw.to_string(),
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A line needs a name and a non-zero expected quantity.
    pub fn validate(&self) -> DomainResult<()> {
        if self.item_name.is_empty() {
            return Err(DomainError::validation("item name is required"));
        }
        if self.quantity_expected == 0 {
            return Err(DomainError::validation("expected quantity is required"));
        }
        Ok(())
    }

    fn to_item(&self, id: RecordId) -> ReceivingItem {
        ReceivingItem {
            id,
            item_name: self.item_name.clone(),
            serial_number: optional_text(&self.serial_number),
            barcode: optional_text(&self.barcode),
            quantity_expected: self.quantity_expected,
            quantity_received: self.quantity_received,
            unit_price: self.unit_price,
            condition: self.condition,
            notes: optional_text(&self.notes),
        }
    }
}

/// Editable header fields of the new-receipt dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptField {
    ReceiptNumber,
    Supplier,
    DateReceived,
    ReceivedBy,
    Notes,
}

/// Receipt being composed in the new-receipt dialog.
///
/// `status` is not exposed by the form and stays `Pending` unless set directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReceiptDraft {
    pub receipt_number: String,
    pub supplier: String,
    pub date_received: String,
    pub received_by: String,
    pub status: ReceivingStatus,
    pub items: Vec<ReceivingItem>,
    pub notes: String,
    pub total_value: Decimal,
}

impl ReceiptDraft {
    pub fn set_field(&mut self, field: ReceiptField, raw: &str) {
        let slot = match field {
            ReceiptField::ReceiptNumber => &mut self.receipt_number,
            ReceiptField::Supplier => &mut self.supplier,
            ReceiptField::DateReceived => &mut self.date_received,
            ReceiptField::ReceivedBy => &mut self.received_by,
            ReceiptField::Notes => &mut self.notes,
        };
        *slot = raw.to_string();
    }

    /// Append the line described by `item`, add its value to the running total
    /// and clear `item` for the next line.
    ///
    /// On rejection neither the receipt nor `item` change.
    pub fn add_item(&mut self, item: &mut ReceivingItemDraft, id: RecordId) -> DomainResult<()> {
        item.validate()?;

        let line = item.to_item(id);
        let total_value = self
            .total_value
            .checked_add(line.line_value()?)
            .ok_or_else(|| DomainError::validation("receipt value is out of range"))?;
        self.total_value = total_value;
        self.items.push(line);
        item.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Materialize the header record. A missing or malformed date becomes `today`.
    pub fn build(&self, id: RecordId, today: NaiveDate) -> MaterialReceiving {
        MaterialReceiving {
            id,
            receipt_number: self.receipt_number.clone(),
            supplier: self.supplier.clone(),
            date_received: date_or(&self.date_received, today),
            received_by: self.received_by.clone(),
            status: self.status,
            items: self.items.clone(),
            notes: optional_text(&self.notes),
            total_value: self.total_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
    }

    fn widget(quantity_expected: i64, unit_price: i64) -> ReceivingItemDraft {
        ReceivingItemDraft {
            item_name: "Widget".to_string(),
            quantity_expected,
            unit_price: Decimal::from(unit_price),
            ..ReceivingItemDraft::default()
        }
    }

    #[test]
    fn add_item_appends_and_accumulates_total() {
        let mut receipt = ReceiptDraft::default();
        let mut item = widget(5, 2);

        receipt.add_item(&mut item, RecordId::new("line-1")).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total_value, Decimal::from(10));
        assert_eq!(receipt.items[0].item_name, "Widget");
        assert_eq!(item, ReceivingItemDraft::default());
    }

    #[test]
    fn running_total_adds_each_line() {
        let mut receipt = ReceiptDraft::default();
        receipt.add_item(&mut widget(5, 2), RecordId::new("a")).unwrap();
        receipt.add_item(&mut widget(3, 100), RecordId::new("b")).unwrap();

        assert_eq!(receipt.total_value, Decimal::from(310));
        let built = receipt.build(RecordId::new("r"), test_date());
        assert_eq!(built.items_value().unwrap(), built.total_value);
    }

    #[test]
    fn zero_quantity_is_rejected_without_changes() {
        let mut receipt = ReceiptDraft::default();
        let mut item = widget(0, 2);

        let err = receipt.add_item(&mut item, RecordId::new("x")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("quantity")));
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total_value, Decimal::ZERO);
        assert_eq!(item.item_name, "Widget");
    }

    #[test]
    fn overflowing_line_value_is_rejected_without_changes() {
        let mut receipt = ReceiptDraft::default();
        let mut item = ReceivingItemDraft::default();
        item.set_field(ReceivingItemField::ItemName, "Widget").unwrap();
        item.set_field(ReceivingItemField::QuantityExpected, "2").unwrap();
        item.set_field(ReceivingItemField::UnitPrice, "79228162514264337593543950335").unwrap();

        let err = receipt.add_item(&mut item, RecordId::new("x")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total_value, Decimal::ZERO);
        assert_eq!(item.quantity_expected, 2);
    }

    #[test]
    fn overflowing_running_total_is_rejected_without_changes() {
        let mut receipt = ReceiptDraft::default();
        let line = || ReceivingItemDraft {
            item_name: "Bullion".to_string(),
            quantity_expected: 1,
            unit_price: Decimal::MAX,
            ..ReceivingItemDraft::default()
        };
        receipt.add_item(&mut line(), RecordId::new("a")).unwrap();

        let mut second = line();
        let err = receipt.add_item(&mut second, RecordId::new("b")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total_value, Decimal::MAX);
        assert_eq!(second.item_name, "Bullion");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut receipt = ReceiptDraft::default();
        let mut item = widget(5, 2);
        item.item_name.clear();

        let err = receipt.add_item(&mut item, RecordId::new("x")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn unset_unit_price_counts_as_zero() {
        let mut receipt = ReceiptDraft::default();
        let mut item = ReceivingItemDraft::default();
        item.set_field(ReceivingItemField::ItemName, "Gauze").unwrap();
        item.set_field(ReceivingItemField::QuantityExpected, "12").unwrap();
        item.set_field(ReceivingItemField::UnitPrice, "").unwrap();

        receipt.add_item(&mut item, RecordId::new("g")).unwrap();
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total_value, Decimal::ZERO);
    }

    #[test]
    fn line_optional_fields_map_empty_to_none() {
        let mut receipt = ReceiptDraft::default();
        let mut item = widget(1, 1);
        item.set_field(ReceivingItemField::SerialNumber, "DS-2024-002").unwrap();
        item.set_field(ReceivingItemField::Condition, "fair").unwrap();

        receipt.add_item(&mut item, RecordId::new("s")).unwrap();
        let line = &receipt.items[0];
        assert_eq!(line.serial_number.as_deref(), Some("DS-2024-002"));
        assert_eq!(line.barcode, None);
        assert_eq!(line.notes, None);
        assert_eq!(line.condition, Condition::Fair);
    }

    #[test]
    fn build_uses_form_date_or_today() {
        let mut receipt = ReceiptDraft::default();
        receipt.set_field(ReceiptField::ReceiptNumber, "RCP-2024-003");
        receipt.set_field(ReceiptField::DateReceived, "2024-01-25");

        let built = receipt.build(RecordId::new("3"), test_date());
        assert_eq!(built.receipt_number, "RCP-2024-003");
        assert_eq!(built.date_received, NaiveDate::from_ymd_opt(2024, 1, 25).unwrap());
        assert_eq!(built.status, ReceivingStatus::Pending);
        assert_eq!(built.notes, None);

        receipt.set_field(ReceiptField::DateReceived, "");
        assert_eq!(receipt.build(RecordId::new("3"), test_date()).date_received, test_date());
    }

    #[test]
    fn status_can_be_set_directly() {
        let mut receipt = ReceiptDraft {
            status: ReceivingStatus::Verified,
            ..ReceiptDraft::default()
        };
        assert_eq!(receipt.build(RecordId::new("v"), test_date()).status, ReceivingStatus::Verified);

        receipt.status = ReceivingStatus::Pending;
        assert_eq!(receipt.status.label(), "Pending");
    }

    #[test]
    fn reset_restores_empty_defaults() {
        let mut receipt = ReceiptDraft::default();
        receipt.set_field(ReceiptField::Supplier, "Dell Technologies");
        receipt.add_item(&mut widget(5, 2), RecordId::new("a")).unwrap();
        receipt.reset();

        assert_eq!(receipt, ReceiptDraft::default());
        assert_eq!(receipt.status, ReceivingStatus::Pending);
        assert_eq!(receipt.total_value, Decimal::ZERO);
    }
}
