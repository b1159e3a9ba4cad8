//! Sample records used to seed a fresh workspace.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stockroom_core::RecordId;

use crate::condition::Condition;
use crate::dispatch::{DispatchItem, DispatchStatus, MaterialDispatch};
use crate::item::{InventoryItem, ItemStatus};
use crate::receiving::{MaterialReceiving, ReceivingItem, ReceivingStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    serial_number: &str,
    barcode: Option<&str>,
    (quantity, min_stock_level, unit_price): (i64, i64, i64),
    location: &str,
    supplier: &str,
    (date_added, last_updated): (NaiveDate, NaiveDate),
    condition: Condition,
) -> InventoryItem {
    let unit_price = Decimal::from(unit_price);
    InventoryItem {
        id: RecordId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        serial_number: text(serial_number),
        barcode: barcode.map(str::to_string),
        quantity,
        min_stock_level,
        unit_price,
        total_value: Decimal::from(quantity) * unit_price,
        location: location.to_string(),
        supplier: supplier.to_string(),
        date_added,
        last_updated,
        status: ItemStatus::Active,
        condition,
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        item(
            "1",
            "Dell Laptop Inspiron 15",
            "Business laptop with Intel i5 processor",
            "IT Equipment",
            "DL-2024-001",
            Some("1234567890123"),
            (25, 5, 850),
            "Warehouse A-1",
            "Dell Technologies",
            (date(2024, 1, 15), date(2024, 1, 20)),
            Condition::New,
        ),
        item(
            "2",
            "Office Chair Ergonomic",
            "Adjustable office chair with lumbar support",
            "Furniture",
            "OC-2024-002",
            None,
            (3, 10, 120),
            "Warehouse B-2",
            "Office Solutions Ltd",
            (date(2024, 1, 10), date(2024, 1, 18)),
            Condition::Good,
        ),
        item(
            "3",
            "Stethoscope Digital",
            "Advanced digital stethoscope for medical use",
            "Medical Equipment",
            "SD-2024-003",
            None,
            (8, 3, 200),
            "Medical Storage",
            "MedTech Supply",
            (date(2024, 1, 12), date(2024, 1, 22)),
            Condition::New,
        ),
    ]
}

pub fn receipts() -> Vec<MaterialReceiving> {
    vec![
        MaterialReceiving {
            id: RecordId::new("1"),
            receipt_number: "RCP-2024-001".to_string(),
            supplier: "Dell Technologies".to_string(),
            date_received: date(2024, 1, 20),
            received_by: "John Doe".to_string(),
            status: ReceivingStatus::Received,
            items: vec![ReceivingItem {
                id: RecordId::new("1"),
                item_name: "Dell Laptop Inspiron 15".to_string(),
                serial_number: text("DL-2024-001"),
                barcode: text("1234567890123"),
                quantity_expected: 10,
                quantity_received: 10,
                unit_price: Decimal::from(850),
                condition: Condition::New,
                notes: text("All items in perfect condition"),
            }],
            notes: text("Delivery completed on time"),
            total_value: Decimal::from(8500),
        },
        MaterialReceiving {
            id: RecordId::new("2"),
            receipt_number: "RCP-2024-002".to_string(),
            supplier: "MedTech Supply".to_string(),
            date_received: date(2024, 1, 22),
            received_by: "Jane Smith".to_string(),
            status: ReceivingStatus::Pending,
            items: vec![ReceivingItem {
                id: RecordId::new("2"),
                item_name: "Digital Stethoscope".to_string(),
                serial_number: text("DS-2024-002"),
                barcode: None,
                quantity_expected: 5,
                quantity_received: 0,
                unit_price: Decimal::from(200),
                condition: Condition::New,
                notes: None,
            }],
            notes: text("Awaiting delivery confirmation"),
            total_value: Decimal::from(1000),
        },
    ]
}

fn laptop_serials() -> Vec<String> {
    (1..=5).map(|n| format!("DL-2024-{n:03}")).collect()
}

pub fn dispatches() -> Vec<MaterialDispatch> {
    vec![
        MaterialDispatch {
            id: RecordId::new("1"),
            manifest_number: "MAN-2024-001".to_string(),
            destination: "Kampala Regional Office".to_string(),
            requested_by: "Sarah Johnson".to_string(),
            date_requested: date(2024, 1, 18),
            date_dispatched: Some(date(2024, 1, 20)),
            dispatched_by: text("Michael Brown"),
            status: DispatchStatus::Dispatched,
            items: vec![DispatchItem {
                id: RecordId::new("1"),
                item_id: RecordId::new("1"),
                item_name: "Dell Laptop Inspiron 15".to_string(),
                quantity_requested: 5,
                quantity_dispatched: 5,
                serial_numbers: laptop_serials(),
                condition: Condition::New,
                notes: text("All units tested and configured"),
            }],
            notes: text("Urgent delivery for new office setup"),
            total_value: Decimal::from(4250),
        },
        MaterialDispatch {
            id: RecordId::new("2"),
            manifest_number: "MAN-2024-002".to_string(),
            destination: "Entebbe Medical Center".to_string(),
            requested_by: "Dr. David Wilson".to_string(),
            date_requested: date(2024, 1, 22),
            date_dispatched: None,
            dispatched_by: None,
            status: DispatchStatus::Pending,
            items: vec![DispatchItem {
                id: RecordId::new("2"),
                item_id: RecordId::new("3"),
                item_name: "Digital Stethoscope".to_string(),
                quantity_requested: 3,
                quantity_dispatched: 0,
                serial_numbers: Vec::new(),
                condition: Condition::New,
                notes: None,
            }],
            notes: text("Medical equipment for cardiac unit"),
            total_value: Decimal::from(600),
        },
        MaterialDispatch {
            id: RecordId::new("3"),
            manifest_number: "MAN-2024-003".to_string(),
            destination: "Mbarara District Office".to_string(),
            requested_by: "Grace Nakato".to_string(),
            date_requested: date(2024, 1, 23),
            date_dispatched: None,
            dispatched_by: None,
            status: DispatchStatus::Approved,
            items: vec![DispatchItem {
                id: RecordId::new("3"),
                item_id: RecordId::new("2"),
                item_name: "Office Chair Ergonomic".to_string(),
                quantity_requested: 10,
                quantity_dispatched: 0,
                serial_numbers: Vec::new(),
                condition: Condition::Good,
                notes: None,
            }],
            notes: text("Office furniture for new employees"),
            total_value: Decimal::from(1200),
        },
    ]
}
