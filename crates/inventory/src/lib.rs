//! Inventory record model.
//!
//! Inventory items, material receipts and dispatch manifests, the drafts that
//! build them from form input, and the small amount of derived logic the screens
//! display (search filtering, stock status, running totals). No IO, no storage.

#[macro_use]
mod tag;

pub mod condition;
pub mod dispatch;
pub mod form;
pub mod item;
pub mod manifest;
pub mod receiving;
pub mod sample;
pub mod search;

pub use condition::Condition;
pub use dispatch::{
    DispatchDraft, DispatchField, DispatchItem, DispatchItemDraft, DispatchItemField,
    DispatchStatus, MaterialDispatch,
};
pub use item::{InventoryItem, InventoryItemDraft, InventoryItemField, ItemStatus, StockStatus};
pub use manifest::{generate_manifest_number, generate_manifest_number_with, manifest_number_for};
pub use receiving::{
    MaterialReceiving, ReceiptDraft, ReceiptField, ReceivingItem, ReceivingItemDraft,
    ReceivingItemField, ReceivingStatus,
};
pub use search::filter_items;
