use stockroom_core::{DomainResult, RecordId};
use stockroom_infra::{CreateMode, RecordStore};
use stockroom_inventory::{
    MaterialReceiving, ReceiptDraft, ReceiptField, ReceivingItemDraft, ReceivingItemField,
};

/// Receipt list with the new-receipt dialog and its line composer.
#[derive(Debug)]
pub struct ReceivingScreen<S> {
    store: S,
    create_mode: CreateMode,
    receipt: ReceiptDraft,
    item: ReceivingItemDraft,
    dialog_open: bool,
}

impl<S> ReceivingScreen<S>
where
    S: RecordStore<MaterialReceiving>,
{
    pub fn new(store: S, create_mode: CreateMode) -> Self {
        Self {
            store,
            create_mode,
            receipt: ReceiptDraft::default(),
            item: ReceivingItemDraft::default(),
            dialog_open: false,
        }
    }

    pub fn records(&self) -> Vec<MaterialReceiving> {
        self.store.list()
    }

    pub fn receipt_draft(&self) -> &ReceiptDraft {
        &self.receipt
    }

    /// Direct access, e.g. to set a status the form does not expose.
    pub fn receipt_draft_mut(&mut self) -> &mut ReceiptDraft {
        &mut self.receipt
    }

    pub fn item_draft(&self) -> &ReceivingItemDraft {
        &self.item
    }

    pub fn set_receipt_field(&mut self, field: ReceiptField, raw: &str) {
        self.receipt.set_field(field, raw);
    }

    pub fn set_item_field(&mut self, field: ReceivingItemField, raw: &str) -> DomainResult<()> {
        self.item.set_field(field, raw)
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// "Add item" button. Returns whether the line was accepted.
    ///
    /// A rejected line leaves both drafts untouched and shows nothing to the
    /// user; the reason is only logged.
    pub fn add_item_to_receipt(&mut self) -> bool {
        match self.receipt.add_item(&mut self.item, RecordId::generate()) {
            Ok(()) => {
                tracing::debug!(
                    lines = self.receipt.items.len(),
                    total_value = %self.receipt.total_value,
                    "line added to receipt"
                );
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "receipt line rejected");
                false
            }
        }
    }

    /// Confirm the new-receipt dialog.
    ///
    /// Logs the receipt; in [`CreateMode::Persist`] it is also stored. Afterwards
    /// the dialog closes and the header draft resets. A half-entered line stays
    /// in the line form.
    pub fn create_receipt(&mut self) -> DomainResult<MaterialReceiving> {
        let receipt = self.receipt.build(RecordId::generate(), super::today());
        tracing::info!(
            id = %receipt.id,
            receipt_number = %receipt.receipt_number,
            supplier = %receipt.supplier,
            lines = receipt.items.len(),
            total_value = %receipt.total_value,
            mode = self.create_mode.as_str(),
            "creating receipt"
        );

        if self.create_mode.persists() {
            self.store.add(receipt.clone())?;
        }

        self.dialog_open = false;
        self.receipt.reset();
        Ok(receipt)
    }
}
