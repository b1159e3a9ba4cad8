use stockroom_core::{DomainResult, RecordId};
use stockroom_infra::{CreateMode, RecordStore};
use stockroom_inventory::{
    DispatchDraft, DispatchField, DispatchItemDraft, DispatchItemField, MaterialDispatch,
    generate_manifest_number,
};

/// Dispatch list with the new-dispatch dialog and its line composer.
#[derive(Debug)]
pub struct DispatchScreen<S> {
    store: S,
    create_mode: CreateMode,
    dispatch: DispatchDraft,
    item: DispatchItemDraft,
    dialog_open: bool,
}

impl<S> DispatchScreen<S>
where
    S: RecordStore<MaterialDispatch>,
{
    pub fn new(store: S, create_mode: CreateMode) -> Self {
        Self {
            store,
            create_mode,
            dispatch: DispatchDraft::default(),
            item: DispatchItemDraft::default(),
            dialog_open: false,
        }
    }

    pub fn records(&self) -> Vec<MaterialDispatch> {
        self.store.list()
    }

    pub fn dispatch_draft(&self) -> &DispatchDraft {
        &self.dispatch
    }

    pub fn dispatch_draft_mut(&mut self) -> &mut DispatchDraft {
        &mut self.dispatch
    }

    pub fn item_draft(&self) -> &DispatchItemDraft {
        &self.item
    }

    pub fn set_dispatch_field(&mut self, field: DispatchField, raw: &str) {
        self.dispatch.set_field(field, raw);
    }

    pub fn set_item_field(&mut self, field: DispatchItemField, raw: &str) -> DomainResult<()> {
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

    /// "Generate" button next to the manifest number input.
    pub fn generate_manifest_number(&mut self) -> &str {
        self.dispatch.manifest_number = generate_manifest_number();
        &self.dispatch.manifest_number
    }

    /// "Add item" button. Returns whether the line was accepted.
    ///
    /// The manifest's `total_value` is not touched here.
    pub fn add_item_to_dispatch(&mut self) -> bool {
        match self.dispatch.add_item(&mut self.item, RecordId::generate()) {
            Ok(()) => {
                tracing::debug!(lines = self.dispatch.items.len(), "line added to dispatch");
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "dispatch line rejected");
                false
            }
        }
    }

    /// Confirm the new-dispatch dialog.
    ///
    /// Logs the manifest; in [`CreateMode::Persist`] it is also stored. Afterwards
    /// the dialog closes and the header draft resets. A half-entered line stays
    /// in the line form.
    pub fn create_dispatch(&mut self) -> DomainResult<MaterialDispatch> {
        let dispatch = self.dispatch.build(RecordId::generate(), super::today());
        tracing::info!(
            id = %dispatch.id,
            manifest_number = %dispatch.manifest_number,
            destination = %dispatch.destination,
            lines = dispatch.items.len(),
            mode = self.create_mode.as_str(),
            "creating dispatch"
        );

        if self.create_mode.persists() {
            self.store.add(dispatch.clone())?;
        }

        self.dialog_open = false;
        self.dispatch.reset();
        Ok(dispatch)
    }
}
