use stockroom_core::{DomainResult, RecordId};
use stockroom_infra::{CreateMode, RecordStore};
use stockroom_inventory::{
    InventoryItem, InventoryItemDraft, InventoryItemField, StockStatus, filter_items,
};

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub item: InventoryItem,
    pub stock_status: StockStatus,
}

/// Inventory list with search box and add-item dialog.
#[derive(Debug)]
pub struct InventoryScreen<S> {
    store: S,
    create_mode: CreateMode,
    search_term: String,
    draft: InventoryItemDraft,
    add_dialog_open: bool,
}

impl<S> InventoryScreen<S>
where
    S: RecordStore<InventoryItem>,
{
    pub fn new(store: S, create_mode: CreateMode) -> Self {
        Self {
            store,
            create_mode,
            search_term: String::new(),
            draft: InventoryItemDraft::default(),
            add_dialog_open: false,
        }
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.store.list()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Items matching the current search term, in store order.
    pub fn filtered(&self) -> Vec<InventoryItem> {
        let items = self.store.list();
        filter_items(&items, &self.search_term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Table rows for the current search term.
    pub fn rows(&self) -> Vec<InventoryRow> {
        self.filtered()
            .into_iter()
            .map(|item| InventoryRow {
                stock_status: item.stock_status(),
                item,
            })
            .collect()
    }

    pub fn draft(&self) -> &InventoryItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InventoryItemDraft {
        &mut self.draft
    }

    pub fn set_draft_field(&mut self, field: InventoryItemField, raw: &str) -> DomainResult<()> {
        self.draft.set_field(field, raw)
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    /// Close the dialog. The draft is kept so reopening resumes editing.
    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Confirm the add-item dialog.
    ///
    /// Builds the item from the draft and logs it; in [`CreateMode::Persist`] the
    /// item is also stored. Afterwards the dialog closes and the draft resets.
    pub fn add_item(&mut self) -> DomainResult<InventoryItem> {
        let item = self.draft.build(RecordId::generate(), super::today())?;
        tracing::info!(
            id = %item.id,
            name = %item.name,
            category = %item.category,
            quantity = item.quantity,
            mode = self.create_mode.as_str(),
            "adding inventory item"
        );

        if self.create_mode.persists() {
            self.store.add(item.clone())?;
        }

        self.add_dialog_open = false;
        self.draft.reset();
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockroom_infra::InMemoryRecordStore;
    use stockroom_inventory::sample;

    fn test_screen(mode: CreateMode) -> InventoryScreen<InMemoryRecordStore<InventoryItem>> {
        InventoryScreen::new(
            InMemoryRecordStore::with_records(sample::inventory_items()),
            mode,
        )
    }

    #[test]
    fn search_narrows_rows() {
        let mut screen = test_screen(CreateMode::Stub);
        assert_eq!(screen.rows().len(), 3);

        screen.set_search_term("medical");
        let rows = screen.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item.name, "Stethoscope Digital");
        assert_eq!(rows[0].stock_status, StockStatus::InStock);

        screen.set_search_term("no such thing");
        assert!(screen.filtered().is_empty());
    }

    #[test]
    fn chair_row_is_low_stock() {
        let mut screen = test_screen(CreateMode::Stub);
        screen.set_search_term("chair");
        assert_eq!(screen.rows()[0].stock_status.label(), "Low Stock");
    }

    #[test]
    fn stub_mode_resets_draft_without_storing() {
        let mut screen = test_screen(CreateMode::Stub);
        screen.open_add_dialog();
        screen.set_draft_field(InventoryItemField::Name, "Printer Paper").unwrap();
        screen.set_draft_field(InventoryItemField::Quantity, "40").unwrap();
        screen.set_draft_field(InventoryItemField::UnitPrice, "4.5").unwrap();

        let item = screen.add_item().unwrap();

        assert_eq!(item.total_value, Decimal::from(180));
        assert_eq!(screen.items().len(), 3);
        assert_eq!(screen.draft(), &InventoryItemDraft::default());
        assert!(!screen.is_add_dialog_open());
    }

    #[test]
    fn persist_mode_appends_item() {
        let mut screen = test_screen(CreateMode::Persist);
        screen.set_draft_field(InventoryItemField::Name, "Printer Paper").unwrap();
        screen.set_draft_field(InventoryItemField::Category, "Office Supplies").unwrap();

        let item = screen.add_item().unwrap();

        let items = screen.items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3], item);
        screen.set_search_term("office supplies");
        assert_eq!(screen.filtered(), vec![item]);
    }

    #[test]
    fn out_of_range_value_keeps_dialog_and_draft() {
        let mut screen = test_screen(CreateMode::Persist);
        screen.open_add_dialog();
        screen.set_draft_field(InventoryItemField::Name, "Server Rack").unwrap();
        screen.set_draft_field(InventoryItemField::Quantity, "9223372036854775807").unwrap();
        screen.set_draft_field(InventoryItemField::UnitPrice, "1e20").unwrap();

        assert!(screen.add_item().is_err());
        assert!(screen.is_add_dialog_open());
        assert_eq!(screen.draft().name, "Server Rack");
        assert_eq!(screen.items().len(), 3);
    }

    #[test]
    fn closing_dialog_keeps_draft() {
        let mut screen = test_screen(CreateMode::Stub);
        screen.open_add_dialog();
        screen.set_draft_field(InventoryItemField::Name, "Desk").unwrap();
        screen.close_add_dialog();
        assert_eq!(screen.draft().name, "Desk");
    }
}
