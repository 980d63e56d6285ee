use tracing::debug;

use super::filter::{CategoryFilter, ListFilter};
use super::selection::{MultiSelection, Selection, SingleSelection};
use super::store::RecordStore;
use super::Record;

/// Listing-page state for one record type: the store, the active filter, the
/// detail selection and the batch selection.
///
/// Selections are tracked by identifier and reconciled against the store
/// after every mutation, so neither can reference a record that is gone.
#[derive(Debug, Clone)]
pub struct ResourceBrowser<R: Record> {
    store: RecordStore<R>,
    filter: ListFilter<R::Category>,
    detail: SingleSelection<R::Id>,
    batch: MultiSelection<R::Id>,
}

impl<R: Record> ResourceBrowser<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            store: RecordStore::new(records),
            filter: ListFilter::new(),
            detail: SingleSelection::new(),
            batch: MultiSelection::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn filter(&self) -> &ListFilter<R::Category> {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn set_category(&mut self, category: CategoryFilter<R::Category>) {
        self.filter.set_category(category);
    }

    pub fn set_filter(&mut self, filter: ListFilter<R::Category>) {
        self.filter = filter;
    }

    /// Records passing the current filter, in store order.
    pub fn visible(&self) -> Vec<&R> {
        self.store.filtered(&self.filter)
    }

    pub fn visible_count(&self) -> usize {
        self.store
            .iter()
            .filter(|record| self.filter.matches(*record))
            .count()
    }

    /// Opens the detail view on `id`. Unknown ids leave the selection as it was.
    pub fn select_detail(&mut self, id: &R::Id) -> Option<&R> {
        let record = self.store.get(id)?;
        self.detail.select(id.clone());
        Some(record)
    }

    pub fn detail(&self) -> Option<&R> {
        self.detail.selected().and_then(|id| self.store.get(id))
    }

    pub fn close_detail(&mut self) {
        self.detail.clear();
    }

    /// Toggles `id` in the batch selection. Ids absent from the store are
    /// ignored and reported as unselected.
    pub fn toggle(&mut self, id: &R::Id) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.batch.toggle(id.clone())
    }

    /// Adds every currently visible record to the batch selection.
    pub fn select_all_visible(&mut self) {
        let ids: Vec<R::Id> = self.visible().into_iter().map(|r| r.id().clone()).collect();
        self.batch.select_all(ids);
    }

    pub fn clear_batch(&mut self) {
        self.batch.clear();
    }

    pub fn batch(&self) -> &MultiSelection<R::Id> {
        &self.batch
    }

    /// Batch-selected records in store order.
    pub fn batch_records(&self) -> Vec<&R> {
        self.store
            .iter()
            .filter(|record| self.batch.contains(record.id()))
            .collect()
    }

    /// Applies a field update to one record and reconciles the selections.
    pub fn apply<F>(&mut self, id: &R::Id, update: F) -> Option<R>
    where
        F: FnOnce(&R) -> R,
    {
        let updated = self.store.apply(id, update).cloned();
        self.reconcile();
        updated
    }

    /// Replaces the store contents wholesale, e.g. after a reload from the
    /// repository, and reconciles the selections.
    pub fn replace_all(&mut self, records: Vec<R>) -> usize {
        self.store = RecordStore::new(records);
        self.reconcile()
    }

    /// Drops selected ids that no longer exist. Returns how many were dropped.
    pub fn reconcile(&mut self) -> usize {
        let store = &self.store;
        let present = |id: &R::Id| store.contains(id);
        let dropped = self.detail.reconcile(&present) + self.batch.reconcile(&present);
        if dropped > 0 {
            debug!(dropped, "dropped stale selections after store change");
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::order::OrderStatus;

    fn code(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn filter_and_detail_selection() {
        let mut browser = ResourceBrowser::new(fixtures::orders());
        browser.set_query("district 8");
        assert_eq!(browser.visible_count(), 2);

        let selected = browser.select_detail(&code("ORD-2457")).unwrap();
        assert_eq!(selected.shipper, "Emily Brown");
        assert!(browser.select_detail(&code("ORD-0000")).is_none());
        assert_eq!(browser.detail().unwrap().code, "ORD-2457");
    }

    #[test]
    fn select_all_visible_then_clear() {
        let mut browser = ResourceBrowser::new(fixtures::orders());
        browser.set_category(CategoryFilter::Only(OrderStatus::InTransit));
        browser.select_all_visible();
        assert_eq!(browser.batch().to_vec(), vec![code("ORD-2452"), code("ORD-2455")]);
        browser.clear_batch();
        assert!(browser.batch().is_empty());
    }

    #[test]
    fn toggle_ignores_unknown_ids() {
        let mut browser = ResourceBrowser::new(fixtures::orders());
        assert!(!browser.toggle(&code("ORD-9999")));
        assert!(browser.batch().is_empty());
    }

    #[test]
    fn replace_all_reconciles_selections() {
        let mut browser = ResourceBrowser::new(fixtures::orders());
        browser.toggle(&code("ORD-2451"));
        browser.toggle(&code("ORD-2458"));
        browser.select_detail(&code("ORD-2458"));

        let remaining: Vec<_> = fixtures::orders()
            .into_iter()
            .filter(|order| order.code != "ORD-2458")
            .collect();
        assert_eq!(browser.replace_all(remaining), 2);
        assert_eq!(browser.batch().to_vec(), vec![code("ORD-2451")]);
        assert!(browser.detail().is_none());
    }
}
