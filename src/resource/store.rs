use super::filter::ListFilter;
use super::Record;

/// Ordered, read-mostly collection of records.
///
/// Order is the fixture order and is preserved by every view. Records are
/// only ever replaced in place; there is no insertion or deletion path after
/// the store is seeded.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &R::Id> {
        self.records.iter().map(Record::id)
    }

    /// Records matching `filter`, in store order.
    pub fn filtered(&self, filter: &ListFilter<R::Category>) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| filter.matches(*record))
            .collect()
    }

    /// Swaps in `record` at the position of the record with the same id.
    /// Returns the previous version, or `None` (and leaves the store untouched)
    /// when no record carries that id.
    pub fn replace(&mut self, record: R) -> Option<R> {
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())?;
        Some(std::mem::replace(slot, record))
    }

    /// Applies `update` to the record with `id` and stores the result in one
    /// step. Returns the updated record.
    pub fn apply<F>(&mut self, id: &R::Id, update: F) -> Option<&R>
    where
        F: FnOnce(&R) -> R,
    {
        let index = self.records.iter().position(|record| record.id() == id)?;
        let updated = update(&self.records[index]);
        self.records[index] = updated;
        Some(&self.records[index])
    }

    pub fn into_vec(self) -> Vec<R> {
        self.records
    }
}

impl<R: Record> FromIterator<R> for RecordStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
