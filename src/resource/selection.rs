use std::collections::BTreeSet;

/// Shared capability of the detail and batch selections.
pub trait Selection<Id> {
    fn is_selected(&self, id: &Id) -> bool;

    fn clear(&mut self);

    /// Number of selected identifiers.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every identifier for which `present` is false and returns how
    /// many were dropped. Run after each store mutation so a selection never
    /// outlives its record.
    fn reconcile(&mut self, present: &dyn Fn(&Id) -> bool) -> usize;
}

/// At most one selected record, driving a detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelection<Id> {
    selected: Option<Id>,
}

impl<Id> Default for SingleSelection<Id> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Id: PartialEq> SingleSelection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior selection.
    pub fn select(&mut self, id: Id) {
        self.selected = Some(id);
    }

    pub fn selected(&self) -> Option<&Id> {
        self.selected.as_ref()
    }

    pub fn take(&mut self) -> Option<Id> {
        self.selected.take()
    }
}

impl<Id: PartialEq> Selection<Id> for SingleSelection<Id> {
    fn is_selected(&self, id: &Id) -> bool {
        self.selected.as_ref() == Some(id)
    }

    fn clear(&mut self) {
        self.selected = None;
    }

    fn len(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    fn reconcile(&mut self, present: &dyn Fn(&Id) -> bool) -> usize {
        match &self.selected {
            Some(id) if !present(id) => {
                self.selected = None;
                1
            }
            _ => 0,
        }
    }
}

/// Set of selected identifiers for batch actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelection<Id: Ord> {
    ids: BTreeSet<Id>,
}

impl<Id: Ord> Default for MultiSelection<Id> {
    fn default() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Clone> MultiSelection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present. Returns whether `id` is
    /// selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = Id>,
    {
        self.ids.extend(ids);
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Selected identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<Id> {
        self.ids.iter().cloned().collect()
    }
}

impl<Id: Ord + Clone> Selection<Id> for MultiSelection<Id> {
    fn is_selected(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    fn clear(&mut self) {
        self.ids.clear();
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn reconcile(&mut self, present: &dyn Fn(&Id) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| present(id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_selection_replaces() {
        let mut selection = SingleSelection::new();
        selection.select(3_u32);
        selection.select(5);
        assert_eq!(selection.selected(), Some(&5));
        assert!(!selection.is_selected(&3));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn single_selection_reconcile_drops_missing() {
        let mut selection = SingleSelection::new();
        selection.select("ORD-2460".to_string());
        assert_eq!(selection.reconcile(&|id: &String| id != "ORD-2460"), 1);
        assert!(selection.is_empty());
        assert_eq!(selection.reconcile(&|_: &String| false), 0);
    }

    #[test]
    fn toggle_reports_membership() {
        let mut selection = MultiSelection::new();
        assert!(selection.toggle(2_u32));
        assert!(selection.toggle(4));
        assert!(!selection.toggle(2));
        assert_eq!(selection.to_vec(), vec![4]);
    }

    #[test]
    fn multi_selection_reconcile_counts_dropped() {
        let mut selection = MultiSelection::new();
        selection.select_all([1_u32, 2, 3, 4]);
        let dropped = selection.reconcile(&|id: &u32| id % 2 == 0);
        assert_eq!(dropped, 2);
        assert_eq!(selection.to_vec(), vec![2, 4]);
    }
}
