//! Generic resource browsing.
//!
//! Every listing page of the hub (orders, shippers, warehouses, inventory,
//! personnel) is the same machine: an ordered [`RecordStore`], a
//! [`ListFilter`] combining free-text search with a category filter, a pair of
//! selections (one record for the detail view, a set for batch actions) and a
//! handful of aggregates computed over the filtered or full collection.
//! [`ResourceBrowser`] ties those pieces together for one record type.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

pub mod aggregates;
pub mod browser;
pub mod filter;
pub mod selection;
pub mod store;

pub use browser::ResourceBrowser;
pub use filter::{CategoryFilter, ListFilter};
pub use selection::{MultiSelection, Selection, SingleSelection};
pub use store::RecordStore;

/// A domain entity held in a [`RecordStore`].
///
/// Implementors expose one stable identifier, the status-like category used by
/// the dropdown filter, and the fixed list of fields the search box matches.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static;
    type Category: Copy + PartialEq + Debug + Display + FromStr + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    fn category(&self) -> Self::Category;

    /// Fields matched by the free-text search, in display order.
    fn search_fields(&self) -> Vec<&str>;
}
