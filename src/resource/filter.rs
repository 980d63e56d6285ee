use std::fmt;
use std::str::FromStr;

use super::Record;

/// Dropdown filter over a record's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// `"all"` (any case) selects every category; anything else must parse as `C`.
impl<C: FromStr> FromStr for CategoryFilter<C> {
    type Err = C::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.trim().parse().map(CategoryFilter::Only)
        }
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

/// Case-insensitive substring match against the record's searchable fields.
/// An empty query matches every record.
pub fn matches_text<R: Record>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_needle(record, &needle)
}

fn contains_needle<R: Record>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Search box plus category dropdown, combined with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<C> {
    query: String,
    needle: String,
    category: CategoryFilter<C>,
}

impl<C> Default for ListFilter<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            needle: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Copy + PartialEq> ListFilter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter<C>) -> Self {
        self.category = category;
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    pub fn set_category(&mut self, category: CategoryFilter<C>) {
        self.category = category;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter<C> {
        self.category
    }

    /// True when neither the search box nor the dropdown restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Category = C>,
    {
        let text = self.needle.is_empty() || contains_needle(record, &self.needle);
        text && self.category.matches(&record.category())
    }
}
