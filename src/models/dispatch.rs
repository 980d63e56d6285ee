use serde::{Deserialize, Serialize};

use crate::resource::Record;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// An order waiting for a shipper on the dispatch board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnassignedOrder {
    pub id: u32,
    pub code: String,
    pub from: String,
    pub to: String,
    pub priority: Priority,
    pub distance_km: f64,
}

impl Record for UnassignedOrder {
    type Id = u32;
    type Category = Priority;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn category(&self) -> Priority {
        self.priority
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.from.as_str(), self.to.as_str()]
    }
}

/// A pre-computed route grouping shown as a suggestion card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSuggestion {
    pub route: String,
    /// Codes of the orders batched on the route.
    pub orders: Vec<String>,
    pub shipper: String,
    pub distance_km: f64,
    pub estimated_minutes: u32,
    /// Estimated saving against unbatched delivery, in percent.
    pub cost_saving_percent: u32,
}

/// Result of a completed auto-assign run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAssignOutcome {
    pub assigned: usize,
}

impl AutoAssignOutcome {
    pub fn message(&self) -> String {
        format!("Successfully assigned {} orders using AI optimization", self.assigned)
    }
}
