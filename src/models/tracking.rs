use serde::{Deserialize, Serialize};

use super::order::OrderStatus;

/// One step of a delivery timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub label: String,
    /// Timestamp as shown to the customer, or an estimate for pending steps.
    pub time: String,
    pub completed: bool,
}

impl TimelineStep {
    pub fn new(label: &str, time: &str, completed: bool) -> Self {
        Self {
            label: label.to_string(),
            time: time.to_string(),
            completed,
        }
    }
}

/// Public tracking view of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub code: String,
    pub from: String,
    pub to: String,
    pub status: OrderStatus,
    pub shipper: String,
    pub shipper_phone: String,
    pub estimated_time: String,
    pub timeline: Vec<TimelineStep>,
}

impl TrackingRecord {
    /// Number of completed timeline steps.
    pub fn progress(&self) -> usize {
        self.timeline.iter().filter(|step| step.completed).count()
    }

    /// The first step not yet completed, if any.
    pub fn next_step(&self) -> Option<&TimelineStep> {
        self.timeline.iter().find(|step| !step.completed)
    }
}

/// Result of a tracking search. A miss is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingLookup {
    /// The normalised code that was searched for.
    pub code: String,
    pub record: Option<TrackingRecord>,
}

impl TrackingLookup {
    pub fn is_not_found(&self) -> bool {
        self.record.is_none()
    }
}
