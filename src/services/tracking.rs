use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::models::tracking::{TrackingLookup, TrackingRecord};

/// Public order tracking. Records are keyed by upper-case order code.
#[derive(Debug, Clone, Default)]
pub struct TrackingService {
    records: HashMap<String, TrackingRecord>,
}

impl TrackingService {
    pub fn new(records: Vec<TrackingRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.code.to_uppercase(), record))
                .collect(),
        }
    }

    /// Looks up `code` after trimming and upper-casing it. A miss yields a
    /// lookup with no record.
    #[instrument(skip(self))]
    pub fn track(&self, code: &str) -> TrackingLookup {
        let code = code.trim().to_uppercase();
        let record = self.records.get(&code).cloned();
        if record.is_none() {
            debug!(%code, "tracking code not found");
        }
        TrackingLookup { code, record }
    }

    /// Codes that can be tracked, sorted.
    pub fn known_codes(&self) -> Vec<&str> {
        let mut codes: Vec<_> = self.records.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
