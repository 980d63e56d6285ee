use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActivityType {
    Inbound,
    Outbound,
    Relocation,
    Adjustment,
}

/// A row of the warehouse activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u32,
    pub kind: ActivityType,
    pub sku: String,
    /// Signed change in units; negative for write-offs.
    pub quantity: i32,
    pub zone: String,
    /// Relative time as shown in the log, e.g. `Yesterday 4:20 PM`.
    pub time: String,
    pub details: String,
}

/// Units stored in one zone against its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStock {
    pub zone: String,
    pub units: u32,
    pub capacity: u32,
}

/// Direction of a barcode scan at the dock.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ScanDirection {
    Inbound,
    Outbound,
}
