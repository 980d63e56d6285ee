use serde::{Deserialize, Serialize};

use crate::resource::aggregates::{percentage, round_half_up};
use crate::resource::Record;

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
pub enum WarehouseStatus {
    Active,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Site code, e.g. `WH-001`.
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub current_load: u32,
    pub status: WarehouseStatus,
    pub coordinates: String,
    pub manager: String,
    pub phone: String,
    /// Storage zones, used as move targets on the inventory page.
    pub zones: Vec<String>,
}

impl Warehouse {
    /// `round(current_load / capacity * 100)`; zero for a zero-capacity site.
    pub fn usage_percent(&self) -> i64 {
        percentage(f64::from(self.current_load), f64::from(self.capacity))
            .map(round_half_up)
            .unwrap_or(0)
    }

    pub fn remaining_percent(&self) -> i64 {
        percentage(
            f64::from(self.capacity.saturating_sub(self.current_load)),
            f64::from(self.capacity),
        )
        .map(round_half_up)
        .unwrap_or(0)
    }

    pub fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_load)
    }
}

impl Record for Warehouse {
    type Id = String;
    type Category = WarehouseStatus;

    fn id(&self) -> &String {
        &self.id
    }

    fn category(&self) -> WarehouseStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }
}
