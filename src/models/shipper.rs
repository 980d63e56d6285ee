use serde::{Deserialize, Serialize};

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
pub enum ShipperStatus {
    Active,
    Inactive,
}

/// Delivery personnel with their performance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipper {
    pub id: u32,
    pub name: String,
    pub area: String,
    pub status: ShipperStatus,
    /// Efficiency score, 0-100.
    pub efficiency: u8,
    pub total_deliveries: u32,
    /// Successful deliveries as a percentage.
    pub success_rate: f64,
    pub rating: f64,
    pub phone: String,
    pub vehicle: String,
    pub shift: String,
}

impl Shipper {
    pub fn is_active(&self) -> bool {
        self.status == ShipperStatus::Active
    }

    /// Two-letter avatar initials.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Record for Shipper {
    type Id = u32;
    type Category = ShipperStatus;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn category(&self) -> ShipperStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.area.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    #[test]
    fn initials_from_name() {
        let shippers = fixtures::shippers();
        assert_eq!(shippers[0].initials(), "JD");
        assert_eq!(shippers[3].initials(), "SC");
    }
}
