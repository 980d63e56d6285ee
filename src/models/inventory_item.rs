use serde::{Deserialize, Serialize};

use crate::resource::Record;

/// Stock level relative to an item's reorder point.
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
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// `out-of-stock` at zero, `low-stock` below the reorder point, otherwise
    /// `in-stock`. Every status is reachable from every other one.
    pub fn classify(on_hand: u32, reorder_point: u32) -> Self {
        if on_hand == 0 {
            StockStatus::OutOfStock
        } else if on_hand < reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Whether the item belongs in the low-stock alert panel.
    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// Why an on-hand count was corrected.
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
pub enum AdjustmentReason {
    StockCount,
    Damaged,
    Lost,
    Other,
}

/// One SKU held in a warehouse.
///
/// `available` and `status` are derived from `on_hand`, `reserved` and
/// `reorder_point`; [`InventoryItem::adjusted`] keeps them in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub zone: String,
    pub warehouse_id: String,
    pub on_hand: u32,
    pub reserved: u32,
    pub available: u32,
    pub status: StockStatus,
    pub reorder_point: u32,
}

impl InventoryItem {
    /// Builds an item with its derived fields computed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        zone: impl Into<String>,
        warehouse_id: impl Into<String>,
        on_hand: u32,
        reserved: u32,
        reorder_point: u32,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            zone: zone.into(),
            warehouse_id: warehouse_id.into(),
            on_hand,
            reserved,
            available: on_hand.saturating_sub(reserved),
            status: StockStatus::classify(on_hand, reorder_point),
            reorder_point,
        }
    }

    /// Copy of this item with `on_hand` set to `new_on_hand` and the derived
    /// fields recomputed. Nothing else changes.
    pub fn adjusted(&self, new_on_hand: u32) -> Self {
        Self {
            on_hand: new_on_hand,
            available: new_on_hand.saturating_sub(self.reserved),
            status: StockStatus::classify(new_on_hand, self.reorder_point),
            ..self.clone()
        }
    }

    /// True when the derived fields agree with the stored quantities.
    pub fn is_consistent(&self) -> bool {
        self.available == self.on_hand.saturating_sub(self.reserved)
            && self.status == StockStatus::classify(self.on_hand, self.reorder_point)
    }
}

impl Record for InventoryItem {
    type Id = String;
    type Category = StockStatus;

    fn id(&self) -> &String {
        &self.sku
    }

    fn category(&self) -> StockStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.sku.as_str(), self.name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rstest::rstest;

    #[rstest]
    #[case(0, 60, StockStatus::OutOfStock)]
    #[case(1, 60, StockStatus::LowStock)]
    #[case(59, 60, StockStatus::LowStock)]
    #[case(60, 60, StockStatus::InStock)]
    #[case(0, 0, StockStatus::OutOfStock)]
    #[case(5, 0, StockStatus::InStock)]
    fn classify_thresholds(
        #[case] on_hand: u32,
        #[case] reorder_point: u32,
        #[case] expected: StockStatus,
    ) {
        assert_eq!(StockStatus::classify(on_hand, reorder_point), expected);
    }

    #[test]
    fn adjusting_restocks_an_empty_item() {
        let item = fixtures::inventory_items()
            .into_iter()
            .find(|item| item.sku == "SKU-03012")
            .unwrap();
        let updated = item.adjusted(25);
        assert_eq!(updated.on_hand, 25);
        assert_eq!(updated.available, 25);
        assert_eq!(updated.status, StockStatus::LowStock);
        assert_eq!(updated.zone, item.zone);
    }

    #[test]
    fn available_never_underflows() {
        let item = InventoryItem::new("SKU-1", "Crate", "Dry Storage", "Zone A", "WH-001", 100, 80, 10);
        let updated = item.adjusted(30);
        assert_eq!(updated.available, 0);
        assert_eq!(updated.reserved, 80);
        assert!(updated.is_consistent());
    }

    #[test]
    fn fixtures_are_consistent() {
        assert!(fixtures::inventory_items().iter().all(InventoryItem::is_consistent));
    }

    #[test]
    fn status_strings_are_kebab_case() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "out-of-stock");
        assert_eq!("low-stock".parse::<StockStatus>().unwrap(), StockStatus::LowStock);
        assert_eq!(
            serde_json::to_value(StockStatus::InStock).unwrap(),
            serde_json::json!("in-stock")
        );
    }
}
