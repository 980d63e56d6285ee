use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::resource::Record;

/// Delivery lifecycle of an order.
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
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OrderStatus {
    Created,
    Pickup,
    InTransit,
    Delivered,
    Failed,
}

impl OrderStatus {
    /// Label shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Pickup => "Pickup",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Failed => "Failed",
        }
    }
}

/// A delivery order. `code` is the identifier shown to users and used by
/// tracking lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub code: String,
    pub from: String,
    pub to: String,
    pub status: OrderStatus,
    /// Shipper name, or `"Unassigned"`.
    pub shipper: String,
    pub fee: Decimal,
    pub placed_at: NaiveDateTime,
}

impl Order {
    pub fn is_assigned(&self) -> bool {
        self.shipper != "Unassigned"
    }
}

impl Record for Order {
    type Id = String;
    type Category = OrderStatus;

    fn id(&self) -> &String {
        &self.code
    }

    fn category(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.from.as_str(), self.to.as_str()]
    }
}
