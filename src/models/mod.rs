// Resource records
pub mod company;
pub mod inventory_item;
pub mod order;
pub mod personnel;
pub mod shipper;
pub mod warehouse;

// Read-only payloads
pub mod activity;
pub mod dispatch;
pub mod report;
pub mod tracking;

pub use company::{PendingCompany, RegistrationStatus};
pub use inventory_item::{AdjustmentReason, InventoryItem, StockStatus};
pub use order::{Order, OrderStatus};
pub use personnel::{Personnel, PersonnelStatus};
pub use shipper::{Shipper, ShipperStatus};
pub use warehouse::{Warehouse, WarehouseStatus};
