use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use validator::Validate;

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::events::EventSender;
use crate::fixtures;
use crate::repositories::InMemoryRepository;
use crate::resource::{CategoryFilter, ListFilter};

// Resource pages
pub mod inventory;
pub mod orders;
pub mod shippers;
pub mod warehouses;

// Operations
pub mod admin;
pub mod dispatch;
pub mod tracking;

// Analytics and Reporting
pub mod reports;

use admin::AdminService;
use dispatch::DispatchService;
use inventory::InventoryService;
use orders::OrderService;
use reports::ReportService;
use shippers::ShipperService;
use tracking::TrackingService;
use warehouses::WarehouseService;

/// Search box and status dropdown of a listing page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub search: String,
    /// Category value, or `all`.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "all".to_string()
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: default_status(),
        }
    }
}

impl ListRequest {
    pub fn new(search: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            status: status.into(),
        }
    }

    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Validates the request and builds the filter. An unknown status is a
    /// validation error.
    pub fn to_filter<C>(&self) -> Result<ListFilter<C>, ServiceError>
    where
        C: FromStr + Copy + PartialEq,
    {
        self.validate()?;
        let category: CategoryFilter<C> = self.status.parse().map_err(|_| {
            ServiceError::ValidationError(format!("Unknown status filter: {}", self.status))
        })?;
        Ok(ListFilter::new()
            .with_query(self.search.clone())
            .with_category(category))
    }
}

/// Every service of the hub, sharing one event channel and configuration.
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<OrderService>,
    pub shippers: Arc<ShipperService>,
    pub warehouses: Arc<WarehouseService>,
    pub inventory: Arc<InventoryService>,
    pub admin: Arc<AdminService>,
    pub tracking: Arc<TrackingService>,
    pub dispatch: Arc<DispatchService>,
    pub reports: Arc<ReportService>,
}

impl AppServices {
    /// Builds all services over in-memory repositories seeded from the
    /// fixtures.
    pub fn seeded(config: Arc<AppConfig>, event_sender: EventSender) -> Self {
        let orders = Arc::new(InMemoryRepository::new("Order", fixtures::orders()));
        let warehouses = Arc::new(InMemoryRepository::new("Warehouse", fixtures::warehouses()));

        Self {
            orders: Arc::new(OrderService::new(orders.clone())),
            shippers: Arc::new(ShipperService::new(Arc::new(InMemoryRepository::new(
                "Shipper",
                fixtures::shippers(),
            )))),
            warehouses: Arc::new(WarehouseService::new(warehouses.clone())),
            inventory: Arc::new(InventoryService::new(
                Arc::new(InMemoryRepository::new(
                    "Inventory item",
                    fixtures::inventory_items(),
                )),
                warehouses,
                config.clone(),
                event_sender.clone(),
            )),
            admin: Arc::new(AdminService::new(
                Arc::new(InMemoryRepository::new(
                    "Company",
                    fixtures::pending_companies(),
                )),
                Arc::new(InMemoryRepository::new("Personnel", fixtures::personnel())),
                event_sender.clone(),
            )),
            tracking: Arc::new(TrackingService::new(fixtures::tracking_records())),
            dispatch: Arc::new(DispatchService::new(
                Arc::new(InMemoryRepository::new(
                    "Unassigned order",
                    fixtures::unassigned_orders(),
                )),
                fixtures::route_suggestions(),
                config,
                event_sender,
            )),
            reports: Arc::new(ReportService::new(orders)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use assert_matches::assert_matches;

    #[test]
    fn default_request_is_unrestricted() {
        let filter: ListFilter<OrderStatus> = ListRequest::default().to_filter().unwrap();
        assert!(filter.is_unrestricted());
    }

    #[test]
    fn status_parses_into_category() {
        let filter: ListFilter<OrderStatus> =
            ListRequest::new("ORD", "in-transit").to_filter().unwrap();
        assert_eq!(filter.category(), CategoryFilter::Only(OrderStatus::InTransit));
        assert_eq!(filter.query(), "ORD");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = ListRequest::new("", "shipped").to_filter::<OrderStatus>();
        assert_matches!(result, Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn overlong_search_is_rejected() {
        let result = ListRequest::search("x".repeat(201)).to_filter::<OrderStatus>();
        assert_matches!(result, Err(ServiceError::ValidationError(_)));
    }
}
