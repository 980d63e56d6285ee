use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use super::ListRequest;
use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::fixtures;
use crate::models::activity::{ActivityLog, ScanDirection, ZoneStock};
use crate::models::{AdjustmentReason, InventoryItem, StockStatus, Warehouse};
use crate::repositories::Repository;
use crate::resource::aggregates::{count_where, sum_by};

/// Correction of an item's on-hand count, as typed into the adjust dialog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdjustStockRequest {
    #[validate(length(min = 1))]
    pub sku: String,
    /// Raw input; coerced with [`parse_quantity`].
    pub new_quantity: String,
    pub reason: AdjustmentReason,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MoveStockRequest {
    #[validate(length(min = 1))]
    pub sku: String,
    pub target_zone: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScanRequest {
    pub direction: ScanDirection,
    #[validate(length(min = 1, max = 128))]
    pub code: String,
}

/// Outcome of an adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryAdjustmentResult {
    pub sku: String,
    pub old_on_hand: u32,
    pub new_on_hand: u32,
    pub available: u32,
    pub old_status: StockStatus,
    pub status: StockStatus,
    pub reason: AdjustmentReason,
}

/// A relocation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockMove {
    pub sku: String,
    pub from_zone: String,
    pub to_zone: String,
    pub quantity: u32,
}

/// Cards and alert panel of a warehouse inventory page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub total_skus: usize,
    pub total_units: u64,
    /// Items in `low-stock`; out-of-stock items are counted separately.
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub utilization_percent: i64,
    /// First items needing attention, capped by `low_stock_alert_limit`.
    pub low_stock_alerts: Vec<InventoryItem>,
}

/// Reads a quantity the way the adjust dialog does: optional leading
/// whitespace and sign, then leading digits; trailing junk is ignored.
/// Anything without digits, and any negative number, becomes 0. Values past
/// `u32::MAX` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if negative || digits.is_empty() {
        return 0;
    }
    digits
        .bytes()
        .fold(0_u32, |acc, d| acc.saturating_mul(10).saturating_add(u32::from(d - b'0')))
}

/// Warehouse inventory page: stock list, adjustments, moves and dock scans.
#[derive(Clone)]
pub struct InventoryService {
    items: Arc<dyn Repository<InventoryItem>>,
    warehouses: Arc<dyn Repository<Warehouse>>,
    config: Arc<AppConfig>,
    event_sender: EventSender,
    activity: Arc<Vec<ActivityLog>>,
    zone_stock: Arc<Vec<ZoneStock>>,
}

impl InventoryService {
    pub fn new(
        items: Arc<dyn Repository<InventoryItem>>,
        warehouses: Arc<dyn Repository<Warehouse>>,
        config: Arc<AppConfig>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            items,
            warehouses,
            config,
            event_sender,
            activity: Arc::new(fixtures::activity_log()),
            zone_stock: Arc::new(fixtures::zone_stock()),
        }
    }

    async fn warehouse(&self, warehouse_id: &str) -> Result<Warehouse, ServiceError> {
        let id = warehouse_id.trim().to_uppercase();
        self.warehouses
            .get_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Warehouse", &id))
    }

    async fn warehouse_items(&self, warehouse_id: &str) -> Result<Vec<InventoryItem>, ServiceError> {
        let items = self.items.list().await?;
        Ok(items
            .into_iter()
            .filter(|item| item.warehouse_id == warehouse_id)
            .collect())
    }

    /// Items of `warehouse_id` matching the search box and status dropdown.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        warehouse_id: &str,
        request: &ListRequest,
    ) -> Result<Vec<InventoryItem>, ServiceError> {
        let warehouse = self.warehouse(warehouse_id).await?;
        let filter = request.to_filter()?;
        let items = self.items.list_filtered(&filter).await?;
        Ok(items
            .into_iter()
            .filter(|item| item.warehouse_id == warehouse.id)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, sku: &str) -> Result<InventoryItem, ServiceError> {
        let sku = sku.trim().to_uppercase();
        self.items
            .get_by_id(&sku)
            .await?
            .ok_or_else(|| ServiceError::not_found("Inventory item", &sku))
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, warehouse_id: &str) -> Result<InventorySummary, ServiceError> {
        let warehouse = self.warehouse(warehouse_id).await?;
        let items = self.warehouse_items(&warehouse.id).await?;

        let low_stock_alerts = items
            .iter()
            .filter(|item| item.status.needs_attention())
            .take(self.config.low_stock_alert_limit)
            .cloned()
            .collect();

        Ok(InventorySummary {
            warehouse_id: warehouse.id.clone(),
            warehouse_name: warehouse.name.clone(),
            total_skus: items.len(),
            total_units: sum_by(&items, |item| u64::from(item.on_hand)),
            low_stock_count: count_where(&items, |item| item.status == StockStatus::LowStock),
            out_of_stock_count: count_where(&items, |item| item.status == StockStatus::OutOfStock),
            utilization_percent: warehouse.usage_percent(),
            low_stock_alerts,
        })
    }

    /// Zones of the item's warehouse the item can be moved to: every zone
    /// whose name does not appear in the item's current location.
    #[instrument(skip(self))]
    pub async fn target_zones(&self, sku: &str) -> Result<Vec<String>, ServiceError> {
        let item = self.get(sku).await?;
        let warehouse = self.warehouse(&item.warehouse_id).await?;
        Ok(target_zones_for(&item, &warehouse))
    }

    /// Sets an item's on-hand count and recomputes its derived fields.
    #[instrument(skip(self))]
    pub async fn adjust_stock(
        &self,
        request: AdjustStockRequest,
    ) -> Result<InventoryAdjustmentResult, ServiceError> {
        request.validate()?;
        let new_on_hand = parse_quantity(&request.new_quantity);
        let item = self.get(&request.sku).await?;

        let updated = self.items.update(item.adjusted(new_on_hand)).await?;
        info!(
            sku = %updated.sku,
            old_on_hand = item.on_hand,
            new_on_hand,
            status = %updated.status,
            reason = %request.reason,
            "inventory adjusted"
        );
        if updated.status.needs_attention() && !item.status.needs_attention() {
            warn!(sku = %updated.sku, status = %updated.status, "item dropped below reorder point");
        }

        if let Err(e) = self
            .event_sender
            .send(Event::InventoryAdjusted {
                sku: updated.sku.clone(),
                warehouse_id: updated.warehouse_id.clone(),
                old_on_hand: item.on_hand,
                new_on_hand,
                status: updated.status,
                reason: request.reason.to_string(),
            })
            .await
        {
            warn!(error = %e, sku = %updated.sku, "Failed to send inventory adjusted event");
        }

        Ok(InventoryAdjustmentResult {
            sku: updated.sku,
            old_on_hand: item.on_hand,
            new_on_hand: updated.on_hand,
            available: updated.available,
            old_status: item.status,
            status: updated.status,
            reason: request.reason,
        })
    }

    /// Validates a relocation and announces it. Quantities are not changed:
    /// moving stock between zones leaves the warehouse totals as they were.
    #[instrument(skip(self))]
    pub async fn move_stock(&self, request: MoveStockRequest) -> Result<StockMove, ServiceError> {
        request.validate()?;
        let item = self.get(&request.sku).await?;
        let target = request.target_zone.trim();

        if target.is_empty() {
            return Err(ServiceError::ValidationError(
                "Target zone is required".to_string(),
            ));
        }
        let warehouse = self.warehouse(&item.warehouse_id).await?;
        if !target_zones_for(&item, &warehouse).iter().any(|zone| zone == target) {
            return Err(ServiceError::ValidationError(format!(
                "{} is not a valid target zone for {} (currently in {})",
                target, item.sku, item.zone
            )));
        }
        if request.quantity > item.available {
            return Err(ServiceError::ValidationError(format!(
                "Cannot move {} units of {}: only {} available",
                request.quantity, item.sku, item.available
            )));
        }

        let stock_move = StockMove {
            sku: item.sku.clone(),
            from_zone: item.zone.clone(),
            to_zone: target.to_string(),
            quantity: request.quantity,
        };
        self.event_sender
            .send(Event::StockMoved {
                sku: stock_move.sku.clone(),
                from_zone: stock_move.from_zone.clone(),
                to_zone: stock_move.to_zone.clone(),
                quantity: stock_move.quantity,
            })
            .await?;
        info!(sku = %stock_move.sku, to = %stock_move.to_zone, quantity = stock_move.quantity, "stock move recorded");
        Ok(stock_move)
    }

    /// Records a dock scan.
    #[instrument(skip(self))]
    pub async fn scan(&self, request: ScanRequest) -> Result<(), ServiceError> {
        let code = request.code.trim().to_string();
        if code.is_empty() {
            return Err(ServiceError::ValidationError(
                "Scan code is required".to_string(),
            ));
        }
        request.validate()?;
        self.event_sender
            .send(Event::GoodsScanned {
                direction: request.direction,
                code,
            })
            .await
    }

    pub fn activity_log(&self) -> &[ActivityLog] {
        &self.activity
    }

    pub fn zone_stock(&self) -> &[ZoneStock] {
        &self.zone_stock
    }
}

fn target_zones_for(item: &InventoryItem, warehouse: &Warehouse) -> Vec<String> {
    warehouse
        .zones
        .iter()
        .filter(|zone| !item.zone.contains(zone.as_str()))
        .cloned()
        .collect()
}
