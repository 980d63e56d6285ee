use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use super::ListRequest;
use crate::errors::ServiceError;
use crate::models::{Order, OrderStatus};
use crate::repositories::Repository;
use crate::resource::aggregates::{count_where, sum_by};

/// Order count for one status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub total: usize,
    pub by_status: Vec<StatusCount>,
    pub unassigned: usize,
    pub total_fees: Decimal,
}

/// Orders page: search by code or address, filter by status.
#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn Repository<Order>>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn Repository<Order>>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, request: &ListRequest) -> Result<Vec<Order>, ServiceError> {
        let filter = request.to_filter()?;
        let orders = self.repository.list_filtered(&filter).await?;
        info!(count = orders.len(), "orders listed");
        Ok(orders)
    }

    /// Looks up an order by code, ignoring case.
    #[instrument(skip(self))]
    pub async fn get(&self, code: &str) -> Result<Order, ServiceError> {
        let code = code.trim().to_uppercase();
        self.repository
            .get_by_id(&code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", &code))
    }

    /// The most recent `limit` orders, as shown on the overview page.
    pub async fn recent(&self, limit: usize) -> Result<Vec<Order>, ServiceError> {
        let mut orders = self.repository.list().await?;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders.truncate(limit);
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<OrderSummary, ServiceError> {
        let orders = self.repository.list().await?;
        let by_status = OrderStatus::iter()
            .map(|status| StatusCount {
                status,
                count: count_where(&orders, |order| order.status == status),
            })
            .collect();

        Ok(OrderSummary {
            total: orders.len(),
            by_status,
            unassigned: count_where(&orders, |order| !order.is_assigned()),
            total_fees: sum_by(&orders, |order| order.fee),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    fn service() -> OrderService {
        OrderService::new(Arc::new(InMemoryRepository::new("Order", fixtures::orders())))
    }

    fn codes(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.code.as_str()).collect()
    }

    #[tokio::test]
    async fn delivered_orders_matching_code_prefix() {
        let orders = service()
            .list(&ListRequest::new("ORD-245", "delivered"))
            .await
            .unwrap();
        assert_eq!(codes(&orders), vec!["ORD-2451", "ORD-2454"]);
    }

    #[tokio::test]
    async fn search_matches_destination() {
        let orders = service().list(&ListRequest::search("maple")).await.unwrap();
        assert_eq!(codes(&orders), vec!["ORD-2455"]);
    }

    #[tokio::test]
    async fn get_is_case_insensitive() {
        let order = service().get("ord-2456").await.unwrap();
        assert!(!order.is_assigned());
        assert_matches!(service().get("ORD-0001").await, Err(ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn summary_counts_statuses_and_fees() {
        let summary = service().summary().await.unwrap();
        assert_eq!(summary.total, 8);
        assert_eq!(summary.unassigned, 1);
        assert_eq!(summary.total_fees, dec!(341));
        let delivered = summary
            .by_status
            .iter()
            .find(|c| c.status == OrderStatus::Delivered)
            .unwrap();
        assert_eq!(delivered.count, 2);
    }

    #[tokio::test]
    async fn recent_orders_newest_first() {
        let recent = service().recent(3).await.unwrap();
        assert_eq!(codes(&recent), vec!["ORD-2451", "ORD-2452", "ORD-2453"]);
    }
}
