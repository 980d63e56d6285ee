use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use super::ListRequest;
use crate::errors::ServiceError;
use crate::models::{Warehouse, WarehouseStatus};
use crate::repositories::Repository;
use crate::resource::aggregates::{count_where, percentage, round_half_up, sum_by};

/// Capacity bar for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseUsage {
    pub id: String,
    pub name: String,
    pub usage_percent: i64,
    pub remaining_percent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseSummary {
    pub total: usize,
    pub active: usize,
    pub total_capacity: u32,
    pub total_load: u32,
    /// Network-wide usage, rounded to a whole percent.
    pub overall_usage_percent: i64,
    pub usage: Vec<WarehouseUsage>,
}

#[derive(Clone)]
pub struct WarehouseService {
    repository: Arc<dyn Repository<Warehouse>>,
}

impl WarehouseService {
    pub fn new(repository: Arc<dyn Repository<Warehouse>>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, request: &ListRequest) -> Result<Vec<Warehouse>, ServiceError> {
        let filter = request.to_filter()?;
        self.repository.list_filtered(&filter).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Warehouse, ServiceError> {
        let id = id.trim().to_uppercase();
        self.repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Warehouse", &id))
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<WarehouseSummary, ServiceError> {
        let warehouses = self.repository.list().await?;
        let total_capacity = sum_by(&warehouses, |w| w.capacity);
        let total_load = sum_by(&warehouses, |w| w.current_load);

        Ok(WarehouseSummary {
            total: warehouses.len(),
            active: count_where(&warehouses, |w| w.status == WarehouseStatus::Active),
            total_capacity,
            total_load,
            overall_usage_percent: percentage(f64::from(total_load), f64::from(total_capacity))
                .map(round_half_up)
                .unwrap_or(0),
            usage: warehouses
                .iter()
                .map(|w| WarehouseUsage {
                    id: w.id.clone(),
                    name: w.name.clone(),
                    usage_percent: w.usage_percent(),
                    remaining_percent: w.remaining_percent(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;

    fn service() -> WarehouseService {
        WarehouseService::new(Arc::new(InMemoryRepository::new(
            "Warehouse",
            fixtures::warehouses(),
        )))
    }

    #[tokio::test]
    async fn summary_totals() {
        let summary = service().summary().await.unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 3);
        assert_eq!(summary.total_capacity, 36000);
        assert_eq!(summary.total_load, 20900);
        assert_eq!(summary.overall_usage_percent, 58);
        assert_eq!(summary.usage[1].usage_percent, 78);
    }

    #[tokio::test]
    async fn maintenance_filter() {
        let sites = service()
            .list(&ListRequest::new("", "maintenance"))
            .await
            .unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].id, "WH-004");
    }

    #[tokio::test]
    async fn lookup_normalises_id() {
        assert_eq!(service().get("wh-003").await.unwrap().name, "Warehouse C");
        assert_matches!(service().get("WH-404").await, Err(ServiceError::NotFound(_)));
    }
}
