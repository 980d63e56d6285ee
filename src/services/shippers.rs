use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use super::ListRequest;
use crate::errors::ServiceError;
use crate::models::Shipper;
use crate::repositories::Repository;
use crate::resource::aggregates::{average_by, count_where, round_half_up, round_to_tenth, sum_by};

/// Figures on the shipper page cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipperSummary {
    pub total: usize,
    pub active: usize,
    /// Mean efficiency, rounded to a whole percent.
    pub average_efficiency: i64,
    /// Mean rating to one decimal.
    pub average_rating: f64,
    pub total_deliveries: u32,
}

#[derive(Clone)]
pub struct ShipperService {
    repository: Arc<dyn Repository<Shipper>>,
}

impl ShipperService {
    pub fn new(repository: Arc<dyn Repository<Shipper>>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, request: &ListRequest) -> Result<Vec<Shipper>, ServiceError> {
        let filter = request.to_filter()?;
        self.repository.list_filtered(&filter).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: u32) -> Result<Shipper, ServiceError> {
        self.repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shipper", id))
    }

    /// Aggregates over every shipper, regardless of the active filter.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<ShipperSummary, ServiceError> {
        let shippers = self.repository.list().await?;
        Ok(ShipperSummary {
            total: shippers.len(),
            active: count_where(&shippers, Shipper::is_active),
            average_efficiency: average_by(&shippers, |s| f64::from(s.efficiency))
                .map(round_half_up)
                .unwrap_or(0),
            average_rating: average_by(&shippers, |s| s.rating)
                .map(round_to_tenth)
                .unwrap_or(0.0),
            total_deliveries: sum_by(&shippers, |s| s.total_deliveries),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;

    fn service_with(shippers: Vec<Shipper>) -> ShipperService {
        ShipperService::new(Arc::new(InMemoryRepository::new("Shipper", shippers)))
    }

    #[tokio::test]
    async fn summary_matches_page_cards() {
        let summary = service_with(fixtures::shippers()).summary().await.unwrap();
        assert_eq!(summary.total, 6);
        assert_eq!(summary.active, 5);
        assert_eq!(summary.average_efficiency, 93);
        assert_eq!(summary.average_rating, 4.8);
        assert_eq!(summary.total_deliveries, 1386);
    }

    #[tokio::test]
    async fn empty_roster_summarises_to_zero() {
        let summary = service_with(Vec::new()).summary().await.unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_efficiency, 0);
        assert_eq!(summary.average_rating, 0.0);
    }

    #[tokio::test]
    async fn filter_by_area_and_status() {
        let service = service_with(fixtures::shippers());
        let inactive = service.list(&ListRequest::new("", "inactive")).await.unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name, "Sarah Chen");

        let district_one = service.list(&ListRequest::search("district 1")).await.unwrap();
        let names: Vec<_> = district_one.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Emily Brown"]);
    }

    #[tokio::test]
    async fn unknown_shipper_is_not_found() {
        let service = service_with(fixtures::shippers());
        assert_eq!(service.get(5).await.unwrap().name, "Tom Wilson");
        assert_matches!(service.get(42).await, Err(ServiceError::NotFound(_)));
    }
}
