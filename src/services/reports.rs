use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::errors::ServiceError;
use crate::fixtures;
use crate::models::report::{
    status_shares, CompanyReport, DeliveryTrend, OrderTotals, PlatformReport,
};
use crate::models::Order;
use crate::repositories::Repository;
use crate::resource::aggregates::{round_half_up, sum_by};

/// Number of orders in the overview's recent list.
pub const RECENT_ORDER_LIMIT: usize = 5;

/// Dashboard landing page: weekly delivery trend and latest orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub delivery_trend: Vec<DeliveryTrend>,
    pub successful_this_week: u32,
    pub failed_this_week: u32,
    pub recent_orders: Vec<Order>,
}

/// Analytics pages. The series are static; only the recent orders come from
/// the order repository.
#[derive(Clone)]
pub struct ReportService {
    orders: Arc<dyn Repository<Order>>,
}

impl ReportService {
    pub fn new(orders: Arc<dyn Repository<Order>>) -> Self {
        Self { orders }
    }

    pub fn platform_report(&self) -> PlatformReport {
        let orders_per_day = fixtures::platform_orders_per_day();
        PlatformReport {
            totals: OrderTotals::from_series(&orders_per_day),
            orders_per_day,
            cost_per_company: fixtures::cost_per_company(),
            delivery_status: status_shares(&fixtures::platform_delivery_status()),
            recommendations: fixtures::platform_recommendations(),
        }
    }

    pub fn company_report(&self) -> CompanyReport {
        let orders_per_day = fixtures::company_orders_per_day();
        let route_costs = fixtures::company_route_costs();
        let totals = OrderTotals::from_series(&orders_per_day);
        let total_cost = sum_by(&route_costs, |route| route.cost);
        let average_cost_per_order = if totals.total == 0 {
            0
        } else {
            round_half_up(f64::from(total_cost) / f64::from(totals.total))
        };

        CompanyReport {
            company: fixtures::company_info(),
            totals,
            total_cost,
            average_cost_per_order,
            orders_per_day,
            route_costs,
            delivery_status: status_shares(&fixtures::company_delivery_status()),
            recommendations: fixtures::company_recommendations(),
        }
    }

    #[instrument(skip(self))]
    pub async fn overview(&self) -> Result<Overview, ServiceError> {
        let mut recent_orders = self.orders.list().await?;
        recent_orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        recent_orders.truncate(RECENT_ORDER_LIMIT);

        let delivery_trend = fixtures::delivery_trend();
        Ok(Overview {
            successful_this_week: sum_by(&delivery_trend, |day| day.successful),
            failed_this_week: sum_by(&delivery_trend, |day| day.failed),
            delivery_trend,
            recent_orders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryRepository;

    fn service() -> ReportService {
        ReportService::new(Arc::new(InMemoryRepository::new("Order", fixtures::orders())))
    }

    #[test]
    fn platform_report_totals() {
        let report = service().platform_report();
        assert_eq!(report.totals.total, 384);
        assert_eq!(report.totals.success_rate, 96.1);
        assert_eq!(report.cost_per_company.len(), 5);
        let shares: i64 = report.delivery_status.iter().map(|s| s.percent).sum();
        assert_eq!(shares, 101);
    }

    #[test]
    fn company_report_costs() {
        let report = service().company_report();
        assert_eq!(report.company.name, "Acme Corp");
        assert_eq!(report.total_cost, 9700);
        assert_eq!(report.totals.total, 155);
        assert_eq!(report.average_cost_per_order, 63);
    }

    #[tokio::test]
    async fn overview_lists_latest_orders() {
        let overview = service().overview().await.unwrap();
        assert_eq!(overview.delivery_trend.len(), 7);
        let codes: Vec<_> = overview.recent_orders.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["ORD-2451", "ORD-2452", "ORD-2453", "ORD-2454", "ORD-2455"]
        );
    }
}
