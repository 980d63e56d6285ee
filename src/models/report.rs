use serde::{Deserialize, Serialize};

use super::dispatch::Priority;
use crate::resource::aggregates::{percentage, round_half_up, round_to_tenth, sum_by};

/// Order volume for one day of the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOrders {
    pub date: String,
    pub orders: u32,
    pub successful: u32,
    pub failed: u32,
}

/// Delivery cost billed to one company over the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCost {
    pub company: String,
    pub cost: u32,
    pub orders: u32,
}

impl CompanyCost {
    pub fn average_cost(&self) -> i64 {
        average_cost(self.cost, self.orders)
    }
}

/// Delivery cost of one route for a single company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCost {
    pub route: String,
    pub orders: u32,
    pub cost: u32,
}

impl RouteCost {
    pub fn average_cost(&self) -> i64 {
        average_cost(self.cost, self.orders)
    }
}

fn average_cost(cost: u32, orders: u32) -> i64 {
    if orders == 0 {
        return 0;
    }
    round_half_up(f64::from(cost) / f64::from(orders))
}

/// Slice of the delivery status pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub name: String,
    pub value: u32,
}

/// A status slice with its whole-percent share of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusShare {
    pub name: String,
    pub value: u32,
    pub percent: i64,
}

pub fn status_shares(counts: &[StatusCount]) -> Vec<StatusShare> {
    let total: u32 = sum_by(counts, |count| count.value);
    counts
        .iter()
        .map(|count| StatusShare {
            name: count.name.clone(),
            value: count.value,
            percent: percentage(f64::from(count.value), f64::from(total))
                .map(round_half_up)
                .unwrap_or(0),
        })
        .collect()
}

/// An advisory card on the reports pages. The content is static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Area the advice concerns (`warehouse`, `route`, ...), when given.
    pub kind: Option<String>,
    pub title: String,
    pub reason: String,
    pub impact: String,
    pub priority: Priority,
    pub estimated_cost: Option<String>,
}

/// Successful and failed deliveries for one weekday on the overview chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTrend {
    pub day: String,
    pub successful: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub average_sla: String,
    pub tier: String,
}

/// Totals over a [`DailyOrders`] series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
    /// Successful share in percent, one decimal.
    pub success_rate: f64,
}

impl OrderTotals {
    pub fn from_series(series: &[DailyOrders]) -> Self {
        let total = sum_by(series, |day| day.orders);
        let successful = sum_by(series, |day| day.successful);
        let failed = sum_by(series, |day| day.failed);
        let success_rate = percentage(f64::from(successful), f64::from(total))
            .map(round_to_tenth)
            .unwrap_or(0.0);
        Self {
            total,
            successful,
            failed,
            success_rate,
        }
    }
}

/// Platform-wide analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformReport {
    pub totals: OrderTotals,
    pub orders_per_day: Vec<DailyOrders>,
    pub cost_per_company: Vec<CompanyCost>,
    pub delivery_status: Vec<StatusShare>,
    pub recommendations: Vec<Recommendation>,
}

/// Analytics page for a single customer company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    pub company: CompanyInfo,
    pub totals: OrderTotals,
    pub total_cost: u32,
    pub average_cost_per_order: i64,
    pub orders_per_day: Vec<DailyOrders>,
    pub route_costs: Vec<RouteCost>,
    pub delivery_status: Vec<StatusShare>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn platform_totals() {
        let totals = OrderTotals::from_series(&fixtures::platform_orders_per_day());
        assert_eq!(totals.total, 384);
        assert_eq!(totals.successful, 369);
        assert_eq!(totals.failed, 15);
        assert_eq!(totals.success_rate, 96.1);
    }

    #[test]
    fn empty_series_has_zero_rate() {
        let totals = OrderTotals::from_series(&[]);
        assert_eq!(totals.total, 0);
        assert_eq!(totals.success_rate, 0.0);
    }

    #[test]
    fn per_company_average_cost_is_rounded() {
        let averages: Vec<i64> = fixtures::cost_per_company()
            .iter()
            .map(CompanyCost::average_cost)
            .collect();
        assert_eq!(averages, vec![86, 91, 85, 93, 88]);
    }

    #[test]
    fn status_shares_are_whole_percents() {
        let shares = status_shares(&fixtures::platform_delivery_status());
        let percents: Vec<i64> = shares.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![81, 12, 6, 2]);
    }
}
