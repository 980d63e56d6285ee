use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::dispatch::{AutoAssignOutcome, Priority, RouteSuggestion, UnassignedOrder};
use crate::repositories::Repository;
use crate::resource::aggregates::count_where;
use crate::resource::{CategoryFilter, ResourceBrowser, Selection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    pub pending: usize,
    pub high_priority: usize,
    pub suggestions: usize,
}

/// Board of unassigned orders with the batch selection used for manual
/// assignment.
#[derive(Debug, Clone)]
pub struct DispatchBoard {
    browser: ResourceBrowser<UnassignedOrder>,
}

impl DispatchBoard {
    pub fn new(orders: Vec<UnassignedOrder>) -> Self {
        Self {
            browser: ResourceBrowser::new(orders),
        }
    }

    /// Orders passing the current search and priority filter.
    pub fn visible(&self) -> Vec<&UnassignedOrder> {
        self.browser.visible()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.browser.set_query(query);
    }

    pub fn set_priority(&mut self, priority: CategoryFilter<Priority>) {
        self.browser.set_category(priority);
    }

    pub fn toggle(&mut self, id: u32) -> bool {
        self.browser.toggle(&id)
    }

    /// Adds `id` to the selection, leaving it selected if it already was.
    /// Returns false when the order is not on the board.
    pub fn select(&mut self, id: u32) -> bool {
        if !self.browser.store().contains(&id) {
            return false;
        }
        if !self.is_selected(id) {
            self.browser.toggle(&id);
        }
        true
    }

    pub fn select_all(&mut self) {
        self.browser.select_all_visible();
    }

    pub fn clear(&mut self) {
        self.browser.clear_batch();
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.browser.batch().contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.browser.batch().len()
    }

    /// Codes of the selected orders, in board order.
    pub fn selected_codes(&self) -> Vec<String> {
        self.browser
            .batch_records()
            .into_iter()
            .map(|order| order.code.clone())
            .collect()
    }

    pub fn can_manual_assign(&self) -> bool {
        !self.browser.batch().is_empty()
    }

    /// Reloads the board; selections of orders no longer listed are dropped.
    pub fn refresh(&mut self, orders: Vec<UnassignedOrder>) -> usize {
        self.browser.replace_all(orders)
    }
}

#[derive(Clone)]
pub struct DispatchService {
    orders: Arc<dyn Repository<UnassignedOrder>>,
    suggestions: Arc<Vec<RouteSuggestion>>,
    config: Arc<AppConfig>,
    event_sender: EventSender,
}

impl DispatchService {
    pub fn new(
        orders: Arc<dyn Repository<UnassignedOrder>>,
        suggestions: Vec<RouteSuggestion>,
        config: Arc<AppConfig>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            orders,
            suggestions: Arc::new(suggestions),
            config,
            event_sender,
        }
    }

    pub async fn board(&self) -> Result<DispatchBoard, ServiceError> {
        Ok(DispatchBoard::new(self.orders.list().await?))
    }

    pub fn suggestions(&self) -> &[RouteSuggestion] {
        &self.suggestions
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DispatchSummary, ServiceError> {
        let orders = self.orders.list().await?;
        Ok(DispatchSummary {
            pending: orders.len(),
            high_priority: count_where(&orders, |o| o.priority == Priority::High),
            suggestions: self.suggestions.len(),
        })
    }

    /// Assigns the board's selected orders to `shipper` and clears the
    /// selection. Returns the assigned order codes.
    #[instrument(skip(self, board), fields(selected = board.selected_count()))]
    pub async fn manual_assign(
        &self,
        board: &mut DispatchBoard,
        shipper: &str,
    ) -> Result<Vec<String>, ServiceError> {
        if !board.can_manual_assign() {
            return Err(ServiceError::InvalidOperation(
                "Select at least one order to assign".to_string(),
            ));
        }
        let shipper = shipper.trim();
        if shipper.is_empty() {
            return Err(ServiceError::ValidationError(
                "Shipper is required".to_string(),
            ));
        }

        let codes = board.selected_codes();
        board.clear();
        if let Err(e) = self
            .event_sender
            .send(Event::OrdersAssigned {
                codes: codes.clone(),
                shipper: shipper.to_string(),
            })
            .await
        {
            warn!(error = %e, count = codes.len(), "Failed to send orders assigned event");
        }
        info!(count = codes.len(), %shipper, "orders assigned");
        Ok(codes)
    }

    /// Runs the optimisation delay, then assigns every unassigned order.
    /// Cancelling `cancel` before the delay elapses aborts without emitting
    /// anything.
    #[instrument(skip(self, cancel))]
    pub async fn auto_assign(
        &self,
        cancel: CancellationToken,
    ) -> Result<AutoAssignOutcome, ServiceError> {
        let delay = self.config.auto_assign_delay();
        info!(delay_ms = delay.as_millis() as u64, "auto-assign started");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("auto-assign cancelled");
                return Err(ServiceError::Cancelled("Auto-assign was cancelled".to_string()));
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let outcome = AutoAssignOutcome {
            assigned: self.orders.list().await?.len(),
        };
        self.event_sender
            .send(Event::OrdersAutoAssigned {
                count: outcome.assigned,
            })
            .await?;
        info!(assigned = outcome.assigned, "auto-assign finished");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    pub async fn apply_suggestion(&self, route: &str) -> Result<RouteSuggestion, ServiceError> {
        let suggestion = self
            .suggestions
            .iter()
            .find(|s| s.route.eq_ignore_ascii_case(route.trim()))
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Route suggestion", route))?;

        self.event_sender
            .send(Event::RouteSuggestionApplied {
                route: suggestion.route.clone(),
            })
            .await?;
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use tokio::sync::mpsc;

    fn service(delay_ms: u64) -> (DispatchService, mpsc::Receiver<Event>) {
        let (sender, rx) = EventSender::channel(8);
        let config = AppConfig {
            auto_assign_delay_ms: delay_ms,
            ..AppConfig::default()
        };
        let service = DispatchService::new(
            Arc::new(InMemoryRepository::new(
                "Unassigned order",
                fixtures::unassigned_orders(),
            )),
            fixtures::route_suggestions(),
            Arc::new(config),
            sender,
        );
        (service, rx)
    }

    #[tokio::test]
    async fn summary_counts_board() {
        let (service, _rx) = service(0);
        assert_eq!(
            service.summary().await.unwrap(),
            DispatchSummary {
                pending: 6,
                high_priority: 3,
                suggestions: 3,
            }
        );
    }

    #[tokio::test]
    async fn auto_assign_assigns_every_pending_order() {
        let (service, mut rx) = service(0);
        let outcome = service.auto_assign(CancellationToken::new()).await.unwrap();
        assert_eq!(outcome.assigned, 6);
        assert_eq!(
            outcome.message(),
            "Successfully assigned 6 orders using AI optimization"
        );
        assert_matches!(rx.try_recv(), Ok(Event::OrdersAutoAssigned { count: 6 }));
    }

    #[tokio::test]
    async fn cancelled_auto_assign_emits_nothing() {
        let (service, mut rx) = service(60_000);
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_matches!(
            service.auto_assign(cancel).await,
            Err(ServiceError::Cancelled(_))
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_during_delay() {
        let (service, _rx) = service(60_000);
        let cancel = CancellationToken::new();
        let task = tokio::spawn({
            let service = service.clone();
            let cancel = cancel.clone();
            async move { service.auto_assign(cancel).await }
        });
        tokio::task::yield_now().await;
        cancel.cancel();
        assert_matches!(task.await.unwrap(), Err(ServiceError::Cancelled(_)));
    }

    #[tokio::test]
    async fn manual_assign_requires_selection_and_shipper() {
        let (service, mut rx) = service(0);
        let mut board = service.board().await.unwrap();
        assert!(!board.can_manual_assign());
        assert_matches!(
            service.manual_assign(&mut board, "John Doe").await,
            Err(ServiceError::InvalidOperation(_))
        );

        board.toggle(4);
        board.toggle(1);
        assert_matches!(
            service.manual_assign(&mut board, "  ").await,
            Err(ServiceError::ValidationError(_))
        );
        assert!(board.can_manual_assign());

        let codes = service.manual_assign(&mut board, "John Doe").await.unwrap();
        assert_eq!(codes, vec!["ORD-2460", "ORD-2463"]);
        assert!(!board.can_manual_assign());
        assert_matches!(rx.try_recv(), Ok(Event::OrdersAssigned { shipper, .. }) if shipper == "John Doe");
    }

    #[tokio::test]
    async fn selecting_twice_keeps_order_selected() {
        let (service, _rx) = service(0);
        let mut board = service.board().await.unwrap();
        assert!(board.select(1));
        assert!(board.select(1));
        assert!(board.is_selected(1));
        assert_eq!(board.selected_count(), 1);
        assert!(!board.select(99));
        assert_eq!(board.selected_count(), 1);
    }

    #[tokio::test]
    async fn manual_assign_clears_board_when_event_channel_is_closed() {
        let (service, rx) = service(0);
        drop(rx);
        let mut board = service.board().await.unwrap();
        board.select(4);

        let codes = service.manual_assign(&mut board, "John Doe").await.unwrap();
        assert_eq!(codes, vec!["ORD-2463"]);
        assert!(!board.can_manual_assign());
    }

    #[tokio::test]
    async fn select_all_follows_priority_filter() {
        let (service, _rx) = service(0);
        let mut board = service.board().await.unwrap();
        board.set_priority(CategoryFilter::Only(Priority::High));
        board.select_all();
        assert_eq!(board.selected_codes(), vec!["ORD-2460", "ORD-2463", "ORD-2465"]);

        board.clear();
        assert_eq!(board.selected_count(), 0);
    }

    #[tokio::test]
    async fn refresh_drops_vanished_selection() {
        let (service, _rx) = service(0);
        let mut board = service.board().await.unwrap();
        board.toggle(2);
        board.toggle(3);
        let remaining: Vec<_> = fixtures::unassigned_orders()
            .into_iter()
            .filter(|o| o.id != 3)
            .collect();
        assert_eq!(board.refresh(remaining), 1);
        assert!(board.is_selected(2));
        assert!(!board.is_selected(3));
    }

    #[tokio::test]
    async fn apply_known_and_unknown_routes() {
        let (service, mut rx) = service(0);
        let applied = service.apply_suggestion("route b").await.unwrap();
        assert_eq!(applied.orders, vec!["ORD-2461", "ORD-2464"]);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.notification(), "Applied Route B suggestions");

        assert_matches!(
            service.apply_suggestion("Route Z").await,
            Err(ServiceError::NotFound(_))
        );
    }
}
