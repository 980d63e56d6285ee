use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::models::activity::ScanDirection;
use crate::models::StockStatus;

/// Notifications raised by the services. These replace the toasts of the web
/// front end: every user action that used to pop a message now emits one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // Inventory events
    InventoryAdjusted {
        sku: String,
        warehouse_id: String,
        old_on_hand: u32,
        new_on_hand: u32,
        status: StockStatus,
        reason: String,
    },
    StockMoved {
        sku: String,
        from_zone: String,
        to_zone: String,
        quantity: u32,
    },
    GoodsScanned {
        direction: ScanDirection,
        code: String,
    },

    // Dispatch events
    OrdersAutoAssigned {
        count: usize,
    },
    OrdersAssigned {
        codes: Vec<String>,
        shipper: String,
    },
    RouteSuggestionApplied {
        route: String,
    },

    // Admin events
    CompanyApproved {
        company_id: u32,
        name: String,
    },
    CompanyRejected {
        company_id: u32,
        name: String,
    },

    Generic {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn with_message(message: impl Into<String>) -> Self {
        Event::Generic {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// User-facing text for the event.
    pub fn notification(&self) -> String {
        match self {
            Event::InventoryAdjusted {
                sku, new_on_hand, ..
            } => format!("Inventory for {} adjusted to {} units", sku, new_on_hand),
            Event::StockMoved {
                sku,
                to_zone,
                quantity,
                ..
            } => format!("Moved {} units of {} to {}", quantity, sku, to_zone),
            Event::GoodsScanned { direction, code } => {
                format!("Recorded {} scan for {}", direction, code)
            }
            Event::OrdersAutoAssigned { count } => {
                format!("Successfully assigned {} orders using AI optimization", count)
            }
            Event::OrdersAssigned { codes, shipper } => {
                format!("Assigned {} orders to {}", codes.len(), shipper)
            }
            Event::RouteSuggestionApplied { route } => format!("Applied {} suggestions", route),
            Event::CompanyApproved { name, .. } => format!("{} has been approved", name),
            Event::CompanyRejected { name, .. } => {
                format!("{} registration has been rejected", name)
            }
            Event::Generic { message, .. } => message.clone(),
        }
    }

    /// Rejections are shown as errors, everything else as success.
    pub fn is_error(&self) -> bool {
        matches!(self, Event::CompanyRejected { .. })
    }
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Bounded channel with a sender wrapped for the services.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Sends an event, waiting for channel capacity.
    pub async fn send(&self, event: Event) -> Result<(), ServiceError> {
        self.sender
            .send(event)
            .await
            .map_err(|e| ServiceError::EventError(format!("Failed to send event: {}", e)))
    }
}

/// Drains `rx` until every sender is dropped, logging each event. Returns the
/// number of events processed.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) -> usize {
    info!("Starting event processing loop");
    let mut processed = 0;

    while let Some(event) = rx.recv().await {
        processed += 1;
        match &event {
            Event::InventoryAdjusted {
                sku,
                warehouse_id,
                old_on_hand,
                new_on_hand,
                status,
                reason,
            } => {
                info!(
                    %sku, %warehouse_id, old_on_hand, new_on_hand, %status, %reason,
                    "inventory adjusted"
                );
                if status.needs_attention() {
                    warn!(%sku, %status, "stock below reorder point");
                }
            }
            Event::CompanyRejected { company_id, name } => {
                warn!(company_id, %name, "company registration rejected");
            }
            other => {
                info!(notification = %other.notification(), "event received");
            }
        }
    }

    warn!(processed, "Event processing loop has ended");
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn notifications_match_front_end_wording() {
        let approved = Event::CompanyApproved {
            company_id: 1,
            name: "FastTech Logistics".into(),
        };
        assert_eq!(approved.notification(), "FastTech Logistics has been approved");
        assert!(!approved.is_error());

        let rejected = Event::CompanyRejected {
            company_id: 2,
            name: "GreenGoods Co.".into(),
        };
        assert_eq!(
            rejected.notification(),
            "GreenGoods Co. registration has been rejected"
        );
        assert!(rejected.is_error());

        let applied = Event::RouteSuggestionApplied {
            route: "Route A".into(),
        };
        assert_eq!(applied.notification(), "Applied Route A suggestions");
    }

    #[tokio::test]
    async fn process_events_drains_until_closed() {
        let (sender, rx) = EventSender::channel(8);
        sender
            .send(Event::OrdersAutoAssigned { count: 6 })
            .await
            .unwrap();
        sender.send(Event::with_message("hello")).await.unwrap();
        drop(sender);
        assert_eq!(process_events(rx).await, 2);
    }

    #[tokio::test]
    async fn send_after_receiver_dropped_is_event_error() {
        let (sender, rx) = EventSender::channel(1);
        drop(rx);
        let result = sender.send(Event::with_message("lost")).await;
        assert_matches!(result, Err(ServiceError::EventError(_)));
    }
}
