use std::sync::Arc;

use tokio::sync::mpsc;
use transport_hub::{
    config::AppConfig,
    events::{Event, EventSender},
    services::AppServices,
};

/// Seeded services with the event channel exposed so tests can assert on
/// the notifications each operation emits.
pub struct TestHub {
    pub services: AppServices,
    pub config: Arc<AppConfig>,
    events: mpsc::Receiver<Event>,
}

impl TestHub {
    /// Fresh fixtures; auto-assign completes without delay.
    pub fn new() -> Self {
        Self::with_config(AppConfig {
            auto_assign_delay_ms: 0,
            ..AppConfig::default()
        })
    }

    pub fn with_config(config: AppConfig) -> Self {
        let (sender, events) = EventSender::channel(config.event_channel_capacity);
        let config = Arc::new(config);
        let services = AppServices::seeded(config.clone(), sender);
        Self {
            services,
            config,
            events,
        }
    }

    /// Events emitted so far, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut drained = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            drained.push(event);
        }
        drained
    }

    /// Closes the receiving side; later sends fail.
    #[allow(dead_code)]
    pub fn close_events(&mut self) {
        self.events.close();
    }

    /// Notification texts of the events emitted so far.
    #[allow(dead_code)]
    pub fn drain_notifications(&mut self) -> Vec<String> {
        self.drain_events().iter().map(Event::notification).collect()
    }
}
