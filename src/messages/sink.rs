// Destinations for message handler diagnostics

use super::models::MessageEvent;
use parking_lot::Mutex;
use tracing::info;

/// Receives one event per handled message request.
///
/// Implementations are shared across request tasks, so they must be
/// `Send + Sync` and must not block.
pub trait MessageSink: Send + Sync {
    fn record(&self, event: MessageEvent);
}

/// Default sink: writes every event to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn record(&self, event: MessageEvent) {
        match event {
            MessageEvent::Listed => info!(operation = "list", "Listing messages"),
            MessageEvent::Created(body) => {
                info!(operation = "create", body = %body.to_value(), "Received message")
            }
            MessageEvent::Fetched { id } => info!(operation = "get", id = %id, "Fetching message"),
        }
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<MessageEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<MessageEvent> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<MessageEvent> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl MessageSink for RecordingSink {
    fn record(&self, event: MessageEvent) {
        self.events.lock().push(event);
    }
}
