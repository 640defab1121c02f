// Message request shapes and diagnostic events

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload accepted by `POST /messages`.
///
/// Any JSON object is accepted; its fields are kept exactly as sent.
/// Non-object JSON (arrays, strings, numbers, `null`) is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CreateMessageRequest {
    pub fields: Map<String, Value>,
}

impl CreateMessageRequest {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The payload as a plain JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// What a message handler received.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageEvent {
    /// `GET /messages`
    Listed,
    /// `POST /messages`
    Created(CreateMessageRequest),
    /// `GET /messages/:id`
    Fetched { id: String },
}

impl MessageEvent {
    /// Short operation name, used as a metrics label.
    pub fn operation(&self) -> &'static str {
        match self {
            MessageEvent::Listed => "list",
            MessageEvent::Created(_) => "create",
            MessageEvent::Fetched { .. } => "get",
        }
    }
}
