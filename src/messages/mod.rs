//! The `messages` resource.
//!
//! - `models`: the create payload and the events handlers emit.
//! - `sink`: where those events go (tracing by default, memory for tests).

pub mod models;
pub mod sink;

pub use models::{CreateMessageRequest, MessageEvent};
pub use sink::{MessageSink, RecordingSink, TracingSink};
