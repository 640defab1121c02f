// messages-api - HTTP routing service for a messages resource

pub mod cli;
pub mod config;
pub mod error;
pub mod messages;
pub mod metrics;
pub mod server;
pub mod utils;
