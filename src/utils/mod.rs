//! Cross-cutting helpers for the messages API.
//!
//! # Submodules
//!
//! - `logging`: Tracing subscriber initialization.

pub mod logging;
