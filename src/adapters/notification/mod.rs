//! Notification gateway adapters.
//!
//! The real delivery transport (Telegram bot, webhooks) lives outside this
//! crate; these adapters cover the two needs the core has: a structured-log
//! stub for wiring without a transport, and a recording gateway for tests.

mod in_memory_gateway;
mod tracing_gateway;

pub use in_memory_gateway::{InMemoryNotificationGateway, SentNotification};
pub use tracing_gateway::TracingNotificationGateway;
