//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations across the ports. Command handlers own
//! the only code paths that mutate subscriptions, decide requests, and
//! append ledger records.

pub mod handlers;
pub mod notify;
