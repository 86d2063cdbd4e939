//! Command and query handlers.
//!
//! One file per operation. Handlers hold their collaborators as `Arc<dyn
//! Port>` and expose a single `handle` method.

pub mod requests;
pub mod subscription;
