//! Adapters - Implementations of the ports.

pub mod clock;
pub mod memory;
pub mod notification;
pub mod pricing;
