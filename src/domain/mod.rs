//! Domain layer - aggregates, value objects, and domain errors.

pub mod foundation;
pub mod payment;
pub mod plan;
pub mod request;
pub mod subscription;
