//! Plan domain module.
//!
//! Plans are named subscription tiers that bound the number of doctor seats
//! a clinic may use.

mod catalog;

pub use catalog::{PlanCatalog, PlanEntry};
