//! Request domain module.
//!
//! Clinic-side asks that require operator approval. Requests transition
//! exactly once (`pending` to `approved` or `rejected`) and are retained
//! forever as an audit trail.
//!
//! # Module Structure
//!
//! - `status` - RequestStatus state machine
//! - `extension` - ExtensionRequest aggregate
//! - `plan_change` - PlanChangeRequest aggregate

mod errors;
mod extension;
mod plan_change;
mod status;

pub use errors::RequestError;
pub use extension::{ExtensionRequest, MAX_EXTENSION_MONTHS, MIN_EXTENSION_MONTHS};
pub use plan_change::PlanChangeRequest;
pub use status::RequestStatus;
