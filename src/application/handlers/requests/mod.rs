//! Request workflow handlers.
//!
//! Creation handlers record a clinic's ask and alert the operator. Decision
//! handlers claim the request with a status-guarded compare-and-set before
//! touching the subscription, so concurrent decisions resolve to exactly
//! one winner, and roll the claim back if applying an approval fails.

mod decide_extension;
mod decide_plan_change;
mod request_extension;
mod request_plan_change;

pub use decide_extension::{
    DecideExtensionCommand, DecideExtensionHandler, DecideExtensionResult,
};
pub use decide_plan_change::{
    DecidePlanChangeCommand, DecidePlanChangeHandler, DecidePlanChangeResult,
};
pub use request_extension::{
    RequestExtensionCommand, RequestExtensionHandler, RequestExtensionResult,
};
pub use request_plan_change::{
    RequestPlanChangeCommand, RequestPlanChangeHandler, RequestPlanChangeResult,
};
