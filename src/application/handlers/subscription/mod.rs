//! Subscription manager handlers.
//!
//! The only code paths that mutate a clinic's subscription. The request
//! workflow handlers delegate here when applying approved decisions, so
//! direct operator actions and approvals share one mutation path.

mod change_plan;
mod extend_subscription;
mod list_payments;
mod toggle_auto_renewal;

pub use change_plan::{ChangePlanCommand, ChangePlanHandler, ChangePlanResult};
pub use extend_subscription::{
    ExtendSubscriptionCommand, ExtendSubscriptionHandler, ExtendSubscriptionResult,
};
pub use list_payments::{ListPaymentsHandler, ListPaymentsQuery, ListPaymentsResult};
pub use toggle_auto_renewal::{
    ToggleAutoRenewalCommand, ToggleAutoRenewalHandler, ToggleAutoRenewalResult,
};
