//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `SubscriptionRepository` - One subscription per clinic
//! - `ExtensionRequestRepository` / `PlanChangeRequestRepository` - Request
//!   audit trail with atomic pending-uniqueness and status-guarded decisions
//! - `PaymentLedger` - Append-only payment history
//!
//! ## Collaborator Ports
//!
//! - `Clock` - Injected time source
//! - `NotificationGateway` - Best-effort message delivery
//! - `PricingPolicy` - Extension pricing, kept out of the workflow engine

mod clock;
mod extension_request_repository;
mod notification_gateway;
mod payment_ledger;
mod plan_change_request_repository;
mod pricing_policy;
mod subscription_repository;

pub use clock::Clock;
pub use extension_request_repository::ExtensionRequestRepository;
pub use notification_gateway::{NotificationChannel, NotificationGateway};
pub use payment_ledger::PaymentLedger;
pub use plan_change_request_repository::PlanChangeRequestRepository;
pub use pricing_policy::PricingPolicy;
pub use subscription_repository::SubscriptionRepository;
