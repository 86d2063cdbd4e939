//! In-memory store adapters.
//!
//! Reference implementations of the store ports behind `RwLock`s. Each
//! lock-guarded method is the in-process equivalent of a single database
//! transaction, which is what gives `insert_pending` its atomic
//! check-and-insert and `transition_if_pending` its compare-and-set
//! semantics. A SQL adapter would express the same contract with a partial
//! unique index and a status-guarded `UPDATE`.

mod extension_request_repository;
mod payment_ledger;
mod plan_change_request_repository;
mod subscription_repository;

pub use extension_request_repository::InMemoryExtensionRequestRepository;
pub use payment_ledger::InMemoryPaymentLedger;
pub use plan_change_request_repository::InMemoryPlanChangeRequestRepository;
pub use subscription_repository::InMemorySubscriptionRepository;
