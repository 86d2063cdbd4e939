//! Extension request repository port.
//!
//! Requests are an audit trail: created once, decided once, never deleted.
//! The repository owns the two concurrency-sensitive operations of the
//! workflow:
//!
//! - `insert_pending` must atomically check that no pending request exists
//!   for the clinic and insert the new one, so at most one pending request
//!   survives concurrent submissions (a database adapter would use a partial
//!   unique index on `(clinic_id) WHERE status = 'pending'`).
//! - `transition_if_pending` must be a status-guarded compare-and-set
//!   (`UPDATE ... WHERE id = ? AND status = 'pending'` checking the affected
//!   row count), so exactly one of two concurrent decisions wins.

use crate::domain::foundation::{ClinicId, DomainError, RequestId, Timestamp};
use crate::domain::request::ExtensionRequest;
use async_trait::async_trait;

/// Repository port for ExtensionRequest persistence.
#[async_trait]
pub trait ExtensionRequestRepository: Send + Sync {
    /// Insert a new pending request, enforcing pending-uniqueness per clinic.
    ///
    /// # Errors
    ///
    /// - `DuplicateRequest` if the clinic already has a pending request
    /// - `Unavailable` on persistence failure
    async fn insert_pending(&self, request: &ExtensionRequest) -> Result<(), DomainError>;

    /// Find a request by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<ExtensionRequest>, DomainError>;

    /// Atomically decide the request if it is still pending.
    ///
    /// Returns the updated request when the guard matched, or `None` when
    /// the request exists but is no longer pending (a concurrent decision
    /// won). The caller maps `None` to `InvalidState`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no request with this id exists
    /// - `Unavailable` on persistence failure
    async fn transition_if_pending(
        &self,
        id: &RequestId,
        approved: bool,
        comment: Option<String>,
        decided_at: Timestamp,
    ) -> Result<Option<ExtensionRequest>, DomainError>;

    /// Compensating rollback: return a decided request to pending.
    ///
    /// Used only when applying an approved decision to the subscription
    /// fails, so the request is never left "approved but not applied".
    /// Clears the decision comment and timestamp. Reopening must uphold
    /// pending-uniqueness: if the clinic submitted a new pending request
    /// after this one was decided, the rollback is refused.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no request with this id exists
    /// - `DuplicateRequest` if another pending request exists for the clinic
    /// - `Unavailable` on persistence failure
    async fn reopen(&self, id: &RequestId) -> Result<(), DomainError>;

    /// List all requests for a clinic, newest first.
    async fn list_by_clinic(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Vec<ExtensionRequest>, DomainError>;
}
