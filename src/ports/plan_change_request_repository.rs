//! Plan-change request repository port.
//!
//! Same contract shape as the extension request repository: atomic
//! pending-uniqueness on insert, status-guarded compare-and-set on
//! decision, compensating `reopen` for failed approvals.

use crate::domain::foundation::{ClinicId, DomainError, RequestId, Timestamp};
use crate::domain::request::PlanChangeRequest;
use async_trait::async_trait;

/// Repository port for PlanChangeRequest persistence.
#[async_trait]
pub trait PlanChangeRequestRepository: Send + Sync {
    /// Insert a new pending request, enforcing pending-uniqueness per clinic.
    ///
    /// # Errors
    ///
    /// - `DuplicateRequest` if the clinic already has a pending request
    /// - `Unavailable` on persistence failure
    async fn insert_pending(&self, request: &PlanChangeRequest) -> Result<(), DomainError>;

    /// Find a request by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<PlanChangeRequest>, DomainError>;

    /// Atomically decide the request if it is still pending.
    ///
    /// Returns the updated request when the guard matched, or `None` when
    /// the request exists but is no longer pending.
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
    ) -> Result<Option<PlanChangeRequest>, DomainError>;

    /// Compensating rollback: return a decided request to pending.
    ///
    /// Refused when the clinic has meanwhile submitted a new pending
    /// request, so pending-uniqueness survives the rollback.
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
    ) -> Result<Vec<PlanChangeRequest>, DomainError>;
}
