//! In-memory plan-change request repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{ClinicId, DomainError, ErrorCode, RequestId, Timestamp};
use crate::domain::request::{PlanChangeRequest, RequestStatus};
use crate::ports::PlanChangeRequestRepository;

/// In-memory plan-change request store.
#[derive(Default)]
pub struct InMemoryPlanChangeRequestRepository {
    requests: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    by_id: HashMap<RequestId, PlanChangeRequest>,
    insertion_order: Vec<RequestId>,
}

impl InMemoryPlanChangeRequestRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanChangeRequestRepository for InMemoryPlanChangeRequestRepository {
    async fn insert_pending(&self, request: &PlanChangeRequest) -> Result<(), DomainError> {
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("plan-change request store lock poisoned"))?;

        let has_pending = store.by_id.values().any(|r| {
            r.clinic_id == request.clinic_id && r.status == RequestStatus::Pending
        });
        if has_pending {
            return Err(DomainError::new(
                ErrorCode::DuplicateRequest,
                format!(
                    "Clinic {} already has a pending plan-change request",
                    request.clinic_id
                ),
            ));
        }

        store.by_id.insert(request.id, request.clone());
        store.insertion_order.push(request.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<PlanChangeRequest>, DomainError> {
        let store = self
            .requests
            .read()
            .map_err(|_| DomainError::unavailable("plan-change request store lock poisoned"))?;
        Ok(store.by_id.get(id).cloned())
    }

    async fn transition_if_pending(
        &self,
        id: &RequestId,
        approved: bool,
        comment: Option<String>,
        decided_at: Timestamp,
    ) -> Result<Option<PlanChangeRequest>, DomainError> {
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("plan-change request store lock poisoned"))?;

        let request = store.by_id.get_mut(id).ok_or_else(|| {
            DomainError::not_found(format!("Plan-change request not found: {}", id))
        })?;

        if request.decide(approved, comment, decided_at).is_err() {
            return Ok(None);
        }
        Ok(Some(request.clone()))
    }

    async fn reopen(&self, id: &RequestId) -> Result<(), DomainError> {
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("plan-change request store lock poisoned"))?;

        let clinic_id = match store.by_id.get(id) {
            Some(request) => request.clinic_id.clone(),
            None => {
                return Err(DomainError::not_found(format!(
                    "Plan-change request not found: {}",
                    id
                )))
            }
        };

        // The clinic may have submitted a new request after this one was
        // decided; reopening would then break pending-uniqueness.
        let has_other_pending = store.by_id.values().any(|r| {
            r.id != *id && r.clinic_id == clinic_id && r.status == RequestStatus::Pending
        });
        if has_other_pending {
            return Err(DomainError::new(
                ErrorCode::DuplicateRequest,
                format!(
                    "Clinic {} already has a newer pending plan-change request",
                    clinic_id
                ),
            ));
        }

        if let Some(request) = store.by_id.get_mut(id) {
            request.status = RequestStatus::Pending;
            request.admin_comment = None;
            request.decided_at = None;
        }
        Ok(())
    }

    async fn list_by_clinic(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Vec<PlanChangeRequest>, DomainError> {
        let store = self
            .requests
            .read()
            .map_err(|_| DomainError::unavailable("plan-change request store lock poisoned"))?;
        Ok(store
            .insertion_order
            .iter()
            .rev()
            .filter_map(|id| store.by_id.get(id))
            .filter(|r| &r.clinic_id == clinic_id)
            .cloned()
            .collect())
    }
}
