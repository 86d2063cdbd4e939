//! In-memory extension request repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{ClinicId, DomainError, ErrorCode, RequestId, Timestamp};
use crate::domain::request::{ExtensionRequest, RequestStatus};
use crate::ports::ExtensionRequestRepository;

/// In-memory extension request store.
///
/// Insertion order is preserved so `list_by_clinic` can report newest
/// first without a separate timestamp index.
#[derive(Default)]
pub struct InMemoryExtensionRequestRepository {
    requests: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    by_id: HashMap<RequestId, ExtensionRequest>,
    insertion_order: Vec<RequestId>,
}

impl InMemoryExtensionRequestRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExtensionRequestRepository for InMemoryExtensionRequestRepository {
    async fn insert_pending(&self, request: &ExtensionRequest) -> Result<(), DomainError> {
        // Single write lock covers both the duplicate check and the insert,
        // the in-process equivalent of a partial unique index.
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("extension request store lock poisoned"))?;

        let has_pending = store.by_id.values().any(|r| {
            r.clinic_id == request.clinic_id && r.status == RequestStatus::Pending
        });
        if has_pending {
            return Err(DomainError::new(
                ErrorCode::DuplicateRequest,
                format!(
                    "Clinic {} already has a pending extension request",
                    request.clinic_id
                ),
            ));
        }

        store.by_id.insert(request.id, request.clone());
        store.insertion_order.push(request.id);
        Ok(())
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<ExtensionRequest>, DomainError> {
        let store = self
            .requests
            .read()
            .map_err(|_| DomainError::unavailable("extension request store lock poisoned"))?;
        Ok(store.by_id.get(id).cloned())
    }

    async fn transition_if_pending(
        &self,
        id: &RequestId,
        approved: bool,
        comment: Option<String>,
        decided_at: Timestamp,
    ) -> Result<Option<ExtensionRequest>, DomainError> {
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("extension request store lock poisoned"))?;

        let request = store.by_id.get_mut(id).ok_or_else(|| {
            DomainError::not_found(format!("Extension request not found: {}", id))
        })?;

        // Status-guarded update: only a pending request transitions.
        if request.decide(approved, comment, decided_at).is_err() {
            return Ok(None);
        }
        Ok(Some(request.clone()))
    }

    async fn reopen(&self, id: &RequestId) -> Result<(), DomainError> {
        let mut store = self
            .requests
            .write()
            .map_err(|_| DomainError::unavailable("extension request store lock poisoned"))?;

        let clinic_id = match store.by_id.get(id) {
            Some(request) => request.clinic_id.clone(),
            None => {
                return Err(DomainError::not_found(format!(
                    "Extension request not found: {}",
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
                    "Clinic {} already has a newer pending extension request",
                    clinic_id
                ),
            ));
        }

        if let Some(request) = store.by_id.get_mut(id) {
            // Bypasses the state machine on purpose: this is the compensating
            // rollback for a decision whose side effects could not be applied.
            request.status = RequestStatus::Pending;
            request.admin_comment = None;
            request.decided_at = None;
        }
        Ok(())
    }

    async fn list_by_clinic(
        &self,
        clinic_id: &ClinicId,
    ) -> Result<Vec<ExtensionRequest>, DomainError> {
        let store = self
            .requests
            .read()
            .map_err(|_| DomainError::unavailable("extension request store lock poisoned"))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> ClinicId {
        ClinicId::new("najot").unwrap()
    }

    fn pending_request(months: u32) -> ExtensionRequest {
        ExtensionRequest::submit(
            RequestId::new(),
            clinic(),
            "Najot Shifo",
            months,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_returns_request() {
        let repo = InMemoryExtensionRequestRepository::new();
        let req = pending_request(3);
        repo.insert_pending(&req).await.unwrap();

        let found = repo.find_by_id(&req.id).await.unwrap();
        assert_eq!(found, Some(req));
    }

    #[tokio::test]
    async fn second_pending_insert_for_same_clinic_is_rejected() {
        let repo = InMemoryExtensionRequestRepository::new();
        repo.insert_pending(&pending_request(3)).await.unwrap();

        let err = repo.insert_pending(&pending_request(6)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateRequest);
    }

    #[tokio::test]
    async fn decided_request_allows_new_pending_insert() {
        let repo = InMemoryExtensionRequestRepository::new();
        let first = pending_request(3);
        repo.insert_pending(&first).await.unwrap();
        repo.transition_if_pending(&first.id, false, None, Timestamp::now())
            .await
            .unwrap();

        assert!(repo.insert_pending(&pending_request(6)).await.is_ok());
    }

    #[tokio::test]
    async fn transition_if_pending_decides_exactly_once() {
        let repo = InMemoryExtensionRequestRepository::new();
        let req = pending_request(3);
        repo.insert_pending(&req).await.unwrap();

        let first = repo
            .transition_if_pending(&req.id, true, Some("ok".into()), Timestamp::now())
            .await
            .unwrap();
        assert_eq!(first.unwrap().status, RequestStatus::Approved);

        let second = repo
            .transition_if_pending(&req.id, true, None, Timestamp::now())
            .await
            .unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn transition_unknown_id_fails_not_found() {
        let repo = InMemoryExtensionRequestRepository::new();
        let err = repo
            .transition_if_pending(&RequestId::new(), true, None, Timestamp::now())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn reopen_returns_request_to_pending() {
        let repo = InMemoryExtensionRequestRepository::new();
        let req = pending_request(3);
        repo.insert_pending(&req).await.unwrap();
        repo.transition_if_pending(&req.id, true, Some("ok".into()), Timestamp::now())
            .await
            .unwrap();

        repo.reopen(&req.id).await.unwrap();

        let found = repo.find_by_id(&req.id).await.unwrap().unwrap();
        assert_eq!(found.status, RequestStatus::Pending);
        assert!(found.admin_comment.is_none());
        assert!(found.decided_at.is_none());
    }

    #[tokio::test]
    async fn reopen_refuses_when_a_newer_pending_request_exists() {
        let repo = InMemoryExtensionRequestRepository::new();
        let first = pending_request(3);
        repo.insert_pending(&first).await.unwrap();
        repo.transition_if_pending(&first.id, true, None, Timestamp::now())
            .await
            .unwrap();
        let second = pending_request(6);
        repo.insert_pending(&second).await.unwrap();

        let err = repo.reopen(&first.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateRequest);

        // The first request stays decided; at most one request is pending.
        let found = repo.find_by_id(&first.id).await.unwrap().unwrap();
        assert_eq!(found.status, RequestStatus::Approved);
        let pending: Vec<_> = repo
            .list_by_clinic(&clinic())
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.status.is_pending())
            .collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second.id);
    }

    #[tokio::test]
    async fn list_by_clinic_is_newest_first() {
        let repo = InMemoryExtensionRequestRepository::new();
        let first = pending_request(3);
        repo.insert_pending(&first).await.unwrap();
        repo.transition_if_pending(&first.id, false, None, Timestamp::now())
            .await
            .unwrap();
        let second = pending_request(6);
        repo.insert_pending(&second).await.unwrap();

        let listed = repo.list_by_clinic(&clinic()).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }
}
