//! Request status state machine.
//!
//! Both request kinds share the same shape: a request starts `pending` and
//! transitions exactly once to `approved` or `rejected`. Both decision
//! states are terminal; a request is never re-opened through the state
//! machine (the compensating rollback in the store bypasses it on purpose).

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Status of an extension or plan-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting an operator decision.
    Pending,

    /// Approved by an operator. Terminal.
    Approved,

    /// Rejected by an operator. Terminal.
    Rejected,
}

impl RequestStatus {
    /// Returns true if the request is still awaiting a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }
}

impl StateMachine for RequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            Pending => vec![Approved, Rejected],
            Approved => vec![],
            Rejected => vec![],
        }
    }
}
