//! Live restriction policy holder.
//!
//! The policy is kept behind `RwLock<Arc<Policy>>`: readers clone the `Arc`
//! and release the lock immediately, so a `replace` never tears a read and
//! no lock is held while evaluating or logging. A replacement is visible to
//! every evaluation that starts after `replace` returns.

use std::sync::{Arc, PoisonError, RwLock};

use govguard_core::policy::{evaluate, Decision, DenyReason, Policy};
use govguard_core::ProposalView;

pub struct PolicyStore {
    inner: RwLock<Arc<Policy>>,
}

impl PolicyStore {
    pub fn new(policy: Policy) -> Self {
        Self {
            inner: RwLock::new(Arc::new(policy)),
        }
    }

    /// Snapshot of the live policy. Mutating the returned value has no
    /// effect on the store.
    pub fn current(&self) -> Arc<Policy> {
        // the guarded value is an Arc swapped whole; a poisoned lock still holds a valid one
        let g = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&g)
    }

    /// Swap the live policy. No validation is performed here.
    pub fn replace(&self, policy: Policy) {
        let next = Arc::new(policy);
        let mut g = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *g = next;
    }

    pub fn is_enforcement_active(&self) -> bool {
        self.current().enabled
    }

    /// Evaluate against the live policy, logging the outcome.
    pub fn validate_proposal(&self, proposal: &ProposalView<'_>) -> Result<(), DenyReason> {
        Self::validate_with(&self.current(), proposal)
    }

    /// Evaluate against a snapshot taken earlier with [`current`](Self::current),
    /// logging the outcome. Lets a caller check several proposals against
    /// one policy even if `replace` runs in between.
    pub fn validate_with(policy: &Policy, proposal: &ProposalView<'_>) -> Result<(), DenyReason> {
        match evaluate(policy, proposal) {
            Decision::Allow => {
                tracing::debug!(proposal_id = ?proposal.id, "proposal passed leverage restrictions");
                Ok(())
            }
            Decision::Deny(reason) => {
                tracing::info!(
                    proposal_id = ?proposal.id,
                    term = %reason.term,
                    source = reason.source.as_str(),
                    "proposal denied by leverage restrictions"
                );
                Err(reason)
            }
        }
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}
