//! Governance proposal guard.
//!
//! Rejects the whole transaction on the first proposal submission the
//! policy denies. Must sit after basic well-formedness checks and before
//! anything that touches governance state.

use std::sync::Arc;

use govguard_core::error::{GovGuardError, Result};
use govguard_core::{Msg, Tx};

use super::chain::{AnteDecorator, Next, TxContext};
use crate::keeper::PolicyStore;
use crate::obs::GuardMetrics;

pub struct GovernanceGuard {
    store: Arc<PolicyStore>,
    metrics: Option<Arc<GuardMetrics>>,
}

impl GovernanceGuard {
    pub fn new(store: Arc<PolicyStore>) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<GuardMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

impl AnteDecorator for GovernanceGuard {
    fn name(&self) -> &'static str {
        "governance_guard"
    }

    fn ante_handle(&self, ctx: &mut TxContext, tx: &Tx, simulate: bool, next: Next<'_>) -> Result<()> {
        // one snapshot per tx; a concurrent replace applies to the next tx
        let policy = self.store.current();
        if !policy.enabled {
            return next.run(ctx, tx, simulate);
        }

        for (i, msg) in tx.msgs.iter().enumerate() {
            let Msg::SubmitProposal(p) = msg else { continue };

            tracing::debug!(msg_index = i, chain_id = %ctx.chain_id, "inspecting proposal submission");

            if let Err(reason) = PolicyStore::validate_with(&policy, &p.view()) {
                if let Some(m) = &self.metrics {
                    m.denials.inc(&[("source", reason.source.as_str()), ("term", reason.term.as_str())]);
                }
                tracing::info!(
                    msg_index = i,
                    sequence = ctx.sequence,
                    simulate,
                    term = %reason.term,
                    "tx rejected by governance guard"
                );
                return Err(GovGuardError::InvalidRequest(format!(
                    "governance proposal validation failed: {reason}"
                )));
            }
        }

        next.run(ctx, tx, simulate)
    }
}
