//! Ante chain: ordered pre-execution admission stages.
//!
//! Each stage receives the transaction and a `Next` continuation for the
//! rest of the chain. Stages are synchronous; a rejection short-circuits
//! everything after it.

pub mod basic;
pub mod chain;
pub mod guard;

use std::sync::Arc;

pub use basic::BasicTxValidation;
pub use chain::{AnteChain, AnteDecorator, Next, TxContext};
pub use guard::GovernanceGuard;

use crate::keeper::PolicyStore;
use crate::obs::GuardMetrics;

/// Default node chain: basic checks, then the governance guard.
pub fn default_chain(store: Arc<PolicyStore>, metrics: Arc<GuardMetrics>) -> AnteChain {
    AnteChain::new()
        .with(Arc::new(BasicTxValidation))
        .with(Arc::new(GovernanceGuard::new(store).with_metrics(metrics)))
}
