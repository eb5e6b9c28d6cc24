use govguard_core::error::{GovGuardError, Result};
use govguard_core::{Msg, Tx};

use super::chain::{AnteDecorator, Next, TxContext};

/// Stateless well-formedness checks run ahead of content policy.
#[derive(Debug, Default)]
pub struct BasicTxValidation;

impl AnteDecorator for BasicTxValidation {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn ante_handle(&self, ctx: &mut TxContext, tx: &Tx, simulate: bool, next: Next<'_>) -> Result<()> {
        if tx.msgs.is_empty() {
            return Err(GovGuardError::InvalidRequest("tx must contain at least one message".into()));
        }

        for (i, msg) in tx.msgs.iter().enumerate() {
            if let Msg::SubmitProposal(p) = msg {
                if p.title.trim().is_empty() {
                    return Err(GovGuardError::InvalidRequest(format!(
                        "msgs[{i}]: proposal title cannot be blank"
                    )));
                }
            }
        }

        next.run(ctx, tx, simulate)
    }
}
