use std::sync::Arc;

use govguard_core::error::Result;
use govguard_core::Tx;

/// Per-transaction context threaded through the ante chain.
#[derive(Debug, Clone)]
pub struct TxContext {
    pub chain_id: String,
    /// Node-local arrival counter.
    pub sequence: u64,
    /// Set once every stage has passed.
    pub admitted: bool,
}

impl TxContext {
    pub fn new(chain_id: impl Into<String>, sequence: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            sequence,
            admitted: false,
        }
    }
}

/// One pre-execution admission stage.
///
/// A stage either returns an error (the transaction is rejected and no later
/// stage runs) or hands the untouched transaction to `next`.
pub trait AnteDecorator: Send + Sync {
    fn name(&self) -> &'static str;

    fn ante_handle(&self, ctx: &mut TxContext, tx: &Tx, simulate: bool, next: Next<'_>)
        -> Result<()>;
}

/// Continuation over the remaining stages.
pub struct Next<'a> {
    rest: &'a [Arc<dyn AnteDecorator>],
}

impl<'a> Next<'a> {
    pub fn run(self, ctx: &mut TxContext, tx: &Tx, simulate: bool) -> Result<()> {
        match self.rest.split_first() {
            Some((stage, rest)) => stage.ante_handle(ctx, tx, simulate, Next { rest }),
            None => {
                ctx.admitted = true;
                Ok(())
            }
        }
    }

    /// Continuation with no stages left.
    pub fn end() -> Next<'static> {
        Next { rest: &[] }
    }
}

/// Ordered list of ante stages.
#[derive(Default, Clone)]
pub struct AnteChain {
    stages: Vec<Arc<dyn AnteDecorator>>,
}

impl AnteChain {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn with(mut self, stage: Arc<dyn AnteDecorator>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn handle(&self, ctx: &mut TxContext, tx: &Tx, simulate: bool) -> Result<()> {
        Next { rest: &self.stages }.run(ctx, tx, simulate)
    }
}
