//! Shared application state for the govguard node.
//!
//! Owns the single `PolicyStore`, the ante chain built over it, and the
//! metrics registry. Startup errors are returned, not panicked.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use govguard_core::error::{GovGuardError, Result};
use govguard_core::{Policy, Tx};

use crate::ante::{self, AnteChain, TxContext};
use crate::config::{self, NodeConfig};
use crate::keeper::PolicyStore;
use crate::obs::GuardMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<PolicyStore>,
    metrics: Arc<GuardMetrics>,
}

struct AppStateInner {
    cfg: NodeConfig,
    config_path: Option<String>,
    chain: AnteChain,
    seq: AtomicU64,
}

impl AppState {
    pub fn new(cfg: NodeConfig) -> Result<Self> {
        Self::build(cfg, None)
    }

    /// State whose policy can later be reloaded from `path`.
    pub fn with_config_path(cfg: NodeConfig, path: impl Into<String>) -> Result<Self> {
        Self::build(cfg, Some(path.into()))
    }

    fn build(cfg: NodeConfig, config_path: Option<String>) -> Result<Self> {
        cfg.validate()?;

        let policy = cfg.policy();
        if policy.enabled && (policy.restricted_keywords.is_empty() || policy.restricted_modules.is_empty()) {
            tracing::warn!("policy enabled with an empty restriction list");
        }
        tracing::info!(
            enabled = policy.enabled,
            keywords = policy.restricted_keywords.len(),
            modules = policy.restricted_modules.len(),
            "governance policy loaded"
        );

        let store = Arc::new(PolicyStore::new(policy));
        let metrics = Arc::new(GuardMetrics::default());
        let chain = ante::default_chain(Arc::clone(&store), Arc::clone(&metrics));
        tracing::debug!(stages = ?chain.stage_names(), "ante chain assembled");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                config_path,
                chain,
                seq: AtomicU64::new(1),
            }),
            store,
            metrics,
        })
    }

    pub fn cfg(&self) -> &NodeConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<PolicyStore> {
        Arc::clone(&self.store)
    }

    pub fn metrics(&self) -> Arc<GuardMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn policy(&self) -> Arc<Policy> {
        self.store.current()
    }

    /// Run the ante chain over `tx`.
    pub fn admit(&self, tx: &Tx, simulate: bool) -> Result<TxContext> {
        let seq = self.inner.seq.fetch_add(1, Ordering::Relaxed);
        let mut ctx = TxContext::new(self.inner.cfg.spot_only.chain_id.clone(), seq);

        match self.inner.chain.handle(&mut ctx, tx, simulate) {
            Ok(()) => {
                self.metrics.txs.inc(&[("outcome", "admitted")]);
                Ok(ctx)
            }
            Err(e) => {
                self.metrics.txs.inc(&[("outcome", "rejected")]);
                Err(e)
            }
        }
    }

    /// Re-read the config file and swap in its policy.
    /// Other sections only take effect on restart.
    pub fn reload_policy(&self) -> Result<()> {
        let path = self
            .inner
            .config_path
            .as_deref()
            .ok_or_else(|| GovGuardError::Internal("no config path to reload from".into()))?;

        match config::load_from_file(path) {
            Ok(cfg) => {
                let policy = cfg.policy();
                tracing::info!(
                    path,
                    enabled = policy.enabled,
                    keywords = policy.restricted_keywords.len(),
                    modules = policy.restricted_modules.len(),
                    "governance policy reloaded"
                );
                self.store.replace(policy);
                self.metrics.policy_reloads.inc(&[("outcome", "ok")]);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "policy reload failed; keeping current policy");
                self.metrics.policy_reloads.inc(&[("outcome", "failed")]);
                Err(e)
            }
        }
    }
}
