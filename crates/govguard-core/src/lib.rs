//! govguard core: governance-proposal restriction policy, wire types, and errors.
//!
//! This crate defines the restriction rule set, the pure evaluator that
//! applies it to proposal content, and the transaction/proposal shapes the
//! node decodes from the wire. It carries no runtime or transport
//! dependencies so the evaluator can be reused outside the admission
//! pipeline (linting tools, tests, other hosts).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `GovGuardError` or, for individual proposal
//! sub-messages, as a non-match.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod protocol;

pub use error::{GovGuardError, Result};
pub use policy::{evaluate, Decision, DenyReason, MatchSource, Policy};
pub use protocol::proposal::{Payload, ProposalView, SubMessage};
pub use protocol::tx::{Msg, MsgSubmitProposal, Tx};
