//! Protocol modules (transaction envelope + proposal content).
//!
//! - `tx`: JSON transaction envelope with lazily decoded message bodies.
//! - `proposal`: the proposal shape the evaluator reads (title, summary,
//!   sub-messages) decoupled from any host governance types.
//!
//! Decoders are panic-free. A malformed envelope is a `GovGuardError`; an
//! undecodable sub-message payload is kept as `Payload::Undecodable` so the
//! rest of the proposal is still inspected.

pub mod proposal;
pub mod tx;
