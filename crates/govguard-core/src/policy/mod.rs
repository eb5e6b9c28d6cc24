//! Restriction policy (rule set + evaluator).
//!
//! `rules` holds the data: which keywords and module identifiers are
//! restricted and whether enforcement is on. `evaluator` applies a rule set
//! to a proposal and returns a `Decision`. Evaluation is pure: no I/O, no
//! shared state, same inputs give the same decision.

pub mod evaluator;
pub mod rules;

pub use evaluator::{
    evaluate, is_leverage_related, validate_proposal_content, Decision, DenyReason, MatchSource,
};
pub use rules::{Policy, LEVERAGE_RESTRICTED_KEYWORDS, LEVERAGE_RESTRICTED_MODULES};
