//! Proposal evaluation.
//!
//! Check order:
//! 1. `enabled == false` allows everything.
//! 2. Title and summary (lower-cased) against `restricted_keywords`.
//! 3. Sub-messages in order: type URLs containing `upgrade` are scanned for
//!    `restricted_modules`, type URLs containing `params` for
//!    `restricted_keywords`. Other sub-messages are not inspected.
//!
//! Matching is plain substring containment with no word boundaries
//! ("borrowed" matches "borrow"). Within each step the first listed term
//! that matches is reported.

use std::fmt;

use serde::Serialize;

use crate::policy::rules::{Policy, LEVERAGE_RESTRICTED_KEYWORDS};
use crate::protocol::proposal::{ProposalView, SubMessage};

/// Where a restricted term was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Proposal title or summary.
    Text,
    /// Payload of a software-upgrade sub-message.
    UpgradePayload,
    /// Payload of a parameter-change sub-message.
    ParamsPayload,
}

impl MatchSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchSource::Text => "text",
            MatchSource::UpgradePayload => "upgrade_payload",
            MatchSource::ParamsPayload => "params_payload",
        }
    }
}

/// Why a proposal was denied: the exact matched term and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenyReason {
    pub term: String,
    pub source: MatchSource,
}

impl DenyReason {
    pub fn new(source: MatchSource, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            source,
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            MatchSource::Text => write!(
                f,
                "proposal contains restricted leverage-related content: {}",
                self.term
            ),
            MatchSource::UpgradePayload => {
                write!(f, "upgrade proposal contains restricted module: {}", self.term)
            }
            MatchSource::ParamsPayload => write!(
                f,
                "parameter change proposal contains restricted content: {}",
                self.term
            ),
        }
    }
}

impl std::error::Error for DenyReason {}

/// Evaluation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Matched term when denied.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny(r) => Some(&r.term),
        }
    }

    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(r) => Err(r),
        }
    }
}

/// Apply `policy` to `proposal`.
pub fn evaluate(policy: &Policy, proposal: &ProposalView<'_>) -> Decision {
    if !policy.enabled {
        return Decision::Allow;
    }

    let title = proposal.title.to_lowercase();
    let summary = proposal.summary.to_lowercase();

    if let Some(term) = first_match(&policy.restricted_keywords, |k| {
        title.contains(k) || summary.contains(k)
    }) {
        return Decision::Deny(DenyReason::new(MatchSource::Text, term));
    }

    for msg in proposal.messages {
        if let Some(reason) = inspect_sub_message(policy, msg) {
            return Decision::Deny(reason);
        }
    }

    Decision::Allow
}

fn inspect_sub_message(policy: &Policy, msg: &SubMessage) -> Option<DenyReason> {
    let type_url = msg.type_url();
    let is_upgrade = type_url.contains("upgrade");
    let is_params = type_url.contains("params");
    if !is_upgrade && !is_params {
        return None;
    }

    // undecodable payload: nothing to scan
    let text = msg.payload_text()?.to_lowercase();

    if is_upgrade {
        if let Some(term) = first_match(&policy.restricted_modules, |m| text.contains(m)) {
            return Some(DenyReason::new(MatchSource::UpgradePayload, term));
        }
    }
    if is_params {
        if let Some(term) = first_match(&policy.restricted_keywords, |k| text.contains(k)) {
            return Some(DenyReason::new(MatchSource::ParamsPayload, term));
        }
    }
    None
}

fn first_match<'p>(terms: &'p [String], hit: impl Fn(&str) -> bool) -> Option<&'p str> {
    terms.iter().map(String::as_str).find(|&t| hit(t))
}

/// True when `content` mentions any default restricted keyword.
pub fn is_leverage_related(content: &str) -> bool {
    let content = content.to_lowercase();
    LEVERAGE_RESTRICTED_KEYWORDS
        .iter()
        .any(|k| content.contains(k))
}

/// Lint free text against the default policy.
pub fn validate_proposal_content(title: &str, summary: &str) -> Result<(), DenyReason> {
    evaluate(&Policy::default(), &ProposalView::text(title, summary)).into_result()
}
