//! Transaction envelope (JSON).
//!
//! Message bodies are held as `RawValue` and only parsed for message types
//! the admission pipeline inspects (proposal submissions). Everything else
//! passes through as `Msg::Other` with its type URL.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{GovGuardError, Result};
use crate::protocol::proposal::{ProposalView, SubMessage};

/// Type URLs recognized as governance proposal submissions.
pub const SUBMIT_PROPOSAL_TYPE_URLS: &[&str] = &[
    "/cosmos.gov.v1.MsgSubmitProposal",
    "/cosmos.gov.v1beta1.MsgSubmitProposal",
];

/// Wire envelope.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TxEnvelope {
    /// Envelope version.
    pub v: u32,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub msgs: Vec<WireMsg>,
}

/// Wire message: type URL plus an undecoded JSON body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireMsg {
    pub type_url: String,
    #[serde(default)]
    pub value: Option<Box<RawValue>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubmitProposalBody {
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    proposer: String,
    #[serde(default)]
    messages: Vec<WireAny>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireAny {
    type_url: String,
    /// base64-encoded payload.
    #[serde(default)]
    value: String,
}

/// Decoded transaction.
#[derive(Debug, Clone)]
pub struct Tx {
    pub memo: String,
    pub msgs: Vec<Msg>,
}

/// Decoded message.
#[derive(Debug, Clone)]
pub enum Msg {
    SubmitProposal(MsgSubmitProposal),
    Other { type_url: String },
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::SubmitProposal(m) => &m.type_url,
            Msg::Other { type_url } => type_url,
        }
    }
}

/// Governance proposal submission.
#[derive(Debug, Clone)]
pub struct MsgSubmitProposal {
    pub type_url: String,
    pub title: String,
    pub summary: String,
    pub proposer: String,
    pub messages: Vec<SubMessage>,
}

impl MsgSubmitProposal {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            type_url: SUBMIT_PROPOSAL_TYPE_URLS[0].to_string(),
            title: title.into(),
            summary: summary.into(),
            proposer: String::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, msg: SubMessage) -> Self {
        self.messages.push(msg);
        self
    }

    /// Proposal view for evaluation. No id is assigned before submission.
    pub fn view(&self) -> ProposalView<'_> {
        ProposalView::text(&self.title, &self.summary).with_messages(&self.messages)
    }
}

pub fn is_submit_proposal(type_url: &str) -> bool {
    SUBMIT_PROPOSAL_TYPE_URLS.contains(&type_url)
}

/// Decode a transaction envelope from JSON text.
pub fn decode_tx(s: &str) -> Result<Tx> {
    let env: TxEnvelope = serde_json::from_str(s)
        .map_err(|e| GovGuardError::BadRequest(format!("decode failed: {e}")))?;
    Tx::try_from(env)
}

impl TryFrom<TxEnvelope> for Tx {
    type Error = GovGuardError;

    fn try_from(env: TxEnvelope) -> Result<Self> {
        if env.v != 1 {
            return Err(GovGuardError::UnsupportedVersion);
        }

        let mut msgs = Vec::with_capacity(env.msgs.len());
        for (i, m) in env.msgs.into_iter().enumerate() {
            msgs.push(decode_msg(i, m)?);
        }

        Ok(Tx {
            memo: env.memo,
            msgs,
        })
    }
}

fn decode_msg(index: usize, m: WireMsg) -> Result<Msg> {
    if !is_submit_proposal(&m.type_url) {
        return Ok(Msg::Other { type_url: m.type_url });
    }

    let raw = m.value.ok_or_else(|| {
        GovGuardError::BadRequest(format!("msgs[{index}]: proposal submission requires value"))
    })?;

    let body: SubmitProposalBody = serde_json::from_str(raw.get()).map_err(|e| {
        GovGuardError::BadRequest(format!("msgs[{index}]: invalid proposal body: {e}"))
    })?;

    let messages = body
        .messages
        .into_iter()
        .map(|any| {
            let sub = SubMessage::from_base64(any.type_url, &any.value);
            if let Some(e) = sub.decode_error() {
                tracing::debug!(msg_index = index, type_url = %sub.type_url(), error = %e, "sub-message payload undecodable");
            }
            sub
        })
        .collect();

    Ok(Msg::SubmitProposal(MsgSubmitProposal {
        type_url: m.type_url,
        title: body.title,
        summary: body.summary,
        proposer: body.proposer,
        messages,
    }))
}
