//! Proposal content as seen by the evaluator.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use bytes::Bytes;

const PAYLOAD_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Standard alphabet, padding optional.
const PAYLOAD_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PAYLOAD_CONFIG);
/// URL-safe alphabet, padding optional.
const PAYLOAD_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PAYLOAD_CONFIG);

/// Raw payload of a proposal sub-message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Decoded payload bytes.
    Raw(Bytes),
    /// Payload could not be decoded; carries the decoder's complaint.
    Undecodable(String),
}

/// One effectful sub-operation a proposal would execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMessage {
    type_url: String,
    payload: Payload,
}

impl SubMessage {
    pub fn new(type_url: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            type_url: type_url.into(),
            payload: Payload::Raw(payload.into()),
        }
    }

    pub fn undecodable(type_url: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            payload: Payload::Undecodable(why.into()),
        }
    }

    /// Decode a base64 wire payload. Accepts the standard and URL-safe
    /// alphabets, padded or not; anything else becomes undecodable.
    pub fn from_base64(type_url: impl Into<String>, value: &str) -> Self {
        let value = value.trim();
        match PAYLOAD_STANDARD
            .decode(value)
            .or_else(|e| PAYLOAD_URL_SAFE.decode(value).map_err(|_| e))
        {
            Ok(bytes) => Self::new(type_url, bytes),
            Err(e) => Self::undecodable(type_url, e.to_string()),
        }
    }

    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Payload bytes, or `None` when the payload failed to decode.
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Raw(b) => Some(b),
            Payload::Undecodable(_) => None,
        }
    }

    /// Why the payload failed to decode, if it did.
    pub fn decode_error(&self) -> Option<&str> {
        match &self.payload {
            Payload::Raw(_) => None,
            Payload::Undecodable(why) => Some(why),
        }
    }

    /// Payload interpreted as text (lossy UTF-8).
    pub fn payload_text(&self) -> Option<Cow<'_, str>> {
        self.payload().map(String::from_utf8_lossy)
    }
}

/// Borrowed view over a proposal's inspectable content.
/// Built transiently per evaluation; owns nothing.
#[derive(Debug, Clone, Copy)]
pub struct ProposalView<'a> {
    /// Proposal id, if one has been assigned (none at submission time).
    pub id: Option<u64>,
    pub title: &'a str,
    pub summary: &'a str,
    pub messages: &'a [SubMessage],
}

impl<'a> ProposalView<'a> {
    /// View over free text only (no sub-messages).
    pub fn text(title: &'a str, summary: &'a str) -> Self {
        Self {
            id: None,
            title,
            summary,
            messages: &[],
        }
    }

    pub fn with_messages(mut self, messages: &'a [SubMessage]) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
