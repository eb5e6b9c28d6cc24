use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use govguard_core::error::{ClientCode, GovGuardError};
use govguard_core::policy::{evaluate, Decision};
use govguard_core::protocol::tx::decode_tx;
use govguard_core::{ProposalView, SubMessage};

use crate::app_state::AppState;

fn error_response(e: &GovGuardError) -> Response {
    let status = match e.client_code() {
        ClientCode::BadRequest | ClientCode::InvalidRequest | ClientCode::UnsupportedVersion => {
            StatusCode::BAD_REQUEST
        }
        ClientCode::ConfigInvalid | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = json!({ "code": e.client_code().as_str(), "msg": e.to_string() });
    (status, Json(body)).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckQuery {
    #[serde(default)]
    pub simulate: bool,
}

/// `POST /v1/txs/check`: decode the envelope and run the ante chain.
pub async fn check_tx(
    State(app): State<AppState>,
    Query(q): Query<CheckQuery>,
    body: String,
) -> Response {
    let tx = match decode_tx(&body) {
        Ok(tx) => tx,
        Err(e) => {
            app.metrics().txs.inc(&[("outcome", "bad_request")]);
            return error_response(&e);
        }
    };

    match app.admit(&tx, q.simulate) {
        Ok(ctx) => Json(json!({ "admitted": ctx.admitted, "sequence": ctx.sequence })).into_response(),
        Err(e) => error_response(&e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintReq {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub messages: Vec<LintMsg>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintMsg {
    pub type_url: String,
    /// base64-encoded payload.
    #[serde(default)]
    pub value: String,
}

/// `POST /v1/lint`: evaluate proposal content against the live policy
/// without going through the store's audit logging.
pub async fn lint(State(app): State<AppState>, Json(req): Json<LintReq>) -> Response {
    let messages: Vec<SubMessage> = req
        .messages
        .into_iter()
        .map(|m| SubMessage::from_base64(m.type_url, &m.value))
        .collect();

    let policy = app.policy();
    let view = ProposalView::text(&req.title, &req.summary).with_messages(&messages);
    let decision = evaluate(&policy, &view);

    let metrics = app.metrics();
    match &decision {
        Decision::Allow => metrics.lint.inc(&[("outcome", "allowed")]),
        Decision::Deny(_) => metrics.lint.inc(&[("outcome", "denied")]),
    }

    let body = match decision {
        Decision::Allow => json!({ "allowed": true, "reason": null }),
        Decision::Deny(r) => json!({
            "allowed": false,
            "reason": r.term,
            "source": r.source,
            "message": r.to_string(),
        }),
    };
    Json(body).into_response()
}

/// `GET /v1/policy`: read-only view of the live policy.
pub async fn get_policy(State(app): State<AppState>) -> Response {
    Json(app.policy().as_ref().clone()).into_response()
}

/// `GET /metrics`
pub async fn metrics(State(app): State<AppState>) -> Response {
    (
        [("content-type", "text/plain; version=0.0.4")],
        app.metrics().render(),
    )
        .into_response()
}
