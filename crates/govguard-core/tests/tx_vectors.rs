//! Proposal admission vector tests (decode + evaluate).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use govguard_core::policy::{evaluate, Decision, Policy};
use govguard_core::protocol::tx::decode_tx;
use govguard_core::Msg;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn proposal_vectors() {
    let files = [
        "upgrade_leverage_module.json",
        "upgrade_clean.json",
        "params_margin.json",
        "params_clean.json",
        "title_perpetual.json",
        "other_type_ignored.json",
        "undecodable_payload.json",
        "undecodable_then_params.json",
        "bad_version.json",
        "bad_version_wide.json",
        "upgrade_unpadded.json",
        "upgrade_url_safe.json",
    ];

    let policy = Policy::default();

    for f in files {
        let v = load(f);
        let res = decode_tx(&v.tx_json());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let tx = res.expect("expected ok tx");
        let ex = v.expect.expect("missing expect block");

        let Some(Msg::SubmitProposal(msg)) = tx.msgs.first() else {
            panic!("vector={}: no proposal decoded", v.description);
        };
        let decision = evaluate(&policy, &msg.view());

        assert_eq!(decision.is_allowed(), ex.allowed, "vector={}", v.description);
        assert_eq!(decision.reason(), ex.reason.as_deref(), "vector={}", v.description);

        if let Decision::Deny(r) = &decision {
            assert_eq!(Some(r.source.as_str()), ex.source.as_deref(), "vector={}", v.description);
        }

        // disabled policy lets every vector through
        assert!(evaluate(&Policy::disabled(), &msg.view()).is_allowed(), "vector={}", v.description);
    }
}
