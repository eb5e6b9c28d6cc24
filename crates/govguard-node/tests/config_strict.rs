#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use govguard_core::policy::{LEVERAGE_RESTRICTED_KEYWORDS, LEVERAGE_RESTRICTED_MODULES};
use govguard_node::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
governance_safeguards:
  enabled: true
  disable_leverage_modulez: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.spot_only.chain_id, "osmosis-spot-1");

    let policy = cfg.policy();
    assert!(policy.enabled);
    assert_eq!(policy.restricted_keywords, LEVERAGE_RESTRICTED_KEYWORDS);
    assert_eq!(policy.restricted_modules, LEVERAGE_RESTRICTED_MODULES);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn additional_entries_are_appended_and_normalized() {
    let cfg = config::load_from_str(
        r#"
version: 1
governance_safeguards:
  additional_restricted_types: ["Options ", "SWAPTION"]
  additional_restricted_modules: ["x/Options"]
"#,
    )
    .unwrap();

    let policy = cfg.policy();
    let n = LEVERAGE_RESTRICTED_KEYWORDS.len();
    assert_eq!(policy.restricted_keywords[..n], *LEVERAGE_RESTRICTED_KEYWORDS);
    assert_eq!(policy.restricted_keywords[n..], ["options", "swaption"]);
    assert_eq!(policy.restricted_modules.last().map(String::as_str), Some("x/options"));
}

#[test]
fn blank_additional_entry_rejected() {
    let err = config::load_from_str(
        r#"
version: 1
governance_safeguards:
  additional_restricted_types: ["  "]
"#,
    )
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn safeguards_section_disabled_turns_policy_off() {
    let cfg = config::load_from_str(
        r#"
version: 1
governance_safeguards:
  enabled: false
  additional_restricted_types: ["options"]
spot_only:
  enabled: false
"#,
    )
    .unwrap();

    let policy = cfg.policy();
    assert!(!policy.enabled);
    // additions are ignored when the section is off
    assert_eq!(policy.restricted_keywords, LEVERAGE_RESTRICTED_KEYWORDS);
}

#[test]
fn disable_leverage_modules_maps_to_enabled() {
    let cfg = config::load_from_str(
        r#"
version: 1
governance_safeguards:
  disable_leverage_modules: false
spot_only:
  enforce_spot_only_validation: false
"#,
    )
    .unwrap();
    assert!(!cfg.policy().enabled);
}

#[test]
fn spot_only_rejects_leverage() {
    let cases = [
        ("max_leverage: 2", "leverage is not allowed in spot-only mode"),
        ("disable_margin_trading: false", "margin trading must be disabled in spot-only mode"),
        ("disable_perpetual_contracts: false", "perpetual contracts must be disabled in spot-only mode"),
    ];
    for (line, msg) in cases {
        let yaml = format!("version: 1\nspot_only:\n  {line}\n");
        let err = config::load_from_str(&yaml).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "CONFIG_INVALID", "{line}");
        assert!(err.to_string().contains(msg), "{line}: {err}");
    }
}

#[test]
fn spot_only_disabled_skips_leverage_checks() {
    let cfg = config::load_from_str("version: 1\nspot_only:\n  enabled: false\n  max_leverage: 5\n");
    assert!(cfg.is_ok());
}

#[test]
fn spot_only_enforcement_requires_safeguards() {
    let err = config::load_from_str(
        r#"
version: 1
governance_safeguards:
  enabled: false
"#,
    )
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}
