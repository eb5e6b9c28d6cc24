#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use govguard_core::policy::{MatchSource, Policy};
use govguard_core::ProposalView;
use govguard_node::keeper::PolicyStore;

#[test]
fn validate_proposal_reports_matched_term() {
    let store = PolicyStore::default();
    assert!(store.is_enforcement_active());

    let ok = ProposalView::text("Update Pool Parameters", "improves efficiency").with_id(7);
    assert!(store.validate_proposal(&ok).is_ok());

    let bad = ProposalView::text("Enable Perpetual Trading", "").with_id(8);
    let reason = store.validate_proposal(&bad).unwrap_err();
    assert_eq!(reason.term, "perpetual");
    assert_eq!(reason.source, MatchSource::Text);
}

#[test]
fn replace_takes_effect_for_later_evaluations() {
    let store = PolicyStore::default();
    let view = ProposalView::text("Enable Perpetual Trading", "");
    assert!(store.validate_proposal(&view).is_err());

    store.replace(Policy::disabled());
    assert!(!store.is_enforcement_active());
    assert!(store.validate_proposal(&view).is_ok());
}

#[test]
fn validate_with_uses_the_given_snapshot() {
    let store = PolicyStore::default();
    let view = ProposalView::text("Enable Perpetual Trading", "");

    let snapshot = store.current();
    store.replace(Policy::disabled());

    // the earlier snapshot still denies; the live policy no longer does
    let reason = PolicyStore::validate_with(&snapshot, &view).unwrap_err();
    assert_eq!(reason.term, "perpetual");
    assert!(store.validate_proposal(&view).is_ok());

    let snapshot = store.current();
    store.replace(Policy::default());
    assert!(PolicyStore::validate_with(&snapshot, &view).is_ok());
}

#[test]
fn current_is_a_snapshot() {
    let store = PolicyStore::default();
    let mut snapshot = store.current().as_ref().clone();
    snapshot.enabled = false;
    snapshot.restricted_keywords.clear();

    assert!(store.current().enabled);
    assert!(!store.current().restricted_keywords.is_empty());
}

#[test]
fn concurrent_replace_never_tears_reads() {
    let store = Arc::new(PolicyStore::default());
    let custom = Policy {
        enabled: true,
        restricted_keywords: vec!["swaption".into()],
        restricted_modules: vec!["options".into()],
    };

    let writer = {
        let store = Arc::clone(&store);
        let custom = custom.clone();
        thread::spawn(move || {
            for i in 0..500 {
                if i % 2 == 0 {
                    store.replace(custom.clone());
                } else {
                    store.replace(Policy::default());
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let custom = custom.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let p = store.current();
                    assert!(*p == custom || *p == Policy::default());
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
}
