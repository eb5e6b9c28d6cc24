//! govguard node library entry.
//!
//! Wires configuration, the policy keeper, the ante chain (basic checks +
//! governance guard), metrics, and the HTTP surface into one node. Used by
//! the binary (`main.rs`) and by integration tests.

pub mod ante;
pub mod app_state;
pub mod config;
pub mod http;
pub mod keeper;
pub mod obs;
pub mod reload;
pub mod router;
