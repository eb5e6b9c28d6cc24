//! HTTP surface: admission check, content lint, policy inspection, metrics.

pub mod handlers;
