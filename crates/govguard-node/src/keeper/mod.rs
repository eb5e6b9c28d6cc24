//! Policy keeper: owns the live restriction policy.

pub mod store;

pub use store::PolicyStore;
