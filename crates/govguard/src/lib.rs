//! Top-level facade crate for govguard.
//!
//! Re-exports the core policy types and the node library so users can depend on a single crate.

pub mod core {
    pub use govguard_core::*;
}

pub mod node {
    pub use govguard_node::*;
}
