//! Top-level facade crate for wtpolicy.
//!
//! Re-exports the protocol/engine core and the plugin runtime so hosts and
//! tests can depend on a single crate.

pub mod core {
    pub use wtpolicy_core::*;
}

pub mod plugin {
    pub use wtpolicy_plugin::*;
}
