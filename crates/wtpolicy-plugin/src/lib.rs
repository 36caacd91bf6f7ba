//! wtpolicy plugin runtime.
//!
//! This crate wires configuration, state storage, and the core engines into
//! the process shell the watchtower invokes once per block. It is consumed by
//! the two plugin binaries and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod obs;
pub mod runner;
pub mod store;
