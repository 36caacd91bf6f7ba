//! wtpolicy core: watchtower plugin protocol, error types, and decision engines.
//!
//! This crate defines the request/response contract a watchtower uses to
//! consult a spending policy once per block, plus the two reference engines.
//! It carries no filesystem or process dependencies: engines are pure
//! transitions over an explicit state value, and the codec works over any
//! `BufRead`/`Write` pair.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `PolicyError`/`Result` so a malformed
//! request ends the invocation with an error rather than an abort.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod engine;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorKind, PolicyError, Result};
