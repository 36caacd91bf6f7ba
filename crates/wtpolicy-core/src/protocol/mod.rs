//! Watchtower plugin protocol.
//!
//! - `types`: request/response records, validated at the boundary by serde.
//! - `codec`: newline-delimited request decoding and response encoding.
//!
//! One invocation reads exactly one request and writes exactly one response.
//! Decoding never panics: malformed input is reported as
//! `PolicyError::Protocol`.

pub mod codec;
pub mod types;

pub use codec::{decode, encode, MAX_REQUEST_BYTES};
pub use types::{Attempt, BlockInfo, Outpoint, Request, Response};
