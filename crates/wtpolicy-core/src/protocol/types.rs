//! Request/response records exchanged with the watchtower.
//!
//! Unknown fields are tolerated so hosts can extend the request; missing or
//! mistyped required fields fail deserialization.

use serde::{Deserialize, Serialize};

/// Opaque deposit outpoint, as sent by the host.
pub type Outpoint = String;

/// One newly observed unvault attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub deposit_outpoint: Outpoint,
    /// Value in the smallest currency unit.
    pub value: u64,
}

/// Attempts observed in the new block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub new_attempts: Vec<Attempt>,
    pub successful_attempts: Vec<Outpoint>,
    pub revaulted_attempts: Vec<Outpoint>,
}

/// Request sent by the watchtower on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub block_height: u64,
    pub block_info: BlockInfo,
}

impl Request {
    /// Outpoints no longer pending: completed or already revaulted.
    pub fn finished_attempts(&self) -> impl Iterator<Item = &Outpoint> {
        self.block_info
            .successful_attempts
            .iter()
            .chain(self.block_info.revaulted_attempts.iter())
    }
}

/// Response written on stdout: outpoints the host must revault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub revault: Vec<Outpoint>,
}
