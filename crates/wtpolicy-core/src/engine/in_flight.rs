//! Maximum value in flight.
//!
//! Tracks every pending unvault attempt and revaults all of them as soon as
//! their total reaches the threshold.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::protocol::{Outpoint, Request, Response};

use super::PolicyEngine;

/// 10 BTC, in satoshis.
pub const DEFAULT_MAX_IN_FLIGHT: u64 = 10 * 100_000_000;

/// Pending attempts, outpoint -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlightState {
    pub in_flight: BTreeMap<Outpoint, u64>,
}

impl InFlightState {
    /// Total value in flight. Saturates rather than wrapping.
    pub fn total(&self) -> u64 {
        self.in_flight
            .values()
            .fold(0u64, |acc, v| acc.saturating_add(*v))
    }
}

/// Revaults every pending attempt once their total reaches `max_value`.
#[derive(Debug, Clone)]
pub struct InFlightLimiter {
    max_value: u64,
}

impl InFlightLimiter {
    /// Limiter with the given threshold, in the smallest currency unit.
    pub fn new(max_value: u64) -> Self {
        Self { max_value }
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }
}

impl Default for InFlightLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IN_FLIGHT)
    }
}

impl PolicyEngine for InFlightLimiter {
    type State = InFlightState;

    fn name(&self) -> &'static str {
        "max_value_in_flight"
    }

    fn initial_state(&self, _req: &Request) -> InFlightState {
        InFlightState::default()
    }

    fn step(&self, mut state: InFlightState, req: &Request) -> (InFlightState, Response) {
        for op in req.finished_attempts() {
            state.in_flight.remove(op);
        }
        // Same outpoint twice in one request: last one wins.
        for a in &req.block_info.new_attempts {
            state
                .in_flight
                .insert(a.deposit_outpoint.clone(), a.value);
        }

        let total = state.total();
        let mut resp = Response::default();
        if total >= self.max_value {
            resp.revault = state.in_flight.keys().cloned().collect();
            tracing::warn!(
                block_height = req.block_height,
                total,
                max_value = self.max_value,
                revault = resp.revault.len(),
                "value in flight above threshold, revaulting everything"
            );
        }

        (state, resp)
    }
}
