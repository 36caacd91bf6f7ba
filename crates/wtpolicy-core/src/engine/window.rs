//! Maximum value per rolling block window.
//!
//! Keeps a running counter of accepted value since the window started and
//! revaults only the attempts that would push it over the threshold.

use serde::{Deserialize, Serialize};

use crate::protocol::{Request, Response};

use super::PolicyEngine;

/// 50 BTC, in satoshis.
pub const DEFAULT_MAX_PER_WINDOW: u64 = 50 * 100_000_000;
/// About one day of blocks.
pub const DEFAULT_WINDOW_BLOCKS: u64 = 144;

/// Counter for the current window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub counter: u64,
    /// Height the current window started at.
    #[serde(rename = "block_height")]
    pub epoch_start_height: u64,
}

/// Caps the value accepted within each window of `window_blocks` blocks.
#[derive(Debug, Clone)]
pub struct WindowLimiter {
    max_value: u64,
    window_blocks: u64,
}

impl WindowLimiter {
    /// Limiter allowing `max_value` per window of `window_blocks` blocks.
    pub fn new(max_value: u64, window_blocks: u64) -> Self {
        Self {
            max_value,
            window_blocks,
        }
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn window_blocks(&self) -> u64 {
        self.window_blocks
    }

    fn window_elapsed(&self, state: &WindowState, block_height: u64) -> bool {
        // Saturating: a start height near u64::MAX just never expires.
        block_height >= state.epoch_start_height.saturating_add(self.window_blocks)
    }
}

impl Default for WindowLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_WINDOW, DEFAULT_WINDOW_BLOCKS)
    }
}

impl PolicyEngine for WindowLimiter {
    type State = WindowState;

    fn name(&self) -> &'static str {
        "max_value_per_day"
    }

    fn initial_state(&self, req: &Request) -> WindowState {
        WindowState {
            counter: 0,
            epoch_start_height: req.block_height,
        }
    }

    fn step(&self, mut state: WindowState, req: &Request) -> (WindowState, Response) {
        // The new window starts at the current height, not on a fixed grid.
        if self.window_elapsed(&state, req.block_height) {
            tracing::info!(
                block_height = req.block_height,
                previous_start = state.epoch_start_height,
                previous_counter = state.counter,
                "window elapsed, resetting counter"
            );
            state.counter = 0;
            state.epoch_start_height = req.block_height;
        }

        let mut resp = Response::default();
        for a in &req.block_info.new_attempts {
            match state.counter.checked_add(a.value) {
                Some(next) if next <= self.max_value => state.counter = next,
                _ => {
                    tracing::warn!(
                        outpoint = %a.deposit_outpoint,
                        value = a.value,
                        counter = state.counter,
                        max_value = self.max_value,
                        "attempt exceeds window allowance, revaulting"
                    );
                    resp.revault.push(a.deposit_outpoint.clone());
                }
            }
        }

        (state, resp)
    }
}
