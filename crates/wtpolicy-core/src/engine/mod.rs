//! Decision engines.
//!
//! An engine is a pure transition `(State, Request) -> (State, Response)`.
//! Loading and saving the state is the caller's job, so engines can be
//! exercised without any storage.

pub mod in_flight;
pub mod window;

use serde::{de::DeserializeOwned, Serialize};

use crate::protocol::{Request, Response};

pub use in_flight::{InFlightLimiter, InFlightState};
pub use window::{WindowLimiter, WindowState};

/// A spending policy consulted once per block.
pub trait PolicyEngine {
    /// Persisted record carried between invocations.
    type State: Serialize + DeserializeOwned;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// State used when no record exists yet for this storage location.
    fn initial_state(&self, req: &Request) -> Self::State;

    /// Apply `req` to `state`, returning the new state and the decision.
    fn step(&self, state: Self::State, req: &Request) -> (Self::State, Response);
}
