//! Policy state storage.
//!
//! One storage location per policy instance. Existing content that cannot be
//! read or parsed is reported as `StateCorruption` and never replaced by a
//! default, since that would silently erase the policy's history.
//!
//! No locking: the host serializes invocations per location.

pub mod file;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use wtpolicy_core::error::Result;

pub use file::{FileStore, STATE_FILE_NAME};
pub use memory::MemoryStore;

/// Backing storage for an engine's persisted state.
pub trait StateStore {
    /// Read the stored state, or persist and return `init()` if the storage
    /// location does not exist yet.
    fn load<S, F>(&self, init: F) -> Result<S>
    where
        S: Serialize + DeserializeOwned,
        F: FnOnce() -> S;

    /// Replace the stored state. Readers see either the old or the new
    /// content, never a mix.
    fn save<S: Serialize>(&self, state: &S) -> Result<()>;
}
