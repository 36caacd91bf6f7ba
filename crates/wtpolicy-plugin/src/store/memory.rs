//! In-memory store, same JSON round-trip as the file store.

use std::cell::RefCell;

use serde::{de::DeserializeOwned, Serialize};

use wtpolicy_core::error::{PolicyError, Result};

use super::StateStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing raw content.
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
        }
    }

    /// Raw stored content, if any.
    pub fn content(&self) -> Option<Vec<u8>> {
        self.content.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load<S, F>(&self, init: F) -> Result<S>
    where
        S: Serialize + DeserializeOwned,
        F: FnOnce() -> S,
    {
        let existing = self.content.borrow().clone();
        match existing {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| PolicyError::StateCorruption(format!("parse state failed: {e}"))),
            None => {
                let state = init();
                self.save(&state)?;
                Ok(state)
            }
        }
    }

    fn save<S: Serialize>(&self, state: &S) -> Result<()> {
        let body = serde_json::to_vec(state)
            .map_err(|e| PolicyError::Io(format!("serialize state failed: {e}")))?;
        *self.content.borrow_mut() = Some(body);
        Ok(())
    }
}
