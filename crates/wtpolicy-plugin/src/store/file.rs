//! JSON file store with atomic replace.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use wtpolicy_core::error::{PolicyError, Result};

use super::StateStore;

/// State file name inside the datadir.
pub const STATE_FILE_NAME: &str = "datastore.json";

/// Stores state as `<datadir>/datastore.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILE_NAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            PolicyError::Io(format!("create datadir {} failed: {e}", self.dir.display()))
        })
    }

    fn initialize<S, F>(&self, init: F) -> Result<S>
    where
        S: Serialize,
        F: FnOnce() -> S,
    {
        tracing::info!(path = %self.path().display(), "no state yet, initializing");
        self.ensure_dir()?;
        let state = init();
        self.save(&state)?;
        Ok(state)
    }
}

impl StateStore for FileStore {
    fn load<S, F>(&self, init: F) -> Result<S>
    where
        S: Serialize + DeserializeOwned,
        F: FnOnce() -> S,
    {
        let path = self.path();
        // Only a missing datadir means "first invocation".
        if !self.dir.is_dir() {
            return self.initialize(init);
        }
        match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                PolicyError::StateCorruption(format!("parse {} failed: {e}", path.display()))
            }),
            // Datadir without its state file: never reinitialize.
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PolicyError::StateCorruption(
                format!("{} missing from existing datadir", path.display()),
            )),
            Err(e) => Err(PolicyError::StateCorruption(format!(
                "read {} failed: {e}",
                path.display()
            ))),
        }
    }

    fn save<S: Serialize>(&self, state: &S) -> Result<()> {
        let path = self.path();
        let body = serde_json::to_vec(state)
            .map_err(|e| PolicyError::Io(format!("serialize state failed: {e}")))?;

        self.ensure_dir()?;
        // Temp file in the same directory so the rename stays on one filesystem.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| {
            PolicyError::Io(format!("create temp file in {} failed: {e}", self.dir.display()))
        })?;
        tmp.write_all(&body)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| PolicyError::Io(format!("write temp state failed: {e}")))?;
        tmp.persist(&path).map_err(|e| {
            PolicyError::Io(format!("replace {} failed: {}", path.display(), e.error))
        })?;

        tracing::debug!(path = %path.display(), bytes = body.len(), "state saved");
        Ok(())
    }
}
