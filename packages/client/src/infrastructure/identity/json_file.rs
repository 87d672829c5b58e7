//! File-backed identity store.
//!
//! Holds the same user record the web client keeps in `localStorage`
//! under the `user` key.

use std::{io::ErrorKind, path::PathBuf};

use crate::domain::{IdentityError, IdentityStore};

/// IdentityStore reading a JSON user record from disk
#[derive(Debug, Clone)]
pub struct JsonFileIdentityStore {
    path: PathBuf,
}

impl JsonFileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IdentityStore for JsonFileIdentityStore {
    fn load(&self) -> Result<Option<String>, IdentityError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(IdentityError::Io(e)),
        }
    }
}
