use std::sync::{Arc, Mutex};

use aoc_core::model::Tracker;
use thiserror::Error;

use crate::binary::{self, DecodeError};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("'{location}' could not be opened")]
    NotFound { location: String },

    #[error("'{location}' contains invalid data: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: DecodeError,
    },

    #[error("could not write to '{location}': {source}")]
    WriteFailure {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{location}' could not be read: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for the tracker data.
///
/// Loads and saves always move the whole tracker; there are no partial writes.
pub trait TrackerRepository: Send + Sync {
    /// Human-readable location of the data, used in messages.
    fn location(&self) -> String;

    /// Whether any data has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be inspected.
    fn exists(&self) -> Result<bool, StorageError>;

    /// Read the stored tracker.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing is stored and
    /// `StorageError::Corrupt` if the stored bytes do not decode.
    fn load(&self) -> Result<Tracker, StorageError>;

    /// Replace the stored tracker.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteFailure` if the data cannot be written.
    fn save(&self, tracker: &Tracker) -> Result<(), StorageError>;
}

/// In-memory repository holding the encoded bytes, for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    bytes: Arc<Mutex<Option<Vec<u8>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository pre-filled with raw file contents.
    #[must_use]
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(Mutex::new(Some(bytes))),
        }
    }

    /// The currently stored bytes, if any.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.bytes.lock().ok().and_then(|guard| guard.clone())
    }
}

impl TrackerRepository for InMemoryRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn exists(&self) -> Result<bool, StorageError> {
        let guard = self
            .bytes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.is_some())
    }

    fn load(&self) -> Result<Tracker, StorageError> {
        let guard = self
            .bytes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let bytes = guard.as_ref().ok_or_else(|| StorageError::NotFound {
            location: self.location(),
        })?;
        binary::decode(bytes).map_err(|source| StorageError::Corrupt {
            location: self.location(),
            source,
        })
    }

    fn save(&self, tracker: &Tracker) -> Result<(), StorageError> {
        let mut guard = self
            .bytes
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(binary::encode(tracker));
        Ok(())
    }
}
