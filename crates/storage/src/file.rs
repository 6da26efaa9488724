use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use aoc_core::model::Tracker;
use tracing::debug;

use crate::binary;
use crate::repository::{StorageError, TrackerRepository};

/// Name of the data file, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = ".aoc";

/// Tracker data stored in a single binary file.
///
/// No locking is done: concurrent writers from other processes are not supported.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The repository for `.aoc` in the current working directory.
    #[must_use]
    pub fn in_working_dir() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrackerRepository for FileRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> Result<bool, StorageError> {
        self.path.try_exists().map_err(|source| StorageError::Io {
            location: self.location(),
            source,
        })
    }

    fn load(&self) -> Result<Tracker, StorageError> {
        let bytes = std::fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::NotFound {
                location: self.location(),
            },
            _ => StorageError::Io {
                location: self.location(),
                source,
            },
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read data file");

        binary::decode(&bytes).map_err(|source| StorageError::Corrupt {
            location: self.location(),
            source,
        })
    }

    fn save(&self, tracker: &Tracker) -> Result<(), StorageError> {
        let bytes = binary::encode(tracker);
        std::fs::write(&self.path, &bytes).map_err(|source| StorageError::WriteFailure {
            location: self.location(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            languages = tracker.registry().len(),
            years = tracker.year_count(),
            "wrote data file"
        );
        Ok(())
    }
}
