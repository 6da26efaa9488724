#![forbid(unsafe_code)]

pub mod binary;
pub mod file;
pub mod repository;

pub use file::{DEFAULT_FILE_NAME, FileRepository};
pub use repository::{InMemoryRepository, StorageError, TrackerRepository};
