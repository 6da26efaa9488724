//! Shared error types for the services crate.

use thiserror::Error;

use aoc_core::model::{RegistryError, StateError, YearError};
use storage::StorageError;

/// Errors reported by a command. Every variant is recoverable: the command
/// aborts and the session carries on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommandError {
    #[error("Unknown argument: '{0}'. See 'help'.")]
    UnknownCommand(String),

    #[error("Incorrect argument count: {found} (expected {expected}).")]
    ArgumentCount { found: usize, expected: &'static str },

    #[error("Unknown argument: '{found}' (expected {expected}).")]
    UnknownArgument {
        found: String,
        expected: &'static str,
    },

    #[error("Incorrect year value: '{0}' (expected 'YYYY' or 'YY').")]
    InvalidYear(String),

    #[error("Incorrect year value: '{year}' (expected '{first}' to '{last}').")]
    YearOutOfRange { year: u16, first: u16, last: u16 },

    #[error("Incorrect year value: '{0}' (no year is tracked, see 'year add').")]
    NoYearsTracked(u16),

    #[error("Incorrect day value: '{0}' (expected '1' to '25').")]
    InvalidDay(String),

    #[error("Incorrect lang name: '{0}' does not exist.")]
    UnknownLanguage(String),

    #[error("Error adding lang: {0}.")]
    Add(#[source] RegistryError),

    #[error("Error removing lang: {0}.")]
    Remove(#[source] RegistryError),

    #[error("Error renaming lang: {0}.")]
    Rename(#[source] RegistryError),

    #[error("Error adding new year: {0}.")]
    AddYear(#[source] YearError),

    #[error("Error removing year: {0}.")]
    RemoveYear(#[source] YearError),

    #[error("Error setting state: {0}.")]
    State(#[source] StateError),

    #[error("Error reading data: {0}.")]
    Load(#[source] StorageError),

    #[error("Error saving data: {0}.")]
    Save(#[source] StorageError),
}
