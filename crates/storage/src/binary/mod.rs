//! The on-disk data file format.
//!
//! ```text
//! u8                 year count (0-255)
//! repeated until the end of the data:
//!   u8               name length (1-255)
//!   [u8; len]        name, UTF-8
//!   [u64; years]     one little-endian word per tracked year
//! ```

use aoc_core::model::RegistryError;
use thiserror::Error;

mod codec;
mod reader;
mod writer;

pub use codec::{decode, encode};
pub use reader::ByteReader;
pub use writer::ByteWriter;

/// Reasons a data file cannot be turned back into a tracker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("file is empty")]
    Empty,

    #[error("truncated {what} at byte {offset}")]
    UnexpectedEnd { what: &'static str, offset: usize },

    #[error("zero-length language name at byte {offset}")]
    EmptyName { offset: usize },

    #[error("language name at byte {offset} is not valid UTF-8")]
    InvalidName { offset: usize },

    #[error(transparent)]
    Rejected(#[from] RegistryError),
}
