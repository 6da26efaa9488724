use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::model::bit_grid::BitGrid;

/// Longest language name that fits the one-byte length prefix on disk.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("language name cannot be empty")]
    EmptyName,

    #[error("'{name}' length is too long (maximum {MAX_NAME_LEN})")]
    NameTooLong { name: String },
}

/// Compares two names ignoring ASCII case, byte by byte.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

/// Validated language name (1 to 255 bytes). Case is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageName(String);

impl LanguageName {
    /// Create a validated language name.
    ///
    /// # Errors
    ///
    /// Returns `LanguageError::EmptyName` for an empty string and
    /// `LanguageError::NameTooLong` when the name exceeds 255 bytes.
    pub fn new(value: impl Into<String>) -> Result<Self, LanguageError> {
        let name = value.into();
        if name.is_empty() {
            return Err(LanguageError::EmptyName);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(LanguageError::NameTooLong { name });
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive ordering against a raw name.
    #[must_use]
    pub fn cmp_ignore_case(&self, other: &str) -> Ordering {
        compare_names(&self.0, other)
    }
}

impl fmt::Display for LanguageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked language and its progress grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: LanguageName,
    days: BitGrid,
}

impl Language {
    #[must_use]
    pub fn new(name: LanguageName, days: BitGrid) -> Self {
        Self { name, days }
    }

    #[must_use]
    pub fn name(&self) -> &LanguageName {
        &self.name
    }

    #[must_use]
    pub fn days(&self) -> &BitGrid {
        &self.days
    }

    pub fn days_mut(&mut self) -> &mut BitGrid {
        &mut self.days
    }

    pub(crate) fn replace_name(&mut self, name: LanguageName) -> LanguageName {
        std::mem::replace(&mut self.name, name)
    }
}
