use thiserror::Error;

use crate::model::bit_grid::BitGrid;
use crate::model::calendar::{Day, Year};
use crate::model::language::Language;
use crate::model::registry::{LanguageRegistry, RegistryError};
use crate::model::state::DayState;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("'{name}' does not exist")]
    UnknownLanguage { name: String },

    #[error("year {year} is not tracked")]
    UntrackedYear { year: Year },
}

/// The persisted progress data: every language plus the shared year count.
///
/// Every language grid always holds exactly `year_count` words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub(crate) registry: LanguageRegistry,
    pub(crate) year_count: u8,
}

impl Tracker {
    /// An empty tracker with `year_count` years and no languages.
    #[must_use]
    pub fn new(year_count: u8) -> Self {
        Self {
            registry: LanguageRegistry::new(),
            year_count,
        }
    }

    /// The content of a freshly initialized data file: one year, no languages.
    #[must_use]
    pub fn initialized() -> Self {
        Self::new(1)
    }

    #[must_use]
    pub fn year_count(&self) -> u8 {
        self.year_count
    }

    #[must_use]
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Tracked years, oldest first.
    pub fn years(&self) -> impl Iterator<Item = Year> + use<> {
        (0..self.year_count).map(Year::new)
    }

    #[must_use]
    pub fn tracks(&self, year: Year) -> bool {
        year.index() < self.year_count
    }

    /// The most recent tracked year, if any.
    #[must_use]
    pub fn last_year(&self) -> Option<Year> {
        self.year_count.checked_sub(1).map(Year::new)
    }

    #[must_use]
    pub fn language(&self, name: &str) -> Option<&Language> {
        self.registry.find(name)
    }

    /// Add a language with an empty grid sized to the current year count.
    ///
    /// # Errors
    ///
    /// Propagates `RegistryError` from the registry.
    pub fn add_language(&mut self, name: &str) -> Result<&Language, RegistryError> {
        self.registry.add(name, self.year_count)
    }

    /// Add a language with previously recorded progress.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::GridLengthMismatch` unless `days` holds exactly
    /// one word per tracked year, and otherwise propagates `RegistryError`
    /// from the registry.
    pub fn restore_language(
        &mut self,
        name: &str,
        days: BitGrid,
    ) -> Result<&Language, RegistryError> {
        let expected = usize::from(self.year_count);
        if days.years() != expected {
            return Err(RegistryError::GridLengthMismatch {
                name: name.to_string(),
                expected,
                found: days.years(),
            });
        }
        self.registry.insert(name, days)
    }

    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no language matches.
    pub fn remove_language(&mut self, name: &str) -> Result<Language, RegistryError> {
        self.registry.remove(name)
    }

    /// Rename a language and return its previous name.
    ///
    /// # Errors
    ///
    /// Propagates `RegistryError` from the registry.
    pub fn rename_language(&mut self, old: &str, new: &str) -> Result<String, RegistryError> {
        self.registry
            .rename(old, new)
            .map(|previous| previous.as_str().to_owned())
    }

    /// Record the state of one puzzle and return the language it was recorded for.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the year is not tracked or the language is unknown.
    pub fn set_state(
        &mut self,
        name: &str,
        year: Year,
        day: Day,
        state: DayState,
    ) -> Result<&Language, StateError> {
        if !self.tracks(year) {
            return Err(StateError::UntrackedYear { year });
        }
        let language = self
            .registry
            .find_mut(name)
            .ok_or_else(|| StateError::UnknownLanguage {
                name: name.to_string(),
            })?;
        language.days_mut().set_state(year, day, state);
        Ok(&*language)
    }
}
