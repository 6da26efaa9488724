use thiserror::Error;

use crate::model::calendar::{MAX_YEARS, Year};
use crate::model::tracker::Tracker;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum YearError {
    #[error("maximum year is {} ({})", MAX_YEARS, Year::new(MAX_YEARS))]
    MaxYearsExceeded,

    #[error("cannot remove year 0 (2015)")]
    NoYearsToRemove,

    #[error("out of memory")]
    Allocation,
}

impl Tracker {
    /// Append an empty year to every language and return it.
    ///
    /// Capacity is reserved in every grid before any grid grows, so a failed
    /// allocation leaves all grids at the previous length.
    ///
    /// # Errors
    ///
    /// Returns `YearError::MaxYearsExceeded` when 255 years are already tracked
    /// and `YearError::Allocation` if a grid cannot grow.
    pub fn add_year(&mut self) -> Result<Year, YearError> {
        if self.year_count == MAX_YEARS {
            return Err(YearError::MaxYearsExceeded);
        }
        for grid in self.registry.grids_mut() {
            grid.reserve_year().map_err(|_| YearError::Allocation)?;
        }
        for grid in self.registry.grids_mut() {
            grid.push_year();
        }
        let added = Year::new(self.year_count);
        self.year_count += 1;
        Ok(added)
    }

    /// Drop the most recent year from every language and return it.
    ///
    /// # Errors
    ///
    /// Returns `YearError::NoYearsToRemove` when no year is tracked.
    pub fn remove_year(&mut self) -> Result<Year, YearError> {
        let removed = self.last_year().ok_or(YearError::NoYearsToRemove)?;
        for grid in self.registry.grids_mut() {
            grid.pop_year();
        }
        self.year_count -= 1;
        Ok(removed)
    }
}
