use std::collections::TryReserveError;

use crate::model::calendar::{Day, Year};
use crate::model::state::DayState;

/// Per-language progress storage: one 64-bit word per tracked year.
///
/// Day `d` occupies two bits of its year word: bit `2d` is the completed
/// flag and bit `2d + 1` the started flag. Only the low 50 bits of a word
/// are ever used. At most one of the two flags is set for any day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitGrid {
    words: Vec<u64>,
}

#[inline]
fn completed_mask(day: Day) -> u64 {
    1u64 << (u32::from(day.index()) * 2)
}

#[inline]
fn started_mask(day: Day) -> u64 {
    1u64 << (u32::from(day.index()) * 2 + 1)
}

impl BitGrid {
    /// Creates a grid with `years` empty year words.
    #[must_use]
    pub fn zeroed(years: u8) -> Self {
        Self {
            words: vec![0; usize::from(years)],
        }
    }

    /// Wraps raw year words, e.g. as read back from disk.
    #[must_use]
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of year words held.
    #[must_use]
    pub fn years(&self) -> usize {
        self.words.len()
    }

    /// Reads the state of a day. A word with both flags set reads as completed.
    ///
    /// # Panics
    ///
    /// Panics if `year` is not tracked by this grid; callers validate years first.
    #[must_use]
    pub fn state(&self, year: Year, day: Day) -> DayState {
        let word = self.words[usize::from(year.index())];
        if word & completed_mask(day) != 0 {
            DayState::Completed
        } else if word & started_mask(day) != 0 {
            DayState::Started
        } else {
            DayState::NotYet
        }
    }

    /// Writes the state of a day.
    ///
    /// The flag being raised is set before the other one is cleared.
    ///
    /// # Panics
    ///
    /// Panics if `year` is not tracked by this grid; callers validate years first.
    pub fn set_state(&mut self, year: Year, day: Day, state: DayState) {
        let word = &mut self.words[usize::from(year.index())];
        match state {
            DayState::Completed => {
                *word |= completed_mask(day);
                *word &= !started_mask(day);
            }
            DayState::Started => {
                *word |= started_mask(day);
                *word &= !completed_mask(day);
            }
            DayState::NotYet => {
                *word &= !(completed_mask(day) | started_mask(day));
            }
        }
    }

    /// Makes room for one more year word without changing the grid's contents.
    pub(crate) fn reserve_year(&mut self) -> Result<(), TryReserveError> {
        self.words.try_reserve(1)
    }

    /// Appends an empty year word. Does not allocate after `reserve_year` succeeded.
    pub(crate) fn push_year(&mut self) {
        self.words.push(0);
    }

    /// Zeroes the last year word and drops it.
    pub(crate) fn pop_year(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last = 0;
        }
        self.words.pop();
    }
}
