//! Filter evaluation over a [`Tracker`] and uniform random picking.

use std::collections::BTreeSet;

use rand::Rng;

use crate::model::{Day, DayState, Language, Tracker, Year};

/// Either every value, or an explicit (possibly empty) set of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord> Selection<T> {
    #[must_use]
    pub fn only(items: impl IntoIterator<Item = T>) -> Self {
        Self::Only(items.into_iter().collect())
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(item),
        }
    }

    /// True for an explicit choice that selected nothing.
    #[must_use]
    pub fn is_empty_choice(&self) -> bool {
        matches!(self, Selection::Only(set) if set.is_empty())
    }

    /// Narrow to an explicit choice, keeping values chosen earlier.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        match self {
            Selection::All => *self = Selection::Only(items.into_iter().collect()),
            Selection::Only(set) => set.extend(items),
        }
    }
}

/// Filters applied by `show` and `get`. Languages are registry indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    pub languages: Selection<usize>,
    pub years: Selection<Year>,
    pub days: Selection<Day>,
    pub states: Selection<DayState>,
}

impl QueryFilters {
    /// True when some filter was given explicitly but resolved to no values.
    #[must_use]
    pub fn matches_nothing(&self) -> bool {
        self.languages.is_empty_choice()
            || self.years.is_empty_choice()
            || self.days.is_empty_choice()
            || self.states.is_empty_choice()
    }
}

/// One puzzle that passed every filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub language: &'a Language,
    pub year: Year,
    pub day: Day,
    pub state: DayState,
}

/// Every (language, year, day) passing `filters`, in registry, year and day order.
pub fn matches<'a>(
    tracker: &'a Tracker,
    filters: &'a QueryFilters,
) -> impl Iterator<Item = Match<'a>> + 'a {
    tracker
        .registry()
        .iter()
        .enumerate()
        .filter(move |(index, _)| filters.languages.contains(index))
        .flat_map(move |(_, language)| {
            tracker
                .years()
                .filter(move |year| filters.years.contains(year))
                .flat_map(move |year| {
                    Day::all()
                        .filter(move |day| filters.days.contains(day))
                        .filter_map(move |day| {
                            let state = language.days().state(year, day);
                            filters.states.contains(&state).then_some(Match {
                                language,
                                year,
                                day,
                                state,
                            })
                        })
                })
        })
}

/// Uniformly picks one item from a stream of unknown length in O(1) memory.
///
/// The `n`-th item replaces the current pick with probability `1/n`.
pub fn sample_one<I, R>(candidates: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut pick = None;
    for (seen, candidate) in candidates.into_iter().enumerate() {
        if rng.random_range(0..=seen) == 0 {
            pick = Some(candidate);
        }
    }
    pick
}

/// A uniformly random puzzle among those matching `filters`.
pub fn pick_random<'a, R>(
    tracker: &'a Tracker,
    filters: &'a QueryFilters,
    rng: &mut R,
) -> Option<Match<'a>>
where
    R: Rng + ?Sized,
{
    if filters.matches_nothing() {
        return None;
    }
    sample_one(matches(tracker, filters), rng)
}
