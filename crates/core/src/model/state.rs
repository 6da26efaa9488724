use std::fmt;

/// Progress of a single (language, year, day) puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DayState {
    #[default]
    NotYet,
    Started,
    Completed,
}

impl DayState {
    pub const ALL: [DayState; 3] = [DayState::NotYet, DayState::Started, DayState::Completed];

    /// Single-character glyph used by the progress table.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            DayState::NotYet => '.',
            DayState::Started => 'S',
            DayState::Completed => 'C',
        }
    }

    /// Past-tense verb used when confirming a state change.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            DayState::NotYet => "Cleared",
            DayState::Started => "Started",
            DayState::Completed => "Completed",
        }
    }

    /// Parses a state filter value (`not_yet`, `started`, `completed`), ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(raw))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayState::NotYet => "not_yet",
            DayState::Started => "started",
            DayState::Completed => "completed",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
