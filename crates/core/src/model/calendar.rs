use std::fmt;

/// Calendar year of the first edition of the series (year index 0).
pub const FIRST_YEAR: u16 = 2015;

/// Number of puzzle days in every edition.
pub const DAYS_PER_YEAR: u8 = 25;

/// Upper bound on the number of tracked years (the count is stored in one byte).
pub const MAX_YEARS: u8 = u8::MAX;

/// Zero-based index of a tracked edition, displayed as `2015 + index`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u8);

impl Year {
    /// Creates a `Year` from its zero-based index.
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the zero-based index.
    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the calendar year, e.g. `2017` for index 2.
    #[must_use]
    pub fn calendar(self) -> u16 {
        FIRST_YEAR + u16::from(self.0)
    }

    /// Parses a user-supplied year.
    ///
    /// Accepts the four-digit form (`2017`) and the two-digit year of the
    /// century (`17`). Returns `None` for non-numeric input, years before
    /// 2015 and years past the last representable index.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut value: u32 = raw.trim().parse().ok()?;
        if value > 2000 {
            value -= 2000;
        }
        let index = value.checked_sub(u32::from(FIRST_YEAR - 2000))?;
        u8::try_from(index).ok().map(Self)
    }
}

impl fmt::Debug for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year({})", self.calendar())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.calendar())
    }
}

/// Zero-based puzzle day, always in `0..DAYS_PER_YEAR`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u8);

impl Day {
    /// Creates a `Day` from its zero-based index.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (index < DAYS_PER_YEAR).then_some(Self(index))
    }

    /// Creates a `Day` from the one-based number shown to users.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        number.checked_sub(1).and_then(Self::new)
    }

    /// Parses a one-based day number (`1` to `25`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::from_number)
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// One-based day number.
    #[must_use]
    pub fn number(self) -> u8 {
        self.0 + 1
    }

    /// Every day of an edition, in order.
    pub fn all() -> impl Iterator<Item = Day> {
        (0..DAYS_PER_YEAR).map(Self)
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day({})", self.number())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number())
    }
}
