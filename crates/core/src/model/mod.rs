mod bit_grid;
mod calendar;
mod language;
mod registry;
mod state;
mod tracker;
mod years;

pub use bit_grid::BitGrid;
pub use calendar::{DAYS_PER_YEAR, Day, FIRST_YEAR, MAX_YEARS, Year};
pub use language::{Language, LanguageError, LanguageName, MAX_NAME_LEN, compare_names};
pub use registry::{LanguageRegistry, MAX_LANGUAGES, RegistryError};
pub use state::DayState;
pub use tracker::{StateError, Tracker};
pub use years::YearError;
