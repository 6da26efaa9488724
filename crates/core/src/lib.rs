#![forbid(unsafe_code)]

pub mod model;
pub mod query;

pub use model::{Day, DayState, Language, LanguageRegistry, Tracker, Year};
pub use query::{Match, QueryFilters, Selection};
