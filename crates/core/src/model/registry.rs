use thiserror::Error;

use crate::model::bit_grid::BitGrid;
use crate::model::language::{Language, LanguageError, LanguageName, compare_names};

/// Historical ceiling on the number of tracked languages.
pub const MAX_LANGUAGES: usize = i32::MAX as usize;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("'{name}' does not exist")]
    NotFound { name: String },

    #[error("'{existing}' already exists")]
    DuplicateName { existing: String },

    #[error("new name is identical to the old one ('{name}')")]
    SameName { name: String },

    #[error("maximum {MAX_LANGUAGES} languages allowed")]
    CapacityExceeded,

    #[error("'{name}' has {found} year words, expected {expected}")]
    GridLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    InvalidName(#[from] LanguageError),
}

/// Languages kept sorted by case-insensitive name, unique under that ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Language> {
        self.languages.get(index)
    }

    /// Index of the language whose name matches ignoring case.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.insertion_index_of(name).err()
    }

    /// Position of the first language whose name is `>= name` ignoring case.
    ///
    /// Returns `Err(index)` of the colliding entry when the name is already taken.
    pub fn insertion_index_of(&self, name: &str) -> Result<usize, usize> {
        match self
            .languages
            .binary_search_by(|language| language.name().cmp_ignore_case(name))
        {
            Ok(existing) => Err(existing),
            Err(position) => Ok(position),
        }
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Language> {
        self.index_of(name).map(|i| &self.languages[i])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Language> {
        self.index_of(name).map(|i| &mut self.languages[i])
    }

    /// Insert a new language with an empty grid of `years` words.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded`, `InvalidName` or `DuplicateName`.
    pub fn add(&mut self, name: &str, years: u8) -> Result<&Language, RegistryError> {
        self.insert(name, BitGrid::zeroed(years))
    }

    /// Insert a language with an existing grid, keeping the sort order.
    ///
    /// # Errors
    ///
    /// Same as [`LanguageRegistry::add`].
    pub fn insert(&mut self, name: &str, days: BitGrid) -> Result<&Language, RegistryError> {
        if self.languages.len() >= MAX_LANGUAGES {
            return Err(RegistryError::CapacityExceeded);
        }
        let name = LanguageName::new(name)?;
        let position = self
            .insertion_index_of(name.as_str())
            .map_err(|existing| self.duplicate(existing))?;
        self.languages.insert(position, Language::new(name, days));
        Ok(&self.languages[position])
    }

    /// Rename a language, moving it to its new sorted position. Returns the previous name.
    ///
    /// A case-only change keeps the entry where it is.
    ///
    /// # Errors
    ///
    /// Returns `SameName`, `NotFound`, `InvalidName` or `DuplicateName`.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<LanguageName, RegistryError> {
        if old == new {
            return Err(RegistryError::SameName {
                name: old.to_string(),
            });
        }
        let index = self.index_of(old).ok_or_else(|| RegistryError::NotFound {
            name: old.to_string(),
        })?;
        let name = LanguageName::new(new)?;

        if compare_names(old, new).is_eq() {
            return Ok(self.languages[index].replace_name(name));
        }
        if let Some(existing) = self.index_of(new) {
            return Err(self.duplicate(existing));
        }

        let mut language = self.languages.remove(index);
        let previous = language.replace_name(name);
        let position = self
            .insertion_index_of(language.name().as_str())
            .unwrap_or_else(|existing| existing);
        self.languages.insert(position, language);
        Ok(previous)
    }

    /// Remove a language and return it.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no language matches.
    pub fn remove(&mut self, name: &str) -> Result<Language, RegistryError> {
        let index = self.index_of(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;
        Ok(self.languages.remove(index))
    }

    pub(crate) fn grids_mut(&mut self) -> impl Iterator<Item = &mut BitGrid> {
        self.languages.iter_mut().map(Language::days_mut)
    }

    fn duplicate(&self, existing: usize) -> RegistryError {
        RegistryError::DuplicateName {
            existing: self.languages[existing].name().to_string(),
        }
    }
}

impl<'a> IntoIterator for &'a LanguageRegistry {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calendar::{Day, Year};
    use crate::model::state::DayState;

    fn names(registry: &LanguageRegistry) -> Vec<&str> {
        registry.iter().map(|l| l.name().as_str()).collect()
    }

    fn assert_sorted(registry: &LanguageRegistry) {
        let names = names(registry);
        for pair in names.windows(2) {
            assert!(compare_names(pair[0], pair[1]).is_lt(), "{names:?}");
        }
    }

    fn registry_of(list: &[&str]) -> LanguageRegistry {
        let mut registry = LanguageRegistry::new();
        for name in list {
            registry.add(name, 1).unwrap();
        }
        registry
    }

    #[test]
    fn add_keeps_case_insensitive_order() {
        let registry = registry_of(&["rust", "C", "go", "Ada", "zig", "c++"]);
        assert_eq!(names(&registry), ["Ada", "C", "c++", "go", "rust", "zig"]);
        assert_sorted(&registry);
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut registry = registry_of(&["Rust"]);
        let err = registry.add("rUST", 1).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                existing: "Rust".into()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_names() {
        let mut registry = LanguageRegistry::new();
        assert!(matches!(
            registry.add(&"x".repeat(256), 1),
            Err(RegistryError::InvalidName(LanguageError::NameTooLong { .. }))
        ));
        assert!(matches!(
            registry.add("", 1),
            Err(RegistryError::InvalidName(LanguageError::EmptyName))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn add_allocates_grid_for_every_year() {
        let mut registry = LanguageRegistry::new();
        let language = registry.add("Go", 4).unwrap();
        assert_eq!(language.days().words(), &[0, 0, 0, 0]);
    }

    #[test]
    fn lookups_ignore_case() {
        let registry = registry_of(&["C", "Go", "Rust"]);
        assert_eq!(registry.index_of("go"), Some(1));
        assert_eq!(registry.index_of("Java"), None);
        assert_eq!(registry.insertion_index_of("Java"), Ok(2));
        assert_eq!(registry.insertion_index_of("a"), Ok(0));
        assert_eq!(registry.insertion_index_of("zig"), Ok(3));
        assert_eq!(registry.insertion_index_of("RUST"), Err(2));
    }

    #[test]
    fn rename_moves_entry_and_keeps_grid() {
        let mut registry = registry_of(&["Ada", "C", "Go", "Rust"]);
        let year = Year::new(0);
        let day = Day::from_number(3).unwrap();
        registry
            .find_mut("Ada")
            .unwrap()
            .days_mut()
            .set_state(year, day, DayState::Completed);

        let previous = registry.rename("ada", "Scala").unwrap();
        assert_eq!(previous.as_str(), "Ada");
        assert_eq!(names(&registry), ["C", "Go", "Rust", "Scala"]);
        assert_eq!(
            registry.find("scala").unwrap().days().state(year, day),
            DayState::Completed
        );

        registry.rename("Scala", "B").unwrap();
        assert_eq!(names(&registry), ["B", "C", "Go", "Rust"]);
        registry.rename("Go", "D").unwrap();
        assert_eq!(names(&registry), ["B", "C", "D", "Rust"]);
        assert_sorted(&registry);
    }

    #[test]
    fn rename_past_neighbours_in_both_directions() {
        for target in ["A", "Bb", "Cc", "Dd", "Z"] {
            let mut registry = registry_of(&["B", "C", "D"]);
            registry.rename("C", target).unwrap();
            assert_sorted(&registry);
            assert!(registry.find(target).is_some());
            assert_eq!(registry.len(), 3);
        }
    }

    #[test]
    fn rename_case_only_stays_in_place() {
        let mut registry = registry_of(&["C", "go", "Rust"]);
        registry.rename("go", "Go").unwrap();
        assert_eq!(names(&registry), ["C", "Go", "Rust"]);
    }

    #[test]
    fn rename_errors() {
        let mut registry = registry_of(&["C", "Go"]);
        assert!(matches!(
            registry.rename("Go", "Go"),
            Err(RegistryError::SameName { .. })
        ));
        assert!(matches!(
            registry.rename("Java", "Kotlin"),
            Err(RegistryError::NotFound { .. })
        ));
        assert_eq!(
            registry.rename("Go", "c"),
            Err(RegistryError::DuplicateName {
                existing: "C".into()
            })
        );
        assert_eq!(names(&registry), ["C", "Go"]);
    }

    #[test]
    fn remove_shifts_remaining_entries() {
        let mut registry = registry_of(&["C", "Go", "Rust"]);
        let removed = registry.remove("GO").unwrap();
        assert_eq!(removed.name().as_str(), "Go");
        assert_eq!(names(&registry), ["C", "Rust"]);
        assert!(matches!(
            registry.remove("Go"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn mixed_operations_stay_sorted() {
        let mut registry = LanguageRegistry::new();
        let script = [
            "add:Python", "add:c", "add:Haskell", "add:ocaml", "rename:c:Zig",
            "add:Elixir", "remove:Haskell", "rename:ocaml:Awk", "add:kotlin",
            "rename:Zig:Lua", "remove:Python", "add:Bash",
        ];
        for step in script {
            let parts: Vec<&str> = step.split(':').collect();
            match parts[0] {
                "add" => {
                    registry.add(parts[1], 1).unwrap();
                }
                "remove" => {
                    registry.remove(parts[1]).unwrap();
                }
                _ => {
                    registry.rename(parts[1], parts[2]).unwrap();
                }
            }
            assert_sorted(&registry);
        }
        assert_eq!(names(&registry), ["Awk", "Bash", "Elixir", "kotlin", "Lua"]);
    }
}
