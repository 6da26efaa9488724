use aoc_core::model::{Day, DayState, Tracker, Year};
use aoc_core::query::{QueryFilters, Selection};

use crate::error::CommandError;

/// Axis change requested by `year add` / `year rm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearAction {
    Add,
    Remove,
}

/// Raw filter values as typed by the user.
///
/// `None` means the flag was not given. Values are resolved against the
/// loaded tracker by [`FilterArgs::resolve`]; unresolvable values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    pub days: Option<Vec<String>>,
    pub years: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub states: Option<Vec<String>>,
}

impl FilterArgs {
    /// Parse `-d/--days`, `-y/--years`, `-l/--langs` and, when allowed,
    /// `-s/--states`. Each flag takes the values up to the next `-` token;
    /// repeating a flag adds to its values.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownArgument` for any other token.
    pub fn parse(args: &[String], allow_states: bool) -> Result<Self, CommandError> {
        let mut filters = Self::default();
        let mut tokens = args.iter().peekable();

        while let Some(flag) = tokens.next() {
            let slot = match flag.to_ascii_lowercase().as_str() {
                "-d" | "--days" => &mut filters.days,
                "-y" | "--years" => &mut filters.years,
                "-l" | "--langs" => &mut filters.languages,
                "-s" | "--states" if allow_states => &mut filters.states,
                _ => {
                    return Err(CommandError::UnknownArgument {
                        found: flag.clone(),
                        expected: if allow_states {
                            "'-d', '-y', '-l' or '-s'"
                        } else {
                            "'-d', '-y' or '-l'"
                        },
                    });
                }
            };
            let values = slot.get_or_insert_with(Vec::new);
            while let Some(value) = tokens.next_if(|token| !token.starts_with('-')) {
                values.push(value.clone());
            }
        }

        Ok(filters)
    }

    /// Turn the raw values into filters over `tracker`.
    ///
    /// `default_states` applies when no state flag was given.
    #[must_use]
    pub fn resolve(&self, tracker: &Tracker, default_states: Selection<DayState>) -> QueryFilters {
        let mut filters = QueryFilters {
            states: default_states,
            ..QueryFilters::default()
        };
        if let Some(days) = &self.days {
            filters.days = Selection::only(days.iter().filter_map(|raw| Day::parse(raw)));
        }
        if let Some(years) = &self.years {
            filters.years = Selection::only(
                years
                    .iter()
                    .filter_map(|raw| Year::parse(raw))
                    .filter(|year| tracker.tracks(*year)),
            );
        }
        if let Some(languages) = &self.languages {
            filters.languages = Selection::only(
                languages
                    .iter()
                    .filter_map(|raw| tracker.registry().index_of(raw)),
            );
        }
        if let Some(states) = &self.states {
            filters.states = Selection::only(states.iter().filter_map(|raw| DayState::parse(raw)));
        }
        filters
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add(Vec<String>),
    Remove(Vec<String>),
    Rename {
        from: String,
        to: String,
    },
    SetState {
        state: DayState,
        year: Year,
        day: Day,
        language: String,
    },
    Show(FilterArgs),
    Get(FilterArgs),
    Year(YearAction),
    Init,
    File,
    Edit,
    Exit,
    Reload,
    Save,
}

impl Command {
    /// Parse a tokenized command line. Command names ignore case.
    ///
    /// `edit` is only known outside edit mode; `exit`, `reload` and `save`
    /// only inside it.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` describing the first malformed argument.
    pub fn parse(tokens: &[String], editing: bool) -> Result<Self, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Command::Help);
        };

        match name.to_ascii_lowercase().as_str() {
            "h" | "help" | "-h" | "--help" => Ok(Command::Help),
            "add" => at_least_one(args).map(Command::Add),
            "rm" => at_least_one(args).map(Command::Remove),
            "rename" => {
                let [from, to] = args else {
                    return Err(CommandError::ArgumentCount {
                        found: args.len(),
                        expected: "2",
                    });
                };
                Ok(Command::Rename {
                    from: from.clone(),
                    to: to.clone(),
                })
            }
            "start" => parse_set_state(args, DayState::Started),
            "complete" => parse_set_state(args, DayState::Completed),
            "clear" => parse_set_state(args, DayState::NotYet),
            "show" => FilterArgs::parse(args, false).map(Command::Show),
            "get" | "random" => FilterArgs::parse(args, true).map(Command::Get),
            "year" => parse_year(args).map(Command::Year),
            "init" => Ok(Command::Init),
            "file" => Ok(Command::File),
            "edit" if !editing => Ok(Command::Edit),
            "exit" if editing => Ok(Command::Exit),
            "reload" if editing => Ok(Command::Reload),
            "save" if editing => Ok(Command::Save),
            _ => Err(CommandError::UnknownCommand(name.clone())),
        }
    }
}

fn at_least_one(args: &[String]) -> Result<Vec<String>, CommandError> {
    if args.is_empty() {
        return Err(CommandError::ArgumentCount {
            found: 0,
            expected: "at least 1",
        });
    }
    Ok(args.to_vec())
}

fn parse_set_state(args: &[String], state: DayState) -> Result<Command, CommandError> {
    let [year, day, language] = args else {
        return Err(CommandError::ArgumentCount {
            found: args.len(),
            expected: "3",
        });
    };
    let year = Year::parse(year).ok_or_else(|| CommandError::InvalidYear(year.clone()))?;
    let day = Day::parse(day).ok_or_else(|| CommandError::InvalidDay(day.clone()))?;
    Ok(Command::SetState {
        state,
        year,
        day,
        language: language.clone(),
    })
}

fn parse_year(args: &[String]) -> Result<YearAction, CommandError> {
    let [action] = args else {
        return Err(CommandError::ArgumentCount {
            found: args.len(),
            expected: "1",
        });
    };
    match action.to_ascii_lowercase().as_str() {
        "add" => Ok(YearAction::Add),
        "rm" => Ok(YearAction::Remove),
        _ => Err(CommandError::UnknownArgument {
            found: action.clone(),
            expected: "'add' or 'rm'",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }

    fn parse(line: &str) -> Result<Command, CommandError> {
        Command::parse(&tokens(line), false)
    }

    #[test]
    fn empty_line_and_help_aliases_show_help() {
        assert_eq!(parse("").unwrap(), Command::Help);
        for alias in ["h", "HELP", "-h", "--help"] {
            assert_eq!(parse(alias).unwrap(), Command::Help);
        }
    }

    #[test]
    fn set_state_parses_year_day_and_language() {
        let command = parse("Complete 17 5 Rust").unwrap();
        assert_eq!(
            command,
            Command::SetState {
                state: DayState::Completed,
                year: Year::new(2),
                day: Day::from_number(5).unwrap(),
                language: "Rust".into(),
            }
        );
    }

    #[test]
    fn set_state_rejects_bad_arguments() {
        assert!(matches!(
            parse("start 2015 1"),
            Err(CommandError::ArgumentCount { found: 2, .. })
        ));
        assert!(matches!(
            parse("start 2010 1 C"),
            Err(CommandError::InvalidYear(_))
        ));
        assert!(matches!(
            parse("clear 2015 26 C"),
            Err(CommandError::InvalidDay(_))
        ));
    }

    #[test]
    fn language_commands_check_arity() {
        assert!(matches!(
            parse("add"),
            Err(CommandError::ArgumentCount { found: 0, .. })
        ));
        assert_eq!(
            parse("rm C Go").unwrap(),
            Command::Remove(vec!["C".into(), "Go".into()])
        );
        assert!(matches!(
            parse("rename C"),
            Err(CommandError::ArgumentCount { found: 1, .. })
        ));
    }

    #[test]
    fn year_actions() {
        assert_eq!(parse("year add").unwrap(), Command::Year(YearAction::Add));
        assert_eq!(parse("YEAR RM").unwrap(), Command::Year(YearAction::Remove));
        assert!(matches!(
            parse("year drop"),
            Err(CommandError::UnknownArgument { .. })
        ));
        assert!(matches!(
            parse("year"),
            Err(CommandError::ArgumentCount { .. })
        ));
    }

    #[test]
    fn session_commands_depend_on_edit_mode() {
        assert_eq!(parse("edit").unwrap(), Command::Edit);
        assert!(matches!(parse("save"), Err(CommandError::UnknownCommand(_))));
        assert!(matches!(
            Command::parse(&tokens("edit"), true),
            Err(CommandError::UnknownCommand(_))
        ));
        for (line, expected) in [
            ("exit", Command::Exit),
            ("reload", Command::Reload),
            ("save", Command::Save),
        ] {
            assert_eq!(Command::parse(&tokens(line), true).unwrap(), expected);
        }
    }

    #[test]
    fn unknown_command_is_reported() {
        let err = parse("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: 'frobnicate'. See 'help'.");
    }

    #[test]
    fn filter_flags_collect_values_until_next_flag() {
        let Command::Get(filters) = parse("get -d 1 2 --LANGS C -d 3 -s started").unwrap() else {
            panic!("expected get");
        };
        assert_eq!(
            filters.days,
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
        assert_eq!(filters.languages, Some(vec!["C".to_string()]));
        assert_eq!(filters.states, Some(vec!["started".to_string()]));
        assert_eq!(filters.years, None);
    }

    #[test]
    fn show_rejects_state_filter() {
        assert!(matches!(
            parse("show -s started"),
            Err(CommandError::UnknownArgument { .. })
        ));
        assert!(matches!(
            parse("show 12"),
            Err(CommandError::UnknownArgument { .. })
        ));
    }

    #[test]
    fn resolve_drops_unknown_values() {
        let mut tracker = Tracker::new(2);
        tracker.add_language("C").unwrap();
        tracker.add_language("Go").unwrap();

        let args = FilterArgs {
            days: Some(vec!["0".into(), "3".into(), "x".into()]),
            years: Some(vec!["2016".into(), "2017".into()]),
            languages: Some(vec!["go".into(), "Java".into()]),
            states: None,
        };
        let filters = args.resolve(&tracker, Selection::only([DayState::NotYet]));
        assert_eq!(filters.days, Selection::only([Day::from_number(3).unwrap()]));
        assert_eq!(filters.years, Selection::only([Year::new(1)]));
        assert_eq!(filters.languages, Selection::only([1]));
        assert_eq!(filters.states, Selection::only([DayState::NotYet]));

        let explicit = FilterArgs {
            states: Some(vec!["bogus".into()]),
            ..FilterArgs::default()
        };
        let filters = explicit.resolve(&tracker, Selection::All);
        assert!(filters.matches_nothing());
    }
}
