use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use aoc_core::model::{Day, DayState, FIRST_YEAR, StateError, Tracker, Year};
use aoc_core::query::{self, Selection};
use storage::TrackerRepository;

use crate::command::{Command, FilterArgs, YearAction};
use crate::error::CommandError;
use crate::help::HELP;
use crate::view::render_progress;

/// Asks the user a yes/no question, e.g. before `init` overwrites a file.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Command context: the loaded tracker, the edit-mode flag and the
/// collaborators commands need.
///
/// Outside edit mode every command reads the repository before running and
/// writes it after a successful change. In edit mode the tracker read when
/// edit mode began stays authoritative until `save`, `reload` or `exit`.
pub struct Session<R> {
    repository: Arc<dyn TrackerRepository>,
    confirm: Box<dyn Confirm>,
    rng: R,
    tracker: Option<Tracker>,
    editing: bool,
}

impl<R: Rng> Session<R> {
    #[must_use]
    pub fn new(repository: Arc<dyn TrackerRepository>, confirm: Box<dyn Confirm>, rng: R) -> Self {
        Self {
            repository,
            confirm,
            rng,
            tracker: None,
            editing: false,
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The tracker as last loaded or modified, if any.
    #[must_use]
    pub fn tracker(&self) -> Option<&Tracker> {
        self.tracker.as_ref()
    }

    /// Parse and execute one tokenized command line, appending its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the line is malformed or the command fails.
    /// Output produced before the failure stays in `out`.
    pub fn run(&mut self, tokens: &[String], out: &mut Vec<String>) -> Result<(), CommandError> {
        let command = Command::parse(tokens, self.editing)?;
        self.execute(command, out)
    }

    /// Execute a parsed command, appending its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the command fails; nothing is persisted then.
    pub fn execute(&mut self, command: Command, out: &mut Vec<String>) -> Result<(), CommandError> {
        debug!(?command, editing = self.editing, "executing command");
        match command {
            Command::Help => out.extend(HELP.lines().map(str::to_owned)),
            Command::Add(names) => self.add_languages(&names, out)?,
            Command::Remove(names) => self.remove_languages(&names, out)?,
            Command::Rename { from, to } => self.rename_language(&from, &to, out)?,
            Command::SetState {
                state,
                year,
                day,
                language,
            } => self.set_state(state, year, day, &language, out)?,
            Command::Show(filters) => self.show(&filters, out)?,
            Command::Get(filters) => self.get(&filters, out)?,
            Command::Year(action) => self.change_years(action, out)?,
            Command::Init => self.init(out)?,
            Command::File => out.push(self.repository.location()),
            Command::Edit => self.enter_edit_mode(out)?,
            Command::Exit => self.exit_edit_mode(out),
            Command::Reload => self.reload(out)?,
            Command::Save => self.write(out)?,
        }
        Ok(())
    }

    fn tracker_mut(&mut self) -> Result<&mut Tracker, CommandError> {
        load(&mut self.tracker, self.repository.as_ref(), self.editing)
    }

    fn add_languages(&mut self, names: &[String], out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        let mut working = tracker.clone();
        let mut lines = Vec::with_capacity(names.len());
        for name in names {
            let added = working.add_language(name).map_err(CommandError::Add)?;
            lines.push(format!("Added lang '{}'.", added.name()));
        }
        *tracker = working;
        out.append(&mut lines);
        self.persist(out)
    }

    fn remove_languages(
        &mut self,
        names: &[String],
        out: &mut Vec<String>,
    ) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        let mut working = tracker.clone();
        let mut lines = Vec::with_capacity(names.len());
        for name in names {
            let removed = working.remove_language(name).map_err(CommandError::Remove)?;
            lines.push(format!("Removed lang '{}'.", removed.name()));
        }
        *tracker = working;
        out.append(&mut lines);
        self.persist(out)
    }

    fn rename_language(
        &mut self,
        from: &str,
        to: &str,
        out: &mut Vec<String>,
    ) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        let previous = tracker
            .rename_language(from, to)
            .map_err(CommandError::Rename)?;
        out.push(format!("Renamed lang '{previous}' to '{to}'."));
        self.persist(out)
    }

    fn set_state(
        &mut self,
        state: DayState,
        year: Year,
        day: Day,
        language: &str,
        out: &mut Vec<String>,
    ) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        check_year(tracker, year)?;
        let updated = tracker
            .set_state(language, year, day, state)
            .map_err(state_error)?;
        out.push(format!("{} {year} {day} {}.", state.verb(), updated.name()));
        self.persist(out)
    }

    fn show(&mut self, args: &FilterArgs, out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        let filters = args.resolve(tracker, Selection::All);
        out.extend(render_progress(tracker, &filters));
        Ok(())
    }

    fn get(&mut self, args: &FilterArgs, out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = load(&mut self.tracker, self.repository.as_ref(), self.editing)?;
        let filters = args.resolve(tracker, Selection::only([DayState::NotYet]));
        match query::pick_random(tracker, &filters, &mut self.rng) {
            Some(found) => out.push(format!(
                "{} {} {}",
                found.year,
                found.day,
                found.language.name()
            )),
            None => out.push("No match found.".to_string()),
        }
        Ok(())
    }

    fn change_years(&mut self, action: YearAction, out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = self.tracker_mut()?;
        match action {
            YearAction::Add => {
                let added = tracker.add_year().map_err(CommandError::AddYear)?;
                out.push(format!("Added year {} ({added}).", added.index()));
            }
            YearAction::Remove => {
                let removed = tracker.remove_year().map_err(CommandError::RemoveYear)?;
                out.push(format!("Removed year {} ({removed}).", removed.index()));
            }
        }
        self.persist(out)
    }

    fn init(&mut self, out: &mut Vec<String>) -> Result<(), CommandError> {
        let location = self.repository.location();
        if self.repository.exists().map_err(CommandError::Load)? {
            let question = format!("'{location}' already exists.\nOverwrite? [y/N]");
            if !self.confirm.confirm(&question) {
                debug!(%location, "init declined");
                return Ok(());
            }
        }

        let tracker = Tracker::initialized();
        self.repository.save(&tracker).map_err(CommandError::Save)?;
        if self.editing {
            self.tracker = Some(tracker);
        }
        out.push(format!("Initialized '{location}'."));
        Ok(())
    }

    fn enter_edit_mode(&mut self, out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = self.repository.load().map_err(CommandError::Load)?;
        self.tracker = Some(tracker);
        self.editing = true;
        info!(location = %self.repository.location(), "entered edit mode");
        out.push("Enabled edit mode.".to_string());
        Ok(())
    }

    fn exit_edit_mode(&mut self, out: &mut Vec<String>) {
        self.editing = false;
        self.tracker = None;
        info!("left edit mode");
        out.push("Exited edit mode.".to_string());
    }

    /// Replace the in-memory tracker with the stored one. On failure the
    /// in-memory tracker is kept.
    fn reload(&mut self, out: &mut Vec<String>) -> Result<(), CommandError> {
        let tracker = self.repository.load().map_err(CommandError::Load)?;
        self.tracker = Some(tracker);
        info!("reloaded data");
        out.push("Reloaded data.".to_string());
        Ok(())
    }

    /// Write after a change, unless changes are being batched in edit mode.
    fn persist(&self, out: &mut Vec<String>) -> Result<(), CommandError> {
        if self.editing {
            return Ok(());
        }
        self.write(out)
    }

    fn write(&self, out: &mut Vec<String>) -> Result<(), CommandError> {
        let Some(tracker) = &self.tracker else {
            return Ok(());
        };
        self.repository.save(tracker).map_err(CommandError::Save)?;
        out.push(format!("Saved data to '{}'.", self.repository.location()));
        Ok(())
    }
}

/// The tracker a command works on: the held one in edit mode, a fresh read otherwise.
fn load<'a>(
    slot: &'a mut Option<Tracker>,
    repository: &dyn TrackerRepository,
    editing: bool,
) -> Result<&'a mut Tracker, CommandError> {
    let tracker = match slot.take() {
        Some(tracker) if editing => tracker,
        _ => repository.load().map_err(CommandError::Load)?,
    };
    Ok(slot.insert(tracker))
}

fn check_year(tracker: &Tracker, year: Year) -> Result<(), CommandError> {
    if tracker.tracks(year) {
        return Ok(());
    }
    match tracker.last_year() {
        Some(last) => Err(CommandError::YearOutOfRange {
            year: year.calendar(),
            first: FIRST_YEAR,
            last: last.calendar(),
        }),
        None => Err(CommandError::NoYearsTracked(year.calendar())),
    }
}

fn state_error(err: StateError) -> CommandError {
    match err {
        StateError::UnknownLanguage { name } => CommandError::UnknownLanguage(name),
        other => CommandError::State(other),
    }
}
