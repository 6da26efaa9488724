use aoc_core::model::{Day, Language, Tracker, Year};
use aoc_core::query::QueryFilters;

/// Narrowest label column, wide enough for a four-digit year.
const MIN_LABEL_WIDTH: usize = 4;

/// Render the progress table for the selected languages, years and days.
///
/// One block per language: a header with the day numbers, an underline,
/// one row of state glyphs per year, and a blank separator line.
#[must_use]
pub fn render_progress(tracker: &Tracker, filters: &QueryFilters) -> Vec<String> {
    let languages: Vec<&Language> = tracker
        .registry()
        .iter()
        .enumerate()
        .filter(|(index, _)| filters.languages.contains(index))
        .map(|(_, language)| language)
        .collect();
    let years: Vec<Year> = tracker
        .years()
        .filter(|year| filters.years.contains(year))
        .collect();
    let days: Vec<Day> = Day::all().filter(|day| filters.days.contains(day)).collect();

    let width = languages
        .iter()
        .map(|language| language.name().as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH);

    let mut lines = Vec::with_capacity(languages.len() * (years.len() + 3));
    for language in languages {
        let mut header = format!("{:>width$} |", language.name().as_str());
        header.extend(days.iter().map(|day| format!(" {:2}", day.number())));
        lines.push(header);
        lines.push("_".repeat(width + 2 + 3 * days.len()));

        for &year in &years {
            let mut row = format!("{:>width$} |", year.calendar());
            row.extend(
                days.iter()
                    .map(|&day| format!("  {}", language.days().state(year, day).glyph())),
            );
            lines.push(row);
        }
        lines.push(String::new());
    }
    lines
}
