// 🧾 Input Boundary - raw text in, typed records or a typed error out
//
// Everything the user types goes through here before the store is touched.
// Parsing is pure; the submit_* helpers call the store once, and only after
// the whole input has been accepted.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::warn;

use crate::entities::{Event, Figure, Period};
use crate::store::HistoryStore;

/// Fixed date format for every date the user types or sees
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was left empty
    #[error("please fill in the {field} field")]
    MissingField { field: &'static str },

    /// Date text is not dd/mm/yyyy or names a day that does not exist
    #[error("invalid date '{input}', expected dd/mm/yyyy")]
    MalformedDate { input: String },

    /// A period segment is not `name - dd/mm/yyyy - dd/mm/yyyy`
    #[error("invalid period '{segment}', expected 'Name - dd/mm/yyyy - dd/mm/yyyy'")]
    MalformedPeriodSpec { segment: String },

    /// Search ran but found nothing. Informational, not a store failure.
    #[error("no event matches '{keyword}'")]
    NoSearchMatch { keyword: String },
}

impl InputError {
    /// Whether this is an informational outcome rather than bad input
    pub fn is_informational(&self) -> bool {
        matches!(self, InputError::NoSearchMatch { .. })
    }
}

// ============================================================================
// DATES
// ============================================================================

/// Parse `dd/mm/yyyy`: two-digit day, two-digit month, four-digit year.
///
/// Surrounding whitespace is ignored. Year 0000 is rejected, so the accepted
/// range is 01/01/0001 ..= 31/12/9999.
pub fn parse_date(text: &str) -> Result<NaiveDate, InputError> {
    let malformed = || InputError::MalformedDate {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('/').collect();
    let [day, month, year] = parts[..] else {
        return Err(malformed());
    };

    let all_digits = |s: &str, width: usize| s.len() == width && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(day, 2) || !all_digits(month, 2) || !all_digits(year, 4) {
        return Err(malformed());
    }

    let day: u32 = day.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;
    if year < 1 {
        return Err(malformed());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Format as `dd/mm/yyyy`, zero-padded (inverse of `parse_date`)
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

// ============================================================================
// PERIODS
// ============================================================================

/// Parse a comma-separated list of `name - start - end` period specs.
///
/// All-or-nothing: the first bad segment rejects the whole input and any
/// periods parsed before it are dropped. Order follows the input text.
pub fn parse_periods(text: &str) -> Result<Vec<Period>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::MissingField { field: "periods" });
    }

    text.split(',').map(parse_period_segment).collect()
}

fn parse_period_segment(segment: &str) -> Result<Period, InputError> {
    let parts: Vec<&str> = segment.split('-').map(str::trim).collect();

    match parts.as_slice() {
        [name, start, end] if !name.is_empty() && !start.is_empty() && !end.is_empty() => {
            let start_date = parse_date(start)?;
            let end_date = parse_date(end)?;
            Ok(Period::new(*name, start_date, end_date))
        }
        _ => Err(InputError::MalformedPeriodSpec {
            segment: segment.trim().to_string(),
        }),
    }
}

// ============================================================================
// FORMS
// ============================================================================

/// Raw text of the "add event" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub description: String,
}

/// Validated event, ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
}

impl EventForm {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        EventForm {
            name: name.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Check required fields first, then parse the date
    pub fn validate(&self) -> Result<NewEvent, InputError> {
        require("name", &self.name)?;
        require("date", &self.date)?;
        require("description", &self.description)?;

        Ok(NewEvent {
            name: self.name.clone(),
            date: parse_date(&self.date)?,
            description: self.description.clone(),
        })
    }
}

/// Raw text of the "add figure" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureForm {
    pub name: String,
    pub periods: String,
}

/// Validated figure with at least one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFigure {
    pub name: String,
    pub periods: Vec<Period>,
}

impl FigureForm {
    pub fn new(name: impl Into<String>, periods: impl Into<String>) -> Self {
        FigureForm {
            name: name.into(),
            periods: periods.into(),
        }
    }

    pub fn validate(&self) -> Result<NewFigure, InputError> {
        require("name", &self.name)?;
        require("periods", &self.periods)?;

        Ok(NewFigure {
            name: self.name.clone(),
            periods: parse_periods(&self.periods)?,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), InputError> {
    if value.trim().is_empty() {
        Err(InputError::MissingField { field })
    } else {
        Ok(())
    }
}

// ============================================================================
// SUBMIT
// ============================================================================

/// Validate the form and add the event. On error the store is untouched.
pub fn submit_event<'a>(store: &'a mut HistoryStore, form: &EventForm) -> Result<&'a Event, InputError> {
    let new_event = form.validate().map_err(|e| {
        warn!(error = %e, "rejected event input");
        e
    })?;
    Ok(store.add_event(new_event.name, new_event.date, new_event.description))
}

/// Validate the form and add the figure. On error the store is untouched.
pub fn submit_figure<'a>(store: &'a mut HistoryStore, form: &FigureForm) -> Result<&'a Figure, InputError> {
    let new_figure = form.validate().map_err(|e| {
        warn!(error = %e, "rejected figure input");
        e
    })?;
    Ok(store.add_character(new_figure.name, new_figure.periods))
}

/// Keyword search as the shell runs it.
///
/// A blank keyword is rejected before reaching the store; otherwise the raw
/// text is passed through verbatim. Zero hits come back as `NoSearchMatch`.
pub fn search_events<'a>(store: &'a HistoryStore, keyword: &str) -> Result<Vec<&'a Event>, InputError> {
    require("search", keyword)?;

    let results: Vec<&Event> = store.search_event(keyword).collect();
    if results.is_empty() {
        return Err(InputError::NoSearchMatch {
            keyword: keyword.to_string(),
        });
    }
    Ok(results)
}
