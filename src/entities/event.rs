// 📜 Event Entity - a named, dated historical occurrence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A historical event.
///
/// `date` is a calendar value without time of day. `description` may be
/// empty here; the input boundary is what requires it on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
}

impl Event {
    pub fn new(name: impl Into<String>, date: NaiveDate, description: impl Into<String>) -> Self {
        Event {
            name: name.into(),
            date,
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against the name only
    pub fn name_matches(&self, keyword_lower: &str) -> bool {
        self.name.to_lowercase().contains(keyword_lower)
    }
}
