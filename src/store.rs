// 🗄️ Domain Store - owns events, figures and the standalone period catalog
//
// Append-only: records are never updated or removed. Every add is a single
// push, so a failed input never leaves a half-built record behind.

use chrono::NaiveDate;
use tracing::debug;

use crate::entities::{Event, Figure, Period};
use crate::sample;

// ============================================================================
// STORE
// ============================================================================

/// In-memory store for one interactive session.
///
/// Constructed explicitly and passed by reference; independent stores can
/// coexist (one per test, for instance).
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    events: Vec<Event>,
    figures: Vec<Figure>,
    /// Standalone catalog, filled only by `add_period` and never linked to figures
    periods: Vec<Period>,
}

impl HistoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the ten sample events
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        sample::seed(&mut store);
        store
    }

    pub fn add_event(
        &mut self,
        name: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> &Event {
        let event = Event::new(name, date, description);
        debug!(name = %event.name, %date, "adding event");
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Add a historical figure ("character" in the add-figure flow)
    pub fn add_character(&mut self, name: impl Into<String>, periods: Vec<Period>) -> &Figure {
        let figure = Figure::new(name, periods);
        debug!(name = %figure.name, periods = figure.periods.len(), "adding figure");
        self.figures.push(figure);
        &self.figures[self.figures.len() - 1]
    }

    /// Add a period to the standalone catalog (not attached to any figure)
    pub fn add_period(
        &mut self,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> &Period {
        let period = Period::new(name, start_date, end_date);
        debug!(name = %period.name, %start_date, %end_date, "adding catalog period");
        self.periods.push(period);
        &self.periods[self.periods.len() - 1]
    }

    /// Events whose name contains `keyword`, ignoring case.
    ///
    /// Lazy and in insertion order. The iterator is `Clone`, so a caller can
    /// walk the matches more than once. An empty keyword matches every event.
    pub fn search_event(&self, keyword: &str) -> impl Iterator<Item = &Event> + Clone + '_ {
        let needle = keyword.to_lowercase();
        debug!(keyword, "searching events");
        self.events
            .iter()
            .filter(move |event| event.name_matches(&needle))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Figures ordered by the start date of their first period (leaders view).
    ///
    /// Stable: figures with the same start keep insertion order. Figures with
    /// no periods go last.
    pub fn figures_by_first_period_start(&self) -> Vec<&Figure> {
        let mut sorted: Vec<&Figure> = self.figures.iter().collect();
        sorted.sort_by_key(|figure| {
            let start = figure.first_period_start();
            (start.is_none(), start)
        });
        sorted
    }
}
