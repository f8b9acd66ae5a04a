// Historian - Core Library
// Domain store, input boundary and rendering shared by the TUI and one-shot commands

pub mod entities;
pub mod parser;
pub mod render;
pub mod sample;
pub mod store;

// Re-export commonly used types
pub use entities::{Event, Figure, Period};
pub use parser::{
    format_date, parse_date, parse_periods,
    search_events, submit_event, submit_figure,
    EventForm, FigureForm, InputError, NewEvent, NewFigure,
    DATE_FORMAT,
};
pub use render::{event_block, event_detail, figure_block, leaders_text, period_line};
pub use sample::LEADERS;
pub use store::HistoryStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
