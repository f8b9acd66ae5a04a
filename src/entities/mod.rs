// Entity Models
// Plain immutable records: constructed once, read through shared references.
//
// - Event:  a named, dated occurrence
// - Period: a named date range
// - Figure: a historical person with one or more periods

pub mod event;
pub mod figure;
pub mod period;

pub use event::Event;
pub use figure::Figure;
pub use period::Period;
