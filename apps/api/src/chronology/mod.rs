// Chronology: period parsing, chronological ordering, and timeline layout.
// Everything here is pure; callers supply the current year.

pub mod period;
pub mod sort;
pub mod timeline;

pub use period::sort_year;
pub use sort::sort_by_period_desc;
pub use timeline::{build_timeline, EventKind, Timeline};
