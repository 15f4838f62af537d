pub mod chain;
pub mod clock;
pub mod log;
pub mod schedule;

pub use chain::recalc_from;
pub use clock::{DisplayTime, from_display, to_display};
pub use schedule::{Field, HeaderField, Outcome, Schedule};
