pub mod clock;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::format_hm;
pub use time::{hours_minutes_to_seconds, seconds_to_hours_minutes};
