pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;

pub use formatting::fmt_hours;
pub use formatting::fmt_pct;
