pub mod language;
pub mod movie;
pub mod year_range;

pub use language::Language;
pub use movie::Movie;
pub use year_range::{YearRange, YEAR_RANGES};
