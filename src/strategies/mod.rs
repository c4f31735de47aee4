pub mod rusdate;

pub use rusdate::{RusDateStrategy, SearchQuery};
