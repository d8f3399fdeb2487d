pub mod csv;

pub use csv::{load_digits_csv, parse_digits_csv, Dataset};
