pub mod date;

pub use date::next_day_str;
pub use date::parse_date;
