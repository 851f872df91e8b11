pub mod date;
pub mod json;
pub mod strings;
