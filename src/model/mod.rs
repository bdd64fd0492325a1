pub mod field;
pub mod movie;
