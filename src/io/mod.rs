pub mod input;
pub mod reporting;
