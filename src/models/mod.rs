pub mod analyze;
pub mod mood;
