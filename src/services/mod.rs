pub mod analyzer;
pub mod classifier;
pub mod codec;
pub mod recommendations;
