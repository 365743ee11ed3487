pub mod candidates;
pub mod names;

pub use names::{CapitalizedRuns, NameExtractor};
