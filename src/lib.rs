pub mod breeding;
pub mod candidate;
pub mod dataset;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{OptionExt, RegressionError, Result, ResultExt};
