// Domain types and value objects
pub mod direction;
pub mod series;
pub mod threshold;

// Re-export commonly used types
pub use direction::Direction;
pub use series::Series;
pub use threshold::{Threshold, ThresholdSet};
