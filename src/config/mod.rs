//! Configuration module for the first-passage analysis.

pub mod analysis;

mod debug; // Private: read flags through the crate::config::DEBUG_FLAGS re-export
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use persistence::{
    MATRIX_FILENAME_WITHOUT_EXT, MATRIX_VERSION, OUTPUT_PATH, matrix_filename,
};
