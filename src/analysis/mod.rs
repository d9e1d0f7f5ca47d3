// Reporting over computed matrices: summary statistics and density histograms
pub mod density;
pub mod summary;

// Re-export commonly used types
pub use density::EmpiricalDensity;
pub use summary::{
    PassageSummary, RowReport, WaitingStats, summarize_matrix, summarize_matrix_with,
    waiting_seconds,
};
