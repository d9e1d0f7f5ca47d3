// Loading series from disk and persisting computed matrices and reports
pub mod matrix_file;
pub mod report_file;
pub mod series_file;

// Re-export commonly used types
pub use matrix_file::{MatrixFile, MatrixFormat};
pub use report_file::save_reports;
pub use series_file::{load_series, parse_series};
