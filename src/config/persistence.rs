//! File persistence and serialization configuration

use crate::utils::TimeUtils;

/// Directory `--save` writes matrix files into
pub const OUTPUT_PATH: &str = "waiting_times";

/// Base filename for matrix files (without extension)
pub const MATRIX_FILENAME_WITHOUT_EXT: &str = "waiting_times";

/// Current version of the matrix file format
pub const MATRIX_VERSION: f64 = 1.0;

/// Generate step-specific matrix filename
/// Example: "waiting_times_1m_v1.bin" or "waiting_times_1h_v1.json"
pub fn matrix_filename(step_seconds: u64, extension: &str) -> String {
    let step_str = TimeUtils::step_to_string(step_seconds);
    format!(
        "{}_{}_v{}.{}",
        MATRIX_FILENAME_WITHOUT_EXT, step_str, MATRIX_VERSION, extension
    )
}
