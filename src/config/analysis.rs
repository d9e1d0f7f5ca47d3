//! Analysis and computation configuration

use crate::index::IndexKind;
use crate::utils::TimeUtils;

/// Settings for the reporting summary handed to plotting tools
pub struct ReportSettings {
    // Bin count for empirical density histograms of finite waiting times
    pub density_bins: usize,
    // Percentile reported alongside the median
    pub tail_percentile: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Move sizes analysed when none are given on the command line
    pub default_thresholds: &'static [f64],
    // Width of one series step; offsets are multiplied by this for reporting
    pub step_seconds: u64,
    // Index structure used by default
    pub index: IndexKind,
    // Fan rows and start indices out over the rayon pool
    pub parallel: bool,

    pub report: ReportSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    default_thresholds: &[5.0, 10.0, 20.0],
    step_seconds: TimeUtils::SECS_IN_MIN, // one sample per minute
    index: IndexKind::SparseTable,
    parallel: true,

    report: ReportSettings {
        density_bins: 1000,
        tail_percentile: 90,
    },
};
