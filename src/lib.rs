// Core modules
pub mod domain;
pub mod error;
pub mod index;
pub mod passage;

// Adapters around the core: configuration, file I/O and reporting
pub mod analysis;
pub mod config;
pub mod data;
pub mod utils;

// Re-export commonly used types
pub use domain::{Direction, Series, Threshold, ThresholdSet};
pub use error::{PassageError, PassageResult};
pub use index::{ExtremumIndex, IndexKind, RangeExtremum, SegmentTree, SparseTable};
pub use passage::{
    Analyzer, BuildOptions, FirstPassage, PassageEngine, PassageKey, PassageRow,
    WaitingTimeMatrix, compute_waiting_times,
};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

use crate::config::ANALYSIS;
use crate::data::{MatrixFile, MatrixFormat};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "First-passage waiting times for a price series", long_about = None)]
pub struct Cli {
    /// Text file with one sample per line (first column is used)
    #[arg(long, short)]
    pub input: PathBuf,

    /// Move size to analyse; repeat for several (defaults to 5, 10 and 20)
    #[arg(long = "threshold", short)]
    pub thresholds: Vec<f64>,

    /// Only analyse the first N samples
    #[arg(long)]
    pub limit: Option<usize>,

    /// Range-extremum structure to build
    #[arg(long, value_enum, default_value_t = ANALYSIS.index)]
    pub index: IndexKind,

    /// Compute on the current thread only
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Width of one sample in seconds, used to report waiting times
    #[arg(long, default_value_t = ANALYSIS.step_seconds)]
    pub step_seconds: u64,

    /// Write the matrix here (.bin or .json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write the matrix as bincode under the default output directory
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Write a JSON report (summaries and density histograms) here
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Histogram bins for the density report
    #[arg(long, default_value_t = ANALYSIS.report.density_bins)]
    pub bins: usize,
}

impl Cli {
    /// Thresholds from the command line, or the configured defaults.
    pub fn threshold_values(&self) -> Vec<f64> {
        if self.thresholds.is_empty() {
            ANALYSIS.default_thresholds.to_vec()
        } else {
            self.thresholds.clone()
        }
    }

    /// Paths the matrix is written to: `--output`, then the default cache
    /// path when `--save` is set.
    pub fn matrix_paths(&self) -> Vec<PathBuf> {
        let default_path = self
            .save
            .then(|| MatrixFile::default_path(self.step_seconds, MatrixFormat::Bincode));
        self.output.iter().cloned().chain(default_path).collect()
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            index: self.index,
            parallel: !self.sequential && ANALYSIS.parallel,
        }
    }
}
