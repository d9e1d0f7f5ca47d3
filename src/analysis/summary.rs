//! Per-row statistics over the finite waiting times of a matrix.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

use crate::analysis::density::EmpiricalDensity;
use crate::config::ANALYSIS;
use crate::passage::{PassageKey, PassageRow, WaitingTimeMatrix};
use crate::utils::TimeUtils;

/// Statistics over the reached entries of one row, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageSummary {
    pub reached: usize,
    pub unreachable: usize,
    /// `None` when nothing in the row was reached.
    pub waiting_secs: Option<WaitingStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub tail: f64,
}

impl PassageSummary {
    pub fn from_row(row: &PassageRow, step_seconds: u64, tail_percentile: usize) -> Self {
        let waits = waiting_seconds(row, step_seconds);
        let reached = waits.len();
        let unreachable = row.passages.len() - reached;

        let waiting_secs = (!waits.is_empty()).then(|| {
            let mut data = Data::new(waits);
            WaitingStats {
                min: data.min(),
                max: data.max(),
                mean: data.mean().unwrap_or(f64::NAN),
                median: data.median(),
                tail: data.percentile(tail_percentile),
            }
        });

        Self {
            reached,
            unreachable,
            waiting_secs,
        }
    }

    /// Share of start indices whose target was eventually reached (0–1).
    pub fn reached_fraction(&self) -> f64 {
        let total = self.reached + self.unreachable;
        if total == 0 {
            0.0
        } else {
            self.reached as f64 / total as f64
        }
    }
}

/// Everything a plotting tool needs for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowReport {
    pub key: PassageKey,
    pub summary: PassageSummary,
    pub density: Option<EmpiricalDensity>,
}

/// Reached waiting times of a row scaled to seconds, in index order.
pub fn waiting_seconds(row: &PassageRow, step_seconds: u64) -> Vec<f64> {
    row.reached_offsets()
        .map(|offset| TimeUtils::steps_to_seconds(offset, step_seconds))
        .collect()
}

pub fn summarize_matrix(matrix: &WaitingTimeMatrix, step_seconds: u64) -> Vec<RowReport> {
    summarize_matrix_with(
        matrix,
        step_seconds,
        ANALYSIS.report.density_bins,
        ANALYSIS.report.tail_percentile,
    )
}

pub fn summarize_matrix_with(
    matrix: &WaitingTimeMatrix,
    step_seconds: u64,
    density_bins: usize,
    tail_percentile: usize,
) -> Vec<RowReport> {
    matrix
        .rows()
        .iter()
        .map(|row| RowReport {
            key: row.key,
            summary: PassageSummary::from_row(row, step_seconds, tail_percentile),
            density: EmpiricalDensity::from_samples(
                &waiting_seconds(row, step_seconds),
                density_bins,
            ),
        })
        .collect()
}
