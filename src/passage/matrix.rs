//! Bulk first-passage computation over every start index, threshold and direction.

#[cfg(debug_assertions)]
use std::time::Instant;

use itertools::iproduct;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::ANALYSIS;
#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Direction, Series, Threshold, ThresholdSet};
use crate::error::PassageResult;
use crate::index::{ExtremumIndex, IndexKind, RangeExtremum};
use crate::passage::engine::{FirstPassage, PassageEngine};

/// Key of one result row. Orders by threshold, then Rising before Falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassageKey {
    pub threshold: Threshold,
    pub direction: Direction,
}

impl PassageKey {
    pub fn new(threshold: Threshold, direction: Direction) -> Self {
        Self {
            threshold,
            direction,
        }
    }
}

/// One row of the matrix: a result per start index, in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassageRow {
    pub key: PassageKey,
    pub passages: Vec<FirstPassage>,
}

impl PassageRow {
    /// Finite offsets only, in index order.
    pub fn reached_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.passages.iter().filter_map(|p| p.offset())
    }

    pub fn unreachable_count(&self) -> usize {
        self.passages.iter().filter(|p| !p.is_reached()).count()
    }
}

/// Waiting times for every (threshold, direction) pair over a single series.
///
/// Rows are stored sorted by [`PassageKey`] and every row has exactly
/// `series_len` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct WaitingTimeMatrix {
    series_len: usize,
    rows: Vec<PassageRow>,
}

#[derive(Deserialize)]
struct RawMatrix {
    series_len: usize,
    rows: Vec<PassageRow>,
}

impl TryFrom<RawMatrix> for WaitingTimeMatrix {
    type Error = String;

    /// Rejects anything `Analyzer::waiting_times` could not have produced.
    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.series_len == 0 || raw.rows.is_empty() {
            return Err("matrix has no samples or no rows".to_string());
        }
        if let Some(pair) = raw.rows.windows(2).find(|pair| pair[0].key >= pair[1].key) {
            return Err(format!(
                "rows out of order or duplicated at threshold {} {}",
                pair[1].key.threshold, pair[1].key.direction
            ));
        }

        // Sorted and distinct, so full coverage means (Rising, Falling) pairs per threshold.
        for pair in raw.rows.chunks(2) {
            let covered = matches!(
                pair,
                [rising, falling]
                    if rising.key.direction == Direction::Rising
                        && falling.key.direction == Direction::Falling
                        && rising.key.threshold == falling.key.threshold
            );
            if !covered {
                return Err(format!(
                    "threshold {} does not have both a rising and a falling row",
                    pair[0].key.threshold
                ));
            }
        }

        for row in &raw.rows {
            if row.passages.len() != raw.series_len {
                return Err(format!(
                    "row for threshold {} {} has {} entries, expected {}",
                    row.key.threshold,
                    row.key.direction,
                    row.passages.len(),
                    raw.series_len
                ));
            }
            let bad_offset = row
                .passages
                .iter()
                .enumerate()
                .find_map(|(start, passage)| match passage.offset() {
                    Some(offset) if offset == 0 || start + offset >= raw.series_len => {
                        Some((start, offset))
                    }
                    _ => None,
                });
            if let Some((start, offset)) = bad_offset {
                return Err(format!(
                    "row for threshold {} {} reaches offset {} from start {} in a series of length {}",
                    row.key.threshold,
                    row.key.direction,
                    offset,
                    start,
                    raw.series_len
                ));
            }
        }

        Ok(Self {
            series_len: raw.series_len,
            rows: raw.rows,
        })
    }
}

impl WaitingTimeMatrix {
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    pub fn rows(&self) -> &[PassageRow] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = PassageKey> + '_ {
        self.rows.iter().map(|row| row.key)
    }

    pub fn row(&self, key: PassageKey) -> Option<&PassageRow> {
        self.rows
            .binary_search_by(|row| row.key.cmp(&key))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    pub fn get(&self, threshold: Threshold, direction: Direction) -> Option<&[FirstPassage]> {
        self.row(PassageKey::new(threshold, direction))
            .map(|row| row.passages.as_slice())
    }

    /// Number of rows (2 per threshold).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// How the matrix is computed. Never affects the result, only speed and memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub index: IndexKind,
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            index: ANALYSIS.index,
            parallel: ANALYSIS.parallel,
        }
    }
}

/// Holds a built engine so one index serves any number of threshold sets.
#[derive(Debug, Clone)]
pub struct Analyzer<I = ExtremumIndex> {
    engine: PassageEngine<I>,
    parallel: bool,
}

impl Analyzer {
    pub fn new(series: Series, options: BuildOptions) -> PassageResult<Self> {
        #[cfg(debug_assertions)]
        let started_at = Instant::now();
        let engine = PassageEngine::new(series, options.index)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_build_timings {
            log::debug!(
                "[index] built {} over {} samples in {:.3}s",
                options.index,
                engine.series().len(),
                started_at.elapsed().as_secs_f32()
            );
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_index_stats
            && let ExtremumIndex::Sparse(table) = engine.index()
        {
            log::debug!(
                "[index] sparse table: {} levels, {} stored extrema",
                table.levels(),
                table.stored_values()
            );
        }

        Ok(Self {
            engine,
            parallel: options.parallel,
        })
    }
}

impl<I: RangeExtremum> Analyzer<I> {
    pub fn from_engine(engine: PassageEngine<I>, parallel: bool) -> Self {
        Self { engine, parallel }
    }

    pub fn engine(&self) -> &PassageEngine<I> {
        &self.engine
    }

    /// Computes every row for `thresholds`. Infallible: all validation
    /// happened when the series and threshold set were constructed.
    pub fn waiting_times(&self, thresholds: &ThresholdSet) -> WaitingTimeMatrix {
        #[cfg(debug_assertions)]
        let started_at = Instant::now();

        // Ascending thresholds x (Rising, Falling) is already PassageKey order.
        let keys: Vec<PassageKey> = iproduct!(thresholds.iter(), Direction::iter())
            .map(|(threshold, direction)| PassageKey::new(threshold, direction))
            .collect();

        let rows: Vec<PassageRow> = if self.parallel {
            keys.into_par_iter().map(|key| self.build_row(key)).collect()
        } else {
            keys.into_iter().map(|key| self.build_row(key)).collect()
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_build_timings {
            log::debug!(
                "[matrix] {} rows x {} samples in {:.3}s (parallel = {})",
                rows.len(),
                self.engine.series().len(),
                started_at.elapsed().as_secs_f32(),
                self.parallel
            );
        }

        WaitingTimeMatrix {
            series_len: self.engine.series().len(),
            rows,
        }
    }

    fn build_row(&self, key: PassageKey) -> PassageRow {
        let n = self.engine.series().len();
        let mut passages = vec![FirstPassage::Unreachable; n];

        let fill = |(start, slot): (usize, &mut FirstPassage)| {
            *slot = self.engine.first_passage(start, key.threshold, key.direction);
        };

        if self.parallel {
            passages.par_iter_mut().enumerate().for_each(fill);
        } else {
            passages.iter_mut().enumerate().for_each(fill);
        }

        PassageRow { key, passages }
    }
}

/// One-shot convenience: validates both inputs up front, then builds the matrix.
pub fn compute_waiting_times(
    values: Vec<f64>,
    thresholds: impl IntoIterator<Item = f64>,
    options: BuildOptions,
) -> PassageResult<WaitingTimeMatrix> {
    let thresholds = ThresholdSet::new(thresholds)?;
    let series = Series::new(values)?;
    let analyzer = Analyzer::new(series, options)?;
    Ok(analyzer.waiting_times(&thresholds))
}
