//! Range-extremum indexes over a fixed series.
//!
//! Both structures answer "max / min of `values[start..=end]`" and are
//! read-only after construction, so a single instance can be shared across
//! rayon workers without locking.

pub mod segment_tree;
pub mod sparse_table;

pub use segment_tree::SegmentTree;
pub use sparse_table::SparseTable;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PassageError, PassageResult};

/// Inclusive range max/min queries over an immutable sequence.
///
/// The unchecked methods treat a bad range as a programming error and panic;
/// the `try_` variants report it as [`PassageError::IndexOutOfRange`].
pub trait RangeExtremum: Send + Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn range_max(&self, start: usize, end: usize) -> f64;

    fn range_min(&self, start: usize, end: usize) -> f64;

    fn try_range_max(&self, start: usize, end: usize) -> PassageResult<f64> {
        check_range(start, end, self.len())?;
        Ok(self.range_max(start, end))
    }

    fn try_range_min(&self, start: usize, end: usize) -> PassageResult<f64> {
        check_range(start, end, self.len())?;
        Ok(self.range_min(start, end))
    }
}

pub(crate) fn check_range(start: usize, end: usize, len: usize) -> PassageResult<()> {
    if start > end || end >= len {
        return Err(PassageError::IndexOutOfRange { start, end, len });
    }
    Ok(())
}

/// Fail fast on a bad range; never clamp.
#[inline]
pub(crate) fn assert_range(start: usize, end: usize, len: usize) {
    if let Err(e) = check_range(start, end, len) {
        panic!("{e}");
    }
}

/// Which index structure to build.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum IndexKind {
    /// O(n log n) memory, O(1) queries.
    #[default]
    SparseTable,
    /// O(n) memory, O(log n) queries. For series too large for a sparse table.
    SegmentTree,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndexKind::SparseTable => write!(f, "sparse-table"),
            IndexKind::SegmentTree => write!(f, "segment-tree"),
        }
    }
}

/// Runtime-selected index, dispatched by match rather than a trait object.
#[derive(Debug, Clone)]
pub enum ExtremumIndex {
    Sparse(SparseTable),
    Segment(SegmentTree),
}

impl ExtremumIndex {
    pub fn build(kind: IndexKind, values: &[f64]) -> PassageResult<Self> {
        Ok(match kind {
            IndexKind::SparseTable => ExtremumIndex::Sparse(SparseTable::new(values)?),
            IndexKind::SegmentTree => ExtremumIndex::Segment(SegmentTree::new(values)?),
        })
    }

    pub fn kind(&self) -> IndexKind {
        match self {
            ExtremumIndex::Sparse(_) => IndexKind::SparseTable,
            ExtremumIndex::Segment(_) => IndexKind::SegmentTree,
        }
    }
}

impl RangeExtremum for ExtremumIndex {
    #[inline]
    fn len(&self) -> usize {
        match self {
            ExtremumIndex::Sparse(table) => table.len(),
            ExtremumIndex::Segment(tree) => tree.len(),
        }
    }

    #[inline]
    fn range_max(&self, start: usize, end: usize) -> f64 {
        match self {
            ExtremumIndex::Sparse(table) => table.range_max(start, end),
            ExtremumIndex::Segment(tree) => tree.range_max(start, end),
        }
    }

    #[inline]
    fn range_min(&self, start: usize, end: usize) -> f64 {
        match self {
            ExtremumIndex::Sparse(table) => table.range_min(start, end),
            ExtremumIndex::Segment(tree) => tree.range_min(start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 9] = [5.0, 3.0, 8.0, 8.0, -2.0, 7.0, 1.0, 9.5, 0.0];

    fn scan_max(values: &[f64], start: usize, end: usize) -> f64 {
        values[start..=end].iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    fn scan_min(values: &[f64], start: usize, end: usize) -> f64 {
        values[start..=end].iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn both_kinds_agree_with_a_linear_scan_on_every_range() {
        for kind in [IndexKind::SparseTable, IndexKind::SegmentTree] {
            let index = ExtremumIndex::build(kind, &VALUES).unwrap();
            assert_eq!(index.kind(), kind);
            assert_eq!(index.len(), VALUES.len());
            for start in 0..VALUES.len() {
                for end in start..VALUES.len() {
                    assert_eq!(
                        index.range_max(start, end),
                        scan_max(&VALUES, start, end),
                        "{kind} max [{start}, {end}]"
                    );
                    assert_eq!(
                        index.range_min(start, end),
                        scan_min(&VALUES, start, end),
                        "{kind} min [{start}, {end}]"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        for kind in [IndexKind::SparseTable, IndexKind::SegmentTree] {
            assert!(matches!(
                ExtremumIndex::build(kind, &[]),
                Err(PassageError::EmptyInput)
            ));
        }
    }

    #[test]
    fn checked_queries_report_bad_ranges() {
        let index = ExtremumIndex::build(IndexKind::SparseTable, &VALUES).unwrap();
        assert_eq!(index.try_range_max(2, 4), Ok(8.0));
        assert_eq!(
            index.try_range_min(4, 2),
            Err(PassageError::IndexOutOfRange {
                start: 4,
                end: 2,
                len: 9
            })
        );
        assert_eq!(
            index.try_range_max(0, 9),
            Err(PassageError::IndexOutOfRange {
                start: 0,
                end: 9,
                len: 9
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn unchecked_query_past_the_end_panics() {
        let index = ExtremumIndex::build(IndexKind::SegmentTree, &VALUES).unwrap();
        index.range_max(3, VALUES.len());
    }
}
