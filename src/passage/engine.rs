//! First-passage queries answered by binary search over a range-extremum index.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, Series, Threshold};
use crate::error::PassageResult;
use crate::index::{ExtremumIndex, IndexKind, RangeExtremum};

/// Outcome of a single (start, threshold, direction) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstPassage {
    /// Crossing first happens this many steps after the start index (always >= 1).
    Reached(usize),
    /// No later sample satisfies the crossing condition.
    Unreachable,
}

impl FirstPassage {
    #[inline]
    pub fn offset(self) -> Option<usize> {
        match self {
            FirstPassage::Reached(offset) => Some(offset),
            FirstPassage::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reached(self) -> bool {
        matches!(self, FirstPassage::Reached(_))
    }
}

/// Owns a series and the index built over it.
///
/// Stateless between queries: every call is a pure function of the series,
/// the index and its arguments.
#[derive(Debug, Clone)]
pub struct PassageEngine<I = ExtremumIndex> {
    series: Series,
    index: I,
}

impl PassageEngine<ExtremumIndex> {
    pub fn new(series: Series, kind: IndexKind) -> PassageResult<Self> {
        let index = ExtremumIndex::build(kind, series.values())?;
        Ok(Self { series, index })
    }
}

impl<I: RangeExtremum> PassageEngine<I> {
    /// Pairs a series with an index that was built over exactly that series.
    pub fn with_index(series: Series, index: I) -> Self {
        assert_eq!(
            series.len(),
            index.len(),
            "index length does not match series length"
        );
        Self { series, index }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Smallest `j >= 1` such that `series[start + j]` crosses the target.
    ///
    /// The extremum of `[start + 1, end]` is monotone in `end` (max never
    /// falls, min never rises), so the first `end` whose extremum crosses the
    /// target is also the first sample that crosses it.
    pub fn first_passage(
        &self,
        start: usize,
        threshold: Threshold,
        direction: Direction,
    ) -> FirstPassage {
        let n = self.series.len();
        assert!(
            start < n,
            "start index {start} is out of bounds for a series of length {n}"
        );

        if start + 1 == n {
            return FirstPassage::Unreachable;
        }

        let target = direction.target(self.series[start], threshold);
        let first = start + 1;
        let crossed_by =
            |end: usize| direction.is_crossed(self.extremum(direction, first, end), target);

        let mut lo = first;
        let mut hi = n - 1;
        if !crossed_by(hi) {
            return FirstPassage::Unreachable;
        }

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if crossed_by(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        FirstPassage::Reached(lo - start)
    }

    #[inline]
    fn extremum(&self, direction: Direction, start: usize, end: usize) -> f64 {
        match direction {
            Direction::Rising => self.index.range_max(start, end),
            Direction::Falling => self.index.range_min(start, end),
        }
    }
}
