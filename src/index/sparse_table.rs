use crate::error::{PassageError, PassageResult};
use crate::index::{RangeExtremum, assert_range};
use crate::utils::maths_utils::floor_log2;

/// Sparse table of range maxima and minima.
///
/// Level `k` stores the extremum of every window `[i, i + 2^k)`; level 0 is
/// the input itself. A query over `[start, end]` combines the two
/// (possibly overlapping) level-`k` windows that cover it, where `2^k` is
/// the largest power of two not exceeding the range length.
#[derive(Debug, Clone)]
pub struct SparseTable {
    maxima: Vec<Vec<f64>>,
    minima: Vec<Vec<f64>>,
}

impl SparseTable {
    pub fn new(values: &[f64]) -> PassageResult<Self> {
        if values.is_empty() {
            return Err(PassageError::EmptyInput);
        }

        let n = values.len();
        let levels = floor_log2(n) + 1;

        let mut maxima: Vec<Vec<f64>> = Vec::with_capacity(levels);
        let mut minima: Vec<Vec<f64>> = Vec::with_capacity(levels);
        maxima.push(values.to_vec());
        minima.push(values.to_vec());

        for level in 1..levels {
            let half = 1usize << (level - 1);
            let windows = n - (1usize << level) + 1;

            let prev_max = &maxima[level - 1];
            let prev_min = &minima[level - 1];
            let next_max: Vec<f64> = (0..windows)
                .map(|i| prev_max[i].max(prev_max[i + half]))
                .collect();
            let next_min: Vec<f64> = (0..windows)
                .map(|i| prev_min[i].min(prev_min[i + half]))
                .collect();

            maxima.push(next_max);
            minima.push(next_min);
        }

        Ok(Self { maxima, minima })
    }

    /// Number of power-of-two levels stored (including the base level).
    pub fn levels(&self) -> usize {
        self.maxima.len()
    }

    /// Total number of stored extrema across both tables.
    pub fn stored_values(&self) -> usize {
        self.maxima.iter().chain(self.minima.iter()).map(Vec::len).sum()
    }

    #[inline]
    fn windows(&self, start: usize, end: usize) -> (usize, usize, usize) {
        let level = floor_log2(end - start + 1);
        (level, start, end + 1 - (1usize << level))
    }
}

impl RangeExtremum for SparseTable {
    #[inline]
    fn len(&self) -> usize {
        self.maxima[0].len()
    }

    #[inline]
    fn range_max(&self, start: usize, end: usize) -> f64 {
        assert_range(start, end, self.len());
        let (level, left, right) = self.windows(start, end);
        let row = &self.maxima[level];
        row[left].max(row[right])
    }

    #[inline]
    fn range_min(&self, start: usize, end: usize) -> f64 {
        assert_range(start, end, self.len());
        let (level, left, right) = self.windows(start, end);
        let row = &self.minima[level];
        row[left].min(row[right])
    }
}
