use crate::error::{PassageError, PassageResult};
use crate::index::{RangeExtremum, assert_range};

/// Bottom-up segment tree holding range maxima and minima.
///
/// Leaves live at `[n, 2n)`; node `i` covers its children `2i` and `2i + 1`.
#[derive(Debug, Clone)]
pub struct SegmentTree {
    len: usize,
    maxima: Vec<f64>,
    minima: Vec<f64>,
}

impl SegmentTree {
    pub fn new(values: &[f64]) -> PassageResult<Self> {
        if values.is_empty() {
            return Err(PassageError::EmptyInput);
        }

        let n = values.len();
        let mut maxima = vec![0.0; 2 * n];
        let mut minima = vec![0.0; 2 * n];
        maxima[n..].copy_from_slice(values);
        minima[n..].copy_from_slice(values);

        for node in (1..n).rev() {
            maxima[node] = maxima[2 * node].max(maxima[2 * node + 1]);
            minima[node] = minima[2 * node].min(minima[2 * node + 1]);
        }

        Ok(Self {
            len: n,
            maxima,
            minima,
        })
    }

    fn fold(
        &self,
        tree: &[f64],
        start: usize,
        end: usize,
        init: f64,
        op: fn(f64, f64) -> f64,
    ) -> f64 {
        let mut acc = init;
        let mut lo = start + self.len;
        let mut hi = end + self.len + 1;

        while lo < hi {
            if lo & 1 == 1 {
                acc = op(acc, tree[lo]);
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                acc = op(acc, tree[hi]);
            }
            lo >>= 1;
            hi >>= 1;
        }

        acc
    }
}

impl RangeExtremum for SegmentTree {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn range_max(&self, start: usize, end: usize) -> f64 {
        assert_range(start, end, self.len);
        self.fold(&self.maxima, start, end, f64::NEG_INFINITY, f64::max)
    }

    fn range_min(&self, start: usize, end: usize) -> f64 {
        assert_range(start, end, self.len);
        self.fold(&self.minima, start, end, f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_tree() {
        let tree = SegmentTree::new(&[-3.0]).unwrap();
        assert_eq!(tree.range_max(0, 0), -3.0);
        assert_eq!(tree.range_min(0, 0), -3.0);
    }

    #[test]
    fn non_power_of_two_length() {
        let values = [4.0, 1.0, 7.0, 3.0, 2.0];
        let tree = SegmentTree::new(&values).unwrap();

        assert_eq!(tree.range_max(0, 4), 7.0);
        assert_eq!(tree.range_min(0, 4), 1.0);
        assert_eq!(tree.range_max(3, 4), 3.0);
        assert_eq!(tree.range_min(2, 3), 3.0);
        assert_eq!(tree.range_max(4, 4), 2.0);
    }
}
