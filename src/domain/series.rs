use std::ops::Index;

use crate::error::{PassageError, PassageResult};
use crate::utils::maths_utils::get_min_max;

/// Immutable, validated sequence of samples, one per fixed-width time step.
///
/// A `Series` always holds at least one sample and every sample is finite,
/// so downstream range queries never see NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> PassageResult<Self> {
        if values.is_empty() {
            return Err(PassageError::EmptyInput);
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PassageError::NonFiniteSample { index, value });
        }

        Ok(Self { values })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Series over the first `limit` samples (or the whole series if shorter).
    pub fn prefix(&self, limit: usize) -> PassageResult<Self> {
        if limit == 0 {
            return Err(PassageError::EmptyInput);
        }
        let end = limit.min(self.values.len());
        Ok(Self {
            values: self.values[..end].to_vec(),
        })
    }

    pub fn min_max(&self) -> (f64, f64) {
        get_min_max(&self.values)
    }
}

impl Index<usize> for Series {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = PassageError;

    fn try_from(values: Vec<f64>) -> PassageResult<Self> {
        Series::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_series() {
        assert_eq!(Series::new(vec![]), Err(PassageError::EmptyInput));
    }

    #[test]
    fn rejects_non_finite_samples() {
        let err = Series::new(vec![1.0, 2.0, f64::NAN, 4.0]).unwrap_err();
        assert!(matches!(err, PassageError::NonFiniteSample { index: 2, .. }));

        let err = Series::new(vec![f64::INFINITY]).unwrap_err();
        assert!(matches!(err, PassageError::NonFiniteSample { index: 0, .. }));
    }

    #[test]
    fn prefix_truncates_and_clamps() {
        let series = Series::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(series.prefix(2).unwrap().values(), &[1.0, 2.0]);
        assert_eq!(series.prefix(10).unwrap().len(), 4);
        assert_eq!(series.prefix(0), Err(PassageError::EmptyInput));
    }

    #[test]
    fn min_max_spans_all_samples() {
        let series = Series::new(vec![100.0, 102.0, 101.0, 105.0, 99.0]).unwrap();
        assert_eq!(series.min_max(), (99.0, 105.0));
        assert_eq!(series[3], 105.0);
    }
}
