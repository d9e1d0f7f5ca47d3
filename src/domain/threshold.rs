use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{PassageError, PassageResult};

/// A strictly positive, finite move size (in the same units as the series).
///
/// Validation makes the total order on the inner `f64` a true `Eq`/`Ord`, so
/// thresholds can key ordered maps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> PassageResult<Self> {
        if !value.is_finite() {
            return Err(PassageError::InvalidThreshold {
                threshold: value,
                reason: "threshold must be finite",
            });
        }
        if value <= 0.0 {
            return Err(PassageError::InvalidThreshold {
                threshold: value,
                reason: "threshold must be positive",
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = PassageError;

    fn try_from(value: f64) -> PassageResult<Self> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> f64 {
        threshold.0
    }
}

impl PartialEq for Threshold {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Threshold {}

impl PartialOrd for Threshold {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Threshold {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Threshold {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty set of distinct thresholds, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdSet(Vec<Threshold>);

impl ThresholdSet {
    /// Validates every value and rejects duplicates rather than silently merging them.
    pub fn new(values: impl IntoIterator<Item = f64>) -> PassageResult<Self> {
        let mut thresholds = values
            .into_iter()
            .map(Threshold::new)
            .collect::<PassageResult<Vec<_>>>()?;

        if thresholds.is_empty() {
            return Err(PassageError::NoThresholds);
        }

        thresholds.sort();
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(PassageError::InvalidThreshold {
                threshold: pair[0].value(),
                reason: "duplicate threshold",
            });
        }

        Ok(Self(thresholds))
    }

    pub fn iter(&self) -> impl Iterator<Item = Threshold> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Threshold] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rejects_non_positive_and_non_finite() {
        for bad in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    Threshold::new(bad),
                    Err(PassageError::InvalidThreshold { .. })
                ),
                "{bad} should be rejected"
            );
        }
        assert_eq!(Threshold::new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn set_is_sorted_regardless_of_input_order() {
        let set = ThresholdSet::new([20.0, 5.0, 10.0]).unwrap();
        let values: Vec<f64> = set.iter().map(Threshold::value).collect();
        assert_eq!(values, vec![5.0, 10.0, 20.0]);
    }

    #[test]
    fn set_rejects_duplicates() {
        let err = ThresholdSet::new([5.0, 10.0, 5.0]).unwrap_err();
        assert_eq!(
            err,
            PassageError::InvalidThreshold {
                threshold: 5.0,
                reason: "duplicate threshold",
            }
        );
    }

    #[test]
    fn set_rejects_empty_input() {
        assert_eq!(
            ThresholdSet::new(Vec::<f64>::new()),
            Err(PassageError::NoThresholds)
        );
    }

    #[test]
    fn set_reports_the_first_invalid_value() {
        let err = ThresholdSet::new([5.0, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            PassageError::InvalidThreshold { threshold, .. } if threshold == -1.0
        ));
    }

    #[test]
    fn threshold_serde_validates() {
        let ok: Threshold = serde_json::from_str("2.5").unwrap();
        assert_eq!(ok.value(), 2.5);
        assert!(serde_json::from_str::<Threshold>("-1.0").is_err());
    }
}
