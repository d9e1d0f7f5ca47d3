use serde::{Deserialize, Serialize};
use std::fmt;

use super::threshold::Threshold;

/// Which way the series has to move from the start value.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
)]
pub enum Direction {
    /// First future value `>= start + threshold`.
    Rising,
    /// First future value `<= start - threshold`.
    Falling,
}

impl Direction {
    #[inline]
    pub fn target(self, start_value: f64, threshold: Threshold) -> f64 {
        match self {
            Direction::Rising => start_value + threshold.value(),
            Direction::Falling => start_value - threshold.value(),
        }
    }

    /// Inclusive: landing exactly on the target counts.
    #[inline]
    pub fn is_crossed(self, value: f64, target: f64) -> bool {
        match self {
            Direction::Rising => value >= target,
            Direction::Falling => value <= target,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Rising => write!(f, "rising"),
            Direction::Falling => write!(f, "falling"),
        }
    }
}
