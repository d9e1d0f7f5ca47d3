use serde::{Deserialize, Serialize};

use crate::utils::maths_utils::get_min_max;

/// Equal-width histogram normalised so that its area is 1.
///
/// Bins span `[min, max]` of the input, the last bin is closed on the right,
/// and a degenerate input (all values equal) is widened to `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalDensity {
    /// `bins + 1` edges, ascending.
    pub bin_edges: Vec<f64>,
    /// Density per bin: `count / (total * bin_width)`.
    pub density: Vec<f64>,
}

impl EmpiricalDensity {
    /// `None` when there is nothing to bin (no samples or zero bins).
    pub fn from_samples(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }

        let (mut lo, mut hi) = get_min_max(samples);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &value in samples {
            let bin = (((value - lo) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        let total = samples.len() as f64;
        let density = counts
            .into_iter()
            .map(|count| count as f64 / (total * width))
            .collect();
        let bin_edges = (0..=bins).map(|i| lo + i as f64 * width).collect();

        Some(Self { bin_edges, density })
    }

    pub fn bin_centers(&self) -> Vec<f64> {
        self.bin_edges
            .windows(2)
            .map(|edge| (edge[0] + edge[1]) / 2.0)
            .collect()
    }

    pub fn bin_width(&self) -> f64 {
        match self.bin_edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(density: &EmpiricalDensity) -> f64 {
        density.density.iter().sum::<f64>() * density.bin_width()
    }

    #[test]
    fn integrates_to_one() {
        let samples = [1.0, 2.0, 2.0, 3.0, 7.0, 7.0, 7.0, 10.0];
        let density = EmpiricalDensity::from_samples(&samples, 9).unwrap();

        assert_eq!(density.bin_edges.len(), 10);
        assert_eq!(density.bin_edges[0], 1.0);
        assert_eq!(density.bin_edges[9], 10.0);
        assert!((area(&density) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn maximum_falls_in_last_bin() {
        let density = EmpiricalDensity::from_samples(&[0.0, 4.0], 4).unwrap();
        // width 1.0, one sample in the first and one in the last bin
        assert_eq!(density.density, vec![0.5, 0.0, 0.0, 0.5]);
        assert_eq!(density.bin_centers(), vec![0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let density = EmpiricalDensity::from_samples(&[3.0, 3.0, 3.0], 2).unwrap();
        assert_eq!(density.bin_edges, vec![2.5, 3.0, 3.5]);
        assert!((area(&density) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nothing_to_bin() {
        assert!(EmpiricalDensity::from_samples(&[], 10).is_none());
        assert!(EmpiricalDensity::from_samples(&[1.0], 0).is_none());
    }
}
