use argminmax::ArgMinMax;

/// Largest power-of-two exponent `k` with `2^k <= value`. `value` must be non-zero.
#[inline]
pub fn floor_log2(value: usize) -> usize {
    debug_assert!(value > 0);
    (usize::BITS - 1 - value.leading_zeros()) as usize
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    let (min_index, max_index) = vec.argminmax();
    (vec[min_index], vec[max_index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_log2_matches_powers() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(4), 2);
        assert_eq!(floor_log2(1023), 9);
        assert_eq!(floor_log2(1024), 10);
    }

    #[test]
    fn min_max_helper() {
        let values = [3.0, -1.5, 7.25, 0.0];
        assert_eq!(get_min_max(&values), (-1.5, 7.25));
    }
}
