//! Lin-lin tabulated cross section interpolation (spec §4.5)

/// Interpolate a tabulated (energy, cross_section) reaction at energy `e`
///
/// - Below the first tabulated energy: zero (the reaction's threshold).
/// - At or above the last tabulated energy: the cross section is held flat
///   at its last value.
/// - Otherwise: linear interpolation between the bracketing samples.
///
/// `energy` must be strictly increasing and the same length as `xs`; this is
/// an invariant of the caller's data, not re-validated here.
///
/// ```rust
/// # use nucdata_core::interpolate_xs;
/// let energy = [1.0, 2.0, 3.0];
/// let xs = [10.0, 20.0, 20.0];
/// assert_eq!(interpolate_xs(&energy, &xs, 0.5), 0.0);
/// assert_eq!(interpolate_xs(&energy, &xs, 1.5), 15.0);
/// assert_eq!(interpolate_xs(&energy, &xs, 100.0), 20.0);
/// ```
pub fn interpolate_xs(energy: &[f64], xs: &[f64], e: f64) -> f64 {
    if energy.is_empty() {
        return 0.0;
    }
    if e < energy[0] {
        return 0.0;
    }
    if e >= *energy.last().expect("checked non-empty") {
        return *xs.last().expect("checked non-empty");
    }

    // first index where energy[idx] > e; bracket is (idx - 1, idx)
    let idx = energy.partition_point(|&x| x <= e);
    let idx = idx.max(1);
    let (e0, e1) = (energy[idx - 1], energy[idx]);
    let (x0, x1) = (xs[idx - 1], xs[idx]);

    if (e1 - e0).abs() == 0.0 {
        return x0;
    }

    x0 + (x1 - x0) * (e - e0) / (e1 - e0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_below_threshold() {
        let energy = [5.0, 10.0];
        let xs = [1.0, 2.0];
        assert_eq!(interpolate_xs(&energy, &xs, 1.0), 0.0);
    }

    #[test]
    fn flat_tail_above_last_point() {
        let energy = [5.0, 10.0];
        let xs = [1.0, 2.0];
        assert_eq!(interpolate_xs(&energy, &xs, 1e9), 2.0);
    }

    #[test]
    fn linear_between_points() {
        let energy = [0.0, 10.0];
        let xs = [0.0, 100.0];
        assert_eq!(interpolate_xs(&energy, &xs, 5.0), 50.0);
    }

    #[test]
    fn exact_sample_point() {
        let energy = [1.0, 2.0, 3.0];
        let xs = [1.0, 4.0, 9.0];
        assert_eq!(interpolate_xs(&energy, &xs, 2.0), 4.0);
    }

    #[test]
    fn empty_table_is_zero_everywhere() {
        assert_eq!(interpolate_xs(&[], &[], 5.0), 0.0);
    }
}
