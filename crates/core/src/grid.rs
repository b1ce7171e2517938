//! Sorted-merge-with-deduplication helpers shared by grid-building code

/// Relative tolerance below which two consecutive energy points are treated
/// as numerically the same sample
pub const GRID_DEDUP_RTOL: f64 = 1e-12;

/// Merge any number of (already sorted) energy slices into a single sorted,
/// deduplicated grid
///
/// Two consecutive values collapse into one if their relative distance is
/// below [`GRID_DEDUP_RTOL`]. Input slices need not be individually sorted;
/// the full merged set is sorted once up front.
///
/// ```rust
/// # use nucdata_core::merge_sorted_unique;
/// let a = [1.0, 2.0, 3.0];
/// let b = [2.0000000000001, 4.0];
/// assert_eq!(merge_sorted_unique(&[&a, &b]), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn merge_sorted_unique(slices: &[&[f64]]) -> Vec<f64> {
    let mut all: Vec<f64> = slices.iter().flat_map(|s| s.iter().copied()).collect();
    all.sort_by(|a, b| a.partial_cmp(b).expect("energies must not be NaN"));

    let mut out: Vec<f64> = Vec::with_capacity(all.len());
    for value in all {
        match out.last() {
            Some(&prev) if is_close(prev, value) => {}
            _ => out.push(value),
        }
    }
    out
}

/// True if `a` and `b` are within [`GRID_DEDUP_RTOL`] relative distance
pub fn is_close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() / scale < GRID_DEDUP_RTOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_and_sorts() {
        let a = [3.0, 1.0];
        let b = [2.0];
        assert_eq!(merge_sorted_unique(&[&a, &b]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn dedups_near_duplicates() {
        let a = [1.0, 1.0 + 1e-14];
        assert_eq!(merge_sorted_unique(&[&a]), vec![1.0]);
    }

    #[test]
    fn keeps_distinct_close_values() {
        let a = [1.0, 1.0 + 1e-6];
        assert_eq!(merge_sorted_unique(&[&a]).len(), 2);
    }
}
