//! Seeded deterministic uniform-[0,1) stream for sampling kernels (spec §4.8)

use rand::{Rng as _, SeedableRng};
use rand_pcg::Pcg64;

/// A fresh per-call uniform-[0,1) stream, seeded by a 64-bit integer
///
/// Threaded explicitly through each sampling call rather than drawn from an
/// ambient generator (spec §9 Design Notes), so the same seed always
/// reproduces the same draws regardless of what else has run in the process.
/// Any generator satisfying this contract is acceptable; `Pcg64` is used here
/// for its cheap, well-tested `SeedableRng::seed_from_u64`.
pub struct Rng(Pcg64);

impl Rng {
    /// Start a fresh stream from a 64-bit seed
    pub fn seeded(seed: u64) -> Self {
        Rng(Pcg64::seed_from_u64(seed))
    }

    /// Draw the next uniform sample in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_draws() {
        let mut a = Rng::seeded(42);
        let mut b = Rng::seeded(42);
        assert_eq!(a.next_f64(), b.next_f64());
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = Rng::seeded(7);
        for _ in 0..1000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
