//! A single tabulated reaction at one temperature

use nucdata_taxonomy::Mt;

/// A tabulated reaction cross section at one temperature
///
/// `energy` is strictly increasing in eV; `cross_section` is the same
/// length, non-negative, in barns. A reaction that begins above the
/// nuclide's minimum energy is a threshold reaction: [`nucdata_core::interpolate_xs`]
/// treats any query below `energy[0]` as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// The ENDF-6 MT identifier
    pub mt: Mt,
    /// Tabulated energy grid, eV, strictly increasing
    pub energy: Vec<f64>,
    /// Tabulated cross section, barns, same length as `energy`
    pub cross_section: Vec<f64>,
    /// Index into `energy` where the reaction threshold begins, if the
    /// source recorded one explicitly
    pub threshold_idx: Option<usize>,
}

impl Reaction {
    /// Interpolate this reaction's cross section at energy `e` (eV)
    ///
    /// See [`nucdata_core::interpolate_xs`] for the interpolation rule.
    pub fn xs_at(&self, e: f64) -> f64 {
        nucdata_core::interpolate_xs(&self.energy, &self.cross_section, e)
    }

    /// True if this reaction carries at least one non-zero cross section
    /// sample, used to decide fissionability (spec §3)
    pub fn has_nonzero_data(&self) -> bool {
        self.cross_section.iter().any(|&x| x > 0.0)
    }
}
