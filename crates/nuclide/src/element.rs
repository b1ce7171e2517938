//! The public `Element` type: natural-abundance-weighted aggregate queries

use nucdata_core::{merge_sorted_unique, StringExt};
use nucdata_taxonomy::ReactionId;

use crate::cache;
use crate::error::Result;

/// A natural element, queried as the abundance-weighted aggregate of its
/// isotopes
///
/// Unlike [`crate::Nuclide`], this type triggers loads (through the nuclide
/// cache and the process-wide [`nucdata_config::Config`] registry) the
/// moment a cross section is requested, since it has no reaction data of
/// its own to report.
#[derive(Debug, Clone)]
pub struct Element {
    symbol: &'static str,
    name: String,
    atomic_number: u32,
    isotopes: Vec<nucdata_elements::Isotope>,
}

impl Element {
    /// Look up an element by symbol or name (case-insensitive)
    pub fn new(symbol_or_name: &str) -> Result<Self> {
        Ok(Element {
            symbol: nucdata_elements::element_symbol(symbol_or_name)?,
            name: nucdata_elements::element_name(symbol_or_name)?.capitalise(),
            atomic_number: nucdata_elements::atomic_number(symbol_or_name)?,
            isotopes: nucdata_elements::isotopes(symbol_or_name)?,
        })
    }

    /// Canonical element symbol, e.g. `"Li"`
    pub fn symbol(&self) -> &str {
        self.symbol
    }

    /// Canonical element name, e.g. `"Lithium"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Atomic number Z
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Nuclide ids for every naturally occurring isotope, e.g. `["Li6", "Li7"]`
    pub fn get_nuclides(&self) -> Vec<String> {
        self.isotopes.iter().map(|i| format!("{}{}", self.symbol, i.mass_number)).collect()
    }

    /// Abundance-weighted sum of isotope cross sections for `reaction`
    ///
    /// Loads each isotope through the process-wide nuclide cache (auto-
    /// loading from [`nucdata_config::Config`] as needed), interpolates each
    /// onto the union of their energy grids, and sums weighted by natural
    /// atom-fraction abundance.
    pub fn microscopic_cross_section(
        &self,
        reaction: impl Into<ReactionId> + Clone,
        temperature: Option<&str>,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let mut per_isotope = Vec::with_capacity(self.isotopes.len());
        for isotope in &self.isotopes {
            let id = format!("{}{}", self.symbol, isotope.mass_number);
            let nuclide = cache::load(&id, None, None)?;
            let (energy, xs) = nuclide.microscopic_cross_section(reaction.clone(), temperature)?;
            per_isotope.push((isotope.abundance, energy, xs));
        }

        let slices: Vec<&[f64]> = per_isotope.iter().map(|(_, e, _)| e.as_slice()).collect();
        let grid = merge_sorted_unique(&slices);

        let xs: Vec<f64> = grid
            .iter()
            .map(|&e| {
                per_isotope
                    .iter()
                    .map(|(abundance, energy, xs)| abundance * nucdata_core::interpolate_xs(energy, xs, e))
                    .sum()
            })
            .collect();

        Ok((grid, xs))
    }
}
