//! The in-memory per-nuclide reaction data model (spec §3, §4.5)

use std::collections::BTreeMap;

use nucdata_core::merge_sorted_unique;
use nucdata_taxonomy::{sum_rule_children, Mt, ReactionId, FISSION_LIKE};

use crate::error::{Error, Result};
use crate::reaction::Reaction;

/// Per-temperature reaction tables and derived attributes for one nuclide
///
/// Once published into the nuclide cache, a `Nuclide` is never mutated
/// (spec §5): reloading with a different temperature set produces a new
/// `Nuclide` value rather than extending an existing one.
#[derive(Debug, Clone)]
pub struct Nuclide {
    /// Element symbol, e.g. `"Li"`
    pub element_symbol: String,
    /// Element name, e.g. `"Lithium"`
    pub element_name: String,
    /// Nuclide id, e.g. `"Li6"`
    pub id: String,
    /// Atomic number Z
    pub atomic_number: u32,
    /// Mass number A
    pub mass_number: u32,
    /// Neutron number N = A - Z
    pub neutron_number: u32,
    /// Atomic mass in u, if present in the source; falls back to 1.0 in
    /// atoms-per-cc calculations when absent (spec §4.6, documented quirk)
    pub atomic_mass: Option<f64>,
    /// True iff any fission-like MT (18, 19, 20, 21, 38) has non-zero data
    /// at any loaded temperature
    pub fissionable: bool,
    /// Every temperature label present in the source
    pub available_temperatures: Vec<String>,
    /// The subset of `available_temperatures` actually resident in memory
    pub loaded_temperatures: Vec<String>,
    /// temperature label -> MT -> reaction table
    pub reactions: BTreeMap<String, BTreeMap<Mt, Reaction>>,
}

impl Nuclide {
    /// Construct from a decoded source document plus the set of
    /// temperatures actually retained (a subset of what the document held)
    pub(crate) fn new(
        element_symbol: String,
        element_name: String,
        id: String,
        atomic_number: u32,
        mass_number: u32,
        neutron_number: u32,
        atomic_mass: Option<f64>,
        available_temperatures: Vec<String>,
        reactions: BTreeMap<String, BTreeMap<Mt, Reaction>>,
    ) -> Self {
        let loaded_temperatures: Vec<String> = reactions.keys().cloned().collect();
        let fissionable = reactions.values().any(|table| {
            FISSION_LIKE
                .iter()
                .any(|mt| table.get(mt).is_some_and(Reaction::has_nonzero_data))
        });

        Nuclide {
            element_symbol,
            element_name,
            id,
            atomic_number,
            mass_number,
            neutron_number,
            atomic_mass,
            fissionable,
            available_temperatures,
            loaded_temperatures,
            reactions,
        }
    }

    /// Sorted union of MT numbers across every loaded temperature
    pub fn reaction_mts(&self) -> Vec<Mt> {
        let mut mts: Vec<Mt> = self
            .reactions
            .values()
            .flat_map(|table| table.keys().copied())
            .collect();
        mts.sort_unstable();
        mts.dedup();
        mts
    }

    /// Resolve which loaded temperature a query should use
    fn resolve_temperature<'a>(&'a self, temperature: Option<&str>) -> Result<&'a str> {
        match temperature {
            Some(t) if self.loaded_temperatures.iter().any(|l| l == t) => Ok(t),
            Some(t) if self.available_temperatures.iter().any(|a| a == t) => Err(Error::NotFound(format!(
                "temperature \"{t}\" is available for {} but not loaded (loaded: {:?})",
                self.id, self.loaded_temperatures
            ))),
            Some(t) => Err(Error::not_found(
                "temperature",
                t,
                &format!("{:?}", self.available_temperatures),
            )),
            None => match self.loaded_temperatures.as_slice() {
                [] => Err(Error::NotFound(format!("{} has no loaded temperatures", self.id))),
                [only] => Ok(only.as_str()),
                many => Err(Error::Ambiguous(format!(
                    "{} has {} loaded temperatures ({:?}); a temperature must be specified",
                    self.id,
                    many.len(),
                    many
                ))),
            },
        }
    }

    /// Microscopic cross section for a reaction at one temperature
    ///
    /// `reaction` accepts an MT number or a name, resolved through
    /// [`nucdata_taxonomy`]. If the MT is absent but synthesisable via a sum
    /// rule (spec §4.1), the result is computed on the union of its
    /// children's energy grids, each child interpolated onto that grid and
    /// zero-extended outside its own range.
    pub fn microscopic_cross_section(
        &self,
        reaction: impl Into<ReactionId>,
        temperature: Option<&str>,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let mt = reaction.into().resolve()?;
        let temperature = self.resolve_temperature(temperature)?;
        self.cross_section_at(mt, temperature)
    }

    /// Direct table lookup at a known-loaded temperature, falling back to
    /// sum-rule synthesis
    fn cross_section_at(&self, mt: Mt, temperature: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        if let Some(reaction) = self.reactions[temperature].get(&mt) {
            return Ok((reaction.energy.clone(), reaction.cross_section.clone()));
        }

        self.synthesise(mt, temperature)
    }

    /// Apply a sum rule to synthesise `mt` from whichever of its children
    /// are present, recursing through the same rule for children that are
    /// themselves absent but synthesisable (spec §4.1); never synthesises a
    /// parent from a request for one of its children
    fn synthesise(&self, mt: Mt, temperature: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let children = sum_rule_children(mt, self.fissionable)
            .ok_or_else(|| Error::not_found("MT", mt, &format!("{:?}", self.reaction_mts())))?;

        let present: Vec<(Vec<f64>, Vec<f64>)> =
            children.iter().filter_map(|&c| self.cross_section_at(c, temperature).ok()).collect();

        if present.is_empty() {
            return Err(Error::NotFound(format!(
                "MT {mt} is not tabulated for {} and none of its sum-rule children {:?} are present",
                self.id, children
            )));
        }

        let energy_slices: Vec<&[f64]> = present.iter().map(|(e, _)| e.as_slice()).collect();
        let grid = merge_sorted_unique(&energy_slices);
        let xs: Vec<f64> = grid
            .iter()
            .map(|&e| present.iter().map(|(en, x)| nucdata_core::interpolate_xs(en, x, e)).sum())
            .collect();

        Ok((grid, xs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(mt: Mt, energy: &[f64], xs: &[f64]) -> Reaction {
        Reaction { mt, energy: energy.to_vec(), cross_section: xs.to_vec(), threshold_idx: None }
    }

    fn stub() -> Nuclide {
        let mut table = BTreeMap::new();
        table.insert(4, reaction(4, &[1.0, 2.0], &[1.0, 1.0]));
        table.insert(102, reaction(102, &[1.0, 3.0], &[2.0, 2.0]));

        let mut reactions = BTreeMap::new();
        reactions.insert("294".to_string(), table);

        Nuclide::new(
            "Li".into(),
            "Lithium".into(),
            "Li6".into(),
            3,
            6,
            3,
            Some(6.015),
            vec!["294".to_string()],
            reactions,
        )
    }

    #[test]
    fn direct_lookup_matches_tabulated_data() {
        let n = stub();
        let (e, xs) = n.microscopic_cross_section(102, None).unwrap();
        assert_eq!(e, vec![1.0, 3.0]);
        assert_eq!(xs, vec![2.0, 2.0]);
    }

    #[test]
    fn synthesises_mt3_from_present_children() {
        let n = stub();
        let (grid, xs) = n.microscopic_cross_section(3, None).unwrap();
        assert_eq!(grid, vec![1.0, 2.0, 3.0]);
        // MT4 interpolated + MT102 interpolated, summed
        assert_eq!(xs[0], 1.0 + 2.0);
    }

    #[test]
    fn tabulated_mt_is_returned_verbatim_not_resynthesised() {
        let n = stub();
        // MT 4 is directly tabulated and also a sum-rule parent (of 51..=91);
        // a direct hit must win over synthesis.
        let (e, xs) = n.microscopic_cross_section(4, None).unwrap();
        assert_eq!(e, vec![1.0, 2.0]);
        assert_eq!(xs, vec![1.0, 1.0]);
    }

    #[test]
    fn single_loaded_temperature_is_implicit() {
        let n = stub();
        assert!(n.microscopic_cross_section(102, None).is_ok());
    }

    #[test]
    fn unresolvable_mt_is_not_found() {
        let n = stub();
        assert!(n.microscopic_cross_section(999, None).is_err());
    }

    #[test]
    fn reaction_mts_is_sorted_union() {
        let n = stub();
        assert_eq!(n.reaction_mts(), vec![4, 102]);
    }
}
