//! Material composition and derived quantities (spec §4.6)

use std::collections::{BTreeMap, BTreeSet};

use nucdata_config::{Config, CrossSectionsInput};
use nucdata_core::{interpolate_xs, merge_sorted_unique, OptionExt};
use nucdata_taxonomy::{sum_rule_children, Mt};

use crate::density::DensityUnits;
use crate::error::{Error, Result};
use crate::rng::Rng;

/// Avogadro's number, mol⁻¹ (2019 SI exact value)
const AVOGADRO: f64 = 6.022_140_76e23;

/// MTs checked for sum-rule synthesisability when augmenting a material's
/// reaction MT set (spec §4.1's five aggregate MTs)
const AGGREGATE_MTS: &[Mt] = &[1, 3, 4, 27, 101];

/// The result of [`Material::calculate_macroscopic_xs_neutron`]
///
/// Re-expresses the original `by_nuclide` boolean-dispatch return shape
/// as a tagged variant (Design Note 1): the two shapes are different enough
/// (keyed by MT vs. keyed by (nuclide id, MT)) that a single map type would
/// need the caller to know which one they asked for anyway.
#[derive(Debug, Clone)]
pub enum MacroscopicXs {
    /// Indexed by MT, summed over every nuclide in the composition
    ByReaction(BTreeMap<Mt, Vec<f64>>),
    /// Indexed by (nuclide id, MT), no cross-nuclide summation
    ByNuclide(BTreeMap<(String, Mt), Vec<f64>>),
}

/// The result of [`Material::calculate_total_xs_neutron`]
#[derive(Debug, Clone)]
pub struct TotalXs {
    /// Macroscopic cross section per MT, same as `calculate_macroscopic_xs_neutron(None, false)`
    pub by_reaction: BTreeMap<Mt, Vec<f64>>,
    /// Σ_total(E) on the unified grid, from the MT 1 sum rule applied at the macroscopic layer
    pub total: Vec<f64>,
}

/// A user-defined material: composition, density, and the caches derived from them
///
/// Nuclide fractions are atom fractions (spec §9 Open Question, resolved:
/// this core supports atom fractions only). The unified energy grid and
/// macroscopic cross section caches are invalidated on any composition,
/// density, or temperature mutation (spec §4.6 state machine); they are
/// recomputed lazily the next time a query needs them.
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub(crate) nuclides: BTreeMap<String, f64>,
    density: Option<f64>,
    density_units: DensityUnits,
    volume: Option<f64>,
    pub(crate) temperature: String,
    grid: Option<Vec<f64>>,
    macro_xs_all: Option<BTreeMap<Mt, Vec<f64>>>,
}

impl Material {
    /// An empty material at the default temperature label `"294"`
    pub fn new() -> Self {
        Material { temperature: "294".to_string(), ..Default::default() }
    }

    // ---- composition -----------------------------------------------------

    /// Insert or replace a nuclide's fraction
    pub fn add_nuclide(&mut self, id: impl Into<String>, fraction: f64) -> &mut Self {
        self.nuclides.insert(id.into(), fraction);
        self.invalidate_caches();
        self
    }

    /// Expand a natural element into its isotopes, each weighted by `fraction * abundance`
    pub fn add_element(&mut self, symbol_or_name: &str, fraction: f64) -> Result<&mut Self> {
        let symbol = nucdata_elements::element_symbol(symbol_or_name)?;
        let isotopes = nucdata_elements::isotopes(symbol_or_name)?;
        for isotope in isotopes {
            self.nuclides.insert(format!("{symbol}{}", isotope.mass_number), fraction * isotope.abundance);
        }
        self.invalidate_caches();
        Ok(self)
    }

    /// Nuclide id -> fraction, in alphabetical id order
    pub fn nuclides(&self) -> Vec<(String, f64)> {
        self.nuclides.iter().map(|(id, f)| (id.clone(), *f)).collect()
    }

    /// Nuclide ids in the composition, alphabetical
    pub fn get_nuclide_names(&self) -> Vec<String> {
        self.nuclides.keys().cloned().collect()
    }

    /// Register cross section sources (a per-nuclide map, or a single
    /// keyword/path default) and eagerly load every composition nuclide at
    /// this material's temperature
    ///
    /// Accepts either a `HashMap<String, String>` keyed by nuclide id or a
    /// keyword/path string applied as the default for the whole composition
    /// (spec §6 `Material.read_nuclides_from_json`), registering it with the
    /// process-wide [`Config`] before loading.
    pub fn read_nuclides_from_json(&mut self, input: impl Into<CrossSectionsInput>) -> Result<&mut Self> {
        Config::set_cross_sections(input);
        for id in self.nuclides.keys() {
            log::debug!(
                "loading {id} for material at temperature {} (density {})",
                self.temperature,
                self.density.display()
            );
            nucdata_nuclide::load(id, None, Some(std::slice::from_ref(&self.temperature)))?;
        }
        self.invalidate_caches();
        Ok(self)
    }

    /// Set density and its unit tag; units must be one of `{g/cm3, atom/b-cm, kg/m3}`
    pub fn set_density(&mut self, units: &str, value: f64) -> Result<&mut Self> {
        self.density_units = DensityUnits::parse(units)?;
        self.density = Some(value);
        self.invalidate_caches();
        Ok(self)
    }

    /// The declared density value, exactly as set (spec §9 Open Question, resolved)
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    /// The declared density units, exactly as set
    pub fn density_units(&self) -> DensityUnits {
        self.density_units
    }

    /// Set the volume; rejects non-positive values
    pub fn set_volume(&mut self, volume: f64) -> Result<&mut Self> {
        if volume <= 0.0 {
            return Err(Error::Value("Volume must be positive".to_string()));
        }
        self.volume = Some(volume);
        Ok(self)
    }

    /// The declared volume, if set
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// The temperature label used to select which loaded reaction table to read
    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    /// Set the temperature label, invalidating the grid and macroscopic xs caches
    pub fn set_temperature(&mut self, temperature: impl Into<String>) -> &mut Self {
        self.temperature = temperature.into();
        self.invalidate_caches();
        self
    }

    fn invalidate_caches(&mut self) {
        self.grid = None;
        self.macro_xs_all = None;
    }

    // ---- atoms per cc ------------------------------------------------------

    /// Per-nuclide atom density, atoms/cm³
    ///
    /// Returns an empty map if density is unset. For `atom/b-cm`, the
    /// declared value is already a number density and the mass-weighted
    /// division is bypassed entirely (spec §4.6, §12): `N_tot = ρ · 1e24`,
    /// distributed by the (normalised) stored fractions directly.
    /// Otherwise `Nᵢ = N_A · ρ · (fᵢ/Mᵢ) / Σⱼ(fⱼ/Mⱼ)`, where `Mᵢ` is
    /// approximated from the nuclide id's trailing mass-number digits
    /// (falling back to 1.0 when the id carries none — spec §4.6's
    /// documented Mᵢ ≈ 1 quirk).
    pub fn get_atoms_per_cc(&self) -> BTreeMap<String, f64> {
        let Some(density) = self.density else {
            return BTreeMap::new();
        };

        if self.density_units == DensityUnits::AtomPerBarnCm {
            let n_tot = density * 1e24;
            let total_fraction: f64 = self.nuclides.values().sum();
            if total_fraction <= 0.0 {
                return BTreeMap::new();
            }
            return self.nuclides.iter().map(|(id, f)| (id.clone(), n_tot * f / total_fraction)).collect();
        }

        let rho_g_cm3 = match self.density_units {
            DensityUnits::GramPerCm3 => density,
            DensityUnits::KgPerM3 => density * 1e-3,
            DensityUnits::AtomPerBarnCm => unreachable!("handled above"),
        };

        let weights: Vec<(String, f64)> =
            self.nuclides.iter().map(|(id, f)| (id.clone(), f / approx_atomic_mass(id))).collect();
        let total_weight: f64 = weights.iter().map(|(_, w)| w).sum();
        if total_weight <= 0.0 {
            return BTreeMap::new();
        }

        weights.into_iter().map(|(id, w)| (id, AVOGADRO * rho_g_cm3 * w / total_weight)).collect()
    }

    // ---- unified energy grid ----------------------------------------------

    /// The sorted, deduplicated union of energy points across every loaded
    /// reaction of every composition nuclide at this material's temperature
    pub fn unified_energy_grid_neutron(&mut self) -> Result<&[f64]> {
        if self.grid.is_none() {
            let mut owned_grids: Vec<Vec<f64>> = Vec::new();
            for id in self.nuclides.keys() {
                let nuclide = nucdata_nuclide::load(id, None, Some(std::slice::from_ref(&self.temperature)))?;
                if let Some(table) = nuclide.reactions.get(&self.temperature) {
                    owned_grids.extend(table.values().map(|r| r.energy.clone()));
                }
            }
            let slices: Vec<&[f64]> = owned_grids.iter().map(Vec::as_slice).collect();
            self.grid = Some(merge_sorted_unique(&slices));
        }
        Ok(self.grid.as_ref().expect("just computed"))
    }

    /// Sorted union of MT numbers across the composition, augmented with
    /// whichever aggregate MTs (1, 3, 4, 27, 101) have at least one present
    /// child somewhere in that union (spec §4.6 `reaction_mts`)
    pub fn reaction_mts(&self) -> Result<Vec<Mt>> {
        let mut mts: BTreeSet<Mt> = BTreeSet::new();
        let mut any_fissionable = false;
        for id in self.nuclides.keys() {
            let nuclide = nucdata_nuclide::load(id, None, Some(std::slice::from_ref(&self.temperature)))?;
            mts.extend(nuclide.reaction_mts());
            any_fissionable |= nuclide.fissionable;
        }
        for &candidate in AGGREGATE_MTS {
            if let Some(children) = sum_rule_children(candidate, any_fissionable) {
                if children.iter().any(|c| mts.contains(c)) {
                    mts.insert(candidate);
                }
            }
        }
        Ok(mts.into_iter().collect())
    }

    // ---- cross sections ----------------------------------------------------

    /// Per-nuclide, per-MT cross section arrays on the unified grid
    ///
    /// Defaults to the full reaction MT set (§4.6 `reaction_mts`) when
    /// `mt_filter` is `None`; otherwise only the requested MTs are produced,
    /// and only for nuclides that can supply them (directly or by synthesis).
    pub fn calculate_microscopic_xs_neutron(
        &mut self,
        mt_filter: Option<&[Mt]>,
    ) -> Result<BTreeMap<String, BTreeMap<Mt, Vec<f64>>>> {
        self.unified_energy_grid_neutron()?;
        let mts = self.working_mts(mt_filter)?;
        self.microscopic_table(&mts)
    }

    fn working_mts(&self, mt_filter: Option<&[Mt]>) -> Result<Vec<Mt>> {
        match mt_filter {
            Some(f) => Ok(f.to_vec()),
            None => self.reaction_mts(),
        }
    }

    fn microscopic_table(&self, mts: &[Mt]) -> Result<BTreeMap<String, BTreeMap<Mt, Vec<f64>>>> {
        let grid = self.grid.as_ref().expect("unified_energy_grid_neutron must run first");
        let mut out = BTreeMap::new();
        for id in self.nuclides.keys() {
            let nuclide = nucdata_nuclide::load(id, None, Some(std::slice::from_ref(&self.temperature)))?;
            let mut per_mt = BTreeMap::new();
            for &mt in mts {
                if let Ok((energy, xs)) = nuclide.microscopic_cross_section(mt, Some(&self.temperature)) {
                    let values = grid.iter().map(|&e| interpolate_xs(&energy, &xs, e)).collect();
                    per_mt.insert(mt, values);
                }
            }
            out.insert(id.clone(), per_mt);
        }
        Ok(out)
    }

    /// Macroscopic cross section, `Σᵢ Nᵢ · σᵢ,MT(E) · 1e-24`, on the unified grid
    ///
    /// Cached under the unfiltered, by-MT form (spec §4.6 "key 'all'") when
    /// `mt_filter` is `None` and `by_nuclide` is `false`.
    pub fn calculate_macroscopic_xs_neutron(
        &mut self,
        mt_filter: Option<&[Mt]>,
        by_nuclide: bool,
    ) -> Result<MacroscopicXs> {
        if mt_filter.is_none() && !by_nuclide {
            if let Some(cached) = &self.macro_xs_all {
                return Ok(MacroscopicXs::ByReaction(cached.clone()));
            }
        }

        self.unified_energy_grid_neutron()?;
        let grid_len = self.grid.as_ref().expect("just computed").len();
        let mts = self.working_mts(mt_filter)?;
        let atoms = self.get_atoms_per_cc();
        let micro = self.microscopic_table(&mts)?;

        if by_nuclide {
            let mut out = BTreeMap::new();
            for (id, per_mt) in &micro {
                let n = atoms.get(id).copied().unwrap_or(0.0);
                for (&mt, values) in per_mt {
                    out.insert((id.clone(), mt), values.iter().map(|&x| n * x * 1e-24).collect());
                }
            }
            return Ok(MacroscopicXs::ByNuclide(out));
        }

        let mut summed: BTreeMap<Mt, Vec<f64>> = BTreeMap::new();
        for (id, per_mt) in &micro {
            let n = atoms.get(id).copied().unwrap_or(0.0);
            for (&mt, values) in per_mt {
                let entry = summed.entry(mt).or_insert_with(|| vec![0.0; grid_len]);
                for (acc, &x) in entry.iter_mut().zip(values) {
                    *acc += n * x * 1e-24;
                }
            }
        }

        if mt_filter.is_none() {
            self.macro_xs_all = Some(summed.clone());
        }
        Ok(MacroscopicXs::ByReaction(summed))
    }

    /// The cached unfiltered, by-MT macroscopic cross section table, if
    /// [`Material::calculate_macroscopic_xs_neutron`] has been run since the
    /// last composition/density/temperature change (spec §6
    /// `Material.macroscopic_xs_neutron`)
    pub fn macroscopic_xs_neutron(&self) -> Option<&BTreeMap<Mt, Vec<f64>>> {
        self.macro_xs_all.as_ref()
    }

    /// The macroscopic table plus a `total` array, from the MT 1 sum rule
    /// (elastic + nonelastic, itself recursively synthesised) applied at the
    /// macroscopic layer
    pub fn calculate_total_xs_neutron(&mut self) -> Result<TotalXs> {
        let by_reaction = match self.calculate_macroscopic_xs_neutron(None, false)? {
            MacroscopicXs::ByReaction(m) => m,
            MacroscopicXs::ByNuclide(_) => unreachable!("by_nuclide was false"),
        };

        let total = by_reaction.get(&1).cloned().ok_or_else(|| {
            Error::NotFound(
                "no nuclide in this material carries enough data to synthesise MT 1 (total)".to_string(),
            )
        })?;

        Ok(TotalXs { by_reaction, total })
    }

    /// Σ_total(E), interpolated from the cached total cross section
    fn total_xs_at(&mut self, e: f64) -> Result<f64> {
        let grid = self.unified_energy_grid_neutron()?.to_vec();
        let total = self.calculate_total_xs_neutron()?.total;
        Ok(interpolate_xs(&grid, &total, e))
    }

    /// Mean free path at energy `E` (eV), in cm: `1 / Σ_total(E)`
    pub fn mean_free_path_neutron(&mut self, e: f64) -> Result<f64> {
        let sigma_total = self.total_xs_at(e)?;
        if sigma_total <= 0.0 {
            return Err(Error::NotFound(format!("no reactions at {e} eV (Σ_total = 0)")));
        }
        Ok(1.0 / sigma_total)
    }

    // ---- sampling ------------------------------------------------------------

    /// Sample a distance to collision at energy `E` (eV): `d = -ln(1 - U₁) / Σ_total(E)`
    pub fn sample_distance_to_collision(&mut self, e: f64, seed: u64) -> Result<f64> {
        let sigma_total = self.total_xs_at(e)?;
        if sigma_total <= 0.0 {
            return Err(Error::NotFound(format!("no reactions at {e} eV (Σ_total = 0)")));
        }
        let mut rng = Rng::seeded(seed);
        let u1 = rng.next_f64();
        Ok(-(1.0 - u1).ln() / sigma_total)
    }

    /// Sample which nuclide interacts at energy `E` (eV), from the discrete
    /// distribution `pᵢ = Nᵢ · σᵢ,total(E) / Σ_total(E)`
    pub fn sample_interacting_nuclide(&mut self, e: f64, seed: u64) -> Result<String> {
        let by_nuclide = match self.calculate_macroscopic_xs_neutron(Some(&[1]), true)? {
            MacroscopicXs::ByNuclide(m) => m,
            MacroscopicXs::ByReaction(_) => unreachable!("by_nuclide was true"),
        };
        let grid = self.grid.clone().expect("calculate_macroscopic_xs_neutron computed the grid");

        let mut sigma_total = 0.0;
        let mut per_nuclide: Vec<(String, f64)> = Vec::with_capacity(self.nuclides.len());
        for id in self.nuclides.keys() {
            let sigma = by_nuclide.get(&(id.clone(), 1)).map(|v| interpolate_xs(&grid, v, e)).unwrap_or(0.0);
            per_nuclide.push((id.clone(), sigma));
            sigma_total += sigma;
        }

        if sigma_total <= 0.0 {
            return Err(Error::NotFound(format!("no reactions at {e} eV (Σ_total = 0)")));
        }

        let mut rng = Rng::seeded(seed);
        let u1 = rng.next_f64();
        let mut cumulative = 0.0;
        for (id, sigma) in &per_nuclide {
            cumulative += sigma / sigma_total;
            if cumulative > u1 {
                return Ok(id.clone());
            }
        }
        Ok(per_nuclide.last().expect("composition is non-empty").0.clone())
    }
}

/// Approximate a nuclide's atomic mass from the trailing digits of its id
/// (e.g. `"Li6"` -> 6.0), falling back to 1.0 when the id carries none
///
/// This sidesteps needing a loaded [`nucdata_nuclide::Nuclide`] (with a real
/// `atomic_mass` field) just to weight atoms-per-cc, matching the reference
/// implementation's behaviour for nuclide ids it has no data source for at
/// all (spec §4.6's documented Mᵢ ≈ 1 fallback).
fn approx_atomic_mass(id: &str) -> f64 {
    let digits: String = id.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    digits.chars().rev().collect::<String>().parse::<f64>().unwrap_or(1.0).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_per_cc_empty_without_density() {
        let material = Material::new();
        assert!(material.get_atoms_per_cc().is_empty());
    }

    #[test]
    fn atoms_per_cc_li6_li7_equal_fractions() {
        let mut material = Material::new();
        material.add_nuclide("Li6", 0.5);
        material.add_nuclide("Li7", 0.5);
        material.set_density("g/cm3", 1.0).unwrap();

        let atoms = material.get_atoms_per_cc();
        assert_eq!(atoms.len(), 2);
        assert!((atoms["Li6"] - 3.24e23).abs() / 3.24e23 < 0.01);
        assert!((atoms["Li7"] - 2.78e23).abs() / 2.78e23 < 0.01);
    }

    #[test]
    fn atoms_per_cc_falls_back_to_mass_one_for_unparseable_id() {
        let mut material = Material::new();
        material.add_nuclide("CustomNuclide", 1.0);
        material.set_density("g/cm3", 5.0).unwrap();

        let atoms = material.get_atoms_per_cc();
        assert_eq!(atoms.len(), 1);
        assert!(atoms["CustomNuclide"] > 0.0);
    }

    #[test]
    fn atoms_per_cc_doubling_density_doubles_every_nuclide() {
        let mut material = Material::new();
        material.add_nuclide("Li6", 0.5);
        material.add_nuclide("Li7", 0.5);
        material.set_density("g/cm3", 1.0).unwrap();
        let once = material.get_atoms_per_cc();

        material.set_density("g/cm3", 2.0).unwrap();
        let doubled = material.get_atoms_per_cc();

        for id in once.keys() {
            assert!((doubled[id] - 2.0 * once[id]).abs() / doubled[id] < 1e-9);
        }
    }

    #[test]
    fn atom_per_barn_cm_bypasses_mass_division() {
        let mut material = Material::new();
        material.add_nuclide("Li6", 1.0);
        material.set_density("atom/b-cm", 0.05).unwrap();

        let atoms = material.get_atoms_per_cc();
        assert!((atoms["Li6"] - 0.05 * 1e24).abs() / (0.05 * 1e24) < 1e-9);
    }

    #[test]
    fn set_volume_rejects_non_positive() {
        let mut material = Material::new();
        let err = material.set_volume(0.0).unwrap_err().to_string();
        assert!(err.contains("Volume must be positive"));
        assert!(material.set_volume(-1.0).is_err());
        assert!(material.set_volume(1.0).is_ok());
    }

    #[test]
    fn default_temperature_is_294() {
        assert_eq!(Material::new().temperature(), "294");
    }

    #[test]
    fn nuclides_iterate_alphabetically() {
        let mut material = Material::new();
        material.add_nuclide("Li7", 0.5);
        material.add_nuclide("Li6", 0.5);
        let ids: Vec<String> = material.nuclides().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["Li6".to_string(), "Li7".to_string()]);
    }

    #[test]
    fn add_element_unknown_is_not_found() {
        let mut material = Material::new();
        let err = material.add_element("Unobtainium", 1.0).unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn approx_atomic_mass_reads_trailing_digits() {
        assert_eq!(approx_atomic_mass("Li6"), 6.0);
        assert_eq!(approx_atomic_mass("U238"), 238.0);
        assert_eq!(approx_atomic_mass("CustomNuclide"), 1.0);
    }

    // Config and the nuclide cache are process-wide; serialise the tests below.
    static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    const LI6_JSON: &str = r#"{
        "element": "Lithium",
        "atomic_symbol": "Li6",
        "atomic_number": 3,
        "mass_number": 6,
        "neutron_number": 3,
        "294": {"2": {"energy": [1.0, 2.0], "cross_section": [1.0, 1.0]}}
    }"#;

    fn write_temp_json(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("nucdata-material-test-{name}-{}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_nuclides_from_json_accepts_a_map_and_loads_eagerly() {
        let _guard = TEST_LOCK.lock().unwrap();
        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();

        let path = write_temp_json("map", LI6_JSON);
        let mut sources = std::collections::HashMap::new();
        sources.insert("Li6".to_string(), path.to_string_lossy().to_string());

        let mut material = Material::new();
        material.add_nuclide("Li6", 1.0);
        material.read_nuclides_from_json(sources).unwrap();

        assert_eq!(nucdata_config::Config::get_cross_section("Li6"), Some(path.to_string_lossy().to_string()));
        assert!(material.unified_energy_grid_neutron().is_ok());

        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn read_nuclides_from_json_accepts_a_keyword_default() {
        let _guard = TEST_LOCK.lock().unwrap();
        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();

        let path = write_temp_json("keyword", LI6_JSON);
        let mut material = Material::new();
        material.add_nuclide("Li6", 1.0);
        material.read_nuclides_from_json(path.to_string_lossy().to_string()).unwrap();

        assert_eq!(nucdata_config::Config::get_cross_section("Li6"), Some(path.to_string_lossy().to_string()));

        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn macroscopic_xs_neutron_is_none_until_computed_then_matches() {
        let _guard = TEST_LOCK.lock().unwrap();
        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();

        let path = write_temp_json("macro", LI6_JSON);
        let mut sources = std::collections::HashMap::new();
        sources.insert("Li6".to_string(), path.to_string_lossy().to_string());

        let mut material = Material::new();
        material.add_nuclide("Li6", 1.0);
        material.set_density("g/cm3", 1.0).unwrap();
        material.read_nuclides_from_json(sources).unwrap();

        assert!(material.macroscopic_xs_neutron().is_none());
        let computed = material.calculate_macroscopic_xs_neutron(None, false).unwrap();
        let computed = match computed {
            MacroscopicXs::ByReaction(m) => m,
            MacroscopicXs::ByNuclide(_) => unreachable!("by_nuclide was false"),
        };
        assert_eq!(material.macroscopic_xs_neutron(), Some(&computed));

        nucdata_config::Config::clear();
        nucdata_nuclide::clear_nuclide_cache();
        let _ = std::fs::remove_file(&path);
    }
}
