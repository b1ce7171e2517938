//! The natural-abundance element table

use nucdata_core::Error;

/// A naturally occurring isotope and its atom-fraction abundance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isotope {
    /// Mass number A
    pub mass_number: u32,
    /// Natural atom-fraction abundance, summing to ~1.0 across an element's isotopes
    pub abundance: f64,
}

struct ElementEntry {
    symbol: &'static str,
    name: &'static str,
    z: u32,
    isotopes: &'static [(u32, f64)],
}

/// `(symbol, name, Z, &[(mass_number, abundance)])`
///
/// IUPAC standard natural-abundance values. Covers the elements most common
/// in structural and shielding materials; not exhaustive across the periodic
/// table.
const TABLE: &[ElementEntry] = &[
    e("H", "hydrogen", 1, &[(1, 0.999_885), (2, 0.000_115)]),
    e("He", "helium", 2, &[(3, 0.000_001_34), (4, 0.999_998_66)]),
    e("Li", "lithium", 3, &[(6, 0.075_89), (7, 0.924_11)]),
    e("Be", "beryllium", 4, &[(9, 1.0)]),
    e("B", "boron", 5, &[(10, 0.199), (11, 0.801)]),
    e("C", "carbon", 6, &[(12, 0.9893), (13, 0.0107)]),
    e("N", "nitrogen", 7, &[(14, 0.996_36), (15, 0.003_64)]),
    e("O", "oxygen", 8, &[(16, 0.997_57), (17, 0.000_38), (18, 0.002_05)]),
    e("F", "fluorine", 9, &[(19, 1.0)]),
    e("Ne", "neon", 10, &[(20, 0.9048), (21, 0.0027), (22, 0.0925)]),
    e("Na", "sodium", 11, &[(23, 1.0)]),
    e("Mg", "magnesium", 12, &[(24, 0.7899), (25, 0.1000), (26, 0.1101)]),
    e("Al", "aluminium", 13, &[(27, 1.0)]),
    e("Si", "silicon", 14, &[(28, 0.92223), (29, 0.04685), (30, 0.03092)]),
    e("P", "phosphorus", 15, &[(31, 1.0)]),
    e("S", "sulfur", 16, &[(32, 0.9499), (33, 0.0075), (34, 0.0425), (36, 0.0001)]),
    e("Cl", "chlorine", 17, &[(35, 0.7576), (37, 0.2424)]),
    e("Ar", "argon", 18, &[(36, 0.003_336), (38, 0.000_629), (40, 0.996_035)]),
    e("K", "potassium", 19, &[(39, 0.932_581), (40, 0.000_117), (41, 0.067_302)]),
    e(
        "Ca",
        "calcium",
        20,
        &[(40, 0.96941), (42, 0.00647), (43, 0.00135), (44, 0.02086), (46, 0.00004), (48, 0.00187)],
    ),
    e("Ti", "titanium", 22, &[(46, 0.0825), (47, 0.0744), (48, 0.7372), (49, 0.0541), (50, 0.0518)]),
    e("V", "vanadium", 23, &[(50, 0.0025), (51, 0.9975)]),
    e("Cr", "chromium", 24, &[(50, 0.04345), (52, 0.83789), (53, 0.09501), (54, 0.02365)]),
    e("Mn", "manganese", 25, &[(55, 1.0)]),
    e("Fe", "iron", 26, &[(54, 0.05845), (56, 0.91754), (57, 0.02119), (58, 0.00282)]),
    e("Co", "cobalt", 27, &[(59, 1.0)]),
    e(
        "Ni",
        "nickel",
        28,
        &[(58, 0.68077), (60, 0.26223), (61, 0.011_399), (62, 0.036_346), (64, 0.009_255)],
    ),
    e("Cu", "copper", 29, &[(63, 0.6915), (65, 0.3085)]),
    e("Zn", "zinc", 30, &[(64, 0.4917), (66, 0.2773), (67, 0.0404), (68, 0.1845), (70, 0.0061)]),
    e("Zr", "zirconium", 40, &[(90, 0.5145), (91, 0.1122), (92, 0.1715), (94, 0.1738), (96, 0.0280)]),
    e("Nb", "niobium", 41, &[(93, 1.0)]),
    e(
        "Mo",
        "molybdenum",
        42,
        &[(92, 0.1453), (94, 0.0915), (95, 0.1584), (96, 0.1667), (97, 0.0960), (98, 0.2439), (100, 0.0982)],
    ),
    e("Ag", "silver", 47, &[(107, 0.51839), (109, 0.48161)]),
    e(
        "Cd",
        "cadmium",
        48,
        &[(106, 0.0125), (108, 0.0089), (110, 0.1249), (111, 0.1280), (112, 0.2413), (113, 0.1222), (114, 0.2873), (116, 0.0749)],
    ),
    e(
        "Sn",
        "tin",
        50,
        &[
            (112, 0.0097), (114, 0.0066), (115, 0.0034), (116, 0.1454), (117, 0.0768),
            (118, 0.2422), (119, 0.0859), (120, 0.3258), (122, 0.0463), (124, 0.0579),
        ],
    ),
    e("W", "tungsten", 74, &[(180, 0.0012), (182, 0.2650), (183, 0.1431), (184, 0.3064), (186, 0.2843)]),
    e("Pb", "lead", 82, &[(204, 0.014), (206, 0.241), (207, 0.221), (208, 0.524)]),
    e("Bi", "bismuth", 83, &[(209, 1.0)]),
    e("Th", "thorium", 90, &[(232, 1.0)]),
    e("U", "uranium", 92, &[(234, 0.000_054), (235, 0.007_204), (238, 0.992_742)]),
];

/// Helper so the table above reads as plain data, not constructor calls
const fn e(symbol: &'static str, name: &'static str, z: u32, isotopes: &'static [(u32, f64)]) -> ElementEntry {
    ElementEntry { symbol, name, z, isotopes }
}

fn find(symbol_or_name: &str) -> nucdata_core::Result<&'static ElementEntry> {
    let needle = symbol_or_name.trim().to_lowercase();
    TABLE
        .iter()
        .find(|entry| entry.symbol.to_lowercase() == needle || entry.name == needle)
        .ok_or_else(|| Error::Value(format!("\"{symbol_or_name}\" is not a recognised element (not found)")))
}

/// Atomic number Z for an element symbol or name (case-insensitive)
///
/// ```rust
/// # use nucdata_elements::atomic_number;
/// assert_eq!(atomic_number("li").unwrap(), 3);
/// assert_eq!(atomic_number("Lithium").unwrap(), 3);
/// assert!(atomic_number("Xx").is_err());
/// ```
pub fn atomic_number(symbol_or_name: &str) -> nucdata_core::Result<u32> {
    Ok(find(symbol_or_name)?.z)
}

/// The canonical element name for a symbol or name
pub fn element_name(symbol_or_name: &str) -> nucdata_core::Result<&'static str> {
    Ok(find(symbol_or_name)?.name)
}

/// The canonical element symbol for a symbol or name
pub fn element_symbol(symbol_or_name: &str) -> nucdata_core::Result<&'static str> {
    Ok(find(symbol_or_name)?.symbol)
}

/// Natural isotopes and their abundances for an element symbol or name
///
/// ```rust
/// # use nucdata_elements::isotopes;
/// let li = isotopes("Li").unwrap();
/// assert_eq!(li.len(), 2);
/// let total: f64 = li.iter().map(|i| i.abundance).sum();
/// assert!((total - 1.0).abs() < 1e-4);
/// ```
pub fn isotopes(symbol_or_name: &str) -> nucdata_core::Result<Vec<Isotope>> {
    Ok(find(symbol_or_name)?
        .isotopes
        .iter()
        .map(|&(mass_number, abundance)| Isotope { mass_number, abundance })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lithium_abundances_match_iupac() {
        let li = isotopes("Li").unwrap();
        assert!((li[0].abundance - 0.07589).abs() < 1e-5);
        assert!((li[1].abundance - 0.92411).abs() < 1e-5);
    }

    #[test]
    fn unknown_element_fails_with_not_found_substring() {
        let err = atomic_number("Xx").unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn lookup_is_case_insensitive_and_name_or_symbol() {
        assert_eq!(atomic_number("FE").unwrap(), 26);
        assert_eq!(atomic_number("iron").unwrap(), 26);
    }

    #[test]
    fn every_element_sums_to_one() {
        for entry in TABLE {
            let total: f64 = entry.isotopes.iter().map(|(_, a)| a).sum();
            assert!((total - 1.0).abs() < 1e-3, "{} sums to {total}", entry.symbol);
        }
    }
}
