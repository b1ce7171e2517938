//! Decoding the evaluated-data JSON schema (spec §6)
//!
//! An object with `element`, `atomic_symbol`, `atomic_number`, `mass_number`,
//! `neutron_number`, and a section keyed by temperature label. Each
//! temperature entry maps MT (integer or stringified integer) to an object
//! with `energy`/`cross_section` arrays and an optional `threshold_idx`.
//!
//! Historical sources nest the same per-temperature sections under
//! `incident_particle.neutron.<T>.<mt>` instead of at the top level; both
//! layouts are accepted.

use std::collections::BTreeMap;

use nucdata_taxonomy::Mt;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{decode_err, Error, Result};
use crate::reaction::Reaction;

const METADATA_KEYS: &[&str] = &[
    "element",
    "atomic_symbol",
    "atomic_number",
    "mass_number",
    "neutron_number",
    "atomic_mass",
];

#[derive(Deserialize)]
struct RawReaction {
    energy: Vec<f64>,
    cross_section: Vec<f64>,
    #[serde(default)]
    threshold_idx: Option<usize>,
}

/// A fully decoded source document, before the loader applies temperature
/// filtering and publishes it into the cache
pub struct DecodedNuclide {
    pub element: String,
    pub atomic_symbol: String,
    pub atomic_number: u32,
    pub mass_number: u32,
    pub neutron_number: u32,
    pub atomic_mass: Option<f64>,
    /// temperature label -> MT -> reaction table
    pub reactions: BTreeMap<String, BTreeMap<Mt, Reaction>>,
}

/// Decode a raw JSON document into a [`DecodedNuclide`]
///
/// `expected_id` is the nuclide id the caller requested (e.g. `"Li6"`); a
/// mismatch against the document's `atomic_symbol` is an id-mismatch
/// failure (spec §4.4), surfaced as [`Error::Decode`].
pub fn decode(raw: &str, expected_id: &str) -> Result<DecodedNuclide> {
    let doc: Value = serde_json::from_str(raw).map_err(|e| decode_err("invalid JSON", e))?;

    let element = field_str(&doc, "element")?.to_string();
    let atomic_symbol = field_str(&doc, "atomic_symbol")?.to_string();
    let atomic_number = field_u32(&doc, "atomic_number")?;
    let mass_number = field_u32(&doc, "mass_number")?;
    let neutron_number = field_u32(&doc, "neutron_number")?;
    let atomic_mass = doc.get("atomic_mass").and_then(Value::as_f64);

    if atomic_symbol != expected_id {
        return Err(Error::Decode(format!(
            "id mismatch: source describes \"{atomic_symbol}\" but \"{expected_id}\" was requested"
        )));
    }

    let reactions = if let Some(neutron) = doc.pointer("/incident_particle/neutron") {
        decode_temperature_sections(neutron)?
    } else {
        decode_flat_temperature_sections(&doc)?
    };

    Ok(DecodedNuclide {
        element,
        atomic_symbol,
        atomic_number,
        mass_number,
        neutron_number,
        atomic_mass,
        reactions,
    })
}

fn field_str<'a>(doc: &'a Value, key: &str) -> Result<&'a str> {
    doc.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Decode(format!("missing or non-string field \"{key}\"")))
}

fn field_u32(doc: &Value, key: &str) -> Result<u32> {
    doc.get(key)
        .and_then(Value::as_u64)
        .map(|v| v as u32)
        .ok_or_else(|| Error::Decode(format!("missing or non-integer field \"{key}\"")))
}

fn decode_flat_temperature_sections(doc: &Value) -> Result<BTreeMap<String, BTreeMap<Mt, Reaction>>> {
    let object = doc
        .as_object()
        .ok_or_else(|| Error::Decode("top-level document is not an object".to_string()))?;

    let mut out = BTreeMap::new();
    for (key, value) in object {
        if METADATA_KEYS.contains(&key.as_str()) {
            continue;
        }
        out.insert(key.clone(), decode_reaction_map(value)?);
    }
    Ok(out)
}

fn decode_temperature_sections(neutron: &Value) -> Result<BTreeMap<String, BTreeMap<Mt, Reaction>>> {
    let object = neutron
        .as_object()
        .ok_or_else(|| Error::Decode("incident_particle.neutron is not an object".to_string()))?;

    let mut out = BTreeMap::new();
    for (temperature, value) in object {
        out.insert(temperature.clone(), decode_reaction_map(value)?);
    }
    Ok(out)
}

fn decode_reaction_map(value: &Value) -> Result<BTreeMap<Mt, Reaction>> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::Decode("temperature section is not an object".to_string()))?;

    let mut reactions = BTreeMap::new();
    for (mt_key, raw_value) in object {
        let mt: Mt = mt_key
            .parse()
            .map_err(|_| Error::Decode(format!("\"{mt_key}\" is not a valid MT identifier")))?;
        let raw: RawReaction = serde_json::from_value(raw_value.clone())
            .map_err(|e| decode_err(&format!("MT {mt}"), e))?;

        if raw.energy.len() != raw.cross_section.len() {
            return Err(Error::Decode(format!(
                "MT {mt}: energy and cross_section arrays differ in length ({} vs {})",
                raw.energy.len(),
                raw.cross_section.len()
            )));
        }

        reactions.insert(
            mt,
            Reaction {
                mt,
                energy: raw.energy,
                cross_section: raw.cross_section,
                threshold_idx: raw.threshold_idx,
            },
        );
    }
    Ok(reactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_DOC: &str = r#"{
        "element": "Lithium",
        "atomic_symbol": "Li6",
        "atomic_number": 3,
        "mass_number": 6,
        "neutron_number": 3,
        "294": {
            "2": {"energy": [1.0, 2.0], "cross_section": [10.0, 5.0]},
            "102": {"energy": [1.0, 2.0], "cross_section": [1.0, 0.5], "threshold_idx": 0}
        }
    }"#;

    const NESTED_DOC: &str = r#"{
        "element": "Lithium",
        "atomic_symbol": "Li6",
        "atomic_number": 3,
        "mass_number": 6,
        "neutron_number": 3,
        "incident_particle": {
            "neutron": {
                "294": {
                    "2": {"energy": [1.0, 2.0], "cross_section": [10.0, 5.0]}
                }
            }
        }
    }"#;

    #[test]
    fn decodes_flat_layout() {
        let decoded = decode(FLAT_DOC, "Li6").unwrap();
        assert_eq!(decoded.atomic_number, 3);
        assert_eq!(decoded.reactions["294"].len(), 2);
        assert_eq!(decoded.reactions["294"][&2].cross_section, vec![10.0, 5.0]);
    }

    #[test]
    fn decodes_nested_layout() {
        let decoded = decode(NESTED_DOC, "Li6").unwrap();
        assert_eq!(decoded.reactions["294"].len(), 1);
    }

    #[test]
    fn id_mismatch_is_an_error() {
        let err = decode(FLAT_DOC, "Li7").unwrap_err().to_string();
        assert!(err.contains("id mismatch"));
    }

    #[test]
    fn mismatched_array_lengths_fail() {
        let bad = r#"{
            "element": "Lithium", "atomic_symbol": "Li6", "atomic_number": 3,
            "mass_number": 6, "neutron_number": 3,
            "294": {"2": {"energy": [1.0, 2.0], "cross_section": [1.0]}}
        }"#;
        assert!(decode(bad, "Li6").is_err());
    }
}
