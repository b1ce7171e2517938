//! The lazy loading / caching layer (spec §4.4)
//!
//! Nuclide values are shared read-only through this process-wide cache,
//! keyed by (id, canonicalised source). A *superset* cache entry — one
//! whose loaded temperatures are a superset of what's requested — satisfies
//! the request without refetching, which avoids redundant downloads across
//! overlapping requests from different materials (spec §4.7).

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, OnceLock};

use nucdata_config::{Config, SourceDescriptor};
use nucdata_core::{Error, StringExt};
use nucdata_elements as elements;

use crate::error::Result;
use crate::nuclide::Nuclide;
use crate::{fetch, schema};

type CacheKey = (String, String);

fn cache() -> &'static Mutex<HashMap<CacheKey, Vec<Arc<Nuclide>>>> {
    static CACHE: OnceLock<Mutex<HashMap<CacheKey, Vec<Arc<Nuclide>>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Load a nuclide, consulting (and populating) the process-wide cache
///
/// `source` overrides the [`Config`] registry entry for `id` when given;
/// pass `None` to use whatever `Config` has on file for `id`.
///
/// `temperatures`, when `Some`, restricts which temperatures are retained in
/// memory; every requested label must be present in the source's
/// `available_temperatures` or this fails. `None` retains every temperature
/// the source has.
pub fn load(id: &str, source: Option<&str>, temperatures: Option<&[String]>) -> Result<Arc<Nuclide>> {
    let raw_source = source
        .map(str::to_string)
        .or_else(|| Config::get_cross_section(id))
        .ok_or_else(|| Error::Config(format!("no cross section source configured for \"{id}\"")))?;

    let descriptor = SourceDescriptor::parse(&raw_source);
    let key: CacheKey = (id.to_string(), descriptor.canonical());

    let requested: Option<BTreeSet<String>> = temperatures.map(|t| t.iter().cloned().collect());

    if let Some(found) = find_superset(&key, requested.as_ref()) {
        return Ok(found);
    }

    let resolved = descriptor.resolve(id)?;
    let raw = fetch::fetch(&resolved)?;
    let decoded = schema::decode(&raw, id)?;

    let available_temperatures: Vec<String> = decoded.reactions.keys().cloned().collect();

    let keep: BTreeSet<String> = match &requested {
        Some(wanted) => {
            for t in wanted {
                if !available_temperatures.iter().any(|a| a == t) {
                    return Err(Error::not_found(
                        "temperature",
                        t,
                        &format!("{available_temperatures:?}"),
                    ));
                }
            }
            wanted.clone()
        }
        None => available_temperatures.iter().cloned().collect(),
    };

    let mut reactions = decoded.reactions;
    reactions.retain(|t, _| keep.contains(t));

    let element_symbol = elements::element_symbol(&decoded.element)
        .map(str::to_string)
        .unwrap_or_else(|_| decoded.element.clone());
    let element_name = elements::element_name(&decoded.element)
        .map(|name| name.capitalise())
        .unwrap_or_else(|_| decoded.element.clone());

    let nuclide = Arc::new(Nuclide::new(
        element_symbol,
        element_name,
        decoded.atomic_symbol,
        decoded.atomic_number,
        decoded.mass_number,
        decoded.neutron_number,
        decoded.atomic_mass,
        available_temperatures,
        reactions,
    ));

    cache().lock().expect("nuclide cache mutex poisoned").entry(key).or_default().push(nuclide.clone());

    Ok(nuclide)
}

/// Find an already-cached entry whose loaded temperatures are a superset of
/// `requested` (or any entry at all, if `requested` is `None`), preferring
/// the smallest qualifying superset
fn find_superset(key: &CacheKey, requested: Option<&BTreeSet<String>>) -> Option<Arc<Nuclide>> {
    let cache = cache().lock().expect("nuclide cache mutex poisoned");
    let entries = cache.get(key)?;

    let mut candidates: Vec<&Arc<Nuclide>> = entries
        .iter()
        .filter(|n| match requested {
            Some(wanted) => wanted.iter().all(|t| n.loaded_temperatures.iter().any(|l| l == t)),
            None => true,
        })
        .collect();

    candidates.sort_by_key(|n| n.loaded_temperatures.len());
    candidates.first().map(|n| (*n).clone())
}

/// Flush the in-memory nuclide cache (not the on-disk download cache)
pub fn clear_nuclide_cache() {
    cache().lock().expect("nuclide cache mutex poisoned").clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex as StdMutex;

    static TEST_LOCK: StdMutex<()> = StdMutex::new(());

    fn write_temp_json(contents: &str) -> tempfile_path::TempPath {
        tempfile_path::TempPath::with_contents(contents)
    }

    // Minimal inline temp-file helper so this crate doesn't need a dev-dependency
    // on a dedicated tempfile crate just for one cache test.
    mod tempfile_path {
        use std::path::{Path, PathBuf};

        pub struct TempPath(PathBuf);

        impl TempPath {
            pub fn with_contents(contents: &str) -> Self {
                let mut path = std::env::temp_dir();
                path.push(format!("nucdata-test-{}.json", std::process::id()));
                std::fs::write(&path, contents).unwrap();
                TempPath(path)
            }
        }

        impl AsRef<Path> for TempPath {
            fn as_ref(&self) -> &Path {
                &self.0
            }
        }

        impl Drop for TempPath {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
    }

    const LI6_JSON: &str = r#"{
        "element": "Lithium",
        "atomic_symbol": "Li6",
        "atomic_number": 3,
        "mass_number": 6,
        "neutron_number": 3,
        "294": {"2": {"energy": [1.0, 2.0], "cross_section": [1.0, 1.0]}},
        "300": {"2": {"energy": [1.0, 2.0], "cross_section": [1.1, 1.1]}}
    }"#;

    #[test]
    fn selective_temperature_loading() {
        let _guard = TEST_LOCK.lock().unwrap();
        clear_nuclide_cache();
        let path = write_temp_json(LI6_JSON);
        let source = path.as_ref().to_string_lossy().to_string();

        let nuclide = load("Li6", Some(&source), Some(&["300".to_string()])).unwrap();
        assert_eq!(nuclide.loaded_temperatures, vec!["300".to_string()]);
        assert_eq!(nuclide.available_temperatures.len(), 2);
        assert_eq!(nuclide.reactions.len(), 1);
        clear_nuclide_cache();
    }

    #[test]
    fn superset_entry_satisfies_subset_request() {
        let _guard = TEST_LOCK.lock().unwrap();
        clear_nuclide_cache();
        let path = write_temp_json(LI6_JSON);
        let source = path.as_ref().to_string_lossy().to_string();

        let full = load("Li6", Some(&source), None).unwrap();
        assert_eq!(full.loaded_temperatures.len(), 2);

        // requesting a subset should hit the cached superset, not refetch
        let subset = load("Li6", Some(&source), Some(&["294".to_string()])).unwrap();
        assert_eq!(subset.loaded_temperatures.len(), 2);
        assert!(Arc::ptr_eq(&full, &subset));
        clear_nuclide_cache();
    }

    #[test]
    fn requesting_unavailable_temperature_fails() {
        let _guard = TEST_LOCK.lock().unwrap();
        clear_nuclide_cache();
        let path = write_temp_json(LI6_JSON);
        let source = path.as_ref().to_string_lossy().to_string();

        assert!(load("Li6", Some(&source), Some(&["999".to_string()])).is_err());
        clear_nuclide_cache();
    }
}
