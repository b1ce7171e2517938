//! The process-wide `Config` registry

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// A value accepted by [`Config::set_cross_sections`]
///
/// Re-expresses the original "dict or keyword string" dynamic dispatch as a
/// tagged variant (Design Note 1): there is no ill-typed third case to
/// reject at runtime, so the `Error::Type` kind from spec §7 has no
/// occurrence at this particular boundary.
#[derive(Debug, Clone)]
pub enum CrossSectionsInput {
    /// Per-nuclide source values, keyed by nuclide id
    Map(HashMap<String, String>),
    /// A single keyword or path used as the default for any nuclide
    Keyword(String),
}

impl From<HashMap<String, String>> for CrossSectionsInput {
    fn from(map: HashMap<String, String>) -> Self {
        CrossSectionsInput::Map(map)
    }
}

impl From<&str> for CrossSectionsInput {
    fn from(keyword: &str) -> Self {
        CrossSectionsInput::Keyword(keyword.to_string())
    }
}

impl From<String> for CrossSectionsInput {
    fn from(keyword: String) -> Self {
        CrossSectionsInput::Keyword(keyword)
    }
}

#[derive(Debug, Default)]
struct State {
    per_nuclide: HashMap<String, String>,
    global_default: Option<String>,
}

fn state() -> &'static Mutex<State> {
    static STATE: OnceLock<Mutex<State>> = OnceLock::new();
    STATE.get_or_init(|| Mutex::new(State::default()))
}

/// Process-wide mapping from nuclide id to a cross section data source
///
/// All methods operate on a single process-wide singleton, initialised on
/// first use and guarded by a mutex on writes (Design Note 2). Reads copy
/// out an owned value rather than holding the lock open.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config;

impl Config {
    /// Set cross section sources for every nuclide in a map, or set a single
    /// global default keyword/path for any nuclide not otherwise configured
    ///
    /// ```rust
    /// # use nucdata_config::Config;
    /// # use std::collections::HashMap;
    /// let mut sources = HashMap::new();
    /// sources.insert("Li6".to_string(), "tendl-21".to_string());
    /// Config::set_cross_sections(sources);
    /// assert_eq!(Config::get_cross_section("Li6"), Some("tendl-21".to_string()));
    /// # Config::clear();
    /// ```
    pub fn set_cross_sections(input: impl Into<CrossSectionsInput>) {
        let mut state = state().lock().expect("config mutex poisoned");
        match input.into() {
            CrossSectionsInput::Map(map) => state.per_nuclide.extend(map),
            CrossSectionsInput::Keyword(keyword) => state.global_default = Some(keyword),
        }
    }

    /// Set the source for a single nuclide id
    pub fn set_cross_section(id: &str, value: impl Into<String>) {
        let mut state = state().lock().expect("config mutex poisoned");
        state.per_nuclide.insert(id.to_string(), value.into());
    }

    /// Set a single global default keyword/path for any nuclide lookup
    pub fn set_global_cross_section(value: impl Into<String>) {
        let mut state = state().lock().expect("config mutex poisoned");
        state.global_default = Some(value.into());
    }

    /// Get the configured source for a nuclide id, falling back to the
    /// global default if no per-nuclide entry exists
    pub fn get_cross_section(id: &str) -> Option<String> {
        let state = state().lock().expect("config mutex poisoned");
        state.per_nuclide.get(id).cloned().or_else(|| state.global_default.clone())
    }

    /// Snapshot of every explicitly-set per-nuclide source (not the global default)
    pub fn get_cross_sections() -> HashMap<String, String> {
        state().lock().expect("config mutex poisoned").per_nuclide.clone()
    }

    /// Clear every registered source, including the global default
    ///
    /// Intended for test isolation; production callers normally only ever
    /// add to the registry.
    pub fn clear() {
        let mut state = state().lock().expect("config mutex poisoned");
        state.per_nuclide.clear();
        state.global_default = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    // Config is process-wide global state; serialise the tests that touch it.
    static TEST_LOCK: StdMutex<()> = StdMutex::new(());

    #[test]
    fn global_keyword_applies_to_any_nuclide() {
        let _guard = TEST_LOCK.lock().unwrap();
        Config::clear();
        Config::set_cross_sections("tendl-21");
        assert_eq!(Config::get_cross_section("Fe56"), Some("tendl-21".to_string()));
        assert_eq!(Config::get_cross_section("Li6"), Some("tendl-21".to_string()));
        Config::clear();
    }

    #[test]
    fn per_nuclide_overrides_global_default() {
        let _guard = TEST_LOCK.lock().unwrap();
        Config::clear();
        Config::set_cross_sections("tendl-21");
        Config::set_cross_section("Li7", "tests/Li7.json");
        assert_eq!(Config::get_cross_section("Li7"), Some("tests/Li7.json".to_string()));
        assert_eq!(Config::get_cross_section("Li6"), Some("tendl-21".to_string()));
        Config::clear();
    }

    #[test]
    fn unset_nuclide_with_no_default_is_none() {
        let _guard = TEST_LOCK.lock().unwrap();
        Config::clear();
        assert_eq!(Config::get_cross_section("U238"), None);
    }
}
