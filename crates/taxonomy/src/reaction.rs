//! MT identifier and canonical name lookup

use nucdata_core::Error;

/// An ENDF-6 reaction identifier
pub type Mt = u32;

/// A reaction requested either by its MT number or by name
///
/// This is the tagged variant the public API boundary collapses dynamic
/// argument-kind dispatch into (Design Note 1): any place the original
/// interface accepted "an int or a string", this crate accepts a
/// [`ReactionId`] and resolves it to a concrete [`Mt`] exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReactionId {
    /// A bare MT number, e.g. `102`
    Mt(Mt),
    /// A canonical or aliased name, e.g. `"fission"`, `"(n,gamma)"`
    Name(String),
}

impl ReactionId {
    /// Resolve to a concrete MT number, looking up names in the taxonomy
    pub fn resolve(&self) -> nucdata_core::Result<Mt> {
        match self {
            ReactionId::Mt(mt) => Ok(*mt),
            ReactionId::Name(name) => mt_of(name),
        }
    }
}

impl From<Mt> for ReactionId {
    fn from(mt: Mt) -> Self {
        ReactionId::Mt(mt)
    }
}

impl From<&str> for ReactionId {
    fn from(name: &str) -> Self {
        ReactionId::Name(name.to_string())
    }
}

impl From<String> for ReactionId {
    fn from(name: String) -> Self {
        ReactionId::Name(name)
    }
}

/// `(mt, canonical name, aliases...)` — the fixed taxonomy table
///
/// The canonical name is what [`name_of`] returns; any of the aliases (plus
/// the canonical name itself) resolve back to `mt` through [`mt_of`].
const TABLE: &[(Mt, &str, &[&str])] = &[
    (1, "total", &[]),
    (2, "elastic", &["(n,elastic)"]),
    (3, "nonelastic", &[]),
    (4, "inelastic", &["inelastic-sum"]),
    (16, "(n,2n)", &[]),
    (17, "(n,3n)", &[]),
    (18, "fission", &["(n,fission)"]),
    (19, "(n,f)", &[]),
    (20, "(n,nf)", &[]),
    (21, "(n,2nf)", &[]),
    (22, "(n,na)", &[]),
    (23, "(n,n3a)", &[]),
    (24, "(n,2na)", &[]),
    (25, "(n,3na)", &[]),
    (27, "absorption", &[]),
    (28, "(n,np)", &[]),
    (29, "(n,n2a)", &[]),
    (30, "(n,2n2a)", &[]),
    (32, "(n,nd)", &[]),
    (33, "(n,nt)", &[]),
    (34, "(n,nhe3)", &[]),
    (35, "(n,nd2a)", &[]),
    (36, "(n,nt2a)", &[]),
    (37, "(n,4n)", &[]),
    (38, "(n,3nf)", &[]),
    (41, "(n,2np)", &[]),
    (42, "(n,3np)", &[]),
    (44, "(n,n2p)", &[]),
    (45, "(n,npa)", &[]),
    (51, "(n,n1)", &[]),
    (91, "(n,nc)", &["continuum inelastic"]),
    (101, "disappearance", &[]),
    (102, "(n,gamma)", &["(n,g)"]),
    (103, "(n,p)", &[]),
    (104, "(n,d)", &[]),
    (105, "(n,t)", &[]),
    (106, "(n,3he)", &[]),
    (107, "(n,a)", &["(n,alpha)"]),
    (108, "(n,2a)", &[]),
    (109, "(n,3a)", &[]),
    (111, "(n,2p)", &[]),
    (112, "(n,pa)", &[]),
    (113, "(n,t2a)", &[]),
    (114, "(n,d2a)", &[]),
    (115, "(n,pd)", &[]),
    (116, "(n,pt)", &[]),
    (117, "(n,da)", &[]),
    (203, "(n,xp)", &[]),
    (204, "(n,xd)", &[]),
    (205, "(n,xt)", &[]),
    (206, "(n,xhe3)", &[]),
    (207, "(n,xa)", &[]),
    (301, "heating", &[]),
    (444, "damage", &[]),
];

/// Discrete-level inelastic MTs occupy a contiguous block, 51..=90
const DISCRETE_LEVEL_INELASTIC: std::ops::RangeInclusive<Mt> = 51..=90;

/// Resolve a reaction name (canonical or alias) to its MT number
///
/// Also accepts the discrete-level inelastic range (`51..=90`) even though
/// only `51` has an explicit table entry, since the rest follow the same
/// `"(n,n{level})"` naming convention and are rarely referenced by name.
///
/// ```rust
/// # use nucdata_taxonomy::mt_of;
/// assert_eq!(mt_of("fission").unwrap(), 18);
/// assert_eq!(mt_of("(n,gamma)").unwrap(), 102);
/// assert_eq!(mt_of("(n,g)").unwrap(), 102);
/// assert!(mt_of("not-a-reaction").is_err());
/// ```
pub fn mt_of(name: &str) -> nucdata_core::Result<Mt> {
    let needle = name.to_lowercase();
    for (mt, canonical, aliases) in TABLE {
        if canonical.eq_ignore_ascii_case(&needle) || aliases.iter().any(|a| a.eq_ignore_ascii_case(&needle)) {
            return Ok(*mt);
        }
    }
    Err(Error::NotFound(format!(
        "reaction name \"{name}\" is not a recognised MT identifier or alias"
    )))
}

/// Resolve an MT number to its canonical name
///
/// ```rust
/// # use nucdata_taxonomy::name_of;
/// assert_eq!(name_of(18).unwrap(), "fission");
/// assert_eq!(name_of(102).unwrap(), "(n,gamma)");
/// ```
pub fn name_of(mt: Mt) -> nucdata_core::Result<&'static str> {
    if let Some((_, canonical, _)) = TABLE.iter().find(|(m, _, _)| *m == mt) {
        return Ok(canonical);
    }
    if DISCRETE_LEVEL_INELASTIC.contains(&mt) {
        return Ok("(n,n{level})");
    }
    Err(Error::NotFound(format!(
        "MT {mt} is not a recognised reaction identifier"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_names() {
        for (mt, canonical, _) in TABLE {
            assert_eq!(mt_of(canonical).unwrap(), *mt);
            assert_eq!(name_of(*mt).unwrap(), *canonical);
        }
    }

    #[test]
    fn aliases_resolve_to_same_mt() {
        assert_eq!(mt_of("(n,alpha)").unwrap(), mt_of("(n,a)").unwrap());
        assert_eq!(mt_of("(n,g)").unwrap(), 102);
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert!(mt_of("bogus").is_err());
    }

    #[test]
    fn unknown_mt_is_not_found() {
        assert!(name_of(999_999).is_err());
    }
}
