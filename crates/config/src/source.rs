//! Source descriptor parsing: local path, absolute URL, or keyword template

use nucdata_core::Error;

/// A resolved source descriptor for a nuclide's cross section data
///
/// Built from the raw string stored in the [`crate::Config`] registry by
/// [`SourceDescriptor::parse`]. Keyword expansion is deliberately deferred
/// to [`SourceDescriptor::resolve_url`] rather than happening at parse time,
/// so that an unrecognised keyword fails at lookup time, not at set time
/// (spec §6: "Unknown keywords fail ... at lookup time, not at set time").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// A local filesystem path
    Path(String),
    /// An absolute URL
    Url(String),
    /// A keyword that expands to a URL template, e.g. `"tendl-21"`
    Keyword(String),
}

/// `(keyword, url template with a single "{nuclide}" placeholder)`
///
/// The keyword→template map is closed and bundled, per spec §6.
const KEYWORD_TEMPLATES: &[(&str, &str)] = &[
    ("tendl-21", "https://tendl.web.psi.ch/tendl_2021/neutron_file/{nuclide}/lib/endf/{nuclide}.json"),
    ("fendl-3.2c", "https://www-nds.iaea.org/fendl/data/neutron/{nuclide}-fendl32c.json"),
];

impl SourceDescriptor {
    /// Parse a raw config value into a descriptor
    ///
    /// A value is a local path if it contains a path separator or ends with
    /// a recognised file suffix; an absolute URL if it starts with a scheme;
    /// otherwise it is treated as a keyword (validated only when expanded).
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SourceDescriptor::Url(value.to_string())
        } else if value.contains('/')
            || value.contains('\\')
            || value.ends_with(".json")
            || value.ends_with(".endf")
        {
            SourceDescriptor::Path(value.to_string())
        } else {
            SourceDescriptor::Keyword(value.to_string())
        }
    }

    /// Resolve to a concrete fetchable location: a local path, or a URL
    /// (expanding a keyword template if needed)
    pub fn resolve(&self, nuclide_id: &str) -> nucdata_core::Result<ResolvedSource> {
        match self {
            SourceDescriptor::Path(path) => Ok(ResolvedSource::Path(path.clone())),
            SourceDescriptor::Url(url) => Ok(ResolvedSource::Url(url.clone())),
            SourceDescriptor::Keyword(keyword) => {
                let template = KEYWORD_TEMPLATES
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
                    .map(|(_, template)| *template)
                    .ok_or_else(|| {
                        Error::Config(format!("\"{keyword}\" is not a recognised cross section keyword"))
                    })?;
                Ok(ResolvedSource::Url(template.replace("{nuclide}", nuclide_id)))
            }
        }
    }

    /// A stable string used as part of the nuclide cache key
    pub fn canonical(&self) -> String {
        match self {
            SourceDescriptor::Path(p) => format!("path:{p}"),
            SourceDescriptor::Url(u) => format!("url:{u}"),
            SourceDescriptor::Keyword(k) => format!("keyword:{k}"),
        }
    }
}

/// A source descriptor fully resolved to a concrete fetchable location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// A local filesystem path
    Path(String),
    /// A concrete URL (keyword templates already expanded)
    Url(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_local_paths() {
        assert_eq!(SourceDescriptor::parse("tests/Li6.json"), SourceDescriptor::Path("tests/Li6.json".into()));
        assert_eq!(SourceDescriptor::parse("Li6.json"), SourceDescriptor::Path("Li6.json".into()));
    }

    #[test]
    fn recognises_urls() {
        assert!(matches!(SourceDescriptor::parse("https://example.com/a.json"), SourceDescriptor::Url(_)));
    }

    #[test]
    fn recognises_keywords() {
        assert_eq!(SourceDescriptor::parse("tendl-21"), SourceDescriptor::Keyword("tendl-21".into()));
    }

    #[test]
    fn expands_known_keyword() {
        let resolved = SourceDescriptor::Keyword("tendl-21".into()).resolve("Li6").unwrap();
        match resolved {
            ResolvedSource::Url(url) => assert!(url.contains("Li6")),
            _ => panic!("expected a URL"),
        }
    }

    #[test]
    fn unknown_keyword_fails_at_resolve_not_parse() {
        let descriptor = SourceDescriptor::parse("not-a-real-keyword");
        assert!(matches!(descriptor, SourceDescriptor::Keyword(_)));
        assert!(descriptor.resolve("Li6").is_err());
    }
}
