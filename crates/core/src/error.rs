//! The shared error taxonomy for all `nucdata-*` crates

/// Type alias for `Result<T, core::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type shared across the `nucdata` workspace
///
/// Every crate in the workspace surfaces failures through this single
/// taxonomy so that a caller driving a transport loop only ever has to match
/// on one set of kinds, regardless of whether the failure originated in
/// configuration, loading, or a material calculation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No source configured for a nuclide, or an unrecognised keyword
    #[error("config error: {0}")]
    Config(String),

    /// File not found, network failure, or non-2xx HTTP response
    #[error("failed to read cross section source: {0}")]
    Source(String),

    /// Malformed JSON or a schema mismatch
    #[error("failed to decode cross section data: {0}")]
    Decode(String),

    /// MT, temperature, or nuclide not present in the loaded data
    #[error("not found: {0}")]
    NotFound(String),

    /// Temperature omitted when more than one is loaded
    #[error("ambiguous temperature: {0}")]
    Ambiguous(String),

    /// Non-positive volume, unknown density units, unknown element, etc.
    #[error("invalid value: {0}")]
    Value(String),

    /// Wrong argument kind at a public boundary
    #[error("invalid argument type: {0}")]
    Type(String),

    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::NotFound`] that names what was requested and what
    /// was actually available, per the propagation policy in spec §7
    pub fn not_found(what: &str, requested: impl std::fmt::Display, available: &str) -> Self {
        Error::NotFound(format!("{what} \"{requested}\" not found (available: {available})"))
    }
}
