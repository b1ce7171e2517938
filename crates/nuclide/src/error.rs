//! Result and Error types for `nucdata-nuclide`

pub use nucdata_core::Error;

/// Type alias for `Result<T, nucdata_core::Error>`
pub type Result<T> = nucdata_core::Result<T>;

/// Convert a `minreq` failure into the shared [`Error::Source`] kind
pub(crate) fn source_err(context: &str, err: minreq::Error) -> Error {
    Error::Source(format!("{context}: {err}"))
}

/// Convert a `serde_json` failure into the shared [`Error::Decode`] kind
pub(crate) fn decode_err(context: &str, err: serde_json::Error) -> Error {
    Error::Decode(format!("{context}: {err}"))
}
