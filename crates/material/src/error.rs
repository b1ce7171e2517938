//! Result and Error types for `nucdata-material`

pub use nucdata_core::Error;

/// Type alias for `Result<T, nucdata_core::Error>`
pub type Result<T> = nucdata_core::Result<T>;
