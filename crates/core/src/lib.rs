//! Shared error taxonomy and small extension traits for `nucdata` crates
//!
//! Every other crate in the workspace depends on this one for its
//! [`Error`]/[`Result`] pair, so that a caller driving a transport loop only
//! has to match on a single set of error kinds regardless of which crate
//! raised them.

mod error;
mod grid;
mod interp;
mod option_ext;
mod string_ext;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use grid::{is_close, merge_sorted_unique, GRID_DEDUP_RTOL};

#[doc(inline)]
pub use interp::interpolate_xs;

#[doc(inline)]
pub use option_ext::OptionExt;

#[doc(inline)]
pub use string_ext::StringExt;
