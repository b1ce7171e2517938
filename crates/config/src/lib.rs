//! Process-wide registry mapping nuclide id to a cross section data source
//!
//! A source descriptor is one of a local filesystem path, an absolute URL,
//! or a keyword that expands to a URL template at lookup time (spec §4.3).

mod registry;
mod source;

#[doc(inline)]
pub use registry::{Config, CrossSectionsInput};

#[doc(inline)]
pub use source::{ResolvedSource, SourceDescriptor};
