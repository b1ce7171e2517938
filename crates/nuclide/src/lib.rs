//! Nuclide reaction data model, JSON decoding, and the lazy loading/caching layer
//!
//! [`Nuclide`] is the in-memory, per-temperature reaction-table data model
//! (spec §3, §4.5). [`load`]/[`clear_nuclide_cache`] are the lazy loading
//! and caching layer (spec §4.4): nuclides are materialised on demand from
//! the [`nucdata_config::Config`] source registry and shared read-only
//! through a process-wide cache keyed by (id, source, temperature-set).
//! [`Element`] is the natural-abundance-weighted aggregate view over a
//! collection of isotopes.

mod cache;
mod element;
mod error;
mod fetch;
mod nuclide;
mod reaction;
mod schema;

#[doc(inline)]
pub use cache::{clear_nuclide_cache, load};

#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use nuclide::Nuclide;

#[doc(inline)]
pub use reaction::Reaction;

#[doc(inline)]
pub use schema::{decode, DecodedNuclide};
