//! A modular toolkit for ingesting evaluated nuclear data and computing
//! neutron cross sections for Monte-Carlo particle transport
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Flatten the workspace crates
#[doc(inline)]
pub use nucdata_config as config;

#[doc(inline)]
pub use nucdata_core as core;

#[doc(inline)]
pub use nucdata_elements as elements;

#[doc(inline)]
pub use nucdata_material as material;

#[doc(inline)]
pub use nucdata_nuclide as nuclide;

#[doc(inline)]
pub use nucdata_taxonomy as taxonomy;

/// Flush the process-wide nuclide cache (not the on-disk download cache)
///
/// Equivalent to [`nucdata_nuclide::clear_nuclide_cache`], re-exported at
/// the crate root per the public API surface in spec §6.
pub fn clear_nuclide_cache() {
    nucdata_nuclide::clear_nuclide_cache()
}
