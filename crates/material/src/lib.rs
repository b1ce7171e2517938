//! Material composition, derived grids/cross-sections, and sampling kernels (spec §4.6-§4.8)
//!
//! [`Material`] aggregates nuclides loaded through [`nucdata_nuclide`] into
//! the quantities a Monte-Carlo transport driver needs: atoms-per-cc, a
//! unified energy grid, microscopic/macroscopic cross sections, mean free
//! path, and the sampling kernels. [`Materials`] batches nuclide loading
//! across several `Material`s.

mod density;
mod error;
mod material;
mod materials;
mod rng;

#[doc(inline)]
pub use density::DensityUnits;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use material::{MacroscopicXs, Material, TotalXs};

#[doc(inline)]
pub use materials::Materials;

#[doc(inline)]
pub use rng::Rng;
