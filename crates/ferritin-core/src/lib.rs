//! # ferritin-core
//!
//! Backbone geometry for structural alphabets.
//!
//! __ferritin-core__ provides:
//! * A small 3D vector type, [`Vec3`], with the NaN sentinel used for missing atoms
//! * The geometric capabilities an alphabet encoder consumes, bundled as the
//!   [`BackboneGeometry`] trait, with [`IdealGeometry`] as the default strategy
//! * Per-chain backbone extraction from `pdbtbx` structures via [`ChainBackbone`]
//!
mod backbone;
mod geometry;

pub use self::backbone::{BackboneAtom, ChainBackbone};
pub use self::geometry::{BackboneGeometry, IdealGeometry, Vec3, VirtualCenterParams};
