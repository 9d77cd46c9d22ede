//! Twelve-state structural alphabet.
//!
//! Each interior residue is paired with the residue whose CA lies closest to its
//! virtual side-chain center. The signed, log-compressed sequence separation to that
//! partner and the partner distance form a 2D feature that a fixed linear layer maps
//! onto one of [`STATE_COUNT`] states.
//!
//! Pipeline, in call order:
//! 1. [`resolve_virtual_centers`]: repair missing CB atoms, compute virtual centers
//! 2. [`BackboneGeometry::residue_mask`](ferritin_core::BackboneGeometry::residue_mask)
//! 3. [`find_partners`]
//! 4. [`extract_features`]
//! 5. [`classify_states`]
//!
//! A residue that becomes invalid at any step stays invalid and is reported as
//! [`INVALID_STATE`].
mod buffers;
mod classifier;
mod encoder;
mod features;
mod model;
mod partners;
mod resolver;

pub use buffers::EncoderBuffers;
pub use classifier::{classify_states, predict_state};
pub use encoder::TwelveStateEncoder;
pub use features::{extract_features, residue_feature};
pub use model::{Feature, LinearModel, FEATURE_COUNT, INVALID_STATE, STATE_COUNT, VIRTUAL_CENTER};
pub use partners::find_partners;
pub use resolver::resolve_virtual_centers;
