//! Reusable scratch storage for [`TwelveStateEncoder`](super::TwelveStateEncoder).
//!
//! Encoding many structures of varying length should not allocate per call, so the
//! buffers only ever grow. The backing vectors may be longer than the current chain;
//! everything past [`EncoderBuffers::len`] is stale data from an earlier, longer call
//! and is never exposed. Every accessor returns slices of exactly `len` elements.
use super::model::{Feature, FEATURE_COUNT, INVALID_STATE};
use ferritin_core::Vec3;

#[derive(Debug, Default)]
pub struct EncoderBuffers {
    len: usize,
    virtual_centers: Vec<Vec3>,
    partner_idx: Vec<Option<usize>>,
    partner_distances: Vec<f64>,
    features: Vec<Feature>,
    mask: Vec<bool>,
    states: Vec<u8>,
}

/// Mutable views of the scratch arrays for the current call, split so that each
/// pipeline stage can borrow the arrays it writes independently.
pub(crate) struct Scratch<'a> {
    pub virtual_centers: &'a mut [Vec3],
    pub partner_idx: &'a mut [Option<usize>],
    pub partner_distances: &'a mut [f64],
    pub features: &'a mut [Feature],
    pub mask: &'a mut [bool],
    pub states: &'a mut [u8],
}

impl EncoderBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the latest [`reset`](Self::reset); the valid range of every array.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of residues the buffers can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.states.len()
    }

    /// Grow every array to at least `len` elements. Never shrinks.
    pub fn ensure_capacity(&mut self, len: usize) {
        if len <= self.capacity() {
            return;
        }
        self.virtual_centers.resize(len, Vec3::NAN);
        self.partner_idx.resize(len, None);
        self.partner_distances.resize(len, f64::INFINITY);
        self.features.resize(len, [0.0; FEATURE_COUNT]);
        self.mask.resize(len, false);
        self.states.resize(len, INVALID_STATE);
    }

    /// Prepare the first `len` elements for a new call.
    ///
    /// Partners are cleared to "none" at distance +inf, residues start out invalid
    /// and classified as [`INVALID_STATE`].
    pub fn reset(&mut self, len: usize) {
        self.ensure_capacity(len);
        self.len = len;
        self.virtual_centers[..len].fill(Vec3::NAN);
        self.partner_idx[..len].fill(None);
        self.partner_distances[..len].fill(f64::INFINITY);
        self.features[..len].fill([0.0; FEATURE_COUNT]);
        self.mask[..len].fill(false);
        self.states[..len].fill(INVALID_STATE);
    }

    pub(crate) fn scratch(&mut self) -> Scratch<'_> {
        let len = self.len;
        Scratch {
            virtual_centers: &mut self.virtual_centers[..len],
            partner_idx: &mut self.partner_idx[..len],
            partner_distances: &mut self.partner_distances[..len],
            features: &mut self.features[..len],
            mask: &mut self.mask[..len],
            states: &mut self.states[..len],
        }
    }

    pub fn virtual_centers(&self) -> &[Vec3] {
        &self.virtual_centers[..self.len]
    }

    pub fn partner_indices(&self) -> &[Option<usize>] {
        &self.partner_idx[..self.len]
    }

    pub fn partner_distances(&self) -> &[f64] {
        &self.partner_distances[..self.len]
    }

    pub fn features(&self) -> &[Feature] {
        &self.features[..self.len]
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask[..self.len]
    }

    pub fn states(&self) -> &[u8] {
        &self.states[..self.len]
    }
}
