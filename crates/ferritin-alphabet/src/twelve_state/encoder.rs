use super::buffers::EncoderBuffers;
use super::classifier::classify_states;
use super::features::extract_features;
use super::model::{Feature, LinearModel};
use super::partners::find_partners;
use super::resolver::resolve_virtual_centers;
use ferritin_core::{BackboneGeometry, ChainBackbone, IdealGeometry, Vec3};

/// Backbone to twelve-state encoder.
///
/// The encoder owns its scratch buffers and reuses them across calls, so hold one
/// instance per thread when encoding many structures. The slice returned by
/// [`encode`](Self::encode) borrows those buffers and is only valid until the next
/// call.
///
/// ```ignore
/// let mut encoder = TwelveStateEncoder::new();
/// let states = encoder.encode(&ca, &n, &c, &mut cb);
/// assert_eq!(states.len(), ca.len());
/// ```
#[derive(Debug)]
pub struct TwelveStateEncoder<G: BackboneGeometry = IdealGeometry> {
    geometry: G,
    model: &'static LinearModel,
    buffers: EncoderBuffers,
}

impl TwelveStateEncoder {
    pub fn new() -> Self {
        Self::with_geometry(IdealGeometry)
    }
}

impl Default for TwelveStateEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: BackboneGeometry> TwelveStateEncoder<G> {
    pub fn with_geometry(geometry: G) -> Self {
        TwelveStateEncoder {
            geometry,
            model: LinearModel::pretrained(),
            buffers: EncoderBuffers::new(),
        }
    }

    /// Encode one chain.
    ///
    /// All four slices must have the same length. Missing CB atoms (NaN) are
    /// reconstructed and written back into `cb`. The result has one state per residue;
    /// the first and last residue, and every residue without a valid partner, are
    /// [`INVALID_STATE`](super::INVALID_STATE).
    pub fn encode(&mut self, ca: &[Vec3], n: &[Vec3], c: &[Vec3], cb: &mut [Vec3]) -> &[u8] {
        let len = ca.len();
        debug_assert_eq!(n.len(), len);
        debug_assert_eq!(c.len(), len);
        debug_assert_eq!(cb.len(), len);

        self.buffers.reset(len);
        let mut scratch = self.buffers.scratch();

        let repaired = resolve_virtual_centers(
            &self.geometry,
            ca,
            n,
            c,
            cb,
            scratch.virtual_centers,
        );
        self.geometry.residue_mask(ca, n, c, scratch.mask);
        find_partners(
            &self.geometry,
            ca,
            scratch.virtual_centers,
            scratch.mask,
            scratch.partner_idx,
            scratch.partner_distances,
        );
        extract_features(
            scratch.partner_idx,
            scratch.partner_distances,
            scratch.mask,
            scratch.features,
        );
        classify_states(self.model, scratch.features, scratch.mask, scratch.states);

        log::debug!(
            "encoded {} residues: {} classified, {} CB reconstructed",
            len,
            scratch.mask.iter().filter(|valid| **valid).count(),
            repaired
        );

        self.buffers.states()
    }

    /// Encode a chain extracted from a structure, repairing its CB atoms in place.
    pub fn encode_chain(&mut self, backbone: &mut ChainBackbone) -> &[u8] {
        let ChainBackbone { ca, n, c, cb, .. } = backbone;
        self.encode(ca, n, c, cb)
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Scratch buffers of the latest call.
    pub fn buffers(&self) -> &EncoderBuffers {
        &self.buffers
    }

    pub fn states(&self) -> &[u8] {
        self.buffers.states()
    }

    pub fn virtual_centers(&self) -> &[Vec3] {
        self.buffers.virtual_centers()
    }

    pub fn partner_indices(&self) -> &[Option<usize>] {
        self.buffers.partner_indices()
    }

    pub fn partner_distances(&self) -> &[f64] {
        self.buffers.partner_distances()
    }

    pub fn features(&self) -> &[Feature] {
        self.buffers.features()
    }

    /// Residues that received a classified state in the latest call. Tells a genuine
    /// state 6 apart from the invalid sentinel.
    pub fn mask(&self) -> &[bool] {
        self.buffers.mask()
    }
}
