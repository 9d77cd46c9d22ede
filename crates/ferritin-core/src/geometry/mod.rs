//! Geometric capabilities consumed by structural-alphabet encoders.
//!
//! Encoders never reach for these functions directly; they are generic over a
//! [`BackboneGeometry`] strategy so that alternative reconstructions can be swapped in
//! without touching the encoding pipeline.
mod vec3;

pub use vec3::Vec3;

/// Ideal CA-CB bond length in Angstrom.
const DISTANCE_ALPHA_BETA: f64 = 1.5336;
const PI: f64 = 3.14159265359;

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Rodrigues rotation of `v` by `angle` (radians) around the unit axis `k`.
fn rotate(v: Vec3, k: Vec3, angle: f64) -> Vec3 {
    v * angle.cos() + k.cross(&v) * angle.sin() + (k * k.dot(&v)) * (1.0 - angle.cos())
}

/// Placement of a virtual side-chain center relative to CA.
///
/// `alpha` is the angle (degrees) between CA->CB and CA->center measured in the
/// CB/CA/N plane, `beta` the dihedral (degrees) around the CA->N axis and `d` the
/// scaling applied to the rotated CA->CB vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualCenterParams {
    pub alpha: f64,
    pub beta: f64,
    pub d: f64,
}

impl VirtualCenterParams {
    pub const fn new(alpha: f64, beta: f64, d: f64) -> Self {
        VirtualCenterParams { alpha, beta, d }
    }
}

/// Geometry an encoder needs from its collaborators.
///
/// `approximate_cb` and `virtual_center` must be pure; `residue_mask` and `distance`
/// come with the standard definitions used by [`IdealGeometry`].
pub trait BackboneGeometry {
    /// Reconstruct a CB position from idealized backbone geometry.
    fn approximate_cb(&self, ca: &Vec3, n: &Vec3, c: &Vec3) -> Vec3;

    /// Virtual interaction center of one residue.
    fn virtual_center(&self, ca: &Vec3, cb: &Vec3, n: &Vec3, params: &VirtualCenterParams)
        -> Vec3;

    /// Fill `mask` with per-residue validity. A residue is valid when its CA, N and C
    /// atoms are all present.
    fn residue_mask(&self, ca: &[Vec3], n: &[Vec3], c: &[Vec3], mask: &mut [bool]) {
        for (i, valid) in mask.iter_mut().enumerate() {
            *valid = !(ca[i].is_nan() || n[i].is_nan() || c[i].is_nan());
        }
    }

    fn distance(&self, a: &Vec3, b: &Vec3) -> f64 {
        a.distance_to(b)
    }
}

/// Default geometry: tetrahedral CB reconstruction and a two-step Rodrigues rotation
/// for the virtual center.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealGeometry;

impl BackboneGeometry for IdealGeometry {
    /// Assumes CA forms a regular tetrahedron with its four ligands.
    fn approximate_cb(&self, ca: &Vec3, n: &Vec3, c: &Vec3) -> Vec3 {
        let v1 = (*c - *ca).normalize();
        let v2 = (*n - *ca).normalize();

        let b1 = v2 + v1 * (1.0 / 3.0);
        let b2 = v1.cross(&b1);

        let u1 = b1.normalize();
        let u2 = b2.normalize();

        // direction CA -> CB
        let v4 = v1 * (-1.0 / 3.0)
            + (u1 * (-1.0 / 2.0) - u2 * (3f64.sqrt() / 2.0)) * (8f64.sqrt() / 3.0);

        *ca + v4 * DISTANCE_ALPHA_BETA
    }

    fn virtual_center(
        &self,
        ca: &Vec3,
        cb: &Vec3,
        n: &Vec3,
        params: &VirtualCenterParams,
    ) -> Vec3 {
        let alpha = radians(params.alpha);
        let beta = radians(params.beta);

        let v = *cb - *ca;

        // normal angle, axis perpendicular to CA->CB and CA->N
        let k = (*cb - *ca).cross(&(*n - *ca)).normalize();
        let v = rotate(v, k, alpha);

        // dihedral around CA->N
        let k = (*n - *ca).normalize();
        let v = rotate(v, k, beta);

        *ca + v * params.d
    }
}
