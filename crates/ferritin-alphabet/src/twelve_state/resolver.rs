use super::model::VIRTUAL_CENTER;
use ferritin_core::{BackboneGeometry, Vec3};

/// Compute one virtual center per residue, repairing missing CB atoms first.
///
/// A CB that is NaN is replaced in `cb` by the reconstruction from CA, N and C; CB
/// entries that are present are left untouched. Returns the number of repaired
/// residues.
pub fn resolve_virtual_centers<G: BackboneGeometry>(
    geometry: &G,
    ca: &[Vec3],
    n: &[Vec3],
    c: &[Vec3],
    cb: &mut [Vec3],
    virtual_centers: &mut [Vec3],
) -> usize {
    let mut repaired = 0;
    for (i, center) in virtual_centers.iter_mut().enumerate() {
        if cb[i].is_nan() {
            cb[i] = geometry.approximate_cb(&ca[i], &n[i], &c[i]);
            repaired += 1;
        }
        *center = geometry.virtual_center(&ca[i], &cb[i], &n[i], &VIRTUAL_CENTER);
    }
    repaired
}
