use ferritin_core::{BackboneGeometry, Vec3};

/// Pair every valid interior residue with its nearest valid interior neighbour.
///
/// The distance is measured from the virtual center of residue `i` to the CA of
/// candidate `j`, which makes it asymmetric: `i -> j` and `j -> i` generally differ.
/// The first and last residue are neither sources nor candidates. On equal distances
/// the lower index wins.
///
/// A residue without any candidate keeps `None` at distance +inf and is cleared in
/// `mask`. Residues that are already invalid are skipped and left untouched.
pub fn find_partners<G: BackboneGeometry>(
    geometry: &G,
    ca: &[Vec3],
    virtual_centers: &[Vec3],
    mask: &mut [bool],
    partner_idx: &mut [Option<usize>],
    partner_distances: &mut [f64],
) {
    let len = ca.len();
    if len < 2 {
        return;
    }
    let interior = 1..len - 1;

    for i in interior.clone() {
        if !mask[i] {
            continue;
        }

        let mut min_distance = f64::INFINITY;
        let mut partner = None;
        for j in interior.clone() {
            if i != j && mask[j] {
                let dist = geometry.distance(&virtual_centers[i], &ca[j]);
                if dist < min_distance {
                    min_distance = dist;
                    partner = Some(j);
                }
            }
        }
        partner_distances[i] = min_distance;
        partner_idx[i] = partner;

        if partner.is_none() {
            log::trace!("residue {i} has no partner, masking");
            mask[i] = false;
        }
    }
}
