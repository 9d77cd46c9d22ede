use super::model::Feature;

/// Feature of residue `i` paired with residue `j` at `distance`:
/// `[sign(j - i) * ln(|j - i| + 1), distance]`.
pub fn residue_feature(i: usize, j: usize, distance: f64) -> Feature {
    let separation = j as f64 - i as f64;
    [(separation.abs() + 1.0).ln().copysign(separation), distance]
}

/// Build features for interior residues whose partner is valid.
///
/// Residues that are invalid or whose partner is invalid are cleared in `mask`. The
/// first and last residue are always cleared.
pub fn extract_features(
    partner_idx: &[Option<usize>],
    partner_distances: &[f64],
    mask: &mut [bool],
    features: &mut [Feature],
) {
    let len = mask.len();
    if len == 0 {
        return;
    }

    for i in 1..len - 1 {
        match partner_idx[i] {
            Some(j) if mask[i] && mask[j] => {
                features[i] = residue_feature(i, j, partner_distances[i]);
            }
            _ => mask[i] = false,
        }
    }

    mask[0] = false;
    mask[len - 1] = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_feature() {
        let forward = residue_feature(2, 3, 9.5);
        assert_eq!(forward, [2f64.ln(), 9.5]);

        let backward = residue_feature(3, 2, 9.5);
        assert_eq!(backward, [-(2f64.ln()), 9.5]);

        let far = residue_feature(10, 2, 4.0);
        assert_eq!(far[0], -(9f64.ln()));
    }

    #[test]
    fn test_extract_features() {
        let partners = [None, Some(3), Some(1), Some(1), None];
        let distances = [f64::INFINITY, 5.0, 6.0, 7.0, f64::INFINITY];
        let mut mask = [true; 5];
        let mut features = [[0.0; 2]; 5];

        extract_features(&partners, &distances, &mut mask, &mut features);

        assert_eq!(mask, [false, true, true, true, false]);
        assert_eq!(features[1], [3f64.ln(), 5.0]);
        assert_eq!(features[2], [-(2f64.ln()), 6.0]);
        assert_eq!(features[3], [-(3f64.ln()), 7.0]);
        // boundary features are never written
        assert_eq!(features[0], [0.0, 0.0]);
        assert_eq!(features[4], [0.0, 0.0]);
    }

    #[test]
    fn test_invalid_partner_masks_residue() {
        let partners = [None, Some(2), Some(3), Some(2), None];
        let distances = [f64::INFINITY, 5.0, 6.0, 7.0, f64::INFINITY];
        let mut mask = [true, true, false, true, true];
        let mut features = [[0.0; 2]; 5];

        extract_features(&partners, &distances, &mut mask, &mut features);

        assert_eq!(mask, [false, false, false, false, false]);
        assert_eq!(features, [[0.0; 2]; 5]);
    }

    #[test]
    fn test_partner_may_be_boundary() {
        // the boundary residue is valid until the very end, so it works as a partner
        let partners = [None, Some(0), Some(4), None, None];
        let distances = [f64::INFINITY, 5.0, 6.0, f64::INFINITY, f64::INFINITY];
        let mut mask = [true, true, true, false, true];
        let mut features = [[0.0; 2]; 5];

        extract_features(&partners, &distances, &mut mask, &mut features);

        assert_eq!(mask, [false, true, true, false, false]);
        assert_eq!(features[1], [-(2f64.ln()), 5.0]);
        assert_eq!(features[2], [3f64.ln(), 6.0]);
    }

    #[test]
    fn test_short_chains() {
        let mut mask: [bool; 0] = [];
        extract_features(&[], &[], &mut mask, &mut []);

        let mut mask = [true];
        let mut features = [[0.0; 2]];
        extract_features(&[None], &[f64::INFINITY], &mut mask, &mut features);
        assert_eq!(mask, [false]);

        let mut mask = [true, true];
        let mut features = [[0.0; 2]; 2];
        extract_features(&[None, None], &[f64::INFINITY; 2], &mut mask, &mut features);
        assert_eq!(mask, [false, false]);
    }
}
