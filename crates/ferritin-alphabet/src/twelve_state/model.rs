//! Alphabet constants and the pretrained linear layer.
use ferritin_core::VirtualCenterParams;
use std::sync::OnceLock;

pub const STATE_COUNT: usize = 12;
pub const FEATURE_COUNT: usize = 2;

/// Reported for residues that cannot be classified. Also a regular state ("H").
pub const INVALID_STATE: u8 = 6;

/// Virtual center placement used for partner search.
pub const VIRTUAL_CENTER: VirtualCenterParams = VirtualCenterParams::new(322.0, 48.0, 6.84);

/// Signed log sequence separation, partner distance.
pub type Feature = [f64; FEATURE_COUNT];

#[rustfmt::skip]
const LAYER1_BIAS: [f64; STATE_COUNT] = [
    -22.109913,  -34.763283,  -12.11722,    5.844174,
     27.193422,    7.8374314,  -0.10719311,  2.1946049,
     26.863173,    0.23405483, -27.650888,  -13.840539,
];

#[rustfmt::skip]
const LAYER1_W: [[f64; FEATURE_COUNT]; STATE_COUNT] = [
    [ 11.980139,   -3.2107675  ],
    [ 10.814536,    0.6751775  ],
    [  5.8660164,   0.76846164 ],
    [  5.8301463,  -2.9750438  ],
    [ -0.08006129, -2.771098   ],
    [ -0.11654578,  0.9788566  ],
    [ -1.4215535,   1.9951683  ],
    [ -2.1661475,   1.795795   ],
    [ -2.9870105,  -3.2082853  ],
    [ -4.2153015,   1.4156913  ],
    [-11.160501,    1.2672309  ],
    [-12.911917,   -3.346186   ],
];

static PRETRAINED: OnceLock<LinearModel> = OnceLock::new();

/// Single linear layer, `logit = W * feature + bias`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: [[f64; FEATURE_COUNT]; STATE_COUNT],
    bias: [f64; STATE_COUNT],
}

impl LinearModel {
    pub fn new(weights: [[f64; FEATURE_COUNT]; STATE_COUNT], bias: [f64; STATE_COUNT]) -> Self {
        LinearModel { weights, bias }
    }

    /// The trained twelve-state layer, shared process-wide.
    pub fn pretrained() -> &'static LinearModel {
        PRETRAINED.get_or_init(|| LinearModel::new(LAYER1_W, LAYER1_BIAS))
    }

    pub fn weights(&self) -> &[[f64; FEATURE_COUNT]; STATE_COUNT] {
        &self.weights
    }

    pub fn bias(&self) -> &[f64; STATE_COUNT] {
        &self.bias
    }

    pub fn logit(&self, state: usize, feature: &Feature) -> f64 {
        let mut logit = self.bias[state];
        for (w, f) in self.weights[state].iter().zip(feature) {
            logit += w * f;
        }
        logit
    }

    pub fn logits(&self, feature: &Feature) -> [f64; STATE_COUNT] {
        std::array::from_fn(|state| self.logit(state, feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretrained_is_shared() {
        let a = LinearModel::pretrained();
        let b = LinearModel::pretrained();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.bias()[4], 27.193422);
        assert_eq!(a.weights()[11], [-12.911917, -3.346186]);
    }

    #[test]
    fn test_logit_at_origin_is_bias() {
        let model = LinearModel::pretrained();
        let logits = model.logits(&[0.0, 0.0]);
        assert_eq!(&logits, model.bias());
    }

    #[test]
    fn test_logit() {
        let model = LinearModel::pretrained();
        let logit = model.logit(0, &[1.0, 2.0]);
        let expected = -22.109913 + 11.980139 * 1.0 + -3.2107675 * 2.0;
        assert!((logit - expected).abs() < 1e-12);
    }
}
