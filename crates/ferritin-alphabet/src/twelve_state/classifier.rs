use super::model::{Feature, LinearModel, INVALID_STATE, STATE_COUNT};

/// Argmax over the model's logits. The lowest state wins ties.
///
/// If no logit compares greater than -inf (all NaN) the result is [`INVALID_STATE`].
pub fn predict_state(model: &LinearModel, feature: &Feature) -> u8 {
    let mut max_logit = f64::NEG_INFINITY;
    let mut max_state = INVALID_STATE;
    for state in 0..STATE_COUNT {
        let logit = model.logit(state, feature);
        if logit > max_logit {
            max_logit = logit;
            max_state = state as u8;
        }
    }
    max_state
}

/// Classify every residue; residues cleared in `mask` get [`INVALID_STATE`].
pub fn classify_states(model: &LinearModel, features: &[Feature], mask: &[bool], states: &mut [u8]) {
    for (i, state) in states.iter_mut().enumerate() {
        *state = if mask[i] {
            predict_state(model, &features[i])
        } else {
            INVALID_STATE
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twelve_state::FEATURE_COUNT;

    #[test]
    fn test_origin_picks_largest_bias() {
        // bias[4] = 27.19 is the largest
        assert_eq!(predict_state(LinearModel::pretrained(), &[0.0, 0.0]), 4);
    }

    #[test]
    fn test_hand_computed_states() {
        let model = LinearModel::pretrained();
        // one residue back at sqrt(2): logits peak at state 8 (24.40 vs 23.33 for state 4)
        assert_eq!(predict_state(model, &[-(2f64.ln()), 2f64.sqrt()]), 8);
        // one residue ahead at sqrt(2): state 4 (23.22 vs 20.26 for state 8)
        assert_eq!(predict_state(model, &[2f64.ln(), 2f64.sqrt()]), 4);
        // far partners ahead favour the large positive weights of state 0
        assert_eq!(predict_state(model, &[5.0, 0.0]), 0);
        // and far partners behind favour state 11
        assert_eq!(predict_state(model, &[-5.0, 0.0]), 11);
    }

    #[test]
    fn test_ties_pick_lowest_state() {
        let weights = [[0.0; FEATURE_COUNT]; STATE_COUNT];
        let mut bias = [0.0; STATE_COUNT];
        bias[3] = 1.0;
        bias[7] = 1.0;
        let model = LinearModel::new(weights, bias);
        assert_eq!(predict_state(&model, &[1.0, 1.0]), 3);

        let flat = LinearModel::new(weights, [0.0; STATE_COUNT]);
        assert_eq!(predict_state(&flat, &[1.0, 1.0]), 0);
    }

    #[test]
    fn test_nan_feature_is_invalid() {
        let model = LinearModel::pretrained();
        assert_eq!(predict_state(model, &[f64::NAN, 1.0]), INVALID_STATE);
    }

    #[test]
    fn test_classify_states_respects_mask() {
        let model = LinearModel::pretrained();
        let features = [[0.0, 0.0], [5.0, 0.0], [0.0, 0.0], [-5.0, 0.0], [-5.0, 0.0]];
        let mask = [false, true, true, true, false];
        let mut states = [0u8; 5];

        classify_states(model, &features, &mask, &mut states);

        assert_eq!(states, [INVALID_STATE, 0, 4, 11, INVALID_STATE]);
    }
}
