use super::features::FeaturePayload;
use super::scorer::Scorer;

/// Model-backed stand-in that always predicts the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer {
    value: f64,
}

impl FixedScorer {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Scorer for FixedScorer {
    fn final_score(&self, _features: &FeaturePayload, _heuristic: f64) -> f64 {
        self.value.clamp(0.0, 1.0)
    }

    fn is_model_backed(&self) -> bool {
        true
    }
}
