use serde::Serialize;

use crate::constants::NEUTRAL_SCORE;
use crate::text::round_to;

/// Spec/reviews blend derived from what the request actually carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub spec: f64,
    pub reviews: f64,
    pub has_structured: bool,
    pub has_preference_targets: bool,
    pub includes_price: bool,
}

/// Blend weights as reported in a match explanation: normalized, 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplanationWeights {
    pub specs: f64,
    pub reviews: f64,
}

impl BlendWeights {
    pub fn derive(has_structured: bool, has_preference_targets: bool, includes_price: bool) -> Self {
        let (spec, reviews) = match (has_structured, has_preference_targets, includes_price) {
            (true, true, true) => (0.7, 0.3),
            (true, true, false) => (0.6, 0.4),
            (true, false, _) => (1.0, 0.0),
            (false, _, _) => (0.0, 1.0),
        };

        Self {
            spec,
            reviews,
            has_structured,
            has_preference_targets,
            includes_price,
        }
    }

    /// `spec + reviews`, or `1.0` when both are zero.
    pub fn total(&self) -> f64 {
        let total = self.spec + self.reviews;
        if total == 0.0 { 1.0 } else { total }
    }

    /// Spec-fit as it enters the blend: neutral when nothing structured was asked for.
    pub fn effective_spec_fit(&self, spec_fit: f64) -> f64 {
        if self.has_structured {
            spec_fit
        } else {
            NEUTRAL_SCORE
        }
    }

    pub fn heuristic(&self, effective_spec_fit: f64, opinion_sim: f64) -> f64 {
        (effective_spec_fit * self.spec + opinion_sim * self.reviews) / self.total()
    }

    pub fn normalized(&self) -> ExplanationWeights {
        let total = self.total();
        ExplanationWeights {
            specs: round_to(self.spec / total, 2),
            reviews: round_to(self.reviews / total, 2),
        }
    }
}
