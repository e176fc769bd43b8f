use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::types::{MatchExplanation, MatchResult, percent};
use super::weights::BlendWeights;
use crate::criteria::{Criterion, NormalizedCriterion, normalize_criteria};
use crate::justification::build_justifications;
use crate::model::{FeaturePayload, HeuristicScorer, Scorer};
use crate::preferences::{Preferences, infer_preferences};
use crate::similarity::opinion_similarity;
use crate::specs::{CharacteristicMap, score_specifications};
use crate::text::round_to;
use crate::vector::{DeviceInput, build_device_vector};

/// Ranks devices against a request's criteria.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    scorer: Arc<dyn Scorer>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::heuristic()
    }
}

/// Request-wide state computed once and shared by every device.
struct RequestContext {
    criteria: Vec<NormalizedCriterion>,
    preferences: Preferences,
    weights: BlendWeights,
}

impl RequestContext {
    fn new(criteria: &[Criterion]) -> Self {
        let criteria: Vec<NormalizedCriterion> = normalize_criteria(criteria)
            .into_iter()
            .filter(NormalizedCriterion::is_structured)
            .collect();
        let preferences = infer_preferences(&criteria);
        let weights = BlendWeights::derive(
            !criteria.is_empty(),
            !preferences.is_empty(),
            criteria.iter().any(|c| c.kind.is_price()),
        );

        Self {
            criteria,
            preferences,
            weights,
        }
    }
}

impl MatchEngine {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    pub fn heuristic() -> Self {
        Self::new(Arc::new(HeuristicScorer))
    }

    pub fn scorer(&self) -> &Arc<dyn Scorer> {
        &self.scorer
    }

    /// Scores every device and returns them by descending final score; ties keep input order.
    ///
    /// Empty `criteria` or `devices` yields an empty list.
    pub fn score_devices(&self, criteria: &[Criterion], devices: &[DeviceInput]) -> Vec<MatchResult> {
        if criteria.is_empty() || devices.is_empty() {
            return Vec::new();
        }

        let ctx = RequestContext::new(criteria);
        debug!(
            structured = ctx.criteria.len(),
            preferences = ctx.preferences.levels().len(),
            spec_weight = ctx.weights.spec,
            reviews_weight = ctx.weights.reviews,
            "Derived request context"
        );

        let mut results: Vec<MatchResult> = devices
            .par_iter()
            .map(|device| self.score_device(&ctx, device))
            .collect();

        results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        info!(
            devices = results.len(),
            scorer = self.scorer.name(),
            top = results.first().map(|r| r.final_score),
            "Scored devices"
        );

        results
    }

    fn score_device(&self, ctx: &RequestContext, device: &DeviceInput) -> MatchResult {
        let weights = &ctx.weights;
        let map = CharacteristicMap::from_device(device);
        let fit = score_specifications(&ctx.criteria, &map);
        let vector = build_device_vector(device, &map);
        let opinion_sim = opinion_similarity(&vector, &ctx.preferences);

        let spec_fit = weights.effective_spec_fit(fit.score);
        let heuristic = weights.heuristic(spec_fit, opinion_sim);

        let features = FeaturePayload {
            spec_fit,
            opinion_sim,
            has_structured: weights.has_structured,
            has_preference_targets: weights.has_preference_targets,
            includes_price: weights.includes_price,
            spec_weight: weights.spec,
            reviews_weight: weights.reviews,
            ..FeaturePayload::from_vector(&vector)
        };
        let final_score = self.scorer.final_score(&features, heuristic);
        let justificativas = build_justifications(&fit.per_criterion, &vector, &ctx.preferences);

        debug!(
            device_id = %device.id,
            characteristics = map.len(),
            spec_fit,
            opinion_sim,
            heuristic,
            final_score,
            "Scored device"
        );

        MatchResult {
            id: device.id.clone(),
            final_score: round_to(final_score, 4),
            match_score: percent(final_score),
            perfil_match_percent: percent(opinion_sim),
            criterios_match_percent: weights.has_structured.then(|| percent(spec_fit)),
            spec_fit: round_to(spec_fit, 4),
            opinion_sim: round_to(opinion_sim, 4),
            justificativas,
            match_explanation: MatchExplanation {
                spec_fit: round_to(spec_fit, 4),
                opinion_sim: round_to(opinion_sim, 4),
                weights: weights.normalized(),
                per_criterion: fit.per_criterion,
            },
        }
    }
}
