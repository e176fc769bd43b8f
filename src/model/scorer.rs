use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::artifact::MatchModelArtifact;
use super::error::ModelError;
use super::features::FeaturePayload;
use super::registry::ModelRegistry;
use crate::constants::NEUTRAL_SCORE;
use crate::text::clamp_score;

/// Turns a device's features and heuristic blend into its final score in `[0, 1]`.
pub trait Scorer: Send + Sync + std::fmt::Debug {
    fn final_score(&self, features: &FeaturePayload, heuristic: f64) -> f64;

    fn is_model_backed(&self) -> bool {
        false
    }

    /// `"model"` or `"heuristic"`.
    fn name(&self) -> &'static str {
        if self.is_model_backed() {
            "model"
        } else {
            "heuristic"
        }
    }
}

/// Always returns the heuristic blend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl Scorer for HeuristicScorer {
    fn final_score(&self, _features: &FeaturePayload, heuristic: f64) -> f64 {
        clamp_score(Some(heuristic), NEUTRAL_SCORE)
    }
}

/// Scores with a loaded artifact, falling back to the heuristic blend when prediction fails.
#[derive(Debug, Clone)]
pub struct ModelScorer {
    artifact: Arc<MatchModelArtifact>,
}

impl ModelScorer {
    pub fn new(artifact: Arc<MatchModelArtifact>) -> Self {
        Self { artifact }
    }

    pub fn artifact(&self) -> &Arc<MatchModelArtifact> {
        &self.artifact
    }
}

impl Scorer for ModelScorer {
    fn final_score(&self, features: &FeaturePayload, heuristic: f64) -> f64 {
        match self.artifact.predict(features) {
            Ok(prediction) => clamp_score(Some(prediction), NEUTRAL_SCORE),
            Err(err) => {
                error!(error = %err, heuristic, "Match model prediction failed, using heuristic");
                clamp_score(Some(heuristic), NEUTRAL_SCORE)
            }
        }
    }

    fn is_model_backed(&self) -> bool {
        true
    }
}

/// Picks the scorer for this process: model-backed when the artifact loads, heuristic otherwise.
pub fn select_scorer(registry: &ModelRegistry, explicit: Option<&Path>) -> Arc<dyn Scorer> {
    match registry.load(explicit) {
        Ok(artifact) => {
            info!(
                features = artifact.feature_names().len(),
                "Using model-backed match scoring"
            );
            Arc::new(ModelScorer::new(artifact))
        }
        Err(ModelError::NotFound { path }) => {
            info!(path = %path.display(), "No match model found, using heuristic scoring");
            Arc::new(HeuristicScorer)
        }
        Err(err) => {
            warn!(error = %err, "Match model unavailable, using heuristic scoring");
            Arc::new(HeuristicScorer)
        }
    }
}
