use serde::Serialize;

use super::weights::ExplanationWeights;
use crate::specs::CriterionScore;

/// Why a device scored the way it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExplanation {
    pub spec_fit: f64,
    pub opinion_sim: f64,
    pub weights: ExplanationWeights,
    pub per_criterion: Vec<CriterionScore>,
}

/// Scored device as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    /// Final score in `[0, 1]`, 4 decimals.
    pub final_score: f64,
    /// `round(final_score * 100)`.
    pub match_score: u8,
    pub perfil_match_percent: u8,
    /// Omitted when the request had no structured criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criterios_match_percent: Option<u8>,
    pub spec_fit: f64,
    pub opinion_sim: f64,
    pub justificativas: Vec<String>,
    pub match_explanation: MatchExplanation,
}

/// Integer percentage of a `[0, 1]` score.
#[inline]
pub fn percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
