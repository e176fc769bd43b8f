//! Per-request orchestration: blend weights, per-device scoring, ranking.
//!
//! [`MatchEngine::score_devices`] normalizes criteria and infers preferences once, then scores
//! each device independently (in parallel) before sorting. The final score comes from the
//! engine's [`Scorer`](crate::model::Scorer), which either returns the heuristic blend or a
//! trained model's prediction.

pub mod engine;
pub mod types;
pub mod weights;


pub use engine::MatchEngine;
pub use types::{MatchExplanation, MatchResult, percent};
pub use weights::{BlendWeights, ExplanationWeights};
