//! devmatch library crate (used by the server and integration tests).
//!
//! Ranks candidate devices against a buyer's criteria and inferred preferences, producing a
//! 0-100 match score, sub-scores and up to three short justifications per device.
//!
//! # Pipeline
//!
//! criteria → [`normalize_criteria`] → [`infer_preferences`] and per-device
//! [`score_specifications`] → [`build_device_vector`] → [`opinion_similarity`] →
//! [`BlendWeights`] → [`Scorer`] → [`build_justifications`] → sorted [`MatchResult`]s.
//! [`MatchEngine::score_devices`] runs the whole thing.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Criterion`], [`DeviceInput`] - request shapes
//! - [`MatchEngine`], [`MatchResult`], [`MatchExplanation`] - orchestration and output
//! - [`Aspect`], [`Level`], [`Preferences`], [`DeviceVector`] - intermediate model
//!
//! ## Model Scoring
//! - [`Scorer`], [`HeuristicScorer`], [`ModelScorer`], [`select_scorer`]
//! - [`MatchModelArtifact`], [`ModelRegistry`], [`FeaturePayload`]
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - environment configuration
//! - [`gateway`] - axum routes
//!
//! ## Test/Mock Support
//! [`FixedScorer`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod criteria;
pub mod gateway;
pub mod justification;
pub mod level;
pub mod model;
pub mod preferences;
pub mod scoring;
pub mod similarity;
pub mod specs;
pub mod text;
pub mod vector;

pub use config::{Config, ConfigError};
pub use criteria::{Criterion, CriterionKind, NormalizedCriterion, PriceRange, normalize_criteria};
pub use justification::build_justifications;
pub use level::{Aspect, Level, level_to_score};
#[cfg(any(test, feature = "mock"))]
pub use model::FixedScorer;
pub use model::{
    FeaturePayload, HeuristicScorer, MATCH_FEATURE_COLUMNS, MatchModelArtifact, ModelError,
    ModelRegistry, ModelScorer, Scorer, select_scorer,
};
pub use preferences::{Preferences, infer_preferences};
pub use scoring::{BlendWeights, MatchEngine, MatchExplanation, MatchResult};
pub use similarity::opinion_similarity;
pub use specs::{CharacteristicMap, CriterionScore, SpecFit, score_specifications};
pub use text::{level_from_keywords, normalize_text, parse_value};
pub use vector::{AspectScores, Characteristic, DeviceInput, DeviceVector, build_device_vector};
