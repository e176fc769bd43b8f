//! Optional trained-model scoring.
//!
//! A [`MatchModelArtifact`] is a JSON-encoded estimator plus the feature columns it expects.
//! [`ModelRegistry`] loads and caches one artifact per process; [`select_scorer`] turns the
//! outcome into a [`Scorer`] once at startup. When no artifact is usable the
//! [`HeuristicScorer`] is used and the caller never sees the failure.

pub mod artifact;
pub mod error;
pub mod features;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod registry;
pub mod scorer;


pub use artifact::{
    Estimator, LinearModel, MatchModelArtifact, RegressionTree, TreeEnsemble, TreeNode,
};
pub use error::ModelError;
pub use features::{FeaturePayload, MATCH_FEATURE_COLUMNS};
#[cfg(any(test, feature = "mock"))]
pub use mock::FixedScorer;
pub use registry::ModelRegistry;
pub use scorer::{HeuristicScorer, ModelScorer, Scorer, select_scorer};

use std::path::{Path, PathBuf};

/// Environment variable naming the artifact path.
pub const MODEL_PATH_ENV: &str = "DEVMATCH_MODEL_PATH";

/// File name of the bundled artifact under `<crate>/models/`.
pub const DEFAULT_MODEL_FILE: &str = "device_matching_model.json";

pub fn default_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("models")
        .join(DEFAULT_MODEL_FILE)
}

/// Explicit path, then `DEVMATCH_MODEL_PATH`, then the bundled default. Blank values are skipped
/// and a leading `~` expands to the home directory.
///
/// The server passes [`Config::model_path`](crate::Config) as the explicit path, which already
/// holds the trimmed `DEVMATCH_MODEL_PATH` value; the env lookup here only matters to callers
/// that pass `None`. Both reads agree.
pub fn resolve_model_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit
        && !path.as_os_str().is_empty()
    {
        return expand_home(path);
    }

    if let Ok(value) = std::env::var(MODEL_PATH_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return expand_home(Path::new(trimmed));
        }
    }

    default_model_path()
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
