use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::features::{FeaturePayload, MATCH_FEATURE_COLUMNS};

/// A trained estimator plus the feature columns it was fitted on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchModelArtifact {
    feature_names: Vec<String>,
    estimator: Estimator,
}

/// Supported estimator encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

/// Gradient-boosted regression trees: `base_score + learning_rate * Σ tree(x)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
}

fn default_learning_rate() -> f64 {
    1.0
}

/// Flat node array rooted at index 0. Children always sit after their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// `x[feature] <= threshold` goes `left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactDocument {
    Wrapped {
        #[serde(default)]
        feature_names: Option<Vec<String>>,
        estimator: Estimator,
    },
    Bare(Estimator),
}

impl MatchModelArtifact {
    /// Wraps `estimator`, defaulting to [`MATCH_FEATURE_COLUMNS`] when no names are given.
    pub fn new(
        feature_names: Option<Vec<String>>,
        estimator: Estimator,
    ) -> Result<Self, ModelError> {
        let feature_names = feature_names.unwrap_or_else(|| {
            MATCH_FEATURE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect()
        });
        estimator.validate(feature_names.len())?;
        Ok(Self {
            feature_names,
            estimator,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| ModelError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let document: ArtifactDocument =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::Undecodable {
                path: path.to_path_buf(),
                source,
            })?;

        match document {
            ArtifactDocument::Wrapped {
                feature_names,
                estimator,
            } => Self::new(feature_names, estimator),
            ArtifactDocument::Bare(estimator) => Self::new(None, estimator),
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn predict(&self, payload: &FeaturePayload) -> Result<f64, ModelError> {
        let row = payload.to_row(&self.feature_names);
        let prediction = self.estimator.predict(&row);
        if !prediction.is_finite() {
            return Err(ModelError::Prediction {
                reason: format!("non-finite prediction {prediction}"),
            });
        }
        Ok(prediction)
    }
}

impl Estimator {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        match self {
            Self::Linear(model) => {
                if model.coefficients.len() != n_features {
                    return Err(ModelError::Incompatible {
                        reason: format!(
                            "linear model has {} coefficients for {} features",
                            model.coefficients.len(),
                            n_features
                        ),
                    });
                }
                Ok(())
            }
            Self::TreeEnsemble(ensemble) => {
                for (tree_idx, tree) in ensemble.trees.iter().enumerate() {
                    tree.validate(n_features).map_err(|reason| ModelError::Incompatible {
                        reason: format!("tree {tree_idx}: {reason}"),
                    })?;
                }
                Ok(())
            }
        }
    }

    /// Raw prediction for a row already in feature order.
    pub fn predict(&self, row: &[f64]) -> f64 {
        match self {
            Self::Linear(model) => {
                model.intercept
                    + model
                        .coefficients
                        .iter()
                        .zip(row)
                        .map(|(coef, x)| coef * x)
                        .sum::<f64>()
            }
            Self::TreeEnsemble(ensemble) => {
                ensemble.base_score
                    + ensemble.learning_rate
                        * ensemble
                            .trees
                            .iter()
                            .map(|tree| tree.evaluate(row))
                            .sum::<f64>()
            }
        }
    }
}

impl RegressionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = *node
            {
                if feature >= n_features {
                    return Err(format!(
                        "node {idx} splits on feature {feature} of {n_features}"
                    ));
                }
                for child in [left, right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(format!("node {idx} has invalid child {child}"));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = row.get(feature).copied().unwrap_or(0.0);
                    idx = if x <= threshold { left } else { right };
                }
            }
        }
    }
}
