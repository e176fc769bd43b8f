use serde::Serialize;

use crate::vector::DeviceVector;

/// Feature column order used when an artifact does not name its own columns.
pub const MATCH_FEATURE_COLUMNS: [&str; 11] = [
    "spec_fit",
    "opinion_sim",
    "camera",
    "bateria",
    "preco",
    "desempenho",
    "has_structured",
    "has_preference_targets",
    "includes_price",
    "spec_weight",
    "reviews_weight",
];

/// The fixed set of named inputs handed to a scorer for one device.
///
/// Booleans are exposed to estimators as `1.0` / `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturePayload {
    pub spec_fit: f64,
    pub opinion_sim: f64,
    pub camera: f64,
    pub bateria: f64,
    pub preco: f64,
    pub desempenho: f64,
    pub has_structured: bool,
    pub has_preference_targets: bool,
    pub includes_price: bool,
    pub spec_weight: f64,
    pub reviews_weight: f64,
}

impl FeaturePayload {
    /// Payload with the aspect columns taken from `vector` and every other column zeroed.
    pub fn from_vector(vector: &DeviceVector) -> Self {
        Self {
            spec_fit: 0.0,
            opinion_sim: 0.0,
            camera: vector.camera,
            bateria: vector.bateria,
            preco: vector.preco,
            desempenho: vector.desempenho,
            has_structured: false,
            has_preference_targets: false,
            includes_price: false,
            spec_weight: 0.0,
            reviews_weight: 0.0,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        let flag = |value: bool| if value { 1.0 } else { 0.0 };
        let value = match name {
            "spec_fit" => self.spec_fit,
            "opinion_sim" => self.opinion_sim,
            "camera" => self.camera,
            "bateria" => self.bateria,
            "preco" => self.preco,
            "desempenho" => self.desempenho,
            "has_structured" => flag(self.has_structured),
            "has_preference_targets" => flag(self.has_preference_targets),
            "includes_price" => flag(self.includes_price),
            "spec_weight" => self.spec_weight,
            "reviews_weight" => self.reviews_weight,
            _ => return None,
        };
        Some(value)
    }

    /// Row in `names` order; unknown names read as `0.0`.
    pub fn to_row<S: AsRef<str>>(&self, names: &[S]) -> Vec<f64> {
        names
            .iter()
            .map(|name| self.get(name.as_ref()).unwrap_or(0.0))
            .collect()
    }
}
