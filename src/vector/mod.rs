//! Device inputs and their position in aspect-space.

pub mod builder;


pub use builder::build_device_vector;

use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_SCORE;
use crate::level::Aspect;

/// One `(type, description)` characteristic of a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,
    #[serde(alias = "descricao", default)]
    pub description: String,
}

impl Characteristic {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// Precomputed aspect scores (e.g. from review mining), each expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectScores {
    #[serde(default)]
    pub camera: Option<f64>,
    #[serde(default)]
    pub bateria: Option<f64>,
    #[serde(default)]
    pub preco: Option<f64>,
    #[serde(default)]
    pub desempenho: Option<f64>,
}

impl AspectScores {
    pub fn get(&self, aspect: Aspect) -> Option<f64> {
        match aspect {
            Aspect::Camera => self.camera,
            Aspect::Bateria => self.bateria,
            Aspect::Preco => self.preco,
            Aspect::Desempenho => self.desempenho,
        }
    }
}

/// A candidate device as sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInput {
    pub id: String,
    #[serde(default, alias = "preco")]
    pub price: Option<f64>,
    #[serde(default, alias = "caracteristicas")]
    pub characteristics: Vec<Characteristic>,
    #[serde(default, alias = "aspect_scores")]
    pub aspect_scores: Option<AspectScores>,
}

impl DeviceInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price: None,
            characteristics: Vec::new(),
            aspect_scores: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_characteristic(
        mut self,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.characteristics.push(Characteristic::new(kind, description));
        self
    }

    pub fn with_aspect_scores(mut self, scores: AspectScores) -> Self {
        self.aspect_scores = Some(scores);
        self
    }
}

/// Four-aspect summary of a device; every component lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceVector {
    pub device_id: String,
    pub camera: f64,
    pub bateria: f64,
    pub preco: f64,
    pub desempenho: f64,
}

impl DeviceVector {
    /// A vector with every component at the neutral score.
    pub fn neutral(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            camera: NEUTRAL_SCORE,
            bateria: NEUTRAL_SCORE,
            preco: NEUTRAL_SCORE,
            desempenho: NEUTRAL_SCORE,
        }
    }

    pub fn get(&self, aspect: Aspect) -> f64 {
        match aspect {
            Aspect::Camera => self.camera,
            Aspect::Bateria => self.bateria,
            Aspect::Preco => self.preco,
            Aspect::Desempenho => self.desempenho,
        }
    }

    /// Sets a component, clamped into `[0, 1]`.
    pub fn set(&mut self, aspect: Aspect, value: f64) {
        let value = crate::text::clamp_score(Some(value), NEUTRAL_SCORE);
        match aspect {
            Aspect::Camera => self.camera = value,
            Aspect::Bateria => self.bateria = value,
            Aspect::Preco => self.preco = value,
            Aspect::Desempenho => self.desempenho = value,
        }
    }

    /// Aspects ordered by descending value; ties rank camera, bateria, desempenho, preco.
    pub fn ranked_aspects(&self) -> Vec<Aspect> {
        let mut aspects = vec![
            Aspect::Camera,
            Aspect::Bateria,
            Aspect::Desempenho,
            Aspect::Preco,
        ];
        aspects.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        aspects
    }
}
