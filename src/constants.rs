//! Cross-cutting, shared constants.
//!
//! Characteristic keys and justification copy are part of the wire contract with the catalog
//! service and the storefront; change them together.

use crate::level::Aspect;

/// Criterion type tag for free text. Contributes no score and no preference.
pub const FREE_TEXT_TYPE: &str = "texto_livre";

/// Characteristic keys searched (in order) for a device price.
pub const PRICE_KEYS: [&str; 3] = ["preco", "price", "valor"];

/// Key under which an explicit device price is synthesized into the characteristic map.
pub const SYNTHESIZED_PRICE_KEY: &str = "preco";

/// Characteristic keys whose maximum parsed value drives the camera aspect.
pub const CAMERA_SPEC_KEYS: [&str; 5] = [
    "main_camera",
    "camera",
    "primary_camera",
    "rear_camera",
    "secondary_camera",
];

/// Spec-fit weight of a price-range criterion; every other criterion weighs 1.
pub const PRICE_CRITERION_WEIGHT: f64 = 2.0;

/// Minimum tolerance band (currency units) for out-of-range prices.
pub const PRICE_TOLERANCE_FLOOR: f64 = 150.0;

/// Fraction of a range bound used as tolerance band when larger than the floor.
pub const PRICE_TOLERANCE_RATIO: f64 = 0.2;

/// Fraction of the desired value at which a numeric criterion starts earning credit.
pub const NUMERIC_CREDIT_FLOOR: f64 = 0.7;

pub const PRICE_WEIGHT_FLOOR: f64 = 3.0;
pub const ASPECT_WEIGHT_FLOOR: f64 = 2.0;

/// Weight used for aspects the buyer never mentioned.
pub const DEFAULT_ASPECT_WEIGHT: f64 = 1.0;

/// Neutral score for unknown vector components and missing spec-fit.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Aspects weighted above this are "focus" aspects for justifications.
pub const FOCUS_WEIGHT_THRESHOLD: f64 = 1.5;
pub const STRONG_ASPECT_THRESHOLD: f64 = 0.8;
pub const GOOD_ASPECT_THRESHOLD: f64 = 0.65;
pub const CRITERION_JUSTIFICATION_THRESHOLD: f64 = 0.7;
pub const STRONG_PRICE_THRESHOLD: f64 = 0.9;
pub const MAX_JUSTIFICATIONS: usize = 3;

pub const PRICE_WITHIN_BUDGET: &str = "Dentro do orçamento que você informou";
pub const PRICE_KEEPS_BUDGET: &str = "Mantém o orçamento definido";
pub const BALANCED_MATCH: &str = "Combinação equilibrada com o que você pediu";

/// `(strong, good)` justification labels for an aspect.
pub fn aspect_labels(aspect: Aspect) -> (&'static str, &'static str) {
    match aspect {
        Aspect::Camera => (
            "Câmera excelente para fotos e vídeos",
            "Câmera boa para o dia a dia",
        ),
        Aspect::Bateria => ("Bateria que dura muito", "Bateria confiável para a rotina"),
        Aspect::Desempenho => (
            "Desempenho ótimo para jogos e multitarefas",
            "Desempenho fluido para o cotidiano",
        ),
        Aspect::Preco => (
            "Ótimo custo-benefício na faixa que você definiu",
            "Mantém o orçamento que você pediu",
        ),
    }
}
