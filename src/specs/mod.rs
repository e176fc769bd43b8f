//! Spec-fit: how well a device's characteristics satisfy the structured criteria.

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::collections::HashMap;

use crate::constants::{
    NEUTRAL_SCORE, NUMERIC_CREDIT_FLOOR, PRICE_KEYS, SYNTHESIZED_PRICE_KEY,
};
use crate::criteria::{CriterionKind, NormalizedCriterion, PriceRange};
use crate::text::{normalize_text, parse_value, round_to};
use crate::vector::DeviceInput;

/// Characteristic type → description for one device.
///
/// Keys are lowercased and trimmed; a later duplicate type overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacteristicMap {
    entries: HashMap<String, String>,
}

impl CharacteristicMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map for `device`, synthesizing a `"preco"` entry from an explicit price.
    pub fn from_device(device: &DeviceInput) -> Self {
        let mut map = Self::new();
        for characteristic in &device.characteristics {
            map.insert(&characteristic.kind, &characteristic.description);
        }
        if let Some(price) = device.price {
            map.insert(SYNTHESIZED_PRICE_KEY, format!("{price:.2}"));
        }
        map
    }

    /// Inserts an entry; empty keys are ignored.
    pub fn insert(&mut self, kind: &str, description: impl Into<String>) {
        let key = kind.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        self.entries.insert(key, description.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parsed numeric value of the characteristic `key`.
    pub fn parsed(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(parse_value)
    }

    /// First parseable value among the known price keys.
    pub fn price(&self) -> Option<f64> {
        PRICE_KEYS.iter().find_map(|key| self.parsed(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Score of a single structured criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(skip)]
    pub kind: CriterionKind,
    pub score: f64,
}

/// Aggregate spec-fit plus the per-criterion breakdown (criterion order preserved).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecFit {
    pub score: f64,
    pub per_criterion: Vec<CriterionScore>,
}

impl SpecFit {
    /// Neutral result used when there is nothing structured to score.
    pub fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            per_criterion: Vec::new(),
        }
    }
}

/// Scores `map` against every structured criterion in `criteria`.
///
/// The aggregate is the weighted mean of per-criterion scores (price ranges weigh double). A
/// criterion whose characteristic the device lacks scores `0.0` and still counts.
pub fn score_specifications(criteria: &[NormalizedCriterion], map: &CharacteristicMap) -> SpecFit {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut per_criterion = Vec::new();

    for criterion in criteria.iter().filter(|c| c.is_structured()) {
        let weight = criterion.kind.spec_weight();
        let score = score_criterion(criterion, map);

        weighted_sum += score * weight;
        total_weight += weight;
        per_criterion.push(CriterionScore {
            tag: criterion.tag.clone(),
            kind: criterion.kind,
            score: round_to(score, 4),
        });
    }

    if per_criterion.is_empty() {
        return SpecFit::neutral();
    }

    SpecFit {
        score: round_to(weighted_sum / total_weight, 4),
        per_criterion,
    }
}

fn score_criterion(criterion: &NormalizedCriterion, map: &CharacteristicMap) -> f64 {
    if criterion.kind == CriterionKind::PriceRange {
        return PriceRange::parse(&criterion.description).score(map.price());
    }

    if criterion.kind.is_numeric() {
        return numeric_score(criterion.value, map.parsed(&criterion.tag));
    }

    let desired = normalize_text(&criterion.description);
    let actual = normalize_text(map.get(&criterion.tag).unwrap_or_default());
    if !desired.is_empty() && actual.contains(&desired) {
        1.0
    } else {
        0.0
    }
}

/// Meeting or beating `desired` scores `1.0`; partial credit starts at 70% of it.
pub fn numeric_score(desired: Option<f64>, actual: Option<f64>) -> f64 {
    let (Some(desired), Some(actual)) = (desired, actual) else {
        return 0.0;
    };

    if actual >= desired {
        return 1.0;
    }

    let ratio = actual / desired.max(1e-9);
    ((ratio - NUMERIC_CREDIT_FLOOR) / (1.0 - NUMERIC_CREDIT_FLOOR)).clamp(0.0, 1.0)
}
