//! Preference inference: folds structured criteria into a target level and weight per aspect.
//!
//! Both maps are sparse and keep first-mention order, which is also the order focus aspects
//! are explained in.


use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::constants::{DEFAULT_ASPECT_WEIGHT, FOCUS_WEIGHT_THRESHOLD};
use crate::criteria::{CriterionKind, NormalizedCriterion, PriceRange};
use crate::level::{
    Aspect, Level, battery_level, benchmark_level, camera_level, level_to_score, price_level,
    processor_level, ram_level, storage_level,
};
use crate::text::level_from_keywords;

/// Preferred level and weight per referenced aspect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preferences {
    levels: IndexMap<Aspect, Level>,
    weights: IndexMap<Aspect, f64>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges an incoming level for `aspect`.
    ///
    /// Keeps the higher level and raises the weight to the aspect floor, never lowering an
    /// existing weight. A `None` level is a no-op. Idempotent and monotonic.
    pub fn merge(&mut self, aspect: Aspect, incoming: Option<Level>) {
        let Some(incoming) = incoming else {
            return;
        };

        self.levels
            .entry(aspect)
            .and_modify(|current| {
                if incoming > *current {
                    *current = incoming;
                }
            })
            .or_insert(incoming);

        let floor = aspect.weight_floor();
        let weight = self.weights.entry(aspect).or_insert(DEFAULT_ASPECT_WEIGHT);
        *weight = weight.max(floor);
    }

    /// Stated level for `aspect`, if any.
    pub fn level(&self, aspect: Aspect) -> Option<Level> {
        self.levels.get(&aspect).copied()
    }

    /// Stated weight for `aspect`, if any.
    pub fn weight(&self, aspect: Aspect) -> Option<f64> {
        self.weights.get(&aspect).copied()
    }

    /// Weight used for similarity: unmentioned aspects weigh [`DEFAULT_ASPECT_WEIGHT`].
    pub fn effective_weight(&self, aspect: Aspect) -> f64 {
        self.weight(aspect).unwrap_or(DEFAULT_ASPECT_WEIGHT)
    }

    /// Target score for `aspect`; aspects without a preference target the `ok` score.
    pub fn target(&self, aspect: Aspect) -> f64 {
        level_to_score(self.level(aspect))
    }

    /// Aspects weighted above the focus threshold, in first-mention order.
    pub fn focus_aspects(&self) -> impl Iterator<Item = Aspect> + '_ {
        self.weights
            .iter()
            .filter(|(_, weight)| **weight > FOCUS_WEIGHT_THRESHOLD)
            .map(|(aspect, _)| *aspect)
    }

    pub fn levels(&self) -> &IndexMap<Aspect, Level> {
        &self.levels
    }

    pub fn weights(&self) -> &IndexMap<Aspect, f64> {
        &self.weights
    }

    /// `true` when no criterion produced a preference.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Folds normalized criteria into [`Preferences`]. Free text and unknown kinds are ignored.
pub fn infer_preferences(criteria: &[NormalizedCriterion]) -> Preferences {
    let mut prefs = Preferences::new();

    for criterion in criteria {
        if let Some((aspect, level)) = preference_for(criterion) {
            debug!(
                tag = %criterion.tag,
                aspect = %aspect,
                level = ?level,
                "Criterion mapped to preference"
            );
            prefs.merge(aspect, level);
        }
    }

    prefs
}

/// Aspect and derived level for one criterion; `None` when the kind feeds no aspect.
fn preference_for(criterion: &NormalizedCriterion) -> Option<(Aspect, Option<Level>)> {
    let numeric_or_keywords = |classify: fn(f64) -> Level| match criterion.value {
        Some(value) => Some(classify(value)),
        None => level_from_keywords(&criterion.description),
    };

    match criterion.kind {
        CriterionKind::Battery => Some((Aspect::Bateria, numeric_or_keywords(battery_level))),
        CriterionKind::MainCamera
        | CriterionKind::SecondaryCamera
        | CriterionKind::TertiaryCamera
        | CriterionKind::FrontCamera
        | CriterionKind::Camera => Some((Aspect::Camera, numeric_or_keywords(camera_level))),
        CriterionKind::Benchmark => {
            Some((Aspect::Desempenho, numeric_or_keywords(benchmark_level)))
        }
        CriterionKind::Ram => Some((Aspect::Desempenho, numeric_or_keywords(ram_level))),
        CriterionKind::Rom => Some((Aspect::Desempenho, numeric_or_keywords(storage_level))),
        CriterionKind::Processor => Some((
            Aspect::Desempenho,
            processor_level(&criterion.description)
                .or_else(|| level_from_keywords(&criterion.description)),
        )),
        CriterionKind::PriceRange => Some((
            Aspect::Preco,
            PriceRange::parse(&criterion.description).level(),
        )),
        CriterionKind::Price => Some((Aspect::Preco, numeric_or_keywords(price_level))),
        CriterionKind::FreeText
        | CriterionKind::ScreenSize
        | CriterionKind::RefreshRate
        | CriterionKind::Other => None,
    }
}
