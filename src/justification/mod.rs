//! Short human-readable reasons for a match.


use crate::constants::{
    BALANCED_MATCH, CRITERION_JUSTIFICATION_THRESHOLD, GOOD_ASPECT_THRESHOLD, MAX_JUSTIFICATIONS,
    PRICE_KEEPS_BUDGET, PRICE_WITHIN_BUDGET, STRONG_ASPECT_THRESHOLD, STRONG_PRICE_THRESHOLD,
    aspect_labels,
};
use crate::criteria::CriterionKind;
use crate::level::Aspect;
use crate::preferences::Preferences;
use crate::specs::CriterionScore;
use crate::vector::DeviceVector;

/// Label for an aspect value: the strong label at `>= 0.8`, the good label at `>= 0.65`.
pub fn describe_aspect(aspect: Aspect, value: f64) -> Option<&'static str> {
    let (strong, good) = aspect_labels(aspect);
    if value >= STRONG_ASPECT_THRESHOLD {
        Some(strong)
    } else if value >= GOOD_ASPECT_THRESHOLD {
        Some(good)
    } else {
        None
    }
}

#[derive(Debug, Default)]
struct Collector {
    items: Vec<String>,
}

impl Collector {
    fn add(&mut self, text: Option<&str>) {
        if let Some(text) = text
            && !text.is_empty()
            && !self.items.iter().any(|existing| existing == text)
        {
            self.items.push(text.to_string());
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Picks up to three distinct justifications, in priority order:
///
/// 1. focus aspects (weight above 1.5) the device does well on;
/// 2. well-satisfied criteria (score `>= 0.7`), best first;
/// 3. if fewer than two so far, the device's own strongest aspects;
/// 4. a generic balanced-match phrase if still empty.
pub fn build_justifications(
    per_criterion: &[CriterionScore],
    vector: &DeviceVector,
    prefs: &Preferences,
) -> Vec<String> {
    let mut collected = Collector::default();

    for aspect in prefs.focus_aspects() {
        collected.add(describe_aspect(aspect, vector.get(aspect)));
    }

    let mut satisfied: Vec<&CriterionScore> = per_criterion
        .iter()
        .filter(|c| c.kind.is_structured() && c.score >= CRITERION_JUSTIFICATION_THRESHOLD)
        .collect();
    satisfied.sort_by(|a, b| b.score.total_cmp(&a.score));

    for criterion in satisfied {
        if criterion.kind == CriterionKind::PriceRange {
            collected.add(Some(if criterion.score >= STRONG_PRICE_THRESHOLD {
                PRICE_WITHIN_BUDGET
            } else {
                PRICE_KEEPS_BUDGET
            }));
        } else if let Some(aspect) = criterion.kind.aspect_hint() {
            collected.add(describe_aspect(aspect, vector.get(aspect)));
        } else {
            collected.add(criterion.kind.fallback_justification());
        }
    }

    if collected.len() < 2 {
        for aspect in vector.ranked_aspects() {
            collected.add(describe_aspect(aspect, vector.get(aspect)));
            if collected.len() >= MAX_JUSTIFICATIONS {
                break;
            }
        }
    }

    if collected.is_empty() {
        collected.add(Some(BALANCED_MATCH));
    }

    let mut items = collected.items;
    items.truncate(MAX_JUSTIFICATIONS);
    items
}
