//! Buyer criteria: wire shape, kinds, and normalization.

pub mod kind;
pub mod range;


pub use kind::CriterionKind;
pub use range::PriceRange;

use serde::{Deserialize, Serialize};

use crate::text::parse_value;

/// A raw `(type, description)` criterion as sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(rename = "type", alias = "tipo")]
    pub kind: String,
    #[serde(alias = "descricao", default)]
    pub description: String,
}

impl Criterion {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// A criterion after case folding and numeric extraction. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCriterion {
    /// Lowercased, trimmed type tag (also the characteristic key it is compared against).
    pub tag: String,
    pub kind: CriterionKind,
    /// Lowercased, trimmed description.
    pub description: String,
    /// Parsed numeric value; always `None` for free text.
    pub value: Option<f64>,
}

impl NormalizedCriterion {
    pub fn from_criterion(criterion: &Criterion) -> Option<Self> {
        let tag = criterion.kind.trim().to_lowercase();
        if tag.is_empty() {
            return None;
        }

        let kind = CriterionKind::from_tag(&tag);
        let description = criterion.description.trim().to_lowercase();
        let value = if kind.is_structured() {
            parse_value(&description)
        } else {
            None
        };

        Some(Self {
            tag,
            kind,
            description,
            value,
        })
    }

    #[inline]
    pub fn is_structured(&self) -> bool {
        self.kind.is_structured()
    }
}

/// Normalizes criteria in input order, skipping those with an empty type.
pub fn normalize_criteria(criteria: &[Criterion]) -> Vec<NormalizedCriterion> {
    criteria
        .iter()
        .filter_map(NormalizedCriterion::from_criterion)
        .collect()
}
