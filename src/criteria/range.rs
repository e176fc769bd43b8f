use crate::level::{Level, price_level};
use crate::text::parse_value;

/// A `"min-max"` budget; either bound may be missing (`"-2000"`, `"1500-"`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parses `"min-max"`. Spaces are ignored; anything after a second `-` is dropped.
    pub fn parse(text: &str) -> Self {
        let cleaned: String = text.chars().filter(|c| *c != ' ').collect();
        if cleaned.is_empty() {
            return Self::default();
        }

        let mut parts = cleaned.split('-');
        let min = parts.next().filter(|p| !p.is_empty()).and_then(parse_value);
        let max = parts.next().filter(|p| !p.is_empty()).and_then(parse_value);

        Self { min, max }
    }

    /// Representative price: the midpoint, or whichever bound is present.
    pub fn representative(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min + max) / 2.0),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        }
    }

    /// Price level implied by the range.
    pub fn level(&self) -> Option<Level> {
        self.representative().map(price_level)
    }

    /// Scores a device price against the range.
    ///
    /// Inside the range scores `1.0`. Outside, the score decays linearly to `0.0` over a tolerance
    /// band of `max(bound * 0.2, 150)` below `min` or above `max`. A missing price scores `0.0`.
    pub fn score(&self, device_price: Option<f64>) -> f64 {
        let Some(price) = device_price else {
            return 0.0;
        };

        let mut score: f64 = 1.0;

        if let Some(min) = self.min
            && price < min
        {
            score = 1.0 - (min - price) / tolerance(min);
        }

        if let Some(max) = self.max
            && price > max
        {
            score = score.min(1.0 - (price - max) / tolerance(max));
        }

        score.clamp(0.0, 1.0)
    }
}

#[inline]
fn tolerance(bound: f64) -> f64 {
    use crate::constants::{PRICE_TOLERANCE_FLOOR, PRICE_TOLERANCE_RATIO};
    (bound * PRICE_TOLERANCE_RATIO).max(PRICE_TOLERANCE_FLOOR)
}
