//! Opinion similarity between a device vector and the buyer's preference target.

use crate::level::Aspect;
use crate::preferences::Preferences;
use crate::vector::DeviceVector;

/// Weighted-L1 similarity in `[0, 1]`.
///
/// `1 - min(1, Σ wₐ·|vₐ - tₐ| / Σ wₐ)`, floored at `0`. Unmentioned aspects weigh `1` and target
/// the `ok` score; a zero weight sum is treated as `1`.
pub fn opinion_similarity(vector: &DeviceVector, prefs: &Preferences) -> f64 {
    let mut distance = 0.0;
    let mut weight_sum = 0.0;

    for aspect in Aspect::ALL {
        let weight = prefs.effective_weight(aspect);
        distance += weight * (vector.get(aspect) - prefs.target(aspect)).abs();
        weight_sum += weight;
    }

    let denominator = if weight_sum == 0.0 { 1.0 } else { weight_sum };
    (1.0 - (distance / denominator).min(1.0)).max(0.0)
}
