use tracing::debug;

use super::{DeviceInput, DeviceVector};
use crate::constants::CAMERA_SPEC_KEYS;
use crate::level::{
    Aspect, Level, battery_level, benchmark_level, camera_level, price_level, processor_level,
    ram_level, storage_level,
};
use crate::specs::CharacteristicMap;

/// Builds the aspect vector for `device`.
///
/// Explicit aspect scores win (clamped). Missing aspects are derived from raw specs; aspects
/// that cannot be derived stay neutral.
pub fn build_device_vector(device: &DeviceInput, map: &CharacteristicMap) -> DeviceVector {
    let mut vector = DeviceVector::neutral(device.id.clone());
    let explicit = device.aspect_scores.unwrap_or_default();

    for aspect in Aspect::ALL {
        let value = match explicit.get(aspect) {
            Some(score) => Some(score),
            None => derive_level(aspect, map).map(Level::score),
        };
        if let Some(value) = value {
            vector.set(aspect, value);
        }
    }

    debug!(
        device_id = %vector.device_id,
        camera = vector.camera,
        bateria = vector.bateria,
        preco = vector.preco,
        desempenho = vector.desempenho,
        "Built device vector"
    );

    vector
}

/// Level implied by the raw specs for `aspect`, if any spec is usable.
pub fn derive_level(aspect: Aspect, map: &CharacteristicMap) -> Option<Level> {
    match aspect {
        Aspect::Preco => map.price().map(price_level),
        Aspect::Camera => CAMERA_SPEC_KEYS
            .iter()
            .filter_map(|key| map.parsed(key))
            .reduce(f64::max)
            .map(camera_level),
        Aspect::Bateria => map.parsed("battery").map(battery_level),
        Aspect::Desempenho => map
            .parsed("benchmark")
            .map(benchmark_level)
            .or_else(|| map.parsed("ram").map(ram_level))
            .or_else(|| map.parsed("rom").map(storage_level))
            .or_else(|| map.get("processor").and_then(processor_level)),
    }
}
