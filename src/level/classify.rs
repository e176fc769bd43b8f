//! Threshold and keyword classifiers. Lower bounds are inclusive except for price.

use super::Level;
use crate::text::normalize_text;

const PROCESSOR_TOP: &[&str] = &[
    "snapdragon 8",
    "dimensity 9",
    "apple a16",
    "apple a17",
    "tensor g3",
    "exynos 2400",
];

const PROCESSOR_BOA: &[&str] = &[
    "snapdragon 7",
    "dimensity 8",
    "apple a14",
    "apple a15",
    "tensor g2",
    "exynos 2200",
];

const PROCESSOR_OK: &[&str] = &[
    "snapdragon 6",
    "snapdragon 4",
    "dimensity 7",
    "helio g8",
    "tensor g1",
];

#[inline]
fn tiered(value: f64, top: f64, boa: f64, ok: f64) -> Level {
    if value >= top {
        Level::Top
    } else if value >= boa {
        Level::Boa
    } else if value >= ok {
        Level::Ok
    } else {
        Level::Basica
    }
}

/// Main camera resolution in megapixels.
pub fn camera_level(megapixels: f64) -> Level {
    tiered(megapixels, 64.0, 48.0, 20.0)
}

/// Battery capacity in mAh.
pub fn battery_level(mah: f64) -> Level {
    tiered(mah, 6000.0, 5000.0, 4500.0)
}

/// RAM in GB.
pub fn ram_level(gigabytes: f64) -> Level {
    tiered(gigabytes, 12.0, 8.0, 6.0)
}

/// Internal storage in GB.
pub fn storage_level(gigabytes: f64) -> Level {
    tiered(gigabytes, 512.0, 256.0, 128.0)
}

/// Synthetic benchmark score (AnTuTu scale).
pub fn benchmark_level(score: f64) -> Level {
    tiered(score, 1_200_000.0, 900_000.0, 600_000.0)
}

/// Price in whole currency units. Bounds are exclusive: `3000` is still `boa`.
pub fn price_level(price: f64) -> Level {
    if price <= 1000.0 {
        Level::Basica
    } else if price <= 2000.0 {
        Level::Ok
    } else if price <= 3000.0 {
        Level::Boa
    } else {
        Level::Top
    }
}

/// Classifies a processor name against known chip families.
///
/// Returns `None` when no family matches; callers fall back to keyword inference.
pub fn processor_level(name: &str) -> Option<Level> {
    let normalized = normalize_text(name);
    if normalized.is_empty() {
        return None;
    }

    let matches = |tier: &[&str]| tier.iter().any(|family| normalized.contains(family));

    if matches(PROCESSOR_TOP) {
        Some(Level::Top)
    } else if matches(PROCESSOR_BOA) {
        Some(Level::Boa)
    } else if matches(PROCESSOR_OK) {
        Some(Level::Ok)
    } else {
        None
    }
}
