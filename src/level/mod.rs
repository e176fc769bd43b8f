//! Aspects, ordinal quality levels, and the classifiers that map raw specs onto them.

pub mod classify;


pub use classify::{
    battery_level, benchmark_level, camera_level, price_level, processor_level, ram_level,
    storage_level,
};

use serde::{Deserialize, Serialize};

/// One of the four scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Camera,
    Bateria,
    Preco,
    Desempenho,
}

impl Aspect {
    /// Every aspect, in vector order.
    pub const ALL: [Aspect; 4] = [
        Aspect::Camera,
        Aspect::Bateria,
        Aspect::Preco,
        Aspect::Desempenho,
    ];

    /// Wire name of the aspect.
    pub fn as_str(self) -> &'static str {
        match self {
            Aspect::Camera => "camera",
            Aspect::Bateria => "bateria",
            Aspect::Preco => "preco",
            Aspect::Desempenho => "desempenho",
        }
    }

    /// Minimum weight an aspect receives once any criterion targets it.
    pub fn weight_floor(self) -> f64 {
        match self {
            Aspect::Preco => crate::constants::PRICE_WEIGHT_FLOOR,
            _ => crate::constants::ASPECT_WEIGHT_FLOOR,
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal quality tier: `basica < ok < boa < top`.
///
/// The derived ordering agrees with [`Level::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basica,
    Ok,
    Boa,
    Top,
}

impl Level {
    /// Numeric score for the level.
    pub fn score(self) -> f64 {
        match self {
            Level::Basica => 0.3,
            Level::Ok => 0.5,
            Level::Boa => 0.75,
            Level::Top => 0.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Basica => "basica",
            Level::Ok => "ok",
            Level::Boa => "boa",
            Level::Top => "top",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for an optional level; an unknown level scores like [`Level::Ok`].
#[inline]
pub fn level_to_score(level: Option<Level>) -> f64 {
    level.map_or(Level::Ok.score(), Level::score)
}
