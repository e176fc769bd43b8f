use crate::constants::FREE_TEXT_TYPE;
use crate::level::Aspect;

/// Known criterion type tags, plus a catch-all for everything else.
///
/// Each kind decides how it is scored against a device ([`CriterionKind::is_numeric`],
/// [`CriterionKind::is_price_range`]), which aspect it feeds ([`CriterionKind::aspect_hint`]),
/// and how it is explained ([`CriterionKind::fallback_justification`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    /// `texto_livre`
    FreeText,
    /// `preco_intervalo`, a `"min-max"` budget.
    PriceRange,
    /// `preco`, `price`, `custo`
    Price,
    /// `battery`
    Battery,
    /// `main_camera`
    MainCamera,
    /// `secondary_camera`
    SecondaryCamera,
    /// `tertiary_camera`
    TertiaryCamera,
    /// `front_camera`
    FrontCamera,
    /// `camera` (generic; matched as text, not as a number)
    Camera,
    /// `benchmark`
    Benchmark,
    /// `ram`
    Ram,
    /// `rom` (internal storage)
    Rom,
    /// `processor`
    Processor,
    /// `screen_size`
    ScreenSize,
    /// `refresh_rate`
    RefreshRate,
    /// Any other tag; scored by text containment, never feeds preferences.
    Other,
}

impl CriterionKind {
    /// Maps an already lowercased, trimmed type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            FREE_TEXT_TYPE => Self::FreeText,
            "preco_intervalo" => Self::PriceRange,
            "preco" | "price" | "custo" => Self::Price,
            "battery" => Self::Battery,
            "main_camera" => Self::MainCamera,
            "secondary_camera" => Self::SecondaryCamera,
            "tertiary_camera" => Self::TertiaryCamera,
            "front_camera" => Self::FrontCamera,
            "camera" => Self::Camera,
            "benchmark" => Self::Benchmark,
            "ram" => Self::Ram,
            "rom" => Self::Rom,
            "processor" => Self::Processor,
            "screen_size" => Self::ScreenSize,
            "refresh_rate" => Self::RefreshRate,
            _ => Self::Other,
        }
    }

    /// Everything except free text is structured.
    #[inline]
    pub fn is_structured(self) -> bool {
        self != Self::FreeText
    }

    #[inline]
    pub fn is_price_range(self) -> bool {
        self == Self::PriceRange
    }

    /// Price-typed kinds (range or single value).
    #[inline]
    pub fn is_price(self) -> bool {
        matches!(self, Self::PriceRange | Self::Price)
    }

    /// Kinds compared numerically against the device characteristic of the same type.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::ScreenSize
                | Self::Ram
                | Self::Rom
                | Self::Battery
                | Self::Benchmark
                | Self::MainCamera
                | Self::SecondaryCamera
                | Self::TertiaryCamera
                | Self::FrontCamera
                | Self::RefreshRate
        )
    }

    /// Weight of the criterion in the spec-fit average.
    #[inline]
    pub fn spec_weight(self) -> f64 {
        if self.is_price_range() {
            crate::constants::PRICE_CRITERION_WEIGHT
        } else {
            1.0
        }
    }

    /// Aspect a satisfied criterion of this kind speaks for.
    pub fn aspect_hint(self) -> Option<Aspect> {
        match self {
            Self::Battery => Some(Aspect::Bateria),
            Self::MainCamera
            | Self::SecondaryCamera
            | Self::TertiaryCamera
            | Self::FrontCamera
            | Self::Camera => Some(Aspect::Camera),
            Self::Benchmark | Self::Ram | Self::Rom | Self::Processor => {
                Some(Aspect::Desempenho)
            }
            Self::PriceRange | Self::Price => Some(Aspect::Preco),
            Self::FreeText | Self::ScreenSize | Self::RefreshRate | Self::Other => None,
        }
    }

    /// Fixed justification for kinds without an aspect hint.
    pub fn fallback_justification(self) -> Option<&'static str> {
        match self {
            Self::ScreenSize => Some("Tela no tamanho que você pediu"),
            Self::RefreshRate => Some("Tela fluida com taxa de atualização alta"),
            _ => None,
        }
    }
}
