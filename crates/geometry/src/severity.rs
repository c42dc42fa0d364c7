use foundation::color::Rgba;

/// Discrete severity bucket derived from the damage score.
///
/// Boundary contract (inclusive lower bounds): a score of exactly 85 is
/// `Critical`, 84.999 is `High`; exactly 70 is `High`, 69.999 is `Moderate`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Critical,
    High,
    Moderate,
}

pub const CRITICAL_THRESHOLD: f64 = 85.0;
pub const HIGH_THRESHOLD: f64 = 70.0;

impl SeverityTier {
    /// Total function of the damage score; any finite input gets a tier.
    pub fn for_damage_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Moderate
        }
    }

    /// Marker and ring color (red / orange / amber).
    pub fn color(self) -> Rgba {
        match self {
            Self::Critical => Rgba::from_rgb8(0xdc, 0x26, 0x26),
            Self::High => Rgba::from_rgb8(0xea, 0x58, 0x0c),
            Self::Moderate => Rgba::from_rgb8(0xf5, 0x9e, 0x0b),
        }
    }

    /// Flat-map marker icon size in pixels.
    pub fn map_marker_size_px(self) -> f64 {
        match self {
            Self::Critical => 40.0,
            Self::High => 35.0,
            Self::Moderate => 30.0,
        }
    }
}
