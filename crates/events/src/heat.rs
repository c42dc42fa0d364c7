use crate::event::GeoPoint;

/// A claims-density polygon supplied by the claims-aggregation service.
///
/// `density` is a 0-100 scalar driving the stepped heat ramp; `claim_count`
/// is informational (popup text on the map).
#[derive(Debug, Clone, PartialEq)]
pub struct HeatZone {
    /// Ordered ring of vertices. Not required to repeat the first vertex.
    pub ring: Vec<GeoPoint>,
    pub density: f64,
    pub claim_count: u32,
}

impl HeatZone {
    pub fn new(ring: Vec<GeoPoint>, density: f64, claim_count: u32) -> Self {
        Self {
            ring,
            density,
            claim_count,
        }
    }
}

/// Fallback zones for when the claims collaborator has not delivered a
/// snapshot yet. These are illustrative quads over Miami, Tampa, and
/// Houston, not real aggregation output; production paths should always
/// inject real zones instead.
pub fn placeholder_zones() -> Vec<HeatZone> {
    vec![
        HeatZone::new(
            vec![
                GeoPoint::new(25.7617, -80.1918),
                GeoPoint::new(25.8617, -80.0918),
                GeoPoint::new(25.8617, -80.2918),
                GeoPoint::new(25.7617, -80.2918),
            ],
            85.0,
            23,
        ),
        HeatZone::new(
            vec![
                GeoPoint::new(27.9506, -82.4572),
                GeoPoint::new(28.0506, -82.3572),
                GeoPoint::new(28.0506, -82.5572),
                GeoPoint::new(27.9506, -82.5572),
            ],
            65.0,
            15,
        ),
        HeatZone::new(
            vec![
                GeoPoint::new(29.7604, -95.3698),
                GeoPoint::new(29.8604, -95.2698),
                GeoPoint::new(29.8604, -95.4698),
                GeoPoint::new(29.7604, -95.4698),
            ],
            45.0,
            8,
        ),
    ]
}
