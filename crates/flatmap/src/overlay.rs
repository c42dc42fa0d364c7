use events::{EventId, GeoPoint};
use foundation::color::Rgba;
use geometry::{ImpactRing, SeverityTier};

/// One flat-map marker. Anchored geographically; the host's map widget owns
/// screen placement, panning, and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub event_id: EventId,
    pub position: GeoPoint,
    pub glyph: &'static str,
    pub size_px: f64,
    pub tier: SeverityTier,
    /// Popup body shown on selection: title plus the damage/radius summary.
    pub popup: String,
}

/// A geographic circle, radius in meters (map widgets take meters, the feed
/// speaks kilometers).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCircle {
    pub ring: ImpactRing,
    pub radius_m: f64,
}

impl GeoCircle {
    pub fn from_ring(ring: ImpactRing) -> Self {
        Self {
            ring,
            radius_m: ring.radius_km * 1000.0,
        }
    }
}

/// A filled claims-density polygon, pre-triangulated for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatPolygon {
    pub ring: Vec<GeoPoint>,
    pub fill: Rgba,
    /// Triangle fan over `ring`, three indices per triangle.
    pub fill_triangles: Vec<usize>,
    pub claim_count: u32,
}

/// One composed frame of flat-map overlays.
///
/// Unlike the globe, the flat map has no reveal stagger and no hemisphere
/// culling: every valid event appears immediately, every time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapOverlay {
    pub markers: Vec<MarkerIcon>,
    pub circles: Vec<GeoCircle>,
    pub heat: Vec<HeatPolygon>,
}
