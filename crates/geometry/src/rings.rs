use events::{DisasterEvent, GeoPoint};
use foundation::color::Rgba;

/// Stroke/fill styling for a geographic circle overlay.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStyle {
    pub color: Rgba,
    pub fill_opacity: f32,
    pub stroke_opacity: f32,
    pub stroke_weight: f32,
}

/// One concentric impact circle. Derived and ephemeral: recomputed whenever
/// the event list changes, never persisted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImpactRing {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub style: RingStyle,
}

// Outer → inner: radius fraction, color, fill opacity, stroke opacity, weight.
// Opacity rises inward to suggest damage concentration.
const RING_SPECS: [(f64, [u8; 3], f32, f32, f32); 3] = [
    (1.0, [0xdc, 0x26, 0x26], 0.10, 0.6, 2.0),
    (0.6, [0xea, 0x58, 0x0c], 0.15, 0.7, 2.0),
    (0.3, [0xf5, 0x9e, 0x0b], 0.20, 0.8, 3.0),
];

/// Concentric severity rings for one event, ordered outer → mid → inner.
///
/// Returns exactly 3 rings with strictly descending radii for any positive
/// impact radius, and no geometry at all for a zero radius (a point event
/// has no impact zone to draw).
pub fn rings_for(event: &DisasterEvent) -> Vec<ImpactRing> {
    if !(event.radius_km > 0.0) {
        return Vec::new();
    }

    RING_SPECS
        .iter()
        .map(
            |&(fraction, [r, g, b], fill_opacity, stroke_opacity, stroke_weight)| ImpactRing {
                center: event.position,
                radius_km: event.radius_km * fraction,
                style: RingStyle {
                    color: Rgba::from_rgb8(r, g, b),
                    fill_opacity,
                    stroke_opacity,
                    stroke_weight,
                },
            },
        )
        .collect()
}
