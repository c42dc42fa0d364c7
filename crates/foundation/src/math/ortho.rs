//! Orthographic-style sphere projection.
//!
//! Maps geographic coordinates on a unit sphere to screen space. The sphere
//! spins about its vertical axis: rotation is an additive longitude offset
//! applied before conversion to radians. Depth is dropped, not perspected;
//! `depth_scale` is the only foreshortening cue.
//!
//! Contract (pure, deterministic for given inputs):
//! - `x = cx + r·cos(lat)·cos(lng)`, `y = cy − r·sin(lat)`
//! - `visible ⇔ cos(lng_rad) > 0` (front hemisphere; back-face culling only,
//!   no occlusion against other geometry)
//! - `depth_scale = cos(lng_rad)·0.5 + 0.5`, in `[0, 1]`

use super::Vec2;

/// Screen-space placement of the sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereView {
    pub center: Vec2,
    pub radius_px: f64,
}

impl SphereView {
    pub fn new(center: Vec2, radius_px: f64) -> Self {
        Self { center, radius_px }
    }
}

/// Result of projecting one geographic point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projected {
    pub pos: Vec2,
    /// True iff the point lies on the front hemisphere.
    pub visible: bool,
    /// Foreshortening factor in `[0, 1]`; 1 at the sphere center, 0.5 at the
    /// silhouette, approaching 0 just past it.
    pub depth_scale: f64,
}

/// Project a lat/lng point under the given rotation onto the view.
pub fn project(lat_deg: f64, lng_deg: f64, rotation_deg: f64, view: SphereView) -> Projected {
    let lat_rad = lat_deg.to_radians();
    let lng_rad = (lng_deg + rotation_deg).to_radians();

    let cos_lng = lng_rad.cos();
    let x = view.center.x + view.radius_px * lat_rad.cos() * cos_lng;
    let y = view.center.y - view.radius_px * lat_rad.sin();

    Projected {
        pos: Vec2::new(x, y),
        visible: cos_lng > 0.0,
        depth_scale: cos_lng * 0.5 + 0.5,
    }
}
