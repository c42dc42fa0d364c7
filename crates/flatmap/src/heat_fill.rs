use earcutr::earcut;
use events::HeatZone;

/// Triangulate a heat zone's ring for filled rendering.
///
/// Returns indices into the ring, three per triangle. Degenerate rings
/// (fewer than 3 vertices, or ones the triangulator rejects) yield no
/// triangles; the caller decides whether that zone is worth keeping as an
/// outline.
pub fn triangulate_zone(zone: &HeatZone) -> Vec<usize> {
    if zone.ring.len() < 3 {
        return Vec::new();
    }

    // Planar triangulation in lng/lat space. Zones are city-scale, so the
    // projection error inside one polygon is negligible.
    let mut coords_2d = Vec::with_capacity(zone.ring.len() * 2);
    for vertex in &zone.ring {
        if !vertex.lat_deg.is_finite() || !vertex.lng_deg.is_finite() {
            return Vec::new();
        }
        coords_2d.push(vertex.lng_deg);
        coords_2d.push(vertex.lat_deg);
    }

    match earcut(&coords_2d, &[], 2) {
        Ok(indices) => indices,
        Err(_) => Vec::new(),
    }
}
