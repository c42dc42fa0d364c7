use events::{DisasterEvent, HeatZone};
use geometry::{SeverityTier, glyph_for, heat_color, rings_for};

use crate::heat_fill::triangulate_zone;
use crate::overlay::{GeoCircle, HeatPolygon, MapOverlay, MarkerIcon};

/// Assembles flat-map overlays from an event snapshot and a claims-density
/// snapshot.
///
/// Stateless and deterministic: the same inputs always produce the same
/// overlay, in input order. Malformed events and degenerate zones are
/// dropped with a warning instead of poisoning the whole frame.
pub struct FlatMapRenderer;

impl FlatMapRenderer {
    pub fn compose(events: &[DisasterEvent], zones: &[HeatZone]) -> MapOverlay {
        let mut overlay = MapOverlay::default();

        for event in events {
            if let Err(err) = event.validate() {
                log::warn!("dropping event {} from map: {err}", event.id.as_str());
                continue;
            }

            let tier = SeverityTier::for_damage_score(event.damage_score);
            overlay.markers.push(MarkerIcon {
                event_id: event.id.clone(),
                position: event.position,
                glyph: glyph_for(event.category),
                size_px: tier.map_marker_size_px(),
                tier,
                popup: format!(
                    "{}\nDamage score: {:.0}/100\nImpact radius: {:.0} km",
                    event.title, event.damage_score, event.radius_km
                ),
            });
            overlay
                .circles
                .extend(rings_for(event).into_iter().map(GeoCircle::from_ring));
        }

        for zone in zones {
            let fill_triangles = triangulate_zone(zone);
            if fill_triangles.is_empty() {
                log::warn!(
                    "dropping degenerate heat zone ({} vertices)",
                    zone.ring.len()
                );
                continue;
            }
            overlay.heat.push(HeatPolygon {
                ring: zone.ring.clone(),
                fill: heat_color(zone.density),
                fill_triangles,
                claim_count: zone.claim_count,
            });
        }

        overlay
    }
}
