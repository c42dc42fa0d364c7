use events::{DisasterEvent, EventId};
use foundation::math::{Vec2, project, stable_total_cmp_f64};

use crate::state::ProjectionState;

/// Maximum pixel distance between the pointer and a projected marker center
/// for the marker to count as selected.
pub const HIT_TOLERANCE_PX: f64 = 15.0;

/// Map a pointer position back to the nearest visible marker.
///
/// There is no closed-form inverse of the projection; every event is
/// re-projected under the current rotation instead. O(n) per click, which is
/// fine at tens of concurrent events.
///
/// Ordering contract: the nearest in-tolerance marker wins; at equal
/// distance, the first match in source-list order wins (strict `<` on the
/// best distance keeps the comparison stable and deterministic).
pub fn hit_test(
    pointer: Vec2,
    list: &[DisasterEvent],
    state: &ProjectionState,
) -> Option<EventId> {
    let view = state.sphere_view();
    let mut best: Option<(f64, &EventId)> = None;

    for event in list {
        if event.validate().is_err() {
            continue;
        }
        let p = project(
            event.position.lat_deg,
            event.position.lng_deg,
            state.rotation_deg,
            view,
        );
        if !p.visible {
            continue;
        }

        let distance = pointer.distance(p.pos);
        if distance >= HIT_TOLERANCE_PX {
            continue;
        }

        let closer = match best {
            None => true,
            Some((best_distance, _)) => stable_total_cmp_f64(distance, best_distance).is_lt(),
        };
        if closer {
            best = Some((distance, &event.id));
        }
    }

    best.map(|(_, id)| id.clone())
}
