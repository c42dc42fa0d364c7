//! Frame assembly for the globe view.
//!
//! Emits one [`DisplayList`] per frame. Command order is the occlusion
//! model: base sphere, grid, landmasses, markers, atmosphere rim — markers
//! always paint after landmasses so an event is never hidden by terrain.

use events::DisasterEvent;
use foundation::color::Rgba;
use foundation::math::{Vec2, project};
use foundation::time::Time;
use geometry::{SeverityTier, globe_marker_radius};
use render::{DisplayList, DrawCommand, GradientStop};
use runtime::pulse_amplitude;

use crate::landmass::Landmass;
use crate::reveal::RevealSchedule;
use crate::state::ProjectionState;

/// Width of the atmosphere rim beyond the sphere silhouette.
pub const ATMOSPHERE_PX: f64 = 20.0;

/// Extra radius of the marker glow halo.
const GLOW_MARGIN_PX: f64 = 10.0;

/// Offset/size factor for the specular highlight on a marker.
const HIGHLIGHT_FACTOR: f64 = 0.3;

const MERIDIAN_COUNT: usize = 12;
const MERIDIAN_SPACING_DEG: f64 = 30.0;
const PARALLEL_COUNT: usize = 5;

const GRID_STROKE: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.1);
const LAND_FILL: Rgba = Rgba::new(76.0 / 255.0, 175.0 / 255.0, 80.0 / 255.0, 0.8);
const ATMOSPHERE_TINT: Rgba = Rgba::new(135.0 / 255.0, 206.0 / 255.0, 250.0 / 255.0, 0.3);

pub struct SphereRenderer;

impl SphereRenderer {
    /// Assemble one frame.
    ///
    /// Events that fail validation are silently skipped here; the owning
    /// view is responsible for logging them (once, not per frame).
    pub fn render(
        state: &ProjectionState,
        list: &[DisasterEvent],
        schedule: &RevealSchedule,
        landmasses: &[Landmass],
        time: Time,
    ) -> DisplayList {
        let mut frame = DisplayList::new();
        frame.push(DrawCommand::Clear);

        base_sphere(&mut frame, state);
        grid_lines(&mut frame, state);
        landmass_blobs(&mut frame, state, landmasses);
        markers(&mut frame, state, list, schedule, time);
        atmosphere_rim(&mut frame, state);

        frame
    }
}

fn base_sphere(frame: &mut DisplayList, state: &ProjectionState) {
    let center = state.viewport.center();
    let r = state.radius_px;
    // Light focus sits up-left of center for the shaded-ball look.
    let focus = Vec2::new(center.x - r * 0.3, center.y - r * 0.3);
    frame.push(DrawCommand::GradientDisc {
        center,
        radius: r,
        focus,
        stops: vec![
            GradientStop::new(0.0, Rgba::from_rgb8(0x4f, 0xc3, 0xf7)),
            GradientStop::new(0.7, Rgba::from_rgb8(0x19, 0x76, 0xd2)),
            GradientStop::new(1.0, Rgba::from_rgb8(0x0d, 0x47, 0xa1)),
        ],
    });
}

fn grid_lines(frame: &mut DisplayList, state: &ProjectionState) {
    let center = state.viewport.center();
    let r = state.radius_px;

    // Meridians: great circles seen edge-on become ellipses whose minor axis
    // tracks the rotated meridian angle.
    for i in 0..MERIDIAN_COUNT {
        let angle_rad = (i as f64 * MERIDIAN_SPACING_DEG + state.rotation_deg).to_radians();
        frame.push(DrawCommand::Ellipse {
            center,
            radius_x: angle_rad.cos().abs() * r,
            radius_y: r,
            stroke: GRID_STROKE,
            width: 1.0,
        });
    }

    // Parallels: horizontal slices, squashed for the oblique look.
    for i in 1..=PARALLEL_COUNT {
        let y = center.y + (r / 3.0) * (i as f64 - 2.5);
        let half_width_sq = r * r - (y - center.y) * (y - center.y);
        if half_width_sq <= 0.0 {
            continue;
        }
        let half_width = half_width_sq.sqrt();
        frame.push(DrawCommand::Ellipse {
            center: Vec2::new(center.x, y),
            radius_x: half_width,
            radius_y: half_width * 0.3,
            stroke: GRID_STROKE,
            width: 1.0,
        });
    }
}

fn landmass_blobs(frame: &mut DisplayList, state: &ProjectionState, landmasses: &[Landmass]) {
    let view = state.sphere_view();
    for mass in landmasses {
        let p = project(mass.lat_deg, mass.lng_deg, state.rotation_deg, view);
        if !p.visible {
            continue;
        }
        frame.push(DrawCommand::Disc {
            center: p.pos,
            radius: mass.extent_px * p.depth_scale,
            fill: LAND_FILL,
        });
    }
}

fn markers(
    frame: &mut DisplayList,
    state: &ProjectionState,
    list: &[DisasterEvent],
    schedule: &RevealSchedule,
    time: Time,
) {
    let view = state.sphere_view();
    for (index, event) in list.iter().enumerate() {
        if event.validate().is_err() {
            continue;
        }
        if !schedule.is_revealed(index, time) {
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

        let pulse = pulse_amplitude(time, index as f64);
        let size = globe_marker_radius(event.damage_score, p.depth_scale, pulse);
        let color = SeverityTier::for_damage_score(event.damage_score).color();

        frame.push(DrawCommand::GradientDisc {
            center: p.pos,
            radius: size + GLOW_MARGIN_PX,
            focus: p.pos,
            stops: vec![
                GradientStop::new(0.0, color.with_alpha(0.5)),
                GradientStop::new(1.0, color.with_alpha(0.0)),
            ],
        });
        frame.push(DrawCommand::Disc {
            center: p.pos,
            radius: size,
            fill: color,
        });
        frame.push(DrawCommand::Disc {
            center: Vec2::new(
                p.pos.x - size * HIGHLIGHT_FACTOR,
                p.pos.y - size * HIGHLIGHT_FACTOR,
            ),
            radius: size * HIGHLIGHT_FACTOR,
            fill: Rgba::WHITE.with_alpha(0.6),
        });
    }
}

fn atmosphere_rim(frame: &mut DisplayList, state: &ProjectionState) {
    let r = state.radius_px;
    frame.push(DrawCommand::GradientRing {
        center: state.viewport.center(),
        inner_radius: r,
        outer_radius: r + ATMOSPHERE_PX,
        stops: vec![
            GradientStop::new(0.0, ATMOSPHERE_TINT),
            GradientStop::new(1.0, ATMOSPHERE_TINT.with_alpha(0.0)),
        ],
    });
}

#[cfg(test)]
mod tests {
    use super::SphereRenderer;
    use crate::landmass::DEFAULT_LANDMASSES;
    use crate::reveal::RevealSchedule;
    use crate::state::ProjectionState;
    use events::{Category, DisasterEvent, EventId, GeoPoint, Status};
    use foundation::time::Time;
    use render::{DrawCommand, Viewport};

    fn miami_event() -> DisasterEvent {
        DisasterEvent {
            id: EventId::new("NWS-HURRICANE-1"),
            title: "Hurricane Alert - Miami, FL".to_string(),
            category: Category::Hurricane,
            position: GeoPoint::new(25.76, -80.19),
            radius_km: 50.0,
            damage_score: 90.0,
            confidence: 0.92,
            status: Status::Active,
        }
    }

    fn state() -> ProjectionState {
        ProjectionState::new(Viewport::try_new(400.0, 400.0).unwrap())
    }

    fn render(list: &[DisasterEvent], time: Time) -> render::DisplayList {
        let schedule = RevealSchedule::build(list, Time::ZERO);
        SphereRenderer::render(&state(), list, &schedule, &DEFAULT_LANDMASSES, time)
    }

    fn solid_marker_count(frame: &render::DisplayList) -> usize {
        // Marker discs are severity-colored; landmass discs are the fixed
        // green, highlights are white.
        frame
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Disc { fill, .. }
                        if fill.r > 0.5 && fill.a == 1.0
                )
            })
            .count()
    }

    #[test]
    fn frame_starts_with_clear_and_ends_with_atmosphere() {
        let frame = render(&[], Time::ZERO);
        assert!(matches!(frame.commands()[0], DrawCommand::Clear));
        assert!(matches!(
            frame.commands().last(),
            Some(DrawCommand::GradientRing { .. })
        ));
    }

    #[test]
    fn draws_seventeen_grid_ellipses() {
        let frame = render(&[], Time::ZERO);
        let ellipses = frame
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
            .count();
        // 12 meridians + 5 parallels.
        assert_eq!(ellipses, 17);
    }

    #[test]
    fn revealed_visible_marker_draws_glow_disc_highlight() {
        let frame = render(&[miami_event()], Time::ZERO);
        assert_eq!(solid_marker_count(&frame), 1);
        // Glow halo precedes the solid disc.
        let commands = frame.commands();
        let glow_index = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::GradientDisc { stops, .. } if stops.len() == 2))
            .expect("marker glow");
        assert!(matches!(
            commands[glow_index + 1],
            DrawCommand::Disc { .. }
        ));
        assert!(matches!(
            commands[glow_index + 2],
            DrawCommand::Disc { .. }
        ));
    }

    #[test]
    fn markers_draw_after_landmasses() {
        let frame = render(&[miami_event()], Time::ZERO);
        let commands = frame.commands();
        let last_land = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Disc { fill, .. } if fill.g > 0.5 && fill.r < 0.5))
            .expect("landmass");
        let marker = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Disc { fill, .. } if fill.r > 0.5 && fill.a == 1.0))
            .expect("marker");
        assert!(marker > last_land);
    }

    #[test]
    fn back_hemisphere_marker_is_culled() {
        let mut s = state();
        s.rotation_deg = 180.0;
        let list = [miami_event()];
        let schedule = RevealSchedule::build(&list, Time::ZERO);
        let frame = SphereRenderer::render(&s, &list, &schedule, &DEFAULT_LANDMASSES, Time::ZERO);
        assert_eq!(solid_marker_count(&frame), 0);
    }

    #[test]
    fn unrevealed_marker_is_withheld_until_its_offset() {
        let mut second = miami_event();
        second.id = EventId::new("NWS-HURRICANE-2");
        second.position = GeoPoint::new(27.95, -82.45);
        let list = [miami_event(), second];

        let early = render(&list, Time(0.25));
        assert_eq!(solid_marker_count(&early), 1);

        let later = render(&list, Time(0.5));
        assert_eq!(solid_marker_count(&later), 2);
    }

    #[test]
    fn malformed_event_is_skipped_not_drawn() {
        let mut bad = miami_event();
        bad.position.lat_deg = f64::NAN;
        let frame = render(&[bad], Time::ZERO);
        assert_eq!(solid_marker_count(&frame), 0);
    }

    #[test]
    fn pulse_breathes_marker_size_between_frames() {
        let list = [miami_event()];
        let a = render(&list, Time(0.0));
        let b = render(&list, Time(0.3));

        let radius_of = |frame: &render::DisplayList| {
            frame
                .commands()
                .iter()
                .find_map(|c| match c {
                    DrawCommand::Disc { radius, fill, .. } if fill.r > 0.5 && fill.a == 1.0 => {
                        Some(*radius)
                    }
                    _ => None,
                })
                .expect("marker disc")
        };
        assert_ne!(radius_of(&a), radius_of(&b));
    }
}
