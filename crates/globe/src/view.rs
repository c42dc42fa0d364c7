use std::collections::HashSet;

use events::{DisasterEvent, EventId};
use foundation::math::Vec2;
use render::{DisplayList, SurfaceError, Viewport};
use runtime::AnimationClock;

use crate::hit::hit_test;
use crate::landmass::{DEFAULT_LANDMASSES, Landmass};
use crate::reveal::RevealSchedule;
use crate::sphere::SphereRenderer;
use crate::state::ProjectionState;

/// Lifecycle of one globe instance.
///
/// `Idle → Running → Paused ⇄ Running → Disposed`. Paused only freezes
/// rotation advance; pulses keep animating. Disposed is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Running,
    Paused,
    Disposed,
}

/// Handler the shell registers to hear about marker selection.
pub type SelectHandler = Box<dyn FnMut(&EventId)>;

/// One rotating globe with its own state, clock, and reveal schedule.
///
/// Nothing here is shared between instances and nothing reads wall time:
/// the host pumps `tick()` from its animation callback and presents the
/// returned [`DisplayList`] to its surface.
///
/// Event-list updates land in a pending slot and are applied atomically at
/// the start of the next tick, so a frame never sees a partially swapped
/// list.
pub struct GlobeView {
    phase: ViewPhase,
    state: ProjectionState,
    clock: AnimationClock,
    list: Vec<DisasterEvent>,
    pending: Option<Vec<DisasterEvent>>,
    schedule: RevealSchedule,
    landmasses: Vec<Landmass>,
    warned: HashSet<EventId>,
    select_handler: Option<SelectHandler>,
}

impl GlobeView {
    /// Create a view for a host drawable of the given size.
    ///
    /// A degenerate size is a fatal initialization error, surfaced to the
    /// shell rather than retried.
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        Ok(Self::with_clock(
            Viewport::try_new(width, height)?,
            AnimationClock::default(),
        ))
    }

    /// Like [`GlobeView::new`] with an explicit clock. Tests use this to
    /// step time at whatever cadence they need.
    pub fn with_clock(viewport: Viewport, clock: AnimationClock) -> Self {
        Self {
            phase: ViewPhase::Idle,
            state: ProjectionState::new(viewport),
            clock,
            list: Vec::new(),
            pending: None,
            schedule: RevealSchedule::empty(),
            landmasses: DEFAULT_LANDMASSES.to_vec(),
            warned: HashSet::new(),
            select_handler: None,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn rotation_deg(&self) -> f64 {
        self.state.rotation_deg
    }

    /// Queue a new event-list snapshot. Applied at the next tick boundary.
    pub fn set_events(&mut self, list: Vec<DisasterEvent>) {
        if self.phase == ViewPhase::Disposed {
            return;
        }
        self.pending = Some(list);
    }

    /// Replace the default landmass table (e.g. with real boundary
    /// centroids).
    pub fn set_landmasses(&mut self, landmasses: Vec<Landmass>) {
        self.landmasses = landmasses;
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.state.auto_rotate = on;
    }

    pub fn on_event_select(&mut self, handler: impl FnMut(&EventId) + 'static) {
        self.select_handler = Some(Box::new(handler));
    }

    /// Freeze rotation. Pulse and reveal animation keep running.
    pub fn pause(&mut self) {
        if self.phase == ViewPhase::Running {
            self.phase = ViewPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == ViewPhase::Paused {
            self.phase = ViewPhase::Running;
        }
    }

    /// Tear the view down. Cancels the clock and releases event data;
    /// subsequent `tick()` calls produce nothing, ever.
    pub fn dispose(&mut self) {
        self.phase = ViewPhase::Disposed;
        self.clock.cancel();
        self.list.clear();
        self.pending = None;
        self.schedule = RevealSchedule::empty();
        self.warned.clear();
        self.select_handler = None;
    }

    /// Advance one frame and assemble its draw commands.
    ///
    /// Returns `None` once disposed. The pending event list (if any) is
    /// swapped in first, so the frame's draw set is always a subset of the
    /// latest snapshot.
    pub fn tick(&mut self) -> Option<DisplayList> {
        if self.phase == ViewPhase::Disposed {
            return None;
        }
        let frame = self.clock.tick()?;
        if self.phase == ViewPhase::Idle {
            self.phase = ViewPhase::Running;
        }

        if let Some(list) = self.pending.take() {
            self.schedule = RevealSchedule::build(&list, frame.time);
            self.list = list;
            self.warned.retain(|id| self.list.iter().any(|e| &e.id == id));
        }
        self.warn_malformed_once();

        let display = SphereRenderer::render(
            &self.state,
            &self.list,
            &self.schedule,
            &self.landmasses,
            frame.time,
        );

        // Advance after assembling so the drawn frame and any click that
        // lands before the next tick agree on the rotation.
        if self.phase == ViewPhase::Running && self.state.auto_rotate {
            self.state.advance_rotation();
        }

        Some(display)
    }

    /// Resolve a pointer event against the current frame's markers and
    /// notify the shell's handler on a hit.
    pub fn click(&mut self, x: f64, y: f64) -> Option<EventId> {
        if self.phase == ViewPhase::Disposed {
            return None;
        }
        let hit = hit_test(Vec2::new(x, y), &self.list, &self.state);
        if let Some(id) = &hit
            && let Some(handler) = &mut self.select_handler
        {
            handler(id);
        }
        hit
    }

    fn warn_malformed_once(&mut self) {
        for event in &self.list {
            if let Err(err) = event.validate()
                && !self.warned.contains(&event.id)
            {
                log::warn!("skipping malformed event {}: {err}", event.id.as_str());
                self.warned.insert(event.id.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GlobeView, ViewPhase};
    use events::{Category, DisasterEvent, EventId, GeoPoint, Status};
    use foundation::math::project;
    use render::{DrawCommand, Viewport};
    use runtime::AnimationClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(id: &str, lat: f64, lng: f64, damage: f64) -> DisasterEvent {
        DisasterEvent {
            id: EventId::new(id),
            title: id.to_string(),
            category: Category::Hurricane,
            position: GeoPoint::new(lat, lng),
            radius_km: 50.0,
            damage_score: damage,
            confidence: 0.92,
            status: Status::Active,
        }
    }

    fn quarter_second_view() -> GlobeView {
        GlobeView::with_clock(
            Viewport::try_new(400.0, 400.0).unwrap(),
            AnimationClock::new(0.25),
        )
    }

    fn marker_count(frame: &render::DisplayList) -> usize {
        frame
            .commands()
            .iter()
            .filter(|c| {
                matches!(c, DrawCommand::Disc { fill, .. } if fill.r > 0.5 && fill.a == 1.0)
            })
            .count()
    }

    #[test]
    fn degenerate_viewport_is_a_fatal_init_error() {
        assert!(GlobeView::new(0.0, 400.0).is_err());
        assert!(GlobeView::new(400.0, f64::NAN).is_err());
    }

    #[test]
    fn first_tick_moves_idle_to_running() {
        let mut view = quarter_second_view();
        assert_eq!(view.phase(), ViewPhase::Idle);
        assert!(view.tick().is_some());
        assert_eq!(view.phase(), ViewPhase::Running);
    }

    #[test]
    fn dispose_mid_animation_stops_all_further_draws() {
        let mut view = quarter_second_view();
        view.set_events(vec![event("NWS-1", 25.76, -80.19, 90.0)]);
        view.tick().unwrap();
        view.tick().unwrap();

        view.dispose();
        assert_eq!(view.phase(), ViewPhase::Disposed);
        for _ in 0..5 {
            assert!(view.tick().is_none());
        }
        assert!(view.click(200.0, 200.0).is_none());
    }

    #[test]
    fn pause_freezes_rotation_but_frames_keep_coming() {
        let mut view = quarter_second_view();
        view.tick().unwrap();
        view.pause();
        assert_eq!(view.phase(), ViewPhase::Paused);

        let before = view.rotation_deg();
        assert!(view.tick().is_some());
        assert!(view.tick().is_some());
        assert_eq!(view.rotation_deg(), before);

        view.resume();
        view.tick().unwrap();
        assert!(view.rotation_deg() > before);
    }

    #[test]
    fn pulse_still_breathes_while_paused() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        view.set_events(vec![event("NWS-1", 25.76, -80.19, 90.0)]);
        view.tick().unwrap();
        view.pause();

        let a = view.tick().unwrap();
        let b = view.tick().unwrap();
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

    #[test]
    fn markers_reveal_on_the_stagger_schedule() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        view.set_events(vec![
            event("NWS-1", 25.76, -80.19, 90.0),
            event("NWS-2", 27.95, -82.45, 75.0),
        ]);

        // Tick 0 builds the schedule: only the first marker is due.
        let f0 = view.tick().unwrap();
        assert_eq!(marker_count(&f0), 1);

        // 0.25 s elapsed: still inside the second marker's stagger.
        let f1 = view.tick().unwrap();
        assert_eq!(marker_count(&f1), 1);

        // 0.5 s elapsed: the second marker joins and stays.
        let f2 = view.tick().unwrap();
        assert_eq!(marker_count(&f2), 2);
        let f3 = view.tick().unwrap();
        assert_eq!(marker_count(&f3), 2);
    }

    #[test]
    fn snapshot_swap_applies_at_the_tick_boundary() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        let e = event("NWS-1", 25.76, -80.19, 90.0);
        view.set_events(vec![e.clone()]);

        // Before any tick, the swap has not happened; nothing is clickable.
        let pos = project(25.76, -80.19, 0.0, view.state.sphere_view()).pos;
        assert!(view.click(pos.x, pos.y).is_none());

        view.tick().unwrap();
        assert_eq!(view.click(pos.x, pos.y), Some(e.id));
    }

    #[test]
    fn retracted_event_disappears_with_the_next_frame() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        view.set_events(vec![
            event("NWS-1", 25.76, -80.19, 90.0),
            event("NWS-2", 27.95, -82.45, 75.0),
        ]);
        view.tick().unwrap();
        view.tick().unwrap();
        let full = view.tick().unwrap();
        assert_eq!(marker_count(&full), 2);

        view.set_events(vec![event("NWS-2", 27.95, -82.45, 75.0)]);
        let reduced = view.tick().unwrap();
        assert_eq!(marker_count(&reduced), 1);
    }

    #[test]
    fn click_notifies_the_registered_handler() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = selected.clone();
        view.on_event_select(move |id| sink.borrow_mut().push(id.clone()));

        view.set_events(vec![event("NWS-1", 25.76, -80.19, 90.0)]);
        view.tick().unwrap();

        let pos = project(25.76, -80.19, 0.0, view.state.sphere_view()).pos;
        let hit = view.click(pos.x, pos.y);
        assert_eq!(hit, Some(EventId::new("NWS-1")));
        assert_eq!(selected.borrow().len(), 1);
        assert_eq!(selected.borrow()[0], EventId::new("NWS-1"));
    }

    #[test]
    fn frames_present_through_a_surface_in_order() {
        use render::{RecordingSurface, Surface};

        let viewport = Viewport::try_new(400.0, 400.0).unwrap();
        let mut surface = RecordingSurface::new(viewport);
        let mut view = GlobeView::with_clock(surface.viewport(), AnimationClock::new(0.25));
        view.set_events(vec![event("NWS-1", 25.76, -80.19, 90.0)]);

        for _ in 0..3 {
            let frame = view.tick().unwrap();
            surface.present(&frame).unwrap();
        }
        assert_eq!(surface.frames().len(), 3);
        // Rotation advanced between frames, so the grid ellipses differ.
        assert_ne!(surface.frames()[0], surface.frames()[2]);
    }

    #[test]
    fn malformed_event_never_draws_but_valid_siblings_do() {
        let mut view = quarter_second_view();
        view.set_auto_rotate(false);
        let mut bad = event("NWS-BAD", 0.0, 0.0, 90.0);
        bad.radius_km = -5.0;
        view.set_events(vec![event("NWS-1", 25.76, -80.19, 90.0), bad]);

        view.tick().unwrap();
        view.tick().unwrap();
        let frame = view.tick().unwrap();
        assert_eq!(marker_count(&frame), 1);
    }
}
