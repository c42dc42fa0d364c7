use foundation::math::SphereView;
use render::Viewport;

/// Degrees of rotation added per tick while auto-rotate is on.
pub const ROTATION_STEP_DEG: f64 = 0.5;

/// Gap between the sphere silhouette and the viewport edge, leaving room for
/// the atmosphere rim.
pub const SPHERE_MARGIN_PX: f64 = 20.0;

/// Mutable view state for one globe instance.
///
/// Owned exclusively by the view's render loop; projection and hit-testing
/// read it. There are no ambient globals: every instance carries its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionState {
    /// Current rotation in degrees, kept in `[0, 360)`.
    pub rotation_deg: f64,
    pub auto_rotate: bool,
    pub viewport: Viewport,
    pub radius_px: f64,
}

impl ProjectionState {
    pub fn new(viewport: Viewport) -> Self {
        let radius_px = (viewport.min_extent() / 2.0 - SPHERE_MARGIN_PX).max(1.0);
        Self {
            rotation_deg: 0.0,
            auto_rotate: true,
            viewport,
            radius_px,
        }
    }

    /// Screen placement of the sphere for the projector.
    pub fn sphere_view(&self) -> SphereView {
        SphereView::new(self.viewport.center(), self.radius_px)
    }

    /// Advance by one rotation step, wrapping mod 360.
    pub fn advance_rotation(&mut self) {
        self.rotation_deg = (self.rotation_deg + ROTATION_STEP_DEG).rem_euclid(360.0);
    }
}
