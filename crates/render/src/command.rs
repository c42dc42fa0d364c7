use foundation::color::Rgba;
use foundation::math::Vec2;

/// One stop of a radial gradient. `offset` is in `[0, 1]` from the gradient
/// origin to its outer radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Retained draw command in screen space.
///
/// The engine emits these instead of touching a canvas directly; the host
/// surface replays them in order. Order is the occlusion model: later
/// commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface to transparent.
    Clear,
    /// Solid filled circle.
    Disc {
        center: Vec2,
        radius: f64,
        fill: Rgba,
    },
    /// Circle filled with a radial gradient whose origin may be offset from
    /// the circle center (the sphere's light focus, a marker's glow core).
    GradientDisc {
        center: Vec2,
        radius: f64,
        focus: Vec2,
        stops: Vec<GradientStop>,
    },
    /// Radial gradient between two radii, transparent outside. Used for the
    /// atmosphere rim.
    GradientRing {
        center: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<GradientStop>,
    },
    /// Stroked axis-aligned ellipse outline (grid meridians and parallels).
    Ellipse {
        center: Vec2,
        radius_x: f64,
        radius_y: f64,
        stroke: Rgba,
        width: f32,
    },
}

/// An ordered frame's worth of draw commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
