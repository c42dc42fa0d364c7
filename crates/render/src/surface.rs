use thiserror::Error;

use crate::command::DisplayList;
use foundation::math::Vec2;

/// Fatal surface initialization or presentation failure.
///
/// These are surfaced to the application shell once and never retried; the
/// engine has no way to recover a missing drawing context.
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("drawing context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("degenerate viewport {width}x{height}")]
    DegenerateViewport { width: f64, height: f64 },
}

/// Pixel dimensions of the drawable area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Validate host-supplied dimensions. Zero, negative, or non-finite
    /// sizes are a fatal initialization error.
    pub fn try_new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::DegenerateViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Host-side drawable the engine presents to.
///
/// The web shell backs this with a 2D canvas context; tests use
/// [`RecordingSurface`].
pub trait Surface {
    fn viewport(&self) -> Viewport;
    fn present(&mut self, frame: &DisplayList) -> Result<(), SurfaceError>;
}

/// Surface that records every presented frame. Used by tests and headless
/// runs to assert on draw sequences.
#[derive(Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    frames: Vec<DisplayList>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[DisplayList] {
        &self.frames
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, frame: &DisplayList) -> Result<(), SurfaceError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
