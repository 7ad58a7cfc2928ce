//! Environment signals consumed in Display Mode.
//!
//! Front ends sample the device orientation and the viewport and hand the
//! result to the state machine as an [`EnvSample`]. The state machine never
//! reads the platform itself.

/// Viewport dimensions.
///
/// Units are front-end specific (CSS pixels in the browser, cells scaled by
/// the cell aspect ratio in the terminal); only the ratio matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Taller than wide. A square viewport is landscape.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// One reading of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnvSample {
    /// Orientation angle in degrees, as reported by the platform.
    pub angle: i32,
    /// Current viewport.
    pub viewport: Viewport,
}

impl EnvSample {
    /// Create a sample.
    pub fn new(angle: i32, viewport: Viewport) -> Self {
        Self { angle, viewport }
    }

    /// Device is held upside down (angle is 180° modulo a full turn).
    pub fn is_upside_down(&self) -> bool {
        self.angle.rem_euclid(360) == 180
    }

    /// Viewport is portrait.
    pub fn is_portrait(&self) -> bool {
        self.viewport.is_portrait()
    }
}

/// What prompted an environment sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvChange {
    /// Sampled when Display Mode was entered.
    Initial,
    /// Orientation-change notification.
    Orientation,
    /// Viewport resize notification.
    Resize,
}
