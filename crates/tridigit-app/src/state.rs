//! Observable application state types.
//!
//! [`Mode`] is the single piece of state that decides what is rendered. The
//! display-only flags live inside [`Showing`], so they cannot be set while no
//! number is displayed.

use std::fmt;

use crate::{DisplayNumber, EnvSample, InputBuffer, Transform};

/// Identifies one continuous stay in Display Mode.
///
/// Allocated fresh on every entry. Timer ticks carry the session that
/// produced them so stale ticks can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The session following this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display-only flags.
///
/// Transitions are by value; each returns the updated flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFlags {
    /// Horizontally flipped.
    pub mirrored: bool,
    /// Device held upside down.
    pub upside_down: bool,
    /// Viewport taller than wide.
    pub portrait: bool,
}

impl DisplayFlags {
    /// Flags with the mirror toggled.
    #[must_use]
    pub fn toggle_mirror(self) -> Self {
        Self { mirrored: !self.mirrored, ..self }
    }

    /// Flags with orientation and aspect recomputed from `sample`. The mirror
    /// flag is untouched.
    #[must_use]
    pub fn with_sample(self, sample: EnvSample) -> Self {
        Self { upside_down: sample.is_upside_down(), portrait: sample.is_portrait(), ..self }
    }

    /// Active transforms in composition order.
    pub fn transforms(self) -> Vec<Transform> {
        Transform::ORDER
            .into_iter()
            .filter(|t| match t {
                Transform::PortraitRotation => self.portrait,
                Transform::UpsideDown => self.upside_down,
                Transform::Mirror => self.mirrored,
            })
            .collect()
    }

    /// No flag set.
    pub fn is_cleared(self) -> bool {
        self == Self::default()
    }
}

/// State while a number is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showing {
    /// The committed number.
    pub number: DisplayNumber,
    /// Current display flags.
    pub flags: DisplayFlags,
    /// Session this display belongs to.
    pub session: SessionId,
}

/// The two mutually exclusive render modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Collecting digits.
    Input(InputBuffer),
    /// Showing a committed number.
    Showing(Showing),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Input(InputBuffer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;

    #[test]
    fn sample_keeps_mirror() {
        let flags = DisplayFlags::default().toggle_mirror();
        let flags = flags.with_sample(EnvSample::new(180, Viewport::new(300.0, 600.0)));

        assert_eq!(flags, DisplayFlags { mirrored: true, upside_down: true, portrait: true });
    }

    #[test]
    fn sample_clears_stale_orientation() {
        let flags = DisplayFlags { mirrored: false, upside_down: true, portrait: true };
        let flags = flags.with_sample(EnvSample::new(0, Viewport::new(600.0, 300.0)));

        assert!(flags.is_cleared());
    }

    #[test]
    fn transforms_follow_fixed_order() {
        let flags = DisplayFlags { mirrored: true, upside_down: false, portrait: true };
        assert_eq!(flags.transforms(), vec![Transform::PortraitRotation, Transform::Mirror]);
        assert!(DisplayFlags::default().transforms().is_empty());
    }
}
