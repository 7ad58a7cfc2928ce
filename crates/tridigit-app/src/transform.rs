//! Visual transforms applied to the displayed number.
//!
//! Up to three transforms are active at once. They are always listed in the
//! same order (portrait rotation, upside-down rotation, mirror) so that front
//! ends compose them identically. Written as a CSS `transform` list the
//! functions apply right to left: the mirror hits the element first.

/// A single transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Quarter turn clockwise, used when the viewport is portrait.
    PortraitRotation,
    /// Half turn, used when the device is upside down.
    UpsideDown,
    /// Horizontal flip, toggled by the mirror timer.
    Mirror,
}

impl Transform {
    /// Canonical order in which transforms compose.
    pub const ORDER: [Transform; 3] = [Self::PortraitRotation, Self::UpsideDown, Self::Mirror];

    /// CSS class marking the transform on the wrapper element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::PortraitRotation => "portrait",
            Self::UpsideDown => "upside-down",
            Self::Mirror => "mirrored",
        }
    }

    /// CSS transform function.
    pub fn css_function(self) -> &'static str {
        match self {
            Self::PortraitRotation => "rotate(90deg)",
            Self::UpsideDown => "rotate(180deg)",
            Self::Mirror => "scaleX(-1)",
        }
    }
}

/// Join transforms into a CSS `transform` value. Empty input yields `none`.
pub fn css_transform(transforms: &[Transform]) -> String {
    if transforms.is_empty() {
        return "none".to_string();
    }
    transforms.iter().map(|t| t.css_function()).collect::<Vec<_>>().join(" ")
}
