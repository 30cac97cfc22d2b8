//! Sizing and placement types shared by both containers.

/// Size specification for a grid track (row or column).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackSize {
    /// Fixed length in layout units.
    Fixed(f32),
    /// Sized by the largest child assigned to the track.
    #[default]
    Auto,
    /// Shares leftover space proportionally to the weight.
    Star(f32),
}

impl TrackSize {
    /// The proportional weight, or 0 for non-star tracks.
    pub fn weight(&self) -> f32 {
        match self {
            TrackSize::Star(w) => *w,
            _ => 0.0,
        }
    }

    /// Whether this track participates in leftover-space distribution.
    pub fn is_star(&self) -> bool {
        matches!(self, TrackSize::Star(_))
    }
}

/// Flow direction of a container's primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Per-child sizing policy for the stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Sized by the child's own desired size.
    #[default]
    Auto,
    /// Shares leftover primary-axis space equally with other Fill children.
    Fill,
    /// Excluded from gap accounting and remaining-space computation.
    Ignored,
}

/// Horizontal placement of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Stretch,
    Left,
    Center,
    Right,
}

/// Vertical placement of a child inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Stretch,
    Top,
    Center,
    Bottom,
}

/// Insets around a child, applied inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    /// Create insets with explicit values for each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Uniform insets on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Symmetric insets (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
