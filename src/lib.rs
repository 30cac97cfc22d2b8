//! lattice: auto-indexing grid and fill-aware stack layout containers.
//!
//! Two retained-mode layout containers built on a two-phase measure/arrange
//! protocol:
//!
//! - [`AutoGrid`] assigns children to grid cells automatically in traversal
//!   order. One axis has a fixed track count (columns if defined, otherwise
//!   rows); the opposite axis grows and shrinks to hold every participating
//!   child. Spans reserve cells ahead, per-child overrides rewrite track
//!   sizes, and container-level child defaults apply with a set-if-default
//!   policy.
//! - [`StackPanel`] flows children along one axis with a fixed gap and a
//!   per-child fill mode: Auto children take their desired size, Fill
//!   children split the leftover space equally, Ignored children drop out
//!   of the space accounting entirely.
//!
//! # Usage
//!
//! ```ignore
//! use lattice::{AutoGrid, ChildMeta, Rect, Size, TrackSize, Layoutable};
//!
//! let mut grid = AutoGrid::new();
//! grid.set_columns("100,*,Auto");
//! grid.add_child(label);
//! grid.add_child_with(editor, ChildMeta::new().column_span(2));
//!
//! let desired = grid.measure(Size::new(800.0, 600.0));
//! grid.arrange(Rect::from_origin_size(Point::ORIGIN, desired));
//! ```
//!
//! All layout is single-threaded and synchronous: the host serializes
//! measure/arrange invocations, and a pass always runs to completion.

pub mod error;
pub mod primitives;

pub mod layout;

// Re-export core types
pub use error::LayoutError;
pub use primitives::{Point, Rect, Size};

pub use layout::{
    AutoGrid, ChildMeta, ChildSlot, FillMode, HorizontalAlign, Layoutable, Orientation,
    StackPanel, Thickness, Track, TrackList, TrackSize, VerticalAlign, parse_track_list,
    set_if_default,
};
