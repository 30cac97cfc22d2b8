//! Layout containers for a retained-mode UI tree.
//!
//! Two engines share one measure/arrange contract:
//!
//! - [`AutoGrid`]: assigns children to row/column cells automatically in
//!   traversal order, growing the non-fixed axis to fit.
//! - [`StackPanel`]: lays children out along one axis with a three-way
//!   sizing policy (auto, fill, ignored).
//!
//! The host invokes `measure(available)` then `arrange(final)` once per
//! layout pass; containers recurse into their children through the same
//! [`Layoutable`] protocol.

pub mod length;
pub mod tracks;

// tracks must come before the containers (they own TrackLists)
pub mod child;
pub mod grid;
pub mod stack;

// Re-export core types
pub use length::{FillMode, HorizontalAlign, Orientation, Thickness, TrackSize, VerticalAlign};
pub use tracks::{Track, TrackList, parse_track_list};

// Re-export child types
pub use child::{ChildMeta, ChildSlot, Layoutable, set_if_default};

// Re-export containers
pub use grid::AutoGrid;
pub use stack::StackPanel;
