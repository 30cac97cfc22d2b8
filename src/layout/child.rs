//! The measure/arrange protocol and per-child layout metadata.
//!
//! Containers own an ordered list of children (insertion order is layout
//! order). Each slot pairs the child element with a metadata record — the
//! explicit side-table that replaces ambient attached-property lookup.

use crate::primitives::{Rect, Size};

use super::length::{FillMode, HorizontalAlign, Thickness, TrackSize, VerticalAlign};

/// Two-phase layout protocol.
///
/// The host calls `measure` with an available-size constraint, then later
/// `arrange` with a final rectangle, once per layout pass. `measure` may be
/// invoked multiple times with different constraints before a single
/// `arrange`; implementations must be idempotent and derive everything from
/// current state. `measure` caches the reported size so the parent can read
/// it back through `desired_size` during its own arrange.
pub trait Layoutable {
    /// Report the desired size given an available-size constraint.
    fn measure(&mut self, available: Size) -> Size;

    /// The size last reported by `measure`.
    fn desired_size(&self) -> Size;

    /// Accept the final position and size for this pass.
    fn arrange(&mut self, bounds: Rect);

    /// Invisible children are skipped for sizing but still placed.
    fn is_visible(&self) -> bool {
        true
    }
}

/// Per-child layout metadata.
///
/// `row`/`column` are outputs of the grid's cell-assignment pass for
/// participating children, and plain inputs for children that opted out of
/// auto-indexing. The `Option` fields are the set-if-default targets: the
/// grid writes its child-level defaults only into fields that are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildMeta {
    /// Assigned row origin.
    pub row: usize,
    /// Assigned column origin.
    pub column: usize,
    /// Consecutive rows occupied (minimum 1).
    pub row_span: usize,
    /// Consecutive columns occupied (minimum 1).
    pub column_span: usize,
    /// Whether the child participates in auto-indexing.
    pub auto_index: bool,
    /// Overwrites the owning row's height when assigned.
    pub row_height_override: Option<TrackSize>,
    /// Overwrites the owning column's width when assigned.
    pub column_width_override: Option<TrackSize>,
    /// Sizing policy inside a stack container.
    pub fill: FillMode,
    /// Insets inside the cell; `None` means unset.
    pub margin: Option<Thickness>,
    /// Horizontal placement inside the cell; `None` means unset.
    pub h_align: Option<HorizontalAlign>,
    /// Vertical placement inside the cell; `None` means unset.
    pub v_align: Option<VerticalAlign>,
}

impl Default for ChildMeta {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
            auto_index: true,
            row_height_override: None,
            column_width_override: None,
            fill: FillMode::Auto,
            margin: None,
            h_align: None,
            v_align: None,
        }
    }
}

impl ChildMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell origin explicitly (useful with `auto_index(false)`).
    pub fn cell(mut self, row: usize, column: usize) -> Self {
        self.row = row;
        self.column = column;
        self
    }

    /// Set the row span (clamped to at least 1).
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span.max(1);
        self
    }

    /// Set the column span (clamped to at least 1).
    pub fn column_span(mut self, span: usize) -> Self {
        self.column_span = span.max(1);
        self
    }

    /// Opt in or out of auto-indexing.
    pub fn auto_index(mut self, participate: bool) -> Self {
        self.auto_index = participate;
        self
    }

    /// Override the owning row's height.
    pub fn row_height_override(mut self, size: TrackSize) -> Self {
        self.row_height_override = Some(size);
        self
    }

    /// Override the owning column's width.
    pub fn column_width_override(mut self, size: TrackSize) -> Self {
        self.column_width_override = Some(size);
        self
    }

    /// Set the stack fill mode.
    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    /// Set an explicit margin.
    pub fn margin(mut self, margin: Thickness) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set explicit horizontal alignment.
    pub fn h_align(mut self, align: HorizontalAlign) -> Self {
        self.h_align = Some(align);
        self
    }

    /// Set explicit vertical alignment.
    pub fn v_align(mut self, align: VerticalAlign) -> Self {
        self.v_align = Some(align);
        self
    }
}

/// One entry in a container's ordered child list.
pub struct ChildSlot {
    pub element: Box<dyn Layoutable>,
    pub meta: ChildMeta,
}

impl ChildSlot {
    pub fn new(element: Box<dyn Layoutable>, meta: ChildMeta) -> Self {
        Self { element, meta }
    }
}

/// Write `value` into `slot` only if it hasn't been explicitly set.
///
/// Returns whether the write happened. This is the set-if-default policy:
/// container-level child defaults never override a per-child value.
pub fn set_if_default<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_none() {
        *slot = Some(value);
        true
    } else {
        false
    }
}
