//! AutoGrid - grid container with automatic cell assignment.
//!
//! Children are assigned to cells in traversal order: one axis has a fixed
//! track count (columns if any are defined, otherwise rows) and the opposite
//! axis grows or shrinks to hold every participating child. Spans reserve
//! cells on later tracks through a pending-skip queue, and per-child track
//! overrides rewrite the owning track's size as the walk passes over them.
//!
//! The assignment is cached: it reruns only when a relevant setter, a child
//! edit, or an external resize of the grown axis marks the grid dirty. The
//! dirty flag is read once and cleared before recomputation so a pass cannot
//! re-trigger itself.

use std::collections::VecDeque;

use crate::error::LayoutError;
use crate::primitives::{Rect, Size};

use super::child::{ChildMeta, ChildSlot, Layoutable, set_if_default};
use super::length::{HorizontalAlign, Orientation, Thickness, TrackSize, VerticalAlign};
use super::tracks::{TrackList, parse_track_list};

/// A grid container that assigns children to row/column cells automatically.
pub struct AutoGrid {
    rows: TrackList,
    columns: TrackList,
    orientation: Orientation,
    auto_indexing: bool,
    /// Uniform default applied to newly grown rows.
    row_height: TrackSize,
    /// Uniform default applied to newly grown columns.
    column_width: TrackSize,
    /// Child-level defaults, written via the set-if-default policy.
    child_margin: Option<Thickness>,
    child_h_align: Option<HorizontalAlign>,
    child_v_align: Option<VerticalAlign>,
    children: Vec<ChildSlot>,
    should_reindex: bool,
    /// Fixed-axis track count cached by the last assignment pass.
    row_or_column_count: usize,
    desired: Size,
    /// Per-track content sizes resolved during measure, read during arrange.
    measured_rows: Vec<f32>,
    measured_columns: Vec<f32>,
}

impl Default for AutoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoGrid {
    pub fn new() -> Self {
        Self {
            rows: TrackList::new(),
            columns: TrackList::new(),
            orientation: Orientation::Horizontal,
            auto_indexing: true,
            row_height: TrackSize::Auto,
            column_width: TrackSize::Auto,
            child_margin: None,
            child_h_align: None,
            child_v_align: None,
            children: Vec::new(),
            should_reindex: true,
            row_or_column_count: 0,
            desired: Size::ZERO,
            measured_rows: Vec::new(),
            measured_columns: Vec::new(),
        }
    }

    // =====================================================================
    // Configuration
    //
    // Every relevant setter marks the grid dirty directly; there is no
    // hidden notification registration.
    // =====================================================================

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.mark_dirty();
    }

    pub fn auto_indexing(&self) -> bool {
        self.auto_indexing
    }

    pub fn set_auto_indexing(&mut self, enabled: bool) {
        self.auto_indexing = enabled;
        self.mark_dirty();
    }

    /// Reseed the row list from a comma-separated definition string.
    ///
    /// Blank text is ignored and leaves the current tracks in place.
    pub fn set_rows(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.rows.replace(parse_track_list(text));
        self.mark_dirty();
    }

    /// Reseed the column list from a comma-separated definition string.
    ///
    /// Blank text is ignored and leaves the current tracks in place.
    pub fn set_columns(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.columns.replace(parse_track_list(text));
        self.mark_dirty();
    }

    /// Set a uniform row height: overwrites every existing row (creating one
    /// if the list is empty) and becomes the default for grown rows.
    pub fn set_row_height(&mut self, size: TrackSize) {
        self.row_height = size;
        self.rows.set_all(size);
        self.mark_dirty();
    }

    /// Set a uniform column width: overwrites every existing column (creating
    /// one if the list is empty) and becomes the default for grown columns.
    pub fn set_column_width(&mut self, size: TrackSize) {
        self.column_width = size;
        self.columns.set_all(size);
        self.mark_dirty();
    }

    /// Set the size of one row track.
    pub fn set_row_size(&mut self, index: usize, size: TrackSize) -> Result<(), LayoutError> {
        self.rows.set_at(index, size)?;
        self.mark_dirty();
        Ok(())
    }

    /// Set the size of one column track.
    pub fn set_column_size(&mut self, index: usize, size: TrackSize) -> Result<(), LayoutError> {
        self.columns.set_at(index, size)?;
        self.mark_dirty();
        Ok(())
    }

    /// Default margin for children that have none of their own.
    pub fn set_child_margin(&mut self, margin: Option<Thickness>) {
        self.child_margin = margin;
        self.mark_dirty();
    }

    /// Default horizontal alignment for children that have none of their own.
    pub fn set_child_horizontal_alignment(&mut self, align: Option<HorizontalAlign>) {
        self.child_h_align = align;
        self.mark_dirty();
    }

    /// Default vertical alignment for children that have none of their own.
    pub fn set_child_vertical_alignment(&mut self, align: Option<VerticalAlign>) {
        self.child_v_align = align;
        self.mark_dirty();
    }

    pub fn rows(&self) -> &TrackList {
        &self.rows
    }

    pub fn columns(&self) -> &TrackList {
        &self.columns
    }

    /// Force the next measure to recompute the cell assignment.
    pub fn mark_dirty(&mut self) {
        self.should_reindex = true;
    }

    // =====================================================================
    // Children
    // =====================================================================

    /// Append a child with default metadata; returns its index.
    pub fn add_child(&mut self, element: impl Layoutable + 'static) -> usize {
        self.add_child_with(element, ChildMeta::new())
    }

    /// Append a child with explicit metadata; returns its index.
    pub fn add_child_with(&mut self, element: impl Layoutable + 'static, meta: ChildMeta) -> usize {
        self.children.push(ChildSlot::new(Box::new(element), meta));
        self.mark_dirty();
        self.children.len() - 1
    }

    /// Remove the child at `index`, if present.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Layoutable>> {
        if index < self.children.len() {
            self.mark_dirty();
            Some(self.children.remove(index).element)
        } else {
            None
        }
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_meta(&self, index: usize) -> Option<&ChildMeta> {
        self.children.get(index).map(|slot| &slot.meta)
    }

    /// Mutable metadata access; any edit may affect the assignment, so the
    /// grid is marked dirty.
    pub fn child_meta_mut(&mut self, index: usize) -> Option<&mut ChildMeta> {
        self.should_reindex = true;
        self.children.get_mut(index).map(|slot| &mut slot.meta)
    }

    // =====================================================================
    // Cell assignment
    // =====================================================================

    /// Recompute cell assignments if anything relevant changed.
    ///
    /// Runs at the start of every measure. The reindex itself is gated on
    /// the dirty flag (or an external resize of the grown axis); the
    /// set-if-default application of child-level defaults runs every pass.
    pub fn perform_layout(&mut self) {
        if self.children.is_empty() {
            // Zero children: no assignment, no track changes.
            self.should_reindex = false;
            return;
        }

        let is_vertical = self.orientation == Orientation::Vertical;

        let count_diverged = self.auto_indexing
            && if is_vertical {
                self.row_or_column_count != self.columns.len()
            } else {
                self.row_or_column_count != self.rows.len()
            };

        if self.should_reindex || count_diverged {
            // Clear before recomputing so a re-entrant invalidation cannot
            // loop the pass.
            self.should_reindex = false;

            if self.auto_indexing {
                let fixed = if !self.columns.is_empty() {
                    self.columns.len()
                } else {
                    self.rows.len()
                }
                .max(1);
                self.row_or_column_count = fixed;

                // Total cell weight: each participating child occupies its
                // primary-axis span worth of cells.
                let mut cell_count = 0usize;
                for slot in &self.children {
                    if !slot.meta.auto_index {
                        continue;
                    }
                    cell_count += if is_vertical {
                        slot.meta.row_span
                    } else {
                        slot.meta.column_span
                    };
                }

                let needed = cell_count.div_ceil(fixed);
                if !self.columns.is_empty() {
                    self.rows.ensure_count(needed, self.row_height);
                } else {
                    self.columns.ensure_count(needed, self.column_width);
                }

                tracing::debug!(
                    fixed,
                    cells = cell_count,
                    grown = needed,
                    "grid reindexed"
                );

                self.assign_cells(fixed, is_vertical);
            }
        }

        // Child-level defaults, applied every pass and never overriding an
        // explicitly set value.
        for slot in &mut self.children {
            if let Some(margin) = self.child_margin {
                set_if_default(&mut slot.meta.margin, margin);
            }
            if let Some(align) = self.child_h_align {
                set_if_default(&mut slot.meta.h_align, align);
            }
            if let Some(align) = self.child_v_align {
                set_if_default(&mut slot.meta.v_align, align);
            }
        }
    }

    /// Walk participating children in order, converting a linear cell cursor
    /// to (row, column) origins and reserving spanned cells ahead.
    fn assign_cells(&mut self, fixed: usize, is_vertical: bool) {
        let rows = &mut self.rows;
        let columns = &mut self.columns;

        let mut cursor = 0usize;
        let mut cells_to_skip: VecDeque<usize> = VecDeque::new();

        for slot in &mut self.children {
            if !slot.meta.auto_index {
                // Non-participating children keep their explicit origin.
                continue;
            }

            if cells_to_skip.front() == Some(&cursor) {
                cells_to_skip.pop_front();
                cursor += 1;
            }

            let (row, column) = if is_vertical {
                (cursor % fixed, cursor / fixed)
            } else {
                (cursor / fixed, cursor % fixed)
            };
            slot.meta.row = row;
            slot.meta.column = column;

            // A secondary-axis span reserves the same slot on the following
            // tracks so later children flow around it.
            let secondary_span = if is_vertical {
                slot.meta.column_span
            } else {
                slot.meta.row_span
            };
            for k in 1..secondary_span {
                cells_to_skip.push_back(cursor + fixed * k);
            }

            // Track overrides: last writer in traversal order wins. Indices
            // past the end of the list are ignored rather than faulting.
            if let Some(height) = slot.meta.row_height_override {
                if row < rows.len() {
                    let _ = rows.set_at(row, height);
                }
            }
            if let Some(width) = slot.meta.column_width_override {
                if column < columns.len() {
                    let _ = columns.set_at(column, width);
                }
            }

            cursor += if is_vertical {
                slot.meta.row_span
            } else {
                slot.meta.column_span
            };
        }
    }

    // =====================================================================
    // Measure / arrange
    // =====================================================================

    /// Effective track sizes for one axis: an empty list behaves as a single
    /// implicit auto track.
    fn effective_sizes(list: &TrackList) -> Vec<TrackSize> {
        if list.is_empty() {
            vec![TrackSize::Auto]
        } else {
            list.iter().map(|t| t.size).collect()
        }
    }

    fn measure_impl(&mut self, available: Size) -> Size {
        self.perform_layout();

        let row_sizes = Self::effective_sizes(&self.rows);
        let col_sizes = Self::effective_sizes(&self.columns);

        for slot in &mut self.children {
            if slot.element.is_visible() {
                slot.element.measure(available);
            }
        }

        // Content-driven track sizes: the largest unit-span child assigned to
        // the track, margins included. Multi-span children never inflate a
        // track; fixed tracks keep their configured length.
        let mut row_content = vec![0.0f32; row_sizes.len()];
        let mut col_content = vec![0.0f32; col_sizes.len()];
        for slot in &self.children {
            if !slot.element.is_visible() {
                continue;
            }
            let desired = slot.element.desired_size();
            let margin = slot.meta.margin.unwrap_or_default();
            if slot.meta.row_span == 1 {
                let row = slot.meta.row.min(row_sizes.len() - 1);
                row_content[row] = row_content[row].max(desired.height + margin.vertical());
            }
            if slot.meta.column_span == 1 {
                let column = slot.meta.column.min(col_sizes.len() - 1);
                col_content[column] = col_content[column].max(desired.width + margin.horizontal());
            }
        }

        // Star tracks measure as content; their final share of leftover
        // space is only known at arrange.
        let resolve = |sizes: &[TrackSize], content: &[f32]| -> Vec<f32> {
            sizes
                .iter()
                .zip(content)
                .map(|(size, &content)| match size {
                    TrackSize::Fixed(length) => *length,
                    TrackSize::Auto | TrackSize::Star(_) => content,
                })
                .collect()
        };
        self.measured_rows = resolve(&row_sizes, &row_content);
        self.measured_columns = resolve(&col_sizes, &col_content);

        self.desired = Size::new(
            self.measured_columns.iter().sum(),
            self.measured_rows.iter().sum(),
        );
        self.desired
    }

    /// Final extents for one axis: fixed tracks as configured, auto tracks at
    /// their measured content size, star tracks splitting the leftover by
    /// weight. The track list itself is not touched.
    fn final_extents(sizes: &[TrackSize], measured: &[f32], total: f32) -> Vec<f32> {
        let mut non_star_sum = 0.0f32;
        let mut star_weight = 0.0f32;
        for (i, size) in sizes.iter().enumerate() {
            match size {
                TrackSize::Star(w) => star_weight += w.max(0.0),
                _ => non_star_sum += measured.get(i).copied().unwrap_or(0.0),
            }
        }
        let leftover = (total - non_star_sum).max(0.0);

        sizes
            .iter()
            .enumerate()
            .map(|(i, size)| match size {
                TrackSize::Star(w) => {
                    if star_weight > 0.0 {
                        leftover * w.max(0.0) / star_weight
                    } else {
                        0.0
                    }
                }
                _ => measured.get(i).copied().unwrap_or(0.0),
            })
            .collect()
    }

    fn arrange_impl(&mut self, bounds: Rect) {
        let row_sizes = Self::effective_sizes(&self.rows);
        let col_sizes = Self::effective_sizes(&self.columns);

        let row_extents = Self::final_extents(&row_sizes, &self.measured_rows, bounds.height);
        let col_extents = Self::final_extents(&col_sizes, &self.measured_columns, bounds.width);

        // Prefix-sum offsets: offsets[i]..offsets[i + 1] is track i's extent.
        let prefix = |origin: f32, extents: &[f32]| -> Vec<f32> {
            let mut offsets = Vec::with_capacity(extents.len() + 1);
            let mut acc = origin;
            offsets.push(acc);
            for extent in extents {
                acc += extent;
                offsets.push(acc);
            }
            offsets
        };
        let row_offsets = prefix(bounds.y, &row_extents);
        let col_offsets = prefix(bounds.x, &col_extents);

        for slot in &mut self.children {
            // Out-of-range origins are clamped to the last track; spans are
            // clipped at the end of the axis.
            let row0 = slot.meta.row.min(row_extents.len() - 1);
            let col0 = slot.meta.column.min(col_extents.len() - 1);
            let row1 = (row0 + slot.meta.row_span).min(row_extents.len());
            let col1 = (col0 + slot.meta.column_span).min(col_extents.len());

            let cell = Rect::new(
                col_offsets[col0],
                row_offsets[row0],
                col_offsets[col1] - col_offsets[col0],
                row_offsets[row1] - row_offsets[row0],
            );

            let margin = slot.meta.margin.unwrap_or_default();
            let cell = cell.inset(margin.left, margin.top, margin.right, margin.bottom);

            let desired = slot.element.desired_size();
            let (x, width) = match slot.meta.h_align.unwrap_or_default() {
                HorizontalAlign::Stretch => (cell.x, cell.width),
                HorizontalAlign::Left => (cell.x, desired.width.min(cell.width)),
                HorizontalAlign::Center => {
                    let width = desired.width.min(cell.width);
                    (cell.x + (cell.width - width) / 2.0, width)
                }
                HorizontalAlign::Right => {
                    let width = desired.width.min(cell.width);
                    (cell.right() - width, width)
                }
            };
            let (y, height) = match slot.meta.v_align.unwrap_or_default() {
                VerticalAlign::Stretch => (cell.y, cell.height),
                VerticalAlign::Top => (cell.y, desired.height.min(cell.height)),
                VerticalAlign::Center => {
                    let height = desired.height.min(cell.height);
                    (cell.y + (cell.height - height) / 2.0, height)
                }
                VerticalAlign::Bottom => {
                    let height = desired.height.min(cell.height);
                    (cell.bottom() - height, height)
                }
            };

            slot.element.arrange(Rect::new(x, y, width, height));
        }
    }
}

impl Layoutable for AutoGrid {
    fn measure(&mut self, available: Size) -> Size {
        self.measure_impl(available)
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, bounds: Rect) {
        self.arrange_impl(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::child::testing::Probe;

    fn grid_with_columns(defs: &str) -> AutoGrid {
        let mut grid = AutoGrid::new();
        grid.set_columns(defs);
        grid
    }

    #[test]
    fn test_opposite_axis_count_is_ceiling() {
        // 3 columns, 7 unit-span children -> ceil(7 / 3) = 3 rows.
        let mut grid = grid_with_columns("Auto,Auto,Auto");
        for _ in 0..7 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(300.0, 300.0));

        assert_eq!(grid.rows().len(), 3);
        // Last child lands alone on the last row, column 0.
        let meta = grid.child_meta(6).unwrap();
        assert_eq!((meta.row, meta.column), (2, 0));
    }

    #[test]
    fn test_children_fill_rows_in_order() {
        let mut grid = grid_with_columns("Auto,Auto");
        for _ in 0..4 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(100.0, 100.0));

        let cells: Vec<(usize, usize)> = (0..4)
            .map(|i| {
                let meta = grid.child_meta(i).unwrap();
                (meta.row, meta.column)
            })
            .collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_non_participating_child_keeps_position() {
        let mut grid = grid_with_columns("Auto,Auto");
        let (fixed, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(fixed, ChildMeta::new().auto_index(false).cell(5, 7));
        for _ in 0..3 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(100.0, 100.0));

        let meta = grid.child_meta(0).unwrap();
        assert_eq!((meta.row, meta.column), (5, 7));
        // Participating siblings are assigned as if the opted-out child were
        // absent.
        let meta = grid.child_meta(1).unwrap();
        assert_eq!((meta.row, meta.column), (0, 0));
    }

    #[test]
    fn test_row_span_reserves_cells_below() {
        let mut grid = grid_with_columns("Auto,Auto");
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().row_span(2));
        let (b, _) = Probe::new(10.0, 10.0);
        grid.add_child(b);
        let (c, _) = Probe::new(10.0, 10.0);
        grid.add_child(c);
        grid.measure(Size::new(100.0, 100.0));

        let a = grid.child_meta(0).unwrap();
        let b = grid.child_meta(1).unwrap();
        let c = grid.child_meta(2).unwrap();
        assert_eq!((a.row, a.column), (0, 0));
        assert_eq!((b.row, b.column), (0, 1));
        // Cell (1, 0) is reserved by the span; the third child flows past it.
        assert_eq!((c.row, c.column), (1, 1));
    }

    #[test]
    fn test_spanned_ranges_do_not_overlap() {
        let mut grid = grid_with_columns("Auto,Auto,Auto");
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().row_span(2));
        for _ in 0..5 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(100.0, 100.0));

        let mut occupied = std::collections::HashSet::new();
        for i in 0..grid.child_count() {
            let meta = grid.child_meta(i).unwrap();
            for r in meta.row..meta.row + meta.row_span {
                for c in meta.column..meta.column + meta.column_span {
                    assert!(occupied.insert((r, c)), "cell ({r}, {c}) assigned twice");
                }
            }
        }
    }

    #[test]
    fn test_vertical_orientation_fills_columns_first() {
        let mut grid = AutoGrid::new();
        grid.set_orientation(Orientation::Vertical);
        grid.set_rows("Auto,Auto");
        for _ in 0..4 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(100.0, 100.0));

        let cells: Vec<(usize, usize)> = (0..4)
            .map(|i| {
                let meta = grid.child_meta(i).unwrap();
                (meta.row, meta.column)
            })
            .collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        // Columns grew to hold the overflow.
        assert_eq!(grid.columns().len(), 2);
    }

    #[test]
    fn test_grown_tracks_use_uniform_default() {
        let mut grid = grid_with_columns("100,100");
        grid.set_row_height(TrackSize::Fixed(30.0));
        for _ in 0..4 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(300.0, 300.0));

        assert_eq!(grid.rows().len(), 2);
        assert!(
            grid.rows()
                .iter()
                .all(|t| t.size == TrackSize::Fixed(30.0))
        );
    }

    #[test]
    fn test_shrinking_truncates_trailing_rows() {
        let mut grid = grid_with_columns("Auto,Auto");
        for _ in 0..6 {
            let (probe, _) = Probe::new(10.0, 10.0);
            grid.add_child(probe);
        }
        grid.measure(Size::new(100.0, 100.0));
        assert_eq!(grid.rows().len(), 3);

        grid.remove_child(5);
        grid.remove_child(4);
        grid.remove_child(3);
        grid.remove_child(2);
        grid.measure(Size::new(100.0, 100.0));
        assert_eq!(grid.rows().len(), 1);
    }

    #[test]
    fn test_zero_children_leaves_tracks_alone() {
        let mut grid = grid_with_columns("Auto,Auto");
        grid.set_rows("Auto,Auto,Auto");
        let size = grid.measure(Size::new(100.0, 100.0));

        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.columns().len(), 2);
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_track_override_last_writer_wins() {
        let mut grid = grid_with_columns("Auto,Auto");
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().row_height_override(TrackSize::Fixed(40.0)));
        let (b, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(b, ChildMeta::new().row_height_override(TrackSize::Fixed(64.0)));
        grid.measure(Size::new(100.0, 100.0));

        // Both children share row 0; the later one in traversal order wins.
        assert_eq!(grid.rows().get(0).unwrap().size, TrackSize::Fixed(64.0));
    }

    #[test]
    fn test_set_if_default_respects_explicit_values() {
        let mut grid = grid_with_columns("Auto,Auto");
        grid.set_child_margin(Some(Thickness::all(2.0)));
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().margin(Thickness::all(9.0)));
        let (b, _) = Probe::new(10.0, 10.0);
        grid.add_child(b);
        grid.measure(Size::new(100.0, 100.0));

        assert_eq!(grid.child_meta(0).unwrap().margin, Some(Thickness::all(9.0)));
        assert_eq!(grid.child_meta(1).unwrap().margin, Some(Thickness::all(2.0)));
    }

    #[test]
    fn test_blank_definition_text_is_ignored() {
        let mut grid = grid_with_columns("100,200");
        grid.set_columns("   ");
        assert_eq!(grid.columns().len(), 2);
    }

    #[test]
    fn test_indexed_track_mutation_out_of_range() {
        let mut grid = grid_with_columns("100");
        assert_eq!(
            grid.set_column_size(4, TrackSize::Auto),
            Err(LayoutError::TrackIndexOutOfRange { index: 4, count: 1 })
        );
        assert!(grid.set_column_size(0, TrackSize::Auto).is_ok());
    }

    #[test]
    fn test_measure_sums_track_sizes() {
        let mut grid = grid_with_columns("50,*");
        let (a, _) = Probe::new(20.0, 10.0);
        grid.add_child(a);
        let (b, _) = Probe::new(20.0, 10.0);
        grid.add_child(b);
        let desired = grid.measure(Size::new(200.0, 100.0));

        // Fixed column at 50, star column measures as content (20), single
        // auto row holds the tallest child (10).
        assert_eq!(desired, Size::new(70.0, 10.0));
    }

    #[test]
    fn test_arrange_distributes_star_leftover() {
        let mut grid = grid_with_columns("50,*");
        let (a, state_a) = Probe::new(20.0, 10.0);
        grid.add_child(a);
        let (b, state_b) = Probe::new(20.0, 10.0);
        grid.add_child(b);
        grid.measure(Size::new(200.0, 100.0));
        grid.arrange(Rect::new(0.0, 0.0, 200.0, 40.0));

        // Star column takes 200 - 50 = 150; default alignment stretches.
        assert_eq!(
            state_a.borrow().arranged.unwrap(),
            Rect::new(0.0, 0.0, 50.0, 10.0)
        );
        assert_eq!(
            state_b.borrow().arranged.unwrap(),
            Rect::new(50.0, 0.0, 150.0, 10.0)
        );
    }

    #[test]
    fn test_arrange_star_weights_split_proportionally() {
        let mut grid = grid_with_columns("*,3*");
        let (a, state_a) = Probe::new(0.0, 10.0);
        grid.add_child(a);
        let (b, state_b) = Probe::new(0.0, 10.0);
        grid.add_child(b);
        grid.measure(Size::new(400.0, 100.0));
        grid.arrange(Rect::new(0.0, 0.0, 400.0, 10.0));

        assert_eq!(state_a.borrow().arranged.unwrap().width, 100.0);
        assert_eq!(state_b.borrow().arranged.unwrap().width, 300.0);
        assert_eq!(state_b.borrow().arranged.unwrap().x, 100.0);
    }

    #[test]
    fn test_margin_and_alignment_inside_cell() {
        let mut grid = grid_with_columns("100");
        let (a, state) = Probe::new(20.0, 10.0);
        grid.add_child_with(
            a,
            ChildMeta::new()
                .margin(Thickness::all(5.0))
                .h_align(HorizontalAlign::Right)
                .v_align(VerticalAlign::Top),
        );
        grid.measure(Size::new(100.0, 100.0));
        grid.arrange(Rect::new(0.0, 0.0, 100.0, 60.0));

        let rect = state.borrow().arranged.unwrap();
        // Cell is 100 wide inset to 5..95; right-aligned at desired width.
        assert_eq!(rect.x, 75.0);
        assert_eq!(rect.width, 20.0);
        assert_eq!(rect.y, 5.0);
        assert_eq!(rect.height, 10.0);
    }

    #[test]
    fn test_out_of_range_placement_is_clamped() {
        let mut grid = grid_with_columns("40,40");
        let (a, state) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().auto_index(false).cell(9, 9));
        grid.measure(Size::new(100.0, 100.0));
        grid.arrange(Rect::new(0.0, 0.0, 80.0, 30.0));

        // Clamped into the last row/column instead of faulting.
        let rect = state.borrow().arranged.unwrap();
        assert_eq!(rect.x, 40.0);
        assert_eq!(rect.width, 40.0);
    }

    #[test]
    fn test_column_span_advances_cursor() {
        let mut grid = grid_with_columns("Auto,Auto,Auto");
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().column_span(2));
        let (b, _) = Probe::new(10.0, 10.0);
        grid.add_child(b);
        let (c, _) = Probe::new(10.0, 10.0);
        grid.add_child(c);
        grid.measure(Size::new(100.0, 100.0));

        let b = grid.child_meta(1).unwrap();
        let c = grid.child_meta(2).unwrap();
        assert_eq!((b.row, b.column), (0, 2));
        assert_eq!((c.row, c.column), (1, 0));
    }

    #[test]
    fn test_auto_indexing_disabled_assigns_nothing() {
        let mut grid = grid_with_columns("Auto,Auto");
        grid.set_auto_indexing(false);
        let (a, _) = Probe::new(10.0, 10.0);
        grid.add_child_with(a, ChildMeta::new().cell(1, 1));
        let (b, _) = Probe::new(10.0, 10.0);
        grid.add_child(b);
        grid.measure(Size::new(100.0, 100.0));

        assert_eq!(grid.rows().len(), 0);
        let a = grid.child_meta(0).unwrap();
        assert_eq!((a.row, a.column), (1, 1));
        let b = grid.child_meta(1).unwrap();
        assert_eq!((b.row, b.column), (0, 0));
    }
}
