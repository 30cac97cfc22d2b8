//! StackPanel - single-axis container with a three-way fill policy.
//!
//! Children flow along one axis separated by a fixed gap. Auto children take
//! their own desired size, Fill children split the leftover space equally,
//! and Ignored children are excluded from gap accounting and the
//! remaining-space computation entirely. The cross axis always stretches.
//!
//! Both passes are stateless: everything is derived from the current child
//! list on every call, so the host may re-measure with a different available
//! size any number of times before arranging.

use crate::primitives::{Rect, Size};

use super::child::{ChildMeta, ChildSlot, Layoutable};
use super::length::{FillMode, Orientation};

/// A stack container that lays children out along one axis.
pub struct StackPanel {
    orientation: Orientation,
    /// Gap between consecutive non-collapsed children.
    spacing: f32,
    children: Vec<ChildSlot>,
    desired: Size,
}

impl Default for StackPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StackPanel {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Vertical,
            spacing: 0.0,
            children: Vec::new(),
            desired: Size::ZERO,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    /// Append a child with the given fill mode; returns its index.
    pub fn add_child(&mut self, element: impl Layoutable + 'static, fill: FillMode) -> usize {
        self.children
            .push(ChildSlot::new(Box::new(element), ChildMeta::new().fill(fill)));
        self.children.len() - 1
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_fill(&self, index: usize) -> Option<FillMode> {
        self.children.get(index).map(|slot| slot.meta.fill)
    }

    pub fn set_child_fill(&mut self, index: usize, fill: FillMode) {
        if let Some(slot) = self.children.get_mut(index) {
            slot.meta.fill = fill;
        }
    }

    /// Remove the child at `index`, if present.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Layoutable>> {
        if index < self.children.len() {
            Some(self.children.remove(index).element)
        } else {
            None
        }
    }

    /// Total inter-child gap: one gap between each pair of visible,
    /// non-ignored children.
    fn total_gap(&self) -> f32 {
        let countable = self
            .children
            .iter()
            .filter(|slot| slot.element.is_visible() && slot.meta.fill != FillMode::Ignored)
            .count();
        self.spacing * countable.saturating_sub(1) as f32
    }

    fn measure_impl(&mut self, available: Size) -> Size {
        let is_horizontal = self.orientation == Orientation::Horizontal;
        let total_gap = self.total_gap();

        let mut parent_width = 0.0f32;
        let mut parent_height = 0.0f32;
        let mut accumulated_width = 0.0f32;
        let mut accumulated_height = 0.0f32;

        // First sub-pass: Auto children against the space the earlier ones
        // left over. Invisible children are still measured but consume
        // nothing.
        for slot in &mut self.children {
            if slot.meta.fill != FillMode::Auto {
                continue;
            }
            let constraint = Size::new(
                (available.width - accumulated_width).max(0.0),
                (available.height - accumulated_height).max(0.0),
            );
            let child_desired = slot.element.measure(constraint);
            if !slot.element.is_visible() {
                continue;
            }
            if is_horizontal {
                accumulated_width += child_desired.width;
                parent_height = parent_height.max(accumulated_height + child_desired.height);
            } else {
                parent_width = parent_width.max(accumulated_width + child_desired.width);
                accumulated_height += child_desired.height;
            }
        }

        // Gaps count against the space left for Fill children.
        if is_horizontal {
            accumulated_width += total_gap;
        } else {
            accumulated_height += total_gap;
        }

        let fill_count = self
            .children
            .iter()
            .filter(|slot| slot.meta.fill == FillMode::Fill && slot.element.is_visible())
            .count();
        let remaining = if is_horizontal {
            (available.width - accumulated_width).max(0.0)
        } else {
            (available.height - accumulated_height).max(0.0)
        };
        // Zero Fill children: share is zero, never a division fault.
        let fill_size = if fill_count > 0 {
            remaining / fill_count as f32
        } else {
            0.0
        };

        tracing::trace!(fill_count, fill_size, total_gap, "stack measure");

        // Second sub-pass: every Fill child gets an equal share on the
        // primary axis.
        for slot in &mut self.children {
            if slot.meta.fill != FillMode::Fill {
                continue;
            }
            let constraint = if is_horizontal {
                Size::new(fill_size, (available.height - accumulated_height).max(0.0))
            } else {
                Size::new((available.width - accumulated_width).max(0.0), fill_size)
            };
            let child_desired = slot.element.measure(constraint);
            if !slot.element.is_visible() {
                continue;
            }
            if is_horizontal {
                accumulated_width += child_desired.width;
                parent_height = parent_height.max(accumulated_height + child_desired.height);
            } else {
                parent_width = parent_width.max(accumulated_width + child_desired.width);
                accumulated_height += child_desired.height;
            }
        }

        parent_width = parent_width.max(accumulated_width);
        parent_height = parent_height.max(accumulated_height);
        self.desired = Size::new(parent_width, parent_height);
        self.desired
    }

    fn arrange_impl(&mut self, bounds: Rect) {
        let is_horizontal = self.orientation == Orientation::Horizontal;
        let total_gap = self.total_gap();

        // Independent recomputation from cached desired sizes; nothing from
        // the measure pass accumulators is reused.
        let mut auto_sum = 0.0f32;
        let mut fill_count = 0usize;
        for slot in &self.children {
            match slot.meta.fill {
                FillMode::Auto => {
                    if slot.element.is_visible() {
                        let desired = slot.element.desired_size();
                        auto_sum += if is_horizontal {
                            desired.width
                        } else {
                            desired.height
                        };
                    }
                }
                FillMode::Fill => {
                    if slot.element.is_visible() {
                        fill_count += 1;
                    }
                }
                FillMode::Ignored => {}
            }
        }

        let remaining = if is_horizontal {
            (bounds.width - auto_sum - total_gap).max(0.0)
        } else {
            (bounds.height - auto_sum - total_gap).max(0.0)
        };
        let fill_size = if fill_count > 0 {
            remaining / fill_count as f32
        } else {
            0.0
        };

        let mut offset = 0.0f32;
        let child_count = self.children.len();
        for (i, slot) in self.children.iter_mut().enumerate() {
            let desired = slot.element.desired_size();
            let collapsed = !slot.element.is_visible() || slot.meta.fill == FillMode::Ignored;
            let is_last = i == child_count - 1;
            let gap = if is_last || collapsed { 0.0 } else { self.spacing };

            let rect = if is_horizontal {
                let width = if slot.meta.fill == FillMode::Auto || collapsed {
                    desired.width
                } else {
                    fill_size
                };
                let rect = Rect::new(bounds.x + offset, bounds.y, width, bounds.height);
                offset += width + gap;
                rect
            } else {
                let height = if slot.meta.fill == FillMode::Auto || collapsed {
                    desired.height
                } else {
                    fill_size
                };
                let rect = Rect::new(bounds.x, bounds.y + offset, bounds.width, height);
                offset += height + gap;
                rect
            };

            slot.element.arrange(rect);
        }
    }
}

impl Layoutable for StackPanel {
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
