//! Weighted single-axis stacking shared by vertical and horizontal boxes.
//!
//! Along the main axis, slots with ratio 0 take their minimum extent and slots
//! with a positive ratio take `leftover * ratio`, where leftover is whatever
//! the ratio-0 slots did not claim. Ratios are plain multipliers: they are not
//! normalized, so ratios summing above 1 overflow the container. Every slot
//! spans the full cross axis.

use crate::geometry::{Rect, Size};
use crate::widget::SlotMeasure;

/// The main axis of a stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Children stacked top to bottom.
    Vertical,
    /// Children stacked left to right.
    Horizontal,
}

impl Axis {
    pub fn main(self, size: Size) -> f32 {
        match self {
            Axis::Vertical => size.height,
            Axis::Horizontal => size.width,
        }
    }

    pub fn cross(self, size: Size) -> f32 {
        match self {
            Axis::Vertical => size.width,
            Axis::Horizontal => size.height,
        }
    }

    /// Build a size from main and cross extents.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Vertical => Size::new(cross, main),
            Axis::Horizontal => Size::new(main, cross),
        }
    }

    fn main_start(self, rect: Rect) -> f32 {
        match self {
            Axis::Vertical => rect.y,
            Axis::Horizontal => rect.x,
        }
    }

    /// A rectangle spanning `bounds`' cross axis at `offset..offset + extent`.
    fn slice(self, bounds: Rect, offset: f32, extent: f32) -> Rect {
        match self {
            Axis::Vertical => Rect::new(bounds.x, offset, bounds.width, extent),
            Axis::Horizontal => Rect::new(offset, bounds.y, extent, bounds.height),
        }
    }
}

/// Minimum size of a stack: ratio-0 slots summed along the main axis, the
/// widest slot across it.
pub fn measure(axis: Axis, slots: &[SlotMeasure]) -> Size {
    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    for slot in slots.iter().filter(|s| !s.collapsed) {
        if slot.expand_ratio <= 0.0 {
            main += axis.main(slot.min_size);
        }
        cross = cross.max(axis.cross(slot.min_size));
    }
    axis.size(main, cross)
}

/// One rectangle per slot, in slot order, tiling `bounds` along `axis`.
///
/// Collapsed slots get a zero-extent rectangle at the running offset.
pub fn arrange(axis: Axis, bounds: Rect, slots: &[SlotMeasure]) -> Vec<Rect> {
    let min_main = axis.main(measure(axis, slots));
    let leftover = (axis.main(bounds.size()) - min_main).max(0.0);

    let mut offset = axis.main_start(bounds);
    slots
        .iter()
        .map(|slot| {
            let extent = if slot.collapsed {
                0.0
            } else if slot.expand_ratio <= 0.0 {
                axis.main(slot.min_size)
            } else {
                leftover * slot.expand_ratio
            };
            let rect = axis.slice(bounds, offset, extent);
            offset += extent;
            rect
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
