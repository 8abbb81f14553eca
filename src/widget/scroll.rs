//! Vertical scroll state.
//!
//! `ScrollState` tracks a non-negative vertical offset bounded by a maximum
//! that is kept in sync with the content height.

/// Tracks the vertical scroll offset of a scrollable widget.
///
/// The offset is always clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: f32,
    max: f32,
}

impl ScrollState {
    /// Current offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Scroll to an absolute position, clamping to the valid range.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        let clamped = offset.clamp(0.0, self.max);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Scroll by a relative delta, clamping to the valid range.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.scroll_to(self.offset + delta)
    }

    /// Update the bound and re-clamp the offset.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.offset = self.offset.min(self.max);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
