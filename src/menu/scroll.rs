/*
 *  menu/scroll.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Time-driven horizontal marquee offsets
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

/// Time between one-pixel steps of every marquee
pub const SCROLL_INTERVAL_MS: u64 = 15;

/// Title text restarts once it has moved this far left
pub const TITLE_WRAP_BOUND: i32 = -255;

/// Visible width reserved for a file name next to the scrollbar
pub const LABEL_VIEWPORT: i32 = 120;

/// Offset of one scrolling text region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Horizontal draw position in pixels
    pub offset: i32,
    /// When the offset last moved
    pub last_advance_ms: u64,
}

impl ScrollState {
    pub fn new(now_ms: u64) -> Self {
        Self { offset: 0, last_advance_ms: now_ms }
    }

    /// Step one pixel left if at least `interval_ms` passed since the last step.
    ///
    /// Inside the interval the state comes back untouched.
    pub fn advance(self, now_ms: u64, interval_ms: u64) -> Self {
        if now_ms.saturating_sub(self.last_advance_ms) < interval_ms {
            return self;
        }
        Self { offset: self.offset - 1, last_advance_ms: now_ms }
    }

    /// Advance, then apply the region's wrap rule
    pub fn tick(self, now_ms: u64, interval_ms: u64, policy: WrapPolicy) -> Self {
        let next = self.advance(now_ms, interval_ms);
        Self { offset: policy.apply(next.offset), ..next }
    }

    /// Start over from the left edge, keeping the step cadence
    pub fn rewind(&mut self) {
        self.offset = 0;
    }
}

/// When a marquee jumps back to its start.
///
/// Both rules jump-cut to 0 rather than bounce or hold at the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapPolicy {
    /// Fixed bound, independent of how wide the title renders
    Title,
    /// Restart once the tail of a `text_width` wide label clears the viewport.
    /// A label that fits never leaves 0.
    Label { text_width: u32 },
}

impl WrapPolicy {
    /// Offsets strictly below this reset to 0
    pub fn threshold(self) -> i32 {
        match self {
            WrapPolicy::Title => TITLE_WRAP_BOUND,
            WrapPolicy::Label { text_width } => {
                LABEL_VIEWPORT.saturating_sub(i32::try_from(text_width).unwrap_or(i32::MAX))
            }
        }
    }

    pub fn apply(self, offset: i32) -> i32 {
        if offset < self.threshold() { 0 } else { offset }
    }
}
