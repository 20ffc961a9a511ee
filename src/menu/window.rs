/*
 *  menu/window.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Three-row list window, selection bar and scrollbar geometry
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

use std::ops::RangeInclusive;

/// Rows the file list can show at once
pub const VISIBLE_ROWS: usize = 3;

/// Inner height of the scrollbar track in pixels
pub const TRACK_HEIGHT: f32 = 28.0;

/// Contiguous slice of the catalog currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    pub min_index: usize,
    pub max_index: usize,
}

impl ListWindow {
    /// Number of rows in use
    pub fn rows(&self) -> usize {
        self.max_index - self.min_index + 1
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.min_index..=self.max_index
    }

    /// Screen row (0 = top) of a catalog index, if visible
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.indices().contains(&index).then(|| index - self.min_index)
    }
}

/// Which catalog entries to show around `current`.
///
/// Keeps `current` in the middle row where possible and pins the window
/// to the first or last three entries at the ends. Catalogs shorter than
/// three entries show all of them from row 0; an empty catalog has no
/// window at all.
pub fn compute_window(current: usize, total: usize) -> Option<ListWindow> {
    if total == 0 {
        return None;
    }
    if total < VISIBLE_ROWS {
        return Some(ListWindow { min_index: 0, max_index: total - 1 });
    }

    let mut min_index = current.saturating_sub(1);
    let mut max_index = min_index + VISIBLE_ROWS - 1;
    if max_index > total - 1 {
        max_index = total - 1;
        min_index = total - VISIBLE_ROWS;
    }
    Some(ListWindow { min_index, max_index })
}

/// Top edge of the inverted selection bar.
///
/// The bar sits on the first row for the first entry and on the middle
/// row otherwise. The bottom-row case compares against `total`, which a
/// zero-based index never reaches, so the last entry is highlighted on
/// the middle row.
pub fn selection_bar_y(current: usize, total: usize) -> i32 {
    let mut bar = 11;
    if current == 0 {
        bar = 1;
    }
    if current == total {
        bar = 21;
    }
    bar
}

/// Scrollbar thumb size and position, in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    pub box_height: f32,
    pub box_offset: f32,
}

impl ScrollbarGeometry {
    /// Device pixels, truncated toward zero: (height, offset)
    pub fn to_pixels(&self) -> (u32, i32) {
        (self.box_height as u32, self.box_offset as i32)
    }
}

/// Thumb geometry for a catalog of `total` entries with `current` highlighted.
///
/// The thumb is never taller than the track; with three entries the
/// proportional height would otherwise overflow it.
pub fn compute_scrollbar(total: usize, current: usize, track_height: f32) -> ScrollbarGeometry {
    if total <= 2 {
        return ScrollbarGeometry { box_height: track_height, box_offset: 0.0 };
    }

    let steps = (total - 1) as f32;
    let box_height = (3.0 / steps * track_height).min(track_height);
    let box_offset = 1.0 / steps * (track_height - box_height) * current as f32;
    ScrollbarGeometry { box_height, box_offset }
}
