/*
 *  display/traits.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definitions for display driver abstraction
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

use crate::display::error::DisplayError;

/// Display capabilities and metadata
#[derive(Debug, Clone)]
pub struct DisplayCapabilities {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Fastest refresh the panel link keeps up with; caps the frame rate
    pub max_fps: u32,
}

impl DisplayCapabilities {
    /// Size of one packed 1-bpp frame in bytes
    pub fn frame_bytes(&self) -> usize {
        (self.width * self.height).div_ceil(8) as usize
    }
}

/// Minimal hardware abstraction - all panel drivers implement this trait
///
/// The menu never draws into a driver directly. Frames are composed in a
/// [`Canvas`](crate::display::Canvas) and handed over packed, 8 pixels per
/// byte, LSB first, row-major.
pub trait DisplayDriver: Send {
    /// Returns the capabilities of this display
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the display dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Initialize the display hardware
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Set panel contrast (0-255)
    fn set_brightness(&mut self, value: u8) -> Result<(), DisplayError>;

    /// Blank the panel
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write one packed frame and push it to the panel
    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DisplayError>;

    /// Set display inversion (if supported)
    fn set_invert(&mut self, _inverted: bool) -> Result<(), DisplayError> {
        Err(DisplayError::Unsupported("invert"))
    }

    /// Set display rotation (if supported)
    ///
    /// Rotation angle should be 0, 90, 180, or 270 degrees.
    fn set_rotation(&mut self, degrees: u16) -> Result<(), DisplayError> {
        if !matches!(degrees, 0 | 90 | 180 | 270) {
            return Err(DisplayError::InvalidRotation(degrees));
        }
        Err(DisplayError::Unsupported("rotation"))
    }
}
