/*
 *  display/glyphs.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Icon bitmaps
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

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::display::surface::IconId;

// 1-bpp, MSB first, rows padded to whole bytes

pub const GLYPH_FILE: [u8; 8] = [0x78, 0x4c, 0x46, 0x42, 0x5a, 0x42, 0x5a, 0x7e,];

pub const GLYPH_CHECK: [u8; 32] = [
    0x00, 0x00, 0x00, 0x06, 0x00, 0x0e, 0x00, 0x1c,
    0x00, 0x38, 0x00, 0x70, 0x00, 0xe0, 0x61, 0xc0,
    0x73, 0x80, 0x3f, 0x00, 0x1e, 0x00, 0x0c, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

impl IconId {
    /// Icon edge length in pixels (icons are square)
    pub fn size(self) -> u32 {
        match self {
            IconId::File => 8,
            IconId::Check => 16,
        }
    }

    pub fn raw(self) -> ImageRaw<'static, BinaryColor> {
        match self {
            IconId::File => ImageRaw::new(&GLYPH_FILE, 8),
            IconId::Check => ImageRaw::new(&GLYPH_CHECK, 16),
        }
    }
}
