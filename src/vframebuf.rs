/*
 *  vframebuf.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Runtime-sized monochrome framebuffer with u8g2-style draw colors
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

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// How lit pixels of a primitive land in the buffer.
///
/// Mirrors the u8g2 color modes: 0 clears, 1 sets, 2 inverts whatever
/// is already there. Unlit pixels of a primitive never touch the buffer,
/// so an inverted box highlights text drawn earlier in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawColor {
    Clear,
    #[default]
    Normal,
    Xor,
}

impl DrawColor {
    /// u8g2 numbering, handy for logs
    pub fn mode(self) -> u8 {
        match self {
            DrawColor::Clear => 0,
            DrawColor::Normal => 1,
            DrawColor::Xor => 2,
        }
    }
}

/// A runtime-sized 1-bpp framebuffer for embedded-graphics.
#[derive(Debug, Clone)]
pub struct MonoFrameBuf {
    buf: Vec<BinaryColor>,
    w: usize,
    h: usize,
    color: DrawColor,
}

impl MonoFrameBuf {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![BinaryColor::Off; w * h], w, h, color: DrawColor::Normal }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    pub fn set_draw_color(&mut self, color: DrawColor) {
        self.color = color;
    }

    /// Blank the whole buffer, independent of the draw color
    pub fn clear_all(&mut self) {
        self.buf.fill(BinaryColor::Off);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        self.idx(Point::new(x as i32, y as i32)).map(|i| self.buf[i])
    }

    pub fn count_on(&self) -> usize {
        self.buf.iter().filter(|p| p.is_on()).count()
    }

    /// Pack 8 pixels per byte, LSB first, row-major
    pub fn to_packed_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.buf.len().div_ceil(8)];
        for (i, pixel) in self.buf.iter().enumerate() {
            if pixel.is_on() {
                bytes[i / 8] |= 1 << (i % 8);
            }
        }
        bytes
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl OriginDimensions for MonoFrameBuf {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for MonoFrameBuf {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if c.is_off() {
                continue;
            }
            if let Some(i) = self.idx(p) {
                self.buf[i] = match self.color {
                    DrawColor::Clear => BinaryColor::Off,
                    DrawColor::Normal => BinaryColor::On,
                    DrawColor::Xor => self.buf[i].invert(),
                };
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn fill(fb: &mut MonoFrameBuf, x: i32, y: i32, w: u32, h: u32) {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(fb)
            .ok();
    }

    #[test]
    fn test_normal_fill_sets_pixels() {
        let mut fb = MonoFrameBuf::new(16, 8);
        fill(&mut fb, 0, 0, 4, 2);
        assert_eq!(fb.count_on(), 8);
        assert_eq!(fb.pixel(3, 1), Some(BinaryColor::On));
        assert_eq!(fb.pixel(4, 1), Some(BinaryColor::Off));
    }

    #[test]
    fn test_xor_inverts_existing_content() {
        let mut fb = MonoFrameBuf::new(16, 8);
        fill(&mut fb, 0, 0, 4, 4);
        fb.set_draw_color(DrawColor::Xor);
        fill(&mut fb, 2, 0, 4, 4);
        // overlap columns 2..4 flip off, columns 4..6 flip on
        assert_eq!(fb.pixel(1, 0), Some(BinaryColor::On));
        assert_eq!(fb.pixel(2, 0), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(5, 0), Some(BinaryColor::On));
        assert_eq!(fb.count_on(), 16);
    }

    #[test]
    fn test_clear_color_erases() {
        let mut fb = MonoFrameBuf::new(8, 8);
        fill(&mut fb, 0, 0, 8, 8);
        fb.set_draw_color(DrawColor::Clear);
        fill(&mut fb, 0, 0, 8, 4);
        assert_eq!(fb.count_on(), 32);
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut fb = MonoFrameBuf::new(8, 8);
        fill(&mut fb, -4, -4, 6, 6);
        assert_eq!(fb.count_on(), 4);
        assert_eq!(fb.pixel(8, 0), None);
    }

    #[test]
    fn test_packing_is_lsb_first() {
        let mut fb = MonoFrameBuf::new(16, 1);
        fill(&mut fb, 0, 0, 1, 1);
        fill(&mut fb, 9, 0, 1, 1);
        assert_eq!(fb.to_packed_bytes(), vec![0x01, 0x02]);
    }
}
