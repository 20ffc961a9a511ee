/*
 *  display/surface.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing surface consumed by the menu renderer
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

use embedded_graphics::mono_font::{ascii, MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{renderer::TextRenderer, Baseline};

pub use crate::vframebuf::DrawColor;

/// Font roles used by the menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontId {
    /// Marquee on the title screen
    Title,
    /// Large two-choice labels and the save confirmation
    Choice,
    /// Centered main menu label
    Heading,
    /// Setting name, readout and save button on the adjust screen
    Value,
    /// File names
    #[default]
    List,
    /// Page arrows
    Arrow,
}

impl FontId {
    pub fn mono_font(self) -> &'static MonoFont<'static> {
        match self {
            FontId::Title => &ascii::FONT_10X20,
            FontId::Choice => &ascii::FONT_9X15,
            FontId::Heading => &ascii::FONT_8X13_BOLD,
            FontId::Value => &ascii::FONT_7X13_BOLD,
            FontId::List => &ascii::FONT_6X10,
            FontId::Arrow => &ascii::FONT_5X8,
        }
    }

    /// Rendered width of `text` in pixels
    pub fn measure(self, text: &str) -> u32 {
        MonoTextStyle::new(self.mono_font(), BinaryColor::On)
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
            .width
    }
}

/// Icons available to `draw_glyph`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    /// 8x8 document, shown next to the active file
    File,
    /// 16x16 tick, shown when settings are saved
    Check,
}

/// Primitive drawing operations against a fixed-size monochrome canvas.
///
/// Coordinates follow the u8g2 conventions the layouts were drawn for:
/// text and glyph `y` is the baseline, discs and circles are placed by
/// center and radius. Every primitive honours the current [`DrawColor`].
pub trait Surface {
    fn set_font(&mut self, font: FontId);

    fn set_draw_color(&mut self, color: DrawColor);

    /// Width of `text` in the current font
    fn measure_text_width(&self, text: &str) -> u32;

    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    fn draw_glyph(&mut self, x: i32, y: i32, icon: IconId);

    fn draw_frame(&mut self, x: i32, y: i32, w: u32, h: u32);

    fn draw_rounded_frame(&mut self, x: i32, y: i32, w: u32, h: u32, radius: u32);

    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32);

    fn draw_disc(&mut self, x: i32, y: i32, radius: u32);

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32);
}
