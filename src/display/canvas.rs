/*
 *  display/canvas.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Framebuffer-backed drawing surface bound to a panel driver
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

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use log::debug;

use crate::display::error::DisplayError;
use crate::display::factory::BoxedDriver;
use crate::display::traits::DisplayCapabilities;
use crate::display::surface::{DrawColor, FontId, IconId, Surface};
use crate::vframebuf::MonoFrameBuf;

/// Composes frames in memory and pushes them to the panel.
pub struct Canvas {
    driver: BoxedDriver,
    framebuffer: MonoFrameBuf,
    font: FontId,
}

impl Canvas {
    /// Wrap a driver; the framebuffer takes the panel's dimensions
    pub fn new(driver: BoxedDriver) -> Self {
        let (width, height) = driver.dimensions();
        debug!("Canvas {}x{}", width, height);
        Self {
            driver,
            framebuffer: MonoFrameBuf::new(width, height),
            font: FontId::default(),
        }
    }

    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.driver.init()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.driver.dimensions()
    }

    pub fn capabilities(&self) -> &DisplayCapabilities {
        self.driver.capabilities()
    }

    /// Blank the framebuffer and reset the draw color
    pub fn begin_frame(&mut self) {
        self.framebuffer.clear_all();
        self.framebuffer.set_draw_color(DrawColor::Normal);
    }

    /// Hand the composed frame to the panel
    pub fn present(&mut self) -> Result<(), DisplayError> {
        let bytes = self.framebuffer.to_packed_bytes();
        self.driver.write_buffer(&bytes)
    }

    pub fn framebuffer(&self) -> &MonoFrameBuf {
        &self.framebuffer
    }

    pub fn driver_mut(&mut self) -> &mut BoxedDriver {
        &mut self.driver
    }

    fn paint<P>(&mut self, primitive: P)
    where
        P: Drawable<Color = BinaryColor>,
    {
        // the framebuffer cannot fail
        let _ = primitive.draw(&mut self.framebuffer);
    }
}

impl Surface for Canvas {
    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.framebuffer.set_draw_color(color);
    }

    fn measure_text_width(&self, text: &str) -> u32 {
        self.font.measure(text)
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let style = MonoTextStyle::new(self.font.mono_font(), BinaryColor::On);
        self.paint(Text::new(text, Point::new(x, y), style));
    }

    fn draw_glyph(&mut self, x: i32, y: i32, icon: IconId) {
        let raw = icon.raw();
        let top = y - icon.size() as i32;
        self.paint(Image::new(&raw, Point::new(x, top)));
    }

    fn draw_frame(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.paint(
            Rectangle::new(Point::new(x, y), Size::new(w, h))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1)),
        );
    }

    fn draw_rounded_frame(&mut self, x: i32, y: i32, w: u32, h: u32, radius: u32) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(w, h));
        self.paint(
            RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1)),
        );
    }

    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.paint(
            Rectangle::new(Point::new(x, y), Size::new(w, h))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On)),
        );
    }

    fn draw_disc(&mut self, x: i32, y: i32, radius: u32) {
        self.paint(
            Circle::with_center(Point::new(x, y), radius * 2 + 1)
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On)),
        );
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32) {
        self.paint(
            Circle::with_center(Point::new(x, y), radius * 2 + 1)
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1)),
        );
    }
}
