/*
 *  display/recording.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Surface that records draw calls instead of painting them
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

use crate::display::surface::{DrawColor, FontId, IconId, Surface};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Font(FontId),
    Color(DrawColor),
    Text { x: i32, y: i32, text: String },
    Glyph { x: i32, y: i32, icon: IconId },
    Frame { x: i32, y: i32, w: u32, h: u32 },
    RoundedFrame { x: i32, y: i32, w: u32, h: u32, radius: u32 },
    Box { x: i32, y: i32, w: u32, h: u32 },
    Disc { x: i32, y: i32, radius: u32 },
    Circle { x: i32, y: i32, radius: u32 },
}

/// Records the draw calls a renderer issues.
///
/// Text is measured with the same fonts as the real canvas, so layouts
/// that center on measured width come out identical.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    font: FontId,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop recorded calls, keep the current font
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position of the first draw of `needle`
    pub fn text_position(&self, needle: &str) -> Option<(i32, i32)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { x, y, text } if text == needle => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn contains(&self, op: &DrawOp) -> bool {
        self.ops.contains(op)
    }
}

impl Surface for RecordingSurface {
    fn set_font(&mut self, font: FontId) {
        self.font = font;
        self.ops.push(DrawOp::Font(font));
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.ops.push(DrawOp::Color(color));
    }

    fn measure_text_width(&self, text: &str) -> u32 {
        self.font.measure(text)
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.ops.push(DrawOp::Text { x, y, text: text.to_string() });
    }

    fn draw_glyph(&mut self, x: i32, y: i32, icon: IconId) {
        self.ops.push(DrawOp::Glyph { x, y, icon });
    }

    fn draw_frame(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.ops.push(DrawOp::Frame { x, y, w, h });
    }

    fn draw_rounded_frame(&mut self, x: i32, y: i32, w: u32, h: u32, radius: u32) {
        self.ops.push(DrawOp::RoundedFrame { x, y, w, h, radius });
    }

    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32) {
        self.ops.push(DrawOp::Box { x, y, w, h });
    }

    fn draw_disc(&mut self, x: i32, y: i32, radius: u32) {
        self.ops.push(DrawOp::Disc { x, y, radius });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: u32) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }
}
