/*
 *  render/text.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Measured text placement with the built-in mono fonts
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
use embedded_graphics::{
    mono_font::{
        iso_8859_1::{FONT_6X10, FONT_8X13, FONT_9X15, FONT_9X15_BOLD, FONT_10X20},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{BinaryColor, Rgb888},
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};

use crate::vframebuf::{Canvas, VarFrameBuf};

/// Font roles used across the dashboard. ISO 8859-1 so the degree sign renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Small,
    Body,
    Label,
    Strong,
    Large,
}

impl Font {
    pub fn mono(&self) -> &'static MonoFont<'static> {
        match self {
            Font::Small => &FONT_6X10,
            Font::Body => &FONT_8X13,
            Font::Label => &FONT_9X15,
            Font::Strong => &FONT_9X15_BOLD,
            Font::Large => &FONT_10X20,
        }
    }
}

/// A font, an integer scale and a colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub font: Font,
    pub scale: u32,
    pub color: Rgb888,
}

impl Pen {
    pub fn new(font: Font, color: Rgb888) -> Self {
        Self { font, scale: 1, color }
    }

    pub fn scaled(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn with_color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Pixel extent of `text` as drawn by this pen.
    pub fn measure(&self, text: &str) -> Size {
        let font = self.font.mono();
        let n = text.chars().count() as u32;
        if n == 0 {
            return Size::zero();
        }
        let w = n * (font.character_size.width + font.character_spacing) - font.character_spacing;
        Size::new(w * self.scale, font.character_size.height * self.scale)
    }

    /// Draw with the top-left corner at `top_left`; returns the drawn extent.
    pub fn draw(&self, canvas: &mut Canvas, text: &str, top_left: Point) -> Result<Size, Infallible> {
        let size = self.measure(text);
        if size == Size::zero() {
            return Ok(size);
        }
        if self.scale == 1 {
            let style = MonoTextStyle::new(self.font.mono(), self.color);
            Text::with_baseline(text, top_left, style, Baseline::Top).draw(canvas)?;
            return Ok(size);
        }

        // render once at 1x, then blow each lit pixel up to a scale x scale block
        let unit = Pen { scale: 1, ..*self }.measure(text);
        let mut glyphs = VarFrameBuf::new(unit.width, unit.height, BinaryColor::Off);
        let style = MonoTextStyle::new(self.font.mono(), BinaryColor::On);
        Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut glyphs)?;

        let s = self.scale as i32;
        let block = Size::new_equal(self.scale);
        for y in 0..unit.height as i32 {
            for x in 0..unit.width as i32 {
                if glyphs.pixel(x, y) == Some(BinaryColor::On) {
                    let at = top_left + Point::new(x * s, y * s);
                    canvas.fill_solid(&Rectangle::new(at, block), self.color)?;
                }
            }
        }
        Ok(size)
    }

    pub fn draw_centered(&self, canvas: &mut Canvas, text: &str, center_x: i32, y: i32) -> Result<Size, Infallible> {
        let w = self.measure(text).width as i32;
        self.draw(canvas, text, Point::new(center_x - w / 2, y))
    }

    pub fn draw_right(&self, canvas: &mut Canvas, text: &str, right_x: i32, y: i32) -> Result<Size, Infallible> {
        let w = self.measure(text).width as i32;
        self.draw(canvas, text, Point::new(right_x - w, y))
    }
}

/// Cut `text` so it fits `max_width`, marking the cut with "..".
pub fn fit(pen: &Pen, text: &str, max_width: u32) -> String {
    if pen.measure(text).width <= max_width {
        return text.to_string();
    }
    let mut out: String = text.to_string();
    while !out.is_empty() {
        out.pop();
        let candidate = format!("{}..", out.trim_end());
        if pen.measure(&candidate).width <= max_width {
            return candidate;
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::palette::{BLACK, WHITE};

    #[test]
    fn test_measure() {
        let pen = Pen::new(Font::Large, BLACK);
        assert_eq!(pen.measure("54"), Size::new(20, 20));
        assert_eq!(pen.scaled(3).measure("54"), Size::new(60, 60));
        assert_eq!(pen.measure(""), Size::zero());
        // degree sign is one glyph
        assert_eq!(Pen::new(Font::Label, BLACK).measure("54°").width, 27);
    }

    #[test]
    fn test_draw_stays_inside_measured_box() {
        let mut canvas = Canvas::new(120, 60, WHITE);
        let pen = Pen::new(Font::Large, BLACK).scaled(2);
        let size = pen.draw(&mut canvas, "88", Point::new(10, 5)).unwrap();
        assert_eq!(size, Size::new(40, 40));
        assert!(canvas.count(BLACK) > 0);
        for y in 0..60 {
            for x in 0..120 {
                if canvas.pixel(x, y) == Some(BLACK) {
                    assert!((10..50).contains(&x) && (5..45).contains(&y), "ink at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_scaled_ink_is_square_multiple() {
        let mut one = Canvas::new(40, 40, WHITE);
        let mut three = Canvas::new(40, 40, WHITE);
        Pen::new(Font::Small, BLACK).draw(&mut one, "8", Point::zero()).unwrap();
        Pen::new(Font::Small, BLACK).scaled(3).draw(&mut three, "8", Point::zero()).unwrap();
        assert_eq!(three.count(BLACK), one.count(BLACK) * 9);
    }

    #[test]
    fn test_fit() {
        let pen = Pen::new(Font::Body, BLACK);
        assert_eq!(fit(&pen, "Rain", 80), "Rain");
        let cut = fit(&pen, "Thunderstorm With Heavy Rain", 80);
        assert!(cut.ends_with(".."));
        assert!(pen.measure(&cut).width <= 80);
    }
}
