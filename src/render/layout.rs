/*
 *  render/layout.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Panel geometry scaled from the 800x480 reference
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

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use thiserror::Error;

pub const REFERENCE_WIDTH: u32 = 800;
pub const REFERENCE_HEIGHT: u32 = 480;
pub const MIN_WIDTH: u32 = 400;
pub const MIN_HEIGHT: u32 = 240;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("canvas {width}x{height} is below the 400x240 minimum")]
    TooSmall { width: u32, height: u32 },
}

/// Absolute positions for every dashboard section.
///
/// Values are authored against 800x480 and scaled per axis, so a 640x384
/// panel keeps the same proportions. Text scales by whole multiples only.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Integer multiplier for body text.
    pub text_scale: u32,
    /// Integer multiplier for the large current temperature.
    pub temp_scale: u32,

    // header
    pub title_y: i32,
    pub date_y: i32,

    // current block
    pub current_icon: Rectangle,
    pub temp_origin: Point,
    pub feels_y: i32,
    pub description_y: i32,

    // detail columns
    pub detail_columns: [i32; 2],
    pub detail_top: i32,
    pub detail_row_height: i32,
    pub detail_icon: u32,
    pub detail_label_dx: i32,

    // timeline
    pub timeline_frame: Rectangle,
    pub plot: Rectangle,
    pub time_label_y: i32,

    // forecast cards
    pub cards_top: i32,
    pub card_height: u32,
    pub card_padding: i32,
    pub card_gap: i32,
    pub card_label_dy: i32,
    pub card_icon_dy: i32,
    pub card_icon: u32,
    pub card_temps_dy: i32,

    pub footer_margin: i32,
}

#[derive(Debug, Clone, Copy)]
struct Scale {
    sx: f32,
    sy: f32,
}

impl Scale {
    fn x(&self, v: i32) -> i32 {
        (v as f32 * self.sx).round() as i32
    }
    fn y(&self, v: i32) -> i32 {
        (v as f32 * self.sy).round() as i32
    }
    fn w(&self, v: u32) -> u32 {
        (v as f32 * self.sx).round().max(1.0) as u32
    }
    fn h(&self, v: u32) -> u32 {
        (v as f32 * self.sy).round().max(1.0) as u32
    }
    /// Square sizes follow the tighter axis.
    fn square(&self, v: u32) -> u32 {
        (v as f32 * self.sx.min(self.sy)).round().max(1.0) as u32
    }
    fn rect(&self, x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(self.x(x), self.y(y)), Size::new(self.w(w), self.h(h)))
    }
}

impl Layout {
    pub fn for_resolution(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(LayoutError::TooSmall { width, height });
        }
        let s = Scale {
            sx: width as f32 / REFERENCE_WIDTH as f32,
            sy: height as f32 / REFERENCE_HEIGHT as f32,
        };
        let factor = s.sx.min(s.sy);
        let icon = s.square(140);

        Ok(Self {
            width,
            height,
            text_scale: (factor.floor() as u32).max(1),
            temp_scale: ((4.0 * factor).round() as u32).max(2),

            title_y: s.y(12),
            date_y: s.y(36),

            current_icon: Rectangle::new(Point::new(s.x(25), s.y(62)), Size::new(icon, icon)),
            temp_origin: Point::new(s.x(185), s.y(70)),
            feels_y: s.y(160),
            description_y: s.y(182),

            detail_columns: [s.x(400), s.x(600)],
            detail_top: s.y(64),
            detail_row_height: s.y(36),
            detail_icon: s.square(24),
            detail_label_dx: s.x(34),

            timeline_frame: s.rect(15, 212, 770, 98),
            plot: s.rect(60, 222, 680, 58),
            time_label_y: s.y(290),

            cards_top: s.y(318),
            card_height: s.h(120),
            card_padding: s.x(15),
            card_gap: s.x(6),
            card_label_dy: s.y(8),
            card_icon_dy: s.y(28),
            card_icon: s.square(48),
            card_temps_dy: s.y(84),

            footer_margin: s.x(15),
        })
    }

    /// Horizontal centre of the canvas.
    pub fn center_x(&self) -> i32 {
        self.width as i32 / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let l = Layout::for_resolution(800, 480).unwrap();
        assert_eq!(l.text_scale, 1);
        assert_eq!(l.temp_scale, 4);
        assert_eq!(l.plot, Rectangle::new(Point::new(60, 222), Size::new(680, 58)));
        assert_eq!(l.cards_top, 318);
        assert_eq!(l.center_x(), 400);
    }

    #[test]
    fn test_scaled_layout() {
        let l = Layout::for_resolution(1600, 960).unwrap();
        assert_eq!(l.text_scale, 2);
        assert_eq!(l.plot.top_left, Point::new(120, 444));
        assert_eq!(l.current_icon.size, Size::new(280, 280));
    }

    #[test]
    fn test_sections_stay_on_canvas() {
        for (w, h) in [(400, 240), (640, 384), (800, 480), (1304, 984)] {
            let l = Layout::for_resolution(w, h).unwrap();
            let bottom = l.cards_top + l.card_height as i32;
            assert!(bottom < h as i32, "{w}x{h}: cards end at {bottom}");
            let frame_right = l.timeline_frame.top_left.x + l.timeline_frame.size.width as i32;
            assert!(frame_right <= w as i32);
            assert!(l.plot.top_left.y > l.timeline_frame.top_left.y);
        }
    }

    #[test]
    fn test_too_small() {
        assert_eq!(
            Layout::for_resolution(320, 240),
            Err(LayoutError::TooSmall { width: 320, height: 240 })
        );
    }
}
