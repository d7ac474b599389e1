/*
 *  render/current.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Current conditions block
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

use crate::models::DashboardData;
use crate::render::text::{fit, Font, Pen};
use crate::render::{RenderError, Renderer};
use crate::vframebuf::Canvas;

/// Gap between the temperature numerals and the unit suffix.
pub const SUFFIX_GAP: i32 = 2;

pub fn draw(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let c = &data.current;
    let l = r.layout();
    let theme = r.theme();

    r.draw_icon(canvas, r.icons().weather(&c.icon), l.current_icon, theme.icon(&c.icon))?;

    let big = Pen::new(Font::Large, theme.temperature(c.temperature, data.units)).scaled(l.temp_scale);
    let numerals = big.draw(canvas, &c.temperature.to_string(), l.temp_origin)?;

    let suffix = Pen::new(Font::Label, theme.foreground()).scaled(l.text_scale * 2);
    suffix.draw(canvas, data.units.temp_suffix(), suffix_origin(l.temp_origin, numerals))?;

    let body = Pen::new(Font::Label, theme.foreground()).scaled(l.text_scale);
    let x = l.temp_origin.x;
    body.draw(canvas, &feels_like(c.feels_like), Point::new(x, l.feels_y))?;

    let room = (l.detail_columns[0] - x - 8).max(0) as u32;
    let muted = body.with_color(theme.muted());
    muted.draw(canvas, &fit(&muted, &c.description, room), Point::new(x, l.description_y))?;
    Ok(())
}

/// The suffix sits right after the measured numerals, not at a fixed offset.
pub fn suffix_origin(origin: Point, numerals: Size) -> Point {
    Point::new(origin.x + numerals.width as i32 + SUFFIX_GAP, origin.y + 4)
}

pub fn feels_like(temp: i32) -> String {
    format!("Feels Like {temp}°")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::palette::BLACK;

    #[test]
    fn test_suffix_follows_measured_width() {
        let big = Pen::new(Font::Large, BLACK).scaled(4);
        let origin = Point::new(185, 70);
        let two = suffix_origin(origin, big.measure("54"));
        let three = suffix_origin(origin, big.measure("-12"));
        assert_eq!(two.x, 185 + 80 + SUFFIX_GAP);
        assert_eq!(three.x - two.x, 40);
    }

    #[test]
    fn test_feels_like() {
        assert_eq!(feels_like(-3), "Feels Like -3°");
    }
}
