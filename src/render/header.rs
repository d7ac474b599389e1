/*
 *  render/header.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Location and date header, last-updated footer
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

use chrono::{DateTime, FixedOffset};

use crate::models::DashboardData;
use crate::render::text::{fit, Font, Pen};
use crate::render::{RenderError, Renderer};
use crate::vframebuf::Canvas;

pub fn draw(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let l = r.layout();
    let theme = r.theme();

    let title = Pen::new(Font::Large, theme.foreground()).scaled(l.text_scale);
    let room = l.width.saturating_sub(2 * l.footer_margin as u32);
    let location = fit(&title, &data.current.location(), room);
    title.draw_centered(canvas, &location, l.center_x(), l.title_y)?;

    let date = Pen::new(Font::Label, theme.muted()).scaled(l.text_scale);
    date.draw_centered(canvas, &date_line(&data.last_updated), l.center_x(), l.date_y)?;
    Ok(())
}

pub fn draw_footer(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let l = r.layout();
    let pen = Pen::new(Font::Small, r.theme().muted()).scaled(l.text_scale);
    let stamp = updated_stamp(&data.last_updated);
    let y = l.height as i32 - l.footer_margin - pen.measure(&stamp).height as i32;
    pen.draw_right(canvas, &stamp, l.width as i32 - l.footer_margin, y)?;
    Ok(())
}

/// "Saturday, March 14"
pub fn date_line(at: &DateTime<FixedOffset>) -> String {
    at.format("%A, %B %d").to_string()
}

/// "Updated 06:30pm"
pub fn updated_stamp(at: &DateTime<FixedOffset>) -> String {
    format!("Updated {}", at.format("%I:%M%p").to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formats() {
        let at = FixedOffset::west_opt(4 * 3600).unwrap()
            .with_ymd_and_hms(2026, 3, 14, 18, 5, 0).unwrap();
        assert_eq!(date_line(&at), "Saturday, March 14");
        assert_eq!(updated_stamp(&at), "Updated 06:05pm");
    }
}
