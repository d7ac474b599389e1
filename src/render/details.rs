/*
 *  render/details.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Two-column detail rows
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
use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::config::DisplaySettings;
use crate::icons::DetailIcon;
use crate::models::{CurrentConditions, DashboardData, Units};
use crate::render::text::{fit, Font, Pen};
use crate::render::{RenderError, Renderer};
use crate::vframebuf::Canvas;
use crate::wind::{compass_point, WindArrow};

const ARROW_REACH: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: DetailIcon,
    pub label: &'static str,
    pub value: String,
    /// Drawn after the text on the wind row.
    pub arrow: Option<WindArrow>,
}

impl DetailRow {
    fn new(icon: DetailIcon, label: &'static str, value: String) -> Self {
        Self { icon, label, value, arrow: None }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.value)
    }
}

/// Rows with a value present, minus the ones switched off in settings.
pub fn detail_rows(c: &CurrentConditions, units: Units, settings: &DisplaySettings) -> Vec<DetailRow> {
    let mut rows = Vec::with_capacity(8);

    if let Some(t) = c.sunrise {
        rows.push(DetailRow::new(DetailIcon::Sunrise, "Sunrise", clock(&t)));
    }
    if let Some(t) = c.sunset {
        rows.push(DetailRow::new(DetailIcon::Sunset, "Sunset", clock(&t)));
    }
    if settings.show_wind {
        let value = format!("{:.1} {} {}", c.wind_speed, units.wind_unit(), compass_point(c.wind_deg));
        rows.push(DetailRow {
            arrow: Some(WindArrow::from_degrees(c.wind_deg)),
            ..DetailRow::new(DetailIcon::Wind, "Wind", value)
        });
    }
    if let Some(v) = c.visibility {
        rows.push(DetailRow::new(DetailIcon::Visibility, "Visibility", format!("{v:.1} {}", units.visibility_unit())));
    }
    if settings.show_humidity {
        rows.push(DetailRow::new(DetailIcon::Humidity, "Humidity", format!("{}%", c.humidity)));
    }
    if settings.show_pressure {
        rows.push(DetailRow::new(DetailIcon::Pressure, "Pressure", format!("{} hPa", c.pressure)));
    }
    if let Some(aq) = c.air_quality.as_ref() {
        rows.push(DetailRow::new(DetailIcon::AirQuality, "Air Quality", aq.label.clone()));
    }
    if let Some(uv) = c.uv_index {
        rows.push(DetailRow::new(DetailIcon::UvIndex, "UV Index", format!("{uv:.1}")));
    }
    rows
}

/// "6:42am"
pub fn clock(at: &DateTime<FixedOffset>) -> String {
    at.format("%-I:%M%p").to_string().to_lowercase()
}

pub fn draw(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let l = r.layout();
    let theme = r.theme();
    let rows = detail_rows(&data.current, data.units, r.settings());
    let per_column = rows.len().div_ceil(2);

    let pen = Pen::new(Font::Body, theme.foreground()).scaled(l.text_scale);
    let column_width = l.detail_columns[1] - l.detail_columns[0];
    let room = (column_width - l.detail_label_dx - 4 * ARROW_REACH).max(0) as u32;
    let text_dy = (l.detail_icon as i32 - pen.measure("0").height as i32) / 2;

    for (i, row) in rows.iter().enumerate() {
        let x = l.detail_columns[i / per_column.max(1)];
        let y = l.detail_top + (i % per_column.max(1)) as i32 * l.detail_row_height;

        let icon = Rectangle::new(Point::new(x, y), Size::new_equal(l.detail_icon));
        r.draw_icon(canvas, r.icons().detail(row.icon), icon, theme.foreground())?;

        let text = fit(&pen, &row.text(), room);
        let at = Point::new(x + l.detail_label_dx, y + text_dy);
        let size = pen.draw(canvas, &text, at)?;

        if let Some(arrow) = row.arrow {
            let center = at + Point::new(size.width as i32 + 2 * ARROW_REACH, size.height as i32 / 2);
            draw_arrow(canvas, arrow, center, theme.foreground())?;
        }
    }
    Ok(())
}

/// Shaft through `center` plus a two-stroke head at the leading end.
pub fn draw_arrow(canvas: &mut Canvas, arrow: WindArrow, center: Point, color: Rgb888) -> Result<(), RenderError> {
    let (dx, dy) = arrow.vector();
    let tip = center + Point::new(dx * ARROW_REACH, dy * ARROW_REACH);
    let tail = center - Point::new(dx * ARROW_REACH, dy * ARROW_REACH);
    let style = PrimitiveStyle::with_stroke(color, 2);
    Line::new(tail, tip).into_styled(style).draw(canvas)?;

    // head strokes: the backward direction turned 45° either way
    let (bx, by) = (-dx, -dy);
    for (hx, hy) in [(bx - by, bx + by), (bx + by, by - bx)] {
        Line::new(tip, tip + Point::new(hx * 2, hy * 2)).into_styled(style).draw(canvas)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::palette::{BLACK, WHITE};
    use crate::sample::sample_dashboard;

    fn labels(rows: &[DetailRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.label).collect()
    }

    #[test]
    fn test_all_rows_present() {
        let data = sample_dashboard();
        let rows = detail_rows(&data.current, data.units, &DisplaySettings::default());
        assert_eq!(
            labels(&rows),
            ["Sunrise", "Sunset", "Wind", "Visibility", "Humidity", "Pressure", "Air Quality", "UV Index"]
        );
        let wind = &rows[2];
        assert_eq!(wind.arrow, Some(WindArrow::Up));
        assert_eq!(wind.value, "6.0 mph S");
    }

    #[test]
    fn test_toggles_and_missing_values() {
        let mut data = sample_dashboard();
        data.current.uv_index = None;
        data.current.air_quality = None;
        data.current.sunset = None;
        let settings = DisplaySettings { show_wind: false, show_pressure: false, ..Default::default() };
        let rows = detail_rows(&data.current, data.units, &settings);
        assert_eq!(labels(&rows), ["Sunrise", "Visibility", "Humidity"]);
    }

    #[test]
    fn test_clock() {
        let data = sample_dashboard();
        let sunrise = data.current.sunrise.unwrap();
        assert!(!clock(&sunrise).starts_with('0'));
        assert!(clock(&sunrise).ends_with("am"));
    }

    #[test]
    fn test_arrow_head_leads() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        draw_arrow(&mut canvas, WindArrow::Up, Point::new(10, 10), BLACK).unwrap();
        // tip at y=5, head strokes fall back toward the tail
        let inked = |x0: i32, x1: i32, y0: i32, y1: i32| {
            (y0..=y1).any(|y| (x0..=x1).any(|x| canvas.pixel(x, y) == Some(BLACK)))
        };
        assert!(inked(9, 11, 4, 6));
        assert!(!inked(0, 19, 0, 2));
        assert!(inked(7, 8, 6, 8));
        assert!(inked(12, 13, 6, 8));
    }
}
