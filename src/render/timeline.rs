/*
 *  render/timeline.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Hourly temperature line with precipitation bars
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
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::models::DashboardData;
use crate::render::text::{Font, Pen};
use crate::render::{RenderError, Renderer};
use crate::vframebuf::Canvas;

const MARKER: u32 = 5;

/// Map temperatures onto `plot`: x evenly spaced, y inverted so warmer sits
/// higher. A flat series uses a range of 1 and lands on the bottom edge.
///
/// Rows are whole pixels, so warmer is strictly higher only while the
/// temperature range fits in `height - 1` rows. On a shorter plot adjacent
/// degrees can share a row, but a warmer point never lands below a cooler one.
pub fn plot_points(temps: &[i32], plot: Rectangle) -> Vec<Point> {
    let n = temps.len();
    let (Some(&lo), Some(&hi)) = (temps.iter().min(), temps.iter().max()) else {
        return Vec::new();
    };
    let range = if hi == lo { 1.0 } else { f64::from(hi - lo) };
    let left = plot.top_left.x;
    let bottom = plot.top_left.y + plot.size.height as i32 - 1;
    let span_x = f64::from(plot.size.width.saturating_sub(1));
    let span_y = f64::from(plot.size.height.saturating_sub(1));

    temps
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let x = if n == 1 {
                left + (span_x / 2.0).round() as i32
            } else {
                left + (i as f64 * span_x / (n - 1) as f64).round() as i32
            };
            let y = bottom - (f64::from(t - lo) * span_y / range).round() as i32;
            Point::new(x, y)
        })
        .collect()
}

/// "3 pm"
pub fn format_hour(at: &DateTime<FixedOffset>) -> String {
    let s = at.format("%I %p").to_string().to_lowercase();
    s.strip_prefix('0').map(str::to_string).unwrap_or(s)
}

pub fn draw(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let l = r.layout();
    let theme = r.theme();
    let frame = l.timeline_frame;
    let plot = l.plot;
    frame.into_styled(PrimitiveStyle::with_stroke(theme.muted(), 1)).draw(canvas)?;

    let small = Pen::new(Font::Small, theme.muted()).scaled(l.text_scale);
    let samples = &data.hourly;
    if samples.len() < 2 {
        let label = Pen::new(Font::Label, theme.muted()).scaled(l.text_scale);
        let y = frame.center().y - label.measure("N").height as i32 / 2;
        label.draw_centered(canvas, "No hourly data", frame.center().x, y)?;
        return Ok(());
    }

    let temps: Vec<i32> = samples.iter().map(|s| s.temp).collect();
    let points = plot_points(&temps, plot);
    let bottom = plot.top_left.y + plot.size.height as i32;

    // precipitation first so the line stays on top
    let step = points[1].x - points[0].x;
    let bar_w = (step / 3).max(2) as u32;
    let mut any_pop = false;
    for (s, p) in samples.iter().zip(&points) {
        let Some(pop) = s.pop else { continue };
        any_pop = true;
        let h = plot.size.height * u32::from(pop.min(100)) / 100;
        if h == 0 {
            continue;
        }
        let top_left = Point::new(p.x - bar_w as i32 / 2, bottom - h as i32);
        Rectangle::new(top_left, Size::new(bar_w, h))
            .into_styled(PrimitiveStyle::with_fill(theme.rain()))
            .draw(canvas)?;
    }

    let line = PrimitiveStyle::with_stroke(theme.accent(), 2);
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1]).into_styled(line).draw(canvas)?;
    }
    for p in &points {
        Circle::with_center(*p, MARKER)
            .into_styled(PrimitiveStyle::with_fill(theme.accent()))
            .draw(canvas)?;
    }

    // axis labels
    let label_x = frame.top_left.x + 6;
    let label_h = small.measure("0").height as i32;
    let (lo, hi) = (temps.iter().min(), temps.iter().max());
    if let (Some(lo), Some(hi)) = (lo, hi) {
        small.draw(canvas, &format!("{hi}°"), Point::new(label_x, plot.top_left.y))?;
        small.draw(canvas, &format!("{lo}°"), Point::new(label_x, bottom - label_h))?;
    }
    if any_pop {
        let right = frame.top_left.x + frame.size.width as i32 - 6;
        small.draw_right(canvas, "100%", right, plot.top_left.y)?;
        small.draw_right(canvas, "0%", right, bottom - label_h)?;
    }

    // every other sample gets a time label
    let times = small.with_color(theme.foreground());
    for (s, p) in samples.iter().zip(&points).step_by(2) {
        times.draw_centered(canvas, &format_hour(&s.time), p.x, l.time_label_y)?;
    }
    Ok(())
}
