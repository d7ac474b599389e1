/*
 *  render/forecast_row.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Row of per-day forecast cards
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
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::models::{DailyForecast, DashboardData};
use crate::render::layout::Layout;
use crate::render::text::{fit, Font, Pen};
use crate::render::{RenderError, Renderer};
use crate::vframebuf::Canvas;

pub const MIN_CARDS: usize = 5;
pub const MAX_CARDS: usize = 7;
const CORNER: u32 = 6;

/// Configured count held to 5..=7, then cut to the days actually available.
pub fn card_count(configured: usize, available: usize) -> usize {
    configured.clamp(MIN_CARDS, MAX_CARDS).min(available)
}

/// Day names for the first `count` days; the first card always reads "Today".
pub fn card_labels(days: &[DailyForecast], count: usize) -> Vec<String> {
    days.iter()
        .take(count)
        .enumerate()
        .map(|(i, d)| if i == 0 { "Today".to_string() } else { d.day_name.clone() })
        .collect()
}

/// Equal-width cards across the canvas minus side padding and gaps.
pub fn card_rects(l: &Layout, count: usize) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    let usable = l.width as i32 - 2 * l.card_padding - (n - 1) * l.card_gap;
    let w = (usable / n).max(0);
    (0..n)
        .map(|i| {
            let x = l.card_padding + i * (w + l.card_gap);
            Rectangle::new(Point::new(x, l.cards_top), Size::new(w as u32, l.card_height))
        })
        .collect()
}

pub fn draw(r: &Renderer, canvas: &mut Canvas, data: &DashboardData) -> Result<(), RenderError> {
    let l = r.layout();
    let theme = r.theme();
    let count = card_count(r.settings().forecast_days, data.daily.len());

    if count == 0 {
        let pen = Pen::new(Font::Label, theme.muted()).scaled(l.text_scale);
        let y = l.cards_top + l.card_height as i32 / 2 - pen.measure("F").height as i32 / 2;
        pen.draw_centered(canvas, "Forecast unavailable", l.center_x(), y)?;
        return Ok(());
    }

    let rects = card_rects(l, count);
    if rects.iter().any(|c| c.size.width < l.card_icon) {
        return Err(RenderError::Geometry(format!(
            "{count} forecast cards do not fit {}px", l.width
        )));
    }

    let labels = card_labels(&data.daily, count);
    let title = Pen::new(Font::Strong, theme.foreground()).scaled(l.text_scale);
    let temps = Pen::new(Font::Label, theme.foreground()).scaled(l.text_scale);

    for ((rect, day), label) in rects.iter().zip(&data.daily).zip(&labels) {
        RoundedRectangle::with_equal_corners(*rect, Size::new_equal(CORNER))
            .into_styled(PrimitiveStyle::with_stroke(theme.muted(), 1))
            .draw(canvas)?;

        let cx = rect.center().x;
        let top = rect.top_left.y;
        let room = rect.size.width.saturating_sub(4);
        title.draw_centered(canvas, &fit(&title, label, room), cx, top + l.card_label_dy)?;

        let icon = Rectangle::new(
            Point::new(cx - l.card_icon as i32 / 2, top + l.card_icon_dy),
            Size::new_equal(l.card_icon),
        );
        r.draw_icon(canvas, r.icons().weather(&day.icon), icon, theme.icon(&day.icon))?;

        // "max / min", each value in its own band colour
        let hi = format!("{}°", day.max_temp);
        let lo = format!("{}°", day.min_temp);
        let sep = "/";
        let total = temps.measure(&hi).width + temps.measure(sep).width + temps.measure(&lo).width;
        let mut x = cx - total as i32 / 2;
        let y = top + l.card_temps_dy;
        x += temps.with_color(theme.temperature(day.max_temp, data.units))
            .draw(canvas, &hi, Point::new(x, y))?.width as i32;
        x += temps.with_color(theme.muted()).draw(canvas, sep, Point::new(x, y))?.width as i32;
        temps.with_color(theme.temperature(day.min_temp, data.units))
            .draw(canvas, &lo, Point::new(x, y))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn days(n: usize) -> Vec<DailyForecast> {
        let start = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        (0..n)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                DailyForecast {
                    date,
                    day_name: date.format("%a").to_string(),
                    min_temp: 40 + i as i32,
                    max_temp: 50 + i as i32,
                    description: "Clear Sky".into(),
                    icon: "01d".into(),
                    humidity: 50,
                    wind_speed: 3.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_ten_days_six_cards() {
        let d = days(10);
        let count = card_count(6, d.len());
        assert_eq!(count, 6);
        let labels = card_labels(&d, count);
        assert_eq!(labels.len(), 6);
        // 2026-03-12 is a Thursday
        assert_eq!(d[0].day_name, "Thu");
        assert_eq!(labels[0], "Today");
        assert_eq!(labels[1], "Fri");
    }

    #[test]
    fn test_card_count_bounds() {
        assert_eq!(card_count(3, 10), 5);
        assert_eq!(card_count(9, 10), 7);
        assert_eq!(card_count(6, 4), 4);
        assert_eq!(card_count(6, 0), 0);
    }

    #[test]
    fn test_equal_width_cards() {
        let l = Layout::for_resolution(800, 480).unwrap();
        for n in MIN_CARDS..=MAX_CARDS {
            let rects = card_rects(&l, n);
            assert_eq!(rects.len(), n);
            assert!(rects.iter().all(|r| r.size.width == rects[0].size.width));
            assert_eq!(rects[0].top_left.x, l.card_padding);
            let last = rects[n - 1];
            assert!(last.top_left.x + last.size.width as i32 <= 800 - l.card_padding);
            for pair in rects.windows(2) {
                let gap = pair[1].top_left.x - (pair[0].top_left.x + pair[0].size.width as i32);
                assert_eq!(gap, l.card_gap);
            }
        }
    }
}
