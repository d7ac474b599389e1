/*
 *  render/error_panel.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Full-canvas error panel
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
use chrono::NaiveDateTime;
use embedded_graphics::{mono_font::MonoTextStyle, prelude::*, primitives::Rectangle};
use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
    TextBox,
};

use crate::render::layout::Layout;
use crate::render::text::{Font, Pen};
use crate::render::theme::{palette, Theme};
use crate::vframebuf::Canvas;

pub const DEFAULT_MESSAGE: &str =
    "Unable to fetch weather data. Check your API key and internet connection.";

/// "Last updated: 2026-03-14 12:00:00"
pub fn timestamp_line(now: &NaiveDateTime) -> String {
    format!("Last updated: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// White panel whatever the theme; only the headline colour follows it.
pub fn draw(
    canvas: &mut Canvas,
    l: &Layout,
    theme: Theme,
    message: &str,
    now: NaiveDateTime,
) -> Result<(), Infallible> {
    canvas.clear(palette::WHITE)?;
    let h = l.height as i32;
    let cx = l.center_x();

    let headline = Pen::new(Font::Large, theme.error()).scaled(3 * l.text_scale);
    headline.draw_centered(canvas, "ERROR", cx, h / 4 - headline.measure("E").height as i32 / 2)?;

    let margin = 2 * l.footer_margin + 10;
    let bounds = Rectangle::new(
        Point::new(margin, h / 2 - h / 10),
        Size::new(l.width.saturating_sub(2 * margin as u32), (h / 5) as u32),
    );
    let style = MonoTextStyle::new(Font::Label.mono(), palette::BLACK);
    let textbox_style = TextBoxStyleBuilder::new()
        .alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Middle)
        .build();
    TextBox::with_textbox_style(message, bounds, style, textbox_style).draw(canvas)?;

    let stamp = Pen::new(Font::Body, palette::GRAY).scaled(l.text_scale);
    stamp.draw_centered(canvas, &timestamp_line(&now), cx, h * 3 / 4)?;
    Ok(())
}
