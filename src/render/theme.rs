/*
 *  render/theme.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Colour themes and the fixed panel palette
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

use clap::ValueEnum;
use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::icons::IconCategory;
use crate::models::Units;

/// Colours the 7-colour panels reproduce faithfully, plus two greys for
/// the RGB and monochrome paths.
pub mod palette {
    use embedded_graphics::pixelcolor::Rgb888;

    pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
    pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);
    pub const RED: Rgb888 = Rgb888::new(255, 0, 0);
    pub const YELLOW: Rgb888 = Rgb888::new(255, 255, 0);
    pub const BLUE: Rgb888 = Rgb888::new(0, 0, 255);
    pub const GREEN: Rgb888 = Rgb888::new(0, 255, 0);
    pub const ORANGE: Rgb888 = Rgb888::new(255, 140, 0);
    pub const GRAY: Rgb888 = Rgb888::new(128, 128, 128);
    pub const LIGHT_GRAY: Rgb888 = Rgb888::new(192, 192, 192);
}

use palette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Per-value colours on white
    #[default]
    Color,
    /// Black on white
    Mono,
    /// White and grey on black
    Dark,
}

impl Theme {
    pub fn background(&self) -> Rgb888 {
        match self {
            Theme::Color | Theme::Mono => WHITE,
            Theme::Dark => BLACK,
        }
    }

    pub fn foreground(&self) -> Rgb888 {
        match self {
            Theme::Color | Theme::Mono => BLACK,
            Theme::Dark => WHITE,
        }
    }

    /// Secondary text, frames and card outlines.
    pub fn muted(&self) -> Rgb888 {
        match self {
            Theme::Color | Theme::Mono => GRAY,
            Theme::Dark => LIGHT_GRAY,
        }
    }

    /// Timeline line and markers.
    pub fn accent(&self) -> Rgb888 {
        match self {
            Theme::Color => BLUE,
            _ => self.foreground(),
        }
    }

    /// Precipitation bars.
    pub fn rain(&self) -> Rgb888 {
        match self {
            Theme::Color => BLUE,
            Theme::Mono => LIGHT_GRAY,
            Theme::Dark => GRAY,
        }
    }

    pub fn error(&self) -> Rgb888 {
        match self {
            Theme::Color => RED,
            _ => BLACK,
        }
    }

    /// Colour for a temperature shown in the active unit system.
    pub fn temperature(&self, temp: i32, units: Units) -> Rgb888 {
        match self {
            Theme::Color => temperature_band(units.to_fahrenheit(f64::from(temp))),
            _ => self.foreground(),
        }
    }

    /// Ink colour for a weather icon.
    pub fn icon(&self, code: &str) -> Rgb888 {
        if *self != Theme::Color {
            return self.foreground();
        }
        match IconCategory::from_code(code) {
            IconCategory::Clear => YELLOW,
            IconCategory::Clouds | IconCategory::Mist => GRAY,
            IconCategory::Rain | IconCategory::Snow => BLUE,
            IconCategory::Storm => RED,
            IconCategory::Unknown => BLACK,
        }
    }
}

/// Fixed bands in °F.
pub fn temperature_band(fahrenheit: f64) -> Rgb888 {
    match fahrenheit {
        f if f >= 80.0 => RED,
        f if f >= 70.0 => ORANGE,
        f if f >= 60.0 => YELLOW,
        f if f >= 50.0 => GREEN,
        _ => BLUE,
    }
}
