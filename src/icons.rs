/*
 *  icons.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Weather icon codes, asset lookup and condition categories
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

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Condition family encoded in the first two characters of an icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Clear,
    Clouds,
    Rain,
    Storm,
    Snow,
    Mist,
    Unknown,
}

impl IconCategory {
    pub fn from_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => IconCategory::Clear,
            Some("02" | "03" | "04") => IconCategory::Clouds,
            Some("09" | "10") => IconCategory::Rain,
            Some("11") => IconCategory::Storm,
            Some("13") => IconCategory::Snow,
            Some("50") => IconCategory::Mist,
            _ => IconCategory::Unknown,
        }
    }
}

/// Night codes share artwork with their day counterpart: "10n" -> "10d".
pub fn normalize_code(code: &str) -> String {
    match code.strip_suffix('n') {
        Some(stem) => format!("{stem}d"),
        None => code.to_string(),
    }
}

/// Small glyphs shown next to the detail rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailIcon {
    Sunrise,
    Sunset,
    Wind,
    Visibility,
    Humidity,
    Pressure,
    AirQuality,
    UvIndex,
}

impl DetailIcon {
    pub fn asset_name(&self) -> &'static str {
        match self {
            DetailIcon::Sunrise => "sunrise",
            DetailIcon::Sunset => "sunset",
            DetailIcon::Wind => "wind",
            DetailIcon::Visibility => "visibility",
            DetailIcon::Humidity => "humidity",
            DetailIcon::Pressure => "pressure",
            DetailIcon::AirQuality => "aqi",
            DetailIcon::UvIndex => "uvi",
        }
    }
}

/// Directory of `{name}.svg` assets.
#[derive(Debug, Clone)]
pub struct IconSet {
    dir: PathBuf,
}

impl IconSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.svg"))
    }

    /// SVG source for a provider icon code; `None` (with a warning) if absent.
    pub fn weather(&self, code: &str) -> Option<String> {
        self.load(&normalize_code(code))
    }

    pub fn detail(&self, icon: DetailIcon) -> Option<String> {
        self.load(icon.asset_name())
    }

    fn load(&self, name: &str) -> Option<String> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(svg) => Some(svg),
            Err(_) => {
                warn!("{} doesn't exist!", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(IconCategory::from_code("01d"), IconCategory::Clear);
        assert_eq!(IconCategory::from_code("03n"), IconCategory::Clouds);
        assert_eq!(IconCategory::from_code("09d"), IconCategory::Rain);
        assert_eq!(IconCategory::from_code("10n"), IconCategory::Rain);
        assert_eq!(IconCategory::from_code("11d"), IconCategory::Storm);
        assert_eq!(IconCategory::from_code("13d"), IconCategory::Snow);
        assert_eq!(IconCategory::from_code("50d"), IconCategory::Mist);
        assert_eq!(IconCategory::from_code("x"), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(""), IconCategory::Unknown);
    }

    #[test]
    fn test_night_codes_normalize() {
        assert_eq!(normalize_code("10n"), "10d");
        assert_eq!(normalize_code("01d"), "01d");
        assert_eq!(normalize_code("sunrise"), "sunrise");
    }

    #[test]
    fn test_missing_asset_is_none() {
        let icons = IconSet::new("/nonexistent/icons");
        assert!(icons.weather("01d").is_none());
        assert_eq!(icons.path_for("01d"), PathBuf::from("/nonexistent/icons/01d.svg"));
    }

    #[test]
    fn test_bundled_assets_present() {
        let icons = IconSet::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons"));
        for code in ["01d", "01n", "02d", "03d", "04d", "09d", "10d", "11d", "13d", "50d"] {
            assert!(icons.weather(code).is_some(), "missing icon {code}");
        }
        for d in [DetailIcon::Sunrise, DetailIcon::Sunset, DetailIcon::Wind, DetailIcon::Visibility,
                  DetailIcon::Humidity, DetailIcon::Pressure, DetailIcon::AirQuality, DetailIcon::UvIndex] {
            assert!(icons.detail(d).is_some(), "missing detail icon {:?}", d);
        }
    }
}
