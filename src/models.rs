/*
 *  models.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Normalized weather records consumed by the renderer
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

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    /// Kelvin and m/s
    Standard,
}

impl Units {
    /// Value sent as the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temp_letter(&self) -> &'static str {
        match self {
            Units::Metric => "C",
            Units::Imperial => "F",
            Units::Standard => "K",
        }
    }

    /// Suffix drawn after a temperature, e.g. "°F".
    pub fn temp_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric | Units::Standard => "m/s",
        }
    }

    pub fn visibility_unit(&self) -> &'static str {
        match self {
            Units::Imperial => "mi",
            Units::Metric | Units::Standard => "km",
        }
    }

    /// Convert a temperature in this unit system to Fahrenheit.
    pub fn to_fahrenheit(&self, value: f64) -> f64 {
        match self {
            Units::Imperial => value,
            Units::Metric => value * 9.0 / 5.0 + 32.0,
            Units::Standard => (value - 273.15) * 9.0 / 5.0 + 32.0,
        }
    }

    /// Convert a provider visibility in metres to this unit system's distance.
    pub fn visibility_from_metres(&self, metres: f64) -> f64 {
        let v = match self {
            Units::Imperial => metres / 1609.344,
            Units::Metric | Units::Standard => metres / 1000.0,
        };
        (v * 10.0).round_ties_even() / 10.0
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "fahrenheit" | "imperial" => Ok(Units::Imperial),
            "c" | "celsius" | "metric" => Ok(Units::Metric),
            "k" | "kelvin" | "standard" => Ok(Units::Standard),
            other => Err(format!("unknown unit system '{other}'")),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Air quality index (1..=5) with its descriptive label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirQuality {
    pub index: u8,
    pub label: String,
}

const AQI_LABELS: [&str; 5] = ["Good", "Fair", "Moderate", "Poor", "Very Poor"];

impl AirQuality {
    /// Index 0 means the provider had nothing to report.
    pub fn from_index(index: u8) -> Option<Self> {
        if index == 0 {
            return None;
        }
        let slot = usize::from(index - 1).min(AQI_LABELS.len() - 1);
        Some(Self { index, label: AQI_LABELS[slot].to_string() })
    }
}

/// Snapshot of current conditions; optional fields were fetched best-effort.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    /// Second half of the "City, Region" header line.
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    pub temperature: i32,
    pub feels_like: i32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub visibility: Option<f64>,
    pub uv_index: Option<f64>,
    pub air_quality: Option<AirQuality>,
    pub icon: String,
    pub description: String,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub observed: DateTime<FixedOffset>,
}

impl CurrentConditions {
    pub fn location(&self) -> String {
        if self.region.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.region)
        }
    }
}

/// One calendar day summarised from the 3-hour samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub day_name: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub description: String,
    pub icon: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub time: DateTime<FixedOffset>,
    pub temp: i32,
    pub icon: String,
    /// Precipitation probability, 0..=100.
    pub pop: Option<u8>,
}

/// Everything one render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlySample>,
    pub units: Units,
    pub last_updated: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_aliases() {
        assert_eq!("F".parse::<Units>().unwrap(), Units::Imperial);
        assert_eq!("celsius".parse::<Units>().unwrap(), Units::Metric);
        assert_eq!(" Imperial ".parse::<Units>().unwrap(), Units::Imperial);
        assert_eq!("standard".parse::<Units>().unwrap(), Units::Standard);
        assert!("furlongs".parse::<Units>().is_err());
    }

    #[test]
    fn test_units_suffixes() {
        assert_eq!(Units::Imperial.temp_suffix(), "°F");
        assert_eq!(Units::Metric.wind_unit(), "m/s");
        assert_eq!(Units::Imperial.visibility_unit(), "mi");
    }

    #[test]
    fn test_fahrenheit_conversion() {
        assert_eq!(Units::Metric.to_fahrenheit(100.0), 212.0);
        assert_eq!(Units::Imperial.to_fahrenheit(54.0), 54.0);
        assert!((Units::Standard.to_fahrenheit(273.15) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_conversion() {
        assert_eq!(Units::Metric.visibility_from_metres(10_000.0), 10.0);
        assert_eq!(Units::Imperial.visibility_from_metres(16_093.44), 10.0);
    }

    #[test]
    fn test_air_quality_labels() {
        assert_eq!(AirQuality::from_index(0), None);
        assert_eq!(AirQuality::from_index(1).unwrap().label, "Good");
        assert_eq!(AirQuality::from_index(2).unwrap().label, "Fair");
        assert_eq!(AirQuality::from_index(5).unwrap().label, "Very Poor");
        // out of range clamps to the worst label
        assert_eq!(AirQuality::from_index(9).unwrap().label, "Very Poor");
    }
}
