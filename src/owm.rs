/*
 *  owm.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  OpenWeatherMap 2.5 response shapes and their normalization
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

use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;

use crate::forecast::{self, ForecastSample, title_case};
use crate::models::{AirQuality, CurrentConditions, Units};
use crate::weather::WeatherApiError;

/// Provider default when `visibility` is omitted.
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

#[derive(Debug, Clone, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: MainBlock,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
    pub name: String,
    #[serde(default)]
    pub dt: Option<i64>,
    /// Seconds east of UTC.
    #[serde(default)]
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub pop: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: ForecastCity,
}

/// `GET /uvi`
#[derive(Debug, Clone, Deserialize)]
pub struct UviResponse {
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirMain {
    pub aqi: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirEntry {
    pub main: AirMain,
}

/// `GET /air_pollution`
#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirEntry>,
}

/// Provider offset, or the host's when the response carries none.
pub fn offset_or_local(seconds: Option<i32>) -> FixedOffset {
    seconds
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| *Local::now().offset())
}

fn at(ts: Option<i64>, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    ts.and_then(|t| forecast::local_time(t, offset))
}

/// Normalize `/weather`. UV and air quality are attached by the caller.
pub fn current_conditions(
    resp: CurrentResponse,
    units: Units,
    region: Option<&str>,
    now: DateTime<FixedOffset>,
) -> Result<CurrentConditions, WeatherApiError> {
    let condition = resp
        .weather
        .first()
        .ok_or_else(|| WeatherApiError::MissingData("weather[0]".into()))?;
    let offset = offset_or_local(resp.timezone);
    let country = resp.sys.country.clone().unwrap_or_default();
    let region = region
        .map(str::to_string)
        .unwrap_or_else(|| country.clone());

    Ok(CurrentConditions {
        city: resp.name,
        country,
        region,
        lat: resp.coord.lat,
        lon: resp.coord.lon,
        temperature: resp.main.temp.round_ties_even() as i32,
        feels_like: resp.main.feels_like.round_ties_even() as i32,
        temp_min: resp.main.temp_min.round_ties_even() as i32,
        temp_max: resp.main.temp_max.round_ties_even() as i32,
        humidity: resp.main.humidity.round_ties_even().clamp(0.0, 100.0) as u8,
        pressure: resp.main.pressure.round_ties_even().max(0.0) as u32,
        wind_speed: resp.wind.speed,
        wind_deg: resp.wind.deg.unwrap_or(0.0),
        visibility: Some(units.visibility_from_metres(resp.visibility.unwrap_or(DEFAULT_VISIBILITY_M))),
        uv_index: None,
        air_quality: None,
        icon: condition.icon.clone(),
        description: title_case(&condition.description),
        sunrise: at(resp.sys.sunrise, offset),
        sunset: at(resp.sys.sunset, offset),
        observed: at(resp.dt, offset).unwrap_or(now),
    })
}

/// Flatten `/forecast` into samples; entries without a condition are dropped.
pub fn forecast_samples(resp: &ForecastResponse) -> Vec<ForecastSample> {
    resp.list
        .iter()
        .filter_map(|item| {
            let condition = item.weather.first()?;
            Some(ForecastSample {
                dt: item.dt,
                temp: item.main.temp,
                humidity: item.main.humidity,
                wind_speed: item.wind.speed,
                description: condition.description.clone(),
                icon: condition.icon.clone(),
                pop: item.pop,
            })
        })
        .collect()
}

pub fn uv_index(resp: &UviResponse) -> f64 {
    (resp.value * 10.0).round_ties_even() / 10.0
}

pub fn air_quality(resp: &AirPollutionResponse) -> Option<AirQuality> {
    resp.list.first().and_then(|e| AirQuality::from_index(e.main.aqi))
}
