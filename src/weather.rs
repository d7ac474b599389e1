/*
 *  weather.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  OpenWeatherMap client: current conditions, forecast, UV index and air quality
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
use flate2::read::GzDecoder;
use log::{debug, error, info, warn};
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::time::Duration;
use thiserror::Error;

use crate::config::WeatherSettings;
use crate::forecast::{aggregate_daily, hourly_window};
use crate::models::{AirQuality, CurrentConditions, DailyForecast, DashboardData, HourlySample, Units};
use crate::owm::{self, AirPollutionResponse, CurrentResponse, ForecastResponse, UviResponse};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Current conditions and forecast.
const PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);
/// UV index and air quality.
const AUX_TIMEOUT: Duration = Duration::from_secs(5);

/// Custom error type for weather API operations.
#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenWeatherMap returned {status} for /{endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Missing weather data: {0}")]
    MissingData(String),
}

/// Daily summaries plus the raw leading window for the timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastBundle {
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlySample>,
}

#[derive(Debug)]
pub struct WeatherClient {
    client: Client,
    settings: WeatherSettings,
}

impl WeatherClient {
    pub fn new(settings: WeatherSettings) -> Result<Self, WeatherApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert("User-Agent", header::HeaderValue::from_static(VERSION));
        headers.insert("Accept", header::HeaderValue::from_static("application/json"));
        headers.insert("Accept-Encoding", header::HeaderValue::from_static("gzip"));
        headers.insert("Connection", header::HeaderValue::from_static("close"));

        let client = Client::builder()
            .connect_timeout(AUX_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &WeatherSettings {
        &self.settings
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), endpoint)
    }

    fn city_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", format!("{},{}", self.settings.city, self.settings.country)),
            ("appid", self.settings.api_key.clone()),
            ("units", self.settings.units.as_query().to_string()),
        ]
    }

    fn coord_params(&self, lat: f64, lon: f64) -> Vec<(&'static str, String)> {
        vec![
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.settings.api_key.clone()),
        ]
    }

    /// One GET; any non-2xx status is an error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        timeout: Duration,
    ) -> Result<T, WeatherApiError> {
        let response = self.client
            .get(self.endpoint_url(endpoint))
            .query(params)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let raw = response.bytes().await?;
        let body = decode_body(&raw);
        debug!("/{endpoint} returned {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }

    /// Current conditions with UV and air quality attached when available.
    pub async fn fetch_current(&self) -> Option<CurrentConditions> {
        let now = Local::now().fixed_offset();
        let resp: CurrentResponse = match self.get_json("weather", &self.city_params(), PRIMARY_TIMEOUT).await {
            Ok(r) => r,
            Err(e) => {
                error!("Error fetching current weather: {e}");
                return None;
            }
        };

        let (lat, lon) = (resp.coord.lat, resp.coord.lon);
        let mut current = match owm::current_conditions(resp, self.settings.units, self.settings.region.as_deref(), now) {
            Ok(c) => c,
            Err(e) => {
                error!("Error reading current weather: {e}");
                return None;
            }
        };
        current.uv_index = self.fetch_uv_index(lat, lon).await;
        current.air_quality = self.fetch_air_quality(lat, lon).await;
        Some(current)
    }

    pub async fn fetch_uv_index(&self, lat: f64, lon: f64) -> Option<f64> {
        match self.get_json::<UviResponse>("uvi", &self.coord_params(lat, lon), AUX_TIMEOUT).await {
            Ok(r) => Some(owm::uv_index(&r)),
            Err(e) => {
                warn!("UV index unavailable: {e}");
                None
            }
        }
    }

    pub async fn fetch_air_quality(&self, lat: f64, lon: f64) -> Option<AirQuality> {
        match self.get_json::<AirPollutionResponse>("air_pollution", &self.coord_params(lat, lon), AUX_TIMEOUT).await {
            Ok(r) => owm::air_quality(&r),
            Err(e) => {
                warn!("Air quality unavailable: {e}");
                None
            }
        }
    }

    /// Forecast degrades to empty lists on any failure.
    pub async fn fetch_forecast(&self) -> ForecastBundle {
        match self.get_json::<ForecastResponse>("forecast", &self.city_params(), PRIMARY_TIMEOUT).await {
            Ok(resp) => {
                let offset = owm::offset_or_local(resp.city.timezone);
                let samples = owm::forecast_samples(&resp);
                ForecastBundle {
                    daily: aggregate_daily(&samples, offset),
                    hourly: hourly_window(&samples, offset, self.settings.timeline_samples),
                }
            }
            Err(e) => {
                error!("Error fetching forecast: {e}");
                ForecastBundle::default()
            }
        }
    }

    /// One fetch cycle. `None` when current conditions are unavailable.
    pub async fn fetch_dashboard(&self) -> Option<DashboardData> {
        info!("Fetching weather data for {}, {}...", self.settings.city, self.settings.country);
        let current = self.fetch_current().await?;
        let forecast = self.fetch_forecast().await;
        Some(assemble(current, forecast, self.settings.units, Local::now().fixed_offset()))
    }
}

pub fn assemble(
    current: CurrentConditions,
    forecast: ForecastBundle,
    units: Units,
    last_updated: DateTime<FixedOffset>,
) -> DashboardData {
    info!(
        "{}: {}{} {}, {} forecast days, {} timeline samples",
        current.location(),
        current.temperature,
        units.temp_suffix(),
        current.description,
        forecast.daily.len(),
        forecast.hourly.len()
    );
    DashboardData {
        current,
        daily: forecast.daily,
        hourly: forecast.hourly,
        units,
        last_updated,
    }
}

/// Gzip bodies are inflated; anything else is taken as text.
pub fn decode_body(raw: &[u8]) -> String {
    if raw.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(raw);
        let mut decoded = String::new();
        if decoder.read_to_string(&mut decoded).is_ok() {
            return decoded;
        }
        warn!("gzip magic present but body did not inflate, treating as text");
    }
    String::from_utf8_lossy(raw).to_string()
}
