/*
 *  sample.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Built-in sample data for preview runs
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

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};

use crate::models::{AirQuality, CurrentConditions, DailyForecast, DashboardData, HourlySample, Units};

/// EDT
const UTC_OFFSET_SECS: i32 = -4 * 3600;

fn at(day: u32, hour: u32, min: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    let local = NaiveDate::from_ymd_opt(2026, 3, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default();
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// A fixed spring morning in Conshohocken, PA, in imperial units.
pub fn sample_dashboard() -> DashboardData {
    let observed = at(14, 10, 30);

    let current = CurrentConditions {
        city: "Conshohocken".into(),
        country: "US".into(),
        region: "US".into(),
        lat: 40.0793,
        lon: -75.3016,
        temperature: 54,
        feels_like: 51,
        temp_min: 51,
        temp_max: 56,
        humidity: 60,
        pressure: 1016,
        wind_speed: 5.99,
        wind_deg: 180.0,
        visibility: Some(6.2),
        uv_index: Some(2.9),
        air_quality: AirQuality::from_index(2),
        icon: "02d".into(),
        description: "Few Clouds".into(),
        sunrise: Some(at(14, 7, 9)),
        sunset: Some(at(14, 19, 8)),
        observed,
    };

    let outlook = [
        ("02d", "Few Clouds", 48, 56),
        ("10d", "Light Rain", 45, 52),
        ("04d", "Broken Clouds", 43, 55),
        ("01d", "Clear Sky", 41, 61),
        ("11d", "Thunderstorm", 50, 67),
        ("03d", "Scattered Clouds", 47, 63),
    ];
    let daily = outlook
        .iter()
        .enumerate()
        .map(|(i, &(icon, description, min_temp, max_temp))| {
            let date = observed.date_naive() + Duration::days(i as i64);
            DailyForecast {
                date,
                day_name: date.format("%a").to_string(),
                min_temp,
                max_temp,
                description: description.into(),
                icon: icon.into(),
                humidity: 55 + 3 * i as u8,
                wind_speed: 4.5 + i as f64 / 2.0,
            }
        })
        .collect();

    let hours = [
        (54, "02d", Some(0)),
        (56, "03d", Some(10)),
        (55, "04d", Some(20)),
        (52, "10n", Some(60)),
        (50, "10n", Some(80)),
        (49, "04n", Some(40)),
        (48, "04n", Some(20)),
        (51, "02d", Some(0)),
    ];
    let start = at(14, 12, 0);
    let hourly = hours
        .iter()
        .enumerate()
        .map(|(i, &(temp, icon, pop))| HourlySample {
            time: start + Duration::hours(3 * i as i64),
            temp,
            icon: icon.into(),
            pop,
        })
        .collect();

    DashboardData {
        current,
        daily,
        hourly,
        units: Units::Imperial,
        last_updated: observed,
    }
}
