/*
 *  forecast.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Collapse 3-hour forecast samples into daily summaries and a timeline window
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
use log::warn;
use std::collections::BTreeMap;

use crate::models::{DailyForecast, HourlySample};

/// One raw 3-hour forecast entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix seconds.
    pub dt: i64,
    pub temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
    /// Probability of precipitation, 0.0..=1.0.
    pub pop: Option<f64>,
}

/// Unix seconds to a wall clock time at `offset`.
pub fn local_time(dt: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(dt, 0).map(|t| t.with_timezone(&offset))
}

fn time_ordered(samples: &[ForecastSample]) -> Vec<&ForecastSample> {
    let mut ordered: Vec<&ForecastSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.dt);
    ordered
}

/// Group samples by local calendar date and summarise each day.
///
/// Days come out in ascending date order, one entry per distinct date.
pub fn aggregate_daily(samples: &[ForecastSample], offset: FixedOffset) -> Vec<DailyForecast> {
    let mut days: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
    for sample in time_ordered(samples) {
        match local_time(sample.dt, offset) {
            Some(t) => days.entry(t.date_naive()).or_default().push(sample),
            None => warn!("forecast sample with out of range timestamp {} skipped", sample.dt),
        }
    }

    days.into_iter()
        .filter_map(|(date, group)| summarize_day(date, &group))
        .collect()
}

fn summarize_day(date: NaiveDate, group: &[&ForecastSample]) -> Option<DailyForecast> {
    let first = group.first()?;
    let count = group.len() as f64;

    let (lo, hi) = group.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
        (lo.min(s.temp), hi.max(s.temp))
    });
    let humidity = group.iter().map(|s| s.humidity).sum::<f64>() / count;
    let wind = group.iter().map(|s| s.wind_speed).sum::<f64>() / count;
    let description = dominant(group.iter().map(|s| s.description.as_str())).unwrap_or_default();

    Some(DailyForecast {
        date,
        day_name: date.format("%a").to_string(),
        min_temp: lo.round_ties_even() as i32,
        max_temp: hi.round_ties_even() as i32,
        description: title_case(description),
        icon: first.icon.clone(),
        humidity: humidity.round_ties_even().clamp(0.0, 100.0) as u8,
        wind_speed: (wind * 10.0).round_ties_even() / 10.0,
    })
}

/// Most frequent item; ties go to whichever appeared first.
pub fn dominant<'a>(items: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for item in items {
        match tally.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, n)) => *n += 1,
            None => tally.push((item, 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (item, n) in tally {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((item, n));
        }
    }
    best.map(|(item, _)| item)
}

/// Leading slice of raw samples for the timeline chart.
pub fn hourly_window(samples: &[ForecastSample], offset: FixedOffset, limit: usize) -> Vec<HourlySample> {
    time_ordered(samples)
        .into_iter()
        .filter_map(|s| {
            let time = local_time(s.dt, offset)?;
            Some(HourlySample {
                time,
                temp: s.temp.round_ties_even() as i32,
                icon: s.icon.clone(),
                pop: s.pop.map(|p| (p * 100.0).round_ties_even().clamp(0.0, 100.0) as u8),
            })
        })
        .take(limit)
        .collect()
}

/// "light rain" -> "Light Rain"
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn sample(dt: i64, temp: f64, desc: &str) -> ForecastSample {
        ForecastSample {
            dt,
            temp,
            humidity: 50.0,
            wind_speed: 3.0,
            description: desc.to_string(),
            icon: "01d".to_string(),
            pop: None,
        }
    }

    fn day_start(y: i32, m: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().timestamp()
    }

    #[test]
    fn test_single_day_min_max() {
        let base = day_start(2024, 3, 4);
        let temps = [50.0, 52.0, 54.0, 56.0, 54.0, 51.0, 49.0, 48.0];
        let samples: Vec<_> = temps
            .iter()
            .enumerate()
            .map(|(i, t)| sample(base + i as i64 * 3 * 3600, *t, "clear sky"))
            .collect();

        let days = aggregate_daily(&samples, utc());
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min_temp, 48);
        assert_eq!(days[0].max_temp, 56);
        assert_eq!(days[0].day_name, "Mon");
    }

    #[test]
    fn test_days_are_ordered_and_counted() {
        let d1 = day_start(2024, 3, 4);
        let d2 = day_start(2024, 3, 5);
        let d3 = day_start(2024, 3, 6);
        // deliberately shuffled
        let samples = vec![
            sample(d3 + 3600, 40.0, "snow"),
            sample(d1 + 3600, 60.0, "rain"),
            sample(d2 + 3600, 50.0, "mist"),
            sample(d1 + 7200, 65.0, "rain"),
        ];
        let days = aggregate_daily(&samples, utc());
        assert_eq!(days.len(), 3);
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        for d in &days {
            assert!(d.min_temp <= d.max_temp);
        }
        assert_eq!(days[0].date.day(), 4);
        assert_eq!(days[0].min_temp, 60);
        assert_eq!(days[0].max_temp, 65);
    }

    #[test]
    fn test_means_are_rounded() {
        let base = day_start(2024, 3, 4);
        let mut a = sample(base, 10.0, "x");
        a.humidity = 70.0;
        a.wind_speed = 2.04;
        let mut b = sample(base + 3600, 10.0, "x");
        b.humidity = 75.0;
        b.wind_speed = 3.0;
        let mut c = sample(base + 7200, 10.0, "x");
        c.humidity = 71.0;
        c.wind_speed = 4.0;

        let days = aggregate_daily(&[a, b, c], utc());
        // (70 + 75 + 71) / 3 = 72.0
        assert_eq!(days[0].humidity, 72);
        // (2.04 + 3 + 4) / 3 = 3.0133
        assert_eq!(days[0].wind_speed, 3.0);
    }

    #[test]
    fn test_halves_round_to_even() {
        let base = day_start(2024, 3, 4);
        let mut a = sample(base, 48.5, "x");
        a.humidity = 70.0;
        a.wind_speed = 2.25;
        let mut b = sample(base + 3600, 50.0, "x");
        b.humidity = 71.0;
        b.wind_speed = 2.25;

        let days = aggregate_daily(&[a, b], utc());
        // 48.5 -> 48, 70.5 -> 70, 22.5 -> 22
        assert_eq!(days[0].min_temp, 48);
        assert_eq!(days[0].max_temp, 50);
        assert_eq!(days[0].humidity, 70);
        assert_eq!(days[0].wind_speed, 2.2);

        let mut c = sample(base, 49.5, "x");
        c.pop = Some(0.125);
        let hours = hourly_window(&[c], utc(), 8);
        assert_eq!(hours[0].temp, 50);
        assert_eq!(hours[0].pop, Some(12));
    }

    #[test]
    fn test_dominant_breaks_ties_by_first_occurrence() {
        let items = ["clouds", "rain", "rain", "clouds", "sun"];
        assert_eq!(dominant(items.into_iter()), Some("clouds"));
        let items = ["rain", "clouds", "clouds"];
        assert_eq!(dominant(items.into_iter()), Some("clouds"));
        assert_eq!(dominant(std::iter::empty()), None);
    }

    #[test]
    fn test_description_and_icon_picks() {
        let base = day_start(2024, 3, 4);
        let mut first = sample(base, 10.0, "light rain");
        first.icon = "10d".into();
        let mut second = sample(base + 3600, 10.0, "overcast clouds");
        second.icon = "04d".into();
        let third = sample(base + 7200, 10.0, "light rain");

        let days = aggregate_daily(&[second, third, first], utc());
        assert_eq!(days[0].description, "Light Rain");
        assert_eq!(days[0].icon, "10d");
    }

    #[test]
    fn test_grouping_uses_local_offset() {
        // 23:00 UTC on the 4th is already the 5th in UTC+2
        let late = day_start(2024, 3, 4) + 23 * 3600;
        let samples = vec![sample(late - 6 * 3600, 10.0, "a"), sample(late, 12.0, "b")];

        assert_eq!(aggregate_daily(&samples, utc()).len(), 1);
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let days = aggregate_daily(&samples, plus_two);
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date.day(), 5);
    }

    #[test]
    fn test_hourly_window_is_capped_and_sorted() {
        let base = day_start(2024, 3, 4);
        let mut samples: Vec<_> = (0..12)
            .map(|i| {
                let mut s = sample(base + i * 3 * 3600, 40.0 + i as f64 + 0.4, "x");
                s.pop = Some(0.3);
                s
            })
            .collect();
        samples.reverse();

        let hourly = hourly_window(&samples, utc(), 8);
        assert_eq!(hourly.len(), 8);
        assert!(hourly.windows(2).all(|w| w[0].time < w[1].time));
        assert_eq!(hourly[0].temp, 40);
        assert_eq!(hourly[0].pop, Some(30));
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_daily(&[], utc()).is_empty());
        assert!(hourly_window(&[], utc(), 8).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("OVERCAST clouds"), "Overcast Clouds");
        assert_eq!(title_case("thunderstorm with heavy-rain"), "Thunderstorm With Heavy-Rain");
        assert_eq!(title_case(""), "");
    }
}
