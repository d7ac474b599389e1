/*
 *  template.rs
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Placeholder substitution for HTML dashboards
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

//! `{{ name }}` substitution over a text template, for panels driven by an
//! HTML page instead of the built-in raster layout.

use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::forecast::title_case;
use crate::icons::normalize_code;
use crate::models::DashboardData;
use crate::render::details::clock;
use crate::render::forecast_row::{card_count, card_labels};
use crate::render::header::date_line;
use crate::render::timeline::format_hour;
use crate::wind::WindArrow;

const MISSING: &str = "--";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template I/O: {0}")]
    Io(#[from] std::io::Error),
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn icon_file(code: &str) -> String {
    format!("{}.svg", normalize_code(code))
}

/// All placeholder values for one dashboard.
pub fn context(data: &DashboardData, forecast_days: usize) -> BTreeMap<String, String> {
    let c = &data.current;
    let u = data.units;
    let mut ctx = BTreeMap::new();
    let mut put = |k: &str, v: String| {
        ctx.insert(k.to_string(), v);
    };

    put("city", escape(&c.city));
    put("country", escape(&c.country));
    put("region", escape(&c.region));
    put("current_date", date_line(&data.last_updated));
    put("temperature", c.temperature.to_string());
    put("temp_unit", u.temp_suffix().to_string());
    put("feels_like", c.feels_like.to_string());
    put("temp_high", c.temp_max.to_string());
    put("temp_low", c.temp_min.to_string());
    put("description", escape(&title_case(&c.description)));
    put("current_icon", icon_file(&c.icon));
    put("humidity", c.humidity.to_string());
    put("wind_speed", format!("{:.1}", c.wind_speed));
    put("wind_unit", u.wind_unit().to_string());
    put("wind_arrow", WindArrow::from_degrees(c.wind_deg).as_char().to_string());
    put("pressure", c.pressure.to_string());
    put("sunrise", c.sunrise.as_ref().map(clock).unwrap_or_else(|| MISSING.into()));
    put("sunset", c.sunset.as_ref().map(clock).unwrap_or_else(|| MISSING.into()));
    put("visibility", c.visibility.map(|v| format!("{v:.1} {}", u.visibility_unit())).unwrap_or_else(|| MISSING.into()));
    put("uv_index", c.uv_index.map(|v| format!("{v:.1}")).unwrap_or_else(|| MISSING.into()));
    put("air_quality", c.air_quality.as_ref().map(|a| escape(&a.label)).unwrap_or_else(|| MISSING.into()));
    put("last_updated", data.last_updated.format("%I:%M%p").to_string().to_lowercase());

    let labels = card_labels(&data.daily, card_count(forecast_days, data.daily.len()));
    let mut cards = String::new();
    for (i, (day, label)) in data.daily.iter().zip(&labels).enumerate() {
        put(&format!("forecast_{i}_day"), escape(label));
        put(&format!("forecast_{i}_icon"), icon_file(&day.icon));
        put(&format!("forecast_{i}_max"), day.max_temp.to_string());
        put(&format!("forecast_{i}_min"), day.min_temp.to_string());
        cards.push_str(&format!(
            "<div class=\"day\"><div class=\"name\">{}</div><img src=\"icons/{}\" alt=\"{}\"><div class=\"temps\">{}&deg; / {}&deg;</div></div>\n",
            escape(label), icon_file(&day.icon), escape(&day.description), day.max_temp, day.min_temp
        ));
    }
    put("forecast", cards);

    let mut hours = String::new();
    for (i, h) in data.hourly.iter().enumerate() {
        let time = format_hour(&h.time);
        put(&format!("hourly_{i}_time"), time.clone());
        put(&format!("hourly_{i}_temp"), h.temp.to_string());
        put(&format!("hourly_{i}_icon"), icon_file(&h.icon));
        let pop = h.pop.map(|p| format!("<div class=\"pop\">{p}%</div>")).unwrap_or_default();
        hours.push_str(&format!(
            "<div class=\"hour\"><div class=\"time\">{}</div><img src=\"icons/{}\"><div class=\"temp\">{}&deg;</div>{}</div>\n",
            time, icon_file(&h.icon), h.temp, pop
        ));
    }
    put("hourly_data", hours);

    ctx
}

/// Replace every known `{{ key }}`; unknown ones stay as written.
pub fn render(template: &str, ctx: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut unknown = BTreeSet::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // unterminated, copy verbatim
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let key = after[..end].trim();
        match ctx.get(key) {
            Some(v) => out.push_str(v),
            None => {
                unknown.insert(key.to_string());
                out.push_str(&rest[start..start + 2 + end + 2]);
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    for key in unknown {
        debug!("Template placeholder {{{{ {} }}}} has no value", key);
    }
    out
}

pub fn render_file(
    template: &Path,
    output: &Path,
    data: &DashboardData,
    forecast_days: usize,
) -> Result<(), TemplateError> {
    let source = fs::read_to_string(template)?;
    let html = render(&source, &context(data, forecast_days));
    fs::write(output, html)?;
    info!("Template {} rendered to {}", template.display(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_dashboard;

    #[test]
    fn test_known_and_unknown_keys() {
        let ctx = context(&sample_dashboard(), 6);
        let out = render("<h1>{{ city }}, {{region}}</h1> {{ nope }} {{temperature}}{{ temp_unit }}", &ctx);
        assert_eq!(out, "<h1>Conshohocken, US</h1> {{ nope }} 54°F");
    }

    #[test]
    fn test_unterminated_placeholder_is_kept() {
        let ctx = context(&sample_dashboard(), 6);
        assert_eq!(render("a {{ city", &ctx), "a {{ city");
        assert_eq!(render("", &ctx), "");
    }

    #[test]
    fn test_indexed_keys() {
        let data = sample_dashboard();
        let ctx = context(&data, 5);
        assert_eq!(ctx["forecast_0_day"], "Today");
        assert_eq!(ctx["forecast_4_max"], "67");
        assert!(!ctx.contains_key("forecast_5_day"));
        assert_eq!(ctx["hourly_0_time"], "12 pm");
        assert_eq!(ctx["hourly_3_icon"], "10d.svg");
        assert_eq!(ctx["wind_arrow"], "↑");
        assert_eq!(ctx["forecast"].matches("class=\"day\"").count(), 5);
        assert_eq!(ctx["hourly_data"].matches("class=\"hour\"").count(), 8);
    }

    #[test]
    fn test_missing_values_and_escaping() {
        let mut data = sample_dashboard();
        data.current.uv_index = None;
        data.current.city = "Barnes & Noble".into();
        let ctx = context(&data, 6);
        assert_eq!(ctx["uv_index"], "--");
        assert_eq!(ctx["city"], "Barnes &amp; Noble");
    }

    #[test]
    fn test_render_file() {
        let dir = std::env::temp_dir().join(format!("wxpanel-tpl-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let tpl = dir.join("in.html");
        let out = dir.join("out.html");
        fs::write(&tpl, "<p>{{ description }} {{ humidity }}%</p>").unwrap();
        render_file(&tpl, &out, &sample_dashboard(), 6).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "<p>Few Clouds 60%</p>");
        let _ = fs::remove_dir_all(&dir);
    }
}
