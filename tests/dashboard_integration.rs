/*
 *  tests/dashboard_integration.rs
 *
 *  End-to-end tests for the dashboard pipeline
 *
 *  WxPanel - weather at a glance
 *  (c) 2020-26 Stuart Hunter
 */

use std::path::PathBuf;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use wxpanel::config::{DisplaySettings, Settings, SinkKind, WeatherSettings};
use wxpanel::dashboard::Dashboard;
use wxpanel::display::{ColorDepth, DeviceSink, DisplaySink, MockSink};
use wxpanel::forecast::{aggregate_daily, ForecastSample};
use wxpanel::models::Units;
use wxpanel::render::error_panel::DEFAULT_MESSAGE;
use wxpanel::render::forecast_row::{card_count, card_labels};
use wxpanel::render::Renderer;
use wxpanel::sample::sample_dashboard;
use wxpanel::weather::DEFAULT_BASE_URL;
use wxpanel::wind::WindArrow;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wxpanel-it-{}-{}", std::process::id(), name))
}

fn icons_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons"))
}

fn display(output: PathBuf) -> DisplaySettings {
    DisplaySettings { output, icons_dir: icons_dir(), ..Default::default() }
}

fn sample(dt: i64, temp: f64, desc: &str) -> ForecastSample {
    ForecastSample {
        dt,
        temp,
        humidity: 60.0,
        wind_speed: 4.0,
        description: desc.to_string(),
        icon: "04d".to_string(),
        pop: None,
    }
}

fn midnight_utc(y: i32, m: u32, d: u32) -> i64 {
    chrono::Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().timestamp()
}

#[tokio::test]
async fn test_preview_cycle_writes_png() {
    let output = scratch("preview.png");
    let settings = Settings {
        log_level: "info".into(),
        interval: Duration::from_secs(60),
        once: true,
        preview: true,
        weather: WeatherSettings {
            api_key: String::new(),
            city: "Conshohocken".into(),
            country: "US".into(),
            region: None,
            units: Units::Imperial,
            base_url: DEFAULT_BASE_URL.into(),
            timeline_samples: 8,
        },
        display: DisplaySettings { sink: SinkKind::Mock, ..display(output.clone()) },
    };

    let mut dash = Dashboard::new(&settings).unwrap();
    let report = dash.run_cycle().await;
    assert!(report.had_data);
    assert!(report.saved);
    assert!(report.pushed);

    let png = std::fs::read(&output).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_mock_sink_receives_rendered_frame() {
    let output = scratch("mock.png");
    let renderer = Renderer::new(display(output.clone())).unwrap();
    let expected = renderer.render(Some(&sample_dashboard()));

    let sink = MockSink::new(800, 480);
    let state = sink.state();
    let mut dash = Dashboard::with_parts(renderer, None, Some(Box::new(sink)));
    let report = dash.publish(Some(&sample_dashboard()));
    assert!(report.pushed);

    let state = state.lock().unwrap();
    assert_eq!(state.set_image_count, 1);
    assert_eq!(state.show_count, 1);
    assert_eq!(state.shown.as_ref(), Some(&expected));
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_missing_data_pushes_error_panel() {
    let output = scratch("error.png");
    let renderer = Renderer::new(display(output.clone())).unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(8, 0, 0).unwrap();

    let first = renderer.render_at(None, now);
    let second = renderer.render_at(None, now);
    assert_eq!(first, second);
    assert_eq!(first, renderer.error_panel(DEFAULT_MESSAGE, now));

    let sink = MockSink::new(800, 480);
    let state = sink.state();
    let mut dash = Dashboard::with_parts(renderer, None, Some(Box::new(sink)));
    let report = dash.publish(None);
    assert!(!report.had_data);
    assert!(report.saved);
    assert!(report.pushed);
    assert!(state.lock().unwrap().shown.is_some());
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_wrong_size_sink_is_reported_not_fatal() {
    let output = scratch("mismatch.png");
    let renderer = Renderer::new(display(output.clone())).unwrap();
    let mut dash = Dashboard::with_parts(renderer, None, Some(Box::new(MockSink::new(640, 384))));
    let report = dash.publish(Some(&sample_dashboard()));
    assert!(report.saved);
    assert!(!report.pushed);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_device_sink_gets_packed_palette_frame() {
    let output = scratch("device.png");
    let device = scratch("epd.bin");
    let renderer = Renderer::new(display(output.clone())).unwrap();
    let sink = DeviceSink::new(&device, 800, 480, ColorDepth::Palette7).unwrap();
    assert_eq!(sink.resolution(), (800, 480));

    let mut dash = Dashboard::with_parts(renderer, None, Some(Box::new(sink)));
    assert!(dash.publish(Some(&sample_dashboard())).pushed);
    assert_eq!(std::fs::metadata(&device).unwrap().len(), 800 * 480 / 2);
    let _ = std::fs::remove_file(&output);
    let _ = std::fs::remove_file(&device);
}

#[test]
fn test_single_day_aggregation() {
    let start = midnight_utc(2026, 3, 14);
    let temps = [50.0, 52.0, 54.0, 56.0, 54.0, 51.0, 49.0, 48.0];
    let samples: Vec<_> = temps
        .iter()
        .enumerate()
        .map(|(i, &t)| sample(start + i as i64 * 3 * 3600, t, "light rain"))
        .collect();
    let utc = FixedOffset::east_opt(0).unwrap();
    let days = aggregate_daily(&samples, utc);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].min_temp, 48);
    assert_eq!(days[0].max_temp, 56);
    assert_eq!(days[0].description, "Light Rain");
}

#[test]
fn test_ten_days_become_six_cards() {
    let start = midnight_utc(2026, 3, 14);
    let samples: Vec<_> = (0..10 * 8)
        .map(|i| sample(start + i * 3 * 3600, 40.0 + (i % 8) as f64, "clear sky"))
        .collect();
    let days = aggregate_daily(&samples, FixedOffset::east_opt(0).unwrap());
    assert_eq!(days.len(), 10);
    assert!(days.windows(2).all(|w| w[0].date < w[1].date));

    let count = card_count(6, days.len());
    let labels = card_labels(&days, count);
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0], "Today");
    assert_ne!(days[0].day_name, "Today");
    assert_eq!(labels[1], days[1].day_name);
}

#[test]
fn test_wind_buckets() {
    assert_eq!(WindArrow::from_degrees(190.0), WindArrow::from_degrees(200.0));
    assert_eq!(WindArrow::from_degrees(360.0), WindArrow::from_degrees(0.0));
    assert_ne!(WindArrow::from_degrees(0.0), WindArrow::from_degrees(180.0));
}
