use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}, time::Duration};
use thiserror::Error;

use crate::display::traits::ColorDepth;
use crate::models::Units;
use crate::render::theme::Theme;
use crate::weather::DEFAULT_BASE_URL;

pub const DEFAULT_CITY: &str = "London";
pub const DEFAULT_COUNTRY: &str = "UK";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_FORECAST_CARDS: usize = 6;
pub const DEFAULT_TIMELINE_SAMPLES: usize = 8;
pub const DEFAULT_INTERVAL_MINS: u64 = 30;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("OpenWeatherMap API key not found. Set OPENWEATHER_API_KEY, weather.api_key or --api-key")]
    MissingApiKey,
}

/// Top-level app configuration as read from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub update_interval_mins: Option<u64>,
    pub weather: Option<WeatherConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Shown after the city in the header instead of the country code.
    pub region: Option<String>,
    pub units: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub theme: Option<Theme>,
    /// Number of forecast cards, 5..=7.
    pub forecast_days: Option<usize>,
    /// Number of 3-hour samples on the timeline, 8..=11.
    pub timeline_hours: Option<usize>,
    pub show_humidity: Option<bool>,
    pub show_wind: Option<bool>,
    pub show_pressure: Option<bool>,
    pub icons_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub template_output: Option<PathBuf>,
    pub sink: Option<SinkKind>,
    pub device: Option<PathBuf>,
    pub color_depth: Option<ColorDepth>,
}

/// Where the rendered bitmap goes besides the PNG file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    None,
    Mock,
    Device,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "wxpanel", about = "Weather dashboard for e-ink panels", version)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    /// metric | imperial | standard (c/f accepted)
    #[arg(long)]
    pub units: Option<String>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
    #[arg(long)]
    pub forecast_days: Option<usize>,
    #[arg(long)]
    pub timeline_hours: Option<usize>,
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub icons_dir: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub template: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub template_output: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub device: Option<PathBuf>,
    #[arg(long)]
    pub interval_mins: Option<u64>,
    /// render a single frame and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub once: bool,
    /// render built-in sample data, no network or API key needed
    #[arg(long, action = ArgAction::SetTrue)]
    pub preview: bool,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Resolved weather options handed to the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSettings {
    pub api_key: String,
    pub city: String,
    pub country: String,
    pub region: Option<String>,
    pub units: Units,
    pub base_url: String,
    pub timeline_samples: usize,
}

/// Resolved display options handed to the renderer and sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    pub forecast_days: usize,
    pub timeline_hours: usize,
    pub show_humidity: bool,
    pub show_wind: bool,
    pub show_pressure: bool,
    pub icons_dir: PathBuf,
    pub output: PathBuf,
    pub template: Option<PathBuf>,
    pub template_output: PathBuf,
    pub sink: SinkKind,
    pub device: Option<PathBuf>,
    pub color_depth: ColorDepth,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: Theme::default(),
            forecast_days: DEFAULT_FORECAST_CARDS,
            timeline_hours: DEFAULT_TIMELINE_SAMPLES,
            show_humidity: true,
            show_wind: true,
            show_pressure: true,
            icons_dir: PathBuf::from("assets/icons"),
            output: PathBuf::from("weather.png"),
            template: None,
            template_output: PathBuf::from("weather_rendered.html"),
            sink: SinkKind::None,
            device: None,
            color_depth: ColorDepth::Rgb888,
        }
    }
}

/// Everything `main` needs after layering.
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_level: String,
    pub interval: Duration,
    pub once: bool,
    pub preview: bool,
    pub weather: WeatherSettings,
    pub display: DisplaySettings,
}

/// Public entry point: parse CLI, read YAML and environment, merge, validate.
pub fn load() -> Result<Settings, ConfigError> {
    let cli = Cli::parse();
    let cfg = layer(&cli, |k| std::env::var(k).ok())?;

    if cli.dump_config {
        // Pretty YAML of effective config, key masked
        let mut shown = cfg.clone();
        if let Some(key) = shown.weather.as_mut().and_then(|w| w.api_key.as_mut()) {
            *key = mask(key);
        }
        let s = serde_yaml::to_string(&shown)?;
        println!("{s}");
        std::process::exit(0);
    }

    resolve(&cfg, &cli)
}

/// defaults -> YAML -> environment -> CLI
pub fn layer<F>(cli: &Cli, env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();

    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    apply_env(&mut cfg, env)?;
    apply_cli_overrides(&mut cfg, cli);
    validate(&cfg)?;
    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/wxpanel/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/wxpanel/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/wxpanel.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["wxpanel.yaml", "config.yaml", "config/wxpanel.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

pub fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()            { dst.log_level = src.log_level; }
    if src.update_interval_mins.is_some() { dst.update_interval_mins = src.update_interval_mins; }
    match (&mut dst.weather, src.weather) {
        (None, Some(c)) => dst.weather = Some(c),
        (Some(d), Some(s)) => merge_weather(d, s),
        _ => {}
    }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
}

fn merge_weather(dst: &mut WeatherConfig, src: WeatherConfig) {
    if src.api_key.is_some()  { dst.api_key = src.api_key; }
    if src.city.is_some()     { dst.city = src.city; }
    if src.country.is_some()  { dst.country = src.country; }
    if src.region.is_some()   { dst.region = src.region; }
    if src.units.is_some()    { dst.units = src.units; }
    if src.base_url.is_some() { dst.base_url = src.base_url; }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()           { dst.width = src.width; }
    if src.height.is_some()          { dst.height = src.height; }
    if src.theme.is_some()           { dst.theme = src.theme; }
    if src.forecast_days.is_some()   { dst.forecast_days = src.forecast_days; }
    if src.timeline_hours.is_some()  { dst.timeline_hours = src.timeline_hours; }
    if src.show_humidity.is_some()   { dst.show_humidity = src.show_humidity; }
    if src.show_wind.is_some()       { dst.show_wind = src.show_wind; }
    if src.show_pressure.is_some()   { dst.show_pressure = src.show_pressure; }
    if src.icons_dir.is_some()       { dst.icons_dir = src.icons_dir; }
    if src.output.is_some()          { dst.output = src.output; }
    if src.template.is_some()        { dst.template = src.template; }
    if src.template_output.is_some() { dst.template_output = src.template_output; }
    if src.sink.is_some()            { dst.sink = src.sink; }
    if src.device.is_some()          { dst.device = src.device; }
    if src.color_depth.is_some()     { dst.color_depth = src.color_depth; }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| {
        ConfigError::Validation(format!("{key}={value} is not a valid value"))
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Validation(format!("{key}={value} is not a boolean"))),
    }
}

/// Environment variables sit between the YAML file and the CLI.
fn apply_env<F>(cfg: &mut Config, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let weather = cfg.weather.get_or_insert_with(WeatherConfig::default);
    if let Some(v) = env("OPENWEATHER_API_KEY") { weather.api_key = Some(v); }
    if let Some(v) = env("CITY_NAME")           { weather.city = Some(v); }
    if let Some(v) = env("COUNTRY_CODE")        { weather.country = Some(v); }
    if let Some(v) = env("UNITS")               { weather.units = Some(v); }

    if let Some(v) = env("UPDATE_INTERVAL_MINUTES") {
        cfg.update_interval_mins = Some(parse_env("UPDATE_INTERVAL_MINUTES", &v)?);
    }

    let display = cfg.display.get_or_insert_with(DisplayConfig::default);
    if let Some(v) = env("FORECAST_DAYS") { display.forecast_days = Some(parse_env("FORECAST_DAYS", &v)?); }
    if let Some(v) = env("SHOW_HUMIDITY") { display.show_humidity = Some(parse_flag("SHOW_HUMIDITY", &v)?); }
    if let Some(v) = env("SHOW_WIND")     { display.show_wind = Some(parse_flag("SHOW_WIND", &v)?); }
    if let Some(v) = env("SHOW_PRESSURE") { display.show_pressure = Some(parse_flag("SHOW_PRESSURE", &v)?); }
    Ok(())
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()     { cfg.log_level = cli.log_level.clone(); }
    if cli.interval_mins.is_some() { cfg.update_interval_mins = cli.interval_mins; }

    let weather = cfg.weather.get_or_insert_with(WeatherConfig::default);
    if cli.api_key.is_some() { weather.api_key = cli.api_key.clone(); }
    if cli.city.is_some()    { weather.city = cli.city.clone(); }
    if cli.country.is_some() { weather.country = cli.country.clone(); }
    if cli.region.is_some()  { weather.region = cli.region.clone(); }
    if cli.units.is_some()   { weather.units = cli.units.clone(); }

    let display = cfg.display.get_or_insert_with(DisplayConfig::default);
    if cli.width.is_some()           { display.width = cli.width; }
    if cli.height.is_some()          { display.height = cli.height; }
    if cli.theme.is_some()           { display.theme = cli.theme; }
    if cli.forecast_days.is_some()   { display.forecast_days = cli.forecast_days; }
    if cli.timeline_hours.is_some()  { display.timeline_hours = cli.timeline_hours; }
    if cli.icons_dir.is_some()       { display.icons_dir = cli.icons_dir.clone(); }
    if cli.output.is_some()          { display.output = cli.output.clone(); }
    if cli.template.is_some()        { display.template = cli.template.clone(); }
    if cli.template_output.is_some() { display.template_output = cli.template_output.clone(); }
    if cli.sink.is_some()            { display.sink = cli.sink; }
    if cli.device.is_some()          { display.device = cli.device.clone(); }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(weather) = cfg.weather.as_ref() {
        if let Some(units) = weather.units.as_deref() {
            units.parse::<Units>().map_err(ConfigError::Validation)?;
        }
    }
    if let Some(mins) = cfg.update_interval_mins {
        if mins == 0 {
            return Err(ConfigError::Validation("update_interval_mins must be >= 1".into()));
        }
    }
    if let Some(display) = cfg.display.as_ref() {
        if display.width == Some(0) || display.height == Some(0) {
            return Err(ConfigError::Validation("display width/height must be > 0".into()));
        }
        if let Some(days) = display.forecast_days {
            if !(5..=7).contains(&days) {
                return Err(ConfigError::Validation("display forecast_days must be 5..=7".into()));
            }
        }
        if let Some(hours) = display.timeline_hours {
            if !(8..=11).contains(&hours) {
                return Err(ConfigError::Validation("display timeline_hours must be 8..=11".into()));
            }
        }
        if display.sink == Some(SinkKind::Device) && display.device.is_none() {
            return Err(ConfigError::Validation("sink 'device' needs a device path".into()));
        }
    }
    Ok(())
}

/// Turn the layered config into concrete settings.
pub fn resolve(cfg: &Config, cli: &Cli) -> Result<Settings, ConfigError> {
    let w = cfg.weather.clone().unwrap_or_default();
    let d = cfg.display.clone().unwrap_or_default();
    let defaults = DisplaySettings::default();

    let api_key = w.api_key.filter(|k| !k.trim().is_empty());
    let api_key = match (api_key, cli.preview) {
        (Some(k), _) => k,
        (None, true) => String::new(),
        (None, false) => return Err(ConfigError::MissingApiKey),
    };
    let units = match w.units.as_deref() {
        Some(u) => u.parse::<Units>().map_err(ConfigError::Validation)?,
        None => Units::default(),
    };

    let display = DisplaySettings {
        width: d.width.unwrap_or(defaults.width),
        height: d.height.unwrap_or(defaults.height),
        theme: d.theme.unwrap_or(defaults.theme),
        forecast_days: d.forecast_days.unwrap_or(defaults.forecast_days),
        timeline_hours: d.timeline_hours.unwrap_or(defaults.timeline_hours),
        show_humidity: d.show_humidity.unwrap_or(defaults.show_humidity),
        show_wind: d.show_wind.unwrap_or(defaults.show_wind),
        show_pressure: d.show_pressure.unwrap_or(defaults.show_pressure),
        icons_dir: d.icons_dir.unwrap_or(defaults.icons_dir),
        output: d.output.unwrap_or(defaults.output),
        template: d.template,
        template_output: d.template_output.unwrap_or(defaults.template_output),
        sink: d.sink.unwrap_or(defaults.sink),
        device: d.device,
        color_depth: d.color_depth.unwrap_or(defaults.color_depth),
    };

    let weather = WeatherSettings {
        api_key,
        city: w.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
        country: w.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        region: w.region,
        units,
        base_url: w.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        timeline_samples: display.timeline_hours,
    };

    let mins = cfg.update_interval_mins.unwrap_or(DEFAULT_INTERVAL_MINS);
    Ok(Settings {
        log_level: cfg.log_level.clone().unwrap_or_else(|| "info".to_string()),
        interval: Duration::from_secs(mins * 60),
        once: cli.once,
        preview: cli.preview,
        weather,
        display,
    })
}

fn mask(key: &str) -> String {
    let tail: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn cli() -> Cli {
        Cli::default()
    }

    fn settings_with(cli: &Cli, env: &HashMap<&str, &str>) -> Result<Settings, ConfigError> {
        let mut cfg = Config::default();
        apply_env(&mut cfg, |k| env.get(k).map(|v| v.to_string()))?;
        apply_cli_overrides(&mut cfg, cli);
        validate(&cfg)?;
        resolve(&cfg, cli)
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = settings_with(&cli(), &HashMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let env = HashMap::from([("OPENWEATHER_API_KEY", "  ")]);
        assert!(matches!(settings_with(&cli(), &env), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_preview_needs_no_key() {
        let c = Cli { preview: true, ..cli() };
        let s = settings_with(&c, &HashMap::new()).unwrap();
        assert!(s.preview);
        assert!(s.weather.api_key.is_empty());
    }

    #[test]
    fn test_defaults() {
        let env = HashMap::from([("OPENWEATHER_API_KEY", "abc")]);
        let s = settings_with(&cli(), &env).unwrap();
        assert_eq!(s.weather.city, "London");
        assert_eq!(s.weather.country, "UK");
        assert_eq!(s.weather.units, Units::Metric);
        assert_eq!(s.weather.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.display.width, 800);
        assert_eq!(s.display.height, 480);
        assert_eq!(s.display.forecast_days, 6);
        assert_eq!(s.interval, Duration::from_secs(30 * 60));
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn test_env_then_cli_precedence() {
        let env = HashMap::from([
            ("OPENWEATHER_API_KEY", "abc"),
            ("CITY_NAME", "Conshohocken"),
            ("COUNTRY_CODE", "US"),
            ("UNITS", "imperial"),
            ("SHOW_PRESSURE", "false"),
            ("UPDATE_INTERVAL_MINUTES", "10"),
        ]);
        let c = Cli { city: Some("Paris".into()), ..cli() };
        let s = settings_with(&c, &env).unwrap();
        assert_eq!(s.weather.city, "Paris");
        assert_eq!(s.weather.country, "US");
        assert_eq!(s.weather.units, Units::Imperial);
        assert!(!s.display.show_pressure);
        assert_eq!(s.interval, Duration::from_secs(600));
    }

    #[test]
    fn test_bad_env_values_rejected() {
        let env = HashMap::from([("OPENWEATHER_API_KEY", "abc"), ("SHOW_WIND", "maybe")]);
        assert!(matches!(settings_with(&cli(), &env), Err(ConfigError::Validation(_))));
        let env = HashMap::from([("OPENWEATHER_API_KEY", "abc"), ("UNITS", "rankine")]);
        assert!(matches!(settings_with(&cli(), &env), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_ranges_validated() {
        let env = HashMap::from([("OPENWEATHER_API_KEY", "abc")]);
        let c = Cli { forecast_days: Some(9), ..cli() };
        assert!(settings_with(&c, &env).is_err());
        let c = Cli { timeline_hours: Some(4), ..cli() };
        assert!(settings_with(&c, &env).is_err());
        let c = Cli { width: Some(0), ..cli() };
        assert!(settings_with(&c, &env).is_err());
        let c = Cli { sink: Some(SinkKind::Device), ..cli() };
        assert!(settings_with(&c, &env).is_err());
    }

    #[test]
    fn test_yaml_merge() {
        let yaml = r#"
log_level: debug
weather:
  city: Oslo
  units: f
display:
  theme: dark
  forecast_days: 5
  sink: mock
"#;
        let from_file: Config = serde_yaml::from_str(yaml).unwrap();
        let mut cfg = Config::default();
        merge(&mut cfg, from_file);
        apply_env(&mut cfg, |k| (k == "OPENWEATHER_API_KEY").then(|| "k".to_string())).unwrap();
        let s = resolve(&cfg, &cli()).unwrap();
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.weather.city, "Oslo");
        assert_eq!(s.weather.units, Units::Imperial);
        assert_eq!(s.display.theme, Theme::Dark);
        assert_eq!(s.display.forecast_days, 5);
        assert_eq!(s.display.sink, SinkKind::Mock);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let c = Cli { config: Some(PathBuf::from("/nonexistent/wxpanel.yaml")), ..cli() };
        assert!(matches!(layer(&c, no_env), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_example_config_resolves() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/wxpanel.example.yaml"));
        let c = Cli { config: Some(path.to_path_buf()), ..cli() };
        let cfg = layer(&c, no_env).unwrap();
        let s = resolve(&cfg, &c).unwrap();
        assert_eq!(s.weather.units, Units::Imperial);
        assert_eq!(s.weather.region.as_deref(), Some("PA"));
        assert_eq!(s.display.color_depth, ColorDepth::Palette7);
        assert_eq!(s.display.sink, SinkKind::None);
        assert_eq!(s.interval, Duration::from_secs(30 * 60));
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("abcdef123456"), "****3456");
        assert_eq!(mask("ab"), "****ab");
    }
}
