use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::carousel::{FALLBACK_URI, LOOP_FACTOR, MAX_LOOP_FACTOR};
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
    pub location_label: String,
}

#[derive(Deserialize)]
pub struct WeatherParameters {
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub forecast_file: Option<String>,
}

#[derive(Deserialize)]
pub struct CarouselParameters {
    #[serde(default = "default_loop_factor")]
    pub loop_factor: usize,
    #[serde(default = "default_fallback_uri")]
    pub fallback_uri: String,
}

impl Default for CarouselParameters {
    fn default() -> Self {
        CarouselParameters { loop_factor: LOOP_FACTOR, fallback_uri: FALLBACK_URI.to_string() }
    }
}

#[derive(Deserialize)]
pub struct Files {
    pub store_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub weather: WeatherParameters,
    #[serde(default)]
    pub carousel: CarouselParameters,
    pub files: Files,
    pub general: General,
}

fn default_base_url() -> String { "https://api.openweathermap.org/data/2.5".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_loop_factor() -> usize { LOOP_FACTOR }
fn default_fallback_uri() -> String { FALLBACK_URI.to_string() }

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    validate(&config)?;

    Ok(config)
}

/// Checks value ranges that serde can't express
///
/// # Arguments
///
/// * 'config' - the deserialized configuration
fn validate(config: &Config) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&config.geo_ref.lat) {
        return Err(ConfigError::from("lat must be within -90 to 90"));
    }
    if !(-180.0..=180.0).contains(&config.geo_ref.long) {
        return Err(ConfigError::from("long must be within -180 to 180"));
    }
    if config.weather.timeout_secs == 0 {
        return Err(ConfigError::from("timeout_secs must be at least 1"));
    }
    if config.carousel.loop_factor == 0 {
        return Err(ConfigError::from("loop_factor must be at least 1"));
    }
    if config.carousel.loop_factor > MAX_LOOP_FACTOR {
        return Err(ConfigError::Invalid(format!("loop_factor must be at most {}", MAX_LOOP_FACTOR)));
    }

    Ok(())
}
