pub mod errors;

use std::fs;
use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::air_quality::AirQuality;
use crate::forecast_summary::round_half_up;
use crate::manager_owm::errors::OwmError;
use crate::models::forecast::{CurrentConditions, ForecastSample};
use crate::models::owm_forecast::{AirDocument, CurrentDocument, ForecastDocument};
use crate::models::weather_condition::WeatherCondition;

/// Acquisition of weather data for a point.
/// Implementations either deliver fully decoded values or say why they could not.
pub trait WeatherProvider {
    fn get_current(&self, lat: f64, long: f64, location_label: &str) -> Result<CurrentConditions, OwmError>;
    fn get_forecast(&self, lat: f64, long: f64) -> Result<Vec<ForecastSample>, OwmError>;
    fn get_air_quality(&self, lat: f64, long: f64) -> Result<AirQuality, OwmError>;
}

/// Struct for fetching current weather, forecasts and air pollution from OpenWeatherMap
pub struct Owm {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl Owm {
    /// Returns an Owm struct ready for fetching weather data
    ///
    /// # Arguments
    ///
    /// * 'base_url' - the API base, e.g. https://api.openweathermap.org/data/2.5
    /// * 'api_key' - the OpenWeatherMap API key
    /// * 'timeout' - global timeout for each request
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Owm {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        let agent = config.into();

        Self { agent, base_url: base_url.trim_end_matches('/').to_string(), api_key }
    }

    /// Fetches one document from the given endpoint.
    /// Coordinates are truncated to 4 decimals which is more than enough for weather.
    ///
    /// # Arguments
    ///
    /// * 'endpoint' - e.g. "forecast"
    /// * 'lat' - latitude of the point
    /// * 'long' - longitude of the point
    fn get_document(&self, endpoint: &str, lat: f64, long: f64) -> Result<String, OwmError> {
        let url = format!("{}/{}?lat={:0.4}&lon={:0.4}&units=metric&appid={}",
                          self.base_url, endpoint, lat, long, self.api_key);
        debug!("fetching {} for {:0.4}/{:0.4}", endpoint, lat, long);

        let json = self.agent
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;

        Ok(json)
    }
}

impl WeatherProvider for Owm {
    fn get_current(&self, lat: f64, long: f64, location_label: &str) -> Result<CurrentConditions, OwmError> {
        let json = self.get_document("weather", lat, long)?;
        let document: CurrentDocument = serde_json::from_str(&json)?;

        Ok(current_from_document(&document, location_label))
    }

    fn get_forecast(&self, lat: f64, long: f64) -> Result<Vec<ForecastSample>, OwmError> {
        let json = self.get_document("forecast", lat, long)?;
        let document: ForecastDocument = serde_json::from_str(&json)?;

        Ok(samples_from_document(&document))
    }

    fn get_air_quality(&self, lat: f64, long: f64) -> Result<AirQuality, OwmError> {
        let json = self.get_document("air_pollution", lat, long)?;
        let document: AirDocument = serde_json::from_str(&json)?;

        air_quality_from_document(&document)
    }
}

/// Reads a saved forecast document, used instead of the network when running offline
///
/// # Arguments
///
/// * 'path' - path to a json file holding a forecast document
pub fn load_forecast_file(path: &str) -> Result<Vec<ForecastSample>, OwmError> {
    let json = fs::read_to_string(path)?;
    let document: ForecastDocument = serde_json::from_str(&json)?;

    Ok(samples_from_document(&document))
}

/// Translates the provider forecast list into forecast samples.
/// A missing condition gives an empty code and a missing precipitation chance gives 0.
///
/// # Arguments
///
/// * 'document' - the decoded forecast document
pub fn samples_from_document(document: &ForecastDocument) -> Vec<ForecastSample> {
    document.list
        .iter()
        .map(|item| ForecastSample {
            timestamp: item.dt,
            temperature: item.main.temp,
            condition_code: item.weather.first().map_or(String::new(), |w| w.main.clone()),
            pop: item.pop,
        })
        .collect()
}

fn current_from_document(document: &CurrentDocument, location_label: &str) -> CurrentConditions {
    let code = document.weather.first().map_or("", |w| w.main.as_str());

    CurrentConditions {
        temperature: round_half_up(document.main.temp),
        condition: WeatherCondition::from_code(code),
        humidity: document.main.humidity.clamp(0.0, 100.0) as u8,
        wind_speed: document.wind.speed,
        location_label: location_label.to_string(),
    }
}

fn air_quality_from_document(document: &AirDocument) -> Result<AirQuality, OwmError> {
    let item = document.list
        .first()
        .ok_or(OwmError::Document("air pollution list is empty".to_string()))?;

    Ok(AirQuality::new(item.components.pm10, item.components.pm2_5))
}
