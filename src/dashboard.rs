use std::fmt::Display;
use chrono::{DateTime, TimeZone};
use crate::air_quality::AirQuality;
use crate::carousel::Carousel;
use crate::config::GeoRef;
use crate::forecast_summary::{summarize, ForecastSummary};
use crate::manager_owm::errors::OwmError;
use crate::manager_owm::{load_forecast_file, WeatherProvider};
use crate::models::forecast::CurrentConditions;
use crate::session::Session;

/// Everything weather related shown on the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub current: Option<CurrentConditions>,
    pub forecast: ForecastSummary,
    pub air: Option<AirQuality>,
}

/// Acquires current conditions, forecast and air quality and summarizes the forecast.
/// The forecast is only summarized once all three acquisitions have succeeded.
///
/// # Arguments
///
/// * 'provider' - the weather provider
/// * 'geo_ref' - the point to get weather for
/// * 'tz' - time zone for hour labels and day grouping
pub fn refresh<Tz: TimeZone>(provider: &dyn WeatherProvider, geo_ref: &GeoRef, tz: &Tz) -> Result<WeatherReport, OwmError> {
    let current = provider.get_current(geo_ref.lat, geo_ref.long, &geo_ref.location_label)?;
    let samples = provider.get_forecast(geo_ref.lat, geo_ref.long)?;
    let air = provider.get_air_quality(geo_ref.lat, geo_ref.long)?;

    Ok(WeatherReport {
        current: Some(current),
        forecast: summarize(&samples, tz),
        air: Some(air),
    })
}

/// Builds a report from a saved forecast document, no current conditions or air quality
///
/// # Arguments
///
/// * 'forecast_file' - path to the saved forecast document
/// * 'tz' - time zone for hour labels and day grouping
pub fn refresh_offline<Tz: TimeZone>(forecast_file: &str, tz: &Tz) -> Result<WeatherReport, OwmError> {
    let samples = load_forecast_file(forecast_file)?;

    Ok(WeatherReport { current: None, forecast: summarize(&samples, tz), air: None })
}

/// Renders what `show` prints. With the lock enabled and no unlock request only the lock
/// screen is rendered and `fetch_weather` is never called.
///
/// # Arguments
///
/// * 'now' - current local time
/// * 'session' - user settings
/// * 'carousel' - wallpaper carousel settings
/// * 'unlock' - whether the user asked to pass the lock screen
/// * 'fetch_weather' - acquires the weather report, None if not available
pub fn render_show<Tz: TimeZone, F>(now: &DateTime<Tz>, session: &Session, carousel: &Carousel, unlock: bool, fetch_weather: F) -> String
where
    Tz::Offset: Display,
    F: FnOnce() -> Option<WeatherReport>,
{
    if session.lock_enabled() && !unlock {
        return render_lock_screen(now, session);
    }

    let weather = fetch_weather();
    render_dashboard(now, session, carousel, weather.as_ref())
}

/// Renders the lock screen: clock, date and the pinned memo
///
/// # Arguments
///
/// * 'now' - current local time
/// * 'session' - user settings
pub fn render_lock_screen<Tz: TimeZone>(now: &DateTime<Tz>, session: &Session) -> String
where
    Tz::Offset: Display,
{
    lock_screen_lines(now, session).join("\n")
}

/// Renders the full dashboard
///
/// # Arguments
///
/// * 'now' - current local time
/// * 'session' - user settings
/// * 'carousel' - wallpaper carousel settings
/// * 'weather' - weather report, None if it could not be acquired
pub fn render_dashboard<Tz: TimeZone>(now: &DateTime<Tz>, session: &Session, carousel: &Carousel, weather: Option<&WeatherReport>) -> String
where
    Tz::Offset: Display,
{
    let mut lines = lock_screen_lines(now, session);

    let wallpapers = session.wallpapers();
    let position = carousel.initial_index(wallpapers);
    match carousel.logical_index(wallpapers, position) {
        Some(i) => lines.push(format!("Wallpaper {}/{}: {}", i + 1, wallpapers.len(), wallpapers[i])),
        None => {
            // an empty list loops to the single fallback background
            let fallback = carousel.build_looped_sequence(wallpapers);
            lines.push(format!("Wallpaper: {}", fallback.first().map_or("", String::as_str)));
        }
    }

    match weather {
        None => lines.push("Weather unavailable".to_string()),
        Some(report) => {
            if let Some(current) = &report.current {
                lines.push(String::new());
                lines.push(current.to_string());
            }
            if !report.forecast.hourly.is_empty() {
                lines.push(String::new());
                lines.push("Hourly".to_string());
                lines.extend(report.forecast.hourly.iter().map(|h| h.to_string()));
            }
            if !report.forecast.daily.is_empty() {
                lines.push(String::new());
                lines.push("Daily".to_string());
                lines.extend(report.forecast.daily.iter().map(|d| d.to_string()));
            }
            if let Some(air) = &report.air {
                lines.push(String::new());
                lines.push(format!("Air quality: {}", air));
            }
        }
    }

    lines.join("\n")
}

fn lock_screen_lines<Tz: TimeZone>(now: &DateTime<Tz>, session: &Session) -> Vec<String>
where
    Tz::Offset: Display,
{
    let mut lines = vec![
        now.format("%H:%M").to_string(),
        now.format("%-m/%-d (%a)").to_string(),
    ];
    let memo = session.pinned_memo_text();
    if !memo.is_empty() {
        lines.push(memo.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use crate::models::forecast::ForecastSample;
    use crate::models::weather_condition::WeatherCondition;
    use crate::store::MemoryStore;

    struct StubProvider {
        fail_air: bool,
    }

    impl WeatherProvider for StubProvider {
        fn get_current(&self, _lat: f64, _long: f64, location_label: &str) -> Result<CurrentConditions, OwmError> {
            Ok(CurrentConditions {
                temperature: 21,
                condition: WeatherCondition::Clear,
                humidity: 40,
                wind_speed: 2.0,
                location_label: location_label.to_string(),
            })
        }

        fn get_forecast(&self, _lat: f64, _long: f64) -> Result<Vec<ForecastSample>, OwmError> {
            Ok((0..10)
                .map(|i| ForecastSample {
                    timestamp: 1_748_736_000 + i * 10_800,
                    temperature: 20.0 + i as f64,
                    condition_code: "Clouds".to_string(),
                    pop: 0.2,
                })
                .collect())
        }

        fn get_air_quality(&self, _lat: f64, _long: f64) -> Result<AirQuality, OwmError> {
            if self.fail_air { Err(OwmError::Timeout) } else { Ok(AirQuality::new(10.0, 5.0)) }
        }
    }

    fn geo_ref() -> GeoRef {
        GeoRef { lat: 37.5, long: 127.0, location_label: "Jung-gu".to_string() }
    }

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn now() -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap()
    }

    #[test]
    fn refresh_summarizes_forecast() {
        let report = refresh(&StubProvider { fail_air: false }, &geo_ref(), &tz()).unwrap();

        assert_eq!(report.forecast.hourly.len(), 8);
        assert_eq!(report.current.unwrap().location_label, "Jung-gu");
        assert!(report.air.is_some());
    }

    #[test]
    fn refresh_fails_when_any_acquisition_fails() {
        let result = refresh(&StubProvider { fail_air: true }, &geo_ref(), &tz());
        assert_eq!(result, Err(OwmError::Timeout));
    }

    #[test]
    fn lock_screen_shows_clock_date_and_pinned_memo() {
        let mut store = MemoryStore::default();
        let mut session = Session::load(&mut store).unwrap();
        assert_eq!(render_lock_screen(&now(), &session), "09:05\n6/1 (Sun)");

        session.add_memo(&mut store, "call mom", chrono::Utc::now()).unwrap();
        assert_eq!(render_lock_screen(&now(), &session), "09:05\n6/1 (Sun)\ncall mom");
    }

    #[test]
    fn dashboard_without_wallpapers_shows_fallback() {
        let mut store = MemoryStore::default();
        let session = Session::load(&mut store).unwrap();
        let carousel = Carousel::new(10, "file:///default.jpg");

        let text = render_dashboard(&now(), &session, &carousel, None);
        assert!(text.contains("Wallpaper: file:///default.jpg"));
        assert!(text.contains("Weather unavailable"));
    }

    #[test]
    fn dashboard_shows_middle_wallpaper_and_weather() {
        let mut store = MemoryStore::default();
        let mut session = Session::load(&mut store).unwrap();
        let uris = ["a.jpg", "b.jpg", "c.jpg"].iter().map(|s| s.to_string()).collect::<Vec<String>>();
        session.add_wallpapers(&mut store, &uris).unwrap();
        let report = refresh(&StubProvider { fail_air: false }, &geo_ref(), &tz()).unwrap();

        let text = render_dashboard(&now(), &session, &Carousel::default(), Some(&report));
        assert!(text.contains("Wallpaper 1/3: a.jpg"));
        assert!(text.contains("Hourly"));
        assert!(text.contains("Daily"));
        assert!(text.contains("Air quality: Good"));
    }

    #[test]
    fn locked_show_renders_lock_screen_without_fetching_weather() {
        let mut store = MemoryStore::default();
        let mut session = Session::load(&mut store).unwrap();
        session.set_lock_enabled(&mut store, true).unwrap();

        let text = render_show(&now(), &session, &Carousel::default(), false, || {
            panic!("weather must not be fetched behind the lock screen")
        });
        assert_eq!(text, "09:05\n6/1 (Sun)");
    }

    #[test]
    fn unlock_or_disabled_lock_shows_dashboard() {
        let mut store = MemoryStore::default();
        let mut session = Session::load(&mut store).unwrap();
        let report = refresh(&StubProvider { fail_air: false }, &geo_ref(), &tz()).unwrap();

        let text = render_show(&now(), &session, &Carousel::default(), false, || Some(report.clone()));
        assert!(text.contains("Hourly"));

        session.set_lock_enabled(&mut store, true).unwrap();
        let mut fetched = false;
        let text = render_show(&now(), &session, &Carousel::default(), true, || {
            fetched = true;
            None
        });
        assert!(fetched);
        assert!(text.contains("Weather unavailable"));
    }
}
