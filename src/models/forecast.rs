use std::fmt;
use std::fmt::Formatter;
use crate::models::weather_condition::WeatherCondition;

/// One 3-hour forecast slot as delivered by the weather provider
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastSample {
    /// Epoch seconds
    pub timestamp: i64,
    /// Degrees Celsius
    pub temperature: f64,
    pub condition_code: String,
    /// Probability of precipitation, 0.0 - 1.0
    pub pop: f64,
}

/// One entry in the hourly strip
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyEntry {
    pub timestamp: i64,
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub hour_label: String,
    /// Precipitation chance in percent
    pub pop: u8,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for HourlyEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:>3} {:>4}° {:<17} {:>3}%",
               self.hour_label, self.temperature, self.condition.icon(), self.pop)
    }
}

/// Per-day roll-up of the forecast
#[derive(Clone, Debug, PartialEq)]
pub struct DailyAggregate {
    pub date_label: String,
    pub min: i32,
    pub max: i32,
    pub condition: WeatherCondition,
    /// Highest precipitation chance of the day in percent
    pub pop: u8,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DailyAggregate {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:<5} {:<17} {:>4}° / {:>4}° {:>3}%",
               self.date_label, self.condition.icon(), self.min, self.max, self.pop)
    }
}

/// Current conditions at the configured location
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Meters per second
    pub wind_speed: f64,
    pub location_label: String,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for CurrentConditions {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}° {} ({}) humidity {}%, wind {:.1} m/s",
               self.location_label, self.temperature, self.condition.label(),
               self.condition.icon(), self.humidity, self.wind_speed)
    }
}
