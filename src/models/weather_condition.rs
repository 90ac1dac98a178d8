use std::fmt;
use std::fmt::Formatter;

/// Icon used for any condition code without a dedicated icon
pub const DEFAULT_ICON: &str = "weather-cloudy";

/// Weather conditions as reported in the provider's `weather[].main` field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
    Other(String),
}

impl WeatherCondition {
    /// Maps a provider condition code to a condition.
    /// Unknown codes are kept as-is in the `Other` variant so they can still be shown as text.
    ///
    /// # Arguments
    ///
    /// * 'code' - the provider condition code, e.g. "Clouds"
    pub fn from_code(code: &str) -> WeatherCondition {
        match code {
            "Clear" => WeatherCondition::Clear,
            "Clouds" => WeatherCondition::Clouds,
            "Rain" => WeatherCondition::Rain,
            "Snow" => WeatherCondition::Snow,
            "Thunderstorm" => WeatherCondition::Thunderstorm,
            "Mist" | "Fog" => WeatherCondition::Fog,
            other => WeatherCondition::Other(other.to_string()),
        }
    }

    /// Returns the display icon name for the condition
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "weather-sunny",
            WeatherCondition::Clouds => "weather-cloudy",
            WeatherCondition::Rain => "weather-rainy",
            WeatherCondition::Snow => "weather-snowy",
            WeatherCondition::Thunderstorm => "weather-lightning",
            WeatherCondition::Fog => "weather-fog",
            WeatherCondition::Other(_) => DEFAULT_ICON,
        }
    }

    /// Returns a human readable label, unknown conditions show their raw code
    pub fn label(&self) -> &str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Other(code) => code,
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_icons() {
        let cases = [
            ("Clear", "weather-sunny"),
            ("Clouds", "weather-cloudy"),
            ("Rain", "weather-rainy"),
            ("Snow", "weather-snowy"),
            ("Thunderstorm", "weather-lightning"),
            ("Mist", "weather-fog"),
            ("Fog", "weather-fog"),
        ];
        for (code, icon) in cases {
            assert_eq!(WeatherCondition::from_code(code).icon(), icon, "icon for {code}");
        }
    }

    #[test]
    fn mist_and_fog_are_the_same_condition() {
        assert_eq!(WeatherCondition::from_code("Mist"), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_code("Fog"), WeatherCondition::Fog);
    }

    #[test]
    fn unknown_code_degrades_to_default_icon_and_raw_label() {
        let condition = WeatherCondition::from_code("Tornado");
        assert_eq!(condition, WeatherCondition::Other("Tornado".to_string()));
        assert_eq!(condition.icon(), DEFAULT_ICON);
        assert_eq!(condition.label(), "Tornado");
        assert_eq!(condition.to_string(), "Tornado");
    }
}
