use serde::Deserialize;

#[derive(Deserialize)]
pub struct Condition {
    pub main: String,
}

#[derive(Deserialize)]
pub struct MainValues {
    pub temp: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Deserialize)]
pub struct ForecastItem {
    pub dt: i64,
    pub main: MainValues,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub pop: f64,
}

#[derive(Deserialize)]
pub struct ForecastDocument {
    pub list: Vec<ForecastItem>,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct CurrentDocument {
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainValues,
    pub wind: Wind,
}

#[derive(Deserialize)]
pub struct Components {
    pub pm10: f64,
    pub pm2_5: f64,
}

#[derive(Deserialize)]
pub struct AirItem {
    pub components: Components,
}

#[derive(Deserialize)]
pub struct AirDocument {
    pub list: Vec<AirItem>,
}
