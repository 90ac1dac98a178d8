pub mod forecast;
pub mod memo;
pub mod owm_forecast;
pub mod weather_condition;
