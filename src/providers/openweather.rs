//! OpenWeatherMap current conditions

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{endpoint, send_json};
use crate::config::ProviderConfig;

pub const PROVIDER: &str = "OpenWeatherMap";

/// Current weather payload from `/data/2.5/weather`
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentWeather {
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    pub wind: Wind,
    pub clouds: Clouds,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    pub sys: Sys,
    /// Shift from UTC in seconds
    pub timezone: i64,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Condition {
    pub id: Option<u32>,
    pub main: Option<String>,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Wind {
    pub speed: f64,
    /// Bearing in degrees, clockwise from North
    pub deg: Option<f64>,
    pub gust: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Clouds {
    pub all: u8,
}

/// Rain or snow volume in mm
#[derive(Debug, Deserialize, Clone)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Sys {
    /// UTC epoch seconds
    pub sunrise: i64,
    pub sunset: i64,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
struct WeatherQuery<'a> {
    lat: f64,
    lon: f64,
    appid: &'a str,
    units: &'a str,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Current conditions in imperial units
    #[instrument(skip(self))]
    pub async fn current(&self, latitude: f64, longitude: f64) -> crate::Result<CurrentWeather> {
        let url = endpoint(&self.base_url, "/data/2.5/weather");
        debug!("OpenWeatherMap request URL: {}", url);

        let query = WeatherQuery {
            lat: latitude,
            lon: longitude,
            appid: &self.api_key,
            units: "imperial",
        };
        let weather: CurrentWeather = send_json(PROVIDER, self.http.get(&url).query(&query)).await?;

        info!(
            "Retrieved current weather for {:.4}, {:.4} ({})",
            latitude,
            longitude,
            weather.name.as_deref().unwrap_or("unnamed")
        );
        Ok(weather)
    }
}
