//! Weather record produced by the `/weather` route

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::GatewayError;
use crate::compass::CompassDirection;
use crate::providers::openweather::{CurrentWeather, PROVIDER, Precipitation};

const ICON_URL_TEMPLATE: &str = "http://openweathermap.org/img/w/{icon}.png";

/// Precipitation over the last hour.
///
/// Serializes as a number, or as `""` when upstream reported nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    Measured(f64),
    Missing,
}

impl Volume {
    fn last_hour(precipitation: Option<&Precipitation>) -> Self {
        match precipitation.and_then(|p| p.one_hour) {
            Some(volume) => Volume::Measured(volume),
            None => Volume::Missing,
        }
    }
}

impl Serialize for Volume {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Volume::Measured(volume) => serializer.serialize_f64(*volume),
            Volume::Missing => serializer.serialize_str(""),
        }
    }
}

/// Current conditions in imperial units
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeatherRecord {
    pub description: String,
    /// Icon image URL
    pub icon: String,
    /// Temperatures in °F
    pub current_temp: f64,
    pub feels_like: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Omitted when upstream reports no bearing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<CompassDirection>,
    /// Cloud cover percentage (0-100)
    pub cloud_percent: u8,
    pub rain_volume_1hr: Volume,
    pub snow_volume_1hr: Volume,
    /// Local wall clock, e.g. `06:42 AM`
    pub sunrise: String,
    pub sunset: String,
}

impl TryFrom<&CurrentWeather> for WeatherRecord {
    type Error = GatewayError;

    fn try_from(weather: &CurrentWeather) -> crate::Result<Self> {
        let condition = weather
            .weather
            .first()
            .ok_or_else(|| GatewayError::invalid_response(PROVIDER, "no weather conditions"))?;

        Ok(Self {
            description: condition.description.clone(),
            icon: icon_url(&condition.icon),
            current_temp: weather.main.temp,
            feels_like: weather.main.feels_like,
            min_temp: weather.main.temp_min,
            max_temp: weather.main.temp_max,
            wind_speed: weather.wind.speed,
            wind_direction: weather.wind.deg.map(CompassDirection::from_bearing),
            cloud_percent: weather.clouds.all,
            rain_volume_1hr: Volume::last_hour(weather.rain.as_ref()),
            snow_volume_1hr: Volume::last_hour(weather.snow.as_ref()),
            sunrise: local_clock(weather.sys.sunrise, weather.timezone)?,
            sunset: local_clock(weather.sys.sunset, weather.timezone)?,
        })
    }
}

#[must_use]
pub fn icon_url(icon_code: &str) -> String {
    ICON_URL_TEMPLATE.replace("{icon}", icon_code)
}

/// Shift a UTC epoch by the location's offset and render it as `hh:mm AM`
pub fn local_clock(epoch_seconds: i64, utc_offset_seconds: i64) -> crate::Result<String> {
    epoch_seconds
        .checked_add(utc_offset_seconds)
        .and_then(|shifted| DateTime::<Utc>::from_timestamp(shifted, 0))
        .map(|instant| instant.format("%I:%M %p").to_string())
        .ok_or_else(|| {
            GatewayError::invalid_response(
                PROVIDER,
                format!("timestamp {epoch_seconds} with offset {utc_offset_seconds} is out of range"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(extra: serde_json::Value) -> CurrentWeather {
        let mut base = json!({
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 48.2, "feels_like": 45.1, "temp_min": 46.0, "temp_max": 50.0, "humidity": 87},
            "wind": {"speed": 9.22, "deg": 200},
            "clouds": {"all": 90},
            "sys": {"sunrise": 1609459200, "sunset": 1609491600},
            "timezone": -18000
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_maps_readings() {
        let record = WeatherRecord::try_from(&payload(json!({}))).unwrap();
        assert_eq!(record.description, "light rain");
        assert_eq!(record.icon, "http://openweathermap.org/img/w/10d.png");
        assert_eq!(record.current_temp, 48.2);
        assert_eq!(record.feels_like, 45.1);
        assert_eq!(record.min_temp, 46.0);
        assert_eq!(record.max_temp, 50.0);
        assert_eq!(record.wind_speed, 9.22);
        assert_eq!(record.wind_direction, Some(CompassDirection::Southwest));
        assert_eq!(record.cloud_percent, 90);
    }

    #[test]
    fn test_missing_rain_and_snow_are_empty_strings() {
        let record = WeatherRecord::try_from(&payload(json!({}))).unwrap();
        assert_eq!(record.rain_volume_1hr, Volume::Missing);
        assert_eq!(record.snow_volume_1hr, Volume::Missing);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rain_volume_1hr"], "");
        assert_eq!(json["snow_volume_1hr"], "");
    }

    #[test]
    fn test_present_rain_volume() {
        let record = WeatherRecord::try_from(&payload(json!({"rain": {"1h": 0.42}}))).unwrap();
        assert_eq!(record.rain_volume_1hr, Volume::Measured(0.42));
        assert_eq!(record.snow_volume_1hr, Volume::Missing);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rain_volume_1hr"], 0.42);
    }

    #[test]
    fn test_rain_without_last_hour_reading() {
        let record = WeatherRecord::try_from(&payload(json!({"rain": {"3h": 2.0}}))).unwrap();
        assert_eq!(record.rain_volume_1hr, Volume::Missing);
    }

    #[test]
    fn test_sunrise_shifted_by_timezone() {
        // 2021-01-01T00:00Z shifted to UTC-5 is 19:00 on the previous day
        let record = WeatherRecord::try_from(&payload(json!({}))).unwrap();
        assert_eq!(record.sunrise, "07:00 PM");
        assert_eq!(record.sunset, "04:00 AM");
    }

    #[test]
    fn test_local_clock_formatting() {
        assert_eq!(local_clock(0, 0).unwrap(), "12:00 AM");
        assert_eq!(local_clock(1609459200, 3600 * 5 + 1800).unwrap(), "05:30 AM");
        assert_eq!(local_clock(1609459200 + 12 * 3600 + 5 * 60, 0).unwrap(), "12:05 PM");
    }

    #[test]
    fn test_local_clock_out_of_range() {
        assert!(local_clock(i64::MAX, 1).is_err());
        assert!(local_clock(i64::MAX - 1, 0).is_err());
    }

    #[test]
    fn test_no_conditions_is_invalid() {
        let err = WeatherRecord::try_from(&payload(json!({"weather": []}))).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse { .. }));
    }

    #[test]
    fn test_wind_direction_serializes_as_name() {
        let record = WeatherRecord::try_from(&payload(json!({"wind": {"speed": 3.0, "deg": 90}})))
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["wind_direction"], "East");
    }

    #[test]
    fn test_calm_wind_without_bearing() {
        let record =
            WeatherRecord::try_from(&payload(json!({"wind": {"speed": 0.0}}))).unwrap();
        assert_eq!(record.wind_direction, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("wind_direction").is_none());
        assert_eq!(json["wind_speed"], 0.0);
    }
}
