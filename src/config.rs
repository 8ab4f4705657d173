//! Configuration management for the gateway
//!
//! Configuration is read once at startup from the process environment (after
//! an optional `.env` file) and then shared read-only with every handler.

use crate::GatewayError;
use std::env;
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// LocationIQ geocoding
    pub location: ProviderConfig,
    /// Yelp Fusion business search
    pub yelp: ProviderConfig,
    /// OpenWeatherMap current weather
    pub weather: ProviderConfig,
    /// Petfinder adoption listings
    pub petfinder: PetfinderConfig,
    /// Outbound HTTP client settings
    pub http: HttpConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Credentials and endpoint for a single-key provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key or bearer token; empty when unset
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct PetfinderConfig {
    pub api_key: String,
    pub secret: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_location_base_url() -> String {
    "https://us1.locationiq.com".to_string()
}

fn default_yelp_base_url() -> String {
    "https://api.yelp.com".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_petfinder_base_url() -> String {
    "https://api.petfinder.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
            },
            location: ProviderConfig {
                api_key: String::new(),
                base_url: default_location_base_url(),
            },
            yelp: ProviderConfig {
                api_key: String::new(),
                base_url: default_yelp_base_url(),
            },
            weather: ProviderConfig {
                api_key: String::new(),
                base_url: default_weather_base_url(),
            },
            petfinder: PetfinderConfig {
                api_key: String::new(),
                secret: String::new(),
                base_url: default_petfinder_base_url(),
            },
            http: HttpConfig {
                timeout_seconds: default_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> crate::Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(GatewayError::config(format!("Failed to read .env file: {e}")));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| GatewayError::config(format!("PORT must be a port number, got '{port}'")))?;
        }
        if let Some(timeout) = lookup("HTTP_TIMEOUT_SECONDS") {
            config.http.timeout_seconds = timeout.trim().parse().map_err(|_| {
                GatewayError::config(format!(
                    "HTTP_TIMEOUT_SECONDS must be a whole number, got '{timeout}'"
                ))
            })?;
        }

        let string_overrides: [(&str, &mut String); 10] = [
            ("LOCATION_API", &mut config.location.api_key),
            ("LOCATION_BASE_URL", &mut config.location.base_url),
            ("YELP_API", &mut config.yelp.api_key),
            ("YELP_BASE_URL", &mut config.yelp.base_url),
            ("WEATHER_API", &mut config.weather.api_key),
            ("WEATHER_BASE_URL", &mut config.weather.base_url),
            ("PETFINDER_API", &mut config.petfinder.api_key),
            ("PETFINDER_SECRET", &mut config.petfinder.secret),
            ("PETFINDER_BASE_URL", &mut config.petfinder.base_url),
            ("LOG_LEVEL", &mut config.logging.level),
        ];
        for (key, slot) in string_overrides {
            if let Some(value) = lookup(key) {
                *slot = value.trim().to_string();
            }
        }

        config.apply_defaults();
        config.validate()?;
        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.location.base_url.is_empty() {
            self.location.base_url = default_location_base_url();
        }
        if self.yelp.base_url.is_empty() {
            self.yelp.base_url = default_yelp_base_url();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.petfinder.base_url.is_empty() {
            self.petfinder.base_url = default_petfinder_base_url();
        }
        if self.http.timeout_seconds == 0 {
            self.http.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.http.timeout_seconds > 300 {
            return Err(GatewayError::config(
                "HTTP timeout cannot exceed 300 seconds",
            ));
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GatewayError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let base_urls = [
            ("LOCATION_BASE_URL", &self.location.base_url),
            ("YELP_BASE_URL", &self.yelp.base_url),
            ("WEATHER_BASE_URL", &self.weather.base_url),
            ("PETFINDER_BASE_URL", &self.petfinder.base_url),
        ];
        for (key, url) in base_urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GatewayError::config(format!(
                    "{key} must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        Ok(())
    }

    /// Log a warning for every credential that is not set.
    ///
    /// Missing credentials are not fatal; the affected route fails once the
    /// provider rejects the call.
    pub fn warn_missing_credentials(&self) {
        let credentials = [
            ("LOCATION_API", &self.location.api_key),
            ("YELP_API", &self.yelp.api_key),
            ("WEATHER_API", &self.weather.api_key),
            ("PETFINDER_API", &self.petfinder.api_key),
            ("PETFINDER_SECRET", &self.petfinder.secret),
        ];
        for (key, value) in credentials {
            if value.is_empty() {
                warn!("{} is not set; requests to that provider will be rejected", key);
            }
        }
    }
}
