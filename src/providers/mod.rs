//! Outbound clients for the upstream providers
//!
//! One client per provider. Every client shares a single `reqwest::Client`
//! and maps transport, status and decoding failures into `GatewayError`.

pub mod locationiq;
pub mod openweather;
pub mod petfinder;
pub mod yelp;

pub use locationiq::LocationIqClient;
pub use openweather::OpenWeatherClient;
pub use petfinder::{AnimalSearch, PetfinderClient};
pub use yelp::YelpClient;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::GatewayError;
use crate::config::HttpConfig;

/// Build the HTTP client shared by all providers
pub fn build_http_client(config: &HttpConfig) -> crate::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .user_agent(concat!("city-explorer/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::config(format!("Failed to create HTTP client: {e}")))
}

/// Send a request and decode a successful JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> crate::Result<T> {
    let response = request
        .send()
        .await
        .map_err(|source| GatewayError::Network { provider, source })?;

    let status = response.status();
    debug!("{} responded with {}", provider, status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{} rejected the request with {}: {}", provider, status, body);
        return Err(GatewayError::UpstreamStatus {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::invalid_response(provider, e.to_string()))
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://api.yelp.com/", "/v3/businesses/search"),
            "https://api.yelp.com/v3/businesses/search"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:4000", "/v1/search.php"),
            "http://127.0.0.1:4000/v1/search.php"
        );
    }

    #[test]
    fn test_build_http_client() {
        let config = HttpConfig { timeout_seconds: 5 };
        assert!(build_http_client(&config).is_ok());
    }
}
