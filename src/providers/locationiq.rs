//! LocationIQ forward geocoding

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{endpoint, send_json};
use crate::GatewayError;
use crate::config::ProviderConfig;

pub const PROVIDER: &str = "LocationIQ";

/// One geocoding match. Coordinates arrive as strings.
#[derive(Debug, Deserialize, Clone)]
pub struct Place {
    pub place_id: Option<String>,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub importance: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct LocationIqClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl LocationIqClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Search for places matching free text, best match first.
    ///
    /// LocationIQ answers an unmatched query with HTTP 404; that is reported
    /// as `NoResults` like an empty list would be.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> crate::Result<Vec<Place>> {
        let url = endpoint(&self.base_url, "/v1/search.php");
        debug!("LocationIQ request URL: {}", url);

        let request = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query), ("format", "json")]);

        let places: Vec<Place> = match send_json(PROVIDER, request).await {
            Err(GatewayError::UpstreamStatus { status: 404, .. }) => {
                return Err(GatewayError::no_results(query));
            }
            other => other?,
        };

        if places.is_empty() {
            warn!("No results found for location '{}'", query);
        } else {
            info!("Found {} geocoding results for '{}'", places.len(), query);
        }
        Ok(places)
    }
}
