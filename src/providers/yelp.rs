//! Yelp Fusion business search

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{endpoint, send_json};
use crate::GatewayError;
use crate::config::ProviderConfig;

pub const PROVIDER: &str = "Yelp";

/// Results per page
pub const PAGE_SIZE: u32 = 4;

#[derive(Debug, Deserialize, Clone)]
pub struct Business {
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub review_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
    pub total: Option<u64>,
}

#[derive(Debug, Serialize)]
struct SearchQuery {
    latitude: f64,
    longitude: f64,
    limit: u32,
    offset: u32,
}

/// Zero-based result offset for a 1-based page number
pub fn page_offset(page: u32) -> crate::Result<u32> {
    if page == 0 {
        return Err(GatewayError::validation("page must be 1 or greater"));
    }
    (page - 1)
        .checked_mul(PAGE_SIZE)
        .ok_or_else(|| GatewayError::validation(format!("page {page} is too large")))
}

#[derive(Debug, Clone)]
pub struct YelpClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YelpClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Fetch one page of businesses near a coordinate, in Yelp's order
    #[instrument(skip(self))]
    pub async fn search_businesses(
        &self,
        latitude: f64,
        longitude: f64,
        page: u32,
    ) -> crate::Result<Vec<Business>> {
        let query = SearchQuery {
            latitude,
            longitude,
            limit: PAGE_SIZE,
            offset: page_offset(page)?,
        };
        let url = endpoint(&self.base_url, "/v3/businesses/search");
        debug!("Yelp request URL: {} (offset {})", url, query.offset);

        let request = self.http.get(&url).bearer_auth(&self.api_key).query(&query);
        let response: SearchResponse = send_json(PROVIDER, request).await?;

        info!(
            "Yelp returned {} businesses for page {} ({} total)",
            response.businesses.len(),
            page,
            response.total.unwrap_or_default()
        );
        Ok(response.businesses)
    }
}
