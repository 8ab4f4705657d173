//! Petfinder adoption listings
//!
//! Every search authenticates with the client-credentials grant, runs one
//! animal search, then looks up each animal's detail concurrently.

use futures::future::try_join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{endpoint, send_json};
use crate::GatewayError;
use crate::config::PetfinderConfig;

pub const PROVIDER: &str = "Petfinder";

/// Petfinder rejects larger pages
pub const MAX_LIMIT: u32 = 100;

/// Search parameters for adoptable animals
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalSearch {
    pub animal_type: String,
    /// City, postal code or `"lat, lon"`; empty means anywhere
    pub location: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for AnimalSearch {
    fn default() -> Self {
        Self {
            animal_type: "Dog".to_string(),
            location: "41.90979292568401, -91.65074901204449".to_string(),
            page: 1,
            limit: 5,
        }
    }
}

impl AnimalSearch {
    pub fn validate(&self) -> crate::Result<()> {
        if self.animal_type.trim().is_empty() {
            return Err(GatewayError::validation("type cannot be empty"));
        }
        if self.page == 0 {
            return Err(GatewayError::validation("page must be 1 or greater"));
        }
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(GatewayError::validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    #[serde(rename = "type")]
    animal_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    page: u32,
    limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub animals: Vec<Animal>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    animal: Animal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Animal {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub animal_type: String,
    pub species: Option<String>,
    #[serde(default)]
    pub breeds: Breeds,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub status: String,
    pub published_at: Option<String>,
    pub distance: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Breeds {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    #[serde(default)]
    pub mixed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Photo {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub full: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PetfinderClient {
    http: Client,
    api_key: String,
    secret: String,
    base_url: String,
}

impl PetfinderClient {
    pub fn new(http: Client, config: &PetfinderConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            secret: config.secret.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Exchange the key/secret pair for a bearer token
    #[instrument(skip(self))]
    pub async fn authenticate(&self) -> crate::Result<String> {
        let url = endpoint(&self.base_url, "/v2/oauth2/token");
        let form = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.api_key,
            client_secret: &self.secret,
        };

        let token: TokenResponse = send_json(PROVIDER, self.http.post(&url).form(&form)).await?;
        debug!(
            "Petfinder token issued, expires in {}s",
            token.expires_in.unwrap_or_default()
        );
        Ok(token.access_token)
    }

    #[instrument(skip(self, token))]
    pub async fn search(&self, token: &str, search: &AnimalSearch) -> crate::Result<Vec<Animal>> {
        let url = endpoint(&self.base_url, "/v2/animals");
        let location = search.location.trim();
        let query = SearchQuery {
            animal_type: search.animal_type.trim(),
            location: (!location.is_empty()).then_some(location),
            page: search.page,
            limit: search.limit,
        };

        let response: SearchResponse =
            send_json(PROVIDER, self.http.get(&url).bearer_auth(token).query(&query)).await?;
        Ok(response.animals)
    }

    #[instrument(skip(self, token))]
    pub async fn details(&self, token: &str, id: u64) -> crate::Result<Animal> {
        let url = endpoint(&self.base_url, &format!("/v2/animals/{id}"));
        let response: DetailResponse =
            send_json(PROVIDER, self.http.get(&url).bearer_auth(token)).await?;
        Ok(response.animal)
    }

    /// Search, then fetch every match's detail concurrently.
    ///
    /// Details come back in search order. The first failed lookup fails the
    /// whole call.
    pub async fn search_with_details(&self, search: &AnimalSearch) -> crate::Result<Vec<Animal>> {
        search.validate()?;

        let token = self.authenticate().await?;
        let found = self.search(&token, search).await?;
        debug!("Petfinder search matched {} animals", found.len());

        let animals = try_join_all(found.iter().map(|animal| self.details(&token, animal.id))).await?;
        info!(
            "Fetched {} {} listings near '{}'",
            animals.len(),
            search.animal_type,
            search.location
        );
        Ok(animals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search() {
        let search = AnimalSearch::default();
        assert_eq!(search.animal_type, "Dog");
        assert_eq!(search.page, 1);
        assert_eq!(search.limit, 5);
        assert!(search.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let search = AnimalSearch {
            limit: 0,
            ..AnimalSearch::default()
        };
        assert!(search.validate().is_err());

        let search = AnimalSearch {
            limit: MAX_LIMIT + 1,
            ..AnimalSearch::default()
        };
        assert!(search.validate().is_err());

        let search = AnimalSearch {
            page: 0,
            ..AnimalSearch::default()
        };
        assert!(search.validate().is_err());

        let search = AnimalSearch {
            animal_type: "  ".to_string(),
            ..AnimalSearch::default()
        };
        assert!(search.validate().is_err());
    }

    #[test]
    fn test_search_query_omits_empty_location() {
        let query = SearchQuery {
            animal_type: "Cat",
            location: None,
            page: 2,
            limit: 10,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["type"], "Cat");
        assert!(json.get("location").is_none());
    }
}
