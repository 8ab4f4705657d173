//! HTTP routes
//!
//! Endpoints:
//! - `GET /` - greeting
//! - `GET /location?city=` - best geocoding match
//! - `GET /yelp?latitude=&longitude=&page=` - one page of nearby restaurants
//! - `GET /weather?latitude=&longitude=` - current conditions
//! - `GET /animal?type=&location=&page=&limit=` - adoptable animals with details

mod params;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::config::GatewayConfig;
use crate::models::{AnimalRecord, LocationRecord, RestaurantRecord, WeatherRecord, restaurant};
use crate::providers::{
    AnimalSearch, LocationIqClient, OpenWeatherClient, PetfinderClient, YelpClient,
    build_http_client,
};

use params::{optional_number, required_coordinate, required_text};

/// Provider clients shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub geocoder: LocationIqClient,
    pub yelp: YelpClient,
    pub weather: OpenWeatherClient,
    pub petfinder: PetfinderClient,
}

impl AppState {
    pub fn from_config(config: &GatewayConfig) -> crate::Result<Self> {
        let http = build_http_client(&config.http)?;
        Ok(Self {
            geocoder: LocationIqClient::new(http.clone(), &config.location),
            yelp: YelpClient::new(http.clone(), &config.yelp),
            weather: OpenWeatherClient::new(http.clone(), &config.weather),
            petfinder: PetfinderClient::new(http, &config.petfinder),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/location", get(get_location))
        .route("/yelp", get(get_restaurants))
        .route("/weather", get(get_weather))
        .route("/animal", get(get_animals))
        .fallback(not_found)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct LocationQuery {
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoordinateQuery {
    latitude: Option<String>,
    longitude: Option<String>,
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnimalQuery {
    #[serde(rename = "type")]
    animal_type: Option<String>,
    location: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

async fn root() -> &'static str {
    "Hello World!"
}

#[instrument(skip(state))]
async fn get_location(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> crate::Result<Json<LocationRecord>> {
    let Query(query) = query?;
    let city = required_text("city", query.city.as_deref())?;
    let places = state.geocoder.search(city).await?;
    Ok(Json(LocationRecord::from_places(city, &places)?))
}

#[instrument(skip(state))]
async fn get_restaurants(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinateQuery>, QueryRejection>,
) -> crate::Result<Json<Vec<RestaurantRecord>>> {
    let Query(query) = query?;
    let latitude = required_coordinate("latitude", query.latitude.as_deref())?;
    let longitude = required_coordinate("longitude", query.longitude.as_deref())?;
    let page: u32 = optional_number("page", query.page.as_deref())?.unwrap_or(1);

    let businesses = state.yelp.search_businesses(latitude, longitude, page).await?;
    Ok(Json(restaurant::from_businesses(&businesses)))
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoordinateQuery>, QueryRejection>,
) -> crate::Result<Json<WeatherRecord>> {
    let Query(query) = query?;
    let latitude = required_coordinate("latitude", query.latitude.as_deref())?;
    let longitude = required_coordinate("longitude", query.longitude.as_deref())?;

    let current = state.weather.current(latitude, longitude).await?;
    Ok(Json(WeatherRecord::try_from(&current)?))
}

#[instrument(skip(state))]
async fn get_animals(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnimalQuery>, QueryRejection>,
) -> crate::Result<Json<Vec<AnimalRecord>>> {
    let Query(query) = query?;
    let defaults = AnimalSearch::default();
    let search = AnimalSearch {
        animal_type: query.animal_type.unwrap_or(defaults.animal_type),
        location: query.location.unwrap_or(defaults.location),
        page: optional_number("page", query.page.as_deref())?.unwrap_or(defaults.page),
        limit: optional_number("limit", query.limit.as_deref())?.unwrap_or(defaults.limit),
    };

    let animals = state.petfinder.search_with_details(&search).await?;
    Ok(Json(animals.iter().map(AnimalRecord::from).collect()))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "notFound": true })))
}
