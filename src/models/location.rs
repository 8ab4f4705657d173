//! Location record produced by the `/location` route

use serde::Serialize;

use crate::GatewayError;
use crate::providers::locationiq::{PROVIDER, Place};

/// Normalized geocoding answer for a free-text query
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LocationRecord {
    /// Query text exactly as the client sent it
    pub search_query: String,
    /// Upstream's canonical place name
    pub formatted_query: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl LocationRecord {
    /// Build a record from the best (first) geocoding match.
    ///
    /// Coordinate ranges are not checked; upstream is trusted.
    pub fn from_places(search_query: &str, places: &[Place]) -> crate::Result<Self> {
        let best = places
            .first()
            .ok_or_else(|| GatewayError::no_results(search_query))?;

        Ok(Self {
            search_query: search_query.to_string(),
            formatted_query: best.display_name.clone(),
            latitude: parse_coordinate("lat", &best.lat)?,
            longitude: parse_coordinate("lon", &best.lon)?,
        })
    }
}

fn parse_coordinate(field: &str, raw: &str) -> crate::Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        GatewayError::invalid_response(PROVIDER, format!("{field} '{raw}' is not a number"))
    })
}
