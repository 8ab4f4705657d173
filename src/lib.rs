//! City Explorer gateway
//!
//! Aggregates geocoding, business search, weather and pet adoption providers
//! behind one HTTP API and normalizes each provider's payload into a stable
//! record shape.

pub mod api;
pub mod compass;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use compass::CompassDirection;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use models::{AnimalRecord, LocationRecord, RestaurantRecord, WeatherRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GatewayError>;
