//! Normalized output records
//!
//! Each record is built by a pure mapping from one upstream payload:
//! - Location: best geocoding match for a query
//! - Restaurant: one business search result
//! - Weather: current conditions with derived compass direction and local clock times
//! - Animal: one adoptable animal listing

pub mod animal;
pub mod location;
pub mod restaurant;
pub mod weather;

// Re-export all public types for convenient access
pub use animal::AnimalRecord;
pub use location::LocationRecord;
pub use restaurant::RestaurantRecord;
pub use weather::{Volume, WeatherRecord};
