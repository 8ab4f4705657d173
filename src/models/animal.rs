//! Adoptable animal record produced by the `/animal` route

use serde::Serialize;

use crate::providers::petfinder::Animal;

const UNKNOWN_BREED: &str = "Unknown";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnimalRecord {
    pub id: u64,
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub size: String,
    pub status: String,
    /// Listing page on petfinder.com
    pub url: String,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
}

impl From<&Animal> for AnimalRecord {
    fn from(animal: &Animal) -> Self {
        let breed = animal
            .breeds
            .primary
            .clone()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| UNKNOWN_BREED.to_string());

        Self {
            id: animal.id,
            name: animal.name.clone(),
            animal_type: animal.animal_type.clone(),
            breed,
            age: animal.age.clone(),
            gender: animal.gender.clone(),
            size: animal.size.clone(),
            status: animal.status.clone(),
            url: animal.url.clone(),
            photo_url: animal.photos.first().and_then(|p| p.medium.clone()),
            description: animal.description.clone(),
            published_at: animal.published_at.clone(),
        }
    }
}
