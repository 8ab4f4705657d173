//! Restaurant record produced by the `/yelp` route

use serde::Serialize;

use crate::providers::yelp::Business;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RestaurantRecord {
    pub name: String,
    pub url: String,
    /// Provider scale, 1.0 to 5.0 in half steps for Yelp; omitted when unrated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Price tier such as `$$`; omitted when Yelp has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub image_url: String,
}

impl From<&Business> for RestaurantRecord {
    fn from(business: &Business) -> Self {
        Self {
            name: business.name.clone(),
            url: business.url.clone(),
            rating: business.rating,
            price: business.price.clone(),
            image_url: business.image_url.clone(),
        }
    }
}

/// Map every business, keeping upstream order and count
#[must_use]
pub fn from_businesses(businesses: &[Business]) -> Vec<RestaurantRecord> {
    businesses.iter().map(RestaurantRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str, rating: f64, price: Option<&str>) -> Business {
        Business {
            id: None,
            name: name.to_string(),
            url: format!("https://www.yelp.com/biz/{}", name.to_lowercase().replace(' ', "-")),
            image_url: format!("https://s3-media1.fl.yelpcdn.com/{}.jpg", name.len()),
            rating: Some(rating),
            price: price.map(str::to_string),
            review_count: None,
        }
    }

    #[test]
    fn test_preserves_order_and_count() {
        let businesses = vec![
            business("Pike Place Chowder", 4.5, Some("$$")),
            business("Biscuit Bitch", 4.0, Some("$")),
            business("Biscuit Bitch", 4.0, Some("$")),
            business("Canlis", 4.5, Some("$$$$")),
        ];

        let records = from_businesses(&businesses);
        assert_eq!(records.len(), 4);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Pike Place Chowder", "Biscuit Bitch", "Biscuit Bitch", "Canlis"]
        );
    }

    #[test]
    fn test_fields_map_one_to_one() {
        let source = business("Canlis", 4.5, Some("$$$$"));
        let record = RestaurantRecord::from(&source);
        assert_eq!(record.name, source.name);
        assert_eq!(record.url, source.url);
        assert_eq!(record.image_url, source.image_url);
        assert_eq!(record.rating, Some(4.5));
        assert_eq!(record.price.as_deref(), Some("$$$$"));
    }

    #[test]
    fn test_missing_price_is_omitted() {
        let record = RestaurantRecord::from(&business("Food Truck", 3.5, None));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("price").is_none());
        assert_eq!(json["rating"], 3.5);
    }

    #[test]
    fn test_missing_rating_is_omitted() {
        let source = Business {
            rating: None,
            ..business("Pop Up", 4.0, Some("$"))
        };
        let record = RestaurantRecord::from(&source);
        assert_eq!(record.rating, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("rating").is_none());
        assert_eq!(json["price"], "$");
    }

    #[test]
    fn test_empty_list() {
        assert!(from_businesses(&[]).is_empty());
    }
}
