use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_non_blank, require_range, Validate};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A destination. `rating` is stored in tenths, so `47` reads as 4.7.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u64,
    pub name: String,
    pub region: String,
    pub description: String,
    pub short_description: String,
    pub image_url: String,
    pub rating: i32,
    pub coordinates: Coordinates,
    pub top_attractions: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub region: String,
    pub description: String,
    pub short_description: String,
    pub image_url: String,
    pub rating: i32,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub top_attractions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Validate for NewDestination {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("region", &self.region)?;
        require_non_blank("description", &self.description)?;
        require_non_blank("shortDescription", &self.short_description)?;
        require_non_blank("imageUrl", &self.image_url)?;
        require_range("rating", i64::from(self.rating), 0, 50)?;
        if !(-90.0..=90.0).contains(&self.coordinates.lat) {
            return Err(ModelError::invalid("coordinates.lat", "must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&self.coordinates.lng) {
            return Err(ModelError::invalid("coordinates.lng", "must be between -180 and 180"));
        }
        Ok(())
    }
}

impl NewDestination {
    pub fn into_record(self, id: u64) -> Destination {
        Destination {
            id,
            name: self.name,
            region: self.region,
            description: self.description,
            short_description: self.short_description,
            image_url: self.image_url,
            rating: self.rating,
            coordinates: self.coordinates,
            top_attractions: self.top_attractions,
            tags: self.tags,
        }
    }
}

impl Destination {
    /// True when at least one of `tags` is carried by this destination.
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }
}
