use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_non_blank, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub location: String,
    pub duration: String,
    pub price: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub location: String,
    pub duration: String,
    pub price: i32,
}

impl Validate for NewExperience {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("category", &self.category)?;
        require_non_blank("description", &self.description)?;
        require_non_blank("imageUrl", &self.image_url)?;
        require_non_blank("location", &self.location)?;
        require_non_blank("duration", &self.duration)?;
        if self.price < 0 {
            return Err(ModelError::invalid("price", "must not be negative"));
        }
        Ok(())
    }
}

impl NewExperience {
    pub fn into_record(self, id: u64) -> Experience {
        Experience {
            id,
            title: self.title,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            location: self.location,
            duration: self.duration,
            price: self.price,
        }
    }
}
