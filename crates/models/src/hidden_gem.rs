use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_non_blank, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenGem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub region: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHiddenGem {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub region: String,
}

impl Validate for NewHiddenGem {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("description", &self.description)?;
        require_non_blank("imageUrl", &self.image_url)?;
        require_non_blank("region", &self.region)
    }
}

impl NewHiddenGem {
    pub fn into_record(self, id: u64) -> HiddenGem {
        HiddenGem {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            region: self.region,
        }
    }
}
