use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{validate_email, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: u64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsletter {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Validate for NewNewsletter {
    fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.email)
    }
}

impl NewNewsletter {
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> Newsletter {
        Newsletter { id, email: self.email, name: self.name, created_at }
    }
}
