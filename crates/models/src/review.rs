use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_range, Validate};

/// A review of a destination, an experience, both, or neither.
/// The ids are weak references; nothing checks that the targets exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub destination_id: Option<u64>,
    pub experience_id: Option<u64>,
    pub user_id: u64,
    pub rating: i32,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    #[serde(default)]
    pub destination_id: Option<u64>,
    #[serde(default)]
    pub experience_id: Option<u64>,
    pub user_id: u64,
    pub rating: i32,
    #[serde(default)]
    pub text: Option<String>,
}

impl Validate for NewReview {
    fn validate(&self) -> Result<(), ModelError> {
        require_range("rating", i64::from(self.rating), 1, 5)
    }
}

impl NewReview {
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            destination_id: self.destination_id,
            experience_id: self.experience_id,
            user_id: self.user_id,
            rating: self.rating,
            text: self.text,
            created_at,
        }
    }
}
