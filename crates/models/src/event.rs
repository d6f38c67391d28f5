use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_non_blank, Validate};

/// A dated cultural event. `date` is display text ("May 20, 2024"); `month`
/// and `day` are the short labels shown on the calendar badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub month: String,
    pub day: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub month: String,
    pub day: String,
}

impl Validate for NewEvent {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("description", &self.description)?;
        require_non_blank("location", &self.location)?;
        require_non_blank("date", &self.date)?;
        require_non_blank("month", &self.month)?;
        require_non_blank("day", &self.day)
    }
}

impl NewEvent {
    pub fn into_record(self, id: u64) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            month: self.month,
            day: self.day,
        }
    }
}
