use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::Validate;

/// Travel preferences; at most one record per user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    pub id: u64,
    pub user_id: u64,
    pub interests: Vec<String>,
    pub preferred_regions: Vec<String>,
    pub travel_style: Option<String>,
    pub budget_range: Option<String>,
    pub accommodation_type: Option<String>,
}

/// Partial update; `None` keeps the stored value. `id` and `userId` are not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencePatch {
    pub interests: Option<Vec<String>>,
    pub preferred_regions: Option<Vec<String>>,
    pub travel_style: Option<String>,
    pub budget_range: Option<String>,
    pub accommodation_type: Option<String>,
}

/// Body of `POST /api/preferences`: the owning user plus whichever fields were sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPreference {
    pub user_id: u64,
    #[serde(flatten)]
    pub fields: PreferencePatch,
}

impl Validate for NewPreference {
    fn validate(&self) -> Result<(), ModelError> {
        if self.user_id == 0 {
            return Err(ModelError::invalid("userId", "must be a positive integer"));
        }
        self.fields.validate()
    }
}

impl Validate for PreferencePatch {
    fn validate(&self) -> Result<(), ModelError> {
        let blank = |items: &Option<Vec<String>>| {
            items.as_ref().is_some_and(|v| v.iter().any(|s| s.trim().is_empty()))
        };
        if blank(&self.interests) {
            return Err(ModelError::invalid("interests", "must not contain empty entries"));
        }
        if blank(&self.preferred_regions) {
            return Err(ModelError::invalid("preferredRegions", "must not contain empty entries"));
        }
        Ok(())
    }
}

impl Preference {
    pub fn from_patch(id: u64, user_id: u64, fields: PreferencePatch) -> Self {
        Self {
            id,
            user_id,
            interests: fields.interests.unwrap_or_default(),
            preferred_regions: fields.preferred_regions.unwrap_or_default(),
            travel_style: fields.travel_style,
            budget_range: fields.budget_range,
            accommodation_type: fields.accommodation_type,
        }
    }

    pub fn apply(&mut self, patch: PreferencePatch) {
        if let Some(v) = patch.interests { self.interests = v; }
        if let Some(v) = patch.preferred_regions { self.preferred_regions = v; }
        if let Some(v) = patch.travel_style { self.travel_style = Some(v); }
        if let Some(v) = patch.budget_range { self.budget_range = Some(v); }
        if let Some(v) = patch.accommodation_type { self.accommodation_type = Some(v); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preference_flattens_fields() {
        let input: NewPreference = serde_json::from_str(
            r#"{"userId": 7, "interests": ["Culture"], "travelStyle": "Backpacker"}"#,
        )
        .unwrap();
        assert_eq!(input.user_id, 7);
        assert_eq!(input.fields.interests, Some(vec!["Culture".to_string()]));
        assert_eq!(input.fields.travel_style.as_deref(), Some("Backpacker"));
        assert_eq!(input.fields.budget_range, None);
    }

    #[test]
    fn apply_keeps_unspecified_fields() {
        let mut pref = Preference::from_patch(
            1,
            7,
            PreferencePatch {
                interests: Some(vec!["Culture".into()]),
                budget_range: Some("mid".into()),
                ..Default::default()
            },
        );
        pref.apply(PreferencePatch { budget_range: Some("luxury".into()), ..Default::default() });
        assert_eq!(pref.interests, vec!["Culture".to_string()]);
        assert_eq!(pref.budget_range.as_deref(), Some("luxury"));
        assert_eq!(pref.user_id, 7);
    }

    #[test]
    fn user_id_must_be_positive() {
        let input = NewPreference { user_id: 0, fields: PreferencePatch::default() };
        assert!(input.validate().is_err());
    }
}
