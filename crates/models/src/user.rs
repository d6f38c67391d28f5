use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{reject_padding, require_len, validate_email, Validate};

/// Registered user. The password (already hashed by the HTTP layer) is kept
/// in the record but never serialized back out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

fn validate_username(username: &str) -> Result<(), ModelError> {
    reject_padding("username", username)?;
    require_len("username", username, 3, 50)
}

fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.chars().count() < 6 {
        return Err(ModelError::invalid("password", "must contain at least 6 character(s)"));
    }
    Ok(())
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ModelError> {
        validate_username(&self.username)?;
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(username) = &self.username {
            validate_username(username)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

impl NewUser {
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            created_at,
        }
    }
}

impl User {
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username { self.username = username; }
        if let Some(email) = patch.email { self.email = email; }
        if let Some(password) = patch.password { self.password = password; }
        if let Some(full_name) = patch.full_name { self.full_name = Some(full_name); }
    }
}
