use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{require_non_blank, Validate};

pub const DEFAULT_BOOKING_STATUS: &str = "pending";

/// A booking. `status` is free text; no transition rules are enforced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub user_id: u64,
    pub experience_id: Option<u64>,
    pub destination_id: Option<u64>,
    pub booking_date: String,
    pub number_of_people: u32,
    pub total_price: Option<i64>,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: u64,
    #[serde(default)]
    pub experience_id: Option<u64>,
    #[serde(default)]
    pub destination_id: Option<u64>,
    pub booking_date: String,
    pub number_of_people: u32,
    #[serde(default)]
    pub total_price: Option<i64>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PATCH /api/bookings/:id/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

impl Validate for NewBooking {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_blank("bookingDate", &self.booking_date)?;
        if self.number_of_people == 0 {
            return Err(ModelError::invalid("numberOfPeople", "must be at least 1"));
        }
        if matches!(self.total_price, Some(p) if p < 0) {
            return Err(ModelError::invalid("totalPrice", "must not be negative"));
        }
        if let Some(status) = &self.status {
            require_non_blank("status", status)?;
        }
        Ok(())
    }
}

impl Validate for BookingStatusUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        match self.status.as_deref() {
            Some(s) if !s.trim().is_empty() => Ok(()),
            _ => Err(ModelError::Validation("Status is required".into())),
        }
    }
}

impl NewBooking {
    pub fn into_record(self, id: u64, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            user_id: self.user_id,
            experience_id: self.experience_id,
            destination_id: self.destination_id,
            booking_date: self.booking_date,
            number_of_people: self.number_of_people,
            total_price: self.total_price,
            special_requests: self.special_requests,
            status: self.status.unwrap_or_else(|| DEFAULT_BOOKING_STATUS.to_string()),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let input: NewBooking = serde_json::from_str(
            r#"{"userId": 1, "experienceId": 2, "bookingDate": "2024-06-01", "numberOfPeople": 2}"#,
        )
        .unwrap();
        assert!(input.validate().is_ok());
        let booking = input.into_record(1, Utc::now());
        assert_eq!(booking.status, "pending");
    }

    #[test]
    fn status_update_requires_value() {
        assert!(BookingStatusUpdate::default().validate().is_err());
        assert!(BookingStatusUpdate { status: Some(" ".into()) }.validate().is_err());
        assert!(BookingStatusUpdate { status: Some("confirmed".into()) }.validate().is_ok());
    }

    #[test]
    fn zero_people_rejected() {
        let input: NewBooking = serde_json::from_str(
            r#"{"userId": 1, "bookingDate": "2024-06-01", "numberOfPeople": 0}"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }
}
