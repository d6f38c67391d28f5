//! Storage abstractions for the service layer
//!
//! `Storage` is the seam the HTTP layer talks to. `MemStorage` is the only
//! implementation: nine independent in-memory collections, reseeded with
//! demonstration data on every start.

pub mod collection;
pub mod mem_storage;
pub mod seed;

use async_trait::async_trait;

use models::{
    booking::{Booking, NewBooking},
    destination::{Destination, NewDestination},
    event::{Event, NewEvent},
    experience::{Experience, NewExperience},
    hidden_gem::{HiddenGem, NewHiddenGem},
    newsletter::{NewNewsletter, Newsletter},
    preference::{NewPreference, Preference, PreferencePatch},
    review::{NewReview, Review},
    user::{NewUser, User, UserPatch},
};

use crate::errors::ServiceError;

/// Typed operations over every entity kind.
///
/// Lookups signal "not found" with `None`; listings return records in
/// insertion order. The only failure is `ServiceError::Conflict` when a
/// username or email is already taken.
#[async_trait]
pub trait Storage: Send + Sync {
    // users
    async fn get_user(&self, id: u64) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    async fn get_user_by_email(&self, email: &str) -> Option<User>;
    async fn create_user(&self, input: NewUser) -> Result<User, ServiceError>;
    async fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, ServiceError>;

    // destinations
    async fn get_destinations(&self) -> Vec<Destination>;
    async fn get_destination(&self, id: u64) -> Option<Destination>;
    async fn get_destinations_by_region(&self, region: &str) -> Vec<Destination>;
    async fn get_destinations_by_tags(&self, tags: &[String]) -> Vec<Destination>;
    async fn create_destination(&self, input: NewDestination) -> Destination;

    // experiences
    async fn get_experiences(&self) -> Vec<Experience>;
    async fn get_experience(&self, id: u64) -> Option<Experience>;
    async fn get_experiences_by_category(&self, category: &str) -> Vec<Experience>;
    async fn create_experience(&self, input: NewExperience) -> Experience;

    // reviews
    async fn get_reviews(&self) -> Vec<Review>;
    async fn get_review(&self, id: u64) -> Option<Review>;
    async fn get_reviews_by_destination(&self, destination_id: u64) -> Vec<Review>;
    async fn get_reviews_by_experience(&self, experience_id: u64) -> Vec<Review>;
    async fn get_reviews_by_user(&self, user_id: u64) -> Vec<Review>;
    async fn create_review(&self, input: NewReview) -> Review;

    // hidden gems
    async fn get_hidden_gems(&self) -> Vec<HiddenGem>;
    async fn get_hidden_gem(&self, id: u64) -> Option<HiddenGem>;
    async fn get_hidden_gems_by_region(&self, region: &str) -> Vec<HiddenGem>;
    async fn create_hidden_gem(&self, input: NewHiddenGem) -> HiddenGem;

    // events
    async fn get_events(&self) -> Vec<Event>;
    async fn get_event(&self, id: u64) -> Option<Event>;
    async fn create_event(&self, input: NewEvent) -> Event;

    // bookings
    async fn get_bookings(&self) -> Vec<Booking>;
    async fn get_booking(&self, id: u64) -> Option<Booking>;
    async fn get_bookings_by_user(&self, user_id: u64) -> Vec<Booking>;
    async fn create_booking(&self, input: NewBooking) -> Booking;
    async fn update_booking_status(&self, id: u64, status: String) -> Option<Booking>;

    // newsletter
    async fn subscribe_to_newsletter(&self, input: NewNewsletter) -> Newsletter;
    async fn get_subscriber_by_email(&self, email: &str) -> Option<Newsletter>;
    async fn get_subscribers(&self) -> Vec<Newsletter>;

    // preferences
    async fn get_user_preferences(&self, user_id: u64) -> Option<Preference>;
    async fn get_all_preferences(&self) -> Vec<Preference>;
    async fn save_user_preferences(&self, input: NewPreference) -> Preference;
    async fn update_user_preferences(&self, user_id: u64, patch: PreferencePatch) -> Option<Preference>;
}
