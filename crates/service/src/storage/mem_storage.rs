use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

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

use super::{collection::Collection, seed, Storage};
use crate::errors::ServiceError;

/// In-memory store: one lock per collection.
///
/// Every operation takes its collection's lock once and finishes the whole
/// read-modify-write before releasing it, so two operations on the same
/// collection never interleave.
#[derive(Default)]
pub struct MemStorage {
    users: RwLock<Collection<User>>,
    destinations: RwLock<Collection<Destination>>,
    experiences: RwLock<Collection<Experience>>,
    reviews: RwLock<Collection<Review>>,
    hidden_gems: RwLock<Collection<HiddenGem>>,
    events: RwLock<Collection<Event>>,
    bookings: RwLock<Collection<Booking>>,
    newsletters: RwLock<Collection<Newsletter>>,
    preferences: RwLock<Collection<Preference>>,
}

impl MemStorage {
    /// A store with every collection empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store preloaded with the demonstration destinations, experiences,
    /// hidden gems and events.
    pub fn seeded() -> Self {
        let mut storage = Self::empty();
        let destinations = storage.destinations.get_mut();
        for input in seed::destinations() {
            destinations.insert_with(|id| input.into_record(id));
        }
        let experiences = storage.experiences.get_mut();
        for input in seed::experiences() {
            experiences.insert_with(|id| input.into_record(id));
        }
        let hidden_gems = storage.hidden_gems.get_mut();
        for input in seed::hidden_gems() {
            hidden_gems.insert_with(|id| input.into_record(id));
        }
        let events = storage.events.get_mut();
        for input in seed::events() {
            events.insert_with(|id| input.into_record(id));
        }
        info!(
            destinations = destinations.len(),
            experiences = experiences.len(),
            hidden_gems = hidden_gems.len(),
            events = events.len(),
            "storage seeded"
        );
        storage
    }
}

/// Reject a username or email already held by a user other than `except`.
fn ensure_unique_user(
    users: &Collection<User>,
    except: Option<u64>,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<(), ServiceError> {
    let other = |u: &User| Some(u.id) != except;
    if let Some(username) = username {
        if users.any(|u| other(u) && u.username == username) {
            warn!(%username, "username already taken");
            return Err(ServiceError::conflict("Username"));
        }
    }
    if let Some(email) = email {
        if users.any(|u| other(u) && u.email == email) {
            warn!(%email, "email already taken");
            return Err(ServiceError::conflict("Email"));
        }
    }
    Ok(())
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: u64) -> Option<User> {
        self.users.read().await.get(id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.read().await.find(|u| u.username == username)
    }

    async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.find(|u| u.email == email)
    }

    async fn create_user(&self, input: NewUser) -> Result<User, ServiceError> {
        let mut users = self.users.write().await;
        ensure_unique_user(&users, None, Some(&input.username), Some(&input.email))?;
        let user = users.insert_with(|id| input.into_record(id, Utc::now()));
        info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, ServiceError> {
        let mut users = self.users.write().await;
        if users.get(id).is_none() {
            return Ok(None);
        }
        ensure_unique_user(&users, Some(id), patch.username.as_deref(), patch.email.as_deref())?;
        let updated = users.update(id, |u| u.apply(patch));
        debug!(user_id = id, "user updated");
        Ok(updated)
    }

    async fn get_destinations(&self) -> Vec<Destination> {
        self.destinations.read().await.list()
    }

    async fn get_destination(&self, id: u64) -> Option<Destination> {
        self.destinations.read().await.get(id)
    }

    async fn get_destinations_by_region(&self, region: &str) -> Vec<Destination> {
        self.destinations.read().await.filter(|d| d.region == region)
    }

    async fn get_destinations_by_tags(&self, tags: &[String]) -> Vec<Destination> {
        self.destinations.read().await.filter(|d| d.has_any_tag(tags))
    }

    async fn create_destination(&self, input: NewDestination) -> Destination {
        let destination = self.destinations.write().await.insert_with(|id| input.into_record(id));
        info!(destination_id = destination.id, name = %destination.name, "destination created");
        destination
    }

    async fn get_experiences(&self) -> Vec<Experience> {
        self.experiences.read().await.list()
    }

    async fn get_experience(&self, id: u64) -> Option<Experience> {
        self.experiences.read().await.get(id)
    }

    async fn get_experiences_by_category(&self, category: &str) -> Vec<Experience> {
        self.experiences.read().await.filter(|e| e.category == category)
    }

    async fn create_experience(&self, input: NewExperience) -> Experience {
        let experience = self.experiences.write().await.insert_with(|id| input.into_record(id));
        info!(experience_id = experience.id, title = %experience.title, "experience created");
        experience
    }

    async fn get_reviews(&self) -> Vec<Review> {
        self.reviews.read().await.list()
    }

    async fn get_review(&self, id: u64) -> Option<Review> {
        self.reviews.read().await.get(id)
    }

    async fn get_reviews_by_destination(&self, destination_id: u64) -> Vec<Review> {
        self.reviews.read().await.filter(|r| r.destination_id == Some(destination_id))
    }

    async fn get_reviews_by_experience(&self, experience_id: u64) -> Vec<Review> {
        self.reviews.read().await.filter(|r| r.experience_id == Some(experience_id))
    }

    async fn get_reviews_by_user(&self, user_id: u64) -> Vec<Review> {
        self.reviews.read().await.filter(|r| r.user_id == user_id)
    }

    async fn create_review(&self, input: NewReview) -> Review {
        let review = self.reviews.write().await.insert_with(|id| input.into_record(id, Utc::now()));
        info!(review_id = review.id, user_id = review.user_id, "review created");
        review
    }

    async fn get_hidden_gems(&self) -> Vec<HiddenGem> {
        self.hidden_gems.read().await.list()
    }

    async fn get_hidden_gem(&self, id: u64) -> Option<HiddenGem> {
        self.hidden_gems.read().await.get(id)
    }

    async fn get_hidden_gems_by_region(&self, region: &str) -> Vec<HiddenGem> {
        self.hidden_gems.read().await.filter(|g| g.region == region)
    }

    async fn create_hidden_gem(&self, input: NewHiddenGem) -> HiddenGem {
        let gem = self.hidden_gems.write().await.insert_with(|id| input.into_record(id));
        info!(hidden_gem_id = gem.id, name = %gem.name, "hidden gem created");
        gem
    }

    async fn get_events(&self) -> Vec<Event> {
        self.events.read().await.list()
    }

    async fn get_event(&self, id: u64) -> Option<Event> {
        self.events.read().await.get(id)
    }

    async fn create_event(&self, input: NewEvent) -> Event {
        let event = self.events.write().await.insert_with(|id| input.into_record(id));
        info!(event_id = event.id, title = %event.title, "event created");
        event
    }

    async fn get_bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.list()
    }

    async fn get_booking(&self, id: u64) -> Option<Booking> {
        self.bookings.read().await.get(id)
    }

    async fn get_bookings_by_user(&self, user_id: u64) -> Vec<Booking> {
        self.bookings.read().await.filter(|b| b.user_id == user_id)
    }

    async fn create_booking(&self, input: NewBooking) -> Booking {
        let booking = self.bookings.write().await.insert_with(|id| input.into_record(id, Utc::now()));
        info!(booking_id = booking.id, user_id = booking.user_id, status = %booking.status, "booking created");
        booking
    }

    async fn update_booking_status(&self, id: u64, status: String) -> Option<Booking> {
        let updated = self.bookings.write().await.update(id, |b| b.status = status);
        if let Some(b) = &updated {
            info!(booking_id = b.id, status = %b.status, "booking status updated");
        }
        updated
    }

    async fn subscribe_to_newsletter(&self, input: NewNewsletter) -> Newsletter {
        let mut newsletters = self.newsletters.write().await;
        if let Some(existing) = newsletters.find(|n| n.email == input.email) {
            debug!(subscriber_id = existing.id, "already subscribed; returning existing record");
            return existing;
        }
        let subscriber = newsletters.insert_with(|id| input.into_record(id, Utc::now()));
        info!(subscriber_id = subscriber.id, "newsletter subscription created");
        subscriber
    }

    async fn get_subscriber_by_email(&self, email: &str) -> Option<Newsletter> {
        self.newsletters.read().await.find(|n| n.email == email)
    }

    async fn get_subscribers(&self) -> Vec<Newsletter> {
        self.newsletters.read().await.list()
    }

    async fn get_user_preferences(&self, user_id: u64) -> Option<Preference> {
        self.preferences.read().await.find(|p| p.user_id == user_id)
    }

    async fn get_all_preferences(&self) -> Vec<Preference> {
        self.preferences.read().await.list()
    }

    async fn save_user_preferences(&self, input: NewPreference) -> Preference {
        let NewPreference { user_id, fields } = input;
        let mut preferences = self.preferences.write().await;
        // taken by the merge closure only when a record matches
        let mut pending = Some(fields);
        let merged = preferences.update_first(
            |p| p.user_id == user_id,
            |p| p.apply(pending.take().unwrap_or_default()),
        );
        match merged {
            Some(merged) => {
                debug!(preference_id = merged.id, user_id, "preferences merged");
                merged
            }
            None => {
                let fields = pending.take().unwrap_or_default();
                let created = preferences.insert_with(|id| Preference::from_patch(id, user_id, fields));
                info!(preference_id = created.id, user_id, "preferences created");
                created
            }
        }
    }

    async fn update_user_preferences(&self, user_id: u64, patch: PreferencePatch) -> Option<Preference> {
        let updated = self
            .preferences
            .write()
            .await
            .update_first(|p| p.user_id == user_id, |p| p.apply(patch));
        if updated.is_some() {
            debug!(user_id, "preferences updated");
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::destination::Coordinates;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            email: email.into(),
            password: "hashed-secret".into(),
            full_name: None,
        }
    }

    fn new_booking(user_id: u64) -> NewBooking {
        NewBooking {
            user_id,
            experience_id: Some(2),
            destination_id: None,
            booking_date: "2024-08-14".into(),
            number_of_people: 3,
            total_price: Some(180),
            special_requests: Some("vegetarian lunch".into()),
            status: None,
        }
    }

    fn prefs(user_id: u64, fields: PreferencePatch) -> NewPreference {
        NewPreference { user_id, fields }
    }

    #[tokio::test]
    async fn seeded_store_has_demo_data() {
        let store = MemStorage::seeded();
        assert_eq!(store.get_destinations().await.len(), 3);
        assert_eq!(store.get_experiences().await.len(), 3);
        assert_eq!(store.get_hidden_gems().await.len(), 4);
        assert_eq!(store.get_events().await.len(), 3);
        assert!(store.get_reviews().await.is_empty());
        assert!(store.get_bookings().await.is_empty());

        let central = store.get_destinations_by_region("Central Region").await;
        assert_eq!(central.len(), 1);
        assert_eq!(central[0].name, "Cape Coast");
        assert_eq!(central[0].id, 1);

        let volta: Vec<String> = store
            .get_hidden_gems_by_region("Volta Region")
            .await
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(volta, vec!["Tafi Atome Monkey Sanctuary", "Wli Waterfalls"]);

        let culinary = store.get_experiences_by_category("Culinary").await;
        assert_eq!(culinary.len(), 1);
        assert_eq!(culinary[0].location, "Kumasi");
    }

    #[tokio::test]
    async fn tag_filter_is_any_match() {
        let store = MemStorage::seeded();
        let hits = store
            .get_destinations_by_tags(&["Safari".into(), "Markets".into()])
            .await;
        let names: Vec<&str> = hits.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Kumasi", "Mole National Park"]);

        let heritage = store.get_destinations_by_tags(&["Cultural Heritage".into()]).await;
        assert_eq!(heritage.len(), 2);
        assert!(store.get_destinations_by_tags(&["Skiing".into()]).await.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let store = MemStorage::seeded();

        let dest = store
            .create_destination(NewDestination {
                name: "Busua".into(),
                region: "Western Region".into(),
                description: "Surf village".into(),
                short_description: "Surf".into(),
                image_url: "https://example.com/busua.jpg".into(),
                rating: 44,
                coordinates: Coordinates { lat: 4.8, lng: -1.93 },
                top_attractions: vec![],
                tags: vec!["Beaches".into()],
            })
            .await;
        assert_eq!(dest.id, 4);
        assert_eq!(store.get_destination(dest.id).await, Some(dest));

        let exp = store
            .create_experience(NewExperience {
                title: "Canopy Walk".into(),
                category: "Nature".into(),
                description: "Kakum canopy".into(),
                image_url: "https://example.com/kakum.jpg".into(),
                location: "Kakum".into(),
                duration: "2 hours".into(),
                price: 30,
            })
            .await;
        assert_eq!(store.get_experience(exp.id).await, Some(exp));

        let gem = store
            .create_hidden_gem(NewHiddenGem {
                name: "Boti Falls".into(),
                description: "Twin waterfalls".into(),
                image_url: "https://example.com/boti.jpg".into(),
                region: "Eastern Region".into(),
            })
            .await;
        assert_eq!(store.get_hidden_gem(gem.id).await, Some(gem));

        let event = store
            .create_event(NewEvent {
                title: "Panafest".into(),
                description: "Pan-African festival".into(),
                location: "Cape Coast".into(),
                date: "July 28, 2024".into(),
                month: "JUL".into(),
                day: "28".into(),
            })
            .await;
        assert_eq!(event.id, 4);
        assert_eq!(store.get_event(event.id).await, Some(event));

        let user = store.create_user(new_user("ama", "ama@example.com")).await.unwrap();
        assert_eq!(store.get_user(user.id).await, Some(user.clone()));

        let review = store
            .create_review(NewReview {
                destination_id: Some(1),
                experience_id: None,
                user_id: user.id,
                rating: 5,
                text: Some("Unforgettable".into()),
            })
            .await;
        assert_eq!(store.get_review(review.id).await, Some(review));

        let booking = store.create_booking(new_booking(user.id)).await;
        assert_eq!(store.get_booking(booking.id).await, Some(booking));

        let sub = store
            .subscribe_to_newsletter(NewNewsletter { email: "ama@example.com".into(), name: None })
            .await;
        assert_eq!(store.get_subscriber_by_email("ama@example.com").await, Some(sub));

        let pref = store.save_user_preferences(prefs(user.id, PreferencePatch::default())).await;
        assert_eq!(store.get_user_preferences(user.id).await, Some(pref));

        assert_eq!(store.get_destination(99).await, None);
        assert_eq!(store.get_review(99).await, None);
    }

    #[tokio::test]
    async fn ids_strictly_increase_per_collection() {
        let store = MemStorage::empty();
        let mut last = 0;
        for i in 0..5 {
            let r = store
                .create_review(NewReview {
                    destination_id: None,
                    experience_id: None,
                    user_id: i,
                    rating: 3,
                    text: None,
                })
                .await;
            assert!(r.id > last);
            last = r.id;
        }
        assert_eq!(last, 5);
        // independent counter per kind
        let b = store.create_booking(new_booking(1)).await;
        assert_eq!(b.id, 1);
    }

    #[tokio::test]
    async fn review_filters() {
        let store = MemStorage::empty();
        let mk = |destination_id, experience_id, user_id| NewReview {
            destination_id,
            experience_id,
            user_id,
            rating: 4,
            text: None,
        };
        store.create_review(mk(Some(1), None, 10)).await;
        store.create_review(mk(None, Some(2), 10)).await;
        store.create_review(mk(Some(1), Some(2), 11)).await;
        store.create_review(mk(None, None, 12)).await;

        assert_eq!(store.get_reviews_by_destination(1).await.len(), 2);
        assert_eq!(store.get_reviews_by_experience(2).await.len(), 2);
        let by_user: Vec<u64> = store.get_reviews_by_user(10).await.into_iter().map(|r| r.id).collect();
        assert_eq!(by_user, vec![1, 2]);
        assert!(store.get_reviews_by_destination(3).await.is_empty());
    }

    #[tokio::test]
    async fn user_lookups_and_uniqueness() -> anyhow::Result<()> {
        let store = MemStorage::empty();
        assert!(store.get_user_by_username("kwame").await.is_none());
        assert!(store.get_user_by_email("kwame@example.com").await.is_none());

        let kwame = store.create_user(new_user("kwame", "kwame@example.com")).await?;
        assert_eq!(store.get_user_by_username("kwame").await, Some(kwame.clone()));
        assert_eq!(store.get_user_by_email("kwame@example.com").await, Some(kwame.clone()));

        let dup_name = store.create_user(new_user("kwame", "other@example.com")).await;
        assert!(matches!(dup_name, Err(ServiceError::Conflict(ref m)) if m == "Username already exists"));
        let dup_email = store.create_user(new_user("kojo", "kwame@example.com")).await;
        assert!(matches!(dup_email, Err(ServiceError::Conflict(ref m)) if m == "Email already exists"));
        assert!(store.get_user(2).await.is_none());

        let esi = store.create_user(new_user("esi", "esi@example.com")).await?;
        assert_eq!(esi.id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_user_merges_and_guards_uniqueness() -> anyhow::Result<()> {
        let store = MemStorage::empty();
        let a = store.create_user(new_user("abena", "abena@example.com")).await?;
        store.create_user(new_user("yaw", "yaw@example.com")).await?;

        let patched = store
            .update_user(a.id, UserPatch { full_name: Some("Abena Owusu".into()), ..Default::default() })
            .await?
            .expect("user exists");
        assert_eq!(patched.full_name.as_deref(), Some("Abena Owusu"));
        assert_eq!(patched.username, "abena");
        assert_eq!(patched.created_at, a.created_at);

        // keeping one's own email is not a conflict
        let same = store
            .update_user(a.id, UserPatch { email: Some("abena@example.com".into()), ..Default::default() })
            .await?;
        assert!(same.is_some());

        let clash = store
            .update_user(a.id, UserPatch { username: Some("yaw".into()), ..Default::default() })
            .await;
        assert!(matches!(clash, Err(ServiceError::Conflict(_))));
        assert_eq!(store.get_user(a.id).await.map(|u| u.username), Some("abena".to_string()));

        assert!(store.update_user(42, UserPatch::default()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn booking_status_update_touches_only_status() {
        let store = MemStorage::empty();
        assert!(store.update_booking_status(1, "confirmed".into()).await.is_none());

        let created = store.create_booking(new_booking(7)).await;
        assert_eq!(created.status, "pending");
        let updated = store
            .update_booking_status(created.id, "confirmed".into())
            .await
            .expect("booking exists");
        assert_eq!(updated.status, "confirmed");
        assert_eq!(Booking { status: "pending".into(), ..updated.clone() }, created);
        assert_eq!(store.get_booking(created.id).await, Some(updated));

        // any string is accepted
        let odd = store.update_booking_status(created.id, "teleported".into()).await;
        assert_eq!(odd.map(|b| b.status), Some("teleported".to_string()));
    }

    #[tokio::test]
    async fn bookings_by_user() {
        let store = MemStorage::empty();
        store.create_booking(new_booking(1)).await;
        store.create_booking(new_booking(2)).await;
        store.create_booking(new_booking(1)).await;
        let ids: Vec<u64> = store.get_bookings_by_user(1).await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.get_bookings_by_user(3).await.is_empty());
    }

    #[tokio::test]
    async fn newsletter_subscribe_is_idempotent() {
        let store = MemStorage::empty();
        let first = store
            .subscribe_to_newsletter(NewNewsletter { email: "a@x.com".into(), name: Some("Ama".into()) })
            .await;
        let second = store
            .subscribe_to_newsletter(NewNewsletter { email: "a@x.com".into(), name: Some("Someone else".into()) })
            .await;
        assert_eq!(first, second);
        assert_eq!(second.name.as_deref(), Some("Ama"));
        assert_eq!(store.get_subscribers().await.len(), 1);

        let other = store
            .subscribe_to_newsletter(NewNewsletter { email: "b@x.com".into(), name: None })
            .await;
        assert_eq!(other.id, 2);
        assert!(store.get_subscriber_by_email("c@x.com").await.is_none());
    }

    #[tokio::test]
    async fn save_preferences_upserts_by_user() {
        let store = MemStorage::empty();
        let created = store
            .save_user_preferences(prefs(
                5,
                PreferencePatch {
                    interests: Some(vec!["Culture".into()]),
                    travel_style: Some("Slow".into()),
                    ..Default::default()
                },
            ))
            .await;
        assert_eq!(created.id, 1);
        assert_eq!(store.get_all_preferences().await.len(), 1);

        let merged = store
            .save_user_preferences(prefs(
                5,
                PreferencePatch { budget_range: Some("mid".into()), ..Default::default() },
            ))
            .await;
        assert_eq!(merged.id, created.id);
        assert_eq!(merged.interests, vec!["Culture".to_string()]);
        assert_eq!(merged.travel_style.as_deref(), Some("Slow"));
        assert_eq!(merged.budget_range.as_deref(), Some("mid"));
        assert_eq!(store.get_all_preferences().await.len(), 1);
        assert_eq!(store.get_user_preferences(5).await, Some(merged.clone()));

        let other = store.save_user_preferences(prefs(6, PreferencePatch::default())).await;
        assert_eq!(other.id, 2);
        assert_eq!(store.get_all_preferences().await.len(), 2);
    }

    #[tokio::test]
    async fn update_preferences_requires_existing_record() {
        let store = MemStorage::empty();
        let patch = PreferencePatch { accommodation_type: Some("Eco-lodge".into()), ..Default::default() };
        assert!(store.update_user_preferences(9, patch.clone()).await.is_none());
        assert!(store.get_all_preferences().await.is_empty());

        store.save_user_preferences(prefs(9, PreferencePatch::default())).await;
        let updated = store.update_user_preferences(9, patch).await.expect("exists");
        assert_eq!(updated.accommodation_type.as_deref(), Some("Eco-lodge"));
        assert_eq!(updated.user_id, 9);
        assert_eq!(store.get_user_preferences(9).await, Some(updated));
    }
}
