use utoipa::OpenApi;

use crate::routes::{
    bookings, destinations, events, experiences, hidden_gems, newsletter, preferences, reviews,
    users, weather,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tourism API", description = "Destinations, experiences, reviews and bookings"),
    paths(
        crate::routes::health,
        users::create,
        users::get,
        users::update,
        destinations::list,
        destinations::get,
        destinations::by_region,
        destinations::create,
        experiences::list,
        experiences::get,
        experiences::by_category,
        experiences::create,
        reviews::list,
        reviews::get,
        reviews::by_destination,
        reviews::by_experience,
        reviews::by_user,
        reviews::create,
        hidden_gems::list,
        hidden_gems::get,
        hidden_gems::by_region,
        hidden_gems::create,
        events::list,
        events::get,
        events::create,
        bookings::list,
        bookings::get,
        bookings::by_user,
        bookings::create,
        bookings::update_status,
        newsletter::subscribe,
        preferences::get,
        preferences::save,
        preferences::update,
        weather::forecast,
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "destinations"),
        (name = "experiences"),
        (name = "reviews"),
        (name = "hidden-gems"),
        (name = "events"),
        (name = "bookings"),
        (name = "newsletter"),
        (name = "preferences"),
        (name = "weather")
    )
)]
pub struct ApiDoc;
