//! Record types for the tourism API.
//! - One module per entity kind: the stored record, its insert input and,
//!   where the kind supports partial mutation, a typed patch.
//! - Insert inputs implement [`validation::Validate`]; the store itself never validates.
//! - JSON uses camelCase field names.

pub mod errors;
pub mod validation;
pub mod user;
pub mod destination;
pub mod experience;
pub mod review;
pub mod hidden_gem;
pub mod event;
pub mod booking;
pub mod newsletter;
pub mod preference;

pub use validation::Validate;
