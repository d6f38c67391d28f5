//! Service layer for the tourism API.
//! - `storage` holds the in-memory entity store behind the `Storage` trait.
//! - Records and their validation live in the `models` crate; the store
//!   never validates, it only enforces id assignment and uniqueness rules.

pub mod errors;
pub mod storage;

pub use storage::{mem_storage::MemStorage, Storage};
