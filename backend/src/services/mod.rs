//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod entry;
pub mod user;

pub use entry::EntryService;
pub use user::UserService;
