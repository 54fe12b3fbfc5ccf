//! Wire models
//!
//! Entity shapes as the conference API serves them: camelCase fields,
//! Mongo-style `_id` identifiers. Create/Update payloads keep unspecified
//! fields out of the JSON entirely so partial updates never clobber.

pub mod attendee;
pub mod member;
pub mod record;
pub mod user;

// Re-exports
pub use attendee::*;
pub use member::*;
pub use record::*;
pub use user::*;
