//! Congreso Client - HTTP client for the conference API
//!
//! Provides typed calls to the members / users / attendees resources, the
//! identity-provider signup endpoint, and the attendee upsert routine that
//! keeps (member, event) attendance records unique.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod upsert;

pub use api::{AttendeeStore, MemberDirectory};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CongresoClient;
pub use identity::{FirebaseIdentity, IdentityError, IdentityProvider};
pub use upsert::{AttendeeUpsert, UpsertOutcome, upsert_attendee_by_member_event};

// Re-export shared types for convenience
pub use shared::error::{ApiError, ApiErrorCode};
pub use shared::models::{
    Attendee, AttendeeCreate, AttendeeUpdate, Member, MemberCreate, MemberProperties, User,
    UserCreate, UserRecord,
};
