//! Resource operations on the conference API
//!
//! One module per resource, as methods on [`CongresoClient`]. The seam
//! traits below are what the bulk import engine consumes; the real client
//! implements them, tests drive the engine with in-memory stand-ins.

pub mod attendees;
pub mod members;
pub mod users;

use crate::error::ClientResult;
use crate::http::CongresoClient;
use async_trait::async_trait;
use shared::models::{
    Attendee, AttendeeCreate, AttendeeUpdate, Member, MemberCreate, User, UserCreate,
};

/// Member and user resolution operations
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Look up the member for a (trimmed, lowercased) email, first match wins
    async fn find_member_by_email(&self, email: &str) -> ClientResult<Option<Member>>;
    async fn create_member(&self, payload: &MemberCreate) -> ClientResult<Member>;
    async fn create_user(&self, payload: &UserCreate) -> ClientResult<User>;
    async fn fetch_user_by_id(&self, id: &str) -> ClientResult<User>;
}

/// Attendee store operations keyed by (member, event)
#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Exact-match lookup for the (member, event) pair, at most one result
    async fn find_attendee(&self, member_id: &str, event_id: &str)
    -> ClientResult<Option<Attendee>>;
    async fn create_attendee(&self, payload: &AttendeeCreate) -> ClientResult<Attendee>;
    async fn update_attendee(&self, id: &str, changes: &AttendeeUpdate) -> ClientResult<Attendee>;
}

#[async_trait]
impl<T: MemberDirectory + ?Sized> MemberDirectory for std::sync::Arc<T> {
    async fn find_member_by_email(&self, email: &str) -> ClientResult<Option<Member>> {
        (**self).find_member_by_email(email).await
    }

    async fn create_member(&self, payload: &MemberCreate) -> ClientResult<Member> {
        (**self).create_member(payload).await
    }

    async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        (**self).create_user(payload).await
    }

    async fn fetch_user_by_id(&self, id: &str) -> ClientResult<User> {
        (**self).fetch_user_by_id(id).await
    }
}

#[async_trait]
impl<T: AttendeeStore + ?Sized> AttendeeStore for std::sync::Arc<T> {
    async fn find_attendee(
        &self,
        member_id: &str,
        event_id: &str,
    ) -> ClientResult<Option<Attendee>> {
        (**self).find_attendee(member_id, event_id).await
    }

    async fn create_attendee(&self, payload: &AttendeeCreate) -> ClientResult<Attendee> {
        (**self).create_attendee(payload).await
    }

    async fn update_attendee(&self, id: &str, changes: &AttendeeUpdate) -> ClientResult<Attendee> {
        (**self).update_attendee(id, changes).await
    }
}

#[async_trait]
impl MemberDirectory for CongresoClient {
    async fn find_member_by_email(&self, email: &str) -> ClientResult<Option<Member>> {
        CongresoClient::find_member_by_email(self, email).await
    }

    async fn create_member(&self, payload: &MemberCreate) -> ClientResult<Member> {
        CongresoClient::create_member(self, payload).await
    }

    async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        CongresoClient::create_user(self, payload).await
    }

    async fn fetch_user_by_id(&self, id: &str) -> ClientResult<User> {
        CongresoClient::fetch_user_by_id(self, id).await
    }
}

#[async_trait]
impl AttendeeStore for CongresoClient {
    async fn find_attendee(
        &self,
        member_id: &str,
        event_id: &str,
    ) -> ClientResult<Option<Attendee>> {
        CongresoClient::find_attendee(self, member_id, event_id).await
    }

    async fn create_attendee(&self, payload: &AttendeeCreate) -> ClientResult<Attendee> {
        CongresoClient::create_attendee(self, payload).await
    }

    async fn update_attendee(&self, id: &str, changes: &AttendeeUpdate) -> ClientResult<Attendee> {
        CongresoClient::update_attendee(self, id, changes).await
    }
}
