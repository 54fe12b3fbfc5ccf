//! Users resource

use crate::error::ClientResult;
use crate::http::CongresoClient;
use shared::models::{User, UserCreate};

impl CongresoClient {
    /// Create a local user record linked to an identity-provider uid
    pub async fn create_user(&self, payload: &UserCreate) -> ClientResult<User> {
        self.post("/users", payload).await
    }

    /// Fetch a user by id. Used to confirm a member's `userId` link still
    /// resolves before trusting it.
    pub async fn fetch_user_by_id(&self, id: &str) -> ClientResult<User> {
        self.get(&format!("/users/{}", id.trim())).await
    }
}
