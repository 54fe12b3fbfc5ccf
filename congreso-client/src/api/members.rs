//! Members resource

use crate::error::ClientResult;
use crate::http::CongresoClient;
use shared::models::{Member, MemberCreate};
use shared::response::PageData;

impl CongresoClient {
    /// Filtered member search. Filters use the backend's dotted property
    /// syntax, e.g. `("properties.email", "ana@example.com")`.
    pub async fn search_members(
        &self,
        filters: &[(&str, &str)],
        page: u32,
        limit: u32,
    ) -> ClientResult<PageData<Member>> {
        let page = page.to_string();
        let limit = limit.to_string();
        let mut query: Vec<(&str, &str)> = vec![("page", &page), ("limit", &limit)];
        query.extend_from_slice(filters);
        self.get_page("/members/search", &query).await
    }

    /// Look up a member by email, case-insensitive. At most one member
    /// exists per email within an organization; the first hit is taken.
    pub async fn find_member_by_email(&self, email: &str) -> ClientResult<Option<Member>> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Ok(None);
        }
        let page = self
            .search_members(&[("properties.email", &email)], 1, 1)
            .await?;
        Ok(page.into_first())
    }

    /// Create a member profile
    pub async fn create_member(&self, payload: &MemberCreate) -> ClientResult<Member> {
        self.post("/members", payload).await
    }
}
