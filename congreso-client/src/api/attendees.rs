//! Attendees resource

use crate::error::ClientResult;
use crate::http::CongresoClient;
use shared::models::{Attendee, AttendeeCreate, AttendeeUpdate};
use shared::response::PageData;

impl CongresoClient {
    /// Filtered attendee search (page/limit, exact-match filters)
    pub async fn search_attendees(
        &self,
        member_id: &str,
        event_id: &str,
        page: u32,
        limit: u32,
    ) -> ClientResult<PageData<Attendee>> {
        let page = page.to_string();
        let limit = limit.to_string();
        let query: Vec<(&str, &str)> = vec![
            ("memberId", member_id),
            ("eventId", event_id),
            ("page", &page),
            ("limit", &limit),
        ];
        self.get_page("/attendees/search", &query).await
    }

    /// Find the attendee record for a (member, event) pair, if one exists
    pub async fn find_attendee(
        &self,
        member_id: &str,
        event_id: &str,
    ) -> ClientResult<Option<Attendee>> {
        let page = self
            .search_attendees(member_id.trim(), event_id.trim(), 1, 1)
            .await?;
        Ok(page.into_first())
    }

    /// Create an attendee record
    pub async fn create_attendee(&self, payload: &AttendeeCreate) -> ClientResult<Attendee> {
        self.post("/attendees", payload).await
    }

    /// Partially update an attendee record
    pub async fn update_attendee(
        &self,
        id: &str,
        changes: &AttendeeUpdate,
    ) -> ClientResult<Attendee> {
        self.put(&format!("/attendees/{}", id.trim()), changes).await
    }
}
