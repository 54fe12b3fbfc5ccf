//! Attendee model
//!
//! One attendance record per (member, event) pair. The backing store
//! enforces that uniqueness with an index; the client side never creates a
//! second record for a pair (see the upsert routine in `congreso-client`).

use serde::{Deserialize, Serialize};

/// Attendee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_id: String,
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,
    /// Stored as a string by the backend schema, whatever the source cell was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_attendee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_downloads: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create attendee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeCreate {
    pub member_id: String,
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_attendee: Option<String>,
}

/// Partial update payload. Only fields the caller set reach the wire, so an
/// update never nulls out what it does not mention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_attendee: Option<String>,
}

impl AttendeeUpdate {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.attended.is_none()
            && self.certification_hours.is_none()
            && self.type_attendee.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let update = AttendeeUpdate {
            attended: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"attended":true}"#);
    }

    #[test]
    fn test_create_payload_wire_names() {
        let create = AttendeeCreate {
            member_id: "m1".to_string(),
            event_id: "e1".to_string(),
            user_id: Some("u1".to_string()),
            attended: Some(true),
            certification_hours: Some("40".to_string()),
            type_attendee: None,
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["memberId"], "m1");
        assert_eq!(json["eventId"], "e1");
        assert_eq!(json["certificationHours"], "40");
        assert!(json.get("typeAttendee").is_none());
    }
}
