//! Member model
//!
//! A member is the application-level profile of one person within an
//! organization, linked to a local user record via `userId`.

use serde::{Deserialize, Serialize};

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    /// Linked local user record id, if the member has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_member: Option<bool>,
    #[serde(default)]
    pub properties: MemberProperties,
}

/// Profile properties carried by a member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCreate {
    pub user_id: String,
    pub organization_id: String,
    pub properties: MemberProperties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_deserialize_wire_shape() {
        let json = r#"{
            "_id": "m1",
            "userId": "u1",
            "organizationId": "o1",
            "activeMember": true,
            "properties": {"email": "a@b.co", "fullName": "Ana"}
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.id, "m1");
        assert_eq!(member.user_id.as_deref(), Some("u1"));
        assert_eq!(member.properties.email.as_deref(), Some("a@b.co"));
        assert!(member.properties.phone.is_none());
    }

    #[test]
    fn test_member_without_user_link() {
        let json = r#"{"_id": "m2", "properties": {}}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert!(member.user_id.is_none());
    }
}
