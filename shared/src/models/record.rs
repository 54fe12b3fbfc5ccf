//! Input row model
//!
//! One `UserRecord` per spreadsheet row. Spreadsheet cells are sloppy:
//! id numbers, phones, and certification hours may arrive as numbers or as
//! padded strings, so those columns deserialize through a tolerant adapter
//! and every row is normalized before processing.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the upload file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "stringly")]
    pub id_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "stringly")]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default, deserialize_with = "stringly")]
    pub certification_hours: Option<String>,
    #[serde(default)]
    pub type_attendee: Option<String>,
}

impl UserRecord {
    /// Trim every string field, lowercase the email, and drop fields that
    /// are blank after trimming. Certification hours end up as a trimmed
    /// string or `None`, never as an empty string.
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.id_number = clean(self.id_number);
        self.password = clean(self.password);
        self.full_name = clean(self.full_name);
        self.phone = clean(self.phone);
        self.specialty = clean(self.specialty);
        self.certification_hours = clean(self.certification_hours);
        self.type_attendee = clean(self.type_attendee);
        self
    }

    /// Identity-provider credential for this row: explicit password, or the
    /// id number as the fallback.
    pub fn signup_password(&self) -> Option<&str> {
        self.password.as_deref().or(self.id_number.as_deref())
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accept a string, a number, or null for a cell-backed column.
fn stringly<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Null,
    }

    Ok(match Cell::deserialize(deserializer)? {
        Cell::Text(s) => Some(s),
        Cell::Int(n) => Some(n.to_string()),
        Cell::Float(f) => {
            // Spreadsheets hand integers back as floats; keep "40", not "40.0"
            if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Cell::Bool(b) => Some(b.to_string()),
        Cell::Null => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cells_become_strings() {
        let json = r#"{"email": "a@b.co", "idNumber": 1017234, "certificationHours": 40}"#;
        let row: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.id_number.as_deref(), Some("1017234"));
        assert_eq!(row.certification_hours.as_deref(), Some("40"));
    }

    #[test]
    fn test_float_hours_keep_integer_spelling() {
        let json = r#"{"email": "a@b.co", "certificationHours": 40.0}"#;
        let row: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.certification_hours.as_deref(), Some("40"));

        let json = r#"{"email": "a@b.co", "certificationHours": 7.5}"#;
        let row: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.certification_hours.as_deref(), Some("7.5"));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let row = UserRecord {
            email: "  Ana.Lopez@Example.COM ".to_string(),
            id_number: Some(" 1017 ".to_string()),
            full_name: Some("  Ana López ".to_string()),
            certification_hours: Some("  ".to_string()),
            ..Default::default()
        }
        .normalize();

        assert_eq!(row.email, "ana.lopez@example.com");
        assert_eq!(row.id_number.as_deref(), Some("1017"));
        assert_eq!(row.full_name.as_deref(), Some("Ana López"));
        assert!(row.certification_hours.is_none());
    }

    #[test]
    fn test_signup_password_falls_back_to_id_number() {
        let row = UserRecord {
            email: "a@b.co".to_string(),
            id_number: Some("1017".to_string()),
            ..Default::default()
        };
        assert_eq!(row.signup_password(), Some("1017"));

        let row = UserRecord {
            password: Some("secret".to_string()),
            ..row
        };
        assert_eq!(row.signup_password(), Some("secret"));
    }
}
