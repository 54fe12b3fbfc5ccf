//! Upload-file boundary
//!
//! Reads the tabular upload file into `UserRecord`s and writes the outcome
//! report back out. First row is the header; columns are
//! `email, idNumber, password, fullName, phone, specialty,
//! certificationHours, typeAttendee`.

use csv::{ReaderBuilder, WriterBuilder};
use shared::models::UserRecord;
use std::path::Path;
use thiserror::Error;

use crate::report::ImportReport;

/// Upload template header, in column order
pub const TEMPLATE_HEADERS: [&str; 8] = [
    "email",
    "idNumber",
    "password",
    "fullName",
    "phone",
    "specialty",
    "certificationHours",
    "typeAttendee",
];

/// File boundary error type
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// CSV row as it appears in the file. Everything reads as text: numeric
/// columns must keep leading zeros (id numbers, phones), so no type
/// inference happens here.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRow {
    #[serde(default)]
    email: String,
    id_number: Option<String>,
    password: Option<String>,
    full_name: Option<String>,
    phone: Option<String>,
    specialty: Option<String>,
    certification_hours: Option<String>,
    type_attendee: Option<String>,
}

impl From<RawRow> for UserRecord {
    fn from(raw: RawRow) -> Self {
        UserRecord {
            email: raw.email,
            id_number: raw.id_number,
            password: raw.password,
            full_name: raw.full_name,
            phone: raw.phone,
            specialty: raw.specialty,
            certification_hours: raw.certification_hours,
            type_attendee: raw.type_attendee,
        }
    }
}

/// Read the upload file into rows. Rows are returned as parsed; the batch
/// engine normalizes them. Fully blank lines are skipped.
pub fn read_rows(path: &Path) -> Result<Vec<UserRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        // Header is row 1; data starts at row 2.
        let record: UserRecord = result
            .map_err(|source| IngestError::Row {
                row: idx + 2,
                source,
            })?
            .into();
        if is_blank(&record) {
            continue;
        }
        rows.push(record);
    }
    Ok(rows)
}

fn is_blank(record: &UserRecord) -> bool {
    record.email.trim().is_empty()
        && record.id_number.is_none()
        && record.full_name.is_none()
        && record.phone.is_none()
}

/// Write the run report: one line per input row, headers
/// `email, status, action, message, userId, memberId, eventId`.
pub fn write_report(path: &Path, report: &ImportReport) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write a headers-only upload template
pub fn write_template(path: &Path) -> Result<(), IngestError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(TEMPLATE_HEADERS)?;
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
