//! Import run report
//!
//! One [`ReportRow`] per input row, appended in input order, plus the
//! running processed/error tally the UI and logs show while the batch is
//! underway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to one input row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    CreatedAttendee,
    UpdatedAttendee,
    /// Reserved: reachable only if the store ever reports a no-op
    SkippedDuplicate,
    Error,
}

/// Row-level outcome bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    Ok,
    Skipped,
    Error,
}

/// One outcome line of the downloadable report.
///
/// Field order matches the report file columns:
/// `email, status, action, message, userId, memberId, eventId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub email: String,
    pub status: RowStatus,
    pub action: RowAction,
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "memberId")]
    pub member_id: Option<String>,
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
}

impl ReportRow {
    /// Successful row (attendee created or updated)
    pub fn ok(
        email: impl Into<String>,
        action: RowAction,
        message: impl Into<String>,
        user_id: impl Into<String>,
        member_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            status: RowStatus::Ok,
            action,
            message: message.into(),
            user_id: Some(user_id.into()),
            member_id: Some(member_id.into()),
            event_id: Some(event_id.into()),
        }
    }

    /// Failed row; carries whatever ids were resolved before the failure
    pub fn error(
        email: impl Into<String>,
        message: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            status: RowStatus::Error,
            action: RowAction::Error,
            message: message.into(),
            user_id: None,
            member_id: None,
            event_id: Some(event_id.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == RowStatus::Error
    }
}

/// Accumulated outcome of one import run
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// One entry per input row, in input order
    pub rows: Vec<ReportRow>,
    /// Rows that ended in a created or updated attendee
    pub processed: usize,
    /// Rows that ended in an error entry
    pub errors: usize,
    /// Rows the run was asked to process
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ImportReport {
    pub fn new(total: usize) -> Self {
        Self {
            rows: Vec::with_capacity(total),
            processed: 0,
            errors: 0,
            total,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Append a row outcome, keeping the tallies in step with the rows
    pub fn push(&mut self, row: ReportRow) {
        if row.is_error() {
            self.errors += 1;
        } else {
            self.processed += 1;
        }
        self.rows.push(row);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Rows completed so far (success or error)
    pub fn completed(&self) -> usize {
        self.processed + self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&RowAction::CreatedAttendee).unwrap(),
            r#""created_attendee""#
        );
        assert_eq!(
            serde_json::to_string(&RowAction::UpdatedAttendee).unwrap(),
            r#""updated_attendee""#
        );
        assert_eq!(
            serde_json::to_string(&RowStatus::Ok).unwrap(),
            r#""OK""#
        );
        assert_eq!(
            serde_json::to_string(&RowStatus::Error).unwrap(),
            r#""ERROR""#
        );
    }

    #[test]
    fn test_counters_track_rows() {
        let mut report = ImportReport::new(3);
        report.push(ReportRow::ok(
            "a@b.co",
            RowAction::CreatedAttendee,
            "created",
            "u1",
            "m1",
            "e1",
        ));
        report.push(ReportRow::error("c@d.co", "boom", "e1"));
        report.push(ReportRow::ok(
            "e@f.co",
            RowAction::UpdatedAttendee,
            "updated",
            "u2",
            "m2",
            "e1",
        ));

        assert_eq!(report.processed, 2);
        assert_eq!(report.errors, 1);
        assert_eq!(report.completed(), 3);
        assert_eq!(report.rows.len(), 3);
        // Input order preserved
        assert_eq!(report.rows[1].email, "c@d.co");
    }
}
