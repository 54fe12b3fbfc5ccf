//! Bulk row processor
//!
//! Drives the attendee upsert once per uploaded row. Rows run strictly in
//! sequence: the identity provider rate-limits account creation, so the
//! loop awaits every call and pauses before each signup instead of fanning
//! out. The only mutable state is the report accumulator owned by the loop.

use congreso_client::{
    AttendeeStore, AttendeeUpsert, IdentityError, IdentityProvider, MemberDirectory,
    UpsertOutcome, upsert_attendee_by_member_event,
};
use shared::models::{MemberCreate, MemberProperties, UserCreate, UserRecord};
use std::time::Duration;

use crate::report::{ImportReport, ReportRow, RowAction};

/// Per-run options for the batch engine
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Organization new members are created under
    pub organization_id: String,
    /// Event every attendance record is keyed to
    pub event_id: String,
    /// Pause before each identity-provider signup
    pub signup_delay: Duration,
}

/// Resolved (member, user) pair a row upserts with
struct Resolved {
    member_id: String,
    user_id: String,
    note: &'static str,
}

/// Row-level failure that becomes an error report entry
struct RowError {
    message: String,
    member_id: Option<String>,
    user_id: Option<String>,
}

impl RowError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            member_id: None,
            user_id: None,
        }
    }
}

impl<E: std::error::Error> From<E> for RowError {
    fn from(err: E) -> Self {
        Self::new(err.to_string())
    }
}

/// Sequential bulk importer over the three remote collaborators
pub struct BulkImporter<D, I, S> {
    directory: D,
    identity: I,
    store: S,
    options: ImportOptions,
}

impl<D, I, S> BulkImporter<D, I, S>
where
    D: MemberDirectory,
    I: IdentityProvider,
    S: AttendeeStore,
{
    pub fn new(directory: D, identity: I, store: S, options: ImportOptions) -> Self {
        Self {
            directory,
            identity,
            store,
            options,
        }
    }

    /// Process every row, one at a time, in input order. Never fails as a
    /// whole: each row ends as exactly one report entry.
    pub async fn run(&self, rows: Vec<UserRecord>) -> ImportReport {
        let run_id = uuid::Uuid::new_v4();
        let total = rows.len();
        let mut report = ImportReport::new(total);
        tracing::info!(%run_id, total, event_id = %self.options.event_id, "bulk import started");

        for row in rows {
            let row = row.normalize();
            let entry = self.process_row(&row).await;
            report.push(entry);
            tracing::info!(
                %run_id,
                completed = report.completed(),
                total,
                errors = report.errors,
                email = %row.email,
                "row finished"
            );
        }

        report.finish();
        tracing::info!(
            %run_id,
            processed = report.processed,
            errors = report.errors,
            "bulk import finished"
        );
        report
    }

    async fn process_row(&self, row: &UserRecord) -> ReportRow {
        if row.email.is_empty() {
            return ReportRow::error("", "row has no email", &self.options.event_id);
        }

        match self.resolve_row(row).await {
            Ok(resolved) => self.upsert_row(row, resolved).await,
            Err(err) => {
                let mut entry = ReportRow::error(&row.email, err.message, &self.options.event_id);
                entry.member_id = err.member_id;
                entry.user_id = err.user_id;
                entry
            }
        }
    }

    /// Resolve the (member, user) pair for a row: fast path over an existing
    /// linked member, otherwise create identity + user + member, falling
    /// back to local resolution when the identity provider already knows
    /// the email.
    async fn resolve_row(&self, row: &UserRecord) -> Result<Resolved, RowError> {
        // Fast path: a member already linked to a user skips the identity
        // provider entirely.
        if let Some(member) = self.directory.find_member_by_email(&row.email).await? {
            if let Some(user_id) = member.user_id {
                return Ok(Resolved {
                    member_id: member.id,
                    user_id,
                    note: "member already linked",
                });
            }
        }

        // Slow path: the provider rate-limits rapid signups.
        tokio::time::sleep(self.options.signup_delay).await;

        let password = row
            .signup_password()
            .ok_or_else(|| RowError::new("row has neither password nor idNumber"))?;

        match self.identity.create_identity(&row.email, password).await {
            Ok(uid) => self.create_user_and_member(row, uid).await,
            Err(IdentityError::EmailAlreadyInUse) => {
                // The provider has the account; trust only our own store
                // from here on. No further identity-provider calls.
                match self.resolve_locally(&row.email).await? {
                    Some(resolved) => Ok(resolved),
                    None => Err(RowError::new(
                        "identity provider has the email but no local member with a valid user link resolves",
                    )),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn create_user_and_member(
        &self,
        row: &UserRecord,
        uid: String,
    ) -> Result<Resolved, RowError> {
        let user = self
            .directory
            .create_user(&UserCreate { firebase_uid: uid })
            .await
            .map_err(|e| RowError::new(format!("could not create user and/or member: {e}")))?;

        let member = self
            .directory
            .create_member(&MemberCreate {
                user_id: user.id.clone(),
                organization_id: self.options.organization_id.clone(),
                properties: MemberProperties {
                    email: Some(row.email.clone()),
                    id_number: row.id_number.clone(),
                    full_name: row.full_name.clone(),
                    phone: row.phone.clone(),
                    specialty: row.specialty.clone(),
                },
            })
            .await
            .map_err(|e| RowError {
                message: format!("could not create user and/or member: {e}"),
                member_id: None,
                user_id: Some(user.id.clone()),
            })?;

        Ok(Resolved {
            member_id: member.id,
            user_id: user.id,
            note: "account created",
        })
    }

    /// Resolve purely from the local store: the member must exist, carry a
    /// user link, and that link must still fetch. Any miss means the row
    /// cannot be resolved; a search failure is a row error.
    async fn resolve_locally(&self, email: &str) -> Result<Option<Resolved>, RowError> {
        let Some(member) = self.directory.find_member_by_email(email).await? else {
            return Ok(None);
        };
        let Some(user_id) = member.user_id else {
            return Ok(None);
        };
        match self.directory.fetch_user_by_id(&user_id).await {
            Ok(user) => Ok(Some(Resolved {
                member_id: member.id,
                user_id: user.id,
                note: "email known to identity provider, resolved from local store",
            })),
            // A stale link resolves to nothing, same as no link at all.
            Err(_) => Ok(None),
        }
    }

    async fn upsert_row(&self, row: &UserRecord, resolved: Resolved) -> ReportRow {
        let desired = AttendeeUpsert {
            user_id: Some(resolved.user_id.clone()),
            attended: Some(true),
            certification_hours: row.certification_hours.clone(),
            type_attendee: row.type_attendee.clone(),
            ..AttendeeUpsert::new(&resolved.member_id, &self.options.event_id)
        };

        match upsert_attendee_by_member_event(&self.store, &desired).await {
            Ok(outcome) => {
                let action = match outcome {
                    UpsertOutcome::Created { .. } => RowAction::CreatedAttendee,
                    UpsertOutcome::Updated { .. } => RowAction::UpdatedAttendee,
                };
                let verb = match action {
                    RowAction::CreatedAttendee => "attendee created",
                    _ => "attendee updated",
                };
                ReportRow::ok(
                    &row.email,
                    action,
                    format!("{verb} ({})", resolved.note),
                    resolved.user_id,
                    resolved.member_id,
                    &self.options.event_id,
                )
            }
            Err(err) => {
                let mut entry = ReportRow::error(
                    &row.email,
                    format!("attendee upsert failed: {err}"),
                    &self.options.event_id,
                );
                entry.member_id = Some(resolved.member_id);
                entry.user_id = Some(resolved.user_id);
                entry
            }
        }
    }
}
