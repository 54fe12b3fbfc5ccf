//! Attendee upsert by (member, event)
//!
//! The attendee store has a unique index on (memberId, eventId) but no
//! native upsert, so this routine does check-then-act: look up, update if
//! present, otherwise create. The create can lose a race against another
//! writer; a uniqueness conflict at that point is an expected outcome, and
//! the routine recovers by re-running the lookup once and updating the
//! record the winner created.

use crate::api::AttendeeStore;
use crate::error::{ClientError, ClientResult};
use shared::models::{AttendeeCreate, AttendeeUpdate};

/// Desired attendee state for one (member, event) pair
#[derive(Debug, Clone)]
pub struct AttendeeUpsert {
    pub member_id: String,
    pub event_id: String,
    pub user_id: Option<String>,
    pub attended: Option<bool>,
    /// Always a string by the time it gets here (see `UserRecord::normalize`)
    pub certification_hours: Option<String>,
    pub type_attendee: Option<String>,
}

impl AttendeeUpsert {
    pub fn new(member_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into().trim().to_string(),
            event_id: event_id.into().trim().to_string(),
            user_id: None,
            attended: None,
            certification_hours: None,
            type_attendee: None,
        }
    }

    /// Partial update carrying only the fields the caller provided
    pub fn changes(&self) -> AttendeeUpdate {
        AttendeeUpdate {
            user_id: self.user_id.clone(),
            attended: self.attended,
            certification_hours: self.certification_hours.clone(),
            type_attendee: self.type_attendee.clone(),
        }
    }

    fn create_payload(&self) -> AttendeeCreate {
        AttendeeCreate {
            member_id: self.member_id.clone(),
            event_id: self.event_id.clone(),
            user_id: self.user_id.clone(),
            attended: self.attended,
            certification_hours: self.certification_hours.clone(),
            type_attendee: self.type_attendee.clone(),
        }
    }
}

/// Outcome of an upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed; one was created
    Created { id: String },
    /// A record existed (or won a creation race); it was partially updated
    Updated { id: String },
}

impl UpsertOutcome {
    /// Attendee record id this outcome refers to
    pub fn id(&self) -> &str {
        match self {
            UpsertOutcome::Created { id } | UpsertOutcome::Updated { id } => id,
        }
    }
}

/// Ensure exactly one attendee record exists for `desired`'s (member, event)
/// pair with the desired fields applied.
///
/// A uniqueness conflict on create means another writer inserted the pair
/// between our lookup and our create; the lookup is re-run once and the
/// existing record updated. If the recovery lookup finds nothing, the
/// original creation error propagates. Any other creation error propagates
/// immediately.
pub async fn upsert_attendee_by_member_event<S: AttendeeStore + ?Sized>(
    store: &S,
    desired: &AttendeeUpsert,
) -> ClientResult<UpsertOutcome> {
    let member_id = desired.member_id.trim();
    let event_id = desired.event_id.trim();
    if member_id.is_empty() || event_id.is_empty() {
        return Err(ClientError::Config(
            "upsert requires non-empty memberId and eventId".into(),
        ));
    }

    if let Some(existing) = store.find_attendee(member_id, event_id).await? {
        store.update_attendee(&existing.id, &desired.changes()).await?;
        return Ok(UpsertOutcome::Updated { id: existing.id });
    }

    match store.create_attendee(&desired.create_payload()).await {
        Ok(created) => Ok(UpsertOutcome::Created { id: created.id }),
        Err(err) if err.is_unique_violation() => {
            tracing::debug!(
                member_id,
                event_id,
                "attendee create lost a race, re-running lookup"
            );
            match store.find_attendee(member_id, event_id).await? {
                Some(existing) => {
                    store.update_attendee(&existing.id, &desired.changes()).await?;
                    Ok(UpsertOutcome::Updated { id: existing.id })
                }
                // Conflict reported but nothing to recover with: surface the
                // original creation error.
                None => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}
