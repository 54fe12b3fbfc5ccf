// congreso-client/tests/upsert.rs
// Upsert-by-(member,event) behavior against a scripted in-memory store.

use async_trait::async_trait;
use congreso_client::{
    ApiError, AttendeeStore, AttendeeUpsert, ClientError, ClientResult, UpsertOutcome,
    upsert_attendee_by_member_event,
};
use shared::models::{Attendee, AttendeeCreate, AttendeeUpdate};
use std::sync::Mutex;

#[derive(Default)]
struct MockStore {
    records: Mutex<Vec<Attendee>>,
    /// Error to return from the next create call
    create_error: Mutex<Option<ApiError>>,
    /// Record a concurrent writer "inserted" while our create was failing
    racer_record: Mutex<Option<Attendee>>,
    /// Call log: "find", "create", "update"
    calls: Mutex<Vec<&'static str>>,
}

impl MockStore {
    fn with_record(record: Attendee) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().push(record);
        store
    }

    fn record(member_id: &str, event_id: &str, id: &str) -> Attendee {
        Attendee {
            id: id.to_string(),
            member_id: member_id.to_string(),
            event_id: event_id.to_string(),
            user_id: None,
            attended: None,
            certification_hours: None,
            type_attendee: None,
            certificate_downloads: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendeeStore for MockStore {
    async fn find_attendee(
        &self,
        member_id: &str,
        event_id: &str,
    ) -> ClientResult<Option<Attendee>> {
        self.calls.lock().unwrap().push("find");
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.member_id == member_id && a.event_id == event_id)
            .cloned())
    }

    async fn create_attendee(&self, payload: &AttendeeCreate) -> ClientResult<Attendee> {
        self.calls.lock().unwrap().push("create");
        if let Some(err) = self.create_error.lock().unwrap().take() {
            if let Some(racer) = self.racer_record.lock().unwrap().take() {
                self.records.lock().unwrap().push(racer);
            }
            return Err(err.into());
        }
        let attendee = Attendee {
            id: format!("att-{}", self.len() + 1),
            member_id: payload.member_id.clone(),
            event_id: payload.event_id.clone(),
            user_id: payload.user_id.clone(),
            attended: payload.attended,
            certification_hours: payload.certification_hours.clone(),
            type_attendee: payload.type_attendee.clone(),
            certificate_downloads: None,
            created_at: None,
            updated_at: None,
        };
        self.records.lock().unwrap().push(attendee.clone());
        Ok(attendee)
    }

    async fn update_attendee(&self, id: &str, changes: &AttendeeUpdate) -> ClientResult<Attendee> {
        self.calls.lock().unwrap().push("update");
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ClientError::from(ApiError::not_found("attendee")))?;
        if let Some(user_id) = &changes.user_id {
            record.user_id = Some(user_id.clone());
        }
        if let Some(attended) = changes.attended {
            record.attended = Some(attended);
        }
        if let Some(hours) = &changes.certification_hours {
            record.certification_hours = Some(hours.clone());
        }
        if let Some(kind) = &changes.type_attendee {
            record.type_attendee = Some(kind.clone());
        }
        Ok(record.clone())
    }
}

fn duplicate_key_error() -> ApiError {
    ApiError::classify(Some(500), "E11000 duplicate key error collection: attendees")
}

fn desired(member_id: &str, event_id: &str) -> AttendeeUpsert {
    AttendeeUpsert {
        attended: Some(true),
        certification_hours: Some("40".to_string()),
        type_attendee: Some("asistente".to_string()),
        user_id: Some("u1".to_string()),
        ..AttendeeUpsert::new(member_id, event_id)
    }
}

#[tokio::test]
async fn test_upsert_is_idempotent() {
    let store = MockStore::default();
    let want = desired("m1", "e1");

    let first = upsert_attendee_by_member_event(&store, &want).await.unwrap();
    assert!(matches!(first, UpsertOutcome::Created { .. }));

    let second = upsert_attendee_by_member_event(&store, &want).await.unwrap();
    assert!(matches!(second, UpsertOutcome::Updated { .. }));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_create_race_recovers_via_relookup() {
    let store = MockStore::default();
    *store.create_error.lock().unwrap() = Some(duplicate_key_error());
    *store.racer_record.lock().unwrap() = Some(MockStore::record("m1", "e1", "att-racer"));

    let outcome = upsert_attendee_by_member_event(&store, &desired("m1", "e1"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpsertOutcome::Updated {
            id: "att-racer".to_string()
        }
    );
    assert_eq!(store.len(), 1);
    // lookup, create, recovery lookup, update
    assert_eq!(store.calls(), vec!["find", "create", "find", "update"]);

    let records = store.records.lock().unwrap();
    assert_eq!(records[0].attended, Some(true));
    assert_eq!(records[0].certification_hours.as_deref(), Some("40"));
}

#[tokio::test]
async fn test_unrecovered_race_propagates_original_error() {
    let store = MockStore::default();
    *store.create_error.lock().unwrap() = Some(duplicate_key_error());
    // No racer record: the recovery lookup finds nothing.

    let err = upsert_attendee_by_member_event(&store, &desired("m1", "e1"))
        .await
        .unwrap_err();

    assert!(err.is_unique_violation());
    assert_eq!(store.calls(), vec!["find", "create", "find"]);
}

#[tokio::test]
async fn test_non_duplicate_create_error_is_not_retried() {
    let store = MockStore::default();
    *store.create_error.lock().unwrap() = Some(ApiError::classify(Some(500), "connection reset"));

    let err = upsert_attendee_by_member_event(&store, &desired("m1", "e1"))
        .await
        .unwrap_err();

    assert!(!err.is_unique_violation());
    assert_eq!(store.calls(), vec!["find", "create"]);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_alone() {
    let mut existing = MockStore::record("m1", "e1", "att-1");
    existing.certification_hours = Some("40".to_string());
    existing.type_attendee = Some("ponente".to_string());
    let store = MockStore::with_record(existing);

    let want = AttendeeUpsert {
        attended: Some(true),
        ..AttendeeUpsert::new("m1", "e1")
    };
    let outcome = upsert_attendee_by_member_event(&store, &want).await.unwrap();
    assert_eq!(
        outcome,
        UpsertOutcome::Updated {
            id: "att-1".to_string()
        }
    );

    let records = store.records.lock().unwrap();
    assert_eq!(records[0].attended, Some(true));
    assert_eq!(records[0].certification_hours.as_deref(), Some("40"));
    assert_eq!(records[0].type_attendee.as_deref(), Some("ponente"));
}

#[tokio::test]
async fn test_blank_ids_are_rejected() {
    let store = MockStore::default();
    let err = upsert_attendee_by_member_event(&store, &AttendeeUpsert::new("  ", "e1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_ids_are_trimmed_before_lookup() {
    let store = MockStore::with_record(MockStore::record("m1", "e1", "att-1"));
    let outcome = upsert_attendee_by_member_event(&store, &AttendeeUpsert::new(" m1 ", " e1 "))
        .await
        .unwrap();
    assert!(matches!(outcome, UpsertOutcome::Updated { .. }));
}
