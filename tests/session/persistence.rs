use std::sync::Arc;
use std::time::Duration;

use cvchat::platform::{Clock, ManualClock};
use cvchat::storage::{FileStore, KeyValueStore, MemoryStore, SESSION_KEY, UnavailableStore};
use tempfile::TempDir;

use crate::harness::{manager, policy};

#[test]
fn session_survives_a_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::starting_now());

    let first = manager(
        Arc::new(FileStore::new(dir.path())),
        clock.clone(),
        policy(3, 30),
    );
    first.increment_question_count();
    let stored = first.increment_question_count();

    let reopened = manager(Arc::new(FileStore::new(dir.path())), clock, policy(3, 30));
    let session = reopened.get_or_create_session();
    assert_eq!(session, stored);
    assert_eq!(session.questions_count, 2);
}

#[test]
fn stored_record_uses_camel_case_and_epoch_millis() {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(store.clone(), clock.clone(), policy(3, 30));
    let session = manager.increment_question_count();

    let raw = store.get(SESSION_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["sessionId"], session.session_id.as_str());
    assert_eq!(json["questionsCount"], 1);
    assert_eq!(json["lastQuestionAt"], clock.now().timestamp_millis());
    assert!(json["createdAt"].is_i64());
}

#[test]
fn unavailable_storage_yields_a_usable_session() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(UnavailableStore), clock, policy(3, 30));

    let session = manager.get_or_create_session();
    assert_eq!(session.questions_count, 0);
    assert!(!session.session_id.is_empty());
    assert!(manager.can_ask_question());
    assert_eq!(manager.increment_question_count().questions_count, 1);
    assert_eq!(manager.get_remaining_time(), None);
}

#[test]
fn corrupt_record_is_replaced_with_a_fresh_session() {
    let store = Arc::new(MemoryStore::new());
    store.set(SESSION_KEY, "{not json").unwrap();
    let manager = manager(
        store.clone(),
        Arc::new(ManualClock::starting_now()),
        policy(3, 30),
    );

    let session = manager.get_or_create_session();
    assert_eq!(session.questions_count, 0);

    let raw = store.get(SESSION_KEY).unwrap().unwrap();
    assert!(raw.contains(&session.session_id));
}

#[test]
fn explicit_reset_replaces_a_throttled_session() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(1, 30));
    let throttled = manager.increment_question_count();
    assert!(!manager.can_ask_question());

    let fresh = manager.reset();
    assert_ne!(fresh.session_id, throttled.session_id);
    assert!(manager.can_ask_question());

    clock.advance(Duration::from_secs(1));
    assert_eq!(manager.get_or_create_session(), fresh);
}
