use std::sync::Arc;
use std::time::Duration;

use cvchat::platform::ManualClock;
use cvchat::session::SessionStatus;
use cvchat::storage::MemoryStore;

use crate::harness::{CountingStore, manager, policy};

#[test]
fn three_questions_then_throttled_then_renewed() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(3, 30));

    let first = manager.get_or_create_session();
    assert_eq!(first.questions_count, 0);

    for expected in 1..=3 {
        assert!(manager.can_ask_question());
        let session = manager.increment_question_count();
        assert_eq!(session.questions_count, expected);
        assert_eq!(session.session_id, first.session_id);
    }

    assert!(!manager.can_ask_question());
    assert_eq!(manager.get_remaining_time(), Some(Duration::from_secs(30)));
    assert!(!manager.status().is_active());

    clock.advance(Duration::from_secs(31));

    let renewed = manager.get_or_create_session();
    assert_eq!(renewed.questions_count, 0);
    assert_ne!(renewed.session_id, first.session_id);
    assert!(manager.can_ask_question());
    assert_eq!(
        manager.status(),
        SessionStatus::Active {
            remaining_questions: 3
        }
    );
}

#[test]
fn expiry_is_exact_at_the_cooldown_boundary() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(1, 30));
    let first = manager.increment_question_count();

    clock.advance(Duration::from_millis(29_999));
    assert_eq!(manager.get_remaining_time(), Some(Duration::from_millis(1)));
    assert_eq!(manager.get_or_create_session().session_id, first.session_id);

    clock.advance(Duration::from_millis(1));
    assert_eq!(manager.get_remaining_time(), None);
    assert_ne!(manager.get_or_create_session().session_id, first.session_id);
}

#[test]
fn repeated_reads_in_one_instant_write_once_per_transition() {
    let store = Arc::new(CountingStore::new());
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(store.clone(), clock.clone(), policy(2, 30));

    let first = manager.get_or_create_session();
    for _ in 0..5 {
        assert_eq!(manager.get_or_create_session(), first);
        manager.can_ask_question();
        manager.get_remaining_time();
    }
    assert_eq!(store.writes(), 1);

    manager.increment_question_count();
    manager.increment_question_count();
    assert_eq!(store.writes(), 3);

    clock.advance(Duration::from_secs(30));
    let renewed = manager.get_or_create_session();
    for _ in 0..5 {
        assert_eq!(manager.get_or_create_session(), renewed);
    }
    assert_eq!(store.writes(), 4);
}
