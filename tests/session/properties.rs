use std::sync::Arc;
use std::time::Duration;

use cvchat::platform::ManualClock;
use cvchat::storage::MemoryStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::harness::{manager, policy};

#[test]
fn gated_increments_never_exceed_the_quota() {
    for seed in [1_u64, 7, 42, 1_234] {
        let clock = Arc::new(ManualClock::starting_now());
        let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(3, 30));

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..200 {
            clock.advance(Duration::from_millis(rng.random_range(0..20_000)));
            if manager.can_ask_question() {
                let session = manager.increment_question_count();
                assert!(session.questions_count <= 3, "seed {seed}");
            }
            assert!(manager.get_or_create_session().questions_count <= 3);
        }
    }
}

#[test]
fn remaining_time_is_none_below_the_quota() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(3, 30));

    for _ in 0..2 {
        manager.increment_question_count();
        assert_eq!(manager.get_remaining_time(), None);
        clock.advance(Duration::from_secs(5));
        assert_eq!(manager.get_remaining_time(), None);
    }
}

#[test]
fn remaining_time_strictly_decreases_until_expiry() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(2, 30));
    manager.increment_question_count();
    manager.increment_question_count();

    let mut previous = manager.get_remaining_time().unwrap();
    loop {
        clock.advance(Duration::from_millis(2_500));
        match manager.get_remaining_time() {
            Some(remaining) => {
                assert!(remaining < previous);
                previous = remaining;
            }
            None => break,
        }
    }
    assert_eq!(manager.get_or_create_session().questions_count, 0);
}

#[test]
fn clock_going_backwards_never_extends_the_cooldown() {
    let clock = Arc::new(ManualClock::starting_now());
    let manager = manager(Arc::new(MemoryStore::new()), clock.clone(), policy(1, 30));
    manager.increment_question_count();

    clock.rewind(Duration::from_secs(60));
    assert_eq!(manager.get_remaining_time(), Some(Duration::from_secs(30)));
}
