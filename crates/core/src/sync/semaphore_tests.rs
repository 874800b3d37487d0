use super::*;
use crate::sync::torture;
use proptest::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn initial_permits_bound_try_acquires() {
    let sem = Semaphore::new(3);
    assert!(sem.try_acquire());
    assert!(sem.try_acquire());
    assert!(sem.try_acquire());
    assert!(!sem.try_acquire());

    sem.release();
    assert!(sem.try_acquire());
}

#[test]
fn available_tracks_outstanding_permits() {
    let sem = Semaphore::new(2);
    assert_eq!(sem.available(), 2);
    sem.acquire();
    assert_eq!(sem.available(), 1);
    sem.release();
    assert_eq!(sem.available(), 2);
}

#[test]
fn acquire_blocks_at_zero_and_wakes_on_release() {
    let sem = Semaphore::binary();
    let passed = AtomicBool::new(false);

    sem.acquire();
    thread::scope(|s| {
        s.spawn(|| {
            sem.acquire();
            passed.store(true, Ordering::SeqCst);
            sem.release();
        });

        thread::sleep(Duration::from_millis(50));
        assert!(!passed.load(Ordering::SeqCst), "acquire returned with zero permits");
        sem.release();
    });
    assert!(passed.load(Ordering::SeqCst));
}

#[test]
fn binary_gate_loses_no_updates() {
    let sem = Semaphore::binary();
    assert_eq!(torture::contended_total(&sem, 4, 1000), 4000);
}

proptest! {
    // Under the acquire-before-release-per-slot discipline, the permit
    // count never exceeds capacity and always balances the outstanding
    // holds exactly. Unsignedness already rules out a negative count.
    #[test]
    fn permit_count_stays_within_capacity(
        capacity in 1usize..8,
        ops in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let sem = Semaphore::new(capacity);
        let mut outstanding = 0;

        for wants_permit in ops {
            if wants_permit {
                let got = sem.try_acquire();
                prop_assert_eq!(got, outstanding < capacity);
                if got {
                    outstanding += 1;
                }
            } else if outstanding > 0 {
                sem.release();
                outstanding -= 1;
            }

            prop_assert!(sem.available() <= capacity);
            prop_assert_eq!(sem.available(), capacity - outstanding);
        }
    }
}
