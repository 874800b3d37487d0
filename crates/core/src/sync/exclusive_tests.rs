use super::*;
use crate::sync::torture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn uncontended_acquire_release_cycles() {
    let lock = ExclusiveLock::new();
    for _ in 0..3 {
        lock.acquire();
        lock.release();
    }
}

#[test]
fn try_acquire_reflects_holder() {
    let lock = ExclusiveLock::new();
    lock.acquire();

    thread::scope(|s| {
        s.spawn(|| {
            assert!(!lock.try_acquire());
        });
    });

    lock.release();
    assert!(lock.try_acquire());
    lock.release();
}

#[test]
fn four_threads_thousand_iterations_lose_no_updates() {
    let lock = ExclusiveLock::new();
    assert_eq!(torture::contended_total(&lock, 4, 1000), 4000);
}

#[test]
fn blocked_acquirer_wakes_on_release() {
    let lock = ExclusiveLock::new();
    let entered = AtomicBool::new(false);

    lock.acquire();
    thread::scope(|s| {
        s.spawn(|| {
            lock.acquire();
            entered.store(true, Ordering::SeqCst);
            lock.release();
        });

        thread::sleep(Duration::from_millis(50));
        assert!(!entered.load(Ordering::SeqCst), "acquire returned while lock was held");
        lock.release();
    });
    assert!(entered.load(Ordering::SeqCst));
}
