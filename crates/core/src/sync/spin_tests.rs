use super::*;
use crate::sync::torture;
use crate::sync::RawLock;

fn check_try_acquire<L: RawLock>(lock: &L) {
    assert!(lock.try_acquire());
    assert!(!lock.try_acquire());
    lock.release();
    assert!(lock.try_acquire());
    lock.release();
}

#[test]
fn tight_spin_try_acquire_reflects_holder() {
    check_try_acquire(&SpinLock::new());
}

#[test]
fn yielding_spin_try_acquire_reflects_holder() {
    check_try_acquire(&YieldingSpinLock::new());
}

#[test]
fn tight_spin_loses_no_updates() {
    let lock = SpinLock::new();
    assert_eq!(torture::contended_total(&lock, 4, 1000), 4000);
}

#[test]
fn yielding_spin_loses_no_updates() {
    let lock = YieldingSpinLock::new();
    assert_eq!(torture::contended_total(&lock, 4, 1000), 4000);
}
