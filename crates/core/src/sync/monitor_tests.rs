use super::*;
use crate::sync::torture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn try_enter_reflects_occupancy() {
    let monitor = Monitor::new();
    assert!(monitor.try_enter());
    assert!(!monitor.try_enter());
    monitor.exit();
    assert!(monitor.try_enter());
    monitor.exit();
}

#[test]
fn gate_loses_no_updates() {
    let monitor = Monitor::new();
    assert_eq!(torture::contended_total(&monitor, 4, 1000), 4000);
}

#[test]
fn blocked_entry_wakes_on_exit() {
    let monitor = Monitor::new();
    let entered = AtomicBool::new(false);

    monitor.enter();
    thread::scope(|s| {
        s.spawn(|| {
            monitor.enter();
            entered.store(true, Ordering::SeqCst);
            monitor.exit();
        });

        thread::sleep(Duration::from_millis(50));
        assert!(!entered.load(Ordering::SeqCst), "enter returned while occupied");
        monitor.exit();
    });
    assert!(entered.load(Ordering::SeqCst));
}
