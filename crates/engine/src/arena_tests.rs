use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn adjacency_wraps_at_the_last_seat() {
    let arena = ForkArena::new(5);
    assert_eq!(arena.seats(), 5);
    assert_eq!(arena.left(0), 0);
    assert_eq!(arena.right(0), 1);
    assert_eq!(arena.left(4), 4);
    assert_eq!(arena.right(4), 0);
}

#[test]
fn arbitrator_tracks_fork_availability() {
    let arena = ForkArena::new(4);
    let table = arena.table();

    assert!(table.is_free(0) && table.is_free(1));
    table.acquire_pair(0, 1);
    assert!(!table.is_free(0) && !table.is_free(1));
    assert!(table.is_free(2) && table.is_free(3));
    table.release_pair(0, 1);
    assert!(table.is_free(0) && table.is_free(1));
}

#[test]
fn arbitrator_disjoint_pairs_are_granted_without_waiting() {
    let arena = ForkArena::new(4);
    arena.table().acquire_pair(0, 1);
    // Would hang if the table serialized disjoint pairs.
    arena.table().acquire_pair(2, 3);
    arena.table().release_pair(0, 1);
    arena.table().release_pair(2, 3);
}

#[test]
fn arbitrator_overlapping_pair_waits_for_release() {
    let arena = ForkArena::new(3);
    let granted = AtomicBool::new(false);

    arena.table().acquire_pair(0, 1);
    thread::scope(|s| {
        s.spawn(|| {
            arena.table().acquire_pair(1, 2);
            granted.store(true, Ordering::SeqCst);
            arena.table().release_pair(1, 2);
        });

        thread::sleep(Duration::from_millis(50));
        assert!(
            !granted.load(Ordering::SeqCst),
            "overlapping pair granted while fork 1 was taken"
        );
        arena.table().release_pair(0, 1);
    });
    assert!(granted.load(Ordering::SeqCst));
}
