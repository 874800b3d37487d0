use super::*;
use yare::parameterized;

#[parameterized(
    mutex = { PrimitiveKind::Mutex },
    semaphore = { PrimitiveKind::Semaphore },
    barrier = { PrimitiveKind::Barrier },
    spin_lock = { PrimitiveKind::SpinLock },
    spin_yield = { PrimitiveKind::SpinYield },
    monitor = { PrimitiveKind::Monitor },
)]
fn op_count_is_exact(kind: PrimitiveKind) {
    let report = run_workload(kind, 4, 250).unwrap();
    assert_eq!(report.ops, 1000);
    // Each step contributes at most 255.
    assert!(report.checksum <= report.ops * 255);
}

#[test]
fn single_thread_run_completes() {
    let report = run_workload(PrimitiveKind::Mutex, 1, 100).unwrap();
    assert_eq!(report.ops, 100);
}

#[test]
fn zero_threads_rejected_before_spawn() {
    assert_eq!(
        run_workload(PrimitiveKind::Mutex, 0, 100).unwrap_err(),
        ConfigError::ZeroThreads
    );
}

#[test]
fn zero_iterations_rejected_before_spawn() {
    assert_eq!(
        run_workload(PrimitiveKind::SpinLock, 4, 0).unwrap_err(),
        ConfigError::ZeroIterations
    );
}

#[parameterized(
    mutex = { PrimitiveKind::Mutex },
    semaphore = { PrimitiveKind::Semaphore },
    barrier = { PrimitiveKind::Barrier },
    spin_lock = { PrimitiveKind::SpinLock },
    spin_yield = { PrimitiveKind::SpinYield },
    monitor = { PrimitiveKind::Monitor },
)]
fn kind_names_round_trip(kind: PrimitiveKind) {
    assert_eq!(kind.name().parse::<PrimitiveKind>().unwrap(), kind);
}

#[test]
fn unknown_kind_name_is_rejected() {
    let err = "futex".parse::<PrimitiveKind>().unwrap_err();
    assert_eq!(err.to_string(), "unknown primitive: futex");
}
