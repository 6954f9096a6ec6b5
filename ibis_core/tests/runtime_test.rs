// Process-wide lifecycle tests.
//
// These tests share one global runtime slot, so they serialize on a local
// lock and leave the slot empty on exit.
use ibis_core::communication::Hub;
use ibis_core::error::IbisError;
use ibis_core::runtime;
use std::sync::Mutex;

static RUNTIME_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> std::sync::MutexGuard<'static, ()> {
    RUNTIME_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn init_then_shutdown_roundtrip() {
    let _guard = lock();

    runtime::init(["fixture".to_string(), "--flag".to_string()]).unwrap();
    assert!(runtime::is_initialized());
    assert_eq!(
        runtime::args(),
        Some(vec!["fixture".to_string(), "--flag".to_string()])
    );
    assert!(runtime::uptime().is_some());

    runtime::shutdown().unwrap();
    assert!(!runtime::is_initialized());
    assert_eq!(runtime::args(), None);
    assert!(runtime::uptime().is_none());
}

#[test]
fn double_init_is_rejected() {
    let _guard = lock();

    runtime::init(std::iter::empty()).unwrap();
    assert!(matches!(
        runtime::init(std::iter::empty()),
        Err(IbisError::AlreadyInitialized)
    ));
    runtime::shutdown().unwrap();
}

#[test]
fn shutdown_without_init_is_rejected() {
    let _guard = lock();

    assert!(matches!(
        runtime::shutdown(),
        Err(IbisError::NotInitialized)
    ));
}

#[test]
fn shutdown_clears_registered_topics() {
    let _guard = lock();

    runtime::init(std::iter::empty()).unwrap();
    let hub = Hub::<String>::new_with_capacity("runtime_test_clear", 4).unwrap();
    hub.send("pending".to_string(), None).unwrap();
    runtime::shutdown().unwrap();

    // A handle opened after shutdown starts from a fresh queue.
    let fresh = Hub::<String>::new_with_capacity("runtime_test_clear", 4).unwrap();
    assert_eq!(fresh.recv(None), None);
}
