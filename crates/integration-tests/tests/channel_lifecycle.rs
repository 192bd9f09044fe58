//! Channel Wrapper Integration Tests
//!
//! Single-release guarantee across explicit release, scopes, panics and threads.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use system_facade_core::application::ChannelWrap;
use system_facade_core::error::{FacadeError, Result};
use system_facade_core::port::channel::mocks::CountingChannel;
use system_facade_core::port::{ChannelHandle, ServiceChannel};

/// A service proxy with its own remote calls, as an application would define it
struct InventoryClient {
    endpoint: String,
    closes: Arc<AtomicUsize>,
}

impl InventoryClient {
    fn stock_level(&self, sku: &str) -> Result<u32> {
        if sku.is_empty() {
            return Err(FacadeError::OperationInvalid("empty sku".to_string()));
        }
        Ok(sku.len() as u32 * 10)
    }
}

impl ServiceChannel for InventoryClient {
    fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn inventory() -> (InventoryClient, Arc<AtomicUsize>) {
    let closes = Arc::new(AtomicUsize::new(0));
    (
        InventoryClient {
            endpoint: "inventory.local:7000".to_string(),
            closes: Arc::clone(&closes),
        },
        closes,
    )
}

/// Code under test depends only on the handle interface
fn reorder_needed(channel: &dyn ChannelHandle<InventoryClient>, sku: &str) -> Result<bool> {
    Ok(channel.service()?.stock_level(sku)? < 50)
}

/// Scenario: release three times, proxy close invoked exactly once
#[test]
fn test_release_three_times_invokes_close_once() {
    let p1 = CountingChannel::new("P1");
    let wrap = ChannelWrap::new(p1.clone());

    for _ in 0..3 {
        wrap.release().unwrap();
    }

    assert_eq!(p1.close_count(), 1);
}

#[test]
fn test_generic_wrapper_over_application_proxy() {
    let (client, closes) = inventory();
    let wrap = ChannelWrap::new(client);

    assert_eq!(wrap.service().unwrap().endpoint, "inventory.local:7000");
    assert!(reorder_needed(&wrap, "ab").unwrap());
    assert!(!reorder_needed(&wrap, "abcdefgh").unwrap());

    wrap.close().unwrap();
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_access_after_release_is_rejected() {
    let (client, _closes) = inventory();
    let wrap = ChannelWrap::new(client);
    wrap.release().unwrap();

    let err = reorder_needed(&wrap, "ab").unwrap_err();
    assert!(matches!(err, FacadeError::UseAfterRelease));
}

#[test]
fn test_try_scoped_releases_on_remote_error() {
    let (client, closes) = inventory();

    let result = ChannelWrap::try_scoped(client, |svc| svc.stock_level(""));

    assert!(matches!(result, Err(FacadeError::OperationInvalid(_))));
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_scoped_releases_on_panic() {
    let (client, closes) = inventory();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        ChannelWrap::scoped(client, |_| -> u32 { panic!("handler crashed") })
    }));

    assert!(outcome.is_err());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_parallel_release_from_many_holders() {
    let p1 = CountingChannel::new("P1");
    let wrap = Arc::new(ChannelWrap::new(p1.clone()));
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let wrap = Arc::clone(&wrap);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                wrap.release()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    drop(wrap);

    assert_eq!(p1.close_count(), 1);
}

#[test]
fn test_close_failure_surfaces_once() {
    let p1 = CountingChannel::failing("P1");
    let wrap = ChannelWrap::new(p1.clone());

    assert!(matches!(wrap.release(), Err(FacadeError::ChannelFault(_))));
    assert!(wrap.release().is_ok());
    assert!(wrap.is_released());
    drop(wrap);

    assert_eq!(p1.close_count(), 1);
}
