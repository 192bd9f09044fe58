// Channel Port - remote-service proxies with a release primitive

use crate::error::Result;

/// A remote-service proxy that owns transport resources
///
/// `close` is the proxy's own teardown. Callers never invoke it directly;
/// a `ChannelWrap` does, exactly once.
pub trait ServiceChannel: Send + Sync {
    /// Tear down the underlying transport
    ///
    /// # Errors
    /// - Any transport failure; the wrapper reports it as FacadeError::ChannelFault
    fn close(&self) -> Result<()>;
}

/// Interface form of a channel handle
///
/// Implementations:
/// - ChannelWrap: owns the proxy and guarantees single release
pub trait ChannelHandle<S> {
    /// The wrapped proxy
    ///
    /// # Errors
    /// - FacadeError::UseAfterRelease once the handle has been released
    fn service(&self) -> Result<&S>;

    /// Release the proxy; safe to call any number of times
    fn release(&self) -> Result<()>;

    fn is_released(&self) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::FacadeError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Proxy that counts how often it was closed
    ///
    /// Clones share the counter, so a test can keep one clone and hand the
    /// other to a wrapper.
    #[derive(Clone, Default)]
    pub struct CountingChannel {
        name: String,
        close_calls: Arc<AtomicUsize>,
        fail_close: bool,
    }

    impl CountingChannel {
        pub fn new(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                close_calls: Arc::new(AtomicUsize::new(0)),
                fail_close: false,
            }
        }

        /// Proxy whose close always fails
        pub fn failing(name: impl Into<String>) -> Self {
            Self {
                fail_close: true,
                ..Self::new(name)
            }
        }

        pub fn name(&self) -> &str {
            &self.name
        }

        pub fn close_count(&self) -> usize {
            self.close_calls.load(Ordering::SeqCst)
        }

        /// Stand-in for a remote call
        pub fn echo(&self, message: &str) -> String {
            format!("{}: {}", self.name, message)
        }
    }

    impl ServiceChannel for CountingChannel {
        fn close(&self) -> Result<()> {
            self.close_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_close {
                return Err(FacadeError::ChannelFault(format!(
                    "{}: transport reset during close",
                    self.name
                )));
            }
            Ok(())
        }
    }
}
