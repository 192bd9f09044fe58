// Channel Wrapper - single-owner handle over a remote-service proxy
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

use crate::error::{FacadeError, Result};
use crate::port::channel::{ChannelHandle, ServiceChannel};

/// Owning handle for one service proxy
///
/// The wrapper is the only party allowed to close the proxy. `close` on the
/// proxy runs at most once, through `release`, `close` or `Drop`, whichever
/// comes first. Concurrent `release` calls race on an atomic flag; exactly
/// one of them forwards to the proxy.
pub struct ChannelWrap<S: ServiceChannel> {
    service: S,
    released: AtomicBool,
}

impl<S: ServiceChannel> ChannelWrap<S> {
    /// Bind a live proxy
    pub fn new(service: S) -> Self {
        Self {
            service,
            released: AtomicBool::new(false),
        }
    }

    /// Run `f` against a freshly bound proxy, then release it
    ///
    /// The proxy is released on every exit path, including a panic in `f`.
    /// Release on panic needs unwinding; a `panic = "abort"` build skips it.
    ///
    /// # Example
    /// ```text
    /// let reply = ChannelWrap::scoped(client, |svc| svc.ping())?;
    /// ```
    pub fn scoped<R, F>(service: S, f: F) -> Result<R>
    where
        F: FnOnce(&S) -> R,
    {
        let wrap = Self::new(service);
        let out = f(&wrap.service);
        wrap.close()?;
        Ok(out)
    }

    /// Like `scoped`, for closures that can fail
    ///
    /// If `f` fails the proxy is still released. The closure's error wins;
    /// a release failure on that path is logged, not returned.
    pub fn try_scoped<R, F>(service: S, f: F) -> Result<R>
    where
        F: FnOnce(&S) -> Result<R>,
    {
        let wrap = Self::new(service);
        match f(&wrap.service) {
            Ok(out) => {
                wrap.close()?;
                Ok(out)
            }
            Err(e) => {
                if let Err(release_err) = wrap.release() {
                    warn!(error = %release_err, "Channel release failed after scoped error");
                }
                Err(e)
            }
        }
    }

    /// The wrapped proxy, while the handle is live
    ///
    /// Always returns the same reference before release.
    pub fn service(&self) -> Result<&S> {
        if self.released.load(Ordering::Acquire) {
            return Err(FacadeError::UseAfterRelease);
        }
        Ok(&self.service)
    }

    /// Release the proxy
    ///
    /// Idempotent: only the first call reaches the proxy. A failing proxy
    /// close is reported to that first caller and never re-issued.
    pub fn release(&self) -> Result<()> {
        if self
            .released
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Channel already released, skipping close");
            return Ok(());
        }

        match self.service.close() {
            Ok(()) => {
                debug!("Channel released");
                Ok(())
            }
            Err(FacadeError::ChannelFault(msg)) => Err(FacadeError::ChannelFault(msg)),
            Err(other) => Err(FacadeError::ChannelFault(other.to_string())),
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Release and consume the handle, so later access cannot compile
    pub fn close(self) -> Result<()> {
        self.release()
    }
}

impl<S: ServiceChannel> ChannelHandle<S> for ChannelWrap<S> {
    fn service(&self) -> Result<&S> {
        ChannelWrap::service(self)
    }

    fn release(&self) -> Result<()> {
        ChannelWrap::release(self)
    }

    fn is_released(&self) -> bool {
        ChannelWrap::is_released(self)
    }
}

impl<S: ServiceChannel> Drop for ChannelWrap<S> {
    fn drop(&mut self) {
        if self.is_released() {
            return;
        }
        if let Err(e) = self.release() {
            warn!(error = %e, "Channel release failed during drop");
        }
    }
}
