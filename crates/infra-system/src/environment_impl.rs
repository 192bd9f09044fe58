// Environment implementation
// reason: sysinfo + num_cpus for cross-platform facts, nix for the Unix boot clock
use std::backtrace::Backtrace;
use std::sync::atomic::{AtomicU64, Ordering};
use sysinfo::System;
use tracing::debug;

use system_facade_core::application::ShutdownToken;
use system_facade_core::error::{FacadeError, Result};
use system_facade_core::port::{wrap_tick_count, Environment};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Environment backed by the live operating system
///
/// Every accessor goes to the platform; nothing is cached.
#[derive(Clone, Default)]
pub struct SystemEnvironment {
    shutdown: Option<ShutdownToken>,
}

impl SystemEnvironment {
    /// Create an environment whose shutdown flag is always `false`
    pub fn new() -> Self {
        Self { shutdown: None }
    }

    /// Create an environment whose shutdown flag follows `token`
    ///
    /// # Example
    /// ```ignore
    /// let (sender, token) = shutdown_channel();
    /// let env = SystemEnvironment::with_shutdown(token);
    /// ```
    pub fn with_shutdown(token: ShutdownToken) -> Self {
        Self {
            shutdown: Some(token),
        }
    }
}

impl Environment for SystemEnvironment {
    fn current_thread_id(&self) -> u64 {
        THREAD_ID.with(|id| *id)
    }

    fn has_shutdown_started(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(|token| token.is_shutdown())
    }

    fn machine_name(&self) -> Result<String> {
        let name = System::host_name().ok_or_else(|| {
            FacadeError::OperationInvalid("the name of this computer cannot be obtained".into())
        })?;
        debug!(machine_name = %name, "Machine name resolved");
        Ok(name)
    }

    fn new_line(&self) -> String {
        let new_line = if cfg!(windows) { "\r\n" } else { "\n" };
        new_line.to_string()
    }

    fn processor_count(&self) -> usize {
        num_cpus::get()
    }

    fn stack_trace(&self) -> String {
        Backtrace::force_capture().to_string()
    }

    fn tick_count(&self) -> Result<i32> {
        self.tick_count_64().map(wrap_tick_count)
    }

    fn tick_count_64(&self) -> Result<u64> {
        millis_since_boot()
    }
}

#[cfg(unix)]
fn millis_since_boot() -> Result<u64> {
    use nix::sys::time::TimeValLike;
    use nix::time::{clock_gettime, ClockId};

    let now = clock_gettime(ClockId::CLOCK_MONOTONIC)
        .map_err(|e| FacadeError::OperationInvalid(format!("monotonic clock unavailable: {}", e)))?;
    Ok(now.num_milliseconds().max(0) as u64)
}

#[cfg(not(unix))]
fn millis_since_boot() -> Result<u64> {
    Ok(System::uptime().saturating_mul(1000))
}
