// Environment Port - process and machine facts (for testability)

use crate::error::Result;

/// Read-only view of the current process and machine
///
/// Every accessor forwards to live platform state at call time. Nothing is
/// cached, and no accessor blocks or retries.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    /// Process-unique identifier of the calling thread
    fn current_thread_id(&self) -> u64;

    /// True once the owning process has started shutting down
    fn has_shutdown_started(&self) -> bool;

    /// Host name of this machine
    ///
    /// # Errors
    /// - FacadeError::OperationInvalid if the name cannot be obtained
    fn machine_name(&self) -> Result<String>;

    /// Line terminator for this platform (`"\r\n"` or `"\n"`)
    fn new_line(&self) -> String;

    /// Number of logical processors (always >= 1)
    fn processor_count(&self) -> usize;

    /// Text of the current call stack (may be empty)
    fn stack_trace(&self) -> String;

    /// Milliseconds since system start, as a wrapping 32-bit counter
    ///
    /// Counts from 0 up to `i32::MAX` over ~24.9 days, jumps to `i32::MIN`,
    /// then climbs back to 0 over the next ~24.9 days.
    fn tick_count(&self) -> Result<i32>;

    /// Milliseconds since system start, without wraparound
    fn tick_count_64(&self) -> Result<u64>;
}

/// Truncate a wide millisecond counter to the wrapping 32-bit tick count
pub fn wrap_tick_count(millis: u64) -> i32 {
    millis as u32 as i32
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::FacadeError;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Mutex;

    /// Fake environment with settable facts
    pub struct FakeEnvironment {
        machine_name: Mutex<Option<String>>,
        processor_count: usize,
        shutdown_started: AtomicBool,
        ticks: AtomicU64,
        thread_id: u64,
    }

    impl FakeEnvironment {
        pub fn new(machine_name: impl Into<String>, processor_count: usize) -> Self {
            Self {
                machine_name: Mutex::new(Some(machine_name.into())),
                processor_count,
                shutdown_started: AtomicBool::new(false),
                ticks: AtomicU64::new(0),
                thread_id: 1,
            }
        }

        /// Make `machine_name()` fail with OperationInvalid
        pub fn without_machine_name(mut self) -> Self {
            self.machine_name = Mutex::new(None);
            self
        }

        pub fn set_ticks(&self, millis: u64) {
            self.ticks.store(millis, Ordering::SeqCst);
        }

        pub fn advance(&self, millis: u64) {
            self.ticks.fetch_add(millis, Ordering::SeqCst);
        }

        pub fn begin_shutdown(&self) {
            self.shutdown_started.store(true, Ordering::SeqCst);
        }
    }

    impl Environment for FakeEnvironment {
        fn current_thread_id(&self) -> u64 {
            self.thread_id
        }

        fn has_shutdown_started(&self) -> bool {
            self.shutdown_started.load(Ordering::SeqCst)
        }

        fn machine_name(&self) -> Result<String> {
            self.machine_name.lock().unwrap().clone().ok_or_else(|| {
                FacadeError::OperationInvalid("machine name unavailable".to_string())
            })
        }

        fn new_line(&self) -> String {
            "\n".to_string()
        }

        fn processor_count(&self) -> usize {
            self.processor_count
        }

        fn stack_trace(&self) -> String {
            String::new()
        }

        fn tick_count(&self) -> Result<i32> {
            Ok(wrap_tick_count(self.ticks.load(Ordering::SeqCst)))
        }

        fn tick_count_64(&self) -> Result<u64> {
            Ok(self.ticks.load(Ordering::SeqCst))
        }
    }
}
