// Environment Snapshot - one consistent read of every environment fact
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::port::Environment;

/// Point-in-time copy of the `Environment` accessors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSnapshot {
    pub current_thread_id: u64,
    pub has_shutdown_started: bool,
    pub machine_name: String,
    pub new_line: String,
    pub processor_count: usize,
    pub stack_trace: String,
    pub tick_count: i32,
    pub tick_count_64: u64,
}

impl EnvironmentSnapshot {
    /// Read each accessor exactly once
    ///
    /// # Errors
    /// - FacadeError::OperationInvalid from the first fact that cannot be read
    pub fn capture(env: &dyn Environment) -> Result<Self> {
        let snapshot = Self {
            current_thread_id: env.current_thread_id(),
            has_shutdown_started: env.has_shutdown_started(),
            machine_name: env.machine_name()?,
            new_line: env.new_line(),
            processor_count: env.processor_count(),
            stack_trace: env.stack_trace(),
            tick_count: env.tick_count()?,
            tick_count_64: env.tick_count_64()?,
        };

        debug!(
            machine_name = %snapshot.machine_name,
            processor_count = snapshot.processor_count,
            tick_count = snapshot.tick_count,
            "Environment snapshot captured"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FacadeError;
    use crate::port::environment::mocks::FakeEnvironment;
    use crate::port::environment::MockEnvironment;

    #[test]
    fn test_capture_from_fake() {
        let env = FakeEnvironment::new("build-01", 16);
        env.set_ticks(1_500);

        let snapshot = EnvironmentSnapshot::capture(&env).unwrap();

        assert_eq!(snapshot.machine_name, "build-01");
        assert_eq!(snapshot.processor_count, 16);
        assert_eq!(snapshot.tick_count, 1_500);
        assert_eq!(snapshot.new_line, "\n");
        assert!(!snapshot.has_shutdown_started);
    }

    #[test]
    fn test_machine_name_failure_is_not_defaulted() {
        let mut env = MockEnvironment::new();
        env.expect_current_thread_id().return_const(7u64);
        env.expect_has_shutdown_started().return_const(false);
        env.expect_machine_name()
            .times(1)
            .returning(|| Err(FacadeError::OperationInvalid("no host name".to_string())));
        env.expect_tick_count().never();

        let err = EnvironmentSnapshot::capture(&env).unwrap_err();

        assert!(matches!(err, FacadeError::OperationInvalid(_)));
    }

    #[test]
    fn test_each_accessor_read_once() {
        let mut env = MockEnvironment::new();
        env.expect_current_thread_id().times(1).return_const(3u64);
        env.expect_has_shutdown_started().times(1).return_const(true);
        env.expect_machine_name()
            .times(1)
            .returning(|| Ok("mock-host".to_string()));
        env.expect_new_line().times(1).returning(|| "\r\n".to_string());
        env.expect_processor_count().times(1).return_const(2usize);
        env.expect_stack_trace().times(1).returning(String::new);
        env.expect_tick_count().times(1).returning(|| Ok(-5));
        env.expect_tick_count_64()
            .times(1)
            .returning(|| Ok(u32::MAX as u64 - 4));

        let snapshot = EnvironmentSnapshot::capture(&env).unwrap();

        assert_eq!(snapshot.current_thread_id, 3);
        assert!(snapshot.has_shutdown_started);
        assert_eq!(snapshot.tick_count, -5);
        assert_eq!(snapshot.new_line, "\r\n");
    }

    #[test]
    fn test_serializes_to_json() {
        let snapshot = EnvironmentSnapshot::capture(&FakeEnvironment::new("h", 1)).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["machine_name"], "h");
        assert_eq!(json["processor_count"], 1);
    }
}
