//! Environment Facade Integration Tests

use std::sync::Arc;

use system_facade_core::application::{shutdown_channel, EnvironmentSnapshot};
use system_facade_core::error::FacadeError;
use system_facade_core::port::environment::mocks::FakeEnvironment;
use system_facade_core::port::Environment;
use system_facade_infra_system::SystemEnvironment;

/// Application code that depends on the facade, not the platform
struct UptimeReporter {
    env: Arc<dyn Environment>,
}

impl UptimeReporter {
    fn describe(&self) -> Result<String, FacadeError> {
        let ticks = self.env.tick_count_64()?;
        Ok(format!(
            "{} up {}s on {} cpus",
            self.env.machine_name()?,
            ticks / 1000,
            self.env.processor_count()
        ))
    }
}

#[test]
fn test_processor_count_reads_are_pure() {
    let env = SystemEnvironment::new();
    assert_eq!(env.processor_count(), env.processor_count());
}

#[test]
fn test_live_snapshot() {
    let snapshot = EnvironmentSnapshot::capture(&SystemEnvironment::new()).unwrap();

    assert!(snapshot.processor_count >= 1);
    assert!(!snapshot.machine_name.is_empty());
    assert!(snapshot.new_line == "\n" || snapshot.new_line == "\r\n");
    assert!(!snapshot.has_shutdown_started);
}

#[test]
fn test_fake_substitutes_platform() {
    let fake = Arc::new(FakeEnvironment::new("test-box", 4));
    fake.set_ticks(90_000);
    let reporter = UptimeReporter { env: fake.clone() };

    assert_eq!(reporter.describe().unwrap(), "test-box up 90s on 4 cpus");

    fake.advance(10_000);
    assert_eq!(reporter.describe().unwrap(), "test-box up 100s on 4 cpus");
}

#[test]
fn test_unobtainable_fact_propagates() {
    let reporter = UptimeReporter {
        env: Arc::new(FakeEnvironment::new("gone", 1).without_machine_name()),
    };

    assert!(matches!(
        reporter.describe(),
        Err(FacadeError::OperationInvalid(_))
    ));
}

#[tokio::test]
async fn test_shutdown_visible_through_facade() {
    let (sender, token) = shutdown_channel();
    let env = SystemEnvironment::with_shutdown(token.clone());

    let waiter = tokio::spawn({
        let mut token = token;
        async move { token.wait().await }
    });

    assert!(!env.has_shutdown_started());
    sender.shutdown();
    waiter.await.unwrap();
    assert!(env.has_shutdown_started());
}
