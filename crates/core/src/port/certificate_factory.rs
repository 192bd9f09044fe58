// Certificate Factory Port - indirection over X.509 construction

use crate::domain::CertificateHandle;
use crate::error::Result;

/// Certificate factory interface (allows substituting certificate parsing in tests)
///
/// Implementations are stateless: each call is independent of every other.
pub trait CertificateFactory: Send + Sync {
    /// Build a certificate handle from raw bytes
    ///
    /// # Arguments
    /// * `raw_data` - Certificate payload (DER, PEM or PKCS#12)
    /// * `password` - Needed only when the payload is encrypted
    ///
    /// # Errors
    /// - FacadeError::CryptographicFailure if `raw_data` is empty or malformed
    /// - FacadeError::InvalidPassword if decryption fails
    fn create(&self, raw_data: &[u8], password: Option<&str>) -> Result<CertificateHandle>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::FacadeError;
    use std::sync::{Arc, Mutex};

    /// Mock factory behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Always return this handle
        Succeed(CertificateHandle),
        /// Always fail as malformed input
        Malformed(String),
        /// Always fail as a wrong password
        WrongPassword,
    }

    /// Fake certificate factory that records every call
    pub struct FakeCertificateFactory {
        behavior: MockBehavior,
        calls: Arc<Mutex<Vec<(Vec<u8>, Option<String>)>>>,
    }

    impl FakeCertificateFactory {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Passwords seen, in call order
        pub fn passwords(&self) -> Vec<Option<String>> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(_, password)| password.clone())
                .collect()
        }
    }

    impl CertificateFactory for FakeCertificateFactory {
        fn create(&self, raw_data: &[u8], password: Option<&str>) -> Result<CertificateHandle> {
            self.calls
                .lock()
                .unwrap()
                .push((raw_data.to_vec(), password.map(str::to_string)));

            match &self.behavior {
                MockBehavior::Succeed(handle) => Ok(handle.clone()),
                MockBehavior::Malformed(msg) => Err(FacadeError::CryptographicFailure(msg.clone())),
                MockBehavior::WrongPassword => Err(FacadeError::InvalidPassword),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{FakeCertificateFactory, MockBehavior};
    use super::*;
    use crate::error::FacadeError;

    /// Caller that depends only on the port
    fn load_subject(factory: &dyn CertificateFactory, bytes: &[u8]) -> Result<String> {
        let cert = factory.create(bytes, Some("secret"))?;
        Ok(cert.subject().to_string())
    }

    #[test]
    fn test_fake_failure_propagates_unchanged() {
        let factory = FakeCertificateFactory::new(MockBehavior::WrongPassword);

        let err = load_subject(&factory, b"pfx").unwrap_err();

        assert!(matches!(err, FacadeError::InvalidPassword));
        assert_eq!(factory.call_count(), 1);
        assert_eq!(factory.passwords(), vec![Some("secret".to_string())]);
    }

    #[test]
    fn test_fake_malformed() {
        let factory = FakeCertificateFactory::new(MockBehavior::Malformed("bad".into()));
        let err = factory.create(&[], None).unwrap_err();
        assert!(matches!(err, FacadeError::CryptographicFailure(_)));
    }
}
