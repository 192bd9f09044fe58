// Certificate factory implementation
// reason: x509-parser for DER, rustls-pki-types for PEM, p12 for password-protected containers
use chrono::{DateTime, Utc};
use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use x509_parser::parse_x509_certificate;

use system_facade_core::domain::{CertificateHandle, CertificateParts};
use system_facade_core::error::{FacadeError, Result};
use system_facade_core::port::CertificateFactory;

const PEM_PREFIX: &[u8] = b"-----BEGIN";

/// Certificate factory backed by real X.509 parsing
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct X509CertificateFactory;

impl X509CertificateFactory {
    pub fn new() -> Self {
        Self
    }

    fn create_from_pem(&self, raw_data: &[u8]) -> Result<CertificateHandle> {
        let cert = CertificateDer::from_pem_slice(raw_data)
            .map_err(|e| FacadeError::CryptographicFailure(format!("invalid PEM: {}", e)))?;
        let has_private_key = PrivateKeyDer::from_pem_slice(raw_data).is_ok();
        handle_from_der(cert.as_ref(), has_private_key)
    }

    fn create_from_pkcs12(
        &self,
        raw_data: &[u8],
        password: Option<&str>,
    ) -> Result<CertificateHandle> {
        let pfx = p12::PFX::parse(raw_data).map_err(|e| {
            FacadeError::CryptographicFailure(format!(
                "not a certificate or PKCS#12 container: {:?}",
                e
            ))
        })?;

        let password = password.unwrap_or("");
        if !pfx.verify_mac(password) {
            warn!("PKCS#12 MAC verification failed");
            return Err(FacadeError::InvalidPassword);
        }

        let certs = pfx.cert_x509_bags(password).map_err(|e| {
            FacadeError::CryptographicFailure(format!("cannot decrypt certificate bags: {:?}", e))
        })?;
        let der = certs.first().ok_or_else(|| {
            FacadeError::CryptographicFailure("PKCS#12 container holds no certificate".to_string())
        })?;
        let has_private_key = pfx
            .key_bags(password)
            .map(|keys| !keys.is_empty())
            .map_err(|e| {
                FacadeError::CryptographicFailure(format!("cannot decrypt key bags: {:?}", e))
            })?;

        handle_from_der(der, has_private_key)
    }
}

impl CertificateFactory for X509CertificateFactory {
    fn create(&self, raw_data: &[u8], password: Option<&str>) -> Result<CertificateHandle> {
        if raw_data.is_empty() {
            return Err(FacadeError::CryptographicFailure(
                "certificate data is empty".to_string(),
            ));
        }

        let handle = if raw_data.trim_ascii_start().starts_with(PEM_PREFIX) {
            self.create_from_pem(raw_data)?
        } else if parse_x509_certificate(raw_data).is_ok() {
            handle_from_der(raw_data, false)?
        } else {
            self.create_from_pkcs12(raw_data, password)?
        };

        debug!(
            subject = %handle.subject(),
            serial = %handle.serial_number(),
            has_private_key = handle.has_private_key(),
            "Certificate created"
        );

        Ok(handle)
    }
}

/// Parse one DER certificate into a handle
///
/// Trailing bytes after the certificate are treated as malformed input.
fn handle_from_der(der: &[u8], has_private_key: bool) -> Result<CertificateHandle> {
    let (rest, cert) = parse_x509_certificate(der)
        .map_err(|e| FacadeError::CryptographicFailure(format!("invalid X.509 DER: {}", e)))?;
    if !rest.is_empty() {
        return Err(FacadeError::CryptographicFailure(format!(
            "{} trailing bytes after certificate",
            rest.len()
        )));
    }

    let validity = cert.validity();
    Ok(CertificateHandle::from_parts(CertificateParts {
        version: cert.version().0 + 1,
        serial_number: hex::encode_upper(cert.raw_serial()),
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        not_before: to_utc(validity.not_before.timestamp())?,
        not_after: to_utc(validity.not_after.timestamp())?,
        thumbprint: hex::encode_upper(Sha256::digest(der)),
        has_private_key,
        der: der.to_vec(),
    }))
}

fn to_utc(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        FacadeError::CryptographicFailure(format!("validity timestamp {} out of range", timestamp))
    })
}
