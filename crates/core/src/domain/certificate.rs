// Certificate Handle - immutable view over a parsed X.509 certificate

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Certificate handle produced by a `CertificateFactory`
///
/// Fields are captured once at construction; the handle never refers back
/// to the raw payload it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateHandle {
    version: u32,
    serial_number: String,
    subject: String,
    issuer: String,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    thumbprint: String,
    has_private_key: bool,
    #[serde(skip)]
    der: Vec<u8>,
}

/// Builder-style parts for `CertificateHandle`
///
/// Kept separate so adapters can fill fields from any parser.
#[derive(Debug, Clone)]
pub struct CertificateParts {
    pub version: u32,
    pub serial_number: String,
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub thumbprint: String,
    pub has_private_key: bool,
    pub der: Vec<u8>,
}

impl CertificateHandle {
    pub fn from_parts(parts: CertificateParts) -> Self {
        Self {
            version: parts.version,
            serial_number: parts.serial_number,
            subject: parts.subject,
            issuer: parts.issuer,
            not_before: parts.not_before,
            not_after: parts.not_after,
            thumbprint: parts.thumbprint,
            has_private_key: parts.has_private_key,
            der: parts.der,
        }
    }

    /// X.509 version (1-based, v3 certificates report 3)
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Serial number as uppercase hex
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// SHA-256 digest of the DER encoding, uppercase hex
    pub fn thumbprint(&self) -> &str {
        &self.thumbprint
    }

    pub fn has_private_key(&self) -> bool {
        self.has_private_key
    }

    /// DER encoding of the certificate
    pub fn raw_data(&self) -> &[u8] {
        &self.der
    }

    /// Check whether `at` lies inside the validity window (inclusive)
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.not_before && at <= self.not_after
    }

    pub fn is_self_signed(&self) -> bool {
        self.subject == self.issuer
    }
}
