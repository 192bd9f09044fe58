// Central Error Type for the Facade Layer

use thiserror::Error;

/// Facade-level error type
///
/// Every variant is surfaced to the caller as-is. Adapters never retry,
/// swallow or substitute defaults for a failed platform call.
#[derive(Error, Debug)]
pub enum FacadeError {
    /// A platform fact could not be obtained (e.g. host name resolution)
    #[error("Operation invalid: {0}")]
    OperationInvalid(String),

    /// Certificate bytes are empty or malformed
    #[error("Cryptographic failure: {0}")]
    CryptographicFailure(String),

    /// The password did not decrypt the certificate container
    #[error("Invalid password for certificate container")]
    InvalidPassword,

    /// The channel was accessed after its proxy was released
    #[error("Channel used after release")]
    UseAfterRelease,

    /// The wrapped proxy failed while closing
    #[error("Channel fault: {0}")]
    ChannelFault(String),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FacadeError
pub type Result<T> = std::result::Result<T, FacadeError>;
