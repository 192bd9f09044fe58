// Domain Layer - Pure value types handed across the facade boundary

pub mod certificate;
pub mod identity;
pub mod search_pattern;

// Re-exports
pub use certificate::{CertificateHandle, CertificateParts};
pub use identity::ComponentVersion;
pub use search_pattern::{SearchOption, SearchPattern, MATCH_ALL};
