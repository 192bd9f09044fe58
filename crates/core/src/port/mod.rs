// Port Layer - Interfaces standing in for platform primitives

pub mod certificate_factory;
pub mod channel;
pub mod directory; // IO facade
pub mod environment;
pub mod identity;

// Re-exports
pub use certificate_factory::CertificateFactory;
pub use channel::{ChannelHandle, ServiceChannel};
pub use directory::Directory;
pub use environment::{wrap_tick_count, Environment};
pub use identity::ComponentIdentity;
