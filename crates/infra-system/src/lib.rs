// System Facade Infrastructure - Platform Adapters
// Implements: Environment, CertificateFactory, Directory, identity adapter

pub mod certificate_factory_impl;
pub mod directory_impl;
pub mod environment_impl;
pub mod identity_wrap;

pub use certificate_factory_impl::X509CertificateFactory;
pub use directory_impl::FileSystemDirectory;
pub use environment_impl::SystemEnvironment;
pub use identity_wrap::{ComponentName, ComponentNameExt, ComponentNameWrap};
