// System Facade Core - Ports, Domain Types & Channel Ownership
// NO platform dependencies (hexagonal architecture)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{FacadeError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
