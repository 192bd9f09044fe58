// Application Layer - Ownership and composition over the ports

pub mod channel_wrap;
pub mod environment_snapshot;
mod shutdown;

// Re-exports
pub use channel_wrap::ChannelWrap;
pub use environment_snapshot::EnvironmentSnapshot;
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
