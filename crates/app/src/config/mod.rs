//! Application configuration

use clap::Args;

pub mod assistant;
pub mod auth;
pub mod logging;
pub mod storage;

pub use assistant::AssistantConfig;
pub use auth::AuthConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Document storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Back-office access settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Generative assistant settings.
    #[command(flatten)]
    pub assistant: AssistantConfig,
}
