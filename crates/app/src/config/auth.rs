//! Auth Config

use clap::Args;

/// Back-office access settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Shared back-office password
    #[arg(
        long,
        env = "ADMIN_PASSWORD",
        default_value = "admin123",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub admin_password: String,
}
