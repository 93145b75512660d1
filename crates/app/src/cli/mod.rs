use std::{io, num::TryFromIntError};

use clap::{Parser, Subcommand};
use thiserror::Error;
use voyage_app::{
    auth::AuthServiceError,
    config::AppConfig,
    context::{AppContext, AppInitError},
    domain::{
        favorites::FavoritesServiceError, offers::OffersServiceError,
        requests::RequestsServiceError, reviews::ReviewsServiceError,
    },
    observability::{self, ObservabilityError},
};

mod assistant;
mod favorites;
mod offers;
mod output;
mod requests;
mod reviews;
mod session;

#[derive(Debug, Parser)]
#[command(name = "voyage", about = "VoyageVista storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse and manage the offer catalog
    Offers(offers::OffersCommand),

    /// Submit and manage client requests
    Requests(requests::RequestsCommand),

    /// Mark offers as favorites
    Favorites(favorites::FavoritesCommand),

    /// Read and write offer reviews
    Reviews(reviews::ReviewsCommand),

    /// Open a back-office session
    Login(session::LoginArgs),

    /// Close the back-office session
    Logout,

    /// Ask the travel assistant
    Assistant(assistant::AssistantCommand),
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error(transparent)]
    Offers(#[from] OffersServiceError),

    #[error(transparent)]
    Requests(#[from] RequestsServiceError),

    #[error(transparent)]
    Favorites(#[from] FavoritesServiceError),

    #[error(transparent)]
    Reviews(#[from] ReviewsServiceError),

    #[error(transparent)]
    Auth(#[from] AuthServiceError),

    #[error("this command requires an admin session; run `voyage login` first")]
    Unauthorized,

    #[error("invalid admin password")]
    InvalidPassword,

    #[error("offer not found: {0}")]
    OfferNotFound(String),

    #[error("price out of range")]
    Price(#[from] TryFromIntError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        observability::init_logging(&self.config.logging)?;

        let ctx = AppContext::from_config(&self.config)?;

        match self.command {
            Commands::Offers(command) => offers::run(&ctx, command).await,
            Commands::Requests(command) => requests::run(&ctx, command),
            Commands::Favorites(command) => favorites::run(&ctx, command),
            Commands::Reviews(command) => reviews::run(&ctx, command),
            Commands::Login(args) => session::login(&ctx, &args),
            Commands::Logout => session::logout(&ctx),
            Commands::Assistant(command) => assistant::run(&ctx, command).await,
        }
    }
}

/// Fail with [`CliError::Unauthorized`] unless an admin session is open.
pub(crate) fn require_admin(ctx: &AppContext) -> Result<(), CliError> {
    if ctx.auth.is_authenticated()? {
        Ok(())
    } else {
        Err(CliError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;
    use voyage_app::{
        assistant::Assistant,
        storage::{DocumentStore, MemoryStore},
    };
    use zeroize::Zeroizing;

    use super::*;

    fn context() -> Result<AppContext, AppInitError> {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

        AppContext::from_store(
            store,
            Zeroizing::new("admin123".to_string()),
            Assistant::disabled(),
        )
    }

    #[test]
    fn admin_commands_need_a_session() -> TestResult {
        let ctx = context()?;

        assert!(matches!(require_admin(&ctx), Err(CliError::Unauthorized)));

        Ok(())
    }

    #[test]
    fn login_opens_admin_commands() -> TestResult {
        let ctx = context()?;

        assert!(!ctx.auth.login("wrong")?);
        assert!(matches!(require_admin(&ctx), Err(CliError::Unauthorized)));

        assert!(ctx.auth.login("admin123")?);
        require_admin(&ctx)?;

        Ok(())
    }

    #[test]
    fn logout_closes_admin_commands() -> TestResult {
        let ctx = context()?;

        ctx.auth.login("admin123")?;
        ctx.auth.logout()?;

        assert!(matches!(require_admin(&ctx), Err(CliError::Unauthorized)));

        Ok(())
    }
}
