use std::io::{self, Write};

use clap::Args;
use voyage_app::context::AppContext;

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Back-office password
    #[arg(long, env = "VOYAGE_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) fn login(ctx: &AppContext, args: &LoginArgs) -> Result<(), CliError> {
    if !ctx.auth.login(&args.password)? {
        return Err(CliError::InvalidPassword);
    }

    writeln!(io::stdout().lock(), "logged in")?;

    Ok(())
}

pub(crate) fn logout(ctx: &AppContext) -> Result<(), CliError> {
    ctx.auth.logout()?;

    writeln!(io::stdout().lock(), "logged out")?;

    Ok(())
}
