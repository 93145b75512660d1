use std::io::{self, Write};

use clap::{Args, Subcommand};
use voyage::{offers::OfferId, search};
use voyage_app::context::AppContext;

use super::{CliError, output};

#[derive(Debug, Args)]
pub(crate) struct FavoritesCommand {
    #[command(subcommand)]
    command: FavoritesSubcommand,
}

#[derive(Debug, Subcommand)]
enum FavoritesSubcommand {
    /// List favorite offers in catalog order
    List,

    /// Add or remove an offer from favorites
    Toggle {
        /// Offer id
        offer_id: String,
    },
}

pub(crate) fn run(ctx: &AppContext, command: FavoritesCommand) -> Result<(), CliError> {
    let mut out = io::stdout().lock();

    match command.command {
        FavoritesSubcommand::List => {
            let favorites = search::favorite_offers(
                &ctx.offers.list_offers()?,
                &ctx.favorites.list_favorite_ids()?,
            );

            if favorites.is_empty() {
                writeln!(out, "no favorites yet")?;
            } else {
                writeln!(out, "{}", output::offers_table(&favorites)?)?;
            }
        }
        FavoritesSubcommand::Toggle { offer_id } => {
            let id = OfferId::from_string(offer_id.as_str());

            if ctx.favorites.toggle_favorite(&id)? {
                writeln!(out, "added {id} to favorites")?;
            } else {
                writeln!(out, "removed {id} from favorites")?;
            }
        }
    }

    Ok(())
}
