use std::io::{self, Write};

use clap::{Args, Subcommand};
use voyage::{
    offers::OfferId,
    reviews::{Rating, ReviewDraft},
};
use voyage_app::context::AppContext;

use super::{CliError, offers::find_offer, output};

#[derive(Debug, Args)]
pub(crate) struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReviewsSubcommand {
    /// Reviews of an offer, newest first
    List {
        /// Offer id
        offer_id: String,
    },

    /// Review an offer
    Add {
        /// Offer id
        offer_id: String,

        /// Your name
        #[arg(long)]
        author: String,

        /// Stars from 1 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(i64::from(Rating::MIN)..=i64::from(Rating::MAX)))]
        rating: u8,

        /// Optional comment
        #[arg(long, default_value = "")]
        comment: String,
    },
}

pub(crate) fn run(ctx: &AppContext, command: ReviewsCommand) -> Result<(), CliError> {
    let mut out = io::stdout().lock();

    match command.command {
        ReviewsSubcommand::List { offer_id } => {
            let id = OfferId::from_string(offer_id.as_str());
            let name = ctx
                .offers
                .get_offer(&id)?
                .map_or(offer_id, |offer| offer.title);

            let reviews = ctx.reviews.list_reviews_for_offer(&id)?;
            let summary = ctx.reviews.rating_summary(&id)?;

            match summary.average {
                Some(average) => writeln!(
                    out,
                    "{name}: {average}/5 from {} reviews",
                    summary.count
                )?,
                None => writeln!(out, "{name}: no reviews yet")?,
            }

            if !reviews.is_empty() {
                writeln!(out, "{}", output::reviews_table(&reviews))?;
            }
        }
        ReviewsSubcommand::Add {
            offer_id,
            author,
            rating,
            comment,
        } => {
            let offer = find_offer(ctx, &offer_id)?;

            ctx.reviews.submit_review(ReviewDraft {
                offer_id: offer.id,
                author,
                rating,
                comment,
            })?;

            writeln!(out, "thanks for reviewing {}", offer.title)?;
        }
    }

    Ok(())
}
