use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Args, Subcommand};
use tracing::info;
use voyage_app::{assistant::ChatTurn, context::AppContext};

use super::{CliError, offers::find_offer, output};

#[derive(Debug, Args)]
pub(crate) struct AssistantCommand {
    #[command(subcommand)]
    command: AssistantSubcommand,
}

#[derive(Debug, Subcommand)]
enum AssistantSubcommand {
    /// Ask a single question about our trips
    Ask {
        /// Your question
        message: String,
    },

    /// Chat with the assistant; an empty line ends the conversation
    Chat,

    /// Search the catalog with a free-text query
    Search {
        /// e.g. "a cruise under 1000 euros"
        query: String,
    },

    /// Draft a day-by-day itinerary for an offer
    Itinerary {
        /// Offer id
        offer_id: String,

        /// Also write a spoken version to this file
        #[arg(long)]
        narrate: Option<PathBuf>,
    },
}

pub(crate) async fn run(ctx: &AppContext, command: AssistantCommand) -> Result<(), CliError> {
    match command.command {
        AssistantSubcommand::Ask { message } => {
            let offers = ctx.offers.list_offers()?;
            let reply = ctx.assistant.chat(&offers, &[], &message).await;

            writeln!(io::stdout().lock(), "{reply}")?;
        }
        AssistantSubcommand::Chat => chat(ctx).await?,
        AssistantSubcommand::Search { query } => {
            let mut out = io::stdout().lock();

            let Some(filters) = ctx.assistant.parse_search_query(&query).await else {
                writeln!(out, "could not understand that search, try `voyage offers search`")?;

                return Ok(());
            };

            let results = ctx.offers.search(&filters)?;

            if results.is_empty() {
                writeln!(out, "no offers match that search")?;
            } else {
                writeln!(out, "{}", output::offers_table(&results)?)?;
            }
        }
        AssistantSubcommand::Itinerary { offer_id, narrate } => {
            let offer = find_offer(ctx, &offer_id)?;
            let itinerary = ctx.assistant.itinerary(&offer).await;

            writeln!(io::stdout().lock(), "{itinerary}")?;

            if let Some(path) = narrate {
                match ctx.assistant.narrate(&itinerary).await {
                    Some(audio) => {
                        fs::write(&path, &audio)?;

                        info!(path = %path.display(), bytes = audio.len(), "narration written");
                    }
                    None => writeln!(io::stderr().lock(), "narration is not available")?,
                }
            }
        }
    }

    Ok(())
}

async fn chat(ctx: &AppContext) -> Result<(), CliError> {
    let offers = ctx.offers.list_offers()?;
    let mut history: Vec<ChatTurn> = Vec::new();
    let mut lines = io::stdin().lock().lines();

    loop {
        {
            let mut out = io::stdout().lock();
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let message = line.trim();

        if message.is_empty() {
            break;
        }

        let reply = ctx.assistant.chat(&offers, &history, message).await;

        writeln!(io::stdout().lock(), "{reply}")?;

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::model(reply));
    }

    Ok(())
}
