use std::io::{self, Write};

use clap::{Args, Subcommand};
use voyage::requests::{RequestDraft, RequestId, RequestOrigin, RequestStatus};
use voyage_app::context::AppContext;

use super::{CliError, offers::find_offer, output, require_admin};

#[derive(Debug, Args)]
pub(crate) struct RequestsCommand {
    #[command(subcommand)]
    command: RequestsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RequestsSubcommand {
    /// List requests, most recent first (admin)
    List,

    /// Send a request about an offer or a general question
    Submit(SubmitArgs),

    /// Change the status of a request (admin)
    Status {
        /// Request id
        id: String,

        /// new, in-progress or processed
        status: RequestStatus,
    },

    /// Remove a request (admin)
    Delete {
        /// Request id
        id: String,
    },

    /// Count requests by status (admin)
    Stats,
}

#[derive(Debug, Args)]
struct SubmitArgs {
    /// Offer the request is about
    #[arg(long, conflicts_with = "subject", required_unless_present = "subject")]
    offer: Option<String>,

    /// Subject of a general contact message
    #[arg(long)]
    subject: Option<String>,

    /// Your name
    #[arg(long)]
    name: String,

    /// Your email address
    #[arg(long)]
    email: String,

    /// Your phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// What you would like to know
    #[arg(long)]
    message: String,
}

pub(crate) fn run(ctx: &AppContext, command: RequestsCommand) -> Result<(), CliError> {
    let mut out = io::stdout().lock();

    match command.command {
        RequestsSubcommand::List => {
            require_admin(ctx)?;

            let requests = ctx.requests.list_requests()?;

            if requests.is_empty() {
                writeln!(out, "no requests yet")?;
            } else {
                writeln!(out, "{}", output::requests_table(&requests))?;
            }
        }
        RequestsSubcommand::Submit(args) => {
            let origin = match (args.offer, args.subject) {
                (Some(id), _) => {
                    let offer = find_offer(ctx, &id)?;

                    RequestOrigin::Offer {
                        id: offer.id,
                        title: offer.title,
                    }
                }
                (None, subject) => RequestOrigin::Contact {
                    subject: subject.unwrap_or_default(),
                },
            };

            let request = ctx.requests.submit_request(RequestDraft {
                origin,
                client_name: args.name,
                client_email: args.email,
                client_phone: args.phone,
                message: args.message,
            })?;

            writeln!(out, "request {} received, we will get back to you soon", request.id)?;
        }
        RequestsSubcommand::Status { id, status } => {
            require_admin(ctx)?;

            ctx.requests
                .update_request_status(&RequestId::from_string(id.as_str()), status)?;

            writeln!(out, "request {id} is now {status}")?;
        }
        RequestsSubcommand::Delete { id } => {
            require_admin(ctx)?;

            ctx.requests
                .delete_request(&RequestId::from_string(id.as_str()))?;

            writeln!(out, "deleted request {id}")?;
        }
        RequestsSubcommand::Stats => {
            require_admin(ctx)?;

            writeln!(out, "{}", output::stats_table(&ctx.requests.request_stats()?))?;
        }
    }

    Ok(())
}
