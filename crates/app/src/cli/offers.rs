use std::io::{self, Write};

use clap::{Args, Subcommand};
use jiff::civil::Date;
use voyage::{
    offers::{Category, Offer, OfferDraft, OfferId},
    search::{self, PRICE_CEILING, SearchFilters, SortKey},
};
use voyage_app::context::AppContext;

use super::{CliError, output, require_admin};

#[derive(Debug, Args)]
pub(crate) struct OffersCommand {
    #[command(subcommand)]
    command: OffersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OffersSubcommand {
    /// List the catalog, optionally narrowed by a term and category
    List(ListArgs),

    /// Show one offer with its rating
    Show {
        /// Offer id
        id: String,
    },

    /// List promoted offers
    Specials,

    /// Search offers with filters
    Search(SearchArgs),

    /// Add an offer (admin)
    Create(OfferFields),

    /// Change an existing offer (admin)
    Edit {
        /// Offer id
        id: String,

        #[command(flatten)]
        fields: OfferFields,
    },

    /// Remove an offer (admin)
    Delete {
        /// Offer id
        id: String,
    },

    /// Generate marketing copy for an offer
    Describe {
        /// Offer id
        id: String,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Match against title or destination
    #[arg(long)]
    term: Option<String>,

    /// Only offers of this category
    #[arg(long)]
    category: Option<Category>,
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Destination or title contains
    #[arg(long)]
    destination: Option<String>,

    /// Only offers of this category
    #[arg(long)]
    category: Option<Category>,

    /// Minimum price in euros
    #[arg(long, default_value_t = 0)]
    min_price: u64,

    /// Maximum price in euros
    #[arg(long, default_value_t = PRICE_CEILING)]
    max_price: u64,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long = "from")]
    min_start_date: Option<Date>,

    /// Result order (price-asc, price-desc, date)
    #[arg(long, default_value = "price-asc")]
    sort: SortKey,
}

impl From<SearchArgs> for SearchFilters {
    fn from(args: SearchArgs) -> Self {
        Self {
            destination: args.destination.unwrap_or_default(),
            category: args.category,
            min_price: args.min_price,
            max_price: args.max_price,
            min_start_date: args.min_start_date,
            sort: args.sort,
        }
    }
}

#[derive(Debug, Args)]
struct OfferFields {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    destination: Option<String>,

    /// Price in whole euros
    #[arg(long)]
    price: Option<u64>,

    /// stay, tour, cruise or weekend
    #[arg(long)]
    category: Option<Category>,

    #[arg(long)]
    image_url: Option<String>,

    /// Promote the offer on the home page
    #[arg(long)]
    special: Option<bool>,

    /// First departure (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<Date>,

    /// Length in days
    #[arg(long)]
    duration: Option<u32>,

    /// Ask the assistant for a description when none is given
    #[arg(long)]
    generate_description: bool,
}

impl OfferFields {
    fn apply(self, mut draft: OfferDraft) -> OfferDraft {
        if let Some(title) = self.title {
            draft = draft.title(title);
        }
        if let Some(description) = self.description {
            draft = draft.description(description);
        }
        if let Some(destination) = self.destination {
            draft = draft.destination(destination);
        }
        if let Some(price) = self.price {
            draft = draft.price(price);
        }
        if let Some(category) = self.category {
            draft = draft.category(category);
        }
        if let Some(image_url) = self.image_url {
            draft = draft.image_url(image_url);
        }
        if let Some(special) = self.special {
            draft = draft.special(special);
        }
        if let Some(start_date) = self.start_date {
            draft = draft.start_date(start_date);
        }
        if let Some(duration) = self.duration {
            draft = draft.duration_days(duration);
        }

        draft
    }
}

pub(crate) async fn run(ctx: &AppContext, command: OffersCommand) -> Result<(), CliError> {
    let mut out = io::stdout().lock();

    match command.command {
        OffersSubcommand::List(args) => {
            let offers = ctx.offers.list_offers()?;
            let listed = search::filter_catalog(
                &offers,
                args.term.as_deref().unwrap_or_default(),
                args.category,
            );

            writeln!(out, "{}", output::offers_table(&listed)?)?;
        }
        OffersSubcommand::Show { id } => {
            let offer = find_offer(ctx, &id)?;
            let summary = ctx.reviews.rating_summary(&offer.id)?;

            writeln!(out, "{}", output::offer_details(&offer, &summary)?)?;
        }
        OffersSubcommand::Specials => {
            writeln!(out, "{}", output::offers_table(&ctx.offers.special_offers()?)?)?;
        }
        OffersSubcommand::Search(args) => {
            let results = ctx.offers.search(&args.into())?;

            if results.is_empty() {
                writeln!(out, "no offers match these filters")?;
            } else {
                writeln!(out, "{}", output::offers_table(&results)?)?;
            }
        }
        OffersSubcommand::Create(fields) => {
            require_admin(ctx)?;

            let generate = fields.generate_description && fields.description.is_none();
            let mut draft = fields.apply(OfferDraft::default());

            if generate {
                let description = generated_description(ctx, &draft).await;
                draft = draft.description(description);
            }

            let offer = ctx.offers.create_offer(draft)?;

            writeln!(out, "created offer {}", offer.id)?;
        }
        OffersSubcommand::Edit { id, fields } => {
            require_admin(ctx)?;

            let existing = find_offer(ctx, &id)?;
            let generate = fields.generate_description && fields.description.is_none();
            let mut draft = fields.apply(OfferDraft::from(&existing));

            if generate {
                let description = generated_description(ctx, &draft).await;
                draft = draft.description(description);
            }

            match ctx.offers.update_offer(&existing.id, draft)? {
                Some(offer) => writeln!(out, "updated offer {}", offer.id)?,
                None => return Err(CliError::OfferNotFound(id)),
            }
        }
        OffersSubcommand::Delete { id } => {
            require_admin(ctx)?;

            ctx.offers.delete_offer(&OfferId::from_string(id.as_str()))?;

            writeln!(out, "deleted offer {id}")?;
        }
        OffersSubcommand::Describe { id } => {
            let offer = find_offer(ctx, &id)?;
            let text = ctx
                .assistant
                .describe_offer(&offer.title, &offer.destination, offer.category.label())
                .await;

            writeln!(out, "{text}")?;
        }
    }

    Ok(())
}

pub(crate) fn find_offer(ctx: &AppContext, id: &str) -> Result<Offer, CliError> {
    ctx.offers
        .get_offer(&OfferId::from_string(id))?
        .ok_or_else(|| CliError::OfferNotFound(id.to_string()))
}

async fn generated_description(ctx: &AppContext, draft: &OfferDraft) -> String {
    ctx.assistant
        .describe_offer(
            draft.title.as_deref().unwrap_or_default(),
            draft.destination.as_deref().unwrap_or_default(),
            draft.category.map(Category::label).unwrap_or_default(),
        )
        .await
}
