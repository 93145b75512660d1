//! Table rendering for command output.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use voyage::{
    offers::Offer,
    requests::{ClientRequest, RequestStats},
    reviews::{RatingSummary, Review},
};

use super::CliError;

pub(crate) fn price(offer: &Offer) -> Result<String, CliError> {
    Ok(offer.price_money()?.to_string())
}

pub(crate) fn offers_table(offers: &[Offer]) -> Result<String, CliError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Title", "Destination", "Category", "Price", "Start", "Days", ""]);

    for offer in offers {
        builder.push_record([
            offer.id.to_string(),
            offer.title.clone(),
            offer.destination.clone(),
            offer.category.to_string(),
            price(offer)?,
            offer.start_date.to_string(),
            offer.duration_days.to_string(),
            if offer.is_special { "★" } else { "" }.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(4..5), Alignment::right());

    Ok(table.to_string())
}

pub(crate) fn offer_details(offer: &Offer, summary: &RatingSummary) -> Result<String, CliError> {
    let rating = summary.average.map_or_else(
        || "no reviews yet".to_string(),
        |average| format!("{average}/5 ({} reviews)", summary.count),
    );

    let mut builder = Builder::default();

    builder.push_record(["Title", offer.title.as_str()]);
    builder.push_record(["Destination", offer.destination.as_str()]);
    builder.push_record(["Category", offer.category.label()]);
    builder.push_record(["Price", price(offer)?.as_str()]);
    builder.push_record(["Start", offer.start_date.to_string().as_str()]);
    builder.push_record(["Duration", format!("{} days", offer.duration_days).as_str()]);
    builder.push_record(["Special", if offer.is_special { "yes" } else { "no" }]);
    builder.push_record(["Rating", rating.as_str()]);
    builder.push_record(["Image", offer.image_url.as_str()]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    Ok(format!("{table}\n\n{}", offer.description))
}

pub(crate) fn requests_table(requests: &[ClientRequest]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Received", "Client", "Email", "Phone", "Subject", "Status"]);

    for request in requests {
        builder.push_record([
            request.id.to_string(),
            request.created_at.strftime("%Y-%m-%d %H:%M").to_string(),
            request.client_name.clone(),
            request.client_email.clone(),
            request.client_phone.clone(),
            request.offer().map(|offer| offer.title).unwrap_or_default(),
            request.status.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    table.to_string()
}

pub(crate) fn stats_table(stats: &RequestStats) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Total", "New", "In progress", "Processed"]);
    builder.push_record([
        stats.total.to_string(),
        stats.new.to_string(),
        stats.in_progress.to_string(),
        stats.processed.to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(..), Alignment::right());

    table.to_string()
}

pub(crate) fn reviews_table(reviews: &[Review]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Date", "Author", "Rating", "Comment"]);

    for review in reviews {
        builder.push_record([
            review.created_at.strftime("%Y-%m-%d").to_string(),
            review.author.clone(),
            "★".repeat(usize::from(review.rating.stars())),
            review.comment.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    table.to_string()
}
