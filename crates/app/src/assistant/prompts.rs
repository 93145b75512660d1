//! Prompt templates.

use std::fmt::Write as _;

use voyage::offers::Offer;

pub(crate) fn describe_offer(title: &str, destination: &str, category: &str) -> String {
    format!(
        "Write a short, appealing sales description (about 50 words) for a travel offer \
         titled \"{title}\" to \"{destination}\" in the \"{category}\" category. \
         Include a few relevant emojis."
    )
}

pub(crate) fn chat_system(offers: &[Offer]) -> String {
    let mut context = String::new();

    for offer in offers {
        let _ = writeln!(
            context,
            "- {} ({}) in {}: {}€, {} days.",
            offer.title,
            offer.category.label(),
            offer.destination,
            offer.price,
            offer.duration_days
        );
    }

    format!(
        "You are VistaBot, the travel assistant of the VoyageVista agency. \
         Help visitors find the right trip among our current offers.\n\n\
         Available offers:\n{context}\n\
         Rules:\n\
         1. Stay enthusiastic, polite and professional.\n\
         2. When someone is looking for a trip, suggest a matching offer from the list.\n\
         3. If nothing matches exactly, suggest the closest offer.\n\
         4. Bring off-topic questions gently back to travel.\n\
         5. Never mention technical ids.\n\
         6. Answer in at most three sentences unless asked for details."
    )
}

pub(crate) fn search_filters(query: &str) -> String {
    format!(
        "Extract travel search filters from this request: \"{query}\".\n\
         Answer with a single JSON object and nothing else, using these optional keys: \
         \"destination\" (string), \"category\" (one of stay, tour, cruise, weekend), \
         \"minPrice\" (integer euros), \"maxPrice\" (integer euros), \
         \"minStartDate\" (YYYY-MM-DD), \"sort\" (price-asc, price-desc or date)."
    )
}

pub(crate) fn itinerary(offer: &Offer) -> String {
    format!(
        "Draft a day-by-day itinerary for \"{}\" in {} lasting {} days, starting {}. \
         Use one short paragraph per day, headed \"Day N\".",
        offer.title, offer.destination, offer.duration_days, offer.start_date
    )
}

pub(crate) fn narration(text: &str) -> String {
    format!("Say warmly, like a travel host: {text}")
}
