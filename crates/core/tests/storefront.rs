//! Storefront scenarios over the seed catalog

use jiff::{Timestamp, civil::date};
use rustc_hash::FxHashSet;
use testresult::TestResult;
use voyage::prelude::*;

fn titles(offers: &[Offer]) -> Vec<&str> {
    offers.iter().map(|o| o.title.as_str()).collect()
}

#[test]
fn home_page_promotes_specials_in_catalog_order() -> TestResult {
    let catalog = seed_catalog()?;

    assert_eq!(
        titles(&special_offers(&catalog)),
        ["Bali Getaway", "Mediterranean Cruise"]
    );

    Ok(())
}

#[test]
fn budget_search_sorted_by_date() -> TestResult {
    let catalog = seed_catalog()?;

    let results = search(
        &catalog,
        &SearchFilters {
            max_price: 1500,
            sort: SortKey::SoonestDate,
            ..SearchFilters::default()
        },
    );

    assert_eq!(
        titles(&results),
        ["Weekend in Paris", "Bali Getaway", "Mediterranean Cruise"]
    );

    Ok(())
}

#[test]
fn new_offer_appears_in_search_results() -> TestResult {
    let mut catalog = seed_catalog()?;

    catalog.push(
        OfferDraft::default()
            .title("Lisbon Weekend")
            .destination("Portugal")
            .price(380)
            .category(Category::Weekend)
            .start_date(date(2024, 10, 4))
            .duration_days(3)
            .into_offer(OfferId::from_string("5"))?,
    );

    let weekends = search(
        &catalog,
        &SearchFilters {
            category: Some(Category::Weekend),
            ..SearchFilters::default()
        },
    );

    assert_eq!(titles(&weekends), ["Lisbon Weekend", "Weekend in Paris"]);

    Ok(())
}

#[test]
fn favorites_page_skips_deleted_offers() -> TestResult {
    let mut catalog = seed_catalog()?;
    let favorites: FxHashSet<OfferId> = ["1", "3"].into_iter().map(OfferId::from_string).collect();

    catalog.retain(|offer| offer.id.as_str() != "3");

    assert_eq!(titles(&favorite_offers(&catalog, &favorites)), ["Bali Getaway"]);

    Ok(())
}

#[test]
fn legacy_documents_decode() -> TestResult {
    let offers: Vec<Offer> = serde_json::from_str(
        r#"[{
            "id": "9",
            "title": "Nile Cruise",
            "description": "",
            "destination": "Egypt",
            "price": 1400,
            "category": "Croisière",
            "imageUrl": "https://picsum.photos/800/600?random=9",
            "isSpecial": false,
            "startDate": "2024-11-02",
            "duration": 6
        }]"#,
    )?;

    let requests: Vec<ClientRequest> = serde_json::from_str(
        r#"[{
            "id": "r1",
            "offerId": "9",
            "offerTitle": "Nile Cruise",
            "clientName": "Sam",
            "clientEmail": "sam@example.com",
            "clientPhone": "",
            "message": "Cabins?",
            "status": "En cours",
            "createdAt": "2024-06-01T10:00:00Z"
        }]"#,
    )?;

    let reviews: Vec<Review> = serde_json::from_str(
        r#"[{
            "id": "v1",
            "offerId": "9",
            "userName": "Sam",
            "rating": 4,
            "comment": "Great guide",
            "date": "2024-11-10T08:30:00Z"
        }]"#,
    )?;

    assert_eq!(offers.first().map(|o| o.category), Some(Category::Cruise));
    assert_eq!(
        requests.first().map(|r| r.status),
        Some(RequestStatus::InProgress)
    );
    assert_eq!(RatingSummary::from_reviews(&reviews).count, 1);
    assert_eq!(reviews.first().map(|r| r.author.as_str()), Some("Sam"));

    Ok(())
}

#[test]
fn contact_and_offer_requests_count_together() -> TestResult {
    let now = Timestamp::now();

    let contact = RequestDraft {
        origin: RequestOrigin::Contact {
            subject: "Group booking".to_string(),
        },
        client_name: "Ada".to_string(),
        client_email: "ada@example.com".to_string(),
        client_phone: String::new(),
        message: "We are twelve.".to_string(),
    }
    .into_request(RequestId::from_string("a"), now)?;

    let about_offer = RequestDraft {
        origin: RequestOrigin::Offer {
            id: OfferId::from_string("2"),
            title: "Kenya Safari".to_string(),
        },
        client_name: "Ben".to_string(),
        client_email: "ben@example.com".to_string(),
        client_phone: "555-0101".to_string(),
        message: "Malaria pills?".to_string(),
    }
    .into_request(RequestId::from_string("b"), now)?;

    let stats = RequestStats::from_requests(&[contact, about_offer]);

    assert_eq!(stats.total, 2);
    assert_eq!(stats.new, 2);
    assert_eq!(stats.in_progress + stats.processed, 0);

    Ok(())
}
