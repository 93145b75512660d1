//! Search & Filtering
//!
//! Pure views over an offer collection. Every function takes the full
//! collection and returns a new sequence; nothing here touches storage.

use std::str::FromStr;

use jiff::civil::Date;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

use crate::offers::{Category, Offer, OfferId};

/// Upper price sentinel: a maximum at or above this value applies no bound.
pub const PRICE_CEILING: u64 = 5000;

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Cheapest first.
    #[default]
    PriceAscending,

    /// Most expensive first.
    PriceDescending,

    /// Soonest departure first.
    SoonestDate,
}

/// Error parsing a sort key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0} (expected price-asc, price-desc or date)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-asc" | "price" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "date" | "soonest" => Ok(Self::SoonestDate),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Transient search query.
///
/// Each field has an "unset" value that disables its predicate; see
/// [`SearchFilters::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Case-insensitive substring of destination or title; empty for any
    pub destination: String,

    /// Exact category; `None` for any
    pub category: Option<Category>,

    /// Inclusive lower price bound; 0 for none
    pub min_price: u64,

    /// Inclusive upper price bound; [`PRICE_CEILING`] or above for none
    pub max_price: u64,

    /// Earliest accepted start date
    pub min_start_date: Option<Date>,

    /// Ordering of the result
    pub sort: SortKey,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            destination: String::new(),
            category: None,
            min_price: 0,
            max_price: PRICE_CEILING,
            min_start_date: None,
            sort: SortKey::default(),
        }
    }
}

impl SearchFilters {
    /// Whether no predicate is active. The sort key is not a predicate.
    pub fn is_unset(&self) -> bool {
        self.destination_term().is_none()
            && self.category.is_none()
            && self.min_price == 0
            && self.max_price >= PRICE_CEILING
            && self.min_start_date.is_none()
    }

    /// Whether `offer` passes every active predicate.
    pub fn matches(&self, offer: &Offer) -> bool {
        self.destination_term()
            .is_none_or(|term| offer.matches_term(term))
            && self.category.is_none_or(|category| offer.category == category)
            && (self.min_price == 0 || offer.price >= self.min_price)
            && (self.max_price >= PRICE_CEILING || offer.price <= self.max_price)
            && self
                .min_start_date
                .is_none_or(|date| offer.start_date >= date)
    }

    /// Best-effort decode of a filter suggestion returned by a generative
    /// service, e.g. `{"destination": "Kenya", "maxPrice": 3000}`.
    ///
    /// Surrounding prose or code fences are skipped. Returns `None` when no
    /// JSON object can be decoded. Unknown categories and unparsable dates are
    /// dropped rather than rejecting the whole suggestion.
    pub fn from_suggestion(text: &str) -> Option<Self> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        let json = text.get(start..=end)?;

        let suggestion: FilterSuggestion = serde_json::from_str(json).ok()?;

        let defaults = Self::default();

        Some(Self {
            destination: suggestion.destination.unwrap_or_default(),
            category: suggestion
                .category
                .and_then(|category| category.parse().ok()),
            min_price: suggestion.min_price.unwrap_or(defaults.min_price),
            max_price: suggestion.max_price.unwrap_or(defaults.max_price),
            min_start_date: suggestion
                .min_start_date
                .and_then(|date| date.parse().ok()),
            sort: suggestion
                .sort
                .and_then(|sort| sort.parse().ok())
                .unwrap_or(defaults.sort),
        })
    }

    fn destination_term(&self) -> Option<&str> {
        let term = self.destination.as_str();

        (!term.is_empty()).then_some(term)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterSuggestion {
    destination: Option<String>,
    category: Option<String>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    #[serde(alias = "date")]
    min_start_date: Option<String>,
    sort: Option<String>,
}

/// Filter and sort offers for the search page.
///
/// Predicates are intersected, then the candidates are stably sorted by
/// `filters.sort`, so offers with equal keys keep their catalog order.
pub fn search(offers: &[Offer], filters: &SearchFilters) -> Vec<Offer> {
    let mut result: Vec<Offer> = offers
        .iter()
        .filter(|offer| filters.matches(offer))
        .cloned()
        .collect();

    match filters.sort {
        SortKey::PriceAscending => result.sort_by_key(|offer| offer.price),
        SortKey::PriceDescending => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::SoonestDate => result.sort_by_key(|offer| offer.start_date),
    }

    result
}

/// Promoted offers, in catalog order.
pub fn special_offers(offers: &[Offer]) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| offer.is_special)
        .cloned()
        .collect()
}

/// Admin list filter: title/destination term and category, catalog order.
pub fn filter_catalog(offers: &[Offer], term: &str, category: Option<Category>) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| term.is_empty() || offer.matches_term(term))
        .filter(|offer| category.is_none_or(|category| offer.category == category))
        .cloned()
        .collect()
}

/// Offers whose id is in `favorites`, in catalog order.
///
/// Favorite ids without an offer are skipped here but remain stored.
pub fn favorite_offers(offers: &[Offer], favorites: &FxHashSet<OfferId>) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| favorites.contains(&offer.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{offers::OfferDraft, seed::seed_catalog};

    use super::*;

    fn prices(offers: &[Offer]) -> Vec<u64> {
        offers.iter().map(|o| o.price).collect()
    }

    fn offer(id: &str, price: u64, start: Date) -> TestResult<Offer> {
        Ok(OfferDraft::default()
            .title(format!("Offer {id}"))
            .destination("Somewhere")
            .price(price)
            .category(Category::Tour)
            .start_date(start)
            .duration_days(5)
            .into_offer(OfferId::from_string(id))?)
    }

    #[test]
    fn unset_filters_sort_by_price() -> TestResult {
        let offers = seed_catalog()?;
        let filters = SearchFilters::default();

        assert!(filters.is_unset());
        assert_eq!(prices(&search(&offers, &filters)), [450, 900, 1200, 2500]);

        Ok(())
    }

    #[test]
    fn max_price_scenario() -> TestResult {
        let offers = seed_catalog()?;
        let filters = SearchFilters {
            max_price: 1000,
            ..SearchFilters::default()
        };

        assert_eq!(prices(&search(&offers, &filters)), [450, 900]);

        Ok(())
    }

    #[test]
    fn max_price_above_ceiling_is_unset() -> TestResult {
        let offers = seed_catalog()?;
        let filters = SearchFilters {
            max_price: 10_000,
            ..SearchFilters::default()
        };

        assert!(filters.is_unset());
        assert_eq!(search(&offers, &filters).len(), offers.len());

        Ok(())
    }

    #[test]
    fn destination_matches_title_or_destination_case_insensitively() -> TestResult {
        let offers = seed_catalog()?;

        let by_destination = SearchFilters {
            destination: "kEnYa".to_string(),
            ..SearchFilters::default()
        };
        let by_title = SearchFilters {
            destination: "paris".to_string(),
            ..SearchFilters::default()
        };

        assert_eq!(prices(&search(&offers, &by_destination)), [2500]);
        assert_eq!(prices(&search(&offers, &by_title)), [450]);

        Ok(())
    }

    #[test]
    fn category_and_min_price_combine() -> TestResult {
        let offers = seed_catalog()?;

        let filters = SearchFilters {
            category: Some(Category::Cruise),
            min_price: 1000,
            ..SearchFilters::default()
        };

        assert!(search(&offers, &filters).is_empty());

        Ok(())
    }

    #[test]
    fn start_date_bound_is_inclusive() -> TestResult {
        let offers = seed_catalog()?;
        let filters = SearchFilters {
            min_start_date: Some(date(2024, 7, 10)),
            sort: SortKey::SoonestDate,
            ..SearchFilters::default()
        };

        let dates: Vec<Date> = search(&offers, &filters)
            .iter()
            .map(|o| o.start_date)
            .collect();

        assert_eq!(dates, [date(2024, 7, 10), date(2024, 8, 1)]);

        Ok(())
    }

    #[test]
    fn price_descending_sort() -> TestResult {
        let offers = seed_catalog()?;
        let filters = SearchFilters {
            sort: SortKey::PriceDescending,
            ..SearchFilters::default()
        };

        assert_eq!(prices(&search(&offers, &filters)), [2500, 1200, 900, 450]);

        Ok(())
    }

    #[test]
    fn sort_is_stable_for_equal_keys() -> TestResult {
        let day = date(2025, 1, 1);
        let offers = [
            offer("a", 300, day)?,
            offer("b", 100, day)?,
            offer("c", 300, day)?,
            offer("d", 100, day)?,
        ];

        let ascending: Vec<String> = search(&offers, &SearchFilters::default())
            .into_iter()
            .map(|o| o.id.into_string())
            .collect();

        let by_date: Vec<String> = search(
            &offers,
            &SearchFilters {
                sort: SortKey::SoonestDate,
                ..SearchFilters::default()
            },
        )
        .into_iter()
        .map(|o| o.id.into_string())
        .collect();

        assert_eq!(ascending, ["b", "d", "a", "c"]);
        assert_eq!(by_date, ["a", "b", "c", "d"]);

        Ok(())
    }

    #[test]
    fn adding_a_predicate_only_narrows() -> TestResult {
        let offers = seed_catalog()?;

        let base = SearchFilters {
            max_price: 2000,
            ..SearchFilters::default()
        };
        let narrower = [
            SearchFilters {
                category: Some(Category::Stay),
                ..base.clone()
            },
            SearchFilters {
                min_price: 500,
                ..base.clone()
            },
            SearchFilters {
                destination: "an".to_string(),
                ..base.clone()
            },
            SearchFilters {
                min_start_date: Some(date(2024, 6, 1)),
                ..base.clone()
            },
        ];

        let wide = search(&offers, &base);

        for filters in narrower {
            for offer in search(&offers, &filters) {
                assert!(wide.contains(&offer), "{} escaped the wider filter", offer.id);
            }
        }

        Ok(())
    }

    #[test]
    fn special_offers_keep_catalog_order() -> TestResult {
        let offers = seed_catalog()?;

        assert_eq!(prices(&special_offers(&offers)), [1200, 900]);

        Ok(())
    }

    #[test]
    fn filter_catalog_does_not_sort() -> TestResult {
        let offers = seed_catalog()?;

        assert_eq!(prices(&filter_catalog(&offers, "", None)), [1200, 2500, 900, 450]);
        assert_eq!(
            prices(&filter_catalog(&offers, "e", Some(Category::Cruise))),
            [900]
        );

        Ok(())
    }

    #[test]
    fn favorite_offers_skip_dangling_ids() -> TestResult {
        let offers = seed_catalog()?;
        let favorites: FxHashSet<OfferId> = ["4", "2", "gone"]
            .into_iter()
            .map(OfferId::from_string)
            .collect();

        assert_eq!(prices(&favorite_offers(&offers, &favorites)), [2500, 450]);

        Ok(())
    }

    #[test]
    fn suggestion_decodes_inside_code_fence() -> TestResult {
        let text = "```json\n{\"destination\": \"Kenya\", \"category\": \"Circuit\", \"maxPrice\": 3000}\n```";

        let filters = SearchFilters::from_suggestion(text).ok_or("no filters decoded")?;

        assert_eq!(filters.destination, "Kenya");
        assert_eq!(filters.category, Some(Category::Tour));
        assert_eq!(filters.max_price, 3000);
        assert_eq!(filters.min_price, 0);

        Ok(())
    }

    #[test]
    fn suggestion_drops_unknown_category_and_bad_date() -> TestResult {
        let filters = SearchFilters::from_suggestion(
            r#"{"category": "glamping", "date": "next summer"}"#,
        )
        .ok_or("no filters decoded")?;

        assert_eq!(filters.category, None);
        assert_eq!(filters.min_start_date, None);
        assert!(filters.is_unset());

        Ok(())
    }

    #[test]
    fn suggestion_reads_start_date_and_sort() -> TestResult {
        let filters = SearchFilters::from_suggestion(
            r#"{"minStartDate": "2024-07-01", "sort": "price-desc"}"#,
        )
        .ok_or("no filters decoded")?;

        assert_eq!(filters.min_start_date, Some(date(2024, 7, 1)));
        assert_eq!(filters.sort, SortKey::PriceDescending);

        Ok(())
    }

    #[test]
    fn destination_term_is_matched_verbatim() -> TestResult {
        let offers = seed_catalog()?;

        let padded = SearchFilters {
            destination: " paris ".to_string(),
            ..SearchFilters::default()
        };

        assert!(!padded.is_unset());
        assert!(search(&offers, &padded).is_empty());
        assert!(filter_catalog(&offers, " paris ", None).is_empty());

        Ok(())
    }

    #[test]
    fn undecodable_suggestion_is_none() {
        assert_eq!(SearchFilters::from_suggestion("I could not help"), None);
        assert_eq!(SearchFilters::from_suggestion("{not json}"), None);
    }
}
