//! Reviews

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ids::TypedId,
    offers::{OfferId, non_blank},
};

/// Review Id
pub type ReviewId = TypedId<Review>;

/// Rating outside the 1-5 star range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub u8);

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;

    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Construct a rating.
    ///
    /// # Errors
    ///
    /// Returns an error when `stars` is outside `1..=5`.
    pub fn new(stars: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(RatingError(stars))
        }
    }

    /// Number of stars.
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// A visitor's rating of an offer. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique id
    pub id: ReviewId,

    /// Reviewed offer; may outlive the offer itself
    pub offer_id: OfferId,

    /// Author display name
    #[serde(alias = "userName")]
    pub author: String,

    /// Rating
    pub rating: Rating,

    /// Free-text comment
    #[serde(default)]
    pub comment: String,

    /// Submission time
    #[serde(rename = "date", alias = "createdAt")]
    pub created_at: Timestamp,
}

/// Review draft validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewDraftError {
    /// Author missing or blank.
    #[error("review author is required")]
    MissingAuthor,

    /// Rating out of range.
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Submitted review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Reviewed offer
    pub offer_id: OfferId,

    /// Author display name
    pub author: String,

    /// Raw star count
    pub rating: u8,

    /// Comment
    pub comment: String,
}

impl ReviewDraft {
    /// Validate the draft into a review created at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank author or an out-of-range rating.
    pub fn into_review(self, id: ReviewId, now: Timestamp) -> Result<Review, ReviewDraftError> {
        let author = non_blank(Some(self.author)).ok_or(ReviewDraftError::MissingAuthor)?;
        let rating = Rating::new(self.rating)?;

        Ok(Review {
            id,
            offer_id: self.offer_id,
            author,
            rating,
            comment: self.comment.trim().to_string(),
            created_at: now,
        })
    }
}

/// Derived rating figures for one offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSummary {
    /// Number of reviews
    pub count: usize,

    /// Mean rating to one decimal place; `None` without reviews
    pub average: Option<Decimal>,
}

impl RatingSummary {
    /// Summarise a set of reviews.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let count = reviews.len();

        if count == 0 {
            return Self::default();
        }

        let sum: u64 = reviews
            .iter()
            .map(|review| u64::from(review.rating.stars()))
            .sum();

        let average = Decimal::from(sum)
            .checked_div(Decimal::from(count))
            .map(|mean| {
                mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            });

        Self { count, average }
    }
}

/// Sort newest first. Equal timestamps keep their stored order.
pub fn newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::ToSpan;
    use testresult::TestResult;

    use super::*;

    fn review(stars: u8, at: Timestamp) -> TestResult<Review> {
        Ok(ReviewDraft {
            offer_id: OfferId::from_string("1"),
            author: "Sam".to_string(),
            rating: stars,
            comment: "Lovely".to_string(),
        }
        .into_review(ReviewId::new(), at)?)
    }

    #[test]
    fn rating_bounds_are_enforced() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
    }

    #[test]
    fn out_of_range_rating_fails_to_decode() {
        let result = serde_json::from_str::<Rating>("9");

        assert!(result.is_err(), "rating 9 must be rejected");
    }

    #[test]
    fn blank_author_is_rejected() {
        let draft = ReviewDraft {
            offer_id: OfferId::from_string("1"),
            author: String::new(),
            rating: 4,
            comment: String::new(),
        };

        assert_eq!(
            draft.into_review(ReviewId::new(), Timestamp::now()),
            Err(ReviewDraftError::MissingAuthor)
        );
    }

    #[test]
    fn summary_rounds_to_one_decimal() -> TestResult {
        let now = Timestamp::now();
        let reviews = [review(5, now)?, review(4, now)?, review(4, now)?];

        let summary = RatingSummary::from_reviews(&reviews);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, Some(Decimal::from_str("4.3")?));

        Ok(())
    }

    #[test]
    fn summary_rounds_half_star_midpoints_up() -> TestResult {
        let now = Timestamp::now();
        let quarter = [review(5, now)?, review(4, now)?, review(4, now)?, review(4, now)?];

        assert_eq!(
            RatingSummary::from_reviews(&quarter).average,
            Some(Decimal::from_str("4.3")?)
        );

        let mut eighths = Vec::new();
        for stars in [5, 5, 5, 4, 4, 4, 4, 4] {
            eighths.push(review(stars, now)?);
        }

        assert_eq!(
            RatingSummary::from_reviews(&eighths).average,
            Some(Decimal::from_str("4.4")?)
        );

        Ok(())
    }

    #[test]
    fn summary_without_reviews_has_no_average() {
        assert_eq!(RatingSummary::from_reviews(&[]), RatingSummary::default());
    }

    #[test]
    fn newest_first_orders_by_timestamp_descending() -> TestResult {
        let t1 = Timestamp::from_second(1_700_000_000)?;
        let t2 = t1.checked_add(1.hour())?;
        let t3 = t2.checked_add(1.hour())?;

        let mut reviews = vec![review(3, t2)?, review(5, t1)?, review(4, t3)?];

        newest_first(&mut reviews);

        let order: Vec<Timestamp> = reviews.iter().map(|r| r.created_at).collect();

        assert_eq!(order, [t3, t2, t1]);

        Ok(())
    }

    #[test]
    fn review_document_uses_date_field() -> TestResult {
        let json = serde_json::to_value(review(2, Timestamp::from_second(0)?)?)?;

        assert_eq!(json["date"], "1970-01-01T00:00:00Z");
        assert_eq!(json["rating"], 2);

        Ok(())
    }
}
