//! Offers

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::TryFromIntError,
    str::FromStr,
};

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TypedId;

/// Offer Id
pub type OfferId = TypedId<Offer>;

/// Image used when an offer is saved without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/800/600";

/// Offer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Resort or hotel stay.
    #[serde(rename = "stay", alias = "Séjour")]
    Stay,

    /// Guided multi-stop tour.
    #[serde(rename = "tour", alias = "Circuit")]
    Tour,

    /// Cruise.
    #[serde(rename = "cruise", alias = "Croisière")]
    Cruise,

    /// Short weekend break.
    #[serde(rename = "weekend", alias = "Weekend")]
    Weekend,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [Self::Stay, Self::Tour, Self::Cruise, Self::Weekend];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stay => "Stay",
            Self::Tour => "Tour",
            Self::Cruise => "Cruise",
            Self::Weekend => "Weekend",
        }
    }

    fn legacy_label(self) -> &'static str {
        match self {
            Self::Stay => "séjour",
            Self::Tour => "circuit",
            Self::Cruise => "croisière",
            Self::Weekend => "weekend",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Error parsing a category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|category| {
                category.label().eq_ignore_ascii_case(&needle) || category.legacy_label() == needle
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A sellable travel package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique id, never reused.
    pub id: OfferId,

    /// Title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Destination (country, region or city)
    pub destination: String,

    /// Price in whole euros
    pub price: u64,

    /// Category
    pub category: Category,

    /// Image URL or embedded data URL
    pub image_url: String,

    /// Promoted on the home page
    pub is_special: bool,

    /// First departure date
    pub start_date: Date,

    /// Length of the trip in days
    #[serde(rename = "duration")]
    pub duration_days: u32,
}

impl Offer {
    /// Price as euro money.
    ///
    /// # Errors
    ///
    /// Returns an error if the price does not fit in a signed 64-bit amount.
    pub fn price_money(&self) -> Result<Money<'static, Currency>, TryFromIntError> {
        Ok(Money::from_major(
            i64::try_from(self.price)?,
            rusty_money::iso::EUR,
        ))
    }

    /// Whether the title or destination contains `term`, ignoring case.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.destination.to_lowercase().contains(&term) || self.title.to_lowercase().contains(&term)
    }
}

/// Offer draft validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OfferDraftError {
    /// Title is missing or blank.
    #[error("offer title is required")]
    MissingTitle,

    /// Destination is missing or blank.
    #[error("offer destination is required")]
    MissingDestination,

    /// Price was not provided.
    #[error("offer price is required")]
    MissingPrice,

    /// Category was not provided.
    #[error("offer category is required")]
    MissingCategory,

    /// Start date was not provided.
    #[error("offer start date is required")]
    MissingStartDate,

    /// Duration missing or zero.
    #[error("offer duration must be at least one day")]
    InvalidDuration,
}

/// Partially filled offer form.
///
/// Built field by field, validated once by [`OfferDraft::into_offer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferDraft {
    /// Title
    pub title: Option<String>,

    /// Description; empty when omitted
    pub description: Option<String>,

    /// Destination
    pub destination: Option<String>,

    /// Price in whole euros
    pub price: Option<u64>,

    /// Category
    pub category: Option<Category>,

    /// Image; [`PLACEHOLDER_IMAGE_URL`] when omitted
    pub image_url: Option<String>,

    /// Promoted flag
    pub is_special: bool,

    /// First departure date
    pub start_date: Option<Date>,

    /// Duration in days
    pub duration_days: Option<u32>,
}

impl OfferDraft {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the destination.
    #[must_use]
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the price.
    #[must_use]
    pub fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the image.
    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the promoted flag.
    #[must_use]
    pub fn special(mut self, is_special: bool) -> Self {
        self.is_special = is_special;
        self
    }

    /// Set the start date.
    #[must_use]
    pub fn start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Set the duration.
    #[must_use]
    pub fn duration_days(mut self, duration_days: u32) -> Self {
        self.duration_days = Some(duration_days);
        self
    }

    /// Validate the draft into a complete offer with the given id.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid required field.
    pub fn into_offer(self, id: OfferId) -> Result<Offer, OfferDraftError> {
        let title = non_blank(self.title).ok_or(OfferDraftError::MissingTitle)?;
        let destination = non_blank(self.destination).ok_or(OfferDraftError::MissingDestination)?;
        let price = self.price.ok_or(OfferDraftError::MissingPrice)?;
        let category = self.category.ok_or(OfferDraftError::MissingCategory)?;
        let start_date = self.start_date.ok_or(OfferDraftError::MissingStartDate)?;

        let duration_days = self
            .duration_days
            .filter(|days| *days >= 1)
            .ok_or(OfferDraftError::InvalidDuration)?;

        Ok(Offer {
            id,
            title,
            description: self.description.unwrap_or_default(),
            destination,
            price,
            category,
            image_url: non_blank(self.image_url)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            is_special: self.is_special,
            start_date,
            duration_days,
        })
    }
}

impl From<&Offer> for OfferDraft {
    fn from(offer: &Offer) -> Self {
        Self {
            title: Some(offer.title.clone()),
            description: Some(offer.description.clone()),
            destination: Some(offer.destination.clone()),
            price: Some(offer.price),
            category: Some(offer.category),
            image_url: Some(offer.image_url.clone()),
            is_special: offer.is_special,
            start_date: Some(offer.start_date),
            duration_days: Some(offer.duration_days),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
