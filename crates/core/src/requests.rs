//! Client Requests

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ids::TypedId,
    offers::{OfferId, non_blank},
};

/// Client Request Id
pub type RequestId = TypedId<ClientRequest>;

/// Processing state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Not yet looked at.
    #[serde(rename = "new", alias = "Nouveau")]
    New,

    /// An agent is handling it.
    #[serde(rename = "in-progress", alias = "En cours")]
    InProgress,

    /// Answered.
    #[serde(rename = "processed", alias = "Traité")]
    Processed,
}

impl RequestStatus {
    /// Wire name, also accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Processed => "processed",
        }
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error parsing a request status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "nouveau" => Ok(Self::New),
            "in-progress" | "in_progress" | "en cours" => Ok(Self::InProgress),
            "processed" | "traité" => Ok(Self::Processed),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Value copy of the offer a request was made about.
///
/// Not a foreign key: the offer may be deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRef {
    /// Offer id; absent for general contact requests
    pub id: Option<OfferId>,

    /// Offer title at the time of the request
    pub title: String,
}

/// An inbound contact or quote inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    /// Unique id
    pub id: RequestId,

    /// Offer id snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<OfferId>,

    /// Offer title snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_title: Option<String>,

    /// Client name
    pub client_name: String,

    /// Client email
    pub client_email: String,

    /// Client phone; may be empty
    #[serde(default)]
    pub client_phone: String,

    /// Message body
    pub message: String,

    /// Processing state; only administrators change it
    pub status: RequestStatus,

    /// Set once at submission
    pub created_at: Timestamp,
}

impl ClientRequest {
    /// The offer snapshot, if the request carries one.
    pub fn offer(&self) -> Option<OfferRef> {
        self.offer_title.as_ref().map(|title| OfferRef {
            id: self.offer_id.clone(),
            title: title.clone(),
        })
    }
}

/// Request draft validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestDraftError {
    /// Name missing or blank.
    #[error("client name is required")]
    MissingName,

    /// Email missing or not an address.
    #[error("a valid client email is required")]
    InvalidEmail,

    /// Message missing or blank.
    #[error("message is required")]
    MissingMessage,
}

/// Where the request form was submitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOrigin {
    /// Contact page, with a free-text subject.
    Contact {
        /// Subject line
        subject: String,
    },

    /// An offer's detail page.
    Offer {
        /// Offer id
        id: OfferId,

        /// Offer title
        title: String,
    },
}

/// Submitted request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    /// Form origin
    pub origin: RequestOrigin,

    /// Client name
    pub client_name: String,

    /// Client email
    pub client_email: String,

    /// Client phone
    pub client_phone: String,

    /// Message body
    pub message: String,
}

impl RequestDraft {
    /// Validate the draft into a `New` request created at `now`.
    ///
    /// # Errors
    ///
    /// Returns the first missing or invalid field.
    pub fn into_request(
        self,
        id: RequestId,
        now: Timestamp,
    ) -> Result<ClientRequest, RequestDraftError> {
        let client_name =
            non_blank(Some(self.client_name)).ok_or(RequestDraftError::MissingName)?;

        let client_email = non_blank(Some(self.client_email))
            .filter(|email| email.contains('@'))
            .ok_or(RequestDraftError::InvalidEmail)?;

        let message = non_blank(Some(self.message)).ok_or(RequestDraftError::MissingMessage)?;

        let (offer_id, offer_title) = match self.origin {
            RequestOrigin::Contact { subject } => (None, format!("Contact: {}", subject.trim())),
            RequestOrigin::Offer { id, title } => (Some(id), title),
        };

        Ok(ClientRequest {
            id,
            offer_id,
            offer_title: Some(offer_title),
            client_name,
            client_email,
            client_phone: self.client_phone.trim().to_string(),
            message,
            status: RequestStatus::New,
            created_at: now,
        })
    }
}

/// Request counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestStats {
    /// All requests
    pub total: usize,

    /// `New`
    pub new: usize,

    /// `InProgress`
    pub in_progress: usize,

    /// `Processed`
    pub processed: usize,
}

impl RequestStats {
    /// Count requests by status.
    pub fn from_requests(requests: &[ClientRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut stats, request| {
            stats.total += 1;

            match request.status {
                RequestStatus::New => stats.new += 1,
                RequestStatus::InProgress => stats.in_progress += 1,
                RequestStatus::Processed => stats.processed += 1,
            }

            stats
        })
    }
}
