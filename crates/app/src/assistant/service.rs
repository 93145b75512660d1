//! Assistant features built on a [`GenerativeClient`].

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::{debug, warn};
use voyage::{offers::Offer, search::SearchFilters};

use crate::assistant::{AssistantError, ChatTurn, GenerativeClient, TextRequest, prompts};

/// Returned by every text feature when no API key is configured.
pub const NOT_CONFIGURED: &str = "The travel assistant is not configured.";

/// Returned when a description could not be generated.
pub const DESCRIPTION_FALLBACK: &str = "Could not generate a description.";

/// Returned when the chat service fails.
pub const CHAT_FALLBACK: &str =
    "Sorry, I can't answer right now. Please try again in a moment.";

/// Returned when an itinerary could not be generated.
pub const ITINERARY_FALLBACK: &str = "Could not generate an itinerary for this offer.";

/// Generative features for the storefront.
///
/// None of the methods fail: client errors are logged and replaced with a
/// fixed fallback, so a broken or missing service never breaks a page.
#[derive(Clone, Default)]
pub struct Assistant {
    client: Option<Arc<dyn GenerativeClient>>,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl Assistant {
    #[must_use]
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// An assistant that answers every call with [`NOT_CONFIGURED`].
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Short marketing copy for an offer being edited.
    pub async fn describe_offer(&self, title: &str, destination: &str, category: &str) -> String {
        let request = TextRequest::prompt(prompts::describe_offer(title, destination, category));

        self.text_or(request, DESCRIPTION_FALLBACK, "describe_offer")
            .await
    }

    /// Answer `message` given the current catalog and the earlier turns.
    pub async fn chat(&self, offers: &[Offer], history: &[ChatTurn], message: &str) -> String {
        let request = TextRequest {
            system: Some(prompts::chat_system(offers)),
            history: history.to_vec(),
            prompt: message.to_string(),
        };

        self.text_or(request, CHAT_FALLBACK, "chat").await
    }

    /// Turn a free-text query into search filters.
    ///
    /// `None` when the assistant is unavailable or its answer does not decode.
    pub async fn parse_search_query(&self, query: &str) -> Option<SearchFilters> {
        let client = self.client.as_ref()?;

        match client
            .generate_text(TextRequest::prompt(prompts::search_filters(query)))
            .await
        {
            Ok(text) => {
                let filters = SearchFilters::from_suggestion(&text);

                if filters.is_none() {
                    warn!(%query, "assistant suggestion did not decode as filters");
                }

                filters
            }
            Err(error) => {
                warn!(%error, "assistant search query failed");

                None
            }
        }
    }

    /// Day-by-day plan for an offer.
    pub async fn itinerary(&self, offer: &Offer) -> String {
        let request = TextRequest::prompt(prompts::itinerary(offer));

        self.text_or(request, ITINERARY_FALLBACK, "itinerary").await
    }

    /// Spoken rendition of `text` as raw audio bytes.
    pub async fn narrate(&self, text: &str) -> Option<Vec<u8>> {
        let client = self.client.as_ref()?;

        let audio = client
            .generate_speech(&prompts::narration(text))
            .await
            .and_then(|encoded| Ok(STANDARD.decode(encoded)?));

        match audio {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => {
                warn!(error = %AssistantError::Empty, "assistant narration failed");

                None
            }
            Err(error) => {
                warn!(%error, "assistant narration failed");

                None
            }
        }
    }

    async fn text_or(&self, request: TextRequest, fallback: &str, feature: &str) -> String {
        let Some(client) = self.client.as_ref() else {
            debug!(%feature, "assistant not configured");

            return NOT_CONFIGURED.to_string();
        };

        match client.generate_text(request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!(%feature, error = %AssistantError::Empty, "assistant call failed");

                fallback.to_string()
            }
            Err(error) => {
                warn!(%feature, %error, "assistant call failed");

                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use voyage::{offers::Category, search::SortKey, seed::seed_catalog};

    use crate::assistant::MockGenerativeClient;

    use super::*;

    fn assistant(client: MockGenerativeClient) -> Assistant {
        Assistant::new(Arc::new(client))
    }

    #[tokio::test]
    async fn unconfigured_assistant_answers_with_fallback() {
        let assistant = Assistant::disabled();

        assert!(!assistant.is_configured());
        assert_eq!(
            assistant.describe_offer("Bali", "Indonesia", "Stay").await,
            NOT_CONFIGURED
        );
        assert_eq!(assistant.chat(&[], &[], "hello").await, NOT_CONFIGURED);
        assert_eq!(assistant.parse_search_query("cheap cruise").await, None);
        assert_eq!(assistant.narrate("hello").await, None);
    }

    #[tokio::test]
    async fn describe_offer_returns_generated_text() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_text()
            .withf(|request| request.prompt.contains("\"Kenya Safari\"") && request.system.is_none())
            .times(1)
            .returning(|_| Ok("Roar into adventure!".to_string()));

        let text = assistant(client)
            .describe_offer("Kenya Safari", "Kenya", "Tour")
            .await;

        assert_eq!(text, "Roar into adventure!");
    }

    #[tokio::test]
    async fn client_error_becomes_fallback() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_text()
            .returning(|_| Err(AssistantError::UnexpectedResponse("503".to_string())));

        let assistant = assistant(client);

        assert_eq!(
            assistant.describe_offer("a", "b", "c").await,
            DESCRIPTION_FALLBACK
        );
        assert_eq!(assistant.chat(&[], &[], "hi").await, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn blank_answer_becomes_fallback() -> TestResult {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_text()
            .returning(|_| Ok("  \n".to_string()));

        let offer = seed_catalog()?
            .into_iter()
            .next()
            .ok_or("empty seed catalog")?;

        assert_eq!(assistant(client).itinerary(&offer).await, ITINERARY_FALLBACK);

        Ok(())
    }

    #[tokio::test]
    async fn chat_sends_catalog_context_and_history() -> TestResult {
        let offers = seed_catalog()?;
        let history = vec![ChatTurn::user("Hi"), ChatTurn::model("Hello!")];
        let expected_history = history.clone();

        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_text()
            .withf(move |request| {
                request.history == expected_history
                    && request.prompt == "Something warm?"
                    && request
                        .system
                        .as_deref()
                        .is_some_and(|system| system.contains("Bali Getaway"))
            })
            .returning(|_| Ok("Try Bali!".to_string()));

        let reply = assistant(client)
            .chat(&offers, &history, "Something warm?")
            .await;

        assert_eq!(reply, "Try Bali!");

        Ok(())
    }

    #[tokio::test]
    async fn search_query_decodes_suggested_filters() {
        let mut client = MockGenerativeClient::new();
        client.expect_generate_text().returning(|_| {
            Ok("Sure:\n```json\n{\"category\": \"cruise\", \"maxPrice\": 1000, \"sort\": \"date\"}\n```"
                .to_string())
        });

        let filters = assistant(client).parse_search_query("cheap cruise").await;

        assert_eq!(
            filters,
            Some(SearchFilters {
                category: Some(Category::Cruise),
                max_price: 1000,
                sort: SortKey::SoonestDate,
                ..SearchFilters::default()
            })
        );
    }

    #[tokio::test]
    async fn undecodable_suggestion_is_none() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_text()
            .returning(|_| Ok("I have no idea".to_string()));

        assert_eq!(assistant(client).parse_search_query("???").await, None);
    }

    #[tokio::test]
    async fn narrate_decodes_audio() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_speech()
            .withf(|text| text == prompts::narration("Welcome"))
            .returning(|_| Ok("AAEC".to_string()));

        assert_eq!(assistant(client).narrate("Welcome").await, Some(vec![0, 1, 2]));
    }

    #[tokio::test]
    async fn narrate_rejects_invalid_base64() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate_speech()
            .returning(|_| Ok("not base64!".to_string()));

        assert_eq!(assistant(client).narrate("Welcome").await, None);
    }
}
