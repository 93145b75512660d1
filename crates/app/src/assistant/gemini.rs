//! Gemini client for the Generative Language REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::assistant::{AssistantError, ChatRole, GenerativeClient, TextRequest};

/// Voice used for narration.
const NARRATION_VOICE: &str = "Kore";

/// Configuration for connecting to the Generative Language API.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API base URL, e.g. `"https://generativelanguage.googleapis.com"`.
    pub base_url: String,

    /// API key.
    pub api_key: Zeroizing<String>,

    /// Model used for text generation.
    pub model: String,

    /// Model used for speech generation.
    pub tts_model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("tts_model", &self.tts_model)
            .finish_non_exhaustive()
    }
}

/// HTTP client for Gemini `generateContent` calls.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(%model, "calling generative service");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AssistantError::UnexpectedResponse(format!(
                "generateContent failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, AssistantError> {
        let body = GenerateContentRequest::for_text(&request);
        let response = self.generate_content(&self.config.model, &body).await?;

        let text: String = response
            .first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(AssistantError::Empty);
        }

        Ok(text)
    }

    async fn generate_speech(&self, text: &str) -> Result<String, AssistantError> {
        let body = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::text(ChatRole::User, text)],
            generation_config: Some(GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: NARRATION_VOICE,
                        },
                    },
                },
            }),
        };

        let response = self.generate_content(&self.config.tts_model, &body).await?;

        response
            .first_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref().map(|data| data.data.clone()))
            .ok_or(AssistantError::Empty)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    fn for_text(request: &'a TextRequest) -> Self {
        let mut contents: Vec<Content<'a>> = request
            .history
            .iter()
            .map(|turn| Content::text(turn.role, &turn.text))
            .collect();

        contents.push(Content::text(ChatRole::User, &request.prompt));

        Self {
            system_instruction: request
                .system
                .as_deref()
                .map(|system| Content::text(ChatRole::User, system)),
            contents,
            generation_config: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

impl<'a> Content<'a> {
    fn text(role: ChatRole, text: &'a str) -> Self {
        Self {
            role: match role {
                ChatRole::User => "user",
                ChatRole::Model => "model",
            },
            parts: [TextPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map_or(&[], |content| content.parts.as_slice())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}
