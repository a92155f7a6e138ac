use crate::{
    AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest,
    AnthropicRequestBuilder, AnthropicResponse,
};
use reqwest::Client;
use tracing::{debug, error, instrument};
use vasari_core::{ContentPart, GenerateRequest, Role, StageResponse};
use vasari_error::{ModelsError, ModelsErrorKind};
use vasari_interface::ModelDriver;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic API client.
///
/// The credential and model are constructor-injected; the client holds no
/// process-wide state.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-opus-20240229")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, ModelsError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(ModelsErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(ModelsErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a generation request to an Anthropic API request.
    #[instrument(skip(request))]
    fn convert_request(&self, request: &GenerateRequest) -> Result<AnthropicRequest, ModelsError> {
        debug!("Converting GenerateRequest to AnthropicRequest");

        let messages: Result<Vec<AnthropicMessage>, ModelsError> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };

                AnthropicMessageBuilder::default()
                    .role(role)
                    .content(vec![AnthropicContentBlock::Text {
                        text: msg.content.clone(),
                    }])
                    .build()
                    .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
            })
            .collect();

        let messages = messages?;

        AnthropicRequestBuilder::default()
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .messages(messages)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }

    /// Converts an Anthropic API response to a raw stage response.
    fn convert_response(response: &AnthropicResponse) -> StageResponse {
        let parts: Vec<ContentPart> = response
            .content()
            .iter()
            .map(|content| ContentPart {
                kind: content.content_type().clone(),
                text: content.text().clone(),
            })
            .collect();

        StageResponse::Parts(parts)
    }
}

#[async_trait::async_trait]
impl ModelDriver for AnthropicClient {
    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<StageResponse, vasari_error::VasariError> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;

        Ok(Self::convert_response(&anthropic_response))
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
