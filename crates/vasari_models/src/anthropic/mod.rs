//! Anthropic Messages API wire types.

mod client;

pub use client::AnthropicClient;

use serde::{Deserialize, Serialize};

/// Request body for the Messages API.
#[derive(Debug, Clone, Serialize, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Ordered conversation messages
    messages: Vec<AnthropicMessage>,
}

/// A single message in a Messages API request.
#[derive(Debug, Clone, Serialize, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    role: String,
    /// Content blocks carried by this message
    content: Vec<AnthropicContentBlock>,
}

/// A request-side content block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AnthropicContentBlock {
    /// Plain text block
    #[serde(rename = "text")]
    Text {
        /// The block text
        text: String,
    },
}

/// Response body from the Messages API.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Generated content blocks
    content: Vec<AnthropicContent>,
    /// Model that produced the response
    model: String,
    /// Why generation stopped, when reported
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token accounting for the call
    usage: AnthropicUsage,
}

/// A response-side content block.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct AnthropicContent {
    /// Block discriminator (e.g. "text")
    #[serde(rename = "type")]
    content_type: String,
    /// The block text
    #[serde(default)]
    text: String,
}

/// Token usage reported with a response.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct AnthropicUsage {
    /// Tokens consumed by the request
    input_tokens: u32,
    /// Tokens generated in the response
    output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = AnthropicRequestBuilder::default()
            .model("claude-3-opus-20240229")
            .max_tokens(200u32)
            .messages(vec![
                AnthropicMessageBuilder::default()
                    .role("user")
                    .content(vec![AnthropicContentBlock::Text {
                        text: "Analyze this prompt".to_string(),
                    }])
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-opus-20240229");
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][0]["text"], "Analyze this prompt");
    }

    #[test]
    fn response_deserializes_from_sample() {
        let body = r#"{
            "id": "msg_01",
            "content": [
                {"type": "text", "text": "The key components are X and Y."}
            ],
            "model": "claude-3-opus-20240229",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 9}
        }"#;

        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id(), "msg_01");
        assert_eq!(response.content().len(), 1);
        assert_eq!(response.content()[0].text(), "The key components are X and Y.");
        assert_eq!(*response.usage().output_tokens(), 9);
    }
}
