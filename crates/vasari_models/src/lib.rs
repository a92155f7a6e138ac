//! LLM provider integration for the Vasari MVP generator.
//!
//! Currently one provider: the Anthropic Messages API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContent, AnthropicContentBlock, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage,
};
